//! Integration test: drive the `greyscale` binary and check exit codes
//! and which stream each message lands on.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::path::PathBuf;
use std::process::{Command, Output};

use image::{Rgba, RgbaImage};

fn greyscale(args: &[&std::ffi::OsStr]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_greyscale"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("binary should start")
}

/// A scratch directory under the system temp dir, removed on drop.
struct Scratch(PathBuf);

impl Scratch {
    fn new(name: &str) -> Self {
        let dir = std::env::temp_dir().join(format!(
            "greyscale-cli-{}-{name}",
            std::process::id()
        ));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        Self(dir)
    }
}

impl Drop for Scratch {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.0);
    }
}

#[test]
fn no_input_prints_usage_to_stdout_and_exits_1() {
    let out = greyscale(&[]);
    assert_eq!(out.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Usage:"), "stdout was: {stdout}");
    assert!(out.stderr.is_empty(), "stderr was not empty");
}

#[test]
fn missing_file_reports_on_stderr_and_fails() {
    let scratch = Scratch::new("missing");
    let input = scratch.0.join("nonexistent.png");
    let out = greyscale(&[input.as_os_str()]);
    assert_ne!(out.status.code(), Some(0));
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(
        stderr.contains("Error opening input file") && stderr.contains("nonexistent.png"),
        "stderr was: {stderr}"
    );
    assert!(out.stdout.is_empty(), "stdout was not empty");
}

#[test]
fn unrecognized_input_fails_without_progress_output() {
    let scratch = Scratch::new("text");
    let input = scratch.0.join("notes.txt");
    std::fs::write(&input, "plain text").unwrap();
    let out = greyscale(&[input.as_os_str()]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("Error decoding image"));
    assert!(out.stdout.is_empty());
}

#[test]
fn success_prints_progress_and_exits_0() {
    let scratch = Scratch::new("ok");
    let input = scratch.0.join("pixels.png");
    RgbaImage::from_pixel(3, 2, Rgba([200, 100, 50, 255]))
        .save(&input)
        .unwrap();

    let out = greyscale(&[input.as_os_str()]);
    assert_eq!(out.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("(format: png)"), "stdout was: {stdout}");
    assert!(stdout.contains("Conversion complete."), "stdout was: {stdout}");
    assert!(
        stdout.contains("pixels_greyscale.png"),
        "stdout was: {stdout}"
    );

    let written = image::open(scratch.0.join("pixels_greyscale.png"))
        .unwrap()
        .to_rgba8();
    assert!(written.pixels().all(|p| *p == Rgba([124, 124, 124, 255])));
}

#[cfg(unix)]
#[test]
fn non_utf8_input_name_is_kept_in_output_name() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let scratch = Scratch::new("bytes");
    let input = scratch.0.join(OsStr::from_bytes(b"caf\xe9.png"));
    RgbaImage::from_pixel(2, 1, Rgba([10, 20, 30, 0]))
        .save(&input)
        .unwrap();

    let out = greyscale(&[input.as_os_str()]);
    assert!(out.status.success());
    assert!(scratch.0.join(OsStr::from_bytes(b"caf\xe9_greyscale.png")).exists());
}

extern crate assert_cmd;
extern crate mandelbrot;
extern crate predicates;
extern crate tempfile;

use assert_cmd::prelude::*;
use mandelbrot::PpmImage;
use predicates::prelude::*;
use std::fs;
use std::process::Command;

#[test]
fn non_numeric_threshold_is_rejected() {
    Command::cargo_bin("mandel")
        .unwrap()
        .arg("abc")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a decimal number").from_utf8());
}

#[test]
fn missing_threshold_falls_back_with_a_notice() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("m.ppm");
    Command::cargo_bin("mandel")
        .unwrap()
        .args(&["--size", "8x8", "--iterations", "32", "-o"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Using default threshold: 2").from_utf8());
    assert!(out.exists());
}

#[test]
fn explicit_threshold_renders_without_the_notice() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("m.ppm");
    Command::cargo_bin("mandel")
        .unwrap()
        .arg("2.5")
        .args(&["--size", "8x8", "--iterations", "32", "-o"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("default threshold").not().from_utf8());
}

#[test]
fn output_is_a_binary_ppm_of_the_requested_size() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("tiny.ppm");
    Command::cargo_bin("mandel")
        .unwrap()
        .args(&["--size", "8x6", "--iterations", "32", "--palette", "wave", "-o"])
        .arg(&out)
        .assert()
        .success();

    let bytes = fs::read(&out).unwrap();
    assert_eq!(&bytes[..2], b"P6");

    let image = PpmImage::load(&out).unwrap();
    assert_eq!(image.width(), 8);
    assert_eq!(image.height(), 6);
}

#[test]
fn misordered_viewport_fails_with_a_nonzero_exit() {
    Command::cargo_bin("mandel")
        .unwrap()
        .args(&["--size", "8x8", "--leftlower", "1.0,1.0", "--rightupper", "-2.0,-1.0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid viewport").from_utf8());
}

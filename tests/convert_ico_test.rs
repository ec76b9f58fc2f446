use assert_cmd::Command;
use image::{Rgba, RgbaImage};
use predicates::prelude::*;
use std::fs;

fn convert_ico() -> Command {
    Command::cargo_bin("convert-ico").unwrap()
}

#[test]
fn converts_png_to_256_icon() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("logo.png");
    let output = dir.path().join("logo.ico");
    RgbaImage::from_pixel(40, 20, Rgba([136, 192, 208, 255]))
        .save(&input)
        .unwrap();

    convert_ico()
        .arg(&input)
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Successfully converted"));

    let icon = ico::IconDir::read(fs::File::open(&output).unwrap()).unwrap();
    assert_eq!(icon.entries().len(), 1);
    let frame = icon.entries()[0].decode().unwrap();
    assert_eq!((frame.width(), frame.height()), (256, 256));
}

#[test]
fn wrong_argument_count_prints_usage() {
    convert_ico()
        .arg("only-one.png")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: convert-ico"));

    convert_ico()
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: convert-ico"));
}

#[test]
fn extra_positional_prints_usage() {
    convert_ico()
        .args(["a.png", "b.ico", "c.ico"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: convert-ico"));
}

#[test]
fn unknown_flag_is_a_clap_error() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("logo.png");
    let output = dir.path().join("logo.ico");
    RgbaImage::from_pixel(8, 8, Rgba([0, 0, 255, 255]))
        .save(&input)
        .unwrap();

    convert_ico()
        .arg("-x")
        .arg(&input)
        .arg(&output)
        .assert()
        .code(2)
        .stdout(predicate::str::contains("Usage: convert-ico").not())
        .stderr(predicate::str::contains("unexpected argument"));
    assert!(!output.exists());
}

#[test]
fn missing_input_fails() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("out.ico");

    convert_ico()
        .arg(dir.path().join("missing.png"))
        .arg(&output)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error converting"));
    assert!(!output.exists());
}

#[test]
fn unsupported_input_fails() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("notes.txt");
    fs::write(&input, "not an image").unwrap();

    convert_ico()
        .arg(&input)
        .arg(dir.path().join("out.ico"))
        .assert()
        .code(1);
}

#[test]
fn unwritable_output_fails() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("logo.png");
    RgbaImage::from_pixel(8, 8, Rgba([255, 0, 0, 255]))
        .save(&input)
        .unwrap();

    convert_ico()
        .arg(&input)
        .arg(dir.path().join("no-such-dir").join("out.ico"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot write"));
}

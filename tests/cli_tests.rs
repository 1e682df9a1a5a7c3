mod common;

use common::TestResult;
use common::fixtures::*;
use std::fs;
use std::path::Path;
use std::process::{Command, Output};

fn fontscale(args: &[&str], cwd: &Path) -> std::io::Result<Output> {
    Command::new(env!("CARGO_BIN_EXE_fontscale"))
        .args(args)
        .current_dir(cwd)
        .env("RUST_LOG", "warn")
        .output()
}

#[test]
fn test_prints_to_stdout() -> TestResult {
    let dir = tempfile::tempdir()?;
    fs::write(dir.path().join("a.css"), ".text-sm { font-size: 16px }\n")?;
    fs::write(dir.path().join("b.css"), ".leading-5 { line-height: 20px }\n")?;

    let output = fontscale(&["a.css", "b.css"], dir.path())?;
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    assert_eq!(
        String::from_utf8(output.stdout)?,
        ".text-base { font-size: 19px }\n.leading-6 { line-height: 24px }\n"
    );
    Ok(())
}

#[test]
fn test_out_dir_with_source_maps() -> TestResult {
    let dir = tempfile::tempdir()?;
    fs::write(dir.path().join("utilities.css"), UTILITIES_CSS)?;
    fs::write(dir.path().join("Card.vue"), COMPONENT_VUE)?;
    fs::write(dir.path().join("notes.txt"), "font-size: 16px")?;

    let output = fontscale(
        &["utilities.css", "Card.vue", "notes.txt", "--out-dir", "dist", "--source-map"],
        dir.path(),
    )?;
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let dist = dir.path().join("dist");
    assert_eq!(fs::read_to_string(dist.join("utilities.css"))?, UTILITIES_CSS_SCALED);
    assert_eq!(fs::read_to_string(dist.join("Card.vue"))?, COMPONENT_VUE_SCALED);
    // Skipped files are copied through unchanged.
    assert_eq!(fs::read_to_string(dist.join("notes.txt"))?, "font-size: 16px");

    let map: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(dist.join("utilities.css.map"))?)?;
    assert_eq!(map["version"], 3);
    assert_eq!(map["sources"][0], "utilities.css");
    assert!(!dist.join("Card.vue.map").exists());
    assert!(!dist.join("notes.txt.map").exists());
    Ok(())
}

#[test]
fn test_in_place_with_config_file() -> TestResult {
    let dir = tempfile::tempdir()?;
    fs::write(
        dir.path().join("fontscale.json"),
        r#"{ "include": "**/*.scss", "policy": "additive" }"#,
    )?;
    fs::write(dir.path().join("theme.scss"), "$x: 1; h1 { font-size: 2rem }")?;
    fs::write(dir.path().join("plain.css"), "h1 { font-size: 2rem }")?;

    let output = fontscale(
        &["theme.scss", "plain.css", "--config", "fontscale.json", "--in-place"],
        dir.path(),
    )?;
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    assert_eq!(
        fs::read_to_string(dir.path().join("theme.scss"))?,
        "$x: 1; h1 { font-size: 2.5rem }"
    );
    assert_eq!(fs::read_to_string(dir.path().join("plain.css"))?, "h1 { font-size: 2rem }");
    Ok(())
}

#[test]
fn test_flags_override_config() -> TestResult {
    let dir = tempfile::tempdir()?;
    fs::write(dir.path().join("fontscale.json"), r#"{ "policy": "additive" }"#)?;
    fs::write(dir.path().join("a.css"), "a { font-size: 20px }")?;

    let output = fontscale(
        &["a.css", "--config", "fontscale.json", "--policy", "proportional"],
        dir.path(),
    )?;
    assert_eq!(String::from_utf8(output.stdout)?, "a { font-size: 24px }");

    let output = fontscale(&["a.css", "--disable"], dir.path())?;
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    Ok(())
}

#[test]
fn test_malformed_file_passes_through() -> TestResult {
    let dir = tempfile::tempdir()?;
    fs::write(dir.path().join("broken.css"), MALFORMED_CSS[0])?;

    let output = fontscale(&["broken.css"], dir.path())?;
    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout)?, MALFORMED_CSS[0]);
    Ok(())
}

#[test]
fn test_conflicting_targets_fail() -> TestResult {
    let dir = tempfile::tempdir()?;
    fs::write(dir.path().join("a.css"), "a {}")?;

    let output = fontscale(&["a.css", "--in-place", "--out-dir", "dist"], dir.path())?;
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("cannot be combined"));
    Ok(())
}

#[test]
fn test_invalid_config_fails() -> TestResult {
    let dir = tempfile::tempdir()?;
    fs::write(dir.path().join("bad.json"), r#"{ "include": { "regex": "(" } }"#)?;
    fs::write(dir.path().join("a.css"), "a {}")?;

    let output = fontscale(&["a.css", "--config", "bad.json"], dir.path())?;
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid regular expression"));
    Ok(())
}

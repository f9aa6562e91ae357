//! End-to-end tests for the `ketbook` binary.
//!
//! Each test runs the built binary with an isolated `HOME` so a developer's
//! `~/.ketbook/config.yaml` cannot leak into the results.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

const PNG_MAGIC: [u8; 4] = [0x89, 0x50, 0x4E, 0x47];

fn ketbook(home: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_ketbook"))
        .args(args)
        .env("HOME", home)
        .env_remove("KETBOOK_CONFIG")
        .env_remove("KETBOOK_PRETTY")
        .env_remove("KETBOOK_LOG_LEVEL")
        .env_remove("KETBOOK_LOG_FORMAT")
        .output()
        .expect("failed to run ketbook binary")
}

fn write_file(dir: &TempDir, name: &str, bytes: &[u8]) -> String {
    let path = dir.path().join(name);
    fs::write(&path, bytes).unwrap();
    path.to_string_lossy().into_owned()
}

// ============================================================================
// render
// ============================================================================

#[test]
fn test_render_png_prefix_to_stdout() {
    let dir = TempDir::new().unwrap();
    let input = write_file(&dir, "prefix.png", &PNG_MAGIC);

    let out = ketbook(dir.path(), &["render", "--input", &input]);
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));

    let stdout = String::from_utf8(out.stdout).unwrap();
    assert_eq!(stdout, "{\"image/png\":\"iVBORw==\"}\n");
}

#[test]
fn test_render_empty_file() {
    let dir = TempDir::new().unwrap();
    let input = write_file(&dir, "empty.png", b"");

    let out = ketbook(dir.path(), &["render", "-i", &input]);
    assert!(out.status.success());

    let value: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(value, serde_json::json!({ "image/png": "" }));
}

#[test]
fn test_render_pretty_output_file() {
    let dir = TempDir::new().unwrap();
    let input = write_file(&dir, "prefix.png", &PNG_MAGIC);
    let output = dir.path().join("bundle.json");

    let out = ketbook(
        dir.path(),
        &[
            "render",
            "-i",
            &input,
            "-o",
            output.to_str().unwrap(),
            "--pretty",
        ],
    );
    assert!(out.status.success());
    assert!(out.stdout.is_empty());

    let written = fs::read_to_string(&output).unwrap();
    assert!(written.contains('\n'));
    let value: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(value, serde_json::json!({ "image/png": "iVBORw==" }));
}

#[test]
fn test_render_missing_file_fails() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.png");

    let out = ketbook(dir.path(), &["render", "-i", missing.to_str().unwrap()]);
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());

    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Error:"), "{stderr}");
    assert!(stderr.contains("failed to load image asset"), "{stderr}");
}

// ============================================================================
// configuration
// ============================================================================

#[test]
fn test_pretty_from_env() {
    let dir = TempDir::new().unwrap();
    let input = write_file(&dir, "prefix.png", &PNG_MAGIC);

    let out = Command::new(env!("CARGO_BIN_EXE_ketbook"))
        .args(["render", "-i", &input])
        .env("HOME", dir.path())
        .env_remove("KETBOOK_CONFIG")
        .env("KETBOOK_PRETTY", "true")
        .output()
        .unwrap();
    assert!(out.status.success());
    assert!(String::from_utf8(out.stdout).unwrap().contains("\n  "));
}

#[test]
fn test_default_config_file_in_home() {
    let dir = TempDir::new().unwrap();
    let input = write_file(&dir, "prefix.png", &PNG_MAGIC);
    fs::create_dir_all(dir.path().join(".ketbook")).unwrap();
    fs::write(
        dir.path().join(".ketbook").join("config.yaml"),
        "output:\n  pretty: true\n",
    )
    .unwrap();

    let out = ketbook(dir.path(), &["render", "-i", &input]);
    assert!(out.status.success());
    assert!(String::from_utf8(out.stdout).unwrap().contains("\n  "));
}

#[test]
fn test_invalid_config_fails() {
    let dir = TempDir::new().unwrap();
    let input = write_file(&dir, "prefix.png", &PNG_MAGIC);
    let config = write_file(&dir, "bad.yaml", b"logging:\n  format: xml\n");

    let out = ketbook(dir.path(), &["--config", &config, "render", "-i", &input]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("unknown log format"));
}

#[test]
fn test_logs_do_not_pollute_stdout() {
    let dir = TempDir::new().unwrap();
    let input = write_file(&dir, "prefix.png", &PNG_MAGIC);

    let out = ketbook(dir.path(), &["-vvv", "render", "-i", &input]);
    assert!(out.status.success());
    assert_eq!(
        String::from_utf8(out.stdout).unwrap(),
        "{\"image/png\":\"iVBORw==\"}\n"
    );
}

// ============================================================================
// version
// ============================================================================

#[test]
fn test_version_command() {
    let dir = TempDir::new().unwrap();
    let out = ketbook(dir.path(), &["version"]);
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
    assert!(stdout.contains("ketbook-display"));
}

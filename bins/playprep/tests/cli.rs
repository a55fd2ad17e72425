use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;

const TWO_FILES: &str = r#"
[[verify.files]]
label = "Readme"
path = "README.md"

[[verify.files]]
label = "App Icon"
path = "assets/logo.png"
"#;

fn playprep(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("playprep").unwrap();
    cmd.current_dir(dir).arg("--no-color").env_remove("RUST_LOG");
    cmd
}

fn workspace(config: &str) -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("playprep.toml"), config).unwrap();
    dir
}

fn create(dir: &Path, relative: &str) {
    let path = dir.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, "content").unwrap();
}

#[test]
fn verify_all_present_exits_zero() {
    let dir = workspace(TWO_FILES);
    create(dir.path(), "README.md");
    create(dir.path(), "assets/logo.png");

    playprep(dir.path())
        .args(["--config", "playprep.toml", "verify"])
        .assert()
        .success()
        .stdout(predicate::str::contains("✅ Readme: README.md"))
        .stdout(predicate::str::contains("✅ App Icon: assets/logo.png"))
        .stdout(predicate::str::contains("✅ ALL REQUIRED FILES ARE PRESENT"))
        .stdout(predicate::str::contains("Next steps:"));
}

#[test]
fn verify_missing_file_exits_with_validation_error() {
    let dir = workspace(TWO_FILES);
    create(dir.path(), "README.md");

    playprep(dir.path())
        .args(["--config", "playprep.toml", "verify"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("✅ Readme: README.md"))
        .stdout(predicate::str::contains("❌ App Icon: assets/logo.png"))
        .stdout(predicate::str::contains("❌ SOME FILES ARE MISSING"));
}

#[test]
fn verify_report_only_keeps_zero_exit() {
    let dir = workspace(TWO_FILES);

    playprep(dir.path())
        .args(["--config", "playprep.toml", "verify", "--report-only"])
        .assert()
        .success()
        .stdout(predicate::str::contains("SOME FILES ARE MISSING"));
}

#[test]
fn verify_output_is_stable_across_runs() {
    let dir = workspace(TWO_FILES);
    create(dir.path(), "README.md");

    let run = || {
        playprep(dir.path())
            .args(["--config", "playprep.toml", "verify"])
            .output()
            .unwrap()
            .stdout
    };
    assert_eq!(run(), run());
}

#[test]
fn verify_json_output() {
    let dir = workspace(TWO_FILES);
    create(dir.path(), "assets/logo.png");

    let output = playprep(dir.path())
        .args(["--config", "playprep.toml", "verify", "--json"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["aggregate"], "some_missing");
    assert_eq!(value["entries"][0]["present"], false);
    assert_eq!(value["entries"][1]["kind"], "file");
}

#[test]
fn verify_root_option() {
    let dir = workspace(TWO_FILES);
    create(dir.path(), "app/README.md");
    create(dir.path(), "app/assets/logo.png");

    playprep(dir.path())
        .args(["--config", "playprep.toml", "verify", "--root", "app"])
        .assert()
        .success();
}

#[test]
fn verify_io_error_exits_with_failure_and_json_report() {
    let overlong = "x".repeat(300);
    let dir = workspace(&format!("[[verify.files]]\nlabel = \"Overlong\"\npath = \"{overlong}\"\n"));

    let output = playprep(dir.path())
        .args(["--config", "playprep.toml", "verify", "--json"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["category"], "IO");
    assert_eq!(value["context"], "While checking Overlong");
}

#[test]
fn log_json_writes_structured_events() {
    let dir = workspace(TWO_FILES);

    playprep(dir.path())
        .args(["--config", "playprep.toml", "-v", "--log-json", "verify", "--report-only"])
        .assert()
        .success()
        .stderr(predicate::str::contains("\"level\":\"DEBUG\""))
        .stderr(predicate::str::contains("Verification complete"));
}

#[test]
fn missing_config_file_exits_with_config_error() {
    let dir = tempfile::tempdir().unwrap();

    playprep(dir.path())
        .args(["--config", "nope.toml", "verify"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Configuration file not found"));
}

#[test]
fn graphic_writes_png_with_configured_size() {
    let dir = workspace(
        r#"
        [graphic]
        font_paths = []
        output = "promotional-assets/feature-graphic.png"
        "#,
    );

    playprep(dir.path())
        .args(["--config", "playprep.toml", "graphic"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dimensions: 1024x500 pixels"))
        .stdout(predicate::str::contains("Background color: #009688 (Teal)"))
        .stdout(predicate::str::contains("Text color: White"));

    let output = dir.path().join("promotional-assets/feature-graphic.png");
    assert_eq!(image::image_dimensions(output).unwrap(), (1024, 500));
}

#[test]
fn graphic_rejects_bad_colour() {
    let dir = workspace("[graphic]\nbackground = \"teal\"\nfont_paths = []\n");

    playprep(dir.path())
        .args(["--config", "playprep.toml", "graphic", "--output", "out.png"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Invalid colour"));
    assert!(!dir.path().join("out.png").exists());
}

#[test]
fn graphic_rejects_oversized_settings() {
    let dir = workspace("[graphic]\nwidth = 100000\nfont_paths = []\n");

    playprep(dir.path())
        .args(["--config", "playprep.toml", "graphic", "--output", "out.png"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("graphic size must be between"));
    assert!(!dir.path().join("out.png").exists());

    let dir = workspace("[graphic]\ntitle_size = 1.0e9\nfont_paths = []\n");
    playprep(dir.path())
        .args(["--config", "playprep.toml", "graphic", "--output", "out.png"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("graphic.title_size"));
}

#[test]
fn screenshots_prints_guide() {
    let dir = workspace("[general]\napp_name = \"Budgetly\"\n");

    playprep(dir.path())
        .args(["--config", "playprep.toml", "screenshots"])
        .assert()
        .success()
        .stdout(predicate::str::contains("SCREENSHOT CAPTURE INSTRUCTIONS FOR ANDROID EMULATOR"))
        .stdout(predicate::str::contains("adb pull /sdcard/screenshot.png"))
        .stdout(predicate::str::contains("SUGGESTED SCREENSHOTS FOR BUDGETLY"));
}

#[test]
fn screenshots_check_fails_without_screenshots() {
    let dir = workspace("");
    fs::create_dir_all(dir.path().join("shots")).unwrap();

    playprep(dir.path())
        .args(["--config", "playprep.toml", "-q", "screenshots", "--check", "--dir", "shots"])
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("at least 2 required"))
        .stderr(predicate::str::contains("requirement(s) not met"));
}

#[test]
fn config_prints_effective_values() {
    let dir = workspace("[graphic]\ntitle = \"Budgetly\"\n");

    playprep(dir.path())
        .args(["--config", "playprep.toml", "config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("title = \"Budgetly\""))
        .stdout(predicate::str::contains("PRIVACY_POLICY.md"));
}

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn mockup_cmd(config_home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("coffeenote-mockup").expect("binary exists");
    cmd.env("XDG_CONFIG_HOME", config_home);
    cmd
}

fn png_dimensions(path: &Path) -> (i32, i32) {
    let mut file = fs::File::open(path).unwrap();
    let surface = cairo::ImageSurface::create_from_png(&mut file).unwrap();
    (surface.width(), surface.height())
}

#[test]
fn help_prints_usage() {
    let temp = TempDir::new().unwrap();
    mockup_cmd(temp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Renders the CoffeeNote personal center visual mockup to PNG",
        ));
}

#[test]
fn renders_one_png_at_requested_path() {
    let temp = TempDir::new().unwrap();
    let out_dir = temp.path().join("out");
    let output = out_dir.join("personal_center_ui.png");

    mockup_cmd(temp.path())
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "UI mock saved to {}",
            output.display()
        )));

    let entries: Vec<_> = fs::read_dir(&out_dir).unwrap().collect();
    assert_eq!(entries.len(), 1);

    let bytes = fs::read(&output).unwrap();
    assert!(!bytes.is_empty());
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    assert_eq!(png_dimensions(&output), (1500, 900));
}

#[test]
fn repeated_runs_are_byte_identical() {
    let temp = TempDir::new().unwrap();
    let first = temp.path().join("first.png");
    let second = temp.path().join("second.png");

    for path in [&first, &second] {
        mockup_cmd(temp.path())
            .arg("-o")
            .arg(path)
            .assert()
            .success();
    }

    assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());
}

#[test]
fn config_file_sets_output_and_fonts() {
    let temp = TempDir::new().unwrap();
    let output = temp.path().join("from-config.png");
    let config = temp.path().join("mockup.toml");
    fs::write(
        &config,
        format!(
            "[output]\npath = {:?}\n\n[fonts]\ncandidates = []\n",
            output.display().to_string()
        ),
    )
    .unwrap();

    mockup_cmd(temp.path())
        .arg("--config")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("from-config.png"));

    assert_eq!(png_dimensions(&output), (1500, 900));
}

#[test]
fn config_in_default_location_is_picked_up() {
    let temp = TempDir::new().unwrap();
    let config_dir = temp.path().join("coffeenote-mockup");
    fs::create_dir_all(&config_dir).unwrap();
    let output = temp.path().join("xdg.png");
    fs::write(
        config_dir.join("config.toml"),
        format!("[output]\npath = {:?}\n", output.display().to_string()),
    )
    .unwrap();

    mockup_cmd(temp.path()).assert().success();
    assert!(output.exists());
}

#[test]
fn invalid_config_fails() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("broken.toml");
    fs::write(&config, "[output\npath = ").unwrap();

    mockup_cmd(temp.path())
        .arg("--config")
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse config"));
}

#[test]
fn missing_config_file_fails() {
    let temp = TempDir::new().unwrap();
    mockup_cmd(temp.path())
        .arg("--config")
        .arg(temp.path().join("absent.toml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read config"));
}

#[test]
fn without_overrides_writes_next_to_executable() {
    let temp = TempDir::new().unwrap();
    let binary = assert_cmd::cargo::cargo_bin("coffeenote-mockup")
        .canonicalize()
        .unwrap();
    let output = binary.parent().unwrap().join("personal_center_ui.png");
    let _ = fs::remove_file(&output);

    mockup_cmd(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "UI mock saved to {}",
            output.display()
        )));

    assert!(fs::metadata(&output).unwrap().len() > 0);
    assert_eq!(png_dimensions(&output), (1500, 900));
    fs::remove_file(&output).unwrap();
}

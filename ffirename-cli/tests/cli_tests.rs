use assert_cmd::Command;
use assert_fs::prelude::*;
use assert_fs::TempDir;
use predicates::prelude::*;

fn ffirename() -> Command {
    let mut cmd = Command::cargo_bin("ffirename").unwrap();
    // Keep the user's own config out of the way
    cmd.env("FFIRENAME_CONFIG", "/nonexistent/ffirename/config.toml");
    cmd.env("NO_COLOR", "1");
    cmd
}

fn plate_with(files: &[(&str, &str)]) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let plate = temp_dir.child("plate");
    plate.create_dir_all().unwrap();
    for (name, content) in files {
        plate.child(name).write_str(content).unwrap();
    }
    temp_dir
}

#[test]
fn test_help_command() {
    ffirename()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("sibling `_new` folder"));
}

#[test]
fn test_version_command() {
    ffirename()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("ffirename"));
}

#[test]
fn test_renames_into_sibling_folder() {
    let temp_dir = plate_with(&[
        ("FFI-129 TopHat GREEN_E3_5_00d00h00m", "green"),
        ("FFI-7 X RED_A9_1_00d00h00m", "red"),
        ("notes.txt", "skip me"),
    ]);

    ffirename()
        .arg(temp_dir.child("plate").path())
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ Copied 2 of 3 entries"))
        .stdout(predicate::str::contains("Skipped 1 entries"))
        .stderr(predicate::str::contains("Renaming please wait..."))
        .stderr(predicate::str::contains("Done!"));

    let new_dir = temp_dir.child("plate_new");
    new_dir.child("129_1_E_03_2_2").assert("green");
    new_dir.child("7_2_A_09_1_1").assert("red");
    new_dir.child("notes.txt").assert(predicate::path::missing());

    // Originals are untouched
    temp_dir
        .child("plate")
        .child("FFI-129 TopHat GREEN_E3_5_00d00h00m")
        .assert("green");
}

#[test]
fn test_logs_selected_and_destination_folders() {
    let temp_dir = plate_with(&[]);

    ffirename()
        .arg(temp_dir.child("plate").path())
        .assert()
        .success()
        .stderr(predicate::str::contains("Selected folder for renaming is"))
        .stderr(predicate::str::contains("Folder for renamed files will be"))
        .stderr(predicate::str::contains("plate_new"));
}

#[test]
fn test_running_twice_succeeds() {
    let temp_dir = plate_with(&[("FFI-129 TopHat GREEN_E3_5_00d00h00m", "x")]);
    let plate = temp_dir.child("plate");

    ffirename().arg(plate.path()).assert().success();
    ffirename().arg(plate.path()).assert().success();

    temp_dir.child("plate_new").child("129_1_E_03_2_2").assert("x");
}

#[test]
fn test_json_output() {
    let temp_dir = plate_with(&[("FFI-7 X RED_A9_1_00d00h00m", "")]);

    let output = ffirename()
        .args(["--output", "json"])
        .arg(temp_dir.child("plate").path())
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["operation"], "rename");
    assert_eq!(json["summary"]["copied"], 1);
    assert_eq!(json["renames"][0]["renamed"], "7_2_A_09_1_1");
}

#[test]
fn test_unknown_slot_fails_generically() {
    let temp_dir = plate_with(&[("FFI-129 TopHat GREEN_E3_0_00d00h00m", "")]);

    ffirename()
        .arg(temp_dir.child("plate").path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Something went wrong!"))
        .stderr(predicate::str::contains("Unknown slot").not())
        .stderr(predicate::str::contains("Done!").not());
}

#[test]
fn test_verbose_failure_shows_cause() {
    let temp_dir = plate_with(&[("FFI-129 TopHat GREEN_E3_0_00d00h00m", "")]);

    ffirename()
        .arg("--verbose")
        .arg(temp_dir.child("plate").path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Something went wrong!"))
        .stderr(predicate::str::contains("Unknown slot '0'"));
}

#[test]
fn test_missing_folder_is_invalid_input() {
    let temp_dir = TempDir::new().unwrap();

    ffirename()
        .arg(temp_dir.child("absent").path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid folder"));

    temp_dir
        .child("absent_new")
        .assert(predicate::path::missing());
}

#[test]
fn test_no_folder_without_terminal_is_invalid_input() {
    ffirename()
        .write_stdin("")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("no folder given"));
}

#[test]
fn test_dry_run_lists_without_copying() {
    let temp_dir = plate_with(&[
        ("FFI-129 TopHat GREEN_E3_5_00d00h00m", ""),
        ("notes.txt", ""),
    ]);

    ffirename()
        .arg("--dry-run")
        .arg(temp_dir.child("plate").path())
        .assert()
        .success()
        .stdout(predicate::str::contains("129_1_E_03_2_2"))
        .stdout(predicate::str::contains("Dry run: 1 files would be copied"));

    temp_dir
        .child("plate_new")
        .assert(predicate::path::missing());
}

#[test]
fn test_dry_run_json() {
    let temp_dir = plate_with(&[("FFI-7 X RED_A9_1_00d00h00m", "")]);

    let output = ffirename()
        .args(["--dry-run", "--output", "json"])
        .arg(temp_dir.child("plate").path())
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["dry_run"], true);
    assert_eq!(json["renames"][0]["renamed"], "7_2_A_09_1_1");
}

#[test]
fn test_config_sets_default_output_format() {
    let temp_dir = plate_with(&[("FFI-7 X RED_A9_1_00d00h00m", "")]);
    let config = temp_dir.child("config.toml");
    config
        .write_str("[defaults]\noutput_format = \"json\"\n")
        .unwrap();

    ffirename()
        .env("FFIRENAME_CONFIG", config.path())
        .arg(temp_dir.child("plate").path())
        .assert()
        .success()
        .stdout(predicate::str::starts_with("{"));
}

#[test]
fn test_broken_config_is_reported() {
    let temp_dir = plate_with(&[]);
    let config = temp_dir.child("config.toml");
    config.write_str("defaults = 3").unwrap();

    ffirename()
        .arg("--config")
        .arg(config.path())
        .arg(temp_dir.child("plate").path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid config file"));
}

#[test]
fn test_quiet_keeps_report_only() {
    let temp_dir = plate_with(&[("FFI-7 X RED_A9_1_00d00h00m", "")]);

    ffirename()
        .arg("--quiet")
        .arg(temp_dir.child("plate").path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Copied 1 of 1"))
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_unknown_output_format_in_config_is_rejected() {
    let temp_dir = plate_with(&[("FFI-7 X RED_A9_1_00d00h00m", "")]);
    let config = temp_dir.child("config.toml");
    config
        .write_str("[defaults]\noutput_format = \"table\"\n")
        .unwrap();

    ffirename()
        .env("FFIRENAME_CONFIG", config.path())
        .arg(temp_dir.child("plate").path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid config file"))
        .stderr(predicate::str::contains("unknown output_format 'table'"));

    temp_dir
        .child("plate_new")
        .assert(predicate::path::missing());
}

#[test]
fn test_redirected_dry_run_table_has_no_escapes() {
    let temp_dir = plate_with(&[("FFI-129 TopHat GREEN_E3_5_00d00h00m", "")]);

    let output = Command::cargo_bin("ffirename")
        .unwrap()
        .env("FFIRENAME_CONFIG", "/nonexistent/ffirename/config.toml")
        .env_remove("NO_COLOR")
        .arg("--dry-run")
        .arg(temp_dir.child("plate").path())
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("New name"));
    assert!(!stdout.contains('\u{1b}'), "{stdout:?}");
}

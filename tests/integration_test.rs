#![allow(deprecated)] // assert_cmd::Command::cargo_bin is deprecated but replacement requires nightly

use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

fn uebackup_cmd() -> assert_cmd::Command {
	let mut cmd = assert_cmd::Command::cargo_bin("uebackup").unwrap();
	cmd.env("UEBACKUP_NO_USER_CONFIG", "1");
	cmd
}

/// Create `<temp>/Game` with a typical project layout and return `(temp, source, target)`.
fn project() -> (tempfile::TempDir, PathBuf, PathBuf) {
	let temp_dir = tempfile::tempdir().unwrap();
	let source = temp_dir.path().join("Game");
	let target = temp_dir.path().join("backups");

	write(&source, "Game.uproject", b"{}");
	write(&source, "Content/a.uasset", &[7u8; 10]);
	write(&source, "Binaries/Win64/Game.exe", b"x");
	write(&source, "Saved/Logs/Game.log", b"l");

	(temp_dir, source, target)
}

fn write(root: &Path, rel: &str, content: &[u8]) {
	let path = root.join(rel);
	fs::create_dir_all(path.parent().unwrap()).unwrap();
	fs::write(path, content).unwrap();
}

// ============================================================================
// CLI flag tests
// ============================================================================

#[test]
fn test_help_flag() {
	uebackup_cmd()
		.arg("--help")
		.assert()
		.success()
		.stdout(predicate::str::contains("incremental backup"))
		.stdout(predicate::str::contains("--dry-run"))
		.stdout(predicate::str::contains("--include-saved"));
}

#[test]
fn test_version_flag() {
	uebackup_cmd()
		.arg("--version")
		.assert()
		.success()
		.stdout(predicate::str::contains("uebackup"));
}

#[test]
fn test_missing_args_fails() {
	uebackup_cmd()
		.assert()
		.failure()
		.stderr(predicate::str::contains("Usage"));
}

// ============================================================================
// Backup runs
// ============================================================================

#[test]
fn test_default_run_summary() {
	let (_temp_dir, source, target) = project();

	uebackup_cmd()
		.arg(&source)
		.arg(&target)
		.assert()
		.success()
		.stdout(predicate::str::contains("=== Backup Summary ==="))
		.stdout(predicate::str::contains("Mode:     INCREMENTAL"))
		.stdout(predicate::str::contains("Scanned:  2"))
		.stdout(predicate::str::contains("Copied:   2"))
		.stdout(predicate::str::contains("Excluded: 2"))
		.stdout(predicate::str::contains("Failed:   0"))
		.stdout(predicate::str::contains("Size:     12.00 B"))
		.stdout(predicate::str::contains("[COPIED]").not());

	assert!(target.join("Game/Content/a.uasset").is_file());
	assert!(!target.join("Game/Binaries").exists());
	assert!(!target.join("Game/Saved").exists());
}

#[test]
fn test_second_run_skips_unchanged() {
	let (_temp_dir, source, target) = project();

	uebackup_cmd().arg(&source).arg(&target).assert().success();

	uebackup_cmd()
		.arg(&source)
		.arg(&target)
		.assert()
		.success()
		.stdout(predicate::str::contains("Copied:   0"))
		.stdout(predicate::str::contains("Skipped:  2"));
}

#[test]
fn test_full_flag_recopies() {
	let (_temp_dir, source, target) = project();

	uebackup_cmd().arg(&source).arg(&target).assert().success();

	uebackup_cmd()
		.arg(&source)
		.arg(&target)
		.arg("--full")
		.assert()
		.success()
		.stdout(predicate::str::contains("Mode:     FULL"))
		.stdout(predicate::str::contains("Copied:   2"))
		.stdout(predicate::str::contains("Skipped:  0"));
}

#[test]
fn test_dry_run_creates_nothing() {
	let (_temp_dir, source, target) = project();

	uebackup_cmd()
		.arg(&source)
		.arg(&target)
		.args(["--dry-run", "--verbose"])
		.assert()
		.success()
		.stdout(predicate::str::contains("[WOULD COPY] Content/a.uasset"))
		.stdout(predicate::str::contains("[EXCLUDE] Binaries/"))
		.stdout(predicate::str::contains("Copied:   2"))
		.stdout(predicate::str::contains("[DRY RUN] No files were copied."));

	assert!(!target.exists());
}

#[test]
fn test_verbose_prints_config_and_events() {
	let (_temp_dir, source, target) = project();

	uebackup_cmd()
		.arg(&source)
		.arg(&target)
		.arg("--verbose")
		.assert()
		.success()
		.stdout(predicate::str::contains("=== Backup Config ==="))
		.stdout(predicate::str::contains("  - DerivedDataCache/"))
		.stdout(predicate::str::contains("[COPIED] Game.uproject"))
		.stdout(predicate::str::contains("[EXCLUDE] Saved/"));
}

#[test]
fn test_include_saved_flag() {
	let (_temp_dir, source, target) = project();

	uebackup_cmd()
		.arg(&source)
		.arg(&target)
		.arg("--include-saved")
		.assert()
		.success()
		.stdout(predicate::str::contains("Copied:   3"))
		.stdout(predicate::str::contains("Excluded: 1"));

	assert!(target.join("Game/Saved/Logs/Game.log").is_file());
}

#[test]
fn test_include_build_flag() {
	let (_temp_dir, source, target) = project();
	write(&source, "Build/Windows/Application.ico", b"ico");

	uebackup_cmd()
		.arg(&source)
		.arg(&target)
		.args(["--include-build", "--verbose"])
		.assert()
		.success()
		.stdout(predicate::str::contains("[COPIED] Build/Windows/Application.ico"))
		.stdout(predicate::str::contains("[EXCLUDE] Build/").not())
		.stdout(predicate::str::contains("Copied:   3"))
		.stdout(predicate::str::contains("Excluded: 2"));

	assert!(target.join("Game/Build/Windows/Application.ico").is_file());
	assert!(!target.join("Game/Saved").exists());
}

#[test]
fn test_build_excluded_by_default() {
	let (_temp_dir, source, target) = project();
	write(&source, "Build/Windows/Application.ico", b"ico");

	uebackup_cmd()
		.arg(&source)
		.arg(&target)
		.assert()
		.success()
		.stdout(predicate::str::contains("Excluded: 3"));

	assert!(!target.join("Game/Build").exists());
}

#[test]
fn test_exclude_engine_flag() {
	let (_temp_dir, source, target) = project();
	write(&source, "Engine/Source/Runtime.cpp", b"engine");

	uebackup_cmd()
		.arg(&source)
		.arg(&target)
		.args(["--exclude-engine", "--verbose"])
		.assert()
		.success()
		.stdout(predicate::str::contains("[EXCLUDE] Engine/"));

	assert!(!target.join("Game/Engine").exists());
}

#[test]
fn test_backupignore_is_honored() {
	let (_temp_dir, source, target) = project();
	write(&source, ".backupignore", b"# big media\nContent/Movies/\n\n*.tmp\n");
	write(&source, "Content/Movies/intro.mp4", b"movie");
	write(&source, "Content/scratch.tmp", b"tmp");

	uebackup_cmd()
		.arg(&source)
		.arg(&target)
		.assert()
		.success()
		.stdout(predicate::str::contains("Excluded: 4"));

	assert!(!target.join("Game/Content/Movies/intro.mp4").exists());
	assert!(!target.join("Game/Content/scratch.tmp").exists());
	assert!(target.join("Game/Content/a.uasset").exists());
}

#[test]
fn test_config_file_adds_excludes() {
	let (temp_dir, source, target) = project();
	let config_path = temp_dir.path().join("uebackup.toml");
	fs::write(
		&config_path,
		r#"
include-saved = true
excludes = ["Content/"]
"#,
	)
	.unwrap();

	uebackup_cmd()
		.arg(&source)
		.arg(&target)
		.arg("--config")
		.arg(&config_path)
		.assert()
		.success()
		.stdout(predicate::str::contains("Copied:   2"));

	assert!(target.join("Game/Saved/Logs/Game.log").is_file());
	assert!(!target.join("Game/Content").exists());
}

#[test]
fn test_invalid_config_file_fails() {
	let (temp_dir, source, target) = project();
	let config_path = temp_dir.path().join("uebackup.toml");
	fs::write(&config_path, "excludes = [[[").unwrap();

	uebackup_cmd()
		.arg(&source)
		.arg(&target)
		.arg("--config")
		.arg(&config_path)
		.assert()
		.failure()
		.stderr(predicate::str::contains("Failed to load user configuration"));

	assert!(!target.exists());
}

#[test]
fn test_missing_source_fails() {
	let temp_dir = tempfile::tempdir().unwrap();
	let target = temp_dir.path().join("backups");

	uebackup_cmd()
		.arg(temp_dir.path().join("NoSuchProject"))
		.arg(&target)
		.assert()
		.failure()
		.stderr(predicate::str::contains("Source path does not exist"));

	assert!(!target.exists());
}

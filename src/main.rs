use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use uebackup_cli::config::{RunConfig, load_user_config};
use uebackup_cli::mirror::{ConsoleSink, mirror};
use uebackup_cli::rules::{RuleOptions, build_rules};

#[derive(Parser)]
#[command(name = "uebackup")]
#[command(
	author,
	version,
	about = "Fast incremental backup for Unreal Engine project folders"
)]
struct Cli {
	/// Path to the project folder (contains the .uproject)
	source: PathBuf,

	/// Directory where backups are stored; the project lands in <TARGET>/<project name>
	target: PathBuf,

	/// Copy every eligible file, ignoring incremental checks
	#[arg(long)]
	full: bool,

	/// Print actions without copying anything
	#[arg(long)]
	dry_run: bool,

	/// Print the effective rules and every per-file decision
	#[arg(long)]
	verbose: bool,

	/// Include Saved/ (logs, autosaves, local saves)
	#[arg(long)]
	include_saved: bool,

	/// Include Build/ (rarely needed for recovery)
	#[arg(long)]
	include_build: bool,

	/// Exclude an Engine/ folder found under the source
	#[arg(long)]
	exclude_engine: bool,

	/// Read user defaults from this file instead of ~/.uebackup.toml
	#[arg(long, value_name = "PATH")]
	config: Option<PathBuf>,
}

fn main() -> ExitCode {
	// Diagnostics go to stderr so stdout carries only the run narration
	tracing_subscriber::registry()
		.with(fmt::layer().with_writer(std::io::stderr))
		.with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
		.init();

	match run() {
		Ok(code) => code,
		Err(e) => {
			eprintln!("error: {e:?}");
			ExitCode::FAILURE
		}
	}
}

fn run() -> Result<ExitCode> {
	let cli = Cli::parse();

	let (user_config, user_config_path) =
		load_user_config(cli.config.as_deref()).context("Failed to load user configuration")?;
	if let Some(path) = &user_config_path {
		tracing::debug!(path = %path.display(), "loaded user config");
	}

	let options = user_config.rule_options(RuleOptions {
		include_saved: cli.include_saved,
		include_build: cli.include_build,
		exclude_engine: cli.exclude_engine,
	});

	let config = RunConfig {
		rules: build_rules(&options, &user_config.excludes, None),
		source: cli.source,
		target: cli.target,
		dry_run: cli.dry_run,
		verbose: cli.verbose,
		force_copy: cli.full,
	};

	let mut sink = ConsoleSink {
		verbose: config.verbose,
	};
	let report = mirror(&config, &mut sink)
		.with_context(|| format!("Backup of {} failed", config.source.display()))?;

	println!();
	println!("{report}");

	// Per-file failures are reported in the summary; the run itself still succeeds
	Ok(ExitCode::SUCCESS)
}

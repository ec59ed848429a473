//! uebackup - fast incremental mirror backups for Unreal Engine project folders.
//!
//! This library provides the core functionality for uebackup, including:
//! - Exclusion rules (directory prefixes and shell globs) from built-in defaults,
//!   user config and a per-project `.backupignore`
//! - Size and timestamp based change detection
//! - A pruning tree walker that copies changed files and reports what it did
//!
//! # Example
//!
//! ```no_run
//! use uebackup_cli::config::RunConfig;
//! use uebackup_cli::mirror::{ConsoleSink, mirror};
//!
//! let mut config = RunConfig::new("/projects/MyGame", "/mnt/backups");
//! config.dry_run = true;
//!
//! let mut sink = ConsoleSink { verbose: true };
//! let report = mirror(&config, &mut sink).unwrap();
//! println!("{report}");
//! ```

pub mod config;
pub mod error;
pub mod mirror;
pub mod rules;

pub use error::{BackupError, Result};

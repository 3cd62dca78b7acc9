//! Configuration types for CLI verbosity and options.

use crate::command::{self, CommandLogger};
use crate::constants::LIB_DIR;
use std::path::PathBuf;

/// Runtime configuration derived from CLI arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Skip the svn library checkout and update.
    pub only_code: bool,
    pub git_command: String,
    pub svn_command: String,
    /// Controls the verbosity level of CLI output.
    pub verbosity: Verbosity,
    /// Root of the Blender git checkout. All commands run here.
    pub source_dir: PathBuf,
    /// Artifact repository root, ending in `/`.
    pub svn_base_url: String,
}

impl Config {
    #[must_use]
    pub fn is_quiet(&self) -> bool {
        self.verbosity == Verbosity::Quiet
    }

    #[must_use]
    pub fn is_verbose(&self) -> bool {
        self.verbosity == Verbosity::Verbose
    }

    /// Directory holding the precompiled library and test-data working copies.
    #[must_use]
    pub fn lib_dir(&self) -> PathBuf {
        self.source_dir.join("..").join(LIB_DIR)
    }

    /// Returns the appropriate command logger based on verbosity settings.
    ///
    /// Config only picks the logger; the loggers themselves live in the
    /// command module.
    #[must_use]
    pub fn command_logger(&self) -> CommandLogger {
        if self.is_verbose() {
            command::verbose_logger
        } else {
            command::no_op_logger
        }
    }
}

/// Verbosity level for CLI output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Captures subprocess output behind a spinner and hides banners.
    Quiet,
    #[default]
    Normal,
    /// Echoes every command before running it.
    Verbose,
}

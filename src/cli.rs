use crate::config::{Config, Verbosity};
use crate::constants::{self, DEFAULT_GIT_COMMAND, DEFAULT_SVN_COMMAND};
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "make-update",
    version,
    about = "Update the Blender checkout, its submodules and the precompiled libraries"
)]
pub struct Cli {
    /// Only update the git repository and submodules, skip svn libraries
    #[arg(long)]
    pub only_code: bool,

    /// Svn executable used for libraries and tests
    #[arg(long, value_name = "COMMAND", default_value = DEFAULT_SVN_COMMAND)]
    pub svn_command: String,

    /// Git executable used for the repository and submodules
    #[arg(long, value_name = "COMMAND", default_value = DEFAULT_GIT_COMMAND)]
    pub git_command: String,

    /// Hide banners and command output unless a command fails
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Print every command before running it
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn verbosity(&self) -> Verbosity {
        if self.quiet {
            Verbosity::Quiet
        } else if self.verbose {
            Verbosity::Verbose
        } else {
            Verbosity::Normal
        }
    }

    pub fn into_config(self, source_dir: PathBuf) -> Config {
        Config {
            verbosity: self.verbosity(),
            only_code: self.only_code,
            git_command: self.git_command,
            svn_command: self.svn_command,
            source_dir,
            svn_base_url: constants::svn_base_url(),
        }
    }
}

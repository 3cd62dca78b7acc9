//! Stage banners, colored messages and the quiet-mode spinner.

use crate::command::CommandLine;
use crate::config::Config;
use crate::constants::PROGRESS_TICK_MS;
use crate::update::{Stage, UpdateCallbacks};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::Write;
use std::time::Duration;

/// No-op callbacks for when no output is wanted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoOpCallbacks;

impl UpdateCallbacks for NoOpCallbacks {
    fn on_release(&self, _version: &str) {}
    fn on_stage(&self, _stage: &Stage) {}
}

/// Prints banners and the release line to the terminal, unless quiet.
#[derive(Debug, Clone, Copy)]
pub struct ConsoleCallbacks {
    quiet: bool,
}

impl ConsoleCallbacks {
    pub fn new(config: &Config) -> Self {
        Self {
            quiet: config.is_quiet(),
        }
    }
}

impl UpdateCallbacks for ConsoleCallbacks {
    fn on_release(&self, version: &str) {
        if !self.quiet {
            print_release(version);
        }
    }

    fn on_stage(&self, stage: &Stage) {
        if !self.quiet {
            print_stage(stage.banner());
        }
    }
}

pub fn print_stage(text: &str) {
    println!("\n{}\n", text.white().bold());
}

pub fn print_release(version: &str) {
    println!("{}", format!("Using Release Blender v{}", version).green());
}

pub fn print_error(message: &str) {
    eprintln!("{}", message.red());
}

/// Prints the causes below a top-level error, one per line.
pub fn print_error_chain(error: &(dyn std::error::Error + 'static)) {
    let mut source = error.source();
    while let Some(cause) = source {
        eprintln!("  {} {}", "caused by:".dimmed(), cause);
        source = cause.source();
    }
}

/// Replays the output of a failed captured command on stderr.
pub fn print_captured_output(stdout: &[u8], stderr: &[u8]) {
    let mut err = std::io::stderr().lock();
    // Nothing sensible to do if stderr itself is gone.
    let _ = err.write_all(stdout);
    let _ = err.write_all(stderr);
}

/// Spinner shown while a captured command runs.
/// Draws nothing when stderr is not a terminal.
pub struct CommandSpinner {
    spinner: ProgressBar,
}

impl CommandSpinner {
    pub fn finish(&self) {
        self.spinner.finish_and_clear();
    }
}

#[must_use]
pub fn create_command_spinner(command: &CommandLine) -> CommandSpinner {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner()
        .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
        .template("{spinner:.cyan} {msg}")
    {
        spinner.set_style(style);
    }
    spinner.set_message(command.to_string());
    spinner.enable_steady_tick(Duration::from_millis(PROGRESS_TICK_MS));
    CommandSpinner { spinner }
}

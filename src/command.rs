//! External command execution.
//!
//! Every git and svn invocation goes through a [`CommandRunner`]. The real
//! [`ProcessRunner`] blocks until the child exits and turns a non-zero exit
//! status into [`UpdateError::CommandFailed`].

use crate::config::{Config, Verbosity};
use crate::error::{Result, UpdateError};
use crate::output;
use colored::Colorize;
use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Callback invoked with every command line before it runs.
pub type CommandLogger = fn(&CommandLine);

pub fn verbose_logger(command: &CommandLine) {
    eprintln!("{}", format!("$ {}", command).dimmed());
}

pub fn no_op_logger(_command: &CommandLine) {}

/// A program, its arguments and the directory to run it in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    program: String,
    args: Vec<OsString>,
    current_dir: Option<PathBuf>,
}

impl CommandLine {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            current_dir: None,
        }
    }

    #[must_use]
    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    #[must_use]
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.current_dir = Some(dir.into());
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn get_args(&self) -> &[OsString] {
        &self.args
    }

    pub fn get_current_dir(&self) -> Option<&Path> {
        self.current_dir.as_deref()
    }

    fn to_command(&self) -> Command {
        let mut command = Command::new(&self.program);
        command.args(&self.args);
        if let Some(dir) = &self.current_dir {
            command.current_dir(dir);
        }
        command
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg.to_string_lossy())?;
        }
        Ok(())
    }
}

/// Runs external commands on behalf of the update flow.
pub trait CommandRunner {
    /// Runs the command to completion, failing on a non-zero exit status.
    fn run(&self, command: &CommandLine) -> Result<()>;

    /// Runs the command and returns its trimmed standard output.
    fn output(&self, command: &CommandLine) -> Result<String>;
}

/// Runs commands as child processes of this one.
#[derive(Debug, Clone, Copy)]
pub struct ProcessRunner {
    verbosity: Verbosity,
    logger: CommandLogger,
}

impl ProcessRunner {
    pub fn new(config: &Config) -> Self {
        Self {
            verbosity: config.verbosity,
            logger: config.command_logger(),
        }
    }

    fn spawn_error(command: &CommandLine, source: std::io::Error) -> UpdateError {
        UpdateError::Spawn {
            command: command.to_string(),
            source,
        }
    }

    fn run_streaming(&self, command: &CommandLine) -> Result<()> {
        let status = command
            .to_command()
            .status()
            .map_err(|e| Self::spawn_error(command, e))?;

        if status.success() {
            Ok(())
        } else {
            Err(UpdateError::CommandFailed {
                command: command.to_string(),
                status,
            })
        }
    }

    fn run_captured(&self, command: &CommandLine) -> Result<()> {
        let spinner = output::create_command_spinner(command);
        let result = command.to_command().stdin(Stdio::null()).output();
        spinner.finish();

        let output = result.map_err(|e| Self::spawn_error(command, e))?;
        if output.status.success() {
            return Ok(());
        }

        output::print_captured_output(&output.stdout, &output.stderr);
        Err(UpdateError::CommandFailed {
            command: command.to_string(),
            status: output.status,
        })
    }
}

impl CommandRunner for ProcessRunner {
    fn run(&self, command: &CommandLine) -> Result<()> {
        (self.logger)(command);
        match self.verbosity {
            Verbosity::Quiet => self.run_captured(command),
            Verbosity::Normal | Verbosity::Verbose => self.run_streaming(command),
        }
    }

    fn output(&self, command: &CommandLine) -> Result<String> {
        (self.logger)(command);
        let stderr = if self.verbosity == Verbosity::Quiet {
            Stdio::null()
        } else {
            Stdio::inherit()
        };
        let output = command
            .to_command()
            .stdin(Stdio::null())
            .stderr(stderr)
            .output()
            .map_err(|e| Self::spawn_error(command, e))?;

        if output.status.success() {
            Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
        } else {
            Err(UpdateError::CommandFailed {
                command: command.to_string(),
                status: output.status,
            })
        }
    }
}

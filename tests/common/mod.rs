//! Test infrastructure for make-update integration tests.
#![allow(dead_code)]

use anyhow::Result;
use make_update::command::{CommandLine, CommandRunner};
use make_update::config::{Config, Verbosity};
use make_update::update::{Stage, UpdateCallbacks};
use make_update::UpdateError;
use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};
use std::rc::Rc;
use tempfile::TempDir;

pub const TEST_SVN_URL: &str = "https://svn.example.org/bf-blender/";

/// Ordered record of commands run and banners shown.
pub type EventLog = Rc<RefCell<Vec<String>>>;

pub fn test_config(source_dir: &Path) -> Config {
    Config {
        only_code: false,
        git_command: "git".to_string(),
        svn_command: "svn".to_string(),
        verbosity: Verbosity::Quiet,
        source_dir: source_dir.to_path_buf(),
        svn_base_url: TEST_SVN_URL.to_string(),
    }
}

#[cfg(unix)]
fn failed_status() -> ExitStatus {
    use std::os::unix::process::ExitStatusExt;
    ExitStatus::from_raw(1 << 8)
}

#[cfg(windows)]
fn failed_status() -> ExitStatus {
    use std::os::windows::process::ExitStatusExt;
    ExitStatus::from_raw(1)
}

/// Records every command instead of running it.
pub struct RecordingRunner {
    log: EventLog,
    branch: String,
    fail_on: Option<String>,
}

impl RecordingRunner {
    pub fn new(log: &EventLog, branch: &str) -> Self {
        Self {
            log: Rc::clone(log),
            branch: branch.to_string(),
            fail_on: None,
        }
    }

    /// Fails the first command whose text contains `pattern`.
    pub fn failing_on(mut self, pattern: &str) -> Self {
        self.fail_on = Some(pattern.to_string());
        self
    }

    fn record(&self, command: &CommandLine) -> make_update::Result<()> {
        let text = command.to_string();
        self.log.borrow_mut().push(text.clone());
        match &self.fail_on {
            Some(pattern) if text.contains(pattern.as_str()) => Err(UpdateError::CommandFailed {
                command: text,
                status: failed_status(),
            }),
            _ => Ok(()),
        }
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&self, command: &CommandLine) -> make_update::Result<()> {
        self.record(command)
    }

    fn output(&self, command: &CommandLine) -> make_update::Result<String> {
        self.record(command)?;
        Ok(self.branch.clone())
    }
}

/// Records banners and the release line into the same log as the runner.
pub struct RecordingCallbacks {
    log: EventLog,
}

impl RecordingCallbacks {
    pub fn new(log: &EventLog) -> Self {
        Self {
            log: Rc::clone(log),
        }
    }
}

impl UpdateCallbacks for RecordingCallbacks {
    fn on_release(&self, version: &str) {
        self.log.borrow_mut().push(format!("release {}", version));
    }

    fn on_stage(&self, stage: &Stage) {
        self.log.borrow_mut().push(format!("== {}", stage.banner()));
    }
}

pub fn banner(stage: Stage) -> String {
    format!("== {}", stage.banner())
}

/// A Blender-like layout: `<root>/blender` checkout next to `<root>/lib`.
pub struct Workspace {
    root: TempDir,
}

impl Workspace {
    pub fn new() -> Result<Self> {
        let root = TempDir::new()?;
        std::fs::create_dir(root.path().join("blender"))?;
        Ok(Self { root })
    }

    pub fn source_dir(&self) -> PathBuf {
        self.root.path().join("blender")
    }

    pub fn config(&self) -> Config {
        test_config(&self.source_dir())
    }

    /// Path of a library directory as the updater addresses it.
    pub fn lib_path(&self, name: &str) -> PathBuf {
        self.config().lib_dir().join(name)
    }

    /// Creates `lib/<name>` with its own `.svn` directory.
    pub fn add_working_copy(&self, name: &str) -> Result<()> {
        std::fs::create_dir_all(self.root.path().join("lib").join(name).join(".svn"))?;
        Ok(())
    }

    pub fn add_plain_dir(&self, name: &str) -> Result<()> {
        std::fs::create_dir_all(self.root.path().join("lib").join(name))?;
        Ok(())
    }
}

pub fn run_git(dir: &Path, args: &[&str]) -> Result<String> {
    let output = Command::new("git").current_dir(dir).args(args).output()?;
    if !output.status.success() {
        anyhow::bail!(
            "git {} failed: {}",
            args.join(" "),
            String::from_utf8_lossy(&output.stderr)
        );
    }
    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

fn configure_identity(dir: &Path) -> Result<()> {
    run_git(dir, &["config", "user.email", "test@example.com"])?;
    run_git(dir, &["config", "user.name", "Test User"])?;
    Ok(())
}

/// A temporary git repository for testing.
/// Automatically cleaned up when dropped.
pub struct TestRepo {
    _temp_dir: TempDir,
    path: PathBuf,
}

impl TestRepo {
    /// Creates a new test repository with an initial commit on the master branch.
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().to_path_buf();

        run_git(&path, &["init", "-b", "master"])?;
        configure_identity(&path)?;

        std::fs::write(path.join("README.md"), "# Test Repo\n")?;
        run_git(&path, &["add", "README.md"])?;
        run_git(&path, &["commit", "-m", "Initial commit"])?;

        Ok(Self {
            _temp_dir: temp_dir,
            path,
        })
    }

    /// Creates a test repository tracking a bare remote.
    /// Returns the repo and the remote TempDir (must be kept alive).
    pub fn with_remote() -> Result<(Self, TempDir)> {
        let remote_dir = TempDir::new()?;
        run_git(remote_dir.path(), &["init", "--bare", "-b", "master"])?;

        let local = Self::new()?;
        let remote_path = remote_dir.path().to_string_lossy().into_owned();
        run_git(&local.path, &["remote", "add", "origin", &remote_path])?;
        run_git(&local.path, &["push", "-u", "origin", "master"])?;

        Ok((local, remote_dir))
    }

    /// Creates a repository tracking a bare remote, with the bare repository
    /// `submodule_remote` registered as the submodule `name`.
    /// Returns the repo and its remote TempDir (must be kept alive).
    pub fn with_submodule(submodule_remote: &Path, name: &str) -> Result<(Self, TempDir)> {
        let (repo, remote) = Self::with_remote()?;
        let url = submodule_remote.to_string_lossy().into_owned();
        run_git(
            &repo.path,
            &["-c", "protocol.file.allow=always", "submodule", "add", &url, name],
        )?;
        run_git(&repo.path, &["commit", "-m", "Add submodule"])?;
        run_git(&repo.path, &["push", "origin", "master"])?;

        // Later fetches inside the submodule also go over the file transport.
        run_git(&repo.path, &["config", "protocol.file.allow", "always"])?;
        run_git(
            &repo.path.join(name),
            &["config", "protocol.file.allow", "always"],
        )?;
        configure_identity(&repo.path.join(name))?;

        Ok((repo, remote))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Commit checked out in the submodule at `name`.
    pub fn submodule_head(&self, name: &str) -> Result<String> {
        run_git(&self.path.join(name), &["rev-parse", "HEAD"])
    }

    /// Commit recorded for the submodule at `name` in the superproject HEAD.
    pub fn recorded_submodule_commit(&self, name: &str) -> Result<String> {
        run_git(&self.path, &["rev-parse", &format!("HEAD:{}", name)])
    }

    /// Adds `pattern` to `.git/info/exclude` so it never shows as untracked.
    pub fn exclude(&self, pattern: &str) -> Result<()> {
        let exclude = self.path.join(".git").join("info").join("exclude");
        if let Some(dir) = exclude.parent() {
            std::fs::create_dir_all(dir)?;
        }
        let mut contents = std::fs::read_to_string(&exclude).unwrap_or_default();
        contents.push_str(pattern);
        contents.push('\n');
        std::fs::write(exclude, contents)?;
        Ok(())
    }

    pub fn checkout_new_branch(&self, name: &str) -> Result<()> {
        run_git(&self.path, &["checkout", "-b", name])?;
        Ok(())
    }

    pub fn commit_file(&self, file: &str, contents: &str, message: &str) -> Result<()> {
        std::fs::write(self.path.join(file), contents)?;
        run_git(&self.path, &["add", file])?;
        run_git(&self.path, &["commit", "-m", message])?;
        Ok(())
    }

    /// Commit subjects, newest first.
    pub fn log_subjects(&self) -> Result<Vec<String>> {
        let output = run_git(&self.path, &["log", "--format=%s"])?;
        Ok(output.lines().map(str::to_string).collect())
    }
}

/// Pushes a commit to `remote` from a throwaway clone.
pub fn push_upstream_commit(remote: &Path, file: &str, message: &str) -> Result<()> {
    let clone_dir = TempDir::new()?;
    let clone_path = clone_dir.path().join("clone");
    let remote_path = remote.to_string_lossy().into_owned();
    let clone_str = clone_path.to_string_lossy().into_owned();
    run_git(clone_dir.path(), &["clone", &remote_path, &clone_str])?;
    configure_identity(&clone_path)?;

    std::fs::write(clone_path.join(file), "upstream\n")?;
    run_git(&clone_path, &["add", file])?;
    run_git(&clone_path, &["commit", "-m", message])?;
    run_git(&clone_path, &["push", "origin", "HEAD:master"])?;
    Ok(())
}

/// Creates a bare repository on `master` holding one commit.
pub fn bare_repo_with_commit(file: &str, message: &str) -> Result<TempDir> {
    let remote = TempDir::new()?;
    run_git(remote.path(), &["init", "--bare", "-b", "master"])?;
    push_upstream_commit(remote.path(), file, message)?;
    Ok(remote)
}

/// Tip of `branch` in a bare repository.
pub fn remote_head(remote: &Path, branch: &str) -> Result<String> {
    run_git(remote, &["rev-parse", branch])
}

//! Blender checkout updater library.
//!
//! This crate brings a Blender source checkout up to date by:
//! - Detecting whether the current branch is a release branch
//! - Checking out and updating the precompiled svn libraries and tests
//! - Pulling the git repository with rebase
//! - Updating submodules, tracking their development branch outside releases

pub mod cli;
pub mod command;
pub mod config;
pub mod constants;
pub mod error;
pub mod git;
pub mod libraries;
pub mod output;
pub mod platform;
pub mod release;
pub mod repo;
pub mod svn;
pub mod tools;
pub mod update;

pub use error::{Result, UpdateError};

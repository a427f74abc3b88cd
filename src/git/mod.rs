// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Git integration module.
//!
//! The tool layer only talks to version control through [`VersionControl`];
//! [`GitBackend`] is the libgit2 implementation used by the binary.

mod repo;

use crate::analysis::ChangeStats;
use crate::error::Result;
use std::path::Path;

pub use repo::{GitBackend, Repository};

/// Operations gmc needs from a version-control system.
///
/// `repo_path` selects the repository; `None` means the current directory.
/// Failures surface as `GitError::OperationFailed` carrying the cause.
pub trait VersionControl {
    /// Line counts and paths of the staged changes.
    fn staged_stats(&self, repo_path: Option<&Path>) -> Result<ChangeStats>;

    /// Whether anything is staged.
    fn has_staged_changes(&self, repo_path: Option<&Path>) -> Result<bool>;

    /// Commit the staged changes and return the commit id.
    fn commit(&self, message: &str, repo_path: Option<&Path>) -> Result<String>;
}

// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Repository operations backed by libgit2.

use crate::analysis::ChangeStats;
use crate::error::{GitError, Result};
use git2::Repository as Git2Repo;
use std::path::{Path, PathBuf};

use super::VersionControl;

/// Wrapper around git2::Repository with the operations gmc needs.
pub struct Repository {
    inner: Git2Repo,
    workdir: PathBuf,
}

impl Repository {
    /// Open the repository containing `path`, or the current directory.
    pub fn open_at(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::open(path),
            None => {
                let current_dir = std::env::current_dir()?;
                Self::open(&current_dir)
            }
        }
    }

    /// Open a repository from a path, searching parent directories.
    pub fn open(path: &Path) -> Result<Self> {
        let repo = Git2Repo::discover(path).map_err(|e| {
            if e.code() == git2::ErrorCode::NotFound {
                GitError::OperationFailed {
                    operation: "open".to_string(),
                    message: format!("Not a git repository: {}", path.display()),
                }
            } else {
                GitError::operation("open", e)
            }
        })?;

        let workdir = repo
            .workdir()
            .ok_or_else(|| GitError::OperationFailed {
                operation: "open".to_string(),
                message: "Repository has no working directory (bare repository)".to_string(),
            })?
            .to_path_buf();

        tracing::debug!("Opened repository at {:?}", workdir);

        Ok(Self {
            inner: repo,
            workdir,
        })
    }

    /// Get a reference to the inner git2 repository.
    pub fn inner(&self) -> &Git2Repo {
        &self.inner
    }

    /// Get the working directory path.
    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    /// Diff between HEAD (or the empty tree on an unborn branch) and the index.
    fn staged_diff(&self) -> Result<git2::Diff<'_>> {
        let head_tree = self
            .inner
            .head()
            .ok()
            .and_then(|head| head.peel_to_tree().ok());

        let diff = self
            .inner
            .diff_tree_to_index(head_tree.as_ref(), None, None)
            .map_err(|e| GitError::operation("diff", e))?;

        Ok(diff)
    }

    /// Check if there are staged changes.
    pub fn has_staged_changes(&self) -> Result<bool> {
        Ok(self.staged_diff()?.deltas().len() > 0)
    }

    /// Collect line counts and paths for the staged changes.
    pub fn staged_stats(&self) -> Result<ChangeStats> {
        let diff = self.staged_diff()?;
        let stats = diff
            .stats()
            .map_err(|e| GitError::operation("diff stats", e))?;

        let files: Vec<String> = diff
            .deltas()
            .filter_map(|delta| {
                delta
                    .new_file()
                    .path()
                    .or_else(|| delta.old_file().path())
                    .map(|p| p.to_string_lossy().replace('\\', "/"))
            })
            .collect();

        Ok(ChangeStats::new(stats.insertions(), stats.deletions(), files))
    }

    /// Commit the index on HEAD and return the new commit id.
    pub fn commit(&self, message: &str) -> Result<String> {
        let sig = self
            .inner
            .signature()
            .map_err(|e| GitError::operation("signature", e))?;

        let mut index = self
            .inner
            .index()
            .map_err(|e| GitError::operation("index", e))?;
        let tree_id = index
            .write_tree()
            .map_err(|e| GitError::operation("write tree", e))?;
        let tree = self
            .inner
            .find_tree(tree_id)
            .map_err(|e| GitError::operation("find tree", e))?;

        // Unborn branch: first commit has no parents.
        let parent = self
            .inner
            .head()
            .ok()
            .and_then(|head| head.peel_to_commit().ok());
        let parents: Vec<&git2::Commit<'_>> = parent.iter().collect();

        let oid = self
            .inner
            .commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
            .map_err(|e| GitError::operation("commit", e))?;

        tracing::info!("Created commit {}", oid);

        Ok(oid.to_string())
    }
}

/// [`VersionControl`] implementation that opens the repository per call.
#[derive(Debug, Clone, Copy, Default)]
pub struct GitBackend;

impl VersionControl for GitBackend {
    fn staged_stats(&self, repo_path: Option<&Path>) -> Result<ChangeStats> {
        Repository::open_at(repo_path)?.staged_stats()
    }

    fn has_staged_changes(&self, repo_path: Option<&Path>) -> Result<bool> {
        Repository::open_at(repo_path)?.has_staged_changes()
    }

    fn commit(&self, message: &str, repo_path: Option<&Path>) -> Result<String> {
        Repository::open_at(repo_path)?.commit(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GmcError;
    use std::fs;
    use tempfile::TempDir;

    fn create_test_repo() -> TempDir {
        let dir = TempDir::new().unwrap();
        let repo = Git2Repo::init(dir.path()).unwrap();
        let mut config = repo.config().unwrap();
        config.set_str("user.name", "Test User").unwrap();
        config.set_str("user.email", "test@example.com").unwrap();
        dir
    }

    fn stage(dir: &TempDir, name: &str, content: &str) {
        let path = dir.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();

        let repo = Git2Repo::open(dir.path()).unwrap();
        let mut index = repo.index().unwrap();
        index.add_path(Path::new(name)).unwrap();
        index.write().unwrap();
    }

    #[test]
    fn test_not_a_repo() {
        let dir = TempDir::new().unwrap();
        let result = Repository::open(dir.path());
        assert!(matches!(
            result,
            Err(GmcError::Git(GitError::OperationFailed { .. }))
        ));
    }

    #[test]
    fn test_no_staged_changes_on_fresh_repo() {
        let dir = create_test_repo();
        let backend = GitBackend;
        assert!(!backend.has_staged_changes(Some(dir.path())).unwrap());
        assert!(backend.staged_stats(Some(dir.path())).unwrap().files.is_empty());
    }

    #[test]
    fn test_staged_stats() {
        let dir = create_test_repo();
        stage(&dir, "src/lib.rs", "fn a() {}\nfn b() {}\nfn c() {}\n");
        stage(&dir, "README.md", "# readme\n");

        let stats = GitBackend.staged_stats(Some(dir.path())).unwrap();
        assert_eq!(stats.additions, 4);
        assert_eq!(stats.deletions, 0);
        assert!(stats.files.contains("src/lib.rs"));
        assert!(stats.files.contains("README.md"));
    }

    #[test]
    fn test_commit_then_clean() {
        let dir = create_test_repo();
        stage(&dir, "notes.txt", "hello\n");

        let backend = GitBackend;
        assert!(backend.has_staged_changes(Some(dir.path())).unwrap());

        let sha = backend
            .commit("📝 docs: add notes", Some(dir.path()))
            .unwrap();
        assert_eq!(sha.len(), 40);
        assert!(!backend.has_staged_changes(Some(dir.path())).unwrap());

        let repo = Repository::open(dir.path()).unwrap();
        let head = repo.inner().head().unwrap().peel_to_commit().unwrap();
        assert_eq!(head.id().to_string(), sha);
        assert_eq!(head.message(), Some("📝 docs: add notes"));
    }

    #[test]
    fn test_second_commit_has_parent() {
        let dir = create_test_repo();
        stage(&dir, "a.txt", "one\n");
        let first = GitBackend.commit("🎉 first", Some(dir.path())).unwrap();
        stage(&dir, "a.txt", "one\ntwo\n");

        let stats = GitBackend.staged_stats(Some(dir.path())).unwrap();
        assert_eq!(stats.additions, 1);

        GitBackend.commit("🐛 fix: second", Some(dir.path())).unwrap();
        let repo = Repository::open(dir.path()).unwrap();
        let head = repo.inner().head().unwrap().peel_to_commit().unwrap();
        assert_eq!(head.parent_id(0).unwrap().to_string(), first);
    }

    #[test]
    fn test_open_from_subdirectory() {
        let dir = create_test_repo();
        stage(&dir, "nested/deep/file.txt", "x\n");
        let repo = Repository::open(&dir.path().join("nested")).unwrap();
        assert!(repo.has_staged_changes().unwrap());
        assert!(repo.workdir().ends_with(dir.path().file_name().unwrap()));
    }
}

use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::debug;

use crate::Result;
use crate::error::GitError;

/// Runs git operations in one repository root.
#[derive(Debug, Clone)]
pub struct GitCli {
    root: PathBuf,
}

impl GitCli {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Whether the root lies inside a git working tree.
    ///
    /// # Errors
    ///
    /// Returns an error only when the git binary cannot be spawned; a
    /// repository-less directory is an `Ok(false)`.
    pub fn is_inside_work_tree(&self) -> Result<bool> {
        match self.run(&["rev-parse", "--is-inside-work-tree"]) {
            Ok(stdout) => Ok(stdout.trim() == "true"),
            Err(GitError::Command { .. }) => Ok(false),
            Err(err) => Err(err),
        }
    }

    /// Stage one file.
    ///
    /// # Errors
    ///
    /// Returns an error if `git add` fails or cannot be spawned.
    pub fn stage(&self, path: &Path) -> Result<()> {
        let path_arg = path.to_string_lossy();
        self.run(&["add", &path_arg]).map(drop)
    }

    /// Commit staged changes.
    ///
    /// # Errors
    ///
    /// Returns an error if `git commit` fails or cannot be spawned.
    pub fn commit(&self, message: &str) -> Result<()> {
        self.run(&["commit", "-m", message]).map(drop)
    }

    /// Push the current branch.
    ///
    /// # Errors
    ///
    /// Returns an error if `git push` fails or cannot be spawned.
    pub fn push(&self) -> Result<()> {
        self.run(&["push"]).map(drop)
    }

    /// Create an annotated tag.
    ///
    /// # Errors
    ///
    /// Returns an error if the tag cannot be created, e.g. it already
    /// exists.
    pub fn create_tag(&self, name: &str, message: &str) -> Result<()> {
        self.run(&["tag", "-a", name, "-m", message]).map(drop)
    }

    /// Push one tag to origin.
    ///
    /// # Errors
    ///
    /// Returns an error if `git push origin <tag>` fails.
    pub fn push_tag(&self, name: &str) -> Result<()> {
        self.run(&["push", "origin", name]).map(drop)
    }

    /// Discard the last commit, hard.
    ///
    /// # Errors
    ///
    /// Returns an error if `git reset --hard HEAD~1` fails, e.g. on a
    /// repository with a single commit.
    pub fn reset_to_parent(&self) -> Result<()> {
        self.run(&["reset", "--hard", "HEAD~1"]).map(drop)
    }

    /// Force-push the current branch, overwriting remote history.
    ///
    /// # Errors
    ///
    /// Returns an error if `git push --force` fails.
    pub fn force_push(&self) -> Result<()> {
        self.run(&["push", "--force"]).map(drop)
    }

    /// Delete a local tag.
    ///
    /// # Errors
    ///
    /// Returns an error if the tag does not exist locally.
    pub fn delete_tag(&self, name: &str) -> Result<()> {
        self.run(&["tag", "-d", name]).map(drop)
    }

    /// Delete a tag from origin.
    ///
    /// # Errors
    ///
    /// Returns an error if `git push --delete origin <tag>` fails.
    pub fn delete_remote_tag(&self, name: &str) -> Result<()> {
        self.run(&["push", "--delete", "origin", name]).map(drop)
    }

    fn run(&self, args: &[&str]) -> Result<String> {
        let command = args.join(" ");
        debug!(%command, root = %self.root.display(), "running git");

        let output = Command::new("git")
            .args(args)
            .current_dir(&self.root)
            .output()
            .map_err(|source| GitError::Spawn {
                command: command.clone(),
                source,
            })?;

        if output.status.success() {
            Ok(String::from_utf8_lossy(&output.stdout).into_owned())
        } else {
            Err(GitError::Command {
                command,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn setup_repo() -> anyhow::Result<(TempDir, GitCli)> {
        let dir = TempDir::new()?;
        let git = GitCli::new(dir.path());
        git.run(&["init"])?;
        git.run(&["config", "user.name", "tester"])?;
        git.run(&["config", "user.email", "tester@example.com"])?;
        git.run(&["config", "commit.gpgsign", "false"])?;
        Ok((dir, git))
    }

    fn commit_file(dir: &TempDir, git: &GitCli, name: &str, content: &str) -> anyhow::Result<()> {
        fs::write(dir.path().join(name), content)?;
        git.stage(Path::new(name))?;
        git.commit(&format!("add {name}"))?;
        Ok(())
    }

    #[test]
    fn detects_a_work_tree() -> anyhow::Result<()> {
        let (_dir, git) = setup_repo()?;

        assert!(git.is_inside_work_tree()?);
        Ok(())
    }

    #[test]
    fn plain_directory_is_not_a_work_tree() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        let git = GitCli::new(dir.path());

        assert!(!git.is_inside_work_tree()?);
        Ok(())
    }

    #[test]
    fn stage_commit_and_tag_round_trip() -> anyhow::Result<()> {
        let (dir, git) = setup_repo()?;
        commit_file(&dir, &git, "README.md", "hello\n")?;

        git.create_tag("v0.1.0", "Release version 0.1.0")?;
        let tags = git.run(&["tag", "-l"])?;
        assert!(tags.contains("v0.1.0"));

        git.delete_tag("v0.1.0")?;
        let tags = git.run(&["tag", "-l"])?;
        assert!(!tags.contains("v0.1.0"));
        Ok(())
    }

    #[test]
    fn reset_to_parent_drops_the_last_commit() -> anyhow::Result<()> {
        let (dir, git) = setup_repo()?;
        commit_file(&dir, &git, "first.txt", "one\n")?;
        commit_file(&dir, &git, "second.txt", "two\n")?;

        git.reset_to_parent()?;

        let count = git.run(&["rev-list", "--count", "HEAD"])?;
        assert_eq!(count.trim(), "1");
        assert!(!dir.path().join("second.txt").exists());
        Ok(())
    }

    #[test]
    fn push_and_tag_push_work_against_a_local_remote() -> anyhow::Result<()> {
        let (dir, git) = setup_repo()?;
        git.run(&["config", "push.default", "current"])?;
        commit_file(&dir, &git, "README.md", "hello\n")?;

        let remote = TempDir::new()?;
        GitCli::new(remote.path()).run(&["init", "--bare"])?;
        let remote_path = remote.path().to_string_lossy().into_owned();
        git.run(&["remote", "add", "origin", &remote_path])?;

        git.push()?;
        git.create_tag("v1.0.0", "Release version 1.0.0")?;
        git.push_tag("v1.0.0")?;

        let remote_git = GitCli::new(remote.path());
        let remote_tags = remote_git.run(&["tag", "-l"])?;
        assert!(remote_tags.contains("v1.0.0"));

        git.delete_remote_tag("v1.0.0")?;
        let remote_tags = remote_git.run(&["tag", "-l"])?;
        assert!(!remote_tags.contains("v1.0.0"));
        Ok(())
    }

    #[test]
    fn failed_commands_carry_captured_stderr() -> anyhow::Result<()> {
        let (_dir, git) = setup_repo()?;

        let err = git.delete_tag("no-such-tag").expect_err("tag does not exist");

        match err {
            GitError::Command { command, stderr } => {
                assert_eq!(command, "tag -d no-such-tag");
                assert!(stderr.contains("no-such-tag"));
            }
            GitError::Spawn { .. } => panic!("expected a command failure"),
        }
        Ok(())
    }
}

//! Thin wrapper over the `git` command-line client.
//!
//! The registry is an ordinary git working tree; every operation shells out
//! to `git -C <registry> ...`.

use promptctl_core::{AppError, AppResult};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Remote name used for push and pull.
pub const ORIGIN: &str = "origin";

#[derive(Debug, Clone)]
pub struct Git {
    repo: PathBuf,
}

impl Git {
    pub fn new(repo: impl Into<PathBuf>) -> Self {
        Self { repo: repo.into() }
    }

    /// Whether the registry is inside a git working tree.
    pub fn is_repo(&self) -> bool {
        self.output(&["rev-parse", "--is-inside-work-tree"])
            .map(|out| out.status.success())
            .unwrap_or(false)
    }

    pub fn init(&self) -> AppResult<()> {
        self.run(&["init"]).map(drop)
    }

    pub fn has_remote(&self, name: &str) -> AppResult<bool> {
        let remotes = self.run(&["remote"])?;
        Ok(remotes.lines().any(|line| line.trim() == name))
    }

    pub fn add_remote(&self, name: &str, url: &str) -> AppResult<()> {
        self.run(&["remote", "add", name, url]).map(drop)
    }

    /// Stage paths; an empty list stages everything.
    pub fn add(&self, paths: &[&Path]) -> AppResult<()> {
        let mut args = vec!["add".to_string(), "-A".to_string(), "--".to_string()];
        if paths.is_empty() {
            args.push(".".to_string());
        } else {
            args.extend(paths.iter().map(|p| p.display().to_string()));
        }
        let args: Vec<&str> = args.iter().map(String::as_str).collect();
        self.run(&args).map(drop)
    }

    /// Whether the index differs from HEAD.
    pub fn has_staged_changes(&self) -> AppResult<bool> {
        let out = self.output(&["diff", "--cached", "--quiet"])?;
        // --quiet exits 1 when there are differences
        match out.status.code() {
            Some(0) => Ok(false),
            Some(1) => Ok(true),
            _ => Err(git_failure(&["diff", "--cached"], &out)),
        }
    }

    pub fn commit(&self, message: &str) -> AppResult<()> {
        self.run(&["commit", "-m", message]).map(drop)
    }

    pub fn push(&self) -> AppResult<String> {
        self.run(&["push", "-u", ORIGIN, "HEAD"])
    }

    pub fn pull(&self) -> AppResult<String> {
        self.run(&["pull", ORIGIN])
    }

    pub fn status_short(&self) -> AppResult<String> {
        self.run(&["status", "--short"])
    }

    /// Run git and return stdout, failing on a non-zero exit.
    fn run(&self, args: &[&str]) -> AppResult<String> {
        let out = self.output(args)?;
        if !out.status.success() {
            return Err(git_failure(args, &out));
        }
        Ok(String::from_utf8_lossy(&out.stdout).trim_end().to_string())
    }

    fn output(&self, args: &[&str]) -> AppResult<Output> {
        tracing::debug!("git -C {:?} {}", self.repo, args.join(" "));
        Command::new("git")
            .arg("-C")
            .arg(&self.repo)
            .args(args)
            .output()
            .map_err(|e| AppError::Git(format!("Failed to run git: {}", e)))
    }
}

fn git_failure(args: &[&str], out: &Output) -> AppError {
    let stderr = String::from_utf8_lossy(&out.stderr);
    AppError::Git(format!(
        "`git {}` failed ({}): {}",
        args.join(" "),
        out.status,
        stderr.trim()
    ))
}

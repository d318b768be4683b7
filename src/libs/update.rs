//! Application self-update through the installation's git checkout.
//!
//! The updater compares the revision count of the local HEAD against the
//! configured remote branch; a strictly higher remote count means a newer
//! revision exists. Applying an update is a fast-forward pull, after which
//! the process can be re-spawned so the new revision takes over.
//!
//! Update *checks* are deliberately infallible: any failure (git missing,
//! not a repository, network down) reads as "no update available" and is
//! never surfaced. Applying an update reports failures, since at that
//! point the user explicitly asked for one.

use crate::libs::config::UpdateConfig;
use crate::libs::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::{msg_debug, msg_error_anyhow, msg_info};
use anyhow::Result;
use chrono::{DateTime, Duration, Utc};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

const LAST_CHECK_FILE: &str = ".last_update_check";

/// Pluggable update capability.
///
/// `check` never fails; it answers "is a newer revision available" and
/// treats every error as `false`. `apply` and `restart` report errors so
/// the caller can surface them.
pub trait UpdateProvider {
    fn check(&mut self) -> bool;
    fn apply(&mut self) -> Result<()>;
    fn restart(&self) -> Result<()>;
}

/// Updater backed by the git checkout the application runs from.
#[derive(Debug)]
pub struct GitUpdater {
    pub remote: String,
    pub branch: String,
    pub repo_dir: Option<PathBuf>,
    last_check_file: PathBuf,
}

impl GitUpdater {
    pub fn new(config: &UpdateConfig) -> Result<Self> {
        Ok(Self {
            remote: config.remote.clone(),
            branch: config.branch.clone(),
            repo_dir: config.repo_dir.clone(),
            last_check_file: DataStorage::new().get_path(LAST_CHECK_FILE)?,
        })
    }

    /// Prints an update notice if one is available, at most once per day.
    ///
    /// Used by the week view as a passive startup check; every failure is
    /// silent.
    pub fn maybe_notify(&mut self) {
        if !self.due_for_check() {
            return;
        }
        if self.check() {
            msg_info!(Message::UpdateAvailable);
        }
    }

    /// Locates the repository directory: the configured path, or the
    /// nearest ancestor of the running executable containing `.git`.
    fn find_repo_dir(&self) -> Option<PathBuf> {
        if let Some(dir) = &self.repo_dir {
            return Some(dir.clone());
        }
        let exe = env::current_exe().ok()?;
        let mut dir = exe.parent()?.to_path_buf();
        loop {
            if dir.join(".git").exists() {
                return Some(dir);
            }
            if !dir.pop() {
                return None;
            }
        }
    }

    /// Counts revisions reachable from `rev` in the repository at `dir`.
    fn rev_count(dir: &Path, rev: &str) -> Option<u64> {
        let output = Command::new("git")
            .args(["rev-list", "--count", rev])
            .current_dir(dir)
            .output()
            .ok()?;
        if !output.status.success() {
            return None;
        }
        String::from_utf8(output.stdout).ok()?.trim().parse().ok()
    }

    fn update_last_check_time(&self) {
        let now = Utc::now().to_rfc3339();
        let _ = fs::write(&self.last_check_file, now);
    }

    /// Throttles passive checks to at most one per day.
    fn due_for_check(&self) -> bool {
        match fs::read_to_string(&self.last_check_file) {
            Ok(content) => {
                let last_check: DateTime<Utc> = match content.trim().parse() {
                    Ok(parsed) => parsed,
                    Err(_) => return true,
                };
                Utc::now().signed_duration_since(last_check) > Duration::days(1)
            }
            Err(_) => true,
        }
    }
}

impl UpdateProvider for GitUpdater {
    fn check(&mut self) -> bool {
        self.update_last_check_time();
        let dir = match self.find_repo_dir() {
            Some(dir) => dir,
            None => {
                msg_debug!("No git checkout found for update check");
                return false;
            }
        };
        let fetched = Command::new("git")
            .args(["fetch", &self.remote, &self.branch])
            .current_dir(&dir)
            .output()
            .map(|output| output.status.success())
            .unwrap_or(false);
        if !fetched {
            msg_debug!("git fetch failed during update check");
            return false;
        }
        let local = Self::rev_count(&dir, "HEAD");
        let remote = Self::rev_count(&dir, &format!("{}/{}", self.remote, self.branch));
        match (local, remote) {
            (Some(local), Some(remote)) => remote > local,
            _ => false,
        }
    }

    fn apply(&mut self) -> Result<()> {
        let dir = self
            .find_repo_dir()
            .ok_or_else(|| msg_error_anyhow!(Message::UpdateRepoNotFound))?;
        let output = Command::new("git")
            .args(["pull", "--ff-only", &self.remote, &self.branch])
            .current_dir(&dir)
            .output()?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(msg_error_anyhow!(Message::UpdateFailed(stderr)));
        }
        Ok(())
    }

    fn restart(&self) -> Result<()> {
        let exe = env::current_exe()?;
        Command::new(exe).args(env::args().skip(1)).spawn()?;
        Ok(())
    }
}

//! File system access to the patch target

use crate::domain::DashboardPatch;
use crate::error::{PatchError, Result};
use crate::infrastructure::{Config, RootSource};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// The dashboard screen file under a given project root.
#[derive(Debug, Clone)]
pub struct TargetFile {
    root: PathBuf,
    path: PathBuf,
}

impl TargetFile {
    /// Resolve the patch target under `root`.
    pub fn new(root: PathBuf, patch: &DashboardPatch) -> Self {
        let path = root.join(patch.target());
        TargetFile { root, path }
    }

    /// Resolve the target from configuration.
    ///
    /// A root taken from DASHPATCH_ROOT must actually contain the target.
    pub fn discover(config: &Config, patch: &DashboardPatch) -> Result<Self> {
        let target = Self::new(config.root.clone(), patch);

        if config.root_source == RootSource::Env && !target.exists() {
            return Err(PatchError::Config(format!(
                "DASHPATCH_ROOT is set to '{}' but {} does not exist there. \
                Fix the variable or unset it.",
                config.root.display(),
                patch.target().display()
            )));
        }

        debug!(root = %target.root.display(), path = %target.path.display(), "resolved target");
        Ok(target)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Read the raw bytes of the target.
    pub fn read_bytes(&self) -> Result<Vec<u8>> {
        fs::read(&self.path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                PatchError::TargetNotFound(self.path.clone())
            } else {
                PatchError::Io(e)
            }
        })
    }

    /// Replace the target's contents: write a sibling temp file, then rename into place.
    /// The temp file takes the target's permissions before the rename.
    ///
    /// On Windows, `rename` does not overwrite existing files, so we remove the destination first.
    pub fn write_bytes_atomic(&self, bytes: &[u8]) -> Result<()> {
        let tmp_name = format!(
            "{}.dashpatch-tmp-{}",
            self.path
                .file_name()
                .and_then(|s| s.to_str())
                .unwrap_or("target"),
            std::process::id()
        );
        let tmp_path = self.path.with_file_name(tmp_name);

        fs::write(&tmp_path, bytes)?;

        if let Ok(metadata) = fs::metadata(&self.path) {
            if let Err(e) = fs::set_permissions(&tmp_path, metadata.permissions()) {
                let _ = fs::remove_file(&tmp_path);
                return Err(PatchError::Io(e));
            }
        }

        if cfg!(windows) && self.path.exists() {
            fs::remove_file(&self.path)?;
        }

        if let Err(e) = fs::rename(&tmp_path, &self.path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(PatchError::Io(e));
        }

        info!(path = %self.path.display(), bytes = bytes.len(), "wrote target");
        Ok(())
    }

    /// Copy the current target to `<file>.dashpatch-<stamp>.bak` and return the copy's path.
    pub fn backup(&self, stamp: &str) -> Result<PathBuf> {
        let backup_name = format!(
            "{}.dashpatch-{}.bak",
            self.path
                .file_name()
                .and_then(|s| s.to_str())
                .unwrap_or("target"),
            stamp
        );
        let backup_path = self.path.with_file_name(backup_name);

        if backup_path.exists() {
            return Err(PatchError::Config(format!(
                "Backup already exists: {}",
                backup_path.display()
            )));
        }

        fs::copy(&self.path, &backup_path)?;
        info!(backup = %backup_path.display(), "backed up target");
        Ok(backup_path)
    }
}

use anyhow::{Context, Result};
use log::{debug, trace};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// A source file loaded for one processing pass.
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub path: PathBuf,
    pub content: String,
}

impl SourceFile {
    pub fn read(path: &Path) -> Result<Self> {
        trace!("Reading {}", path.display());
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Ok(Self { path: path.to_path_buf(), content })
    }

    /// Replace the content and write it to disk, unless it is identical.
    ///
    /// Returns whether a write happened. The file is rewritten in place with a
    /// single write; there is no temp file or rename.
    pub fn write_back(&mut self, content: String) -> Result<bool> {
        if content == self.content {
            debug!("No changes made to {}", self.path.display());
            return Ok(false);
        }
        debug!("Writing updated content to {}", self.path.display());
        fs::write(&self.path, &content)
            .with_context(|| format!("Failed to write {}", self.path.display()))?;
        self.content = content;
        Ok(true)
    }
}

/// Path of `path` relative to `root` for progress output, falling back to the
/// path itself when it is not under `root`.
pub fn relative_display(root: &Path, path: &Path) -> String {
    path.strip_prefix(root).unwrap_or(path).display().to_string()
}

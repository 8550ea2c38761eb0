use anyhow::{Result, bail};
use log::debug;
use std::path::Path;

/// Fail unless `dir` exists and is a directory.
pub fn validate_target_dir(dir: &Path) -> Result<()> {
    debug!("Validating target directory: {}", dir.display());
    if !dir.is_dir() {
        bail!("Directory {} does not exist", dir.display());
    }
    Ok(())
}

/// Accept `php`, `.php` and ` .php ` alike.
pub fn normalize_extension(ext: &str) -> Result<String> {
    let ext = ext.trim().trim_start_matches('.');
    if ext.is_empty() {
        bail!("File extension must not be empty");
    }
    Ok(ext.to_string())
}

use anyhow::{Result, bail};
use clap::Parser;
use log::{debug, info};
use nsclean_core::{normalize_extension, validate_target_dir};
use std::path::PathBuf;

use crate::constants::{DEFAULT_EXTENSION, DEFAULT_ROOT_NAMESPACE, NAMESPACE_SEPARATOR};

#[derive(Debug, Clone, Parser)]
#[command(name = "fix-extends")]
#[command(about = "Rewrite fully qualified extends clauses to imported short names")]
pub struct Config {
    /// Directory containing the PHP files to process
    pub target_directory: PathBuf,

    /// Enable debug output
    #[arg(long)]
    pub debug: bool,

    /// Root namespace of the project's own classes
    #[arg(long, default_value = DEFAULT_ROOT_NAMESPACE)]
    pub root_namespace: String,

    /// Extension of the files to process
    #[arg(long, default_value = DEFAULT_EXTENSION)]
    pub extension: String,
}

impl Config {
    /// Validate the target directory and normalize the extension and root namespace
    pub fn initialize(&mut self) -> Result<()> {
        validate_target_dir(&self.target_directory)?;
        info!("Using target directory: {}", self.target_directory.display());

        self.extension = normalize_extension(&self.extension)?;
        self.root_namespace = normalize_root_namespace(&self.root_namespace)?;
        debug!("Root namespace: {}, extension: {}", self.root_namespace, self.extension);
        Ok(())
    }
}

fn normalize_root_namespace(ns: &str) -> Result<String> {
    let ns = ns.trim().trim_start_matches(NAMESPACE_SEPARATOR);
    if ns.is_empty() {
        bail!("Root namespace must not be empty");
    }
    let valid_segment =
        |seg: &str| !seg.is_empty() && seg.chars().all(|c| c.is_alphanumeric() || c == '_');
    if !ns.split(NAMESPACE_SEPARATOR).all(valid_segment) {
        bail!("Invalid root namespace: {}", ns);
    }
    Ok(ns.to_string())
}

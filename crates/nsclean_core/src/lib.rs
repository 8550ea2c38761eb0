//! Core utilities for nsclean tools.
//!
//! This crate provides the filesystem plumbing shared by the rewriting passes:
//! - Collecting source files with a given extension from a directory tree
//! - Loading a source file and writing it back only when it changed
//! - Validating the target directory and normalizing extension arguments

mod collector;
mod config;
mod source;

// Re-export public API
pub use collector::{CollectorConfig, collect_sources};
pub use config::{normalize_extension, validate_target_dir};
pub use source::{SourceFile, relative_display};

use log::{debug, trace};
use nsclean_core::{CollectorConfig, collect_sources};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::patterns::Patterns;

/// Files under `root` with `extension` that extend a class through a fully
/// qualified name under the root namespace.
///
/// Unreadable files are skipped.
pub fn find_files_with_extends(root: &Path, extension: &str, patterns: &Patterns) -> Vec<PathBuf> {
    let collector_cfg =
        CollectorConfig { root: root.to_path_buf(), extension: extension.to_string() };

    let mut matching = Vec::new();
    for path in collect_sources(&collector_cfg) {
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(err) => {
                debug!("Error reading {}: {}", path.display(), err);
                continue;
            }
        };
        if let Some(found) = patterns.find_qualified_extends(&content) {
            debug!("Found match in {}: {}", path.display(), found);
            matching.push(path);
        } else {
            trace!("No fully qualified extends in {}", path.display());
        }
    }

    debug!("Found {} files with fully qualified extends", matching.len());
    matching
}

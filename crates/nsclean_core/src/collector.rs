use ignore::WalkBuilder;
use log::{debug, trace};
use std::path::{Path, PathBuf};

pub struct CollectorConfig {
    pub root: PathBuf,
    /// Extension without the leading dot, compared case-sensitively
    pub extension: String,
}

/// Walk `cfg.root` and return every regular file carrying `cfg.extension`.
///
/// Hidden files are visited and ignore files are not honoured: a rewrite pass
/// has to see everything under the target. Entries are sorted by name within
/// each directory. Walk errors are logged and skipped.
pub fn collect_sources(cfg: &CollectorConfig) -> Vec<PathBuf> {
    debug!("Collecting *.{} files", cfg.extension);
    let root = &cfg.root;
    debug!("Walking directory tree from root: {}", root.display());
    let walker = WalkBuilder::new(root)
        .standard_filters(false)
        .sort_by_file_name(|a, b| a.cmp(b))
        .build();

    let mut files: Vec<PathBuf> = Vec::new();
    for res in walker {
        let dent = match res {
            Ok(dent) => dent,
            Err(err) => {
                debug!("Skipping unreadable entry: {}", err);
                continue;
            }
        };
        let p = dent.path();
        if !dent.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }

        if has_extension(p, &cfg.extension) {
            trace!("Found source file: {}", p.display());
            files.push(p.to_path_buf());
        }
    }
    debug!("Collected {} source files", files.len());
    files
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some(extension)
}

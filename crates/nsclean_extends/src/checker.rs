use anyhow::Result;
use log::{debug, info, warn};
use nsclean_core::{SourceFile, relative_display};
use std::{io::Write, path::Path};

use crate::{
    config::Config,
    extractor::extract_extends,
    imports::has_class_import,
    patterns::Patterns,
    reporter::{
        print_checking, print_completed, print_error, print_failed, print_header,
        print_rewritten, print_scan_summary, print_skipped,
    },
    rewriter::update_extends_statement,
    scanner::find_files_with_extends,
    types::{ExtendsReference, FixResult, ImportOutcome, ImportStatement, RewriteOutcome},
};

enum FileOutcome {
    Skipped,
    Failed,
    Rewritten { reference: ExtendsReference, import: ImportStatement, outcome: ImportOutcome },
}

/// Scan `cfg.target_directory` and rewrite every fully qualified extends
/// clause under the root namespace, reporting progress to `writer`.
///
/// Errors on a single file are reported and counted, they do not abort the run.
pub fn run_fix_extends<W: Write>(mut cfg: Config, writer: &mut W) -> Result<FixResult> {
    info!("Starting extends fix");
    cfg.initialize()?;
    let patterns = Patterns::new(&cfg.root_namespace)?;

    print_header(writer, &cfg)?;
    let root = cfg.target_directory.as_path();
    let files = find_files_with_extends(root, &cfg.extension, &patterns);
    print_scan_summary(writer, files.len())?;
    info!("Found {} files with fully qualified extends", files.len());

    let mut result = FixResult { files_matched: files.len(), ..Default::default() };

    for path in &files {
        print_checking(writer, &relative_display(root, path))?;

        match process_file(path, &patterns) {
            Ok(FileOutcome::Skipped) => {
                result.skipped += 1;
                print_skipped(writer)?;
            }
            Ok(FileOutcome::Failed) => {
                result.failed += 1;
                print_failed(writer)?;
            }
            Ok(FileOutcome::Rewritten { reference, import, outcome }) => {
                result.modified += 1;
                print_rewritten(writer, &reference, &import, outcome)?;
                if outcome == ImportOutcome::ManualRequired {
                    result.manual_imports.push((path.clone(), import));
                }
            }
            Err(err) => {
                warn!("Failed to process {}: {:#}", path.display(), err);
                result.failed += 1;
                print_error(writer, &err)?;
            }
        }
        writer.flush()?;
    }

    debug!(
        "Modified {}, skipped {}, failed {}, {} imports need manual addition",
        result.modified,
        result.skipped,
        result.failed,
        result.manual_imports.len()
    );
    print_completed(writer, result.modified)?;
    Ok(result)
}

fn process_file(path: &Path, patterns: &Patterns) -> Result<FileOutcome> {
    let file = SourceFile::read(path)?;
    debug!("Analyzing file: {}", path.display());

    let Some(reference) = extract_extends(&file.content, patterns) else {
        return Ok(FileOutcome::Skipped);
    };

    let root_namespace = patterns.root_namespace();
    let had_import = has_class_import(
        &file.content,
        root_namespace,
        &reference.namespace_path,
        &reference.base_class,
    );
    debug!("Import already present: {}", had_import);

    let outcome =
        update_extends_statement(path, patterns, &reference.namespace_path, &reference.base_class)?;
    match outcome {
        RewriteOutcome::Rewritten { import: outcome } => {
            let import = reference.import(root_namespace);
            Ok(FileOutcome::Rewritten { reference, import, outcome })
        }
        RewriteOutcome::Unchanged | RewriteOutcome::NotFound => {
            debug!("Rewrite of {} ended with {:?}", path.display(), outcome);
            Ok(FileOutcome::Failed)
        }
    }
}

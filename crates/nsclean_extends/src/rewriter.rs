use anyhow::Result;
use log::{debug, trace};
use nsclean_core::SourceFile;
use std::path::Path;

use crate::{
    constants::NAMESPACE_SEPARATOR,
    imports::contains_import,
    patterns::Patterns,
    types::{ImportOutcome, ImportStatement, RewriteOutcome},
};

#[derive(Debug, PartialEq, Eq)]
enum Rewrite {
    NotFound,
    Unchanged,
    Changed { content: String, import: ImportOutcome },
}

/// Replace the fully qualified base class of the first class declaration in
/// `path` with `class_name`, importing it after the namespace declaration when
/// no identical `use` statement exists yet.
///
/// The declaration is looked up again from the file on disk. The file is only
/// written when its content changes.
pub fn update_extends_statement(
    path: &Path,
    patterns: &Patterns,
    namespace_path: &str,
    class_name: &str,
) -> Result<RewriteOutcome> {
    debug!("Updating extends statement in {}", path.display());
    let mut file = SourceFile::read(path)?;
    let import = ImportStatement::new(patterns.root_namespace(), namespace_path, class_name);

    match rewrite(&file.content, patterns, &import, class_name) {
        Rewrite::NotFound => Ok(RewriteOutcome::NotFound),
        Rewrite::Unchanged => Ok(RewriteOutcome::Unchanged),
        Rewrite::Changed { content, import } => {
            if file.write_back(content)? {
                Ok(RewriteOutcome::Rewritten { import })
            } else {
                Ok(RewriteOutcome::Unchanged)
            }
        }
    }
}

fn rewrite(
    content: &str,
    patterns: &Patterns,
    import: &ImportStatement,
    class_name: &str,
) -> Rewrite {
    let Some(found) = patterns.class_extends(content) else {
        debug!("No class pattern match found");
        return Rewrite::NotFound;
    };
    debug!("Found extends statement: {}", found.statement);

    let token = found.base.strip_prefix(NAMESPACE_SEPARATOR).unwrap_or(found.base);
    if token != import.path {
        debug!("Extends clause {} does not reference {}, leaving it", found.base, import.path);
        return Rewrite::Unchanged;
    }

    let mut updated = String::with_capacity(content.len() + import.path.len() + 6);
    updated.push_str(&content[..found.base_range.start]);
    updated.push_str(class_name);
    updated.push_str(&content[found.base_range.end..]);
    trace!("New extends: class {} extends {}", found.class_name, class_name);

    let import_outcome = if contains_import(content, import) {
        ImportOutcome::AlreadyPresent
    } else {
        insert_import(&mut updated, patterns, import)
    };

    if updated == content {
        debug!("No changes made to the content");
        return Rewrite::Unchanged;
    }
    Rewrite::Changed { content: updated, import: import_outcome }
}

/// Put `import` on the line after the first namespace declaration.
fn insert_import(content: &mut String, patterns: &Patterns, import: &ImportStatement) -> ImportOutcome {
    match patterns.namespace_decl(content) {
        Some(range) => {
            debug!("Found namespace line: {}", &content[range.clone()]);
            content.insert_str(range.end, &format!("\n{}", import.statement()));
            ImportOutcome::Inserted
        }
        None => {
            debug!("No namespace declaration for {}", import);
            ImportOutcome::ManualRequired
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn patterns() -> Patterns {
        Patterns::new("App").unwrap()
    }

    fn rewrite_str(content: &str, namespace_path: &str, class_name: &str) -> Rewrite {
        let import = ImportStatement::new("App", namespace_path, class_name);
        rewrite(content, &patterns(), &import, class_name)
    }

    #[test]
    fn test_rewrite_inserts_import_after_namespace() {
        let content = "<?php\nnamespace App\\Tests;\n\nclass Foo extends App\\Base\\Bar {\n}\n";
        let expected = "<?php\nnamespace App\\Tests;\nuse App\\Base\\Bar;\n\nclass Foo extends Bar {\n}\n";
        assert_eq!(
            rewrite_str(content, "Base", "Bar"),
            Rewrite::Changed { content: expected.to_string(), import: ImportOutcome::Inserted }
        );
    }

    #[test]
    fn test_rewrite_leading_separator_matches_plain_form() {
        let plain = "<?php\nnamespace App\\Tests;\nclass Foo extends App\\Base\\Bar {}\n";
        let leading = "<?php\nnamespace App\\Tests;\nclass Foo extends \\App\\Base\\Bar {}\n";
        assert_eq!(rewrite_str(plain, "Base", "Bar"), rewrite_str(leading, "Base", "Bar"));
    }

    #[test]
    fn test_rewrite_keeps_existing_import() {
        let content = "<?php\nnamespace App\\Tests;\nuse App\\Base\\Bar;\nclass Foo extends App\\Base\\Bar {}\n";
        let expected = "<?php\nnamespace App\\Tests;\nuse App\\Base\\Bar;\nclass Foo extends Bar {}\n";
        assert_eq!(
            rewrite_str(content, "Base", "Bar"),
            Rewrite::Changed {
                content: expected.to_string(),
                import: ImportOutcome::AlreadyPresent
            }
        );
    }

    #[test]
    fn test_rewrite_without_namespace_requires_manual_import() {
        let content = "<?php\nclass Foo extends App\\Bar {}\n";
        assert_eq!(
            rewrite_str(content, "", "Bar"),
            Rewrite::Changed {
                content: "<?php\nclass Foo extends Bar {}\n".to_string(),
                import: ImportOutcome::ManualRequired
            }
        );
    }

    #[test]
    fn test_rewrite_only_touches_base_token() {
        // The class name contains the base class name; only the base changes
        let content = "namespace App\\X;\nclass BarTest extends App\\Bar {}";
        let Rewrite::Changed { content: updated, .. } = rewrite_str(content, "", "Bar") else {
            panic!("expected a change");
        };
        assert!(updated.contains("class BarTest extends Bar {}"));
    }

    #[test]
    fn test_rewrite_short_name_is_unchanged() {
        let content = "<?php\nnamespace App\\Tests;\nclass Foo extends Bar {}\n";
        assert_eq!(rewrite_str(content, "Base", "Bar"), Rewrite::Unchanged);
    }

    #[test]
    fn test_rewrite_without_class_is_not_found() {
        assert_eq!(rewrite_str("<?php\nnamespace App;\n", "", "Bar"), Rewrite::NotFound);
    }

    #[test]
    fn test_update_writes_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("Foo.php");
        fs::write(&path, "<?php\nnamespace App\\Tests;\nclass Foo extends App\\Base\\Bar {}\n").unwrap();

        let outcome = update_extends_statement(&path, &patterns(), "Base", "Bar").unwrap();
        assert_eq!(outcome, RewriteOutcome::Rewritten { import: ImportOutcome::Inserted });
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "<?php\nnamespace App\\Tests;\nuse App\\Base\\Bar;\nclass Foo extends Bar {}\n"
        );
    }

    #[test]
    fn test_update_leaves_already_fixed_file_alone() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("Foo.php");
        let content = "<?php\nnamespace App\\Tests;\nuse App\\Base\\Bar;\nclass Foo extends Bar {}\n";
        fs::write(&path, content).unwrap();

        let outcome = update_extends_statement(&path, &patterns(), "Base", "Bar").unwrap();
        assert_eq!(outcome, RewriteOutcome::Unchanged);
        assert_eq!(fs::read_to_string(&path).unwrap(), content);
    }

    #[test]
    fn test_update_missing_file_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("Gone.php");
        assert!(update_extends_statement(&path, &patterns(), "", "Bar").is_err());
    }
}

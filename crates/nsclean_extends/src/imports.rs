use log::debug;

use crate::types::ImportStatement;

/// Whether `content` already contains `use <root>\<namespace_path>\<class_name>;`
/// verbatim.
///
/// Aliased (`use X as Y;`) and grouped (`use X\{A, B};`) imports are not
/// recognized.
pub fn has_class_import(
    content: &str,
    root_namespace: &str,
    namespace_path: &str,
    class_name: &str,
) -> bool {
    let import = ImportStatement::new(root_namespace, namespace_path, class_name);
    contains_import(content, &import)
}

pub(crate) fn contains_import(content: &str, import: &ImportStatement) -> bool {
    let found = content.contains(&import.statement());
    if found {
        debug!("Use statement already exists: {}", import);
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_exact_use_statement() {
        let content = "<?php\nnamespace App\\Tests;\nuse App\\Base\\Bar;\n";
        assert!(has_class_import(content, "App", "Base", "Bar"));
    }

    #[test]
    fn test_detects_import_directly_under_root() {
        assert!(has_class_import("use App\\Bar;", "App", "", "Bar"));
        assert!(!has_class_import("use App\\Bar;", "App", "Base", "Bar"));
    }

    #[test]
    fn test_equivalent_forms_are_not_detected() {
        assert!(!has_class_import("use \\App\\Base\\Bar;", "App", "Base", "Bar"));
        assert!(!has_class_import("use App\\Base\\Bar as Bar;", "App", "Base", "Bar"));
        assert!(!has_class_import("use App\\Base\\{Bar, Baz};", "App", "Base", "Bar"));
    }

    #[test]
    fn test_separators_are_literal() {
        assert!(!has_class_import("use AppxBasexBar;", "App", "Base", "Bar"));
    }
}

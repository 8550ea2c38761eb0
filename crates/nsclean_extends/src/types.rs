use std::{fmt, path::PathBuf};

use crate::constants::NAMESPACE_SEPARATOR;

/// A fully qualified base class found in a class declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtendsReference {
    /// Name of the class being declared
    pub class_name: String,
    /// Base class reference exactly as written, leading separator included
    pub raw_reference: String,
    /// Segments between the root namespace and the class, possibly empty
    pub namespace_path: String,
    /// Bare identifier of the base class
    pub base_class: String,
}

impl ExtendsReference {
    /// The declaration as it appeared before rewriting.
    pub fn original_extends(&self) -> String {
        format!("class {} extends {}", self.class_name, self.raw_reference)
    }

    pub fn import(&self, root_namespace: &str) -> ImportStatement {
        ImportStatement::new(root_namespace, &self.namespace_path, &self.base_class)
    }
}

/// A `use` statement for a single class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportStatement {
    /// Fully qualified class path, without leading separator
    pub path: String,
}

impl ImportStatement {
    /// Join `root\namespace_path\class_name`, skipping an empty namespace path.
    pub fn new(root_namespace: &str, namespace_path: &str, class_name: &str) -> Self {
        let mut path = String::from(root_namespace);
        path.push(NAMESPACE_SEPARATOR);
        if !namespace_path.is_empty() {
            path.push_str(namespace_path);
            path.push(NAMESPACE_SEPARATOR);
        }
        path.push_str(class_name);
        Self { path }
    }

    /// Source text of the statement, e.g. `use App\Base\Bar;`
    pub fn statement(&self) -> String {
        format!("use {};", self.path)
    }
}

impl fmt::Display for ImportStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "use {};", self.path)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportOutcome {
    AlreadyPresent,
    Inserted,
    /// No namespace declaration to anchor the import; the user has to add it
    ManualRequired,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RewriteOutcome {
    Rewritten { import: ImportOutcome },
    /// The extends clause no longer carries the expected fully qualified name
    Unchanged,
    /// No `class ... extends ...` declaration in the file
    NotFound,
}

#[derive(Debug, Clone, Default)]
pub struct FixResult {
    /// Files flagged by the scan
    pub files_matched: usize,
    pub modified: usize,
    /// Files whose class declaration could not be resolved
    pub skipped: usize,
    pub failed: usize,
    /// Imports that could not be inserted automatically
    pub manual_imports: Vec<(PathBuf, ImportStatement)>,
}

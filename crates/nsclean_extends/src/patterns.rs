use anyhow::{Context, Result};
use regex::Regex;
use std::ops::Range;

/// `class <Identifier> extends <Reference>`, the reference running up to the
/// first `{`, `;` or whitespace.
const CLASS_EXTENDS: &str = r"class\s+([A-Za-z0-9_]+)\s+extends\s+([^{;\s]+)";

/// First `namespace <path>;` declaration.
const NAMESPACE_DECL: &str = r"namespace\s+([^;]+);";

/// Compiled patterns for one run.
#[derive(Debug, Clone)]
pub struct Patterns {
    root_namespace: String,
    qualified_extends: Regex,
    class_extends: Regex,
    namespace_decl: Regex,
}

/// The first `class ... extends ...` statement of a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ClassExtends<'a> {
    pub(crate) statement: &'a str,
    pub(crate) class_name: &'a str,
    pub(crate) base: &'a str,
    /// Byte range of `base` in the searched text
    pub(crate) base_range: Range<usize>,
}

impl Patterns {
    pub fn new(root_namespace: &str) -> Result<Self> {
        let qualified = format!(r"extends\s+(\\?{}\\[^{{;\s]+)", regex::escape(root_namespace));
        Ok(Self {
            root_namespace: root_namespace.to_string(),
            qualified_extends: Regex::new(&qualified)
                .with_context(|| format!("Invalid root namespace pattern: {}", qualified))?,
            class_extends: Regex::new(CLASS_EXTENDS).context("Invalid class pattern")?,
            namespace_decl: Regex::new(NAMESPACE_DECL).context("Invalid namespace pattern")?,
        })
    }

    pub fn root_namespace(&self) -> &str {
        &self.root_namespace
    }

    /// The full `extends <Root>\...` text of the first fully qualified
    /// extends in `content`, optionally with a leading separator.
    pub fn find_qualified_extends<'a>(&self, content: &'a str) -> Option<&'a str> {
        self.qualified_extends.find(content).map(|m| m.as_str())
    }

    pub(crate) fn class_extends<'a>(&self, content: &'a str) -> Option<ClassExtends<'a>> {
        let caps = self.class_extends.captures(content)?;
        let statement = caps.get(0)?;
        let class_name = caps.get(1)?;
        let base = caps.get(2)?;
        Some(ClassExtends {
            statement: statement.as_str(),
            class_name: class_name.as_str(),
            base: base.as_str(),
            base_range: base.range(),
        })
    }

    /// Byte range of the first namespace declaration, terminating `;` included.
    pub(crate) fn namespace_decl(&self, content: &str) -> Option<Range<usize>> {
        self.namespace_decl.find(content).map(|m| m.range())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patterns() -> Patterns {
        Patterns::new("App").unwrap()
    }

    #[test]
    fn test_qualified_extends_with_and_without_leading_separator() {
        let p = patterns();
        assert_eq!(
            p.find_qualified_extends("class Foo extends App\\Base\\Bar {"),
            Some("extends App\\Base\\Bar")
        );
        assert_eq!(
            p.find_qualified_extends("class Foo extends \\App\\Bar{"),
            Some("extends \\App\\Bar")
        );
    }

    #[test]
    fn test_qualified_extends_requires_root_namespace() {
        let p = patterns();
        assert_eq!(p.find_qualified_extends("class Foo extends Bar {"), None);
        assert_eq!(p.find_qualified_extends("class Foo extends Vendor\\App\\Bar {"), None);
        assert_eq!(p.find_qualified_extends("class Foo extends Application\\Bar {"), None);
        // The root namespace alone is not a qualified reference
        assert_eq!(p.find_qualified_extends("class Foo extends App {"), None);
    }

    #[test]
    fn test_root_namespace_is_escaped() {
        let p = Patterns::new("A.B").unwrap();
        assert_eq!(p.find_qualified_extends("class Foo extends AxB\\Bar {"), None);
        assert!(p.find_qualified_extends("class Foo extends A.B\\Bar {").is_some());
    }

    #[test]
    fn test_class_extends_captures_first_declaration() {
        let p = patterns();
        let content = "<?php\nclass First extends App\\One {}\nclass Second extends App\\Two {}\n";
        let m = p.class_extends(content).unwrap();
        assert_eq!(m.statement, "class First extends App\\One");
        assert_eq!(m.class_name, "First");
        assert_eq!(m.base, "App\\One");
        assert_eq!(&content[m.base_range.clone()], "App\\One");
    }

    #[test]
    fn test_class_extends_stops_at_brace_and_semicolon() {
        let p = patterns();
        assert_eq!(p.class_extends("class A extends B{").unwrap().base, "B");
        assert_eq!(p.class_extends("class A extends B;").unwrap().base, "B");
        assert_eq!(p.class_extends("class A  extends\n\tB implements C").unwrap().base, "B");
        assert!(p.class_extends("class A implements B {").is_none());
    }

    #[test]
    fn test_namespace_decl() {
        let p = patterns();
        let content = "<?php\n\nnamespace App\\Tests;\n\nclass A {}";
        let range = p.namespace_decl(content).unwrap();
        assert_eq!(&content[range], "namespace App\\Tests;");
        assert!(p.namespace_decl("<?php\nclass A {}").is_none());
    }
}

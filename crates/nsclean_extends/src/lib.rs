//! Fully qualified `extends` clean-up for PHP projects.
//!
//! This crate finds classes that extend a base class through a fully qualified
//! name under the project's root namespace, e.g.
//!
//! ```text
//! class Test_Rest_Controller extends GL_Color_Palette_Generator\Tests\Base\WP_Mock_Test_Case
//! ```
//!
//! and rewrites them to extend the short name, importing the base class with a
//! `use` statement placed right after the `namespace` declaration:
//!
//! ```text
//! use GL_Color_Palette_Generator\Tests\Base\WP_Mock_Test_Case;
//! class Test_Rest_Controller extends WP_Mock_Test_Case
//! ```
//!
//! Detection is pattern based. Comments, strings and declarations split over
//! several lines are not understood, and only the first class declaration of a
//! file is handled.
//!
//! # Examples
//!
//! ```no_run
//! use nsclean_extends::{Config, run_fix_extends};
//! use std::io::{BufWriter, Write};
//!
//! # fn main() -> anyhow::Result<()> {
//! let cfg = Config {
//!     target_directory: std::path::PathBuf::from("/path/to/plugin/includes"),
//!     debug: false,
//!     root_namespace: "GL_Color_Palette_Generator".to_string(),
//!     extension: "php".to_string(),
//! };
//!
//! let mut stdout = BufWriter::new(std::io::stdout());
//! let result = run_fix_extends(cfg, &mut stdout)?;
//! stdout.flush()?;
//! println!("{} files modified", result.modified);
//! # Ok(())
//! # }
//! ```

mod checker;
mod config;
mod constants;
mod extractor;
mod imports;
mod patterns;
mod reporter;
mod rewriter;
mod scanner;
mod types;

// Re-export public API
pub use checker::run_fix_extends;
pub use config::Config;
pub use constants::{DEFAULT_EXTENSION, DEFAULT_ROOT_NAMESPACE, NAMESPACE_SEPARATOR};
pub use extractor::extract_extends;
pub use imports::has_class_import;
pub use patterns::Patterns;
pub use rewriter::update_extends_statement;
pub use scanner::find_files_with_extends;
pub use types::{ExtendsReference, FixResult, ImportOutcome, ImportStatement, RewriteOutcome};

//! Defaults for the PHP projects this tool was written for.

/// Root namespace of the plugin whose own classes get short names
pub const DEFAULT_ROOT_NAMESPACE: &str = "GL_Color_Palette_Generator";

/// Extension of the files to rewrite, without the leading dot
pub const DEFAULT_EXTENSION: &str = "php";

/// PHP namespace separator
pub const NAMESPACE_SEPARATOR: char = '\\';

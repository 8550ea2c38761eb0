use log::{debug, trace};

use crate::{constants::NAMESPACE_SEPARATOR, patterns::Patterns, types::ExtendsReference};

/// Split the first `class X extends Y` of `content` into an [`ExtendsReference`].
///
/// Returns `None` when there is no class/extends declaration or when `Y`
/// (ignoring one leading separator) does not live under the root namespace.
pub fn extract_extends(content: &str, patterns: &Patterns) -> Option<ExtendsReference> {
    let Some(found) = patterns.class_extends(content) else {
        debug!("No class/extends declaration found");
        return None;
    };
    debug!("Found class {} extends {}", found.class_name, found.base);

    let qualified = match found.base.strip_prefix(NAMESPACE_SEPARATOR) {
        Some(stripped) => {
            trace!("Removing leading separator from {}", found.base);
            stripped
        }
        None => found.base,
    };

    let root = patterns.root_namespace();
    let Some(remaining) =
        qualified.strip_prefix(root).and_then(|rest| rest.strip_prefix(NAMESPACE_SEPARATOR))
    else {
        debug!("Base class {} is not under root namespace {}", qualified, root);
        return None;
    };

    let (namespace_path, base_class) =
        remaining.rsplit_once(NAMESPACE_SEPARATOR).unwrap_or(("", remaining));
    if base_class.is_empty() {
        debug!("Base class reference {} has no class name", found.base);
        return None;
    }
    trace!("Namespace path: '{}', base class: '{}'", namespace_path, base_class);

    Some(ExtendsReference {
        class_name: found.class_name.to_string(),
        raw_reference: found.base.to_string(),
        namespace_path: namespace_path.to_string(),
        base_class: base_class.to_string(),
    })
}

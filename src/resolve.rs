//! Relative-to-alias path resolution
//!
//! Re-expresses a `../`-relative import specifier from a fixed source root
//! instead of from the importing file's directory. Everything here is pure
//! string and path manipulation; nothing touches the filesystem.

use std::path::{Component, Path};

const PARENT_SEGMENT: &str = "../";

/// Strip leading `../` segments from a specifier.
///
/// Returns the number of segments stripped and the remaining path
/// (e.g. `../../lib/utils` -> `(2, "lib/utils")`).
pub fn split_relative(spec: &str) -> (usize, &str) {
    let mut rest = spec;
    let mut levels_up = 0;
    while let Some(stripped) = rest.strip_prefix(PARENT_SEGMENT) {
        levels_up += 1;
        rest = stripped;
    }
    (levels_up, rest)
}

/// Directory components of a root-relative file path, file name excluded.
///
/// `features/auth/Login.ts` -> `["features", "auth"]`. Empty and `.`
/// components are skipped.
pub fn directory_components(rel_from_root: &Path) -> Vec<String> {
    rel_from_root
        .parent()
        .map(|dir| {
            dir.components()
                .filter_map(|c| match c {
                    Component::Normal(name) => Some(name.to_string_lossy().into_owned()),
                    _ => None,
                })
                .collect()
        })
        .unwrap_or_default()
}

/// Rewrite a relative specifier into an alias-rooted one.
///
/// `rel_from_root` is the importing file's path relative to the source root.
/// When the specifier climbs at least as many levels as the file is nested,
/// it lands on the root itself and only the alias prefix is prepended.
pub fn resolve_alias(rel_from_root: &Path, spec: &str, alias_prefix: &str) -> String {
    let (levels_up, clean_path) = split_relative(spec);
    let mut dirs = directory_components(rel_from_root);
    let current_depth = dirs.len();

    if levels_up >= current_depth {
        return format!("{}{}", alias_prefix, clean_path);
    }

    dirs.truncate(current_depth - levels_up);
    if dirs.is_empty() {
        format!("{}{}", alias_prefix, clean_path)
    } else {
        format!("{}{}/{}", alias_prefix, dirs.join("/"), clean_path)
    }
}

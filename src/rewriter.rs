//! Relative import rewriting
//!
//! Finds `import ... from '../...'` statements and replaces the specifier
//! with its alias-rooted equivalent, writing the file back only when the
//! content actually changed.

use regex::{Captures, Regex};
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use crate::config::RewriteConfig;
use crate::error::RewriteError;
use crate::resolve::resolve_alias;

/// One import statement with a `../` specifier.
///
/// Groups: 1 = `import ... from '` (kept verbatim), 2 = the relative
/// specifier, 3 = the closing quote. `[^;]` keeps a match inside a single
/// statement.
static RELATIVE_IMPORT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(import[^;]*?from\s+['"])(\.\./[^'"]*?)(['"])"#)
        .expect("RELATIVE_IMPORT regex is invalid")
});

/// Result of rewriting one piece of source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    pub content: String,
    /// Number of specifiers whose text changed
    pub replacements: usize,
    pub changed: bool,
}

/// Rewrites relative imports in files below a fixed source root.
#[derive(Debug, Clone)]
pub struct Rewriter {
    root: PathBuf,
    alias_prefix: String,
}

impl Rewriter {
    pub fn new(config: &RewriteConfig) -> Self {
        Self {
            root: absolute_or_self(&config.root),
            alias_prefix: config.alias_prefix.clone(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of `path` relative to the source root.
    ///
    /// A file outside the root is treated as sitting directly in it.
    fn relative_to_root(&self, path: &Path) -> PathBuf {
        let path = absolute_or_self(path);
        match path.strip_prefix(&self.root) {
            Ok(rel) => rel.to_path_buf(),
            Err(_) => path
                .file_name()
                .map(PathBuf::from)
                .unwrap_or_default(),
        }
    }

    /// Rewrite every relative import in `content`, as if it were the text of `path`.
    pub fn rewrite_content(&self, path: &Path, content: &str) -> Rewrite {
        let rel_from_root = self.relative_to_root(path);
        let mut replacements = 0;

        let rewritten = RELATIVE_IMPORT.replace_all(content, |caps: &Captures| {
            let spec = &caps[2];
            let new_path = resolve_alias(&rel_from_root, spec, &self.alias_prefix);
            if new_path != spec {
                replacements += 1;
            }
            format!("{}{}{}", &caps[1], new_path, &caps[3])
        });

        let changed = rewritten.as_ref() != content;
        Rewrite {
            content: rewritten.into_owned(),
            replacements,
            changed,
        }
    }

    /// Rewrite a file in place.
    ///
    /// The file is only opened for writing when its content changed.
    /// Returns the rewrite with `content` holding the new text.
    pub fn rewrite_file(&self, path: &Path) -> Result<Rewrite, RewriteError> {
        let original = std::fs::read_to_string(path).map_err(|source| RewriteError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let rewrite = self.rewrite_content(path, &original);
        if rewrite.changed {
            std::fs::write(path, &rewrite.content).map_err(|source| RewriteError::Write {
                path: path.to_path_buf(),
                source,
            })?;
        }

        Ok(rewrite)
    }
}

/// Lexically absolute form of `path`, without resolving symlinks.
pub(crate) fn absolute_or_self(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}

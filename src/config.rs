//! Configuration types for scanning and rewriting

use std::path::PathBuf;

/// Extensions scanned when none are given explicitly.
pub const DEFAULT_EXTENSIONS: &[&str] = &[".ts", ".tsx", ".js", ".jsx"];

/// Alias prefix substituted for the source root.
pub const DEFAULT_ALIAS_PREFIX: &str = "@/";

/// Configuration shared by the scanner and the rewriter.
#[derive(Debug, Clone)]
pub struct RewriteConfig {
    /// Source root: the directory the alias prefix stands for.
    pub root: PathBuf,
    /// Prefix written in place of the source root (e.g. `@/`).
    pub alias_prefix: String,
    /// File name suffixes to consider, always with a leading dot.
    pub extensions: Vec<String>,
    /// Honor .gitignore/.ignore files while walking
    pub respect_gitignore: bool,
    /// Entry names or globs to skip while walking
    pub ignore_patterns: Vec<String>,
}

impl Default for RewriteConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("src"),
            alias_prefix: DEFAULT_ALIAS_PREFIX.to_string(),
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            respect_gitignore: false,
            ignore_patterns: Vec::new(),
        }
    }
}

impl RewriteConfig {
    /// Create a config for `root` with default alias and extensions.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Default::default()
        }
    }

    pub fn with_alias_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.alias_prefix = prefix.into();
        self
    }

    /// Replace the extension set. Accepts `ts` or `.ts`; empty entries are dropped.
    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.extensions = extensions
            .into_iter()
            .filter_map(|e| normalize_extension(e.as_ref()))
            .collect();
        self
    }

    /// Check whether a file name ends in one of the configured extensions.
    pub fn matches_extension(&self, file_name: &str) -> bool {
        self.extensions.iter().any(|ext| file_name.ends_with(ext.as_str()))
    }
}

/// Normalize a user-supplied extension to dotted form (`tsx` -> `.tsx`).
pub fn normalize_extension(ext: &str) -> Option<String> {
    let ext = ext.trim();
    let bare = ext.strip_prefix('.').unwrap_or(ext);
    if bare.is_empty() {
        return None;
    }
    Some(format!(".{}", bare))
}

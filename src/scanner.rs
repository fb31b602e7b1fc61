//! Candidate discovery
//!
//! Walks the source root and keeps files whose name carries a configured
//! extension and whose text contains at least one `from '../` import.
//! Anything that cannot be read is skipped without error.

use glob::Pattern;
use ignore::WalkBuilder;
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use crate::config::RewriteConfig;
use crate::rewriter::absolute_or_self;

/// Cheap probe for `from '../` with either quote style.
static RELATIVE_FROM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"from\s+['"]\.\./"#).expect("RELATIVE_FROM regex is invalid")
});

/// Check whether source text contains a relative `from` specifier.
pub fn has_relative_import(content: &str) -> bool {
    RELATIVE_FROM.is_match(content)
}

/// Finds files under the source root that may need rewriting.
pub struct Scanner {
    config: RewriteConfig,
    root: PathBuf,
}

impl Scanner {
    pub fn new(config: RewriteConfig) -> Self {
        let root = absolute_or_self(&config.root);
        Self { config, root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Walk the root and return candidate files in walk order.
    ///
    /// Entries within a directory are visited sorted by file name, so the
    /// result is stable for a given directory listing.
    pub fn scan(&self) -> Vec<PathBuf> {
        let respect = self.config.respect_gitignore;
        let ignore_patterns = IgnorePatterns::new(&self.config.ignore_patterns);

        let walker = WalkBuilder::new(&self.root)
            .hidden(respect)
            .ignore(respect)
            .parents(respect)
            .git_ignore(respect)
            .git_global(respect)
            .git_exclude(respect)
            .require_git(false)
            .follow_links(false)
            .sort_by_file_name(|a, b| a.cmp(b))
            .filter_entry(move |entry| !ignore_patterns.is_ignored(entry.path()))
            .build();

        let mut candidates = Vec::new();
        // Unreadable directories surface as Err entries; flatten drops them
        for entry in walker.flatten() {
            let path = entry.path();
            if path == self.root.as_path() {
                continue;
            }
            if self.is_candidate(path) {
                candidates.push(path.to_path_buf());
            }
        }

        candidates
    }

    /// Check a single path against the extension filter and content probe.
    pub fn is_candidate(&self, path: &Path) -> bool {
        if !path.is_file() {
            return false;
        }

        let name_matches = path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|name| self.config.matches_extension(name));
        if !name_matches {
            return false;
        }

        match std::fs::read_to_string(path) {
            Ok(content) => has_relative_import(&content),
            Err(_) => false,
        }
    }
}

/// Entry-name exclusions applied during the walk.
struct IgnorePatterns {
    names: Vec<String>,
    globs: Vec<Pattern>,
}

impl IgnorePatterns {
    fn new(patterns: &[String]) -> Self {
        Self {
            names: patterns.to_vec(),
            globs: patterns.iter().filter_map(|p| Pattern::new(p).ok()).collect(),
        }
    }

    fn is_ignored(&self, path: &Path) -> bool {
        let name = path
            .file_name()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();

        // Always skip the .git directory
        if name == ".git" {
            return true;
        }

        self.names.iter().any(|n| *n == name) || self.globs.iter().any(|g| g.matches(&name))
    }
}

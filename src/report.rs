//! Per-file outcomes and run summary

use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::error::RewriteError;
use crate::rewriter::{Rewrite, Rewriter};

/// What happened to one candidate file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FileStatus {
    Rewritten,
    Unchanged,
    Failed { error: String },
}

/// Outcome for a single candidate file.
#[derive(Debug, Clone, Serialize)]
pub struct FileOutcome {
    pub path: PathBuf,
    /// Path shown to the user (relative to the project directory when possible)
    pub display_path: String,
    #[serde(flatten)]
    pub status: FileStatus,
    #[serde(skip_serializing_if = "is_zero")]
    pub replacements: usize,
}

fn is_zero(n: &usize) -> bool {
    *n == 0
}

impl FileOutcome {
    /// Fold a rewrite result into an outcome.
    pub fn from_result(
        path: &Path,
        display_path: String,
        result: Result<Rewrite, RewriteError>,
    ) -> Self {
        let (status, replacements) = match result {
            Ok(rewrite) if rewrite.changed => (FileStatus::Rewritten, rewrite.replacements),
            Ok(_) => (FileStatus::Unchanged, 0),
            Err(e) => (
                FileStatus::Failed {
                    error: e.cause(),
                },
                0,
            ),
        };

        Self {
            path: path.to_path_buf(),
            display_path,
            status,
            replacements,
        }
    }

    pub fn is_rewritten(&self) -> bool {
        self.status == FileStatus::Rewritten
    }

    pub fn is_failed(&self) -> bool {
        matches!(self.status, FileStatus::Failed { .. })
    }
}

/// Report for a whole run, in processing order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunReport {
    pub root: PathBuf,
    pub examined: usize,
    pub rewritten: usize,
    pub unchanged: usize,
    pub failed: usize,
    pub files: Vec<FileOutcome>,
}

impl RunReport {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Default::default()
        }
    }

    /// Record an outcome and update the counts.
    pub fn record(&mut self, outcome: FileOutcome) {
        self.examined += 1;
        match outcome.status {
            FileStatus::Rewritten => self.rewritten += 1,
            FileStatus::Unchanged => self.unchanged += 1,
            FileStatus::Failed { .. } => self.failed += 1,
        }
        self.files.push(outcome);
    }

    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }
}

/// Path relative to `base` for display, falling back to the full path.
pub fn display_path(path: &Path, base: &Path) -> String {
    path.strip_prefix(base)
        .unwrap_or(path)
        .to_string_lossy()
        .to_string()
}

/// Rewrite every candidate in order, collecting outcomes.
///
/// `on_outcome` is called after each file so callers can stream progress.
/// A failing file never stops the remaining ones.
pub fn rewrite_all<F>(rewriter: &Rewriter, candidates: &[PathBuf], mut on_outcome: F) -> RunReport
where
    F: FnMut(&FileOutcome),
{
    let root = rewriter.root();
    let display_base = root.parent().unwrap_or(root);
    let mut report = RunReport::new(root);

    for path in candidates {
        let result = rewriter.rewrite_file(path);
        let outcome = FileOutcome::from_result(path, display_path(path, display_base), result);
        on_outcome(&outcome);
        report.record(outcome);
    }

    report
}

//! aliasfix - rewrite relative `../` imports into alias-rooted paths

pub mod config;
pub mod error;
pub mod output;
pub mod report;
pub mod resolve;
pub mod rewriter;
pub mod scanner;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use config::{DEFAULT_ALIAS_PREFIX, DEFAULT_EXTENSIONS, RewriteConfig};
pub use error::RewriteError;
pub use output::{ReportPrinter, print_report_json};
pub use report::{FileOutcome, FileStatus, RunReport, rewrite_all};
pub use resolve::resolve_alias;
pub use rewriter::{Rewrite, Rewriter};
pub use scanner::{Scanner, has_relative_import};

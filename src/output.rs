//! Console and JSON rendering of run results

use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::report::{FileOutcome, FileStatus, RunReport};

/// Writes the candidate count, per-file status lines and the summary.
pub struct ReportPrinter<W: WriteColor> {
    out: W,
}

impl ReportPrinter<StandardStream> {
    /// Printer on stdout, colored when `use_color` is set.
    pub fn stdout(use_color: bool) -> Self {
        let choice = if use_color {
            ColorChoice::Always
        } else {
            ColorChoice::Never
        };
        Self::new(StandardStream::stdout(choice))
    }
}

impl<W: WriteColor> ReportPrinter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn print_found(&mut self, count: usize) -> io::Result<()> {
        writeln!(
            self.out,
            "Found {} files with relative imports to fix:",
            count
        )
    }

    /// One status line per file.
    pub fn print_outcome(&mut self, outcome: &FileOutcome) -> io::Result<()> {
        let mut spec = ColorSpec::new();
        match &outcome.status {
            FileStatus::Rewritten => {
                spec.set_fg(Some(Color::Green)).set_bold(true);
                self.out.set_color(&spec)?;
                write!(self.out, "Fixed:")?;
                self.out.reset()?;
                writeln!(self.out, " {}", outcome.display_path)
            }
            FileStatus::Unchanged => {
                spec.set_dimmed(true);
                self.out.set_color(&spec)?;
                write!(self.out, "No changes:")?;
                self.out.reset()?;
                writeln!(self.out, " {}", outcome.display_path)
            }
            FileStatus::Failed { error } => {
                spec.set_fg(Some(Color::Red)).set_bold(true);
                self.out.set_color(&spec)?;
                write!(self.out, "Error processing")?;
                self.out.reset()?;
                writeln!(self.out, " {}: {}", outcome.display_path, error)
            }
        }
    }

    pub fn print_summary(&mut self, report: &RunReport) -> io::Result<()> {
        writeln!(self.out)?;
        let mut bold = ColorSpec::new();
        bold.set_bold(true);
        self.out.set_color(&bold)?;
        write!(self.out, "Summary:")?;
        self.out.reset()?;
        write!(
            self.out,
            " Fixed {} files out of {} total",
            report.rewritten, report.examined
        )?;
        if report.failed > 0 {
            let mut red = ColorSpec::new();
            red.set_fg(Some(Color::Red));
            write!(self.out, " (")?;
            self.out.set_color(&red)?;
            write!(self.out, "{} failed", report.failed)?;
            self.out.reset()?;
            write!(self.out, ")")?;
        }
        writeln!(self.out)
    }
}

/// Print a run report as pretty JSON on stdout.
pub fn print_report_json(report: &RunReport) -> io::Result<()> {
    let json = serde_json::to_string_pretty(report).map_err(io::Error::other)?;
    println!("{}", json);
    Ok(())
}

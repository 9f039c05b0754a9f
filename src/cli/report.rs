//! Report formatting and printing utilities.
//!
//! Kept apart from the checks so the library can be used without any
//! terminal output. Every `print_*` function has a `*_to` variant writing
//! to a custom writer, which the tests use.

use std::{
    io::{self, Write},
    path::Path,
};

use colored::Colorize;

use crate::{
    document::Document,
    report::{ReportGroup, ReportItem, Severity},
};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

const INDENT: &str = "  ";

/// Prints document reports according to the `quiet` and `verbose` settings.
#[derive(Debug, Clone, Copy, Default)]
pub struct Printer {
    quiet: bool,
    verbose: bool,
    indent: usize,
}

impl Printer {
    pub fn new(quiet: bool, verbose: bool) -> Self {
        Self {
            quiet,
            verbose,
            indent: 0,
        }
    }

    /// A printer nesting its output one level deeper.
    pub fn indented(&self) -> Self {
        Self {
            indent: self.indent + 1,
            ..*self
        }
    }

    /// Print the report of `doc` and return whether it fails the run.
    pub fn print_document(&self, doc: &Document, fatal: bool) -> bool {
        self.print_document_to(doc, fatal, &mut io::stdout().lock())
    }

    pub fn print_document_to<W: Write>(&self, doc: &Document, fatal: bool, writer: &mut W) -> bool {
        let failed = doc.report.is_fatal(fatal);
        let name = doc.name();

        if self.quiet {
            if failed {
                self.print_summary_to(&name, doc, failed, writer);
            }
            return failed;
        }

        let _ = writeln!(writer, "{}{}", self.pad(0), name.bold());
        for group in doc.report.groups() {
            self.print_group_to(group, writer);
        }
        self.print_summary_to(&name, doc, failed, writer);
        failed
    }

    /// Print `message` in verbose mode only.
    pub fn info(&self, message: &str) {
        self.info_to(message, &mut io::stdout().lock());
    }

    pub fn info_to<W: Write>(&self, message: &str, writer: &mut W) {
        if self.verbose && !self.quiet {
            let _ = writeln!(writer, "{}{}", self.pad(0), message.dimmed());
        }
    }

    /// Announce a translation file written from its reference.
    pub fn created(&self, path: &Path) {
        self.info(&format!("Created {}", path.display()));
    }

    fn print_group_to<W: Write>(&self, group: &ReportGroup, writer: &mut W) {
        let _ = writeln!(writer, "{}{}", self.pad(1), group.label.cyan());
        for item in group.items() {
            let _ = writeln!(writer, "{}{}", self.pad(2), format_item(item));
        }
    }

    fn print_summary_to<W: Write>(&self, name: &str, doc: &Document, failed: bool, writer: &mut W) {
        let report = &doc.report;
        let counts = format_counts(report.errors(), report.warnings());
        let line = if failed {
            format!("{} {}: {}", FAILURE_MARK.red(), name, counts)
        } else if report.is_empty() {
            format!(
                "{} {}: {}",
                SUCCESS_MARK.green(),
                name,
                "no problems found".green()
            )
        } else {
            format!("{} {}: {}", SUCCESS_MARK.green(), name, counts)
        };
        let level = if self.quiet { 0 } else { 1 };
        let _ = writeln!(writer, "{}{}", self.pad(level), line);
    }

    fn pad(&self, level: usize) -> String {
        INDENT.repeat(self.indent + level)
    }
}

/// `error: Line 3:5: "key": message`
pub fn format_item(item: &ReportItem) -> String {
    let severity = match item.severity {
        Severity::Error => "error".bold().red(),
        Severity::Warn => "warning".bold().yellow(),
    };
    format!("{}: {}", severity, item)
}

fn format_counts(errors: usize, warnings: usize) -> String {
    format!(
        "{} {}, {} {}",
        errors,
        if errors == 1 { "error" } else { "errors" }.red(),
        warnings,
        if warnings == 1 { "warning" } else { "warnings" }.yellow()
    )
}

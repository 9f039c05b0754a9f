//! Diagnostics produced by checks.
//!
//! Each check invocation yields one [`ReportGroup`]; a document folds its
//! non-empty groups into a [`Report`].

use std::fmt;

/// Severity level of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warn,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warn => write!(f, "warning"),
        }
    }
}

/// Location of a diagnostic in a file. Lines and columns are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    Line(usize),
    LineCol(usize, usize),
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Position::Line(line) => write!(f, "{}", line),
            Position::LineCol(line, col) => write!(f, "{}:{}", line, col),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportItem {
    pub severity: Severity,
    pub position: Option<Position>,
    pub message: String,
    pub translation_key: Option<String>,
}

impl ReportItem {
    pub fn error(
        position: Option<Position>,
        message: impl Into<String>,
        translation_key: Option<&str>,
    ) -> Self {
        Self::new(Severity::Error, position, message, translation_key)
    }

    pub fn warn(
        position: Option<Position>,
        message: impl Into<String>,
        translation_key: Option<&str>,
    ) -> Self {
        Self::new(Severity::Warn, position, message, translation_key)
    }

    fn new(
        severity: Severity,
        position: Option<Position>,
        message: impl Into<String>,
        translation_key: Option<&str>,
    ) -> Self {
        Self {
            severity,
            position,
            message: message.into(),
            translation_key: translation_key.map(str::to_string),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for ReportItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(position) = &self.position {
            write!(f, "Line {}: ", position)?;
        }
        if let Some(key) = &self.translation_key {
            write!(f, "\"{}\": ", key)?;
        }
        write!(f, "{}", self.message)
    }
}

/// Diagnostics of a single check invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportGroup {
    pub label: String,
    items: Vec<ReportItem>,
    errors: usize,
    warnings: usize,
}

impl ReportGroup {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            items: Vec::new(),
            errors: 0,
            warnings: 0,
        }
    }

    pub fn add(&mut self, item: ReportItem) {
        match item.severity {
            Severity::Error => self.errors += 1,
            Severity::Warn => self.warnings += 1,
        }
        self.items.push(item);
    }

    pub fn error(
        &mut self,
        position: Option<Position>,
        message: impl Into<String>,
        translation_key: Option<&str>,
    ) {
        self.add(ReportItem::error(position, message, translation_key));
    }

    pub fn warn(
        &mut self,
        position: Option<Position>,
        message: impl Into<String>,
        translation_key: Option<&str>,
    ) {
        self.add(ReportItem::warn(position, message, translation_key));
    }

    /// Error when a translation key is attached, warning otherwise.
    ///
    /// Checks that also lint comments report through here, so findings in
    /// comments (which carry no key) stay warnings.
    pub fn create(
        &mut self,
        position: Option<Position>,
        message: impl Into<String>,
        translation_key: Option<&str>,
    ) {
        match translation_key {
            Some(_) => self.error(position, message, translation_key),
            None => self.warn(position, message, translation_key),
        }
    }

    pub fn items(&self) -> &[ReportItem] {
        &self.items
    }

    pub fn errors(&self) -> usize {
        self.errors
    }

    pub fn warnings(&self) -> usize {
        self.warnings
    }

    pub fn is_empty(&self) -> bool {
        self.errors + self.warnings == 0
    }
}

/// All diagnostics collected for one document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    groups: Vec<ReportGroup>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `group` unless it is empty.
    pub fn add(&mut self, group: ReportGroup) {
        if !group.is_empty() {
            self.groups.push(group);
        }
    }

    /// Append `group` even if it holds no diagnostics.
    pub fn add_always(&mut self, group: ReportGroup) {
        self.groups.push(group);
    }

    pub fn groups(&self) -> &[ReportGroup] {
        &self.groups
    }

    pub fn errors(&self) -> usize {
        self.groups.iter().map(ReportGroup::errors).sum()
    }

    pub fn warnings(&self) -> usize {
        self.groups.iter().map(ReportGroup::warnings).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.errors() + self.warnings() == 0
    }

    /// Whether this report fails the run.
    ///
    /// With `promote_warnings` (the global `fatal` flag) any warning counts
    /// as an error. Stored items keep their own severity.
    pub fn is_fatal(&self, promote_warnings: bool) -> bool {
        self.fatal_errors(promote_warnings) > 0
    }

    /// Errors counted towards the exit status, warnings included when
    /// promoted.
    pub fn fatal_errors(&self, promote_warnings: bool) -> usize {
        if promote_warnings {
            self.errors() + self.warnings()
        } else {
            self.errors()
        }
    }
}

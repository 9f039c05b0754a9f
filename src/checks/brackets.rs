//! Bracket nesting check.
//!
//! Also provides the stack engine reused by
//! [`TypesettingQuotationMarks`](super::TypesettingQuotationMarks).

use serde::{Deserialize, Serialize};

use super::{Check, CheckId, shall_skip_item};
use crate::{
    document::Document,
    error::Result,
    report::{Position, ReportGroup},
};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BracketsConfig {
    /// Opening characters; `opening[i]` is closed by `closing[i]`.
    pub opening: Vec<char>,
    pub closing: Vec<char>,
    /// Ignore a bracket wrapped in quotes, like `"("` or `'['`.
    pub ignore_quoted: bool,
    pub comments: bool,
}

impl Default for BracketsConfig {
    fn default() -> Self {
        Self {
            opening: vec!['(', '[', '{'],
            closing: vec![')', ']', '}'],
            ignore_quoted: true,
            comments: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Brackets {
    config: BracketsConfig,
}

impl Brackets {
    pub fn new(config: BracketsConfig) -> Self {
        Self { config }
    }
}

impl Check for Brackets {
    fn id(&self) -> CheckId {
        CheckId::Brackets
    }

    fn is_single_file_check(&self) -> bool {
        true
    }

    fn check(&self, translation: &Document, _reference: Option<&Document>) -> Result<ReportGroup> {
        let mut group = ReportGroup::new(self.id().label());
        check_pairs(
            &mut group,
            translation,
            &self.config.opening,
            &self.config.closing,
            self.config.ignore_quoted,
            self.config.comments,
        );
        Ok(group)
    }
}

/// Run the bracket engine over every applicable item of `doc`.
///
/// Misconfigured lists produce a single diagnostic and no scan.
pub(crate) fn check_pairs(
    group: &mut ReportGroup,
    doc: &Document,
    opening: &[char],
    closing: &[char],
    ignore_quoted: bool,
    comments: bool,
) {
    if opening.is_empty() || closing.is_empty() {
        group.warn(None, "No brackets configured.", None);
        return;
    }
    if opening.len() != closing.len() {
        group.error(
            None,
            format!(
                "Opening and closing bracket lists differ in length ({} vs {}).",
                opening.len(),
                closing.len()
            ),
            None,
        );
        return;
    }

    for (idx, item) in doc.items().iter().enumerate() {
        if shall_skip_item(item, comments) {
            continue;
        }
        let Some(value) = item.value() else {
            continue;
        };
        scan_line(group, idx + 1, value, item.key(), opening, closing, ignore_quoted);
    }
}

/// Report at most one fault for `value`.
fn scan_line(
    group: &mut ReportGroup,
    line: usize,
    value: &str,
    key: Option<&str>,
    opening: &[char],
    closing: &[char],
    ignore_quoted: bool,
) {
    let chars: Vec<char> = value.chars().collect();
    // (index into `opening`, 1-based column)
    let mut stack: Vec<(usize, usize)> = Vec::new();

    for (pos, &c) in chars.iter().enumerate() {
        if ignore_quoted && is_quoted(&chars, pos) {
            continue;
        }

        // A character listed as both opener and closer closes when it
        // matches the innermost opener.
        if stack
            .last()
            .is_some_and(|&(top, _)| closing.get(top) == Some(&c))
        {
            stack.pop();
            continue;
        }

        if let Some(open_idx) = opening.iter().position(|&o| o == c) {
            stack.push((open_idx, pos + 1));
            continue;
        }

        let Some(close_idx) = closing.iter().position(|&cl| cl == c) else {
            continue;
        };
        match stack.pop() {
            None => {
                group.create(
                    Some(Position::LineCol(line, pos + 1)),
                    format!("No opening character matching \"{}\".", c),
                    key,
                );
                return;
            }
            Some((open_idx, _)) if open_idx != close_idx => {
                group.create(
                    Some(Position::LineCol(line, pos + 1)),
                    format!("Expected \"{}\", found \"{}\".", closing[open_idx], c),
                    key,
                );
                return;
            }
            Some(_) => {}
        }
    }

    if let Some(&(open_idx, col)) = stack.first() {
        group.create(
            Some(Position::LineCol(line, col)),
            format!("No closing character for \"{}\".", opening[open_idx]),
            key,
        );
    }
}

/// True when `chars[pos]` sits between two identical quote characters.
fn is_quoted(chars: &[char], pos: usize) -> bool {
    if pos == 0 {
        return false;
    }
    match (chars.get(pos - 1), chars.get(pos + 1)) {
        (Some(&before), Some(&after)) => before == after && (before == '"' || before == '\''),
        _ => false,
    }
}

//! Java-style `%` formatting specifiers must match in count and order.

use regex::Regex;

use super::{Check, CheckId, column, need_both_files};
use crate::{
    document::{Document, Item},
    error::Result,
    report::{Position, ReportGroup},
};

const FORMATTER_PATTERN: &str = r"%[a-zA-Z0-9$#+.(-]+";

#[derive(Debug, Clone)]
pub struct FormattingValues {
    pattern: Regex,
}

impl FormattingValues {
    pub fn new() -> Result<Self> {
        Ok(Self {
            pattern: Regex::new(FORMATTER_PATTERN)?,
        })
    }

    /// Specifiers of `value` in order, with their 1-based columns.
    fn formatters<'a>(&self, value: &'a str) -> Vec<(&'a str, usize)> {
        self.pattern
            .find_iter(value)
            .map(|m| (m.as_str(), column(value, m.start())))
            .collect()
    }
}

impl Check for FormattingValues {
    fn id(&self) -> CheckId {
        CheckId::FormattingValues
    }

    fn check(&self, translation: &Document, reference: Option<&Document>) -> Result<ReportGroup> {
        let (translation, reference) = need_both_files(translation, reference)?;
        let mut group = ReportGroup::new(self.id().label());

        for (idx, item) in translation.items().iter().enumerate() {
            let Item::Translation(trans) = item else {
                continue;
            };
            let Some(ref_item) = reference.find_by_key(trans.key()) else {
                continue;
            };

            let expected = self.formatters(ref_item.value());
            let found = self.formatters(trans.value());

            if expected.len() != found.len() {
                group.error(
                    Some(Position::Line(idx + 1)),
                    format!(
                        "Expected {} formatting values, found {}.",
                        expected.len(),
                        found.len()
                    ),
                    Some(trans.key()),
                );
                continue;
            }

            if let Some(((exp, _), (fnd, col))) = expected
                .iter()
                .zip(found.iter())
                .find(|((exp, _), (fnd, _))| exp != fnd)
            {
                group.error(
                    Some(Position::LineCol(idx + 1, *col)),
                    format!("Expected \"{}\", found \"{}\".", exp, fnd),
                    Some(trans.key()),
                );
            }
        }

        Ok(group)
    }
}

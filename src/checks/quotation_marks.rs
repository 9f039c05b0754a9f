//! Symmetric quotation marks: the same character opens and closes.

use serde::{Deserialize, Serialize};

use super::{Check, CheckId, shall_skip_item};
use crate::{
    document::Document,
    error::Result,
    report::{Position, ReportGroup},
};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QuotationMarksConfig {
    pub chars: Vec<char>,
    pub comments: bool,
}

impl Default for QuotationMarksConfig {
    fn default() -> Self {
        Self {
            chars: vec!['"', '`'],
            comments: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct QuotationMarks {
    config: QuotationMarksConfig,
}

impl QuotationMarks {
    pub fn new(config: QuotationMarksConfig) -> Self {
        Self { config }
    }
}

impl Check for QuotationMarks {
    fn id(&self) -> CheckId {
        CheckId::QuotationMarks
    }

    fn is_single_file_check(&self) -> bool {
        true
    }

    fn check(&self, translation: &Document, _reference: Option<&Document>) -> Result<ReportGroup> {
        let mut group = ReportGroup::new(self.id().label());
        if self.config.chars.is_empty() {
            group.warn(None, "No quotation marks configured.", None);
            return Ok(group);
        }

        for (idx, item) in translation.items().iter().enumerate() {
            if shall_skip_item(item, self.config.comments) {
                continue;
            }
            let Some(value) = item.value() else {
                continue;
            };

            // (mark, 1-based column)
            let mut stack: Vec<(char, usize)> = Vec::new();
            for (pos, c) in value.chars().enumerate() {
                if !self.config.chars.contains(&c) {
                    continue;
                }
                match stack.last() {
                    Some(&(top, _)) if top == c => {
                        stack.pop();
                    }
                    _ => stack.push((c, pos + 1)),
                }
            }

            if let Some(&(mark, col)) = stack.first() {
                group.create(
                    Some(Position::LineCol(idx + 1, col)),
                    format!("Unpaired quotation mark \"{}\".", mark),
                    item.key(),
                );
            }
        }

        Ok(group)
    }
}

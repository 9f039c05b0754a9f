//! Terminal punctuation parity.
//!
//! When a reference value ends with one of the configured sequences, its
//! translation must end with the same one.

use serde::{Deserialize, Serialize};

use super::{Check, CheckId, need_both_files};
use crate::{
    document::{Document, Item},
    error::Result,
    report::{Position, ReportGroup},
};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PunctuationConfig {
    /// Checked in order, the first sequence the reference ends with wins.
    pub chars: Vec<String>,
}

impl Default for PunctuationConfig {
    fn default() -> Self {
        Self {
            chars: [".", "?", "!", ":", r"\n"].map(String::from).to_vec(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Punctuation {
    config: PunctuationConfig,
}

impl Punctuation {
    pub fn new(config: PunctuationConfig) -> Self {
        Self { config }
    }

    fn terminal<'a>(&'a self, value: &str) -> Option<&'a str> {
        self.config
            .chars
            .iter()
            .map(String::as_str)
            .find(|seq| !seq.is_empty() && value.ends_with(seq))
    }
}

impl Check for Punctuation {
    fn id(&self) -> CheckId {
        CheckId::Punctuation
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
            let Some(expected) = self.terminal(ref_item.value()) else {
                continue;
            };
            if trans.value().ends_with(expected) {
                continue;
            }

            let found = match self.terminal(trans.value()) {
                Some(seq) => seq.to_string(),
                None => trans
                    .value()
                    .chars()
                    .last()
                    .map(String::from)
                    .unwrap_or_default(),
            };
            group.warn(
                Some(Position::Line(idx + 1)),
                format!("Ends with \"{}\" while \"{}\" is expected.", found, expected),
                Some(trans.key()),
            );
        }

        Ok(group)
    }
}

//! The first word of a translation starts with a letter of the same case
//! as the first word of its reference.

use serde::{Deserialize, Serialize};

use super::{Check, CheckId, need_both_files};
use crate::{
    document::{Document, Item},
    error::Result,
    report::{Position, ReportGroup},
};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StartsWithTheSameCaseConfig {
    /// Values starting with a digit are not compared.
    pub accept_digits: bool,
}

impl Default for StartsWithTheSameCaseConfig {
    fn default() -> Self {
        Self {
            accept_digits: true,
        }
    }
}

#[derive(Debug, Clone)]
pub struct StartsWithTheSameCase {
    config: StartsWithTheSameCaseConfig,
}

impl StartsWithTheSameCase {
    pub fn new(config: StartsWithTheSameCaseConfig) -> Self {
        Self { config }
    }

    fn skipped(&self, value: &str) -> bool {
        match value.chars().next() {
            None => true,
            Some(c) => self.config.accept_digits && c.is_numeric(),
        }
    }
}

/// First letter of the first word that starts with one.
fn first_letter(value: &str) -> Option<char> {
    value
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .find(|c| c.is_alphabetic())
}

fn case_name(upper: bool) -> &'static str {
    if upper { "UPPER" } else { "lower" }
}

impl Check for StartsWithTheSameCase {
    fn id(&self) -> CheckId {
        CheckId::StartsWithTheSameCase
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
            if self.skipped(trans.value()) || self.skipped(ref_item.value()) {
                continue;
            }

            let position = Some(Position::Line(idx + 1));
            match (first_letter(trans.value()), first_letter(ref_item.value())) {
                (None, None) => {}
                (None, Some(_)) => group.warn(
                    position,
                    "Translation has no word starting with a letter.",
                    Some(trans.key()),
                ),
                (Some(_), None) => group.warn(
                    position,
                    "Reference has no word starting with a letter.",
                    Some(trans.key()),
                ),
                (Some(found), Some(expected)) => {
                    let (found, expected) = (found.is_uppercase(), expected.is_uppercase());
                    if found != expected {
                        group.warn(
                            position,
                            format!(
                                "Starts with {}-cased letter, expected {}-cased.",
                                case_name(found),
                                case_name(expected)
                            ),
                            Some(trans.key()),
                        );
                    }
                }
            }
        }

        Ok(group)
    }
}

//! Translation keys must match a naming pattern.

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::{Check, CheckId};
use crate::{
    document::{Document, Item},
    error::Result,
    report::{Position, ReportGroup},
};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct KeyFormatConfig {
    pub pattern: String,
}

impl Default for KeyFormatConfig {
    fn default() -> Self {
        Self {
            pattern: r"^[a-zA-Z](?:[a-zA-Z0-9_.]*[a-zA-Z0-9])?$".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct KeyFormat {
    pattern: Regex,
}

impl KeyFormat {
    pub fn new(config: &KeyFormatConfig) -> Result<Self> {
        Ok(Self {
            pattern: Regex::new(&config.pattern)?,
        })
    }
}

impl Check for KeyFormat {
    fn id(&self) -> CheckId {
        CheckId::KeyFormat
    }

    fn is_single_file_check(&self) -> bool {
        true
    }

    fn check(&self, translation: &Document, _reference: Option<&Document>) -> Result<ReportGroup> {
        let mut group = ReportGroup::new(self.id().label());

        for (idx, item) in translation.items().iter().enumerate() {
            let Item::Translation(trans) = item else {
                continue;
            };
            if !self.pattern.is_match(trans.key()) {
                group.error(
                    Some(Position::Line(idx + 1)),
                    format!("Key does not match pattern \"{}\".", self.pattern.as_str()),
                    Some(trans.key()),
                );
            }
        }

        Ok(group)
    }
}

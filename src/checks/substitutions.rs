//! Regex based hints for sequences with a better replacement.

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::{Check, CheckId, column, shall_skip_item};
use crate::{
    document::Document,
    error::Result,
    report::{Position, ReportGroup},
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SubstitutionFlag {
    /// Suggest the replacement as a warning.
    #[default]
    Default,
    /// Report the match as an error.
    FailWithError,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SubstitutionRule {
    pub regexp: String,
    pub replace: String,
    #[serde(default)]
    pub flag: SubstitutionFlag,
}

impl SubstitutionRule {
    pub fn new(regexp: &str, replace: &str) -> Self {
        Self {
            regexp: regexp.to_string(),
            replace: replace.to_string(),
            flag: SubstitutionFlag::Default,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SubstitutionsConfig {
    pub rules: Vec<SubstitutionRule>,
    pub comments: bool,
}

impl Default for SubstitutionsConfig {
    fn default() -> Self {
        Self {
            rules: vec![
                SubstitutionRule::new(r"\.{3}", "…"),
                SubstitutionRule::new(r"!{2,}", "!"),
                SubstitutionRule::new(r"\?{2,}", "?"),
                SubstitutionRule::new(r" {2,}", " "),
            ],
            comments: false,
        }
    }
}

#[derive(Debug, Clone)]
struct CompiledRule {
    regex: Regex,
    replace: String,
    flag: SubstitutionFlag,
}

#[derive(Debug, Clone)]
pub struct Substitutions {
    rules: Vec<CompiledRule>,
    comments: bool,
}

impl Substitutions {
    pub fn new(config: &SubstitutionsConfig) -> Result<Self> {
        let rules = config
            .rules
            .iter()
            .map(|rule| {
                Ok(CompiledRule {
                    regex: Regex::new(&rule.regexp)?,
                    replace: rule.replace.clone(),
                    flag: rule.flag,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            rules,
            comments: config.comments,
        })
    }
}

impl Check for Substitutions {
    fn id(&self) -> CheckId {
        CheckId::Substitutions
    }

    fn is_single_file_check(&self) -> bool {
        true
    }

    fn check(&self, translation: &Document, _reference: Option<&Document>) -> Result<ReportGroup> {
        let mut group = ReportGroup::new(self.id().label());

        for (idx, item) in translation.items().iter().enumerate() {
            if shall_skip_item(item, self.comments) {
                continue;
            }
            let Some(value) = item.value() else {
                continue;
            };

            // First matching rule wins.
            let Some((rule, found)) = self
                .rules
                .iter()
                .find_map(|rule| rule.regex.find(value).map(|m| (rule, m)))
            else {
                continue;
            };

            let position = Some(Position::LineCol(idx + 1, column(value, found.start())));
            match rule.flag {
                SubstitutionFlag::FailWithError => group.error(
                    position,
                    format!("Found \"{}\".", found.as_str()),
                    item.key(),
                ),
                SubstitutionFlag::Default => group.warn(
                    position,
                    format!(
                        "\"{}\" could be replaced with \"{}\".",
                        found.as_str(),
                        rule.replace
                    ),
                    item.key(),
                ),
            }
        }

        Ok(group)
    }
}

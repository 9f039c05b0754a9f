//! Directional typesetting quotation marks, such as `‘…’`, `«…»` or `„…“`.
//!
//! Same nesting rules as brackets, with quote pairs as the configuration.

use serde::{Deserialize, Serialize};

use super::{Check, CheckId, brackets::check_pairs};
use crate::{document::Document, error::Result, report::ReportGroup};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TypesettingQuotationMarksConfig {
    pub opening: Vec<char>,
    pub closing: Vec<char>,
    pub ignore_quoted: bool,
    pub comments: bool,
}

impl Default for TypesettingQuotationMarksConfig {
    fn default() -> Self {
        Self {
            opening: vec!['‘', '«', '„', '「', '《', '“'],
            closing: vec!['’', '»', '“', '」', '》', '”'],
            ignore_quoted: true,
            comments: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct TypesettingQuotationMarks {
    config: TypesettingQuotationMarksConfig,
}

impl TypesettingQuotationMarks {
    pub fn new(config: TypesettingQuotationMarksConfig) -> Self {
        Self { config }
    }
}

impl Check for TypesettingQuotationMarks {
    fn id(&self) -> CheckId {
        CheckId::TypesettingQuotationMarks
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{checks::test_helpers::doc, report::Position};

    fn run(content: &str) -> ReportGroup {
        TypesettingQuotationMarks::new(TypesettingQuotationMarksConfig::default())
            .check(&doc(content), None)
            .unwrap()
    }

    #[test]
    fn test_paired_marks() {
        assert!(run("a = „Hallo“ und «salut» et ‘hi’").is_empty());
        assert!(run("a = 「引用」と《书名》").is_empty());
    }

    #[test]
    fn test_unclosed_mark() {
        let group = run("a = „Hallo");
        assert_eq!(group.errors(), 1);
        assert_eq!(group.items()[0].message, "No closing character for \"„\".");
        assert_eq!(group.items()[0].position, Some(Position::LineCol(1, 1)));
    }

    #[test]
    fn test_wrong_closing_mark() {
        let group = run("a = «Hallo’");
        assert_eq!(group.items()[0].message, "Expected \"»\", found \"’\".");
    }

    #[test]
    fn test_low_and_high_double_quotes() {
        assert!(run("a = „Hallo“").is_empty());
        assert!(run("a = Say “Hello”").is_empty());
        assert!(run("a = „Hallo“ and “Hello”").is_empty());
        assert!(run("a = “outer „inner“ end”").is_empty());
    }

    #[test]
    fn test_unclosed_english_quote() {
        let group = run("a = Say “Hello");
        assert_eq!(group.errors(), 1);
        assert_eq!(group.items()[0].message, "No closing character for \"“\".");
        assert_eq!(group.items()[0].position, Some(Position::LineCol(1, 5)));
    }

    #[test]
    fn test_ascii_quotes_are_not_checked() {
        assert!(run("a = \"plain (").is_empty());
    }
}

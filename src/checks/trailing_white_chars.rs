use serde::{Deserialize, Serialize};

use super::{Check, CheckId, shall_skip_item};
use crate::{
    document::Document,
    error::Result,
    report::{Position, ReportGroup},
};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TrailingWhiteCharsConfig {
    pub comments: bool,
}

/// White space left at the end of a value.
#[derive(Debug, Clone)]
pub struct TrailingWhiteChars {
    config: TrailingWhiteCharsConfig,
}

impl TrailingWhiteChars {
    pub fn new(config: TrailingWhiteCharsConfig) -> Self {
        Self { config }
    }
}

impl Check for TrailingWhiteChars {
    fn id(&self) -> CheckId {
        CheckId::TrailingWhiteChars
    }

    fn is_single_file_check(&self) -> bool {
        true
    }

    fn check(&self, translation: &Document, _reference: Option<&Document>) -> Result<ReportGroup> {
        let mut group = ReportGroup::new(self.id().label());

        for (idx, item) in translation.items().iter().enumerate() {
            if shall_skip_item(item, self.config.comments) {
                continue;
            }
            let Some(value) = item.value() else {
                continue;
            };
            let count = value.chars().count() - value.trim_end().chars().count();
            if count > 0 {
                group.create(
                    Some(Position::Line(idx + 1)),
                    format!("Trailing white characters: {}.", count),
                    item.key(),
                );
            }
        }

        Ok(group)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::test_helpers::doc;

    #[test]
    fn test_trailing_white_chars() {
        let check = TrailingWhiteChars::new(TrailingWhiteCharsConfig::default());
        let group = check.check(&doc("a = ok\nb = spaces  \nc = tab\t"), None).unwrap();
        assert_eq!(group.errors(), 2);
        assert_eq!(group.items()[0].message, "Trailing white characters: 2.");
        assert_eq!(group.items()[0].position, Some(Position::Line(2)));
        assert_eq!(group.items()[1].message, "Trailing white characters: 1.");
    }

    #[test]
    fn test_comments_are_warnings() {
        let check = TrailingWhiteChars::new(TrailingWhiteCharsConfig { comments: true });
        let group = check.check(&doc("# note   "), None).unwrap();
        assert_eq!(group.warnings(), 1);
        assert_eq!(group.errors(), 0);

        let check = TrailingWhiteChars::new(TrailingWhiteCharsConfig::default());
        assert!(check.check(&doc("# note   "), None).unwrap().is_empty());
    }
}

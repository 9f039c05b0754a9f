use serde::{Deserialize, Serialize};

use super::{Check, CheckId, column, shall_skip_item};
use crate::{
    document::Document,
    error::Result,
    report::{Position, ReportGroup},
};

/// Escaped line breaks as they appear in a raw value.
const LINEFEEDS: [&str; 2] = [r"\n", r"\r"];

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WhiteCharsBeforeLinefeedConfig {
    pub comments: bool,
}

/// A space or tab right before an escaped `\n` or `\r`.
#[derive(Debug, Clone)]
pub struct WhiteCharsBeforeLinefeed {
    config: WhiteCharsBeforeLinefeedConfig,
}

impl WhiteCharsBeforeLinefeed {
    pub fn new(config: WhiteCharsBeforeLinefeedConfig) -> Self {
        Self { config }
    }
}

impl Check for WhiteCharsBeforeLinefeed {
    fn id(&self) -> CheckId {
        CheckId::WhiteCharsBeforeLinefeed
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
            if value.chars().count() < 3 {
                continue;
            }

            for linefeed in LINEFEEDS {
                let found = value.match_indices(linefeed).find_map(|(pos, _)| {
                    let white = value[..pos].chars().next_back()?;
                    let name = match white {
                        ' ' => "SPACE",
                        '\t' => "TAB",
                        _ => return None,
                    };
                    Some((name, pos - white.len_utf8()))
                });
                if let Some((name, white_pos)) = found {
                    group.warn(
                        Some(Position::LineCol(idx + 1, column(value, white_pos))),
                        format!("{} found before \"{}\".", name, linefeed),
                        item.key(),
                    );
                }
            }
        }

        Ok(group)
    }
}

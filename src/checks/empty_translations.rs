use super::{Check, CheckId, need_both_files};
use crate::{
    document::{Document, Item},
    error::Result,
    report::{Position, ReportGroup},
};

/// Translations left empty although the reference has text.
#[derive(Debug, Clone)]
pub struct EmptyTranslations;

impl Check for EmptyTranslations {
    fn id(&self) -> CheckId {
        CheckId::EmptyTranslations
    }

    fn check(&self, translation: &Document, reference: Option<&Document>) -> Result<ReportGroup> {
        let (translation, reference) = need_both_files(translation, reference)?;
        let mut group = ReportGroup::new(self.id().label());

        for (idx, item) in translation.items().iter().enumerate() {
            let Item::Translation(trans) = item else {
                continue;
            };
            if !trans.value().trim().is_empty() {
                continue;
            }
            let Some(ref_item) = reference.find_by_key(trans.key()) else {
                continue;
            };
            if !ref_item.value().trim().is_empty() {
                group.warn(
                    Some(Position::Line(idx + 1)),
                    "Empty translation.",
                    Some(trans.key()),
                );
            }
        }

        Ok(group)
    }
}

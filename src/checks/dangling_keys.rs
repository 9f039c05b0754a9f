use super::{Check, CheckId, need_both_files};
use crate::{
    document::{Document, Item},
    error::Result,
    report::{Position, ReportGroup},
};

/// Translation keys the reference does not define.
///
/// Commented-out keys in the translation have no effect here.
#[derive(Debug, Clone)]
pub struct DanglingKeys;

impl Check for DanglingKeys {
    fn id(&self) -> CheckId {
        CheckId::DanglingKeys
    }

    fn check(&self, translation: &Document, reference: Option<&Document>) -> Result<ReportGroup> {
        let (translation, reference) = need_both_files(translation, reference)?;
        let mut group = ReportGroup::new(self.id().label());

        for (idx, item) in translation.items().iter().enumerate() {
            let Item::Translation(trans) = item else {
                continue;
            };
            if !reference.contains_key(trans.key()) {
                group.error(
                    Some(Position::Line(idx + 1)),
                    "Key not present in reference file.",
                    Some(trans.key()),
                );
            }
        }

        Ok(group)
    }
}

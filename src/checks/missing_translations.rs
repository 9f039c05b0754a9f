use serde::{Deserialize, Serialize};

use super::{Check, CheckId, need_both_files};
use crate::{
    document::{Document, keys},
    error::Result,
    report::ReportGroup,
};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MissingTranslationsConfig {
    /// Also report keys the translation only carries commented out.
    pub strict: bool,
}

/// Reference keys the translation lacks.
#[derive(Debug, Clone)]
pub struct MissingTranslations {
    config: MissingTranslationsConfig,
}

impl MissingTranslations {
    pub fn new(config: MissingTranslationsConfig) -> Self {
        Self { config }
    }
}

impl Check for MissingTranslations {
    fn id(&self) -> CheckId {
        CheckId::MissingTranslations
    }

    fn check(&self, translation: &Document, reference: Option<&Document>) -> Result<ReportGroup> {
        let (translation, reference) = need_both_files(translation, reference)?;
        let mut group = ReportGroup::new(self.id().label());

        for key in keys::missing_keys(reference, translation, self.config.strict) {
            group.warn(None, "Missing translation.", Some(key));
        }

        Ok(group)
    }
}

//! Check implementations.
//!
//! Every check inspects a translation document (and, for pair checks, its
//! reference) and returns one [`ReportGroup`]. Checks are registered
//! statically: [`CheckId::all`] lists them and [`CheckKind::build`] maps an
//! id to its constructor.
//!
//! ## Module Structure
//!
//! - `brackets`: bracket nesting (shared engine)
//! - `typesetting_quotation_marks`: directional quotes on the bracket engine
//! - `quotation_marks`: symmetric quote pairing
//! - `punctuation`: terminal punctuation parity
//! - `formatting_values`: `%s`-style specifier parity
//! - `key_format`: key naming pattern
//! - `missing_translations` / `dangling_keys`: key set diff
//! - `empty_translations`: empty values
//! - `starts_with_the_same_case`: first letter case parity
//! - `substitutions`: regex based replacement hints
//! - `trailing_white_chars`: trailing white space
//! - `white_chars_before_linefeed`: white space before literal `\n` / `\r`

pub mod brackets;
pub mod dangling_keys;
pub mod empty_translations;
pub mod formatting_values;
pub mod key_format;
pub mod missing_translations;
pub mod punctuation;
pub mod quotation_marks;
pub mod starts_with_the_same_case;
pub mod substitutions;
pub mod trailing_white_chars;
pub mod typesetting_quotation_marks;
pub mod white_chars_before_linefeed;

use clap::ValueEnum;
use enum_dispatch::enum_dispatch;
use serde::{Deserialize, Serialize};

use crate::{
    config::Config,
    document::{Document, Item},
    error::{Error, Result},
    report::ReportGroup,
};

pub use brackets::{Brackets, BracketsConfig};
pub use dangling_keys::DanglingKeys;
pub use empty_translations::EmptyTranslations;
pub use formatting_values::FormattingValues;
pub use key_format::{KeyFormat, KeyFormatConfig};
pub use missing_translations::{MissingTranslations, MissingTranslationsConfig};
pub use punctuation::{Punctuation, PunctuationConfig};
pub use quotation_marks::{QuotationMarks, QuotationMarksConfig};
pub use starts_with_the_same_case::{StartsWithTheSameCase, StartsWithTheSameCaseConfig};
pub use substitutions::{SubstitutionFlag, SubstitutionRule, Substitutions, SubstitutionsConfig};
pub use trailing_white_chars::{TrailingWhiteChars, TrailingWhiteCharsConfig};
pub use typesetting_quotation_marks::{
    TypesettingQuotationMarks, TypesettingQuotationMarksConfig,
};
pub use white_chars_before_linefeed::{WhiteCharsBeforeLinefeed, WhiteCharsBeforeLinefeedConfig};

/// Stable identifier of a check, used on the command line and in config.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, ValueEnum, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum CheckId {
    Brackets,
    DanglingKeys,
    EmptyTranslations,
    FormattingValues,
    KeyFormat,
    MissingTranslations,
    Punctuation,
    QuotationMarks,
    StartsWithTheSameCase,
    Substitutions,
    TrailingWhiteChars,
    TypesettingQuotationMarks,
    WhiteCharsBeforeLinefeed,
}

impl CheckId {
    /// Every registered check, in run order.
    pub fn all() -> &'static [CheckId] {
        &[
            CheckId::Brackets,
            CheckId::DanglingKeys,
            CheckId::EmptyTranslations,
            CheckId::FormattingValues,
            CheckId::KeyFormat,
            CheckId::MissingTranslations,
            CheckId::Punctuation,
            CheckId::QuotationMarks,
            CheckId::StartsWithTheSameCase,
            CheckId::Substitutions,
            CheckId::TrailingWhiteChars,
            CheckId::TypesettingQuotationMarks,
            CheckId::WhiteCharsBeforeLinefeed,
        ]
    }

    /// Name shown as the report group label.
    pub fn label(&self) -> &'static str {
        match self {
            CheckId::Brackets => "Brackets",
            CheckId::DanglingKeys => "DanglingKeys",
            CheckId::EmptyTranslations => "EmptyTranslations",
            CheckId::FormattingValues => "FormattingValues",
            CheckId::KeyFormat => "KeyFormat",
            CheckId::MissingTranslations => "MissingTranslations",
            CheckId::Punctuation => "Punctuation",
            CheckId::QuotationMarks => "QuotationMarks",
            CheckId::StartsWithTheSameCase => "StartsWithTheSameCase",
            CheckId::Substitutions => "Substitutions",
            CheckId::TrailingWhiteChars => "TrailingWhiteChars",
            CheckId::TypesettingQuotationMarks => "TypesettingQuotationMarks",
            CheckId::WhiteCharsBeforeLinefeed => "WhiteCharsBeforeLinefeed",
        }
    }
}

impl std::fmt::Display for CheckId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Options of every configurable check, keyed by check id.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct ChecksConfig {
    pub brackets: BracketsConfig,
    pub key_format: KeyFormatConfig,
    pub missing_translations: MissingTranslationsConfig,
    pub punctuation: PunctuationConfig,
    pub quotation_marks: QuotationMarksConfig,
    pub starts_with_the_same_case: StartsWithTheSameCaseConfig,
    pub substitutions: SubstitutionsConfig,
    pub trailing_white_chars: TrailingWhiteCharsConfig,
    pub typesetting_quotation_marks: TypesettingQuotationMarksConfig,
    pub white_chars_before_linefeed: WhiteCharsBeforeLinefeedConfig,
}

/// Contract shared by all checks.
///
/// Checks receive shared borrows only, so one check can never change what
/// a later check sees.
#[enum_dispatch]
pub trait Check {
    fn id(&self) -> CheckId;

    /// Single-file checks ignore the reference and also run against the
    /// reference document itself.
    fn is_single_file_check(&self) -> bool {
        false
    }

    fn check(&self, translation: &Document, reference: Option<&Document>) -> Result<ReportGroup>;
}

/// A configured check instance.
#[enum_dispatch(Check)]
#[derive(Debug, Clone)]
pub enum CheckKind {
    Brackets(Brackets),
    DanglingKeys(DanglingKeys),
    EmptyTranslations(EmptyTranslations),
    FormattingValues(FormattingValues),
    KeyFormat(KeyFormat),
    MissingTranslations(MissingTranslations),
    Punctuation(Punctuation),
    QuotationMarks(QuotationMarks),
    StartsWithTheSameCase(StartsWithTheSameCase),
    Substitutions(Substitutions),
    TrailingWhiteChars(TrailingWhiteChars),
    TypesettingQuotationMarks(TypesettingQuotationMarks),
    WhiteCharsBeforeLinefeed(WhiteCharsBeforeLinefeed),
}

impl CheckKind {
    /// Construct the check registered under `id`.
    ///
    /// # Errors
    ///
    /// [`Error::Regex`] if a configured pattern does not compile.
    pub fn build(id: CheckId, config: &ChecksConfig) -> Result<CheckKind> {
        let check = match id {
            CheckId::Brackets => Brackets::new(config.brackets.clone()).into(),
            CheckId::DanglingKeys => DanglingKeys.into(),
            CheckId::EmptyTranslations => EmptyTranslations.into(),
            CheckId::FormattingValues => FormattingValues::new()?.into(),
            CheckId::KeyFormat => KeyFormat::new(&config.key_format)?.into(),
            CheckId::MissingTranslations => {
                MissingTranslations::new(config.missing_translations.clone()).into()
            }
            CheckId::Punctuation => Punctuation::new(config.punctuation.clone()).into(),
            CheckId::QuotationMarks => QuotationMarks::new(config.quotation_marks.clone()).into(),
            CheckId::StartsWithTheSameCase => {
                StartsWithTheSameCase::new(config.starts_with_the_same_case.clone()).into()
            }
            CheckId::Substitutions => Substitutions::new(&config.substitutions)?.into(),
            CheckId::TrailingWhiteChars => {
                TrailingWhiteChars::new(config.trailing_white_chars.clone()).into()
            }
            CheckId::TypesettingQuotationMarks => {
                TypesettingQuotationMarks::new(config.typesetting_quotation_marks.clone()).into()
            }
            CheckId::WhiteCharsBeforeLinefeed => {
                WhiteCharsBeforeLinefeed::new(config.white_chars_before_linefeed.clone()).into()
            }
        };
        Ok(check)
    }
}

/// Build the enabled checks, in registry order.
///
/// The global `strict` flag forces strict mode on `missing-translations`.
pub fn build_checks(config: &Config) -> Result<Vec<CheckKind>> {
    let mut checks_config = config.checks.clone();
    if config.strict {
        checks_config.missing_translations.strict = true;
    }

    CheckId::all()
        .iter()
        .filter(|id| config.enabled_checks.contains(id))
        .map(|id| CheckKind::build(*id, &checks_config))
        .collect()
}

/// Unwrap the reference of a pair check.
///
/// # Errors
///
/// [`Error::InvalidArgument`] if `reference` is `None`.
pub fn need_both_files<'a, 'b>(
    translation: &'a Document,
    reference: Option<&'b Document>,
) -> Result<(&'a Document, &'b Document)> {
    match reference {
        Some(reference) => Ok((translation, reference)),
        None => Err(Error::InvalidArgument(
            "this check needs both a translation and a reference document".to_string(),
        )),
    }
}

/// Whether a check should not inspect `item`.
///
/// Blank lines are always skipped; comments unless the check is configured
/// to lint `comments`.
pub fn shall_skip_item(item: &Item, comments: bool) -> bool {
    match item {
        Item::Translation(_) => false,
        Item::Comment(_) => !comments,
        Item::Blank => true,
    }
}

/// 1-based character column of the byte offset `byte_idx` in `value`.
pub(crate) fn column(value: &str, byte_idx: usize) -> usize {
    value[..byte_idx].chars().count() + 1
}

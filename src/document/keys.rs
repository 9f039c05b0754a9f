//! Key set comparison between a reference and a translation document.

use super::{Document, item::Translation};

/// Keys present in `translation` but absent from `reference`, in
/// translation order.
pub fn dangling_keys<'a>(translation: &'a Document, reference: &Document) -> Vec<&'a str> {
    translation
        .keys()
        .iter()
        .filter(|key| !reference.contains_key(key))
        .map(String::as_str)
        .collect()
}

/// Keys present in `reference` but absent from `translation`, in reference
/// order.
///
/// Unless `strict`, keys the translation carries as commented-out entries
/// count as present.
pub fn missing_keys<'a>(
    reference: &'a Document,
    translation: &Document,
    strict: bool,
) -> Vec<&'a str> {
    reference
        .keys()
        .iter()
        .filter(|key| !translation.contains_key(key))
        .filter(|key| strict || !translation.is_commented_out(key))
        .map(String::as_str)
        .collect()
}

/// Keys present in both documents, in reference order.
pub fn common_keys<'a>(reference: &'a Document, translation: &Document) -> Vec<&'a str> {
    reference
        .keys()
        .iter()
        .filter(|key| translation.contains_key(key))
        .map(String::as_str)
        .collect()
}

/// First translation entry with `key`.
pub fn find_by_key<'a>(doc: &'a Document, key: &str) -> Option<&'a Translation> {
    doc.items()
        .iter()
        .filter_map(|item| item.as_translation())
        .find(|translation| translation.key() == key)
}

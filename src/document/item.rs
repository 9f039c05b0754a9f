//! Line entries of a `.properties` document.

use std::fmt;

use crate::{
    config::{ALLOWED_COMMENT_MARKERS, ALLOWED_SEPARATORS},
    error::{Error, Result},
};

/// A `key SEP value` entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    key: String,
    value: String,
    separator: char,
}

impl Translation {
    /// The key is stored trimmed and must not be empty; the separator must
    /// be one of [`ALLOWED_SEPARATORS`].
    pub fn new(key: &str, value: impl Into<String>, separator: char) -> Result<Self> {
        let key = key.trim();
        if key.is_empty() {
            return Err(Error::InvalidItem("translation key must not be empty".to_string()));
        }
        if !ALLOWED_SEPARATORS.contains(&separator) {
            return Err(Error::InvalidItem(format!(
                "invalid separator \"{}\" for key \"{}\"",
                separator, key
            )));
        }
        Ok(Self {
            key: key.to_string(),
            value: value.into(),
            separator,
        })
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn separator(&self) -> char {
        self.separator
    }
}

impl fmt::Display for Translation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.key, self.separator, self.value)
    }
}

/// A full comment line, marker included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    value: String,
}

impl Comment {
    /// Prefixes `"# "` when `value` does not start with an allowed marker.
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        let value = match value.chars().next() {
            Some(first) if ALLOWED_COMMENT_MARKERS.contains(&first) => value,
            _ => format!("{} {}", ALLOWED_COMMENT_MARKERS[0], value),
        };
        Self { value }
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for Comment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// One line of a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Item {
    Translation(Translation),
    Comment(Comment),
    Blank,
}

impl Item {
    pub fn is_translation(&self) -> bool {
        matches!(self, Item::Translation(_))
    }

    pub fn is_comment(&self) -> bool {
        matches!(self, Item::Comment(_))
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, Item::Blank)
    }

    /// Translation key, `None` for comments and blank lines.
    pub fn key(&self) -> Option<&str> {
        match self {
            Item::Translation(translation) => Some(translation.key()),
            Item::Comment(_) | Item::Blank => None,
        }
    }

    /// Text checks inspect: the translation value, or the whole comment line.
    pub fn value(&self) -> Option<&str> {
        match self {
            Item::Translation(translation) => Some(translation.value()),
            Item::Comment(comment) => Some(comment.value()),
            Item::Blank => None,
        }
    }

    pub fn as_translation(&self) -> Option<&Translation> {
        match self {
            Item::Translation(translation) => Some(translation),
            Item::Comment(_) | Item::Blank => None,
        }
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Item::Translation(translation) => write!(f, "{}", translation),
            Item::Comment(comment) => write!(f, "{}", comment),
            Item::Blank => Ok(()),
        }
    }
}

impl From<Translation> for Item {
    fn from(translation: Translation) -> Self {
        Item::Translation(translation)
    }
}

impl From<Comment> for Item {
    fn from(comment: Comment) -> Self {
        Item::Comment(comment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translation_display() {
        let item = Translation::new("app.title", "My App", '=').unwrap();
        assert_eq!(item.to_string(), "app.title = My App");

        let item = Translation::new("app.title", "", ':').unwrap();
        assert_eq!(item.to_string(), "app.title : ");
    }

    #[test]
    fn test_translation_key_is_trimmed() {
        let item = Translation::new("  key \t", "value", '=').unwrap();
        assert_eq!(item.key(), "key");
    }

    #[test]
    fn test_translation_rejects_empty_key() {
        assert!(matches!(
            Translation::new("   ", "value", '='),
            Err(Error::InvalidItem(_))
        ));
    }

    #[test]
    fn test_translation_rejects_bad_separator() {
        assert!(matches!(
            Translation::new("key", "value", ';'),
            Err(Error::InvalidItem(_))
        ));
    }

    #[test]
    fn test_comment_keeps_marker() {
        assert_eq!(Comment::new("# hello").value(), "# hello");
        assert_eq!(Comment::new("!hello").value(), "!hello");
    }

    #[test]
    fn test_comment_auto_prefix() {
        assert_eq!(Comment::new("hello").value(), "# hello");
        assert_eq!(Comment::new("").value(), "# ");
    }

    #[test]
    fn test_item_accessors() {
        let translation: Item = Translation::new("k", "v", '=').unwrap().into();
        let comment: Item = Comment::new("# c").into();

        assert!(translation.is_translation());
        assert_eq!(translation.key(), Some("k"));
        assert_eq!(translation.value(), Some("v"));

        assert!(comment.is_comment());
        assert_eq!(comment.key(), None);
        assert_eq!(comment.value(), Some("# c"));

        assert!(Item::Blank.is_blank());
        assert_eq!(Item::Blank.value(), None);
        assert_eq!(Item::Blank.to_string(), "");
    }
}

//! Line classification for `.properties` content.

use regex::Regex;

use crate::{
    config::{ALLOWED_COMMENT_MARKERS, ALLOWED_SEPARATORS},
    error::{Error, Result},
};

use super::item::{Comment, Item, Translation};

/// A classified physical line.
#[derive(Debug, PartialEq, Eq)]
pub enum ParsedLine {
    Blank,
    /// A comment, with the key it defers when it is a commented-out entry.
    Comment {
        comment: Comment,
        commented_out_key: Option<String>,
    },
    Translation(Translation),
}

impl ParsedLine {
    pub fn into_item(self) -> Item {
        match self {
            ParsedLine::Blank => Item::Blank,
            ParsedLine::Comment { comment, .. } => Item::Comment(comment),
            ParsedLine::Translation(translation) => Item::Translation(translation),
        }
    }
}

/// Split content into physical lines, stripping one trailing `\n` and then
/// one trailing `\r` from each. A final newline does not start a new line.
pub fn split_lines(content: &str) -> impl Iterator<Item = &str> {
    content.split_inclusive('\n').map(|line| {
        let line = line.strip_suffix('\n').unwrap_or(line);
        line.strip_suffix('\r').unwrap_or(line)
    })
}

/// Split `line` at the first separator not escaped by an odd number of
/// backslashes.
///
/// Returns the raw (untrimmed) key part, the separator and the raw value part.
pub fn split_key_value(line: &str) -> Option<(&str, char, &str)> {
    let mut backslashes = 0usize;
    for (idx, c) in line.char_indices() {
        if c == '\\' {
            backslashes += 1;
            continue;
        }
        if backslashes % 2 == 0 && ALLOWED_SEPARATORS.contains(&c) {
            return Some((&line[..idx], c, &line[idx + c.len_utf8()..]));
        }
        backslashes = 0;
    }
    None
}

/// Classify one stripped line. `line_no` is 1-based and only used for errors.
pub fn parse_line(
    line: &str,
    line_no: usize,
    file: &str,
    commented_out: &Regex,
) -> Result<ParsedLine> {
    if line.trim().is_empty() {
        return Ok(ParsedLine::Blank);
    }

    if line
        .chars()
        .next()
        .is_some_and(|first| ALLOWED_COMMENT_MARKERS.contains(&first))
    {
        let commented_out_key = commented_out
            .captures(line)
            .and_then(|caps| caps.get(1))
            .map(|key| key.as_str().to_string());
        return Ok(ParsedLine::Comment {
            comment: Comment::new(line),
            commented_out_key,
        });
    }

    let syntax_error = |message: &str| Error::Syntax {
        file: file.to_string(),
        line: line_no,
        message: message.to_string(),
    };

    let (key, separator, value) =
        split_key_value(line).ok_or_else(|| syntax_error("no key/value separator found"))?;
    if key.trim().is_empty() {
        return Err(syntax_error("missing key before separator"));
    }

    let translation = Translation::new(key.trim(), value.trim_start(), separator)?;
    Ok(ParsedLine::Translation(translation))
}

//! Order-preserving `.properties` document model.
//!
//! A [`Document`] is the file's lines as a sequence of [`Item`]s plus the
//! derived key indexes the checks work with:
//!
//! - `keys`: translation keys in file order, first occurrence wins
//! - `commented_out_keys`: keys deferred as `# ==> key =` comments
//!
//! ## Module Structure
//!
//! - `item`: line entries (`Translation`, `Comment`, `Blank`)
//! - `parser`: line classification and key/value splitting
//! - `keys`: missing/dangling key computation
//! - `sync`: rebuilding a translation from its reference

pub mod item;
pub mod keys;
pub mod parser;
mod sync;

use std::{
    collections::{HashMap, HashSet},
    fmt, fs,
    path::{Path, PathBuf},
};

use regex::Regex;

use crate::{
    checks::{Check, CheckKind},
    config::Config,
    error::{Error, Result},
    report::{Position, Report, ReportGroup},
};

pub use item::{Comment, Item, Translation};
use parser::{ParsedLine, parse_line, split_lines};

pub const DUPLICATED_KEYS_LABEL: &str = "Duplicated keys";

#[derive(Debug, Clone, Default)]
pub struct Document {
    /// Source path recorded by `load`, default target of `save`.
    pub file: Option<PathBuf>,
    /// Language code, `None` for the reference document.
    pub language: Option<String>,
    pub report: Report,
    items: Vec<Item>,
    keys: Vec<String>,
    key_set: HashSet<String>,
    commented_out_keys: Vec<String>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_language(language: impl Into<String>) -> Self {
        Self {
            language: Some(language.into()),
            ..Self::default()
        }
    }

    /// Read and parse `path`, recording it as the document's file.
    ///
    /// # Errors
    ///
    /// - [`Error::FileNotFound`] if `path` does not exist
    /// - [`Error::Syntax`] on the first malformed line
    pub fn load(&mut self, path: &Path, config: &Config) -> Result<()> {
        if !path.exists() {
            return Err(Error::FileNotFound(path.to_path_buf()));
        }
        let content = fs::read_to_string(path)?;
        self.file = Some(path.to_path_buf());
        self.parse(&content, config)
    }

    /// Replace the document content and report with the parsed `content`.
    ///
    /// Duplicated keys keep their first occurrence; every later one is
    /// reported as an error in a "Duplicated keys" group.
    pub fn parse(&mut self, content: &str, config: &Config) -> Result<()> {
        let commented_out = config.commented_out_regex()?;
        let file = self
            .file
            .as_ref()
            .map(|path| path.display().to_string())
            .unwrap_or_else(|| "<input>".to_string());

        self.clear();
        self.report = Report::new();

        let mut first_seen: HashMap<String, usize> = HashMap::new();
        let mut duplicates = ReportGroup::new(DUPLICATED_KEYS_LABEL);

        for (idx, line) in split_lines(content).enumerate() {
            let line_no = idx + 1;
            match parse_line(line, line_no, &file, &commented_out)? {
                ParsedLine::Translation(translation) => {
                    if let Some(first) = first_seen.get(translation.key()) {
                        duplicates.error(
                            Some(Position::Line(line_no)),
                            format!("Duplicated key, first occurrence at line {}.", first),
                            Some(translation.key()),
                        );
                        continue;
                    }
                    first_seen.insert(translation.key().to_string(), line_no);
                    self.push_translation(translation);
                }
                ParsedLine::Comment {
                    comment,
                    commented_out_key,
                } => {
                    if let Some(key) = commented_out_key {
                        self.record_commented_out_key(key);
                    }
                    self.items.push(Item::Comment(comment));
                }
                ParsedLine::Blank => self.items.push(Item::Blank),
            }
        }

        self.report.add(duplicates);
        Ok(())
    }

    /// Append an item, keeping the key index consistent.
    ///
    /// # Errors
    ///
    /// [`Error::DuplicateKey`] if a translation with the same key exists.
    pub fn append(&mut self, item: Item) -> Result<()> {
        match item {
            Item::Translation(translation) => {
                if self.key_set.contains(translation.key()) {
                    return Err(Error::DuplicateKey(translation.key().to_string()));
                }
                self.push_translation(translation);
            }
            Item::Comment(_) | Item::Blank => self.items.push(item),
        }
        Ok(())
    }

    /// Append the comment `line` and record `key` as commented out.
    pub fn append_commented_out_key(&mut self, key: &str, line: &str) {
        self.items.push(Item::Comment(Comment::new(line)));
        self.record_commented_out_key(key.to_string());
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    pub fn commented_out_keys(&self) -> &[String] {
        &self.commented_out_keys
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.key_set.contains(key)
    }

    pub fn is_commented_out(&self, key: &str) -> bool {
        self.commented_out_keys.iter().any(|k| k == key)
    }

    pub fn find_by_key(&self, key: &str) -> Option<&Translation> {
        keys::find_by_key(self, key)
    }

    /// Human readable name for banners: the file name, else the language.
    pub fn name(&self) -> String {
        match (&self.file, &self.language) {
            (Some(file), _) => file.display().to_string(),
            (None, Some(language)) => language.clone(),
            (None, None) => "<reference>".to_string(),
        }
    }

    /// Run `checks` and add their non-empty groups to `self.report`.
    ///
    /// Without a reference only single-file checks run (the reference's
    /// self-check).
    pub fn validate(&mut self, reference: Option<&Document>, checks: &[CheckKind]) -> Result<()> {
        let mut groups = Vec::with_capacity(checks.len());
        for check in checks {
            if reference.is_none() && !check.is_single_file_check() {
                continue;
            }
            groups.push(check.check(self, reference)?);
        }
        for group in groups {
            self.report.add(group);
        }
        Ok(())
    }

    /// Write the document to `path`, or to the file it was loaded from.
    ///
    /// # Errors
    ///
    /// [`Error::NoPath`] if neither is available.
    pub fn save(&self, path: Option<&Path>) -> Result<()> {
        let path = path.or(self.file.as_deref()).ok_or(Error::NoPath)?;
        fs::write(path, self.to_string())?;
        Ok(())
    }

    fn clear(&mut self) {
        self.items.clear();
        self.keys.clear();
        self.key_set.clear();
        self.commented_out_keys.clear();
    }

    fn push_translation(&mut self, translation: Translation) {
        self.keys.push(translation.key().to_string());
        self.key_set.insert(translation.key().to_string());
        self.items.push(Item::Translation(translation));
    }

    fn record_commented_out_key(&mut self, key: String) {
        if !self.commented_out_keys.contains(&key) {
            self.commented_out_keys.push(key);
        }
    }

    /// Replace the items and rebuild both key indexes from them.
    fn replace_items(&mut self, items: Vec<Item>, commented_out: &Regex) {
        self.clear();
        for item in items {
            match item {
                Item::Translation(translation) => {
                    if !self.key_set.contains(translation.key()) {
                        self.push_translation(translation);
                    }
                }
                Item::Comment(comment) => {
                    if let Some(key) = commented_out
                        .captures(comment.value())
                        .and_then(|caps| caps.get(1))
                    {
                        self.record_commented_out_key(key.as_str().to_string());
                    }
                    self.items.push(Item::Comment(comment));
                }
                Item::Blank => self.items.push(Item::Blank),
            }
        }
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, item) in self.items.iter().enumerate() {
            if idx > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", item)?;
        }
        Ok(())
    }
}

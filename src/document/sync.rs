//! Rebuilding a translation using its reference as the structural template.

use crate::{config::Config, error::Result};

use super::{Document, item::Comment, item::Item};

impl Document {
    /// Rebuild this translation from `reference`.
    ///
    /// Comments and blank lines come from the reference. Each reference
    /// entry is replaced by this document's entry for the same key, or by a
    /// commented-out line when the key is not translated yet. Entries absent
    /// from the reference are dropped. The report is left untouched.
    pub fn update(&mut self, reference: &Document, config: &Config) -> Result<()> {
        let commented_out = config.commented_out_regex()?;
        let mut items = Vec::with_capacity(reference.items().len());

        for item in reference.items() {
            match item {
                Item::Comment(_) | Item::Blank => items.push(item.clone()),
                Item::Translation(ref_translation) => {
                    if config.write_reference {
                        items.push(Item::Comment(Comment::new(
                            config.reference_comment_line(ref_translation.value()),
                        )));
                    }

                    match self.find_by_key(ref_translation.key()) {
                        Some(existing) => items.push(Item::Translation(existing.clone())),
                        None => {
                            let value = config.write_content.then_some(ref_translation.value());
                            items.push(Item::Comment(Comment::new(
                                config.commented_out_line(ref_translation.key(), value),
                            )));
                        }
                    }
                }
            }
        }

        self.replace_items(items, &commented_out);
        Ok(())
    }

    /// A new translation for `language` with every reference key commented out.
    pub fn create_from(reference: &Document, language: &str, config: &Config) -> Result<Document> {
        let mut doc = Document::with_language(language);
        doc.update(reference, config)?;
        Ok(doc)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn parse(content: &str) -> Document {
        let mut doc = Document::new();
        doc.parse(content, &Config::default()).unwrap();
        doc
    }

    #[test]
    fn test_update_comments_out_missing_key() {
        let reference = parse("a = V1\nb = V2\nc = V3");
        let mut translation = parse("a = T1\nb = T2");

        translation.update(&reference, &Config::default()).unwrap();

        assert_eq!(translation.to_string(), "a = T1\nb = T2\n# ==> c =");
        assert_eq!(translation.keys(), &["a", "b"]);
        assert_eq!(translation.commented_out_keys(), &["c"]);
    }

    #[test]
    fn test_update_follows_reference_layout() {
        let reference = parse("# Header\n\nfirst = One\n\n# Section\nsecond = Two");
        let mut translation = parse("second : Zwei\nfirst = Eins\nstale = Alt");

        translation.update(&reference, &Config::default()).unwrap();

        assert_eq!(
            translation.to_string(),
            "# Header\n\nfirst = Eins\n\n# Section\nsecond : Zwei"
        );
        assert_eq!(translation.keys(), &["first", "second"]);
    }

    #[test]
    fn test_update_with_content() {
        let config = Config {
            write_content: true,
            ..Default::default()
        };
        let reference = parse("greeting = Hello");
        let mut translation = parse("");

        translation.update(&reference, &config).unwrap();

        assert_eq!(translation.to_string(), "# ==> greeting = Hello");
        assert_eq!(translation.commented_out_keys(), &["greeting"]);
    }

    #[test]
    fn test_update_with_reference_comments() {
        let config = Config {
            write_reference: true,
            ..Default::default()
        };
        let reference = parse("a = Apple\nb = Banana");
        let mut translation = parse("a = Apfel");

        translation.update(&reference, &config).unwrap();

        assert_eq!(
            translation.to_string(),
            "# >> Apple\na = Apfel\n# >> Banana\n# ==> b ="
        );
        assert_eq!(translation.commented_out_keys(), &["b"]);
    }

    #[test]
    fn test_update_keeps_report() {
        let reference = parse("a = 1");
        let mut translation = parse("a = 1\na = 2");
        assert_eq!(translation.report.errors(), 1);

        translation.update(&reference, &Config::default()).unwrap();
        assert_eq!(translation.report.errors(), 1);
    }

    #[test]
    fn test_update_replaces_stale_commented_out_key() {
        let reference = parse("a = 1\nb = 2");
        let mut translation = parse("# ==> a =\nb = Zwei");

        translation.update(&reference, &Config::default()).unwrap();

        assert_eq!(translation.to_string(), "# ==> a =\nb = Zwei");
        assert_eq!(translation.commented_out_keys(), &["a"]);
    }

    #[test]
    fn test_create_from_reference() {
        let reference = parse("# Top\na = 1");
        let doc = Document::create_from(&reference, "de", &Config::default()).unwrap();

        assert_eq!(doc.language.as_deref(), Some("de"));
        assert_eq!(doc.to_string(), "# Top\n# ==> a =");
        assert!(doc.keys().is_empty());
    }
}

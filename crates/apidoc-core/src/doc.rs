//! The documentable entity shared by every model object

use tracing::debug;

use crate::diagnostics::Diagnostics;
use crate::reflect::Reflector;
use crate::sentence::{extract_first_sentence, uc_first};
use crate::tag::{Tag, TagTable};

/// Strip every leading namespace separator off a name.
pub fn normalize_name(name: &str) -> &str {
    name.trim_start_matches('\\')
}

/// Identity, location and doc-comment data of one documented element
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BaseDoc {
    /// Name without leading namespace separator
    pub name: String,
    pub fqsen: Option<String>,
    pub source_file: Option<String>,
    /// `None` when the reflector did not know the line
    pub start_line: Option<usize>,
    pub end_line: Option<usize>,
    pub short_description: String,
    pub description: String,
    /// Version from the `since` tag
    pub since: Option<String>,
    /// Version from the `deprecated` tag
    pub deprecated_since: Option<String>,
    /// Free text from the `deprecated` tag
    pub deprecated_reason: Option<String>,
    /// Remaining tags; never holds `since` or `deprecated`
    pub tags: TagTable,
}

impl BaseDoc {
    /// Build from a reflector.
    ///
    /// A missing doc-comment is recorded in `diagnostics` when one is given.
    pub fn from_reflector(
        reflector: &impl Reflector,
        diagnostics: Option<&mut Diagnostics>,
    ) -> Self {
        Self::build(reflector, reflector.source_file(), diagnostics)
    }

    /// Build a class member, which lives in its owner's `source_file`.
    pub(crate) fn from_member_reflector(
        reflector: &impl Reflector,
        source_file: Option<&str>,
        diagnostics: Option<&mut Diagnostics>,
    ) -> Self {
        Self::build(reflector, source_file, diagnostics)
    }

    fn build(
        reflector: &impl Reflector,
        source_file: Option<&str>,
        diagnostics: Option<&mut Diagnostics>,
    ) -> Self {
        let mut doc = BaseDoc {
            name: normalize_name(reflector.name()).to_string(),
            fqsen: reflector.fqsen().map(|f| normalize_name(f).to_string()),
            source_file: source_file.map(str::to_string),
            start_line: reflector.start_line(),
            end_line: reflector.end_line(),
            ..Default::default()
        };

        let Some(doc_block) = reflector.doc_block() else {
            debug!(element = %doc.name, "no docblock");
            if let Some(diagnostics) = diagnostics {
                diagnostics.warn(
                    doc.start_line,
                    doc.source_file.clone(),
                    format!("No docblock for element '{}'", doc.name),
                );
            }
            return doc;
        };

        doc.description = doc_block.description.clone();
        doc.short_description = if doc_block.summary.trim().is_empty() {
            uc_first(&extract_first_sentence(doc_block.description.trim()))
        } else {
            uc_first(doc_block.summary.trim())
        };
        doc.tags = doc_block
            .tags
            .iter()
            .map(|raw| Tag::parse(&raw.name, &raw.content))
            .collect();
        doc.hoist_version_tags();
        doc
    }

    /// Move `since` and `deprecated` tags into their dedicated fields.
    fn hoist_version_tags(&mut self) {
        for tag in &self.tags {
            match tag {
                Tag::Since { version, .. } => {
                    self.since = version.clone();
                }
                Tag::Deprecated {
                    version,
                    description,
                } => {
                    self.deprecated_since = version.clone();
                    self.deprecated_reason = Some(description.clone());
                }
                Tag::Event { .. } | Tag::Generic { .. } => {}
            }
        }
        self.tags
            .retain(|tag| !matches!(tag, Tag::Since { .. } | Tag::Deprecated { .. }));
    }

    pub fn has_tag(&self, name: &str) -> bool {
        self.tags.has_tag(name)
    }

    pub fn remove_tag(&mut self, name: &str) {
        self.tags.remove_tag(name);
    }

    pub fn first_tag(&self, name: &str) -> Option<&Tag> {
        self.tags.first_tag(name)
    }

    pub fn is_deprecated(&self) -> bool {
        self.deprecated_since.is_some() || self.deprecated_reason.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reflect::{ConstantSnapshot, DocBlock, RawTag};

    fn element(name: &str, doc_block: Option<DocBlock>) -> ConstantSnapshot {
        ConstantSnapshot {
            name: name.to_string(),
            value: None,
            start_line: Some(42),
            end_line: Some(42),
            doc_block,
        }
    }

    #[test]
    fn test_name_is_normalized() {
        let doc = BaseDoc::from_reflector(&element("\\app\\base\\Widget", None), None);
        assert_eq!(doc.name, "app\\base\\Widget");
    }

    #[test]
    fn test_normalize_name_strips_all_leading_separators() {
        assert_eq!(normalize_name("\\\\app\\Foo"), "app\\Foo");
        assert_eq!(normalize_name("\\app\\Foo"), "app\\Foo");
        assert_eq!(normalize_name("app\\Foo"), "app\\Foo");
        assert_eq!(normalize_name("\\"), "");
    }

    #[test]
    fn test_since_and_deprecated_are_hoisted() {
        let doc_block = DocBlock {
            summary: "Says hello.".to_string(),
            description: "Says hello to the world.".to_string(),
            tags: vec![
                RawTag::new("see", "World"),
                RawTag::new("since", "2.0.5"),
                RawTag::new("deprecated", "2.1.0 Use X instead"),
                RawTag::new("throws", "Exception"),
            ],
        };
        let doc = BaseDoc::from_reflector(&element("HELLO", Some(doc_block)), None);

        assert_eq!(doc.since.as_deref(), Some("2.0.5"));
        assert_eq!(doc.deprecated_since.as_deref(), Some("2.1.0"));
        assert_eq!(doc.deprecated_reason.as_deref(), Some("Use X instead"));
        assert!(doc.is_deprecated());
        assert!(!doc.has_tag("since"));
        assert!(!doc.has_tag("deprecated"));
        let names: Vec<&str> = doc.tags.iter().map(Tag::name).collect();
        assert_eq!(names, ["see", "throws"]);
    }

    #[test]
    fn test_mixed_case_version_tags_are_hoisted() {
        let doc_block = DocBlock {
            tags: vec![
                RawTag::new("Since", "1.0"),
                RawTag::new("SINCE", "1.1"),
                RawTag::new("DEPRECATED", "gone soon"),
            ],
            ..Default::default()
        };
        let doc = BaseDoc::from_reflector(&element("X", Some(doc_block)), None);

        assert_eq!(doc.since.as_deref(), Some("1.1"));
        assert_eq!(doc.deprecated_since, None);
        assert_eq!(doc.deprecated_reason.as_deref(), Some("gone soon"));
        assert!(doc.tags.is_empty());
    }

    #[test]
    fn test_description_is_copied_verbatim() {
        let doc_block = DocBlock {
            summary: "short one".to_string(),
            description: "  Long *markdown* text.\n\nSecond paragraph.".to_string(),
            tags: Vec::new(),
        };
        let doc = BaseDoc::from_reflector(&element("X", Some(doc_block)), None);
        assert_eq!(
            doc.description,
            "  Long *markdown* text.\n\nSecond paragraph."
        );
        assert_eq!(doc.short_description, "Short one");
    }

    #[test]
    fn test_short_description_falls_back_to_first_sentence() {
        let doc_block = DocBlock {
            summary: String::new(),
            description: "returns the widget, e.g. a button. More text.".to_string(),
            tags: Vec::new(),
        };
        let doc = BaseDoc::from_reflector(&element("X", Some(doc_block)), None);
        assert_eq!(doc.short_description, "Returns the widget, e.g. a button.");
    }

    #[test]
    fn test_missing_docblock_records_warning() {
        let mut diagnostics = Diagnostics::new();
        let doc = BaseDoc::from_reflector(&element("\\FOO", None), Some(&mut diagnostics));

        assert_eq!(doc.description, "");
        assert!(doc.tags.is_empty());
        assert_eq!(diagnostics.len(), 1);
        let warning = &diagnostics.warnings[0];
        assert_eq!(warning.message, "No docblock for element 'FOO'");
        assert_eq!(warning.line, Some(42));
        assert_eq!(warning.file, None);
    }

    #[test]
    fn test_missing_docblock_without_diagnostics() {
        let doc = BaseDoc::from_reflector(&element("FOO", None), None);
        assert_eq!(doc.name, "FOO");
        assert_eq!(doc.short_description, "");
    }

    #[test]
    fn test_tag_queries_delegate_to_table() {
        let doc_block = DocBlock {
            tags: vec![RawTag::new("author", "Jane"), RawTag::new("Author", "John")],
            ..Default::default()
        };
        let mut doc = BaseDoc::from_reflector(&element("X", Some(doc_block)), None);

        assert_eq!(doc.first_tag("AUTHOR").map(Tag::description), Some("Jane"));
        doc.remove_tag("author");
        assert!(!doc.has_tag("author"));
    }
}

//! Documentation tags and the per-entity tag table
//!
//! Tags are parsed once from their raw `@name content` form into a closed set
//! of kinds. Everything the model does not interpret stays [`Tag::Generic`].

/// A structured annotation from a doc-comment
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tag {
    /// `@since 2.0.5 optional text`
    Since {
        version: Option<String>,
        description: String,
    },
    /// `@deprecated 2.1.0 Use X instead`
    Deprecated {
        version: Option<String>,
        description: String,
    },
    /// `@event EventType description` on a class constant
    Event {
        event_type: Option<String>,
        description: String,
    },
    /// Any tag the model keeps as-is (`@author`, `@see`, `@throws`, ...)
    Generic { name: String, content: String },
}

impl Tag {
    /// Classify a raw tag by its name (case-insensitive).
    pub fn parse(name: &str, content: &str) -> Self {
        let content = content.trim();
        match name.to_ascii_lowercase().as_str() {
            "since" => {
                let (version, description) = split_version(content);
                Tag::Since {
                    version,
                    description,
                }
            }
            "deprecated" => {
                let (version, description) = split_version(content);
                Tag::Deprecated {
                    version,
                    description,
                }
            }
            "event" => {
                let (event_type, description) = split_first_word(content);
                Tag::Event {
                    event_type,
                    description,
                }
            }
            _ => Tag::Generic {
                name: name.to_string(),
                content: content.to_string(),
            },
        }
    }

    /// The tag name as written (generic tags) or its canonical lowercase form.
    pub fn name(&self) -> &str {
        match self {
            Tag::Since { .. } => "since",
            Tag::Deprecated { .. } => "deprecated",
            Tag::Event { .. } => "event",
            Tag::Generic { name, .. } => name,
        }
    }

    /// Whether this tag's name matches `name`, ignoring ASCII case.
    ///
    /// Tag names are ASCII identifiers, so Unicode case folding is not applied.
    pub fn is_named(&self, name: &str) -> bool {
        self.name().eq_ignore_ascii_case(name)
    }

    /// Free text after the tag name, minus any leading version/type token.
    pub fn description(&self) -> &str {
        match self {
            Tag::Since { description, .. }
            | Tag::Deprecated { description, .. }
            | Tag::Event { description, .. } => description,
            Tag::Generic { content, .. } => content,
        }
    }
}

/// Split `"2.0.5 some text"` into a version and the rest.
///
/// Only a first word starting with an ASCII digit counts as a version.
fn split_version(content: &str) -> (Option<String>, String) {
    match content.split_once(char::is_whitespace) {
        Some((first, rest)) if starts_with_digit(first) => {
            (Some(first.to_string()), rest.trim().to_string())
        }
        None if starts_with_digit(content) => (Some(content.to_string()), String::new()),
        _ => (None, content.to_string()),
    }
}

fn starts_with_digit(s: &str) -> bool {
    s.chars().next().is_some_and(|c| c.is_ascii_digit())
}

fn split_first_word(content: &str) -> (Option<String>, String) {
    if content.is_empty() {
        return (None, String::new());
    }
    match content.split_once(char::is_whitespace) {
        Some((first, rest)) => (Some(first.to_string()), rest.trim().to_string()),
        None => (Some(content.to_string()), String::new()),
    }
}

/// Ordered collection of the tags attached to one documented entity
///
/// Duplicates are kept; lookups compare tag names only, ignoring ASCII case.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagTable {
    tags: Vec<Tag>,
}

impl TagTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a tag, keeping insertion order
    pub fn push(&mut self, tag: Tag) {
        self.tags.push(tag);
    }

    /// Whether any tag is named `name`
    pub fn has_tag(&self, name: &str) -> bool {
        self.tags.iter().any(|tag| tag.is_named(name))
    }

    /// Remove every tag named `name`. No-op if there are none.
    pub fn remove_tag(&mut self, name: &str) {
        self.tags.retain(|tag| !tag.is_named(name));
    }

    /// First tag named `name` in table order
    pub fn first_tag(&self, name: &str) -> Option<&Tag> {
        self.tags.iter().find(|tag| tag.is_named(name))
    }

    /// All tags named `name` in table order
    pub fn by_name<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Tag> + 'a {
        self.tags.iter().filter(move |tag| tag.is_named(name))
    }

    /// Keep only the tags for which `keep` returns true
    pub(crate) fn retain(&mut self, keep: impl FnMut(&Tag) -> bool) {
        self.tags.retain(keep);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Tag> {
        self.tags.iter()
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

impl FromIterator<Tag> for TagTable {
    fn from_iter<I: IntoIterator<Item = Tag>>(iter: I) -> Self {
        Self {
            tags: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a TagTable {
    type Item = &'a Tag;
    type IntoIter = std::slice::Iter<'a, Tag>;

    fn into_iter(self) -> Self::IntoIter {
        self.tags.iter()
    }
}

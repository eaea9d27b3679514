//! Class members: constants, events, methods and properties

use crate::diagnostics::Diagnostics;
use crate::doc::BaseDoc;
use crate::reflect::{ConstantReflector, MethodReflector, PropertyReflector};
use crate::sentence::{extract_first_sentence, uc_first};
use crate::tag::Tag;

/// Member visibility
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Visibility {
    #[default]
    Public,
    Protected,
    Private,
}

impl Visibility {
    /// Parse a visibility keyword
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "public" => Some(Visibility::Public),
            "protected" => Some(Visibility::Protected),
            "private" => Some(Visibility::Private),
            _ => None,
        }
    }

    /// Absent or unrecognized visibility means public
    pub(crate) fn parse_or_public(s: Option<&str>) -> Self {
        s.and_then(Self::parse).unwrap_or_default()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Visibility::Public => "public",
            Visibility::Protected => "protected",
            Visibility::Private => "private",
        }
    }
}

impl std::fmt::Display for Visibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A class constant
#[derive(Debug, Clone, PartialEq)]
pub struct ConstDoc {
    pub base: BaseDoc,
    /// Name of the class that declares this constant
    pub defined_by: String,
    pub value: Option<String>,
}

impl ConstDoc {
    pub fn from_reflector(reflector: &impl ConstantReflector, defined_by: &str) -> Self {
        Self {
            base: BaseDoc::from_reflector(reflector, None),
            defined_by: defined_by.to_string(),
            value: reflector.value().map(str::to_string),
        }
    }

    pub fn name(&self) -> &str {
        &self.base.name
    }
}

/// A class constant declaring an event (its doc-comment has an `event` tag)
#[derive(Debug, Clone, PartialEq)]
pub struct EventDoc {
    pub base: BaseDoc,
    /// Name of the class that declares this event
    pub defined_by: String,
    pub value: Option<String>,
    /// Type of the event object, from the `event` tag
    pub event_type: Option<String>,
}

impl EventDoc {
    /// Build an event; the `event` tag's text replaces the description.
    pub fn from_reflector(reflector: &impl ConstantReflector, defined_by: &str) -> Self {
        let mut base = BaseDoc::from_reflector(reflector, None);
        let mut event_type = None;
        for tag in base.tags.by_name("event") {
            if let Tag::Event {
                event_type: tag_type,
                description,
            } = tag
            {
                event_type = tag_type.clone();
                if !description.is_empty() {
                    base.description = uc_first(description);
                    base.short_description = extract_first_sentence(&base.description);
                }
            }
        }
        base.remove_tag("event");

        Self {
            base,
            defined_by: defined_by.to_string(),
            value: reflector.value().map(str::to_string),
            event_type,
        }
    }

    pub fn name(&self) -> &str {
        &self.base.name
    }
}

/// A method
#[derive(Debug, Clone, PartialEq)]
pub struct MethodDoc {
    pub base: BaseDoc,
    pub defined_by: String,
    pub visibility: Visibility,
    pub is_static: bool,
    pub is_abstract: bool,
    pub is_final: bool,
    pub return_type: Option<String>,
}

impl MethodDoc {
    /// Build a method declared by `defined_by`, located in `source_file`.
    ///
    /// A missing doc-comment is recorded in `diagnostics` when one is given.
    pub fn from_reflector(
        reflector: &impl MethodReflector,
        defined_by: &str,
        source_file: Option<&str>,
        diagnostics: Option<&mut Diagnostics>,
    ) -> Self {
        let base = BaseDoc::from_member_reflector(reflector, source_file, diagnostics);
        Self {
            base,
            defined_by: defined_by.to_string(),
            visibility: reflector.visibility(),
            is_static: reflector.is_static(),
            is_abstract: reflector.is_abstract(),
            is_final: reflector.is_final(),
            return_type: reflector.return_type().map(str::to_string),
        }
    }

    pub fn name(&self) -> &str {
        &self.base.name
    }
}

/// A property
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyDoc {
    pub base: BaseDoc,
    pub defined_by: String,
    pub visibility: Visibility,
    pub is_static: bool,
    pub type_hint: Option<String>,
    pub default_value: Option<String>,
}

impl PropertyDoc {
    pub fn from_reflector(
        reflector: &impl PropertyReflector,
        defined_by: &str,
        source_file: Option<&str>,
        diagnostics: Option<&mut Diagnostics>,
    ) -> Self {
        let base = BaseDoc::from_member_reflector(reflector, source_file, diagnostics);
        Self {
            base,
            defined_by: defined_by.to_string(),
            visibility: reflector.visibility(),
            is_static: reflector.is_static(),
            type_hint: reflector.type_hint().map(str::to_string),
            default_value: reflector.default_value().map(str::to_string),
        }
    }

    pub fn name(&self) -> &str {
        &self.base.name
    }
}

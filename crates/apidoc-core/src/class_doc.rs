//! Classes

use indexmap::IndexMap;

use crate::diagnostics::Diagnostics;
use crate::doc::normalize_name;
use crate::members::{ConstDoc, EventDoc};
use crate::reflect::{ClassReflector, Reflector};
use crate::type_doc::{Subject, TypeDoc};

/// A documented class
#[derive(Debug, Clone, PartialEq)]
pub struct ClassDoc {
    pub type_doc: TypeDoc,
    /// `None` when the class extends nothing
    pub parent_class: Option<String>,
    pub is_abstract: bool,
    pub is_final: bool,
    pub interfaces: Vec<String>,
    pub traits: Vec<String>,
    /// Filled by [`crate::ApiModel::update_references`], empty until then
    pub subclasses: Vec<String>,
    /// Constants carrying an `event` tag
    pub events: IndexMap<String, EventDoc>,
    /// All other constants
    pub constants: IndexMap<String, ConstDoc>,
}

impl ClassDoc {
    pub fn from_reflector(
        reflector: &impl ClassReflector,
        diagnostics: Option<&mut Diagnostics>,
    ) -> Self {
        let mut type_doc = TypeDoc::from_reflector(reflector, diagnostics);
        type_doc.base.fqsen = reflector.fqsen().map(|f| normalize_name(f).to_string());

        let parent_class = Some(normalize_name(reflector.parent()))
            .filter(|parent| !parent.is_empty())
            .map(str::to_string);

        let mut events = IndexMap::new();
        let mut constants = IndexMap::new();
        for constant in reflector.constants() {
            let is_event = constant
                .doc_block()
                .is_some_and(|doc_block| doc_block.has_tag("event"));
            if is_event {
                let event = EventDoc::from_reflector(constant, &type_doc.base.name);
                events.insert(event.name().to_string(), event);
            } else {
                let constant = ConstDoc::from_reflector(constant, &type_doc.base.name);
                constants.insert(constant.name().to_string(), constant);
            }
        }

        Self {
            type_doc,
            parent_class,
            is_abstract: reflector.is_abstract(),
            is_final: reflector.is_final(),
            interfaces: normalize_all(reflector.interfaces()),
            traits: normalize_all(reflector.traits()),
            subclasses: Vec::new(),
            events,
            constants,
        }
    }

    pub fn name(&self) -> &str {
        self.type_doc.name()
    }

    /// Look up a member by name: methods and properties first, then events,
    /// then constants.
    pub fn find_subject(&self, subject_name: &str) -> Option<Subject<'_>> {
        if let Some(subject) = self.type_doc.find_subject(subject_name) {
            return Some(subject);
        }
        if let Some(event) = self.events.get(subject_name) {
            return Some(Subject::Event(event));
        }
        self.constants.get(subject_name).map(Subject::Constant)
    }

    /// Events declared by this class itself, in source order
    pub fn native_events(&self) -> IndexMap<&str, &EventDoc> {
        self.events
            .iter()
            .filter(|(_, event)| event.defined_by == self.name())
            .map(|(name, event)| (name.as_str(), event))
            .collect()
    }
}

fn normalize_all(names: &[String]) -> Vec<String> {
    names
        .iter()
        .map(|name| normalize_name(name).to_string())
        .collect()
}

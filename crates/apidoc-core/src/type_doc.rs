//! Class-like types: the members shared by classes, interfaces and traits

use indexmap::IndexMap;

use crate::diagnostics::Diagnostics;
use crate::doc::BaseDoc;
use crate::members::{ConstDoc, EventDoc, MethodDoc, PropertyDoc, Visibility};
use crate::reflect::{MethodReflector, PropertyReflector, TypeReflector};
use crate::tag::Tag;

/// A member found by name lookup
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Subject<'a> {
    Method(&'a MethodDoc),
    Property(&'a PropertyDoc),
    Event(&'a EventDoc),
    Constant(&'a ConstDoc),
}

impl Subject<'_> {
    pub fn name(&self) -> &str {
        match self {
            Subject::Method(m) => m.name(),
            Subject::Property(p) => p.name(),
            Subject::Event(e) => e.name(),
            Subject::Constant(c) => c.name(),
        }
    }
}

/// A documented class-like type
#[derive(Debug, Clone, PartialEq)]
pub struct TypeDoc {
    pub base: BaseDoc,
    /// Non-private methods in source order
    pub methods: IndexMap<String, MethodDoc>,
    /// Non-private properties in source order
    pub properties: IndexMap<String, PropertyDoc>,
    /// Contents of the `author` tags
    pub authors: Vec<String>,
}

impl TypeDoc {
    pub fn from_reflector(
        reflector: &impl TypeReflector,
        mut diagnostics: Option<&mut Diagnostics>,
    ) -> Self {
        let base = BaseDoc::from_reflector(reflector, diagnostics.as_deref_mut());
        let authors = base
            .tags
            .by_name("author")
            .map(|tag| tag.description().to_string())
            .collect();

        let mut methods = IndexMap::new();
        for method in reflector.methods() {
            if method.visibility() == Visibility::Private {
                continue;
            }
            let method = MethodDoc::from_reflector(
                method,
                &base.name,
                base.source_file.as_deref(),
                diagnostics.as_deref_mut(),
            );
            methods.insert(method.name().to_string(), method);
        }

        let mut properties = IndexMap::new();
        for property in reflector.properties() {
            if property.visibility() == Visibility::Private {
                continue;
            }
            let property = PropertyDoc::from_reflector(
                property,
                &base.name,
                base.source_file.as_deref(),
                diagnostics.as_deref_mut(),
            );
            properties.insert(property.name().to_string(), property);
        }

        Self {
            base,
            methods,
            properties,
            authors,
        }
    }

    pub fn name(&self) -> &str {
        &self.base.name
    }

    /// Look up a method (`foo` or `foo()`) or a property (`bar` or `$bar`).
    ///
    /// Methods win over properties; a name ending in `()` never matches a
    /// property.
    pub fn find_subject(&self, subject_name: &str) -> Option<Subject<'_>> {
        if !subject_name.starts_with('$') {
            let method_name = subject_name.trim_end_matches(['(', ')']);
            if let Some(method) = self.methods.get(method_name) {
                return Some(Subject::Method(method));
            }
        }
        if subject_name.ends_with("()") {
            return None;
        }
        let property_name = subject_name.trim_start_matches('$');
        self.properties
            .values()
            .find(|p| p.name().trim_start_matches('$') == property_name)
            .map(Subject::Property)
    }

    /// Methods declared by this type itself
    pub fn native_methods(&self) -> IndexMap<&str, &MethodDoc> {
        self.methods
            .iter()
            .filter(|(_, m)| m.defined_by == self.base.name)
            .map(|(name, m)| (name.as_str(), m))
            .collect()
    }

    /// Properties declared by this type itself
    pub fn native_properties(&self) -> IndexMap<&str, &PropertyDoc> {
        self.properties
            .iter()
            .filter(|(_, p)| p.defined_by == self.base.name)
            .map(|(name, p)| (name.as_str(), p))
            .collect()
    }

    pub fn public_methods(&self) -> impl Iterator<Item = &MethodDoc> {
        self.methods_with(Visibility::Public)
    }

    pub fn protected_methods(&self) -> impl Iterator<Item = &MethodDoc> {
        self.methods_with(Visibility::Protected)
    }

    pub fn public_properties(&self) -> impl Iterator<Item = &PropertyDoc> {
        self.properties_with(Visibility::Public)
    }

    pub fn protected_properties(&self) -> impl Iterator<Item = &PropertyDoc> {
        self.properties_with(Visibility::Protected)
    }

    fn methods_with(&self, visibility: Visibility) -> impl Iterator<Item = &MethodDoc> {
        self.methods
            .values()
            .filter(move |m| m.visibility == visibility)
    }

    fn properties_with(&self, visibility: Visibility) -> impl Iterator<Item = &PropertyDoc> {
        self.properties
            .values()
            .filter(move |p| p.visibility == visibility)
    }

    /// First `author` tag, for renderers that show a single author
    pub fn first_author(&self) -> Option<&Tag> {
        self.base.first_tag("author")
    }
}

//! The seam with the source-reflection engine
//!
//! Entities are built from anything implementing these traits. The snapshot
//! types at the bottom are the serialized form an engine can emit; they are
//! what the CLI reads.

use eyre::{Result, WrapErr};
use facet::Facet;
use std::path::Path;

use crate::members::Visibility;

/// A raw `@name content` tag as the engine reports it
#[derive(Debug, Clone, PartialEq, Eq, Facet)]
pub struct RawTag {
    pub name: String,
    #[facet(default)]
    pub content: String,
}

impl RawTag {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }
}

/// A parsed doc-comment
#[derive(Debug, Clone, Default, PartialEq, Eq, Facet)]
pub struct DocBlock {
    /// Short description (the summary line), may be empty
    #[facet(default)]
    pub summary: String,
    /// Rendered long description
    #[facet(default)]
    pub description: String,
    /// Tags in source order
    #[facet(default)]
    pub tags: Vec<RawTag>,
}

impl DocBlock {
    /// Whether any tag carries `name`, ignoring ASCII case like [`crate::Tag::is_named`]
    pub fn has_tag(&self, name: &str) -> bool {
        self.tags.iter().any(|t| t.name.eq_ignore_ascii_case(name))
    }
}

/// Any reflected source element
pub trait Reflector {
    /// Name as written in source, possibly with a leading `\`
    fn name(&self) -> &str;

    /// Fully qualified name, if the engine resolved one
    fn fqsen(&self) -> Option<&str> {
        None
    }

    fn source_file(&self) -> Option<&str> {
        None
    }

    /// First line (1-indexed), `None` when unknown
    fn start_line(&self) -> Option<usize> {
        None
    }

    /// Last line (1-indexed), `None` when unknown
    fn end_line(&self) -> Option<usize> {
        None
    }

    fn doc_block(&self) -> Option<&DocBlock>;
}

/// A class constant
pub trait ConstantReflector: Reflector {
    /// Source text of the constant's value
    fn value(&self) -> Option<&str>;
}

/// A method of a class-like type
pub trait MethodReflector: Reflector {
    fn visibility(&self) -> Visibility;
    fn is_static(&self) -> bool;
    fn is_abstract(&self) -> bool;
    fn is_final(&self) -> bool;
    fn return_type(&self) -> Option<&str>;
}

/// A property of a class-like type
pub trait PropertyReflector: Reflector {
    fn visibility(&self) -> Visibility;
    fn is_static(&self) -> bool;
    fn type_hint(&self) -> Option<&str>;
    fn default_value(&self) -> Option<&str>;
}

/// A class-like type with methods and properties
pub trait TypeReflector: Reflector {
    type Method: MethodReflector;
    type Property: PropertyReflector;

    fn methods(&self) -> &[Self::Method];
    fn properties(&self) -> &[Self::Property];
}

/// A class
pub trait ClassReflector: TypeReflector {
    type Constant: ConstantReflector;

    /// Parent class name; empty when the class extends nothing
    fn parent(&self) -> &str;
    fn is_abstract(&self) -> bool;
    fn is_final(&self) -> bool;
    fn interfaces(&self) -> &[String];
    fn traits(&self) -> &[String];
    fn constants(&self) -> &[Self::Constant];
}

/// Engines report unknown lines as `-1`.
fn line_from_sentinel(line: Option<i64>) -> Option<usize> {
    line.and_then(|l| usize::try_from(l).ok())
}

/// Serialized class constant
#[derive(Debug, Clone, Facet)]
pub struct ConstantSnapshot {
    pub name: String,
    #[facet(default)]
    pub value: Option<String>,
    #[facet(default)]
    pub start_line: Option<i64>,
    #[facet(default)]
    pub end_line: Option<i64>,
    #[facet(default)]
    pub doc_block: Option<DocBlock>,
}

impl Reflector for ConstantSnapshot {
    fn name(&self) -> &str {
        &self.name
    }

    fn start_line(&self) -> Option<usize> {
        line_from_sentinel(self.start_line)
    }

    fn end_line(&self) -> Option<usize> {
        line_from_sentinel(self.end_line)
    }

    fn doc_block(&self) -> Option<&DocBlock> {
        self.doc_block.as_ref()
    }
}

impl ConstantReflector for ConstantSnapshot {
    fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

/// Serialized method
#[derive(Debug, Clone, Facet)]
pub struct MethodSnapshot {
    pub name: String,
    /// `public`, `protected` or `private`; public when absent
    #[facet(default)]
    pub visibility: Option<String>,
    #[facet(default)]
    pub is_static: bool,
    #[facet(default)]
    pub is_abstract: bool,
    #[facet(default)]
    pub is_final: bool,
    #[facet(default)]
    pub return_type: Option<String>,
    #[facet(default)]
    pub start_line: Option<i64>,
    #[facet(default)]
    pub end_line: Option<i64>,
    #[facet(default)]
    pub doc_block: Option<DocBlock>,
}

impl Reflector for MethodSnapshot {
    fn name(&self) -> &str {
        &self.name
    }

    fn start_line(&self) -> Option<usize> {
        line_from_sentinel(self.start_line)
    }

    fn end_line(&self) -> Option<usize> {
        line_from_sentinel(self.end_line)
    }

    fn doc_block(&self) -> Option<&DocBlock> {
        self.doc_block.as_ref()
    }
}

impl MethodReflector for MethodSnapshot {
    fn visibility(&self) -> Visibility {
        Visibility::parse_or_public(self.visibility.as_deref())
    }

    fn is_static(&self) -> bool {
        self.is_static
    }

    fn is_abstract(&self) -> bool {
        self.is_abstract
    }

    fn is_final(&self) -> bool {
        self.is_final
    }

    fn return_type(&self) -> Option<&str> {
        self.return_type.as_deref()
    }
}

/// Serialized property
#[derive(Debug, Clone, Facet)]
pub struct PropertySnapshot {
    pub name: String,
    #[facet(default)]
    pub visibility: Option<String>,
    #[facet(default)]
    pub is_static: bool,
    #[facet(default)]
    pub type_hint: Option<String>,
    #[facet(default)]
    pub default_value: Option<String>,
    #[facet(default)]
    pub start_line: Option<i64>,
    #[facet(default)]
    pub end_line: Option<i64>,
    #[facet(default)]
    pub doc_block: Option<DocBlock>,
}

impl Reflector for PropertySnapshot {
    fn name(&self) -> &str {
        &self.name
    }

    fn start_line(&self) -> Option<usize> {
        line_from_sentinel(self.start_line)
    }

    fn end_line(&self) -> Option<usize> {
        line_from_sentinel(self.end_line)
    }

    fn doc_block(&self) -> Option<&DocBlock> {
        self.doc_block.as_ref()
    }
}

impl PropertyReflector for PropertySnapshot {
    fn visibility(&self) -> Visibility {
        Visibility::parse_or_public(self.visibility.as_deref())
    }

    fn is_static(&self) -> bool {
        self.is_static
    }

    fn type_hint(&self) -> Option<&str> {
        self.type_hint.as_deref()
    }

    fn default_value(&self) -> Option<&str> {
        self.default_value.as_deref()
    }
}

/// Serialized class
#[derive(Debug, Clone, Facet)]
pub struct ClassSnapshot {
    pub name: String,
    #[facet(default)]
    pub fqsen: Option<String>,
    #[facet(default)]
    pub source_file: Option<String>,
    #[facet(default)]
    pub start_line: Option<i64>,
    #[facet(default)]
    pub end_line: Option<i64>,
    #[facet(default)]
    pub doc_block: Option<DocBlock>,
    #[facet(default)]
    pub parent: String,
    #[facet(default)]
    pub is_abstract: bool,
    #[facet(default)]
    pub is_final: bool,
    #[facet(default)]
    pub interfaces: Vec<String>,
    #[facet(default)]
    pub traits: Vec<String>,
    #[facet(default)]
    pub constants: Vec<ConstantSnapshot>,
    #[facet(default)]
    pub methods: Vec<MethodSnapshot>,
    #[facet(default)]
    pub properties: Vec<PropertySnapshot>,
}

impl ClassSnapshot {
    /// A bare class with no docs and no members
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fqsen: None,
            source_file: None,
            start_line: None,
            end_line: None,
            doc_block: None,
            parent: String::new(),
            is_abstract: false,
            is_final: false,
            interfaces: Vec::new(),
            traits: Vec::new(),
            constants: Vec::new(),
            methods: Vec::new(),
            properties: Vec::new(),
        }
    }
}

impl Reflector for ClassSnapshot {
    fn name(&self) -> &str {
        &self.name
    }

    fn fqsen(&self) -> Option<&str> {
        self.fqsen.as_deref()
    }

    fn source_file(&self) -> Option<&str> {
        self.source_file.as_deref()
    }

    fn start_line(&self) -> Option<usize> {
        line_from_sentinel(self.start_line)
    }

    fn end_line(&self) -> Option<usize> {
        line_from_sentinel(self.end_line)
    }

    fn doc_block(&self) -> Option<&DocBlock> {
        self.doc_block.as_ref()
    }
}

impl TypeReflector for ClassSnapshot {
    type Method = MethodSnapshot;
    type Property = PropertySnapshot;

    fn methods(&self) -> &[MethodSnapshot] {
        &self.methods
    }

    fn properties(&self) -> &[PropertySnapshot] {
        &self.properties
    }
}

impl ClassReflector for ClassSnapshot {
    type Constant = ConstantSnapshot;

    fn parent(&self) -> &str {
        &self.parent
    }

    fn is_abstract(&self) -> bool {
        self.is_abstract
    }

    fn is_final(&self) -> bool {
        self.is_final
    }

    fn interfaces(&self) -> &[String] {
        &self.interfaces
    }

    fn traits(&self) -> &[String] {
        &self.traits
    }

    fn constants(&self) -> &[ConstantSnapshot] {
        &self.constants
    }
}

/// Everything an engine reflected for one run
#[derive(Debug, Clone, Default, Facet)]
pub struct ReflectionSnapshot {
    #[facet(default)]
    pub classes: Vec<ClassSnapshot>,
}

impl ReflectionSnapshot {
    /// Parse a snapshot from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        facet_json::from_str(json).wrap_err("Failed to parse reflection snapshot JSON")
    }

    /// Load a snapshot from a local file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("Failed to read reflection snapshot {}", path.display()))?;
        Self::from_json(&content)
            .wrap_err_with(|| format!("Failed to parse reflection snapshot {}", path.display()))
    }

    /// Append another snapshot's classes after ours
    pub fn extend(&mut self, other: ReflectionSnapshot) {
        self.classes.extend(other.classes);
    }
}

//! apidoc-core - Normalized API documentation model
//!
//! This crate turns reflected source elements (classes, constants, methods,
//! properties and their doc-comments) into a model that renderers can consume:
//! - Doc-comment tags are classified once ([`Tag`]); `since` and `deprecated`
//!   become dedicated fields of every entity
//! - Class constants are split into plain constants and events depending on
//!   the presence of an `event` tag
//! - Summaries are cut at the first sentence ([`extract_first_sentence`])
//!
//! # Features
//!
//! - `parallel` - Build classes in parallel in [`ApiModel::build`] (brings in `rayon`)
//!
//! # Building a model
//!
//! Anything implementing [`ClassReflector`] can be documented. The snapshot
//! types in [`reflect`] implement it for data loaded from JSON:
//!
//! ```
//! use apidoc_core::{ApiModel, ReflectionSnapshot};
//!
//! let snapshot = ReflectionSnapshot::from_json(r#"{
//!     "classes": [
//!         {
//!             "name": "\\app\\Model",
//!             "doc_block": { "summary": "Base model.", "tags": [ { "name": "since", "content": "2.0" } ] },
//!             "constants": [
//!                 { "name": "SCENARIO_DEFAULT", "value": "'default'" },
//!                 {
//!                     "name": "EVENT_BEFORE_SAVE",
//!                     "doc_block": { "tags": [ { "name": "event", "content": "ModelEvent raised before saving." } ] }
//!                 }
//!             ]
//!         }
//!     ]
//! }"#).unwrap();
//!
//! let mut model = ApiModel::build(&snapshot.classes).unwrap();
//! model.update_references();
//!
//! let class = model.class("app\\Model").unwrap();
//! assert_eq!(class.type_doc.base.since.as_deref(), Some("2.0"));
//! assert!(class.constants.contains_key("SCENARIO_DEFAULT"));
//! assert!(class.events.contains_key("EVENT_BEFORE_SAVE"));
//! ```

mod class_doc;
mod diagnostics;
mod doc;
mod members;
mod model;
pub mod reflect;
mod sentence;
mod tag;
mod type_doc;

pub use class_doc::ClassDoc;
pub use diagnostics::{Diagnostics, Warning};
pub use doc::{BaseDoc, normalize_name};
pub use members::{ConstDoc, EventDoc, MethodDoc, PropertyDoc, Visibility};
pub use model::ApiModel;
pub use reflect::{
    ClassReflector, ClassSnapshot, ConstantReflector, DocBlock, MethodReflector,
    PropertyReflector, RawTag, ReflectionSnapshot, Reflector, TypeReflector,
};
pub use sentence::{extract_first_sentence, uc_first};
pub use tag::{Tag, TagTable};
pub use type_doc::{Subject, TypeDoc};

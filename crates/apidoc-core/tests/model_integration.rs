//! Integration tests for building a model from a reflection snapshot

use std::path::Path;

use apidoc_core::{ApiModel, ReflectionSnapshot, Subject, Tag, extract_first_sentence};

const FIXTURES_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures");

fn load_model() -> ApiModel {
    let snapshot = ReflectionSnapshot::load(Path::new(FIXTURES_DIR).join("reflection.json"))
        .expect("Failed to load reflection fixture");
    let mut model = ApiModel::build(&snapshot.classes).expect("Failed to build model");
    model.update_references();
    model
}

#[test]
fn test_all_classes_are_built() {
    let model = load_model();
    let names: Vec<&str> = model.classes().map(|c| c.name()).collect();
    assert_eq!(
        names,
        ["app\\base\\Component", "app\\db\\Model", "app\\db\\UndocumentedModel"]
    );
}

#[test]
fn test_version_tags_are_hoisted() {
    let model = load_model();
    let class = model.class("app\\db\\Model").unwrap();
    let base = &class.type_doc.base;

    assert_eq!(base.since.as_deref(), Some("2.0.5"));
    assert_eq!(base.deprecated_since.as_deref(), Some("2.1.0"));
    assert_eq!(base.deprecated_reason.as_deref(), Some("Use X instead"));
    assert!(!base.has_tag("since"));
    assert!(!base.has_tag("deprecated"));
    assert_eq!(base.first_tag("see").map(Tag::description), Some("ActiveRecord"));
}

#[test]
fn test_class_metadata_is_normalized() {
    let model = load_model();
    let class = model.class("app\\db\\Model").unwrap();

    assert_eq!(class.type_doc.base.fqsen.as_deref(), Some("app\\db\\Model"));
    assert_eq!(class.parent_class.as_deref(), Some("app\\base\\Component"));
    assert_eq!(class.interfaces, ["ArrayAccess", "IteratorAggregate"]);
    assert_eq!(class.traits, ["app\\base\\ArrayableTrait"]);
    assert!(class.is_abstract);
    assert_eq!(class.type_doc.base.start_line, None);
    assert_eq!(class.type_doc.base.end_line, None);
}

#[test]
fn test_every_constant_lands_in_exactly_one_map() {
    let model = load_model();
    let class = model.class("app\\db\\Model").unwrap();

    let constants: Vec<&str> = class.constants.keys().map(String::as_str).collect();
    let events: Vec<&str> = class.events.keys().map(String::as_str).collect();
    assert_eq!(constants, ["SCENARIO_DEFAULT", "MAX_ERRORS"]);
    assert_eq!(events, ["EVENT_BEFORE_VALIDATE"]);
    for name in &events {
        assert!(!class.constants.contains_key(*name));
    }

    let event = &class.events["EVENT_BEFORE_VALIDATE"];
    assert_eq!(event.defined_by, "app\\db\\Model");
    assert_eq!(event.event_type.as_deref(), Some("ModelEvent"));
    assert_eq!(
        event.base.short_description,
        "An event raised at the beginning of validate()."
    );
    assert_eq!(class.native_events().len(), 1);
}

#[test]
fn test_find_subject_across_member_kinds() {
    let model = load_model();
    let class = model.class("app\\db\\Model").unwrap();

    assert!(matches!(class.find_subject("validate()"), Some(Subject::Method(_))));
    assert!(matches!(class.find_subject("$scenario"), Some(Subject::Property(_))));
    assert!(matches!(
        class.find_subject("EVENT_BEFORE_VALIDATE"),
        Some(Subject::Event(_))
    ));
    assert!(matches!(
        class.find_subject("MAX_ERRORS"),
        Some(Subject::Constant(c)) if c.value.as_deref() == Some("10")
    ));
    assert!(class.find_subject("on").is_none());
}

#[test]
fn test_subclasses_are_resolved() {
    let model = load_model();
    assert_eq!(
        model.class("app\\base\\Component").unwrap().subclasses,
        ["app\\db\\Model"]
    );
    assert_eq!(
        model.class("app\\db\\Model").unwrap().subclasses,
        ["app\\db\\UndocumentedModel"]
    );
}

#[test]
fn test_missing_docblocks_are_warnings() {
    let model = load_model();
    let warnings = &model.diagnostics().warnings;

    let messages: Vec<&str> = warnings.iter().map(|w| w.message.as_str()).collect();
    assert_eq!(
        messages,
        [
            "No docblock for element 'behaviors'",
            "No docblock for element 'scenario'",
            "No docblock for element 'app\\db\\UndocumentedModel'",
        ]
    );

    assert_eq!(warnings[0].file.as_deref(), Some("src/base/Component.php"));
    assert_eq!(warnings[0].line, None);
    assert_eq!(warnings[2].line, Some(5));
    assert_eq!(
        warnings[2].file.as_deref(),
        Some("src/db/UndocumentedModel.php")
    );
}

#[test]
fn test_private_members_are_not_documented() {
    let model = load_model();
    let class = model.class("app\\base\\Component").unwrap();

    assert!(class.type_doc.methods.contains_key("on"));
    assert!(!class.type_doc.methods.contains_key("ensureBehaviors"));
    assert_eq!(class.type_doc.authors, ["Jane Doe <jane@example.com>"]);
}

#[test]
fn test_first_sentence_of_fixture_descriptions() {
    let model = load_model();
    let component = model.class("app\\base\\Component").unwrap();
    let model_class = model.class("app\\db\\Model").unwrap();

    assert_eq!(
        extract_first_sentence(&component.type_doc.base.description),
        "Component is the base class for objects with events."
    );
    assert_eq!(
        extract_first_sentence(&model_class.type_doc.base.description),
        "Model is the base class for data models, i.e. things with attributes."
    );
}

//! Output formatting for documentation models

use apidoc_core::{ApiModel, BaseDoc, ClassDoc, Warning};
use facet::Facet;
use owo_colors::OwoColorize;

/// Output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "text" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Render a built model in the specified format
pub fn render_model(model: &ApiModel, format: OutputFormat, verbose: bool) -> String {
    match format {
        OutputFormat::Text => render_text(model, verbose),
        OutputFormat::Json => render_json(model),
    }
}

fn render_text(model: &ApiModel, verbose: bool) -> String {
    let mut output = String::new();

    output.push('\n');
    output.push_str(&format!(
        "{} API model: {} classes\n",
        "##".bold(),
        model.len().to_string().cyan().bold()
    ));

    for class in model.classes() {
        output.push('\n');
        render_class_heading(&mut output, class);

        let base = &class.type_doc.base;
        if !base.short_description.is_empty() {
            output.push_str(&format!("  {}\n", base.short_description.dimmed()));
        }
        if let Some(parent) = &class.parent_class {
            output.push_str(&format!("  extends {}\n", parent));
        }
        if !class.subclasses.is_empty() {
            output.push_str(&format!("  subclasses: {}\n", class.subclasses.join(", ")));
        }

        output.push_str(&format!(
            "  {} methods, {} properties, {} events, {} constants\n",
            class.type_doc.methods.len(),
            class.type_doc.properties.len(),
            class.events.len(),
            class.constants.len()
        ));

        if verbose {
            for event in class.events.values() {
                output.push_str(&format!(
                    "    {} {} {}\n",
                    "event".magenta(),
                    event.name(),
                    event.base.short_description.dimmed()
                ));
            }
            for constant in class.constants.values() {
                output.push_str(&format!(
                    "    {} {} = {}\n",
                    "const".blue(),
                    constant.name(),
                    constant.value.as_deref().unwrap_or("?")
                ));
            }
        }
    }

    output
}

fn render_class_heading(output: &mut String, class: &ClassDoc) {
    let base = &class.type_doc.base;
    let mut heading = format!("{}", class.name().green().bold());
    if let Some(since) = &base.since {
        heading.push_str(&format!(" (since {})", since));
    }
    if base.is_deprecated() {
        heading.push_str(&format!(" {}", deprecation_note(base).yellow()));
    }
    output.push_str(&heading);
    output.push('\n');
}

fn deprecation_note(base: &BaseDoc) -> String {
    match (&base.deprecated_since, &base.deprecated_reason) {
        (Some(version), Some(reason)) if !reason.is_empty() => {
            format!("[deprecated since {}: {}]", version, reason)
        }
        (Some(version), _) => format!("[deprecated since {}]", version),
        (None, Some(reason)) if !reason.is_empty() => format!("[deprecated: {}]", reason),
        _ => "[deprecated]".to_string(),
    }
}

/// Render warnings for stderr
pub fn render_warnings(warnings: &[Warning]) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "{} {} warning(s):\n",
        "!".yellow().bold(),
        warnings.len()
    ));
    for warning in warnings {
        let file = warning.file.as_deref().unwrap_or("<unknown>");
        let location = match warning.line {
            Some(line) => format!("{}:{}", file, line),
            None => file.to_string(),
        };
        output.push_str(&format!(
            "  {} {} - {}\n",
            "-".yellow(),
            location,
            warning.message
        ));
    }
    output
}

#[derive(Facet)]
struct JsonReport {
    classes: Vec<JsonClass>,
    warnings: Vec<Warning>,
}

#[derive(Facet)]
struct JsonClass {
    name: String,
    fqsen: Option<String>,
    short_description: String,
    since: Option<String>,
    deprecated_since: Option<String>,
    deprecated_reason: Option<String>,
    parent_class: Option<String>,
    is_abstract: bool,
    is_final: bool,
    interfaces: Vec<String>,
    traits: Vec<String>,
    subclasses: Vec<String>,
    methods: Vec<String>,
    properties: Vec<String>,
    events: Vec<JsonMember>,
    constants: Vec<JsonMember>,
}

#[derive(Facet)]
struct JsonMember {
    name: String,
    defined_by: String,
    short_description: String,
    value: Option<String>,
}

fn render_json(model: &ApiModel) -> String {
    let report = JsonReport {
        classes: model
            .classes()
            .map(|class| {
                let base = &class.type_doc.base;
                JsonClass {
                    name: class.name().to_string(),
                    fqsen: base.fqsen.clone(),
                    short_description: base.short_description.clone(),
                    since: base.since.clone(),
                    deprecated_since: base.deprecated_since.clone(),
                    deprecated_reason: base.deprecated_reason.clone(),
                    parent_class: class.parent_class.clone(),
                    is_abstract: class.is_abstract,
                    is_final: class.is_final,
                    interfaces: class.interfaces.clone(),
                    traits: class.traits.clone(),
                    subclasses: class.subclasses.clone(),
                    methods: class.type_doc.methods.keys().cloned().collect(),
                    properties: class.type_doc.properties.keys().cloned().collect(),
                    events: class
                        .events
                        .values()
                        .map(|e| JsonMember {
                            name: e.name().to_string(),
                            defined_by: e.defined_by.clone(),
                            short_description: e.base.short_description.clone(),
                            value: e.value.clone(),
                        })
                        .collect(),
                    constants: class
                        .constants
                        .values()
                        .map(|c| JsonMember {
                            name: c.name().to_string(),
                            defined_by: c.defined_by.clone(),
                            short_description: c.base.short_description.clone(),
                            value: c.value.clone(),
                        })
                        .collect(),
                }
            })
            .collect(),
        warnings: model.diagnostics().warnings.clone(),
    };

    facet_json::to_string_pretty(&report).expect("JSON serialization failed")
}

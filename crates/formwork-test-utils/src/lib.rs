//! Testing utilities for formwork workspace
//!
//! Shared fixtures and tracing setup.

#![allow(missing_docs)]

use formwork_field::{
    image_source_rules, FieldDescriptor, FieldId, HeadingElement, ImageElement, NumberField,
    ParagraphElement, TextField,
};
use formwork_rules::RuleSet;
use tracing_subscriber::EnvFilter;

/// Install a fmt subscriber writing through the test harness
///
/// Filter comes from `RUST_LOG`, defaulting to `debug`. Safe to call from
/// every test; only the first call installs.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .with_test_writer()
        .try_init();
}

pub fn id(raw: &str) -> FieldId {
    FieldId::new(raw).unwrap()
}

/// Sample form as JSON: text, number, date, email, select, checkbox
pub fn mock_form_json() -> serde_json::Value {
    serde_json::json!([
        { "id": "1", "type": "text", "label": "Text", "placeholder": "Placeholder", "required": true },
        { "id": "2", "type": "number", "label": "Number", "placeholder": "Placeholder", "required": true },
        { "id": "3", "type": "date", "label": "Date", "placeholder": "Placeholder" },
        { "id": "4", "type": "email", "label": "Email", "placeholder": "Placeholder", "required": true },
        {
            "id": "5", "type": "select", "label": "Select",
            "options": ["Option 1", "Option 2", "Option 3"],
            "defaultOption": "Option 1", "required": true
        },
        { "id": "7", "type": "checkbox", "label": "Checkbox", "checked": false, "required": true }
    ])
}

/// Sample form as descriptors
pub fn mock_form() -> Vec<FieldDescriptor> {
    serde_json::from_value(mock_form_json()).unwrap()
}

pub fn text_field_with_rules(raw_id: &str, rules: RuleSet) -> FieldDescriptor {
    FieldDescriptor::Text(TextField {
        id: id(raw_id),
        label: "Text".to_string(),
        required: true,
        placeholder: String::new(),
        validation: rules,
    })
}

pub fn number_field_with_rules(raw_id: &str, rules: RuleSet) -> FieldDescriptor {
    FieldDescriptor::Number(NumberField {
        id: id(raw_id),
        label: "Number".to_string(),
        required: true,
        placeholder: String::new(),
        validation: rules,
    })
}

pub fn heading(raw_id: &str, text: &str) -> FieldDescriptor {
    FieldDescriptor::Heading(HeadingElement {
        id: id(raw_id),
        text: text.to_string(),
    })
}

pub fn paragraph(raw_id: &str, text: &str) -> FieldDescriptor {
    FieldDescriptor::Paragraph(ParagraphElement {
        id: id(raw_id),
        text: text.to_string(),
    })
}

pub fn image(raw_id: &str, src: &str) -> FieldDescriptor {
    FieldDescriptor::Image(ImageElement {
        id: id(raw_id),
        src: src.to_string(),
        alt: "image".to_string(),
        validation: image_source_rules(),
    })
}

/// Paragraphs with ids `f0..fn`
pub fn paragraphs(n: usize) -> Vec<FieldDescriptor> {
    (0..n).map(|i| paragraph(&format!("f{i}"), "")).collect()
}

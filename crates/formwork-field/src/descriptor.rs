//! Field descriptors
//!
//! [`FieldDescriptor`] is the serializable record of one form field. It
//! serializes with an internal `"type"` tag and camelCase attributes:
//!
//! ```json
//! { "id": "5", "type": "select", "label": "Select", "required": true,
//!   "options": ["Option 1", "Option 2"], "defaultOption": "Option 1" }
//! ```

use formwork_rules::{Rule, RuleSet};
use serde::{Deserialize, Serialize};

use crate::capability::{Labelable, Requireable, Validatable};
use crate::id::FieldId;
use crate::kind::FieldKind;

/// Single-line text input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextField {
    /// Identifier
    pub id: FieldId,
    /// Caption
    #[serde(default)]
    pub label: String,
    /// Value must be supplied
    #[serde(default)]
    pub required: bool,
    /// Hint shown while empty
    #[serde(default)]
    pub placeholder: String,
    /// Rules evaluated on every change
    #[serde(default, skip_serializing_if = "RuleSet::is_empty")]
    pub validation: RuleSet,
}

/// Numeric input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NumberField {
    /// Identifier
    pub id: FieldId,
    /// Caption
    #[serde(default)]
    pub label: String,
    /// Value must be supplied
    #[serde(default)]
    pub required: bool,
    /// Hint shown while empty
    #[serde(default)]
    pub placeholder: String,
    /// Rules evaluated on every change
    #[serde(default, skip_serializing_if = "RuleSet::is_empty")]
    pub validation: RuleSet,
}

/// Date input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateField {
    /// Identifier
    pub id: FieldId,
    /// Caption
    #[serde(default)]
    pub label: String,
    /// Value must be supplied
    #[serde(default)]
    pub required: bool,
    /// Hint shown while empty
    #[serde(default)]
    pub placeholder: String,
}

/// Email input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailField {
    /// Identifier
    pub id: FieldId,
    /// Caption
    #[serde(default)]
    pub label: String,
    /// Value must be supplied
    #[serde(default)]
    pub required: bool,
    /// Hint shown while empty
    #[serde(default)]
    pub placeholder: String,
}

/// Drop-down selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectField {
    /// Identifier
    pub id: FieldId,
    /// Caption
    #[serde(default)]
    pub label: String,
    /// A choice must be made
    #[serde(default)]
    pub required: bool,
    /// Choices, in display order
    #[serde(default)]
    pub options: Vec<String>,
    /// Initially selected choice
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_option: Option<String>,
}

/// Checkbox
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckboxField {
    /// Identifier
    pub id: FieldId,
    /// Caption
    #[serde(default)]
    pub label: String,
    /// Box must be ticked
    #[serde(default)]
    pub required: bool,
    /// Initial state
    #[serde(default)]
    pub checked: bool,
}

/// Static heading
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadingElement {
    /// Identifier
    pub id: FieldId,
    /// Heading text
    #[serde(default)]
    pub text: String,
}

/// Static paragraph
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParagraphElement {
    /// Identifier
    pub id: FieldId,
    /// Paragraph text
    #[serde(default)]
    pub text: String,
}

/// Static image
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageElement {
    /// Identifier
    pub id: FieldId,
    /// Image location
    #[serde(default)]
    pub src: String,
    /// Alternative text
    #[serde(default)]
    pub alt: String,
    /// Source content rules attached at construction
    #[serde(default)]
    pub validation: RuleSet,
}

macro_rules! impl_input_capabilities {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Requireable for $ty {
                fn required(&self) -> bool {
                    self.required
                }
            }

            impl Labelable for $ty {
                fn label(&self) -> &str {
                    &self.label
                }
            }
        )*
    };
}

impl_input_capabilities!(TextField, NumberField, DateField, EmailField, SelectField, CheckboxField);

macro_rules! impl_validatable {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Validatable for $ty {
                fn validation(&self) -> &RuleSet {
                    &self.validation
                }

                fn validation_mut(&mut self) -> &mut [Rule] {
                    self.validation.as_mut_slice()
                }
            }
        )*
    };
}

impl_validatable!(TextField, NumberField, ImageElement);

/// One form field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FieldDescriptor {
    /// Single-line text input
    Text(TextField),
    /// Numeric input
    Number(NumberField),
    /// Date input
    Date(DateField),
    /// Email input
    Email(EmailField),
    /// Drop-down selection
    Select(SelectField),
    /// Checkbox
    Checkbox(CheckboxField),
    /// Static heading
    Heading(HeadingElement),
    /// Static paragraph
    Paragraph(ParagraphElement),
    /// Static image
    Image(ImageElement),
}

impl FieldDescriptor {
    /// Identifier
    #[must_use]
    pub fn id(&self) -> &FieldId {
        match self {
            Self::Text(f) => &f.id,
            Self::Number(f) => &f.id,
            Self::Date(f) => &f.id,
            Self::Email(f) => &f.id,
            Self::Select(f) => &f.id,
            Self::Checkbox(f) => &f.id,
            Self::Heading(f) => &f.id,
            Self::Paragraph(f) => &f.id,
            Self::Image(f) => &f.id,
        }
    }

    /// Discriminant
    #[must_use]
    pub fn kind(&self) -> FieldKind {
        match self {
            Self::Text(_) => FieldKind::Text,
            Self::Number(_) => FieldKind::Number,
            Self::Date(_) => FieldKind::Date,
            Self::Email(_) => FieldKind::Email,
            Self::Select(_) => FieldKind::Select,
            Self::Checkbox(_) => FieldKind::Checkbox,
            Self::Heading(_) => FieldKind::Heading,
            Self::Paragraph(_) => FieldKind::Paragraph,
            Self::Image(_) => FieldKind::Image,
        }
    }

    /// View as [`Requireable`], if the variant carries the flag
    #[must_use]
    pub fn as_requireable(&self) -> Option<&dyn Requireable> {
        match self {
            Self::Text(f) => Some(f),
            Self::Number(f) => Some(f),
            Self::Date(f) => Some(f),
            Self::Email(f) => Some(f),
            Self::Select(f) => Some(f),
            Self::Checkbox(f) => Some(f),
            Self::Heading(_) | Self::Paragraph(_) | Self::Image(_) => None,
        }
    }

    /// View as [`Labelable`], if the variant carries a label
    #[must_use]
    pub fn as_labelable(&self) -> Option<&dyn Labelable> {
        match self {
            Self::Text(f) => Some(f),
            Self::Number(f) => Some(f),
            Self::Date(f) => Some(f),
            Self::Email(f) => Some(f),
            Self::Select(f) => Some(f),
            Self::Checkbox(f) => Some(f),
            Self::Heading(_) | Self::Paragraph(_) | Self::Image(_) => None,
        }
    }

    /// View as [`Validatable`], if the variant carries rules
    #[must_use]
    pub fn as_validatable(&self) -> Option<&dyn Validatable> {
        match self {
            Self::Text(f) => Some(f),
            Self::Number(f) => Some(f),
            Self::Image(f) => Some(f),
            _ => None,
        }
    }

    /// Mutable [`Validatable`] view, for refreshing rule caches
    pub fn as_validatable_mut(&mut self) -> Option<&mut dyn Validatable> {
        match self {
            Self::Text(f) => Some(f),
            Self::Number(f) => Some(f),
            Self::Image(f) => Some(f),
            _ => None,
        }
    }

    /// Has a required flag
    #[inline]
    #[must_use]
    pub fn is_requireable(&self) -> bool {
        self.as_requireable().is_some()
    }

    /// Has a label
    #[inline]
    #[must_use]
    pub fn is_labelable(&self) -> bool {
        self.as_labelable().is_some()
    }

    /// Has validation rules
    #[inline]
    #[must_use]
    pub fn is_validatable(&self) -> bool {
        self.as_validatable().is_some()
    }

    /// Required flag, if the variant has one
    #[inline]
    #[must_use]
    pub fn required(&self) -> Option<bool> {
        self.as_requireable().map(Requireable::required)
    }

    /// Label, if the variant has one
    #[inline]
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.as_labelable().map(Labelable::label)
    }

    /// Validation rules, if the variant has them
    #[inline]
    #[must_use]
    pub fn validation(&self) -> Option<&RuleSet> {
        self.as_validatable().map(Validatable::validation)
    }

    /// Validation rules open for cache refresh, if the variant has them
    #[inline]
    pub fn validation_mut(&mut self) -> Option<&mut [Rule]> {
        self.as_validatable_mut().map(Validatable::validation_mut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use formwork_rules::{NumberOperator, Rule};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn id(s: &str) -> FieldId {
        FieldId::new(s).unwrap()
    }

    fn heading() -> FieldDescriptor {
        FieldDescriptor::Heading(HeadingElement {
            id: id("h"),
            text: "Hello".to_string(),
        })
    }

    fn number() -> FieldDescriptor {
        FieldDescriptor::Number(NumberField {
            id: id("2"),
            label: "Number".to_string(),
            required: true,
            placeholder: "Placeholder".to_string(),
            validation: RuleSet::from(vec![Rule::number(NumberOperator::Gt, 0.0, "positive")]),
        })
    }

    #[test]
    fn heading_has_no_capabilities() {
        let h = heading();
        assert_eq!(h.kind(), FieldKind::Heading);
        assert!(!h.is_requireable());
        assert!(!h.is_labelable());
        assert!(!h.is_validatable());
        assert_eq!(h.required(), None);
        assert_eq!(h.label(), None);
    }

    #[test]
    fn number_has_full_bundle() {
        let n = number();
        assert_eq!(n.required(), Some(true));
        assert_eq!(n.label(), Some("Number"));
        assert_eq!(n.validation().map(RuleSet::len), Some(1));
    }

    #[test]
    fn descriptor_capabilities_agree_with_kind() {
        let samples = [heading(), number()];
        for d in &samples {
            let kind = d.kind();
            assert_eq!(d.is_requireable(), kind.is_requireable());
            assert_eq!(d.is_labelable(), kind.is_labelable());
            assert_eq!(d.is_validatable(), kind.is_validatable());
        }
    }

    #[test]
    fn heading_wire_shape() {
        let json = serde_json::to_value(heading()).unwrap();
        assert_eq!(json, json!({ "id": "h", "type": "heading", "text": "Hello" }));
    }

    #[test]
    fn select_reads_stored_record() {
        let record = json!({
            "id": "5",
            "type": "select",
            "label": "Select",
            "options": ["Option 1", "Option 2", "Option 3"],
            "defaultOption": "Option 1",
            "required": true
        });
        let d: FieldDescriptor = serde_json::from_value(record).unwrap();

        match &d {
            FieldDescriptor::Select(s) => {
                assert_eq!(s.options.len(), 3);
                assert_eq!(s.default_option.as_deref(), Some("Option 1"));
            }
            other => panic!("expected select, got {other:?}"),
        }
        assert_eq!(d.id().as_str(), "5");
    }

    #[test]
    fn unknown_type_rejected() {
        let record = json!({ "id": "9", "type": "radio", "label": "Radio" });
        assert!(serde_json::from_value::<FieldDescriptor>(record).is_err());
    }

    #[test]
    fn validation_mut_refreshes_cache() {
        let mut n = number();
        let rules = n.validation_mut().unwrap();
        assert_eq!(rules.len(), 1);
        for rule in rules {
            rule.revalidate(&formwork_rules::FieldValue::Number(-1.0));
        }
        assert_eq!(n.validation().unwrap().failing_messages(), vec!["positive"]);
        assert_eq!(n.validation().unwrap().len(), 1);
        assert!(heading().clone().validation_mut().is_none());
    }
}

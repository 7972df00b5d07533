//! Descriptor to control mapping

use formwork_field::{
    is_trusted_image_source, FieldDescriptor, TRUSTED_IMAGE_HOME, TRUSTED_IMAGE_HOST,
};
use formwork_rules::{RuleError, RuleSet, ValueKind};

use crate::control::{Control, ControlValue};
use crate::error::RenderError;
use crate::live::LiveControl;

/// Resolves descriptors into live controls
///
/// Image sources are checked against the fixed
/// [`formwork_field::TRUSTED_IMAGE_PREFIX`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Renderer;

impl Renderer {
    /// Create renderer
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Render one descriptor
    ///
    /// The variant is chosen from the descriptor type alone. Images whose
    /// source is outside the trusted prefix become [`Control::ImageNotice`].
    ///
    /// # Errors
    /// Returns [`RenderError::Rule`] if an attached rule compares a kind of
    /// value the control never holds (a number rule on a text field).
    pub fn render(&self, descriptor: &FieldDescriptor) -> Result<LiveControl, RenderError> {
        let id = descriptor.id().clone();

        let live = match descriptor {
            FieldDescriptor::Text(f) => {
                check_rule_kinds(&f.validation, ValueKind::Text)?;
                LiveControl::new(
                    id,
                    Control::Text {
                        label: f.label.clone(),
                        required: f.required,
                        placeholder: f.placeholder.clone(),
                    },
                    ControlValue::Text(String::new()),
                    f.validation.clone(),
                )
            }
            FieldDescriptor::Number(f) => {
                check_rule_kinds(&f.validation, ValueKind::Number)?;
                LiveControl::new(
                    id,
                    Control::Number {
                        label: f.label.clone(),
                        required: f.required,
                        placeholder: f.placeholder.clone(),
                    },
                    ControlValue::Number(0.0),
                    f.validation.clone(),
                )
            }
            FieldDescriptor::Date(f) => LiveControl::new(
                id,
                Control::Date {
                    label: f.label.clone(),
                    required: f.required,
                    placeholder: f.placeholder.clone(),
                },
                ControlValue::Text(String::new()),
                RuleSet::new(),
            ),
            FieldDescriptor::Email(f) => LiveControl::new(
                id,
                Control::Email {
                    label: f.label.clone(),
                    required: f.required,
                    placeholder: f.placeholder.clone(),
                },
                ControlValue::Text(String::new()),
                RuleSet::new(),
            ),
            FieldDescriptor::Select(f) => LiveControl::new(
                id,
                Control::Select {
                    label: f.label.clone(),
                    required: f.required,
                    options: f.options.clone(),
                },
                ControlValue::Choice(f.default_option.clone()),
                RuleSet::new(),
            ),
            FieldDescriptor::Checkbox(f) => LiveControl::new(
                id,
                Control::Checkbox {
                    label: f.label.clone(),
                    required: f.required,
                },
                ControlValue::Checked(f.checked),
                RuleSet::new(),
            ),
            FieldDescriptor::Heading(e) => LiveControl::new(
                id,
                Control::Heading {
                    text: e.text.clone(),
                },
                ControlValue::None,
                RuleSet::new(),
            ),
            FieldDescriptor::Paragraph(e) => LiveControl::new(
                id,
                Control::Paragraph {
                    text: e.text.clone(),
                },
                ControlValue::None,
                RuleSet::new(),
            ),
            FieldDescriptor::Image(e) => {
                let control = if is_trusted_image_source(&e.src) {
                    Control::Image {
                        src: e.src.clone(),
                        alt: e.alt.clone(),
                    }
                } else {
                    tracing::warn!(field = %id, src = %e.src, "Untrusted image source, showing notice");
                    Control::ImageNotice {
                        message: format!(
                            "Unsupported image. Image must be from {TRUSTED_IMAGE_HOST}"
                        ),
                        link: TRUSTED_IMAGE_HOME.to_string(),
                    }
                };
                LiveControl::new(id, control, ControlValue::None, RuleSet::new())
            }
        };

        Ok(live)
    }

    /// Render every descriptor in order
    ///
    /// # Errors
    /// Fails on the first descriptor that [`Renderer::render`] rejects.
    pub fn render_form(&self, fields: &[FieldDescriptor]) -> Result<Vec<LiveControl>, RenderError> {
        fields.iter().map(|f| self.render(f)).collect()
    }
}

/// Render with the default renderer
///
/// # Errors
/// See [`Renderer::render_form`].
pub fn render_form(fields: &[FieldDescriptor]) -> Result<Vec<LiveControl>, RenderError> {
    Renderer::default().render_form(fields)
}

fn check_rule_kinds(rules: &RuleSet, expected: ValueKind) -> Result<(), RuleError> {
    match rules.iter().find(|r| r.value_kind() != expected) {
        Some(rule) => Err(RuleError::ValueKindMismatch {
            expected: rule.value_kind(),
            found: expected,
        }),
        None => Ok(()),
    }
}

//! Field editor state machine
//!
//! ```text
//! Empty --select_type--> TypeSelected --edit--> OptionsFilled --edit--+
//!   ^                         |                      |    ^-----------+
//!   |                         +-------submit---------+
//!   +------------------------ Submitted (reset) <----+
//! ```
//!
//! Changing the type from any state discards every edit made so far.

use formwork_field::{
    image_source_rules, CheckboxField, DateField, EmailField, FieldDescriptor, FieldId,
    FieldKind, HeadingElement, ImageElement, NumberField, ParagraphElement, SelectField,
    TextField,
};
use formwork_rules::{FieldValue, RuleSet};

use crate::config::{EditorConfig, SubmitPolicy};
use crate::error::EditorError;
use crate::options::SelectOptions;

/// Observable editor state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditorPhase {
    /// No type chosen
    Empty,
    /// Type chosen, nothing edited yet
    TypeSelected,
    /// At least one attribute edited
    OptionsFilled,
    /// Descriptor handed off during [`FieldEditor::try_submit`]
    ///
    /// Transient: a successful submit resets to [`EditorPhase::Empty`] and a
    /// failed hand-off restores the previous phase before returning, so
    /// [`FieldEditor::phase`] never reports it to callers.
    Submitted,
}

/// Type-specific input group shown below the shared controls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubEditor {
    /// Nothing beyond label and required
    None,
    /// Placeholder text
    Placeholder,
    /// Heading text
    HeadingText,
    /// Paragraph text
    ParagraphText,
    /// Image source and alternative text
    Image,
    /// Select choice list
    SelectOptions,
}

impl SubEditor {
    /// Sub-editor for `kind`
    #[must_use]
    pub fn for_kind(kind: FieldKind) -> Self {
        match kind {
            FieldKind::Text | FieldKind::Email => Self::Placeholder,
            FieldKind::Heading => Self::HeadingText,
            FieldKind::Paragraph => Self::ParagraphText,
            FieldKind::Image => Self::Image,
            FieldKind::Select => Self::SelectOptions,
            FieldKind::Number | FieldKind::Date | FieldKind::Checkbox => Self::None,
        }
    }
}

/// Builds one [`FieldDescriptor`] from a sequence of edits
#[derive(Debug, Clone)]
pub struct FieldEditor {
    config: EditorConfig,
    kind: Option<FieldKind>,
    phase: EditorPhase,
    label: String,
    required: bool,
    placeholder: String,
    text: String,
    src: String,
    alt: String,
    options: SelectOptions,
    image_rules: RuleSet,
}

impl FieldEditor {
    /// Create editor with default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(EditorConfig::default())
    }

    /// Create editor with `config`
    #[must_use]
    pub fn with_config(config: EditorConfig) -> Self {
        Self {
            config,
            kind: None,
            phase: EditorPhase::Empty,
            label: String::new(),
            required: true,
            placeholder: String::new(),
            text: String::new(),
            src: String::new(),
            alt: String::new(),
            options: SelectOptions::new(),
            image_rules: RuleSet::new(),
        }
    }

    /// Configuration in use
    #[inline]
    #[must_use]
    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Current state
    #[inline]
    #[must_use]
    pub fn phase(&self) -> EditorPhase {
        self.phase
    }

    /// Selected type
    #[inline]
    #[must_use]
    pub fn selected_kind(&self) -> Option<FieldKind> {
        self.kind
    }

    /// Sub-editor for the selected type
    #[must_use]
    pub fn sub_editor(&self) -> Option<SubEditor> {
        self.kind.map(SubEditor::for_kind)
    }

    /// Label input is shown
    #[must_use]
    pub fn shows_label(&self) -> bool {
        self.kind.is_some_and(FieldKind::is_labelable)
    }

    /// "Is required" toggle is shown
    #[must_use]
    pub fn shows_required(&self) -> bool {
        self.kind.is_some_and(FieldKind::is_requireable)
    }

    /// Current label
    #[inline]
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Current required flag
    #[inline]
    #[must_use]
    pub fn required(&self) -> bool {
        self.required
    }

    /// Current placeholder
    #[inline]
    #[must_use]
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Current heading or paragraph text
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Current image source
    #[inline]
    #[must_use]
    pub fn image_src(&self) -> &str {
        &self.src
    }

    /// Current image alternative text
    #[inline]
    #[must_use]
    pub fn image_alt(&self) -> &str {
        &self.alt
    }

    /// Current select choices
    #[inline]
    #[must_use]
    pub fn select_options(&self) -> &SelectOptions {
        &self.options
    }

    /// Choose the field type
    ///
    /// Choosing a different type resets every edit; choosing the current
    /// type again changes nothing.
    pub fn select_type(&mut self, kind: FieldKind) {
        if self.kind == Some(kind) {
            return;
        }

        tracing::debug!(kind = %kind, previous = ?self.kind, "Selecting field type");
        self.reset();
        self.kind = Some(kind);
        self.phase = EditorPhase::TypeSelected;

        if kind == FieldKind::Image {
            self.image_rules = image_source_rules();
            self.image_rules.revalidate(&FieldValue::from(""));
        }
    }

    /// Set the label
    ///
    /// # Errors
    /// [`EditorError::NoTypeSelected`], or [`EditorError::NotApplicable`] for
    /// static elements.
    pub fn set_label(&mut self, label: impl Into<String>) -> Result<(), EditorError> {
        self.require(FieldKind::is_labelable, "label")?;
        self.label = label.into();
        self.mark_filled();
        Ok(())
    }

    /// Set the required flag
    ///
    /// # Errors
    /// [`EditorError::NoTypeSelected`], or [`EditorError::NotApplicable`] for
    /// static elements.
    pub fn set_required(&mut self, required: bool) -> Result<(), EditorError> {
        self.require(FieldKind::is_requireable, "required")?;
        self.required = required;
        self.mark_filled();
        Ok(())
    }

    /// Set the placeholder (text and email)
    ///
    /// # Errors
    /// [`EditorError::NoTypeSelected`] or [`EditorError::NotApplicable`].
    pub fn set_placeholder(&mut self, placeholder: impl Into<String>) -> Result<(), EditorError> {
        self.require_sub_editor(|s| s == SubEditor::Placeholder, "placeholder")?;
        self.placeholder = placeholder.into();
        self.mark_filled();
        Ok(())
    }

    /// Set heading or paragraph text
    ///
    /// # Errors
    /// [`EditorError::NoTypeSelected`] or [`EditorError::NotApplicable`].
    pub fn set_text(&mut self, text: impl Into<String>) -> Result<(), EditorError> {
        self.require_sub_editor(
            |s| matches!(s, SubEditor::HeadingText | SubEditor::ParagraphText),
            "text",
        )?;
        self.text = text.into();
        self.mark_filled();
        Ok(())
    }

    /// Set the image source and re-check the source rules
    ///
    /// # Errors
    /// [`EditorError::NoTypeSelected`] or [`EditorError::NotApplicable`].
    pub fn set_image_src(&mut self, src: impl Into<String>) -> Result<(), EditorError> {
        self.require_sub_editor(|s| s == SubEditor::Image, "src")?;
        self.src = src.into();
        self.image_rules
            .revalidate(&FieldValue::Text(self.src.clone()));
        self.mark_filled();
        Ok(())
    }

    /// Set the image alternative text
    ///
    /// # Errors
    /// [`EditorError::NoTypeSelected`] or [`EditorError::NotApplicable`].
    pub fn set_image_alt(&mut self, alt: impl Into<String>) -> Result<(), EditorError> {
        self.require_sub_editor(|s| s == SubEditor::Image, "alt")?;
        self.alt = alt.into();
        self.mark_filled();
        Ok(())
    }

    /// Append a blank select choice, returning its id
    ///
    /// # Errors
    /// [`EditorError::NoTypeSelected`] or [`EditorError::NotApplicable`].
    pub fn push_option(&mut self) -> Result<usize, EditorError> {
        self.require_sub_editor(|s| s == SubEditor::SelectOptions, "options")?;
        self.mark_filled();
        Ok(self.options.push_blank())
    }

    /// Remove the last select choice
    ///
    /// # Errors
    /// [`EditorError::NoTypeSelected`] or [`EditorError::NotApplicable`].
    pub fn truncate_option(&mut self) -> Result<(), EditorError> {
        self.require_sub_editor(|s| s == SubEditor::SelectOptions, "options")?;
        self.options.truncate_last();
        self.mark_filled();
        Ok(())
    }

    /// Edit the select choice with `id`
    ///
    /// # Errors
    /// [`EditorError::NoTypeSelected`], [`EditorError::NotApplicable`] or
    /// [`EditorError::UnknownOption`].
    pub fn set_option(&mut self, id: usize, value: impl Into<String>) -> Result<(), EditorError> {
        self.require_sub_editor(|s| s == SubEditor::SelectOptions, "options")?;
        self.options.set_option(id, value)?;
        self.mark_filled();
        Ok(())
    }

    /// Messages of the attached rules currently failing
    #[must_use]
    pub fn failing_messages(&self) -> Vec<String> {
        self.image_rules
            .failing_messages()
            .into_iter()
            .map(str::to_owned)
            .collect()
    }

    /// Submission would succeed under the configured policy
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.kind.is_some()
            && (self.config.submit_policy == SubmitPolicy::Unconditional
                || self.image_rules.is_satisfied())
    }

    /// Assemble the descriptor for the current edits without submitting
    ///
    /// Every call produces a fresh id.
    ///
    /// # Errors
    /// Returns [`EditorError::NoTypeSelected`] before a type is chosen.
    pub fn build(&self) -> Result<FieldDescriptor, EditorError> {
        let kind = self.kind.ok_or(EditorError::NoTypeSelected)?;
        let id = FieldId::generate();
        let label = self.label.clone();
        let required = self.required;

        let descriptor = match kind {
            FieldKind::Text => FieldDescriptor::Text(TextField {
                id,
                label,
                required,
                placeholder: self.placeholder.clone(),
                validation: RuleSet::new(),
            }),
            FieldKind::Number => FieldDescriptor::Number(NumberField {
                id,
                label,
                required,
                placeholder: self.placeholder.clone(),
                validation: RuleSet::new(),
            }),
            FieldKind::Date => FieldDescriptor::Date(DateField {
                id,
                label,
                required,
                placeholder: self.placeholder.clone(),
            }),
            FieldKind::Email => FieldDescriptor::Email(EmailField {
                id,
                label,
                required,
                placeholder: self.placeholder.clone(),
            }),
            FieldKind::Select => FieldDescriptor::Select(SelectField {
                id,
                label,
                required,
                options: self.options.values(),
                default_option: None,
            }),
            FieldKind::Checkbox => FieldDescriptor::Checkbox(CheckboxField {
                id,
                label,
                required,
                checked: false,
            }),
            FieldKind::Heading => FieldDescriptor::Heading(HeadingElement {
                id,
                text: self.text.clone(),
            }),
            FieldKind::Paragraph => FieldDescriptor::Paragraph(ParagraphElement {
                id,
                text: self.text.clone(),
            }),
            FieldKind::Image => FieldDescriptor::Image(ImageElement {
                id,
                src: self.src.clone(),
                alt: self.alt.clone(),
                validation: image_source_rules(),
            }),
        };

        Ok(descriptor)
    }

    /// Build the descriptor, hand it to `emit`, and reset
    ///
    /// Returns the id of the emitted descriptor.
    ///
    /// # Errors
    /// - [`EditorError::NoTypeSelected`] before a type is chosen
    /// - [`EditorError::RulesFailing`] under [`SubmitPolicy::BlockOnInvalidRules`]
    ///   while an attached rule fails; edits are kept
    pub fn submit(&mut self, emit: impl FnOnce(FieldDescriptor)) -> Result<FieldId, EditorError> {
        self.try_submit(|descriptor| {
            emit(descriptor);
            Ok::<(), EditorError>(())
        })
    }

    /// Like [`FieldEditor::submit`], but `emit` may refuse the descriptor
    ///
    /// The editor resets only when `emit` succeeds; on refusal every edit is
    /// kept and the error is returned unchanged.
    ///
    /// # Errors
    /// The editor errors of [`FieldEditor::submit`], or the error from `emit`.
    pub fn try_submit<E>(
        &mut self,
        emit: impl FnOnce(FieldDescriptor) -> Result<(), E>,
    ) -> Result<FieldId, E>
    where
        E: From<EditorError>,
    {
        if self.config.submit_policy == SubmitPolicy::BlockOnInvalidRules
            && !self.image_rules.is_satisfied()
        {
            let messages = self.failing_messages();
            tracing::warn!(?messages, "Submission blocked by failing rules");
            return Err(EditorError::RulesFailing { messages }.into());
        }

        let descriptor = self.build()?;
        let id = descriptor.id().clone();
        let kind = descriptor.kind();

        let previous = std::mem::replace(&mut self.phase, EditorPhase::Submitted);
        if let Err(e) = emit(descriptor) {
            tracing::warn!(field = %id, kind = %kind, "Submitted field was refused");
            self.phase = previous;
            return Err(e);
        }

        tracing::info!(field = %id, kind = %kind, "Field submitted");
        self.reset();
        Ok(id)
    }

    /// Discard every edit and return to [`EditorPhase::Empty`]
    pub fn reset(&mut self) {
        let config = std::mem::take(&mut self.config);
        *self = Self::with_config(config);
    }

    fn mark_filled(&mut self) {
        self.phase = EditorPhase::OptionsFilled;
    }

    fn require(
        &self,
        applies: impl FnOnce(FieldKind) -> bool,
        attribute: &'static str,
    ) -> Result<(), EditorError> {
        let kind = self.kind.ok_or(EditorError::NoTypeSelected)?;
        if applies(kind) {
            Ok(())
        } else {
            Err(EditorError::NotApplicable { kind, attribute })
        }
    }

    fn require_sub_editor(
        &self,
        applies: impl FnOnce(SubEditor) -> bool,
        attribute: &'static str,
    ) -> Result<(), EditorError> {
        self.require(|kind| applies(SubEditor::for_kind(kind)), attribute)
    }
}

impl Default for FieldEditor {
    fn default() -> Self {
        Self::new()
    }
}

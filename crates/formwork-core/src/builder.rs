//! Form builder facade
//!
//! [`FormBuilder`] is the single owner of the assembled form. UI layers hold
//! a `&mut FormBuilder` while handling one event and read back through
//! shared references; nothing else mutates the list.

use formwork_editor::{EditorError, FieldEditor};
use formwork_field::{FieldDescriptor, FieldId};
use formwork_list::{DragSession, FieldStore, OrderedFieldList};
use formwork_render::{LiveControl, Renderer};

use crate::config::FormBuilderConfig;
use crate::error::{FormError, Result};

/// Owns the field list together with the editor and drag state acting on it
#[derive(Debug, Clone)]
pub struct FormBuilder {
    config: FormBuilderConfig,
    fields: OrderedFieldList,
    editor: FieldEditor,
    drag: DragSession,
}

impl FormBuilder {
    /// Create an empty form with default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(FormBuilderConfig::default())
    }

    /// Create an empty form with `config`
    #[must_use]
    pub fn with_config(config: FormBuilderConfig) -> Self {
        tracing::info!(
            policy = ?config.submit_policy,
            max_fields = ?config.max_fields,
            "Creating form builder"
        );
        Self {
            editor: FieldEditor::with_config(config.editor_config()),
            fields: OrderedFieldList::new(),
            drag: DragSession::new(),
            config,
        }
    }

    /// Configuration in use
    #[inline]
    #[must_use]
    pub fn config(&self) -> &FormBuilderConfig {
        &self.config
    }

    /// The assembled form
    #[inline]
    #[must_use]
    pub fn fields(&self) -> &OrderedFieldList {
        &self.fields
    }

    /// Field editor
    #[inline]
    #[must_use]
    pub fn editor(&self) -> &FieldEditor {
        &self.editor
    }

    /// Field editor, for applying edits
    #[inline]
    pub fn editor_mut(&mut self) -> &mut FieldEditor {
        &mut self.editor
    }

    /// Drag state
    #[inline]
    #[must_use]
    pub fn drag(&self) -> &DragSession {
        &self.drag
    }

    /// Submit the editor and append the new field
    ///
    /// The editor resets only once the field is in the list; any failure
    /// leaves both the editor and the list as they were.
    ///
    /// # Errors
    /// - [`FormError::Editor`] when no type is selected or the editor refuses
    ///   to submit
    /// - [`FormError::CapacityExceeded`] when the form is full
    /// - [`FormError::List`] if the list rejects the new field
    pub fn submit(&mut self) -> Result<FieldId> {
        if self.editor.selected_kind().is_none() {
            return Err(EditorError::NoTypeSelected.into());
        }
        self.check_capacity(self.fields.len() + 1)?;

        let fields = &mut self.fields;
        self.editor
            .try_submit(|descriptor| fields.append(descriptor).map_err(FormError::from))
    }

    /// Append a ready-made descriptor
    ///
    /// # Errors
    /// [`FormError::CapacityExceeded`] or [`FormError::List`] on a duplicate id.
    pub fn add_field(&mut self, descriptor: FieldDescriptor) -> Result<()> {
        self.check_capacity(self.fields.len() + 1)?;
        self.fields.append(descriptor)?;
        Ok(())
    }

    /// Move the field at `from` to `to`; `false` if either is out of range
    pub fn reorder(&mut self, from: usize, to: usize) -> bool {
        self.fields.reorder(from, to)
    }

    /// Remove the field with `id`
    pub fn remove_by_id(&mut self, id: &FieldId) -> Option<FieldDescriptor> {
        self.fields.remove_by_id(id)
    }

    /// Drag started on the field at `index`
    pub fn drag_start(&mut self, index: usize) {
        self.drag.start(index);
    }

    /// Drag passed over the field at `index`
    pub fn drag_enter(&mut self, index: usize) {
        self.drag.enter(index);
    }

    /// Drag released over the list
    pub fn drop_on_list(&mut self) -> bool {
        self.drag.drop_on(&mut self.fields)
    }

    /// Drag released on the delete zone
    pub fn drop_on_delete_zone(&mut self, id: &FieldId) -> Option<FieldDescriptor> {
        self.drag.drop_on_delete_zone(&mut self.fields, id)
    }

    /// Render the form in order
    ///
    /// # Errors
    /// Returns [`FormError::Render`] for a descriptor with mismatched rules.
    pub fn render(&self) -> Result<Vec<LiveControl>> {
        let controls = Renderer::new().render_form(&self.fields.to_vec())?;
        Ok(controls)
    }

    /// Replace the form with the content of `store`
    ///
    /// # Errors
    /// [`FormError::CapacityExceeded`] or [`FormError::List`] on duplicate
    /// ids; the form is left unchanged.
    pub fn load_from(&mut self, store: &impl FieldStore) -> Result<()> {
        let fields = store.read();
        self.check_capacity(fields.len())?;
        self.fields.replace_all(fields)?;
        tracing::info!(count = self.fields.len(), "Loaded form from store");
        Ok(())
    }

    /// Publish the form to `store`
    pub fn publish_to(&self, store: &mut impl FieldStore) {
        store.write(self.fields.to_vec());
        tracing::debug!(count = self.fields.len(), "Published form to store");
    }

    fn check_capacity(&self, wanted: usize) -> Result<()> {
        match self.config.max_fields {
            Some(max) if wanted > max => {
                tracing::warn!(max, wanted, "Field limit reached");
                Err(FormError::CapacityExceeded { max })
            }
            _ => Ok(()),
        }
    }
}

impl Default for FormBuilder {
    fn default() -> Self {
        Self::new()
    }
}

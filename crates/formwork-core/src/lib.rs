//! Formwork Core - dynamic form builder
//!
//! Assembles a form from typed field descriptors at runtime:
//! - A [`FieldEditor`] builds one descriptor at a time from user edits
//! - Submitted descriptors are appended to an [`OrderedFieldList`]
//! - Drag gestures reorder the list or drop fields on a delete zone
//! - The [`Renderer`] turns the list into live controls with rule feedback
//!
//! [`FormBuilder`] owns all of it; every mutation goes through `&mut self`.
//!
//! # Example
//!
//! ```rust
//! use formwork_core::prelude::*;
//!
//! let mut form = FormBuilder::new();
//!
//! form.editor_mut().select_type(FieldKind::Heading);
//! form.editor_mut().set_text("Hello").unwrap();
//! form.submit().unwrap();
//!
//! form.editor_mut().select_type(FieldKind::Number);
//! form.editor_mut().set_label("Age").unwrap();
//! form.submit().unwrap();
//!
//! assert!(form.reorder(0, 1));
//! let controls = form.render().unwrap();
//! assert_eq!(controls[0].control().label(), Some("Age"));
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod builder;
pub mod config;
pub mod error;

// Re-exports for convenience
pub use builder::FormBuilder;
pub use config::FormBuilderConfig;
pub use error::{FormError, Result};

pub use formwork_editor::{EditorConfig, EditorError, EditorPhase, FieldEditor, SubEditor, SubmitPolicy};
pub use formwork_field::{FieldDescriptor, FieldError, FieldId, FieldKind};
pub use formwork_list::{DragSession, FieldStore, InMemoryStore, ListError, OrderedFieldList};
pub use formwork_render::{Control, ControlValue, LiveControl, RenderError, Renderer};
pub use formwork_rules::{FieldValue, Rule, RuleError, RuleSet};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for building forms
    pub use crate::{
        Control, FieldDescriptor, FieldId, FieldKind, FieldStore, FormBuilder, FormBuilderConfig,
        FormError, InMemoryStore, SubmitPolicy,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//! Formwork Field Editor
//!
//! Turns a sequence of user edits into one immutable
//! [`FieldDescriptor`](formwork_field::FieldDescriptor).
//!
//! # Overview
//!
//! The editor is a small state machine. A type is chosen first; that choice
//! decides which shared controls (label, "is required") and which
//! type-specific [`SubEditor`] are available. Edits are collected until
//! [`FieldEditor::submit`] assembles the descriptor with a fresh id, hands it
//! to the caller, and resets.
//!
//! Image descriptors always carry the trusted-source rule pair. Whether a
//! failing pair blocks submission is decided by [`SubmitPolicy`].
//!
//! # Example
//!
//! ```rust
//! use formwork_editor::FieldEditor;
//! use formwork_field::FieldKind;
//!
//! let mut editor = FieldEditor::new();
//! editor.select_type(FieldKind::Text);
//! editor.set_label("Name").unwrap();
//! editor.set_placeholder("Jane Doe").unwrap();
//!
//! let mut form = Vec::new();
//! editor.submit(|field| form.push(field)).unwrap();
//!
//! assert_eq!(form[0].label(), Some("Name"));
//! assert!(editor.selected_kind().is_none());
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod config;
mod editor;
mod error;
mod options;

// Re-exports
pub use config::{EditorConfig, SubmitPolicy};
pub use editor::{EditorPhase, FieldEditor, SubEditor};
pub use error::EditorError;
pub use options::{SelectOption, SelectOptions};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

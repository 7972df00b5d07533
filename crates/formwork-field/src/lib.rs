//! Formwork Field Model
//!
//! The closed set of form field variants and the capabilities each carries.
//!
//! # Overview
//!
//! - **FieldDescriptor**: tagged union over the nine field variants
//! - **FieldKind**: the bare discriminant, used before a descriptor exists
//! - **FieldId**: unique identifier generated at creation
//! - **Requireable / Labelable / Validatable**: fixed capability bundle per variant
//!
//! # Example
//!
//! ```rust
//! use formwork_field::{FieldDescriptor, FieldId, FieldKind, HeadingElement};
//!
//! let heading = FieldDescriptor::Heading(HeadingElement {
//!     id: FieldId::generate(),
//!     text: "Hello".to_string(),
//! });
//!
//! assert_eq!(heading.kind(), FieldKind::Heading);
//! assert!(!heading.is_labelable());
//! assert!(heading.label().is_none());
//! ```

#![warn(missing_docs)]

pub mod capability;
pub mod descriptor;
pub mod id;
pub mod image;
pub mod kind;

// Re-exports
pub use capability::{Labelable, Requireable, Validatable};
pub use descriptor::{
    CheckboxField, DateField, EmailField, FieldDescriptor, HeadingElement, ImageElement,
    NumberField, ParagraphElement, SelectField, TextField,
};
pub use id::FieldId;
pub use image::{
    image_source_rules, is_trusted_image_source, TRUSTED_IMAGE_HOME, TRUSTED_IMAGE_HOST,
    TRUSTED_IMAGE_PREFIX,
};
pub use kind::FieldKind;

/// Field model errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    /// Name does not denote one of the nine field kinds
    #[error("unknown field kind: {0}")]
    UnknownFieldKind(String),

    /// Identifier is empty or malformed
    #[error("invalid field id: {0:?}")]
    InvalidFieldId(String),
}

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with field descriptors
    pub use crate::{
        FieldDescriptor, FieldError, FieldId, FieldKind, Labelable, Requireable, Validatable,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

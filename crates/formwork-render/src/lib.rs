//! Formwork Field Renderer
//!
//! Maps each [`FieldDescriptor`](formwork_field::FieldDescriptor) to a
//! [`LiveControl`]: the render variant chosen from the descriptor type, the
//! control's local state, and the attached rules with their latest results.
//!
//! Images outside the trusted host are never rendered as loadable images;
//! they degrade to [`Control::ImageNotice`].
//!
//! # Example
//!
//! ```rust
//! use formwork_field::{FieldDescriptor, FieldId, ImageElement, image_source_rules};
//! use formwork_render::{Control, Renderer};
//!
//! let image = FieldDescriptor::Image(ImageElement {
//!     id: FieldId::generate(),
//!     src: "http://example.com/cat.png".into(),
//!     alt: "cat".into(),
//!     validation: image_source_rules(),
//! });
//!
//! let live = Renderer::new().render(&image).unwrap();
//! assert!(matches!(live.control(), Control::ImageNotice { .. }));
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod control;
mod error;
mod live;
mod renderer;

// Re-exports
pub use control::{Control, ControlValue};
pub use error::RenderError;
pub use live::LiveControl;
pub use renderer::{render_form, Renderer};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//! Formwork Ordered Field List
//!
//! The assembled form: an ordered sequence of field descriptors with unique
//! ids, mutated only by append, reorder and remove.
//!
//! # Core Concepts
//!
//! - [`OrderedFieldList`]: the sequence, owned by exactly one writer
//! - [`DragSession`]: turns drag start/enter/drop gestures into list mutations
//! - [`FieldStore`]: read/write seam to an outer store layer
//! - [`SharedFieldList`]: mutex-guarded handle for multi-threaded hosts
//!
//! # Example
//!
//! ```rust
//! use formwork_field::{FieldDescriptor, FieldId, HeadingElement};
//! use formwork_list::OrderedFieldList;
//!
//! let heading = |text: &str| FieldDescriptor::Heading(HeadingElement {
//!     id: FieldId::generate(),
//!     text: text.to_string(),
//! });
//!
//! let mut list = OrderedFieldList::new();
//! list.append(heading("a")).unwrap();
//! list.append(heading("b")).unwrap();
//!
//! assert!(list.reorder(0, 1));
//! assert!(!list.reorder(0, 7)); // out of range: no-op
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod drag;
mod list;
mod shared;
mod store;

// Re-exports
pub use drag::DragSession;
pub use list::{ListError, OrderedFieldList};
pub use shared::SharedFieldList;
pub use store::{FieldStore, InMemoryStore};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//! Mutex-guarded list handle
//!
//! For hosts that deliver UI events on more than one thread. All mutations
//! go through one lock, so there is still exactly one writer at a time.

use std::sync::Arc;

use formwork_field::{FieldDescriptor, FieldId};
use parking_lot::Mutex;

use crate::list::{ListError, OrderedFieldList};

/// Cloneable handle to a single guarded [`OrderedFieldList`]
#[derive(Debug, Clone, Default)]
pub struct SharedFieldList {
    inner: Arc<Mutex<OrderedFieldList>>,
}

impl SharedFieldList {
    /// Wrap a list
    #[inline]
    #[must_use]
    pub fn new(list: OrderedFieldList) -> Self {
        Self {
            inner: Arc::new(Mutex::new(list)),
        }
    }

    /// See [`OrderedFieldList::append`]
    ///
    /// # Errors
    /// Returns [`ListError::DuplicateId`] if the id is already present.
    pub fn append(&self, descriptor: FieldDescriptor) -> Result<(), ListError> {
        self.inner.lock().append(descriptor)
    }

    /// See [`OrderedFieldList::reorder`]
    pub fn reorder(&self, from: usize, to: usize) -> bool {
        self.inner.lock().reorder(from, to)
    }

    /// See [`OrderedFieldList::remove_by_id`]
    pub fn remove_by_id(&self, id: &FieldId) -> Option<FieldDescriptor> {
        self.inner.lock().remove_by_id(id)
    }

    /// Run `f` with the lock held
    pub fn with<R>(&self, f: impl FnOnce(&mut OrderedFieldList) -> R) -> R {
        f(&mut self.inner.lock())
    }

    /// Copy of the current sequence
    #[must_use]
    pub fn snapshot(&self) -> Vec<FieldDescriptor> {
        self.inner.lock().to_vec()
    }

    /// Number of descriptors
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// Check if empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }
}

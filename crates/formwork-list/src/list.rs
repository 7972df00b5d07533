//! Ordered field list

use formwork_field::{FieldDescriptor, FieldId};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Ordered sequence of field descriptors
///
/// # Invariants
/// - ids are unique within the list
/// - order is insertion order except where explicitly reordered
/// - descriptors are only handed out by shared reference
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(into = "Vec<FieldDescriptor>", try_from = "Vec<FieldDescriptor>")]
pub struct OrderedFieldList {
    fields: IndexMap<FieldId, FieldDescriptor>,
}

impl OrderedFieldList {
    /// Create empty list
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            fields: IndexMap::new(),
        }
    }

    /// Add a descriptor at the tail
    ///
    /// # Errors
    /// Returns [`ListError::DuplicateId`] if a descriptor with the same id is
    /// already present; the list is left unchanged.
    pub fn append(&mut self, descriptor: FieldDescriptor) -> Result<(), ListError> {
        let id = descriptor.id().clone();
        if self.fields.contains_key(&id) {
            return Err(ListError::DuplicateId(id));
        }

        tracing::debug!(field = %id, kind = %descriptor.kind(), "Appending field");
        self.fields.insert(id, descriptor);
        Ok(())
    }

    /// Move the element at `from` to position `to`
    ///
    /// The element is removed and reinserted, shifting everything in between.
    /// Returns `false` without touching the list if either index is out of
    /// range; drag gestures never produce such indices.
    pub fn reorder(&mut self, from: usize, to: usize) -> bool {
        let len = self.fields.len();
        if from >= len || to >= len {
            tracing::debug!(from, to, len, "Ignoring out-of-range reorder");
            return false;
        }

        if from != to {
            self.fields.move_index(from, to);
            tracing::debug!(from, to, "Reordered field");
        }
        true
    }

    /// Remove the descriptor with `id`
    ///
    /// Returns the removed descriptor, or `None` (list unchanged) if absent.
    pub fn remove_by_id(&mut self, id: &FieldId) -> Option<FieldDescriptor> {
        let removed = self.fields.shift_remove(id);
        if removed.is_some() {
            tracing::debug!(field = %id, "Removed field");
        }
        removed
    }

    /// Replace the whole content, keeping the given order
    ///
    /// # Errors
    /// Returns [`ListError::DuplicateId`] if `fields` repeats an id; the list
    /// is left unchanged.
    pub fn replace_all(&mut self, fields: Vec<FieldDescriptor>) -> Result<(), ListError> {
        *self = Self::try_from(fields)?;
        Ok(())
    }

    /// Number of descriptors
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if the list is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Descriptor at `index`
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&FieldDescriptor> {
        self.fields.get_index(index).map(|(_, d)| d)
    }

    /// Descriptor with `id`
    #[inline]
    #[must_use]
    pub fn get_by_id(&self, id: &FieldId) -> Option<&FieldDescriptor> {
        self.fields.get(id)
    }

    /// Current position of `id`
    #[inline]
    #[must_use]
    pub fn position(&self, id: &FieldId) -> Option<usize> {
        self.fields.get_index_of(id)
    }

    /// Check if `id` is present
    #[inline]
    #[must_use]
    pub fn contains(&self, id: &FieldId) -> bool {
        self.fields.contains_key(id)
    }

    /// Iterate descriptors in order
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.fields.values()
    }

    /// Ids in order
    #[inline]
    pub fn ids(&self) -> impl Iterator<Item = &FieldId> {
        self.fields.keys()
    }

    /// Copy of the sequence
    #[must_use]
    pub fn to_vec(&self) -> Vec<FieldDescriptor> {
        self.fields.values().cloned().collect()
    }
}

// IndexMap equality ignores order
impl PartialEq for OrderedFieldList {
    fn eq(&self, other: &Self) -> bool {
        self.fields.iter().eq(other.fields.iter())
    }
}

impl TryFrom<Vec<FieldDescriptor>> for OrderedFieldList {
    type Error = ListError;

    fn try_from(fields: Vec<FieldDescriptor>) -> Result<Self, Self::Error> {
        let mut list = Self::new();
        for descriptor in fields {
            list.append(descriptor)?;
        }
        Ok(list)
    }
}

impl From<OrderedFieldList> for Vec<FieldDescriptor> {
    fn from(list: OrderedFieldList) -> Self {
        list.fields.into_values().collect()
    }
}

impl<'a> IntoIterator for &'a OrderedFieldList {
    type Item = &'a FieldDescriptor;
    type IntoIter = indexmap::map::Values<'a, FieldId, FieldDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.values()
    }
}

/// Ordered list errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ListError {
    /// A descriptor with this id is already in the list
    #[error("duplicate field id: {0}")]
    DuplicateId(FieldId),
}

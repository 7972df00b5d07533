//! Store seam
//!
//! The list reads its initial content from, and publishes new content to, an
//! outer store layer. Only an in-memory store ships here.

use formwork_field::FieldDescriptor;

/// Minimal store contract used by the field list
pub trait FieldStore {
    /// Current content
    fn read(&self) -> Vec<FieldDescriptor>;

    /// Publish new content
    fn write(&mut self, fields: Vec<FieldDescriptor>);
}

/// Store that keeps the last published content in memory
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InMemoryStore {
    fields: Vec<FieldDescriptor>,
    writes: usize,
}

impl InMemoryStore {
    /// Create empty store
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create store holding `fields`
    #[inline]
    #[must_use]
    pub fn with_fields(fields: Vec<FieldDescriptor>) -> Self {
        Self { fields, writes: 0 }
    }

    /// Number of writes received
    #[inline]
    #[must_use]
    pub fn write_count(&self) -> usize {
        self.writes
    }
}

impl FieldStore for InMemoryStore {
    fn read(&self) -> Vec<FieldDescriptor> {
        self.fields.clone()
    }

    fn write(&mut self, fields: Vec<FieldDescriptor>) {
        self.fields = fields;
        self.writes += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use formwork_field::{FieldId, ParagraphElement};

    #[test]
    fn write_then_read() {
        let mut store = InMemoryStore::new();
        assert!(store.read().is_empty());

        let field = FieldDescriptor::Paragraph(ParagraphElement {
            id: FieldId::generate(),
            text: "body".to_string(),
        });
        store.write(vec![field.clone()]);

        assert_eq!(store.read(), vec![field]);
        assert_eq!(store.write_count(), 1);
    }
}

//! Select option list sub-editor

use serde::{Deserialize, Serialize};

use crate::error::EditorError;

/// One editable choice
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    /// Positional identifier, 1-based
    pub id: usize,
    /// Choice text
    pub value: String,
}

/// Variable-length list of select choices
///
/// Starts with one blank choice. Identity is positional: a new choice gets
/// `len + 1`, and only the tail can be removed, so ids stay `1..=len`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOptions {
    options: Vec<SelectOption>,
}

impl SelectOptions {
    /// One blank choice
    #[must_use]
    pub fn new() -> Self {
        Self {
            options: vec![SelectOption {
                id: 1,
                value: String::new(),
            }],
        }
    }

    /// Append a blank choice, returning its id
    pub fn push_blank(&mut self) -> usize {
        let id = self.options.len() + 1;
        self.options.push(SelectOption {
            id,
            value: String::new(),
        });
        id
    }

    /// Remove the last choice
    pub fn truncate_last(&mut self) -> Option<SelectOption> {
        self.options.pop()
    }

    /// Edit the choice with `id`
    ///
    /// # Errors
    /// Returns [`EditorError::UnknownOption`] if no choice has this id.
    pub fn set_option(&mut self, id: usize, value: impl Into<String>) -> Result<(), EditorError> {
        let option = self
            .options
            .iter_mut()
            .find(|o| o.id == id)
            .ok_or(EditorError::UnknownOption(id))?;
        option.value = value.into();
        Ok(())
    }

    /// Choices in order
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[SelectOption] {
        &self.options
    }

    /// Choice texts in order
    #[must_use]
    pub fn values(&self) -> Vec<String> {
        self.options.iter().map(|o| o.value.clone()).collect()
    }

    /// Number of choices
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Check if every choice was removed
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

impl Default for SelectOptions {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn starts_with_one_blank() {
        let options = SelectOptions::new();
        assert_eq!(options.values(), vec![String::new()]);
        assert_eq!(options.as_slice()[0].id, 1);
    }

    #[test]
    fn push_edit_truncate() {
        let mut options = SelectOptions::new();
        assert_eq!(options.push_blank(), 2);
        assert_eq!(options.push_blank(), 3);

        options.set_option(1, "Red").unwrap();
        options.set_option(2, "Green").unwrap();
        options.set_option(3, "Blue").unwrap();
        assert_eq!(options.values(), vec!["Red", "Green", "Blue"]);

        let removed = options.truncate_last().unwrap();
        assert_eq!(removed.value, "Blue");
        assert_eq!(options.values(), vec!["Red", "Green"]);

        // Freed id is handed out again
        assert_eq!(options.push_blank(), 3);
    }

    #[test]
    fn unknown_id_rejected() {
        let mut options = SelectOptions::new();
        assert_eq!(
            options.set_option(2, "x"),
            Err(EditorError::UnknownOption(2))
        );
        options.truncate_last();
        assert!(options.is_empty());
        assert_eq!(
            options.set_option(1, "x"),
            Err(EditorError::UnknownOption(1))
        );
    }

    proptest! {
        #[test]
        fn ids_stay_positional(ops in prop::collection::vec(any::<bool>(), 0..40)) {
            let mut options = SelectOptions::new();
            for push in ops {
                if push {
                    options.push_blank();
                } else {
                    options.truncate_last();
                }
                let ids: Vec<_> = options.as_slice().iter().map(|o| o.id).collect();
                let expected: Vec<_> = (1..=options.len()).collect();
                prop_assert_eq!(ids, expected);
            }
        }
    }
}

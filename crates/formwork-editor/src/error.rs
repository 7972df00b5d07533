//! Editor error types

use formwork_field::FieldKind;

/// Field editor errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EditorError {
    /// Edit or submit before a field type was chosen
    #[error("no field type selected")]
    NoTypeSelected,

    /// The selected field type has no such attribute
    #[error("{kind} fields have no {attribute}")]
    NotApplicable {
        /// Selected type
        kind: FieldKind,
        /// Attribute that was edited
        attribute: &'static str,
    },

    /// Select option id not present
    #[error("unknown select option: {0}")]
    UnknownOption(usize),

    /// Submission refused while attached rules fail
    #[error("field rules failing: {}", messages.join("; "))]
    RulesFailing {
        /// Messages of the failing rules
        messages: Vec<String>,
    },
}

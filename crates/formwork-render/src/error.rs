//! Renderer error types

use formwork_field::FieldKind;
use formwork_rules::RuleError;

/// Renderer errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    /// Attached rule cannot be evaluated against this control's values
    #[error("rule error: {0}")]
    Rule(#[from] RuleError),

    /// Selected value is not one of the choices
    #[error("unknown select option: {0:?}")]
    UnknownOption(String),

    /// Static element takes no input
    #[error("{0} elements take no input")]
    ReadOnly(FieldKind),

    /// Input not meaningful for this control
    #[error("invalid input for {kind} control: {raw:?}")]
    InvalidInput {
        /// Control kind
        kind: FieldKind,
        /// Raw input
        raw: String,
    },
}

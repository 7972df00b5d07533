//! Error types for formwork core

use formwork_editor::EditorError;
use formwork_field::FieldError;
use formwork_list::ListError;
use formwork_render::RenderError;
use formwork_rules::RuleError;

/// Main form builder error type
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FormError {
    /// Rule evaluation failed
    #[error("rule error: {0}")]
    Rule(#[from] RuleError),

    /// Field model error
    #[error("field error: {0}")]
    Field(#[from] FieldError),

    /// Field list rejected a mutation
    #[error("list error: {0}")]
    List(#[from] ListError),

    /// Editor rejected an edit or submission
    #[error("editor error: {0}")]
    Editor(#[from] EditorError),

    /// A descriptor could not be rendered
    #[error("render error: {0}")]
    Render(#[from] RenderError),

    /// Invalid configuration
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Form already holds the configured maximum of fields
    #[error("form is full: at most {max} fields")]
    CapacityExceeded {
        /// Configured maximum
        max: usize,
    },
}

/// Result alias for form builder operations
pub type Result<T> = std::result::Result<T, FormError>;

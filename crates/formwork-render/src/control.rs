//! Render variants

use formwork_field::FieldKind;
use serde::{Deserialize, Serialize};

/// Static configuration of one rendered control
///
/// Carries the descriptor attributes the UI layer needs; live state lives in
/// [`LiveControl`](crate::LiveControl).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "control", rename_all = "snake_case")]
pub enum Control {
    /// Text input
    Text {
        /// Caption
        label: String,
        /// Required flag
        required: bool,
        /// Hint
        placeholder: String,
    },
    /// Number input
    Number {
        /// Caption
        label: String,
        /// Required flag
        required: bool,
        /// Hint
        placeholder: String,
    },
    /// Date input
    Date {
        /// Caption
        label: String,
        /// Required flag
        required: bool,
        /// Hint
        placeholder: String,
    },
    /// Email input
    Email {
        /// Caption
        label: String,
        /// Required flag
        required: bool,
        /// Hint
        placeholder: String,
    },
    /// Drop-down
    Select {
        /// Caption
        label: String,
        /// Required flag
        required: bool,
        /// Choices in display order
        options: Vec<String>,
    },
    /// Checkbox
    Checkbox {
        /// Caption
        label: String,
        /// Required flag
        required: bool,
    },
    /// Level-one heading
    Heading {
        /// Heading text
        text: String,
    },
    /// Paragraph
    Paragraph {
        /// Paragraph text
        text: String,
    },
    /// Loadable image
    Image {
        /// Image location, under the trusted prefix
        src: String,
        /// Alternative text
        alt: String,
    },
    /// Shown instead of an image whose source is not trusted
    ImageNotice {
        /// Notice text
        message: String,
        /// Link to the allowed host
        link: String,
    },
}

impl Control {
    /// Field kind this control was rendered from
    #[must_use]
    pub fn kind(&self) -> FieldKind {
        match self {
            Self::Text { .. } => FieldKind::Text,
            Self::Number { .. } => FieldKind::Number,
            Self::Date { .. } => FieldKind::Date,
            Self::Email { .. } => FieldKind::Email,
            Self::Select { .. } => FieldKind::Select,
            Self::Checkbox { .. } => FieldKind::Checkbox,
            Self::Heading { .. } => FieldKind::Heading,
            Self::Paragraph { .. } => FieldKind::Paragraph,
            Self::Image { .. } | Self::ImageNotice { .. } => FieldKind::Image,
        }
    }

    /// Caption, for input controls
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        match self {
            Self::Text { label, .. }
            | Self::Number { label, .. }
            | Self::Date { label, .. }
            | Self::Email { label, .. }
            | Self::Select { label, .. }
            | Self::Checkbox { label, .. } => Some(label),
            _ => None,
        }
    }

    /// Image degraded to a notice
    #[inline]
    #[must_use]
    pub fn is_notice(&self) -> bool {
        matches!(self, Self::ImageNotice { .. })
    }
}

/// Local state of a live control
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ControlValue {
    /// Text, date or email content
    Text(String),
    /// Parsed number; NaN when the input did not parse
    Number(f64),
    /// Selected choice
    Choice(Option<String>),
    /// Checkbox state
    Checked(bool),
    /// Static element
    None,
}

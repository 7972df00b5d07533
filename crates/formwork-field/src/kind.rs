//! Field kind discriminant

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::FieldError;

/// The nine field variants, without their attributes
///
/// Capability answers here agree with the variant structs in
/// [`crate::descriptor`], so the editor can decide which controls to show
/// before any descriptor exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// Single-line text input
    Text,
    /// Numeric input
    Number,
    /// Date input
    Date,
    /// Email input
    Email,
    /// Drop-down selection
    Select,
    /// Checkbox
    Checkbox,
    /// Static heading
    Heading,
    /// Static paragraph
    Paragraph,
    /// Static image
    Image,
}

impl FieldKind {
    /// Every kind, in editor menu order
    pub const ALL: [Self; 9] = [
        Self::Text,
        Self::Number,
        Self::Date,
        Self::Email,
        Self::Select,
        Self::Checkbox,
        Self::Image,
        Self::Heading,
        Self::Paragraph,
    ];

    /// Wire name
    #[inline]
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Number => "number",
            Self::Date => "date",
            Self::Email => "email",
            Self::Select => "select",
            Self::Checkbox => "checkbox",
            Self::Heading => "heading",
            Self::Paragraph => "paragraph",
            Self::Image => "image",
        }
    }

    /// Variant carries a `required` flag
    #[inline]
    #[must_use]
    pub fn is_requireable(self) -> bool {
        matches!(
            self,
            Self::Text | Self::Number | Self::Date | Self::Email | Self::Select | Self::Checkbox
        )
    }

    /// Variant carries a `label`
    #[inline]
    #[must_use]
    pub fn is_labelable(self) -> bool {
        self.is_requireable()
    }

    /// Variant carries validation rules
    #[inline]
    #[must_use]
    pub fn is_validatable(self) -> bool {
        matches!(self, Self::Text | Self::Number | Self::Image)
    }
}

impl Display for FieldKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldKind {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| FieldError::UnknownFieldKind(s.to_string()))
    }
}

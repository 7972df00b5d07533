//! Rule and value types
//!
//! The wire shape follows the form record: a rule is
//! `{ "schema": { "type": "number", "operator": "gt", "value": 5 }, "message": "…" }`
//! with an optional transient `valid` flag.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::engine::RuleError;

/// One validation predicate with a human-readable failure message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    /// Predicate to apply
    pub schema: RuleSchema,

    /// Message presented when the predicate fails
    pub message: String,

    /// Cached result of the last evaluation
    ///
    /// Not authoritative: recomputed on every input change.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valid: Option<bool>,
}

impl Rule {
    /// Create a rule with no cached result
    #[inline]
    #[must_use]
    pub fn new(schema: RuleSchema, message: impl Into<String>) -> Self {
        Self {
            schema,
            message: message.into(),
            valid: None,
        }
    }

    /// Number comparison rule
    #[inline]
    #[must_use]
    pub fn number(operator: NumberOperator, value: f64, message: impl Into<String>) -> Self {
        Self::new(RuleSchema::Number(NumberRule { operator, value }), message)
    }

    /// String affix/containment rule
    #[inline]
    #[must_use]
    pub fn string(
        condition: StringCondition,
        value: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::new(
            RuleSchema::String(StringRule {
                condition,
                value: value.into(),
            }),
            message,
        )
    }

    /// Kind of value this rule applies to
    #[inline]
    #[must_use]
    pub fn value_kind(&self) -> ValueKind {
        self.schema.value_kind()
    }

    /// Whether the last evaluation failed
    #[inline]
    #[must_use]
    pub fn is_failing(&self) -> bool {
        self.valid == Some(false)
    }

    /// Refresh the `valid` cache against `value`
    ///
    /// A value of the wrong kind leaves the rule unevaluated.
    pub fn revalidate(&mut self, value: &FieldValue) {
        self.valid = crate::engine::evaluate(self, value).ok();
    }
}

/// Closed set of rule schema kinds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum RuleSchema {
    /// Numeric comparison against a threshold
    Number(NumberRule),
    /// Textual affix or containment check
    String(StringRule),
}

impl RuleSchema {
    /// Kind of value this schema applies to
    #[inline]
    #[must_use]
    pub fn value_kind(&self) -> ValueKind {
        match self {
            Self::Number(_) => ValueKind::Number,
            Self::String(_) => ValueKind::Text,
        }
    }
}

/// Numeric comparison `current <operator> value`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NumberRule {
    /// Comparison operator
    pub operator: NumberOperator,
    /// Threshold the current value is compared against
    pub value: f64,
}

/// Total-order comparison operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumberOperator {
    /// Equal
    Eq,
    /// Not equal
    Neq,
    /// Greater than
    Gt,
    /// Less than
    Lt,
    /// Greater than or equal
    Gte,
    /// Less than or equal
    Lte,
}

impl NumberOperator {
    /// Every operator, in declaration order
    pub const ALL: [Self; 6] = [Self::Eq, Self::Neq, Self::Gt, Self::Lt, Self::Gte, Self::Lte];

    /// Apply the operator as `current <op> threshold`
    ///
    /// Native `f64` semantics: any comparison with NaN is false, except `Neq`.
    #[inline]
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn compare(self, current: f64, threshold: f64) -> bool {
        match self {
            Self::Eq => current == threshold,
            Self::Neq => current != threshold,
            Self::Gt => current > threshold,
            Self::Lt => current < threshold,
            Self::Gte => current >= threshold,
            Self::Lte => current <= threshold,
        }
    }

    /// Wire name
    #[inline]
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Eq => "eq",
            Self::Neq => "neq",
            Self::Gt => "gt",
            Self::Lt => "lt",
            Self::Gte => "gte",
            Self::Lte => "lte",
        }
    }
}

impl Display for NumberOperator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NumberOperator {
    type Err = RuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|op| op.as_str() == s)
            .ok_or_else(|| RuleError::InvalidSchema(format!("unknown number operator: {s}")))
    }
}

/// Textual check `current.<condition>(value)`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StringRule {
    /// Check to perform
    pub condition: StringCondition,
    /// Needle
    pub value: String,
}

/// String affix and containment conditions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StringCondition {
    /// Current value starts with the needle
    StartsWith,
    /// Current value ends with the needle
    EndsWith,
    /// Current value contains the needle
    Includes,
}

impl StringCondition {
    /// Every condition, in declaration order
    pub const ALL: [Self; 3] = [Self::StartsWith, Self::EndsWith, Self::Includes];

    /// Apply the condition to `current`
    #[inline]
    #[must_use]
    pub fn check(self, current: &str, needle: &str) -> bool {
        match self {
            Self::StartsWith => current.starts_with(needle),
            Self::EndsWith => current.ends_with(needle),
            Self::Includes => current.contains(needle),
        }
    }

    /// Wire name
    #[inline]
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::StartsWith => "startsWith",
            Self::EndsWith => "endsWith",
            Self::Includes => "includes",
        }
    }
}

impl Display for StringCondition {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StringCondition {
    type Err = RuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| RuleError::InvalidSchema(format!("unknown string condition: {s}")))
    }
}

/// Current value of a live control
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Free text
    Text(String),
    /// Parsed number
    Number(f64),
}

impl FieldValue {
    /// Kind of this value
    #[inline]
    #[must_use]
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Text(_) => ValueKind::Text,
            Self::Number(_) => ValueKind::Number,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<f64> for FieldValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

/// Value kinds a schema can apply to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// Text value
    Text,
    /// Numeric value
    Number,
}

impl Display for ValueKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => f.write_str("text"),
            Self::Number => f.write_str("number"),
        }
    }
}

//! Rule evaluation
//!
//! Every call is synchronous and side-effect free; callers re-run the
//! evaluation on every input change.

use crate::rule::{FieldValue, Rule, RuleSchema, ValueKind};

/// Evaluate one rule against the current value
///
/// # Errors
/// Returns [`RuleError::ValueKindMismatch`] if the value kind does not match
/// the schema kind (text fed to a number rule or vice versa).
///
/// # Examples
/// ```rust
/// use formwork_rules::{evaluate, FieldValue, Rule, StringCondition};
///
/// let rule = Rule::string(StringCondition::Includes, "@", "needs an @");
/// assert!(evaluate(&rule, &"a@b".into()).unwrap());
/// ```
#[inline]
pub fn evaluate(rule: &Rule, value: &FieldValue) -> Result<bool, RuleError> {
    evaluate_schema(&rule.schema, value)
}

/// Evaluate a bare schema against the current value
///
/// # Errors
/// Returns [`RuleError::ValueKindMismatch`] on a value/schema kind mismatch.
pub fn evaluate_schema(schema: &RuleSchema, value: &FieldValue) -> Result<bool, RuleError> {
    match (schema, value) {
        (RuleSchema::Number(rule), FieldValue::Number(current)) => {
            Ok(rule.operator.compare(*current, rule.value))
        }
        (RuleSchema::String(rule), FieldValue::Text(current)) => {
            Ok(rule.condition.check(current, &rule.value))
        }
        (schema, value) => Err(RuleError::ValueKindMismatch {
            expected: schema.value_kind(),
            found: value.kind(),
        }),
    }
}

/// Evaluate and return a copy of the rule with its `valid` cache filled in
///
/// # Errors
/// Same as [`evaluate`].
pub fn validate(rule: &Rule, value: &FieldValue) -> Result<Rule, RuleError> {
    let valid = evaluate(rule, value)?;
    Ok(Rule {
        valid: Some(valid),
        ..rule.clone()
    })
}

/// Evaluate an untyped rule as received from the UI or store layer
///
/// # Errors
/// - [`RuleError::InvalidSchema`] if the schema kind, operator or condition is
///   unknown, or the rule is malformed
/// - [`RuleError::ValueKindMismatch`] as for [`evaluate`]
pub fn evaluate_json(rule: &serde_json::Value, value: &FieldValue) -> Result<bool, RuleError> {
    let rule: Rule = serde_json::from_value(rule.clone()).map_err(|e| {
        tracing::warn!("Rejected rule schema: {}", e);
        RuleError::InvalidSchema(e.to_string())
    })?;
    evaluate(&rule, value)
}

/// Rule evaluation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuleError {
    /// Rule references an unknown schema kind or has a malformed shape
    #[error("invalid validation schema: {0}")]
    InvalidSchema(String),

    /// Value kind does not match the schema kind
    #[error("value kind mismatch: rule expects {expected}, got {found}")]
    ValueKindMismatch {
        /// Kind the schema applies to
        expected: ValueKind,
        /// Kind of the supplied value
        found: ValueKind,
    },
}

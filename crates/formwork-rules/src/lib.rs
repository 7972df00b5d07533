//! Formwork Rules
//!
//! Pure predicate evaluation for form field values.
//!
//! # Core Concepts
//!
//! - [`Rule`]: one predicate plus the message shown when it fails
//! - [`RuleSchema`]: closed set of schema kinds ([`NumberRule`], [`StringRule`])
//! - [`FieldValue`]: the current value of a live control
//! - [`evaluate`]: synchronous, re-entrant evaluation of a single rule
//! - [`RuleSet`]: all rules attached to one field, re-evaluated on every change
//!
//! # Example
//!
//! ```rust
//! use formwork_rules::{evaluate, FieldValue, NumberOperator, Rule};
//!
//! let rule = Rule::number(NumberOperator::Gt, 5.0, "must be greater than 5");
//! assert!(evaluate(&rule, &FieldValue::Number(10.0)).unwrap());
//! assert!(!evaluate(&rule, &FieldValue::Number(3.0)).unwrap());
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod engine;
mod rule;
mod rule_set;

// Re-exports
pub use engine::{evaluate, evaluate_json, evaluate_schema, validate, RuleError};
pub use rule::{FieldValue, NumberOperator, NumberRule, Rule, RuleSchema, StringCondition, StringRule, ValueKind};
pub use rule_set::RuleSet;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//! Capability traits
//!
//! Each field variant implements a fixed subset of these traits; see the
//! table in [`crate::kind::FieldKind`].

use formwork_rules::{Rule, RuleSet};

/// Field carries a `required` flag
pub trait Requireable {
    /// Whether a value must be supplied
    fn required(&self) -> bool;
}

/// Field carries a caption
pub trait Labelable {
    /// Caption shown next to the control
    fn label(&self) -> &str;
}

/// Field carries validation rules
pub trait Validatable {
    /// Attached rules
    fn validation(&self) -> &RuleSet;

    /// Attached rules, for refreshing their `valid` cache
    ///
    /// Rules can be updated in place but not added or removed.
    fn validation_mut(&mut self) -> &mut [Rule];
}

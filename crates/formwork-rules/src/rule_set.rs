//! Rules attached to a single field

use serde::{Deserialize, Serialize};

use crate::rule::{FieldValue, Rule};

/// Ordered list of rules attached to one field
///
/// Serializes as a plain list. The `valid` cache of each rule is refreshed by
/// [`RuleSet::revalidate`] on every input change.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleSet(Vec<Rule>);

impl RuleSet {
    /// Create empty rule set
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Append a rule
    #[inline]
    pub fn push(&mut self, rule: Rule) {
        self.0.push(rule);
    }

    /// Get rules
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[Rule] {
        &self.0
    }

    /// Rules with their caches open for refresh; the set itself stays fixed
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [Rule] {
        &mut self.0
    }

    /// Number of rules
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if there are no rules
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate rules in attachment order
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.0.iter()
    }

    /// Re-evaluate every rule against `value`
    ///
    /// Rules whose schema kind does not match the value kind are left
    /// unevaluated (`valid = None`).
    pub fn revalidate(&mut self, value: &FieldValue) {
        for rule in self.as_mut_slice() {
            rule.revalidate(value);
        }
    }

    /// Drop every cached result
    pub fn clear_cache(&mut self) {
        for rule in &mut self.0 {
            rule.valid = None;
        }
    }

    /// True when no evaluated rule is failing
    #[inline]
    #[must_use]
    pub fn is_satisfied(&self) -> bool {
        !self.0.iter().any(Rule::is_failing)
    }

    /// Messages of the rules whose last evaluation failed, in order
    #[must_use]
    pub fn failing_messages(&self) -> Vec<&str> {
        self.0
            .iter()
            .filter(|r| r.is_failing())
            .map(|r| r.message.as_str())
            .collect()
    }
}

impl From<Vec<Rule>> for RuleSet {
    fn from(rules: Vec<Rule>) -> Self {
        Self(rules)
    }
}

impl FromIterator<Rule> for RuleSet {
    fn from_iter<I: IntoIterator<Item = Rule>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::{NumberOperator, StringCondition};
    use pretty_assertions::assert_eq;

    fn age_rules() -> RuleSet {
        RuleSet::from(vec![
            Rule::number(NumberOperator::Gte, 18.0, "too young"),
            Rule::number(NumberOperator::Lt, 120.0, "too old"),
        ])
    }

    #[test]
    fn fresh_rules_are_satisfied() {
        let rules = age_rules();
        assert!(rules.is_satisfied());
        assert!(rules.failing_messages().is_empty());
    }

    #[test]
    fn revalidate_reports_failures_in_order() {
        let mut rules = age_rules();
        rules.revalidate(&FieldValue::Number(10.0));
        assert_eq!(rules.failing_messages(), vec!["too young"]);
        assert!(!rules.is_satisfied());

        rules.revalidate(&FieldValue::Number(30.0));
        assert!(rules.is_satisfied());
        assert!(rules.iter().all(|r| r.valid == Some(true)));
    }

    #[test]
    fn mismatched_rules_stay_unevaluated() {
        let mut rules = RuleSet::from(vec![
            Rule::number(NumberOperator::Gt, 0.0, "positive"),
            Rule::string(StringCondition::Includes, "@", "needs an @"),
        ]);
        rules.revalidate(&FieldValue::Text("nobody".into()));

        assert_eq!(rules.as_slice()[0].valid, None);
        assert_eq!(rules.as_slice()[1].valid, Some(false));
        assert_eq!(rules.failing_messages(), vec!["needs an @"]);
    }

    #[test]
    fn clear_cache_resets() {
        let mut rules = age_rules();
        rules.revalidate(&FieldValue::Number(1.0));
        rules.clear_cache();
        assert!(rules.iter().all(|r| r.valid.is_none()));
    }

    #[test]
    fn serializes_as_list() {
        let json = serde_json::to_value(age_rules()).unwrap();
        assert!(json.is_array());
        assert_eq!(json.as_array().unwrap().len(), 2);
    }
}

//! Live controls

use formwork_field::{FieldId, FieldKind};
use formwork_rules::{FieldValue, RuleSet};

use crate::control::{Control, ControlValue};
use crate::error::RenderError;

/// One rendered field with its local state
///
/// Rules attached to the descriptor are re-evaluated on every change,
/// starting with the initial value.
#[derive(Debug, Clone, PartialEq)]
pub struct LiveControl {
    id: FieldId,
    control: Control,
    value: ControlValue,
    rules: RuleSet,
}

impl LiveControl {
    pub(crate) fn new(id: FieldId, control: Control, value: ControlValue, rules: RuleSet) -> Self {
        let mut live = Self {
            id,
            control,
            value,
            rules,
        };
        live.revalidate();
        live
    }

    /// Id of the rendered descriptor
    #[inline]
    #[must_use]
    pub fn id(&self) -> &FieldId {
        &self.id
    }

    /// Render variant
    #[inline]
    #[must_use]
    pub fn control(&self) -> &Control {
        &self.control
    }

    /// Current local state
    #[inline]
    #[must_use]
    pub fn value(&self) -> &ControlValue {
        &self.value
    }

    /// Rules with their latest results
    #[inline]
    #[must_use]
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Apply a raw change event
    ///
    /// Text-like controls take `raw` as is. Number controls parse it and hold
    /// NaN when it does not parse. Select controls require one of the
    /// choices. Checkbox controls accept `true`/`false`.
    ///
    /// # Errors
    /// - [`RenderError::ReadOnly`] for static elements
    /// - [`RenderError::UnknownOption`] for a choice not offered
    /// - [`RenderError::InvalidInput`] for a checkbox value that is not a bool
    pub fn input(&mut self, raw: &str) -> Result<(), RenderError> {
        self.value = match &self.control {
            Control::Text { .. } | Control::Date { .. } | Control::Email { .. } => {
                ControlValue::Text(raw.to_string())
            }
            Control::Number { .. } => ControlValue::Number(parse_number(raw)),
            Control::Select { options, .. } => {
                if !options.iter().any(|o| o == raw) {
                    return Err(RenderError::UnknownOption(raw.to_string()));
                }
                ControlValue::Choice(Some(raw.to_string()))
            }
            Control::Checkbox { .. } => {
                let checked = raw.parse::<bool>().map_err(|_| RenderError::InvalidInput {
                    kind: FieldKind::Checkbox,
                    raw: raw.to_string(),
                })?;
                ControlValue::Checked(checked)
            }
            static_element => return Err(RenderError::ReadOnly(static_element.kind())),
        };

        self.revalidate();
        Ok(())
    }

    /// Set checkbox state
    ///
    /// # Errors
    /// Returns [`RenderError::InvalidInput`] for non-checkbox controls.
    pub fn set_checked(&mut self, checked: bool) -> Result<(), RenderError> {
        if !matches!(self.control, Control::Checkbox { .. }) {
            return Err(RenderError::InvalidInput {
                kind: self.control.kind(),
                raw: checked.to_string(),
            });
        }
        self.value = ControlValue::Checked(checked);
        Ok(())
    }

    /// Messages of the rules failing for the current value
    #[must_use]
    pub fn failing_messages(&self) -> Vec<&str> {
        self.rules.failing_messages()
    }

    /// Some rule fails for the current value
    #[inline]
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.rules.is_satisfied()
    }

    fn revalidate(&mut self) {
        match &self.value {
            ControlValue::Text(text) => self.rules.revalidate(&FieldValue::Text(text.clone())),
            ControlValue::Number(n) => self.rules.revalidate(&FieldValue::Number(*n)),
            _ => {}
        }
    }
}

/// Reads a plain decimal literal; words such as `inf` or `nan` and
/// out-of-range values give NaN.
fn parse_number(raw: &str) -> f64 {
    let raw = raw.trim();
    if !is_decimal_literal(raw) {
        return f64::NAN;
    }
    raw.parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .unwrap_or(f64::NAN)
}

/// `[+-]digits[.digits][(e|E)[+-]digits]`, with at least one mantissa digit
fn is_decimal_literal(s: &str) -> bool {
    fn unsigned(part: &str) -> &str {
        part.strip_prefix(['+', '-']).unwrap_or(part)
    }
    fn digits(part: &str) -> bool {
        part.bytes().all(|b| b.is_ascii_digit())
    }

    let body = unsigned(s);
    let (mantissa, exponent) = match body.find(['e', 'E']) {
        Some(i) => (&body[..i], Some(unsigned(&body[i + 1..]))),
        None => (body, None),
    };
    let (int, frac) = mantissa.split_once('.').unwrap_or((mantissa, ""));

    let mantissa_ok = digits(int) && digits(frac) && !(int.is_empty() && frac.is_empty());
    let exponent_ok = match exponent {
        Some(e) => !e.is_empty() && digits(e),
        None => true,
    };
    mantissa_ok && exponent_ok
}

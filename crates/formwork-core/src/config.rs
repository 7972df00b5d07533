//! Form builder configuration

use formwork_editor::{EditorConfig, SubmitPolicy};
use serde::{Deserialize, Serialize};

use crate::error::{FormError, Result};

/// Form builder configuration
///
/// Every key is optional in TOML; unknown keys are rejected:
///
/// ```toml
/// submit_policy = "block_on_invalid_rules"
/// max_fields = 50
/// ```
///
/// The trusted image host is fixed and has no key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormBuilderConfig {
    /// Whether failing rules block submission
    pub submit_policy: SubmitPolicy,
    /// Upper bound on the number of fields; `None` for unlimited
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_fields: Option<usize>,
}

impl FormBuilderConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With submission policy
    #[inline]
    #[must_use]
    pub fn with_submit_policy(mut self, policy: SubmitPolicy) -> Self {
        self.submit_policy = policy;
        self
    }

    /// With field limit
    #[inline]
    #[must_use]
    pub fn with_max_fields(mut self, max: usize) -> Self {
        self.max_fields = Some(max);
        self
    }

    /// Parse from TOML
    ///
    /// # Errors
    /// Returns [`FormError::Config`] on malformed TOML, unknown keys or policy
    /// names, or a zero field limit.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source).map_err(|e| FormError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to TOML
    ///
    /// # Errors
    /// Returns [`FormError::Config`] if serialization fails.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| FormError::Config(e.to_string()))
    }

    /// Check invariants serde cannot express
    ///
    /// # Errors
    /// Returns [`FormError::Config`] for `max_fields = 0`.
    pub fn validate(&self) -> Result<()> {
        if self.max_fields == Some(0) {
            return Err(FormError::Config("max_fields must be at least 1".to_string()));
        }
        Ok(())
    }

    /// Editor settings derived from this configuration
    #[must_use]
    pub fn editor_config(&self) -> EditorConfig {
        EditorConfig::new().with_submit_policy(self.submit_policy)
    }
}

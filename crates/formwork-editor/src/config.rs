//! Editor configuration
//!
//! The trusted image prefix is fixed at [`formwork_field::TRUSTED_IMAGE_PREFIX`]
//! and is not part of the configuration.

use serde::{Deserialize, Serialize};

/// Whether failing rules block submission
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmitPolicy {
    /// Rules are shown as feedback only
    #[default]
    Unconditional,
    /// Submission fails while any attached rule is failing
    BlockOnInvalidRules,
}

/// Field editor configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EditorConfig {
    /// Submission gating
    pub submit_policy: SubmitPolicy,
}

impl EditorConfig {
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
}

//! Trusted image sources
//!
//! Image fields only load from a fixed host. The rule pair built here is
//! attached to every image descriptor at construction and is not
//! user-configurable.

use formwork_rules::{Rule, RuleSet, StringCondition};

/// Only image sources under this prefix are loaded
pub const TRUSTED_IMAGE_PREFIX: &str = "https://images.unsplash.com";

/// Page linked from the untrusted-source notice
pub const TRUSTED_IMAGE_HOME: &str = "https://unsplash.com/";

/// Host named in the untrusted-source notice
pub const TRUSTED_IMAGE_HOST: &str = "images.unsplash.com";

/// Rule pair for image sources: must start with [`TRUSTED_IMAGE_PREFIX`],
/// must end with `/`
#[must_use]
pub fn image_source_rules() -> RuleSet {
    RuleSet::from(vec![
        Rule::string(
            StringCondition::StartsWith,
            TRUSTED_IMAGE_PREFIX,
            format!("Have to start with '{TRUSTED_IMAGE_PREFIX}'"),
        ),
        Rule::string(StringCondition::EndsWith, "/", "Have to end with '/'"),
    ])
}

/// Check whether `src` may be loaded
#[inline]
#[must_use]
pub fn is_trusted_image_source(src: &str) -> bool {
    src.starts_with(TRUSTED_IMAGE_PREFIX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use formwork_rules::FieldValue;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_pair_messages() {
        let rules = image_source_rules();
        let messages: Vec<_> = rules.iter().map(|r| r.message.as_str()).collect();
        assert_eq!(
            messages,
            vec![
                "Have to start with 'https://images.unsplash.com'",
                "Have to end with '/'",
            ]
        );
    }

    #[test]
    fn pair_flags_untrusted_source() {
        let mut rules = image_source_rules();
        rules.revalidate(&FieldValue::Text("http://example.com/cat.png".into()));
        assert_eq!(rules.failing_messages().len(), 2);

        rules.revalidate(&FieldValue::Text("https://images.unsplash.com/photo/".into()));
        assert!(rules.is_satisfied());
    }

    #[test]
    fn trusted_prefix_check() {
        assert!(is_trusted_image_source("https://images.unsplash.com/x"));
        assert!(!is_trusted_image_source("http://example.com"));
        assert!(!is_trusted_image_source("https://cdn.test/images.unsplash.com/"));
    }

    #[test]
    fn host_matches_prefix() {
        assert_eq!(format!("https://{TRUSTED_IMAGE_HOST}"), TRUSTED_IMAGE_PREFIX);
    }
}

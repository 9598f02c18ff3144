// Process-wide operational toggles, read once from environment
// variables at startup. None of these alter cost semantics (see the
// pricing engine's own docs); `strict_validation` only tightens which
// malformed tags surface as `INVALID_RESOURCE` instead of being
// silently defaulted.

use std::env;
use std::sync::OnceLock;

#[derive(Debug, Clone, PartialEq)]
pub struct PluginConfig {
    pub test_mode: bool,
    pub max_batch: u32,
    pub strict_validation: bool,
}

const DEFAULT_MAX_BATCH: u32 = 100;

static CONFIG: OnceLock<PluginConfig> = OnceLock::new();

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            test_mode: false,
            max_batch: DEFAULT_MAX_BATCH,
            strict_validation: false,
        }
    }
}

impl PluginConfig {
    /// Reads configuration from the environment. A malformed value is
    /// logged and replaced by its default; this never panics.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(raw) = env::var("AWS_PUBLIC_PRICING_TEST_MODE") {
            config.test_mode = parse_bool(&raw).unwrap_or_else(|| {
                tracing::warn!(value = %raw, "invalid AWS_PUBLIC_PRICING_TEST_MODE, using default");
                config.test_mode
            });
        }

        if let Ok(raw) = env::var("AWS_PUBLIC_PRICING_MAX_BATCH") {
            config.max_batch = raw.parse().unwrap_or_else(|_| {
                tracing::warn!(value = %raw, "invalid AWS_PUBLIC_PRICING_MAX_BATCH, using default");
                DEFAULT_MAX_BATCH
            });
        }

        if let Ok(raw) = env::var("AWS_PUBLIC_PRICING_STRICT_VALIDATION") {
            config.strict_validation = parse_bool(&raw).unwrap_or_else(|| {
                tracing::warn!(value = %raw, "invalid AWS_PUBLIC_PRICING_STRICT_VALIDATION, using default");
                config.strict_validation
            });
        }

        config
    }

    /// Returns the process-wide config, read from the environment on
    /// first access and cached for the process's lifetime — the same
    /// single-shot-latch shape as the pricing catalog.
    pub fn global() -> &'static PluginConfig {
        CONFIG.get_or_init(Self::from_env)
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_no_toggles_enabled() {
        let config = PluginConfig::default();
        assert!(!config.test_mode);
        assert!(!config.strict_validation);
        assert_eq!(config.max_batch, DEFAULT_MAX_BATCH);
    }

    #[test]
    fn parse_bool_accepts_common_spellings() {
        assert_eq!(parse_bool("true"), Some(true));
        assert_eq!(parse_bool("0"), Some(false));
        assert_eq!(parse_bool("maybe"), None);
    }
}

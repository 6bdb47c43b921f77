//! Reflector configuration.

/// Configuration for the [`Reflector`](crate::Reflector).
#[derive(Debug, Clone)]
pub struct ReflectorConfig {
    /// Skip elements with a malformed identity instead of failing the file.
    pub skip_invalid: bool,
    /// Log progress for every file at info level.
    pub verbose: bool,
}

impl Default for ReflectorConfig {
    fn default() -> Self {
        Self {
            skip_invalid: true,
            verbose: false,
        }
    }
}

impl ReflectorConfig {
    /// Create config from environment variables.
    ///
    /// `REFRACT_SKIP_INVALID` accepts `1`/`true` and `0`/`false`; anything
    /// else keeps the default.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(value) = std::env::var("REFRACT_SKIP_INVALID") {
            if let Some(skip) = parse_flag(&value) {
                config.skip_invalid = skip;
            }
        }
        config
    }

    /// Set whether progress is logged per file.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" => Some(true),
        "0" | "false" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ReflectorConfig::default();
        assert!(config.skip_invalid);
        assert!(!config.verbose);
    }

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag("1"), Some(true));
        assert_eq!(parse_flag(" TRUE "), Some(true));
        assert_eq!(parse_flag("false"), Some(false));
        assert_eq!(parse_flag("maybe"), None);
    }
}

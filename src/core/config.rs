//! Server configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.
//! Site address, ports and asset paths come from `[package.metadata.leptos]`.

/// Default tracing filter when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "info,saby_web=debug";

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Tracing filter directive (`RUST_LOG`)
    pub log_filter: String,

    /// Compress responses with brotli/gzip (`SABY_COMPRESSION`, default on)
    pub compression: bool,

    /// Extra directory served under `/static` (`SABY_STATIC_DIR`)
    pub static_dir: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup; used by `from_env` and tests
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            log_filter: lookup("RUST_LOG")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
            compression: lookup("SABY_COMPRESSION")
                .map(|v| parse_flag(&v))
                .unwrap_or(true),
            static_dir: lookup("SABY_STATIC_DIR").filter(|v| !v.trim().is_empty()),
        }
    }

    /// Check if an extra static directory is configured
    pub fn has_static_dir(&self) -> bool {
        self.static_dir.is_some()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

fn parse_flag(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "0" | "false" | "off" | "no"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    // ========================================================================
    // Lookup-based tests (no process env mutation - thread safe)
    // ========================================================================

    fn config_from(pairs: &[(&str, &str)]) -> Config {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_config_defaults() {
        let config = config_from(&[]);
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
        assert!(config.compression);
        assert!(!config.has_static_dir());
    }

    #[test]
    fn test_config_with_all_fields() {
        let config = config_from(&[
            ("RUST_LOG", "warn"),
            ("SABY_COMPRESSION", "off"),
            ("SABY_STATIC_DIR", "/srv/saby/static"),
        ]);
        assert_eq!(config.log_filter, "warn");
        assert!(!config.compression);
        assert_eq!(config.static_dir.as_deref(), Some("/srv/saby/static"));
    }

    #[test]
    fn test_blank_values_are_ignored() {
        let config = config_from(&[("RUST_LOG", "  "), ("SABY_STATIC_DIR", "")]);
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
        assert!(config.static_dir.is_none());
    }

    #[test]
    fn test_parse_flag() {
        for off in ["0", "false", "OFF", " no "] {
            assert!(!parse_flag(off), "{off}");
        }
        for on in ["1", "true", "yes", "on"] {
            assert!(parse_flag(on), "{on}");
        }
    }
}

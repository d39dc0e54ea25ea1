//! # Application Configuration
//!
//! Configuration is read once at startup from environment variables (a `.env`
//! file is loaded first when present) and validated so a misconfigured client
//! fails before the window opens.
//!
//! | variable                    | default                    |
//! |-----------------------------|----------------------------|
//! | `NFTURES_API_URL`           | [`DEFAULT_API_URL`]        |
//! | `NFTURES_HTTP_TIMEOUT_SECS` | `10`                       |
//! | `NFTURES_INSECURE_ECHO`     | `1`                        |
//! | `NFTURES_LOG_DIR`           | `logs`                     |
//! | `RUST_LOG`                  | `nftures=info,warn`        |

use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Auth endpoint used when `NFTURES_API_URL` is not set
pub const DEFAULT_API_URL: &str = "https://functions.poehali.dev/dd412e45-0e97-4737-9d07-6ab596b9b773";

const DEFAULT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_LOG_LEVEL: &str = "nftures=info,warn";

/// Client configuration
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// Single POST endpoint for every auth action
    pub api_url: String,

    /// Per-request timeout. Expiry is reported as a network failure.
    pub http_timeout: Duration,

    /// Show verification and reset codes returned by the server in a toast.
    ///
    /// The server echoes these codes in its response, which defeats out-of-band
    /// email verification. Keep this off for any real deployment.
    pub insecure_echo_codes: bool,

    /// Directory for rolling log files
    pub log_dir: PathBuf,

    /// `tracing` filter directive
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            http_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            insecure_echo_codes: true,
            log_dir: PathBuf::from("logs"),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, String> {
        // A missing .env file is the normal case
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, String> {
        let defaults = Self::default();

        let api_url = lookup("NFTURES_API_URL").unwrap_or(defaults.api_url);

        let http_timeout = match lookup("NFTURES_HTTP_TIMEOUT_SECS") {
            Some(raw) => Duration::from_secs(
                raw.trim()
                    .parse()
                    .map_err(|e| format!("NFTURES_HTTP_TIMEOUT_SECS must be a valid number: {}", e))?,
            ),
            None => defaults.http_timeout,
        };

        let insecure_echo_codes = match lookup("NFTURES_INSECURE_ECHO") {
            Some(raw) => parse_flag(&raw)
                .ok_or_else(|| format!("NFTURES_INSECURE_ECHO must be 0 or 1, got {:?}", raw))?,
            None => defaults.insecure_echo_codes,
        };

        let log_dir = lookup("NFTURES_LOG_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.log_dir);

        let log_level = lookup("RUST_LOG").unwrap_or(defaults.log_level);

        let config = Self {
            api_url,
            http_timeout,
            insecure_echo_codes,
            log_dir,
            log_level,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), String> {
        if !(self.api_url.starts_with("https://") || self.api_url.starts_with("http://")) {
            return Err(format!("NFTURES_API_URL must be an http(s) URL, got {}", self.api_url));
        }

        let secs = self.http_timeout.as_secs();
        if !(1..=120).contains(&secs) {
            return Err("NFTURES_HTTP_TIMEOUT_SECS must be between 1 and 120".to_string());
        }

        Ok(())
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_nothing_set() {
        let config = AppConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, AppConfig::default());
        assert!(config.insecure_echo_codes);
    }

    #[test]
    fn test_overrides_are_applied() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("NFTURES_API_URL", "http://127.0.0.1:9000/auth"),
            ("NFTURES_HTTP_TIMEOUT_SECS", "3"),
            ("NFTURES_INSECURE_ECHO", "0"),
            ("NFTURES_LOG_DIR", "/tmp/nftures-logs"),
        ]))
        .unwrap();

        assert_eq!(config.api_url, "http://127.0.0.1:9000/auth");
        assert_eq!(config.http_timeout, Duration::from_secs(3));
        assert!(!config.insecure_echo_codes);
        assert_eq!(config.log_dir, PathBuf::from("/tmp/nftures-logs"));
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert!(AppConfig::from_lookup(lookup_from(&[("NFTURES_API_URL", "ftp://x")])).is_err());
        assert!(AppConfig::from_lookup(lookup_from(&[("NFTURES_HTTP_TIMEOUT_SECS", "0")])).is_err());
        assert!(AppConfig::from_lookup(lookup_from(&[("NFTURES_HTTP_TIMEOUT_SECS", "abc")])).is_err());
        assert!(AppConfig::from_lookup(lookup_from(&[("NFTURES_INSECURE_ECHO", "maybe")])).is_err());
    }
}

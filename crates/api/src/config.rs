//! Process configuration, read once at startup from the environment.
//!
//! The provider credential is mandatory: without it `AppConfig` cannot be
//! built, and without an `AppConfig` there is no router to serve uploads.

use std::net::SocketAddr;
use std::time::Duration;

use thiserror::Error;

use truthlens_ai::AnalysisSettings;
use truthlens_infra::OpenAiProvider;
use truthlens_observability::LogFormat;

pub const API_KEY_VAR: &str = "OPENAI_API_KEY";
pub const MODEL_VAR: &str = "TRUTHLENS_MODEL";
pub const TEMPERATURE_VAR: &str = "TRUTHLENS_TEMPERATURE";
pub const API_BASE_URL_VAR: &str = "TRUTHLENS_API_BASE_URL";
pub const BIND_ADDR_VAR: &str = "TRUTHLENS_BIND_ADDR";
pub const REQUEST_TIMEOUT_VAR: &str = "TRUTHLENS_REQUEST_TIMEOUT_SECS";
pub const MAX_UPLOAD_BYTES_VAR: &str = "TRUTHLENS_MAX_UPLOAD_BYTES";
pub const LOG_FORMAT_VAR: &str = "TRUTHLENS_LOG_FORMAT";

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 120;
const DEFAULT_MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing API key: set {0} before starting the server")]
    MissingCredential(&'static str),

    #[error("invalid {var}={value:?}: {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Provider credential. Non-empty by construction; never printed.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(raw: &str) -> Result<Self, ConfigError> {
        let key = raw.trim();
        if key.is_empty() {
            return Err(ConfigError::MissingCredential(API_KEY_VAR));
        }
        Ok(Self(key.to_string()))
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("ApiKey(<redacted>)")
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_key: ApiKey,
    pub analysis: AnalysisSettings,
    pub api_base_url: String,
    pub bind_addr: SocketAddr,
    pub request_timeout: Duration,
    pub max_upload_bytes: usize,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build from an arbitrary variable source (tests pass a map).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_key = lookup(API_KEY_VAR)
            .ok_or(ConfigError::MissingCredential(API_KEY_VAR))
            .and_then(|raw| ApiKey::new(&raw))?;

        let model = lookup(MODEL_VAR)
            .map(|m| m.trim().to_string())
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| AnalysisSettings::DEFAULT_MODEL.to_string());

        let temperature = match lookup(TEMPERATURE_VAR) {
            Some(raw) => {
                let t: f32 = parse_var(TEMPERATURE_VAR, &raw)?;
                if !(0.0..=2.0).contains(&t) {
                    return Err(invalid(TEMPERATURE_VAR, &raw, "must be within 0.0..=2.0"));
                }
                t
            }
            None => AnalysisSettings::DEFAULT_TEMPERATURE,
        };

        let api_base_url = lookup(API_BASE_URL_VAR)
            .map(|u| u.trim().to_string())
            .filter(|u| !u.is_empty())
            .unwrap_or_else(|| OpenAiProvider::DEFAULT_BASE_URL.to_string());
        if !(api_base_url.starts_with("http://") || api_base_url.starts_with("https://")) {
            return Err(invalid(API_BASE_URL_VAR, &api_base_url, "must be an http(s) URL"));
        }

        let bind_addr = parse_var(
            BIND_ADDR_VAR,
            &lookup(BIND_ADDR_VAR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
        )?;

        let timeout_secs: u64 = match lookup(REQUEST_TIMEOUT_VAR) {
            Some(raw) => parse_var(REQUEST_TIMEOUT_VAR, &raw)?,
            None => DEFAULT_REQUEST_TIMEOUT_SECS,
        };
        if timeout_secs == 0 {
            return Err(invalid(REQUEST_TIMEOUT_VAR, "0", "must be at least 1"));
        }

        let max_upload_bytes = match lookup(MAX_UPLOAD_BYTES_VAR) {
            Some(raw) => parse_var(MAX_UPLOAD_BYTES_VAR, &raw)?,
            None => DEFAULT_MAX_UPLOAD_BYTES,
        };

        Ok(Self {
            api_key,
            analysis: AnalysisSettings { model, temperature },
            api_base_url,
            bind_addr,
            request_timeout: Duration::from_secs(timeout_secs),
            max_upload_bytes,
        })
    }
}

/// Log format, read separately so logging can start before config validation.
pub fn log_format_from_env() -> LogFormat {
    std::env::var(LOG_FORMAT_VAR)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or_default()
}

fn parse_var<T>(var: &'static str, raw: &str) -> Result<T, ConfigError>
where
    T: core::str::FromStr,
    T::Err: core::fmt::Display,
{
    raw.trim().parse().map_err(|e: T::Err| invalid(var, raw, e.to_string()))
}

fn invalid(var: &'static str, value: &str, reason: impl Into<String>) -> ConfigError {
    ConfigError::Invalid {
        var,
        value: value.to_string(),
        reason: reason.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|k| map.get(k).cloned())
    }

    #[test]
    fn missing_credential_is_fatal() {
        assert_eq!(
            config(&[]).unwrap_err(),
            ConfigError::MissingCredential(API_KEY_VAR)
        );
    }

    #[test]
    fn blank_credential_is_fatal() {
        assert_eq!(
            config(&[(API_KEY_VAR, "   ")]).unwrap_err(),
            ConfigError::MissingCredential(API_KEY_VAR)
        );
    }

    #[test]
    fn defaults_apply_with_only_a_credential() {
        let cfg = config(&[(API_KEY_VAR, "sk-abc")]).unwrap();
        assert_eq!(cfg.api_key.expose(), "sk-abc");
        assert_eq!(cfg.analysis, AnalysisSettings::default());
        assert_eq!(cfg.api_base_url, "https://api.openai.com/v1");
        assert_eq!(cfg.bind_addr, "0.0.0.0:8080".parse().unwrap());
        assert_eq!(cfg.request_timeout, Duration::from_secs(120));
        assert_eq!(cfg.max_upload_bytes, 20 * 1024 * 1024);
    }

    #[test]
    fn overrides_are_read() {
        let cfg = config(&[
            (API_KEY_VAR, "sk-abc"),
            (MODEL_VAR, "gpt-4o-mini"),
            (TEMPERATURE_VAR, "0"),
            (API_BASE_URL_VAR, "http://localhost:9000/v1"),
            (BIND_ADDR_VAR, "127.0.0.1:3000"),
            (REQUEST_TIMEOUT_VAR, "30"),
            (MAX_UPLOAD_BYTES_VAR, "1024"),
        ])
        .unwrap();
        assert_eq!(cfg.analysis.model, "gpt-4o-mini");
        assert_eq!(cfg.analysis.temperature, 0.0);
        assert_eq!(cfg.api_base_url, "http://localhost:9000/v1");
        assert_eq!(cfg.bind_addr.port(), 3000);
        assert_eq!(cfg.request_timeout, Duration::from_secs(30));
        assert_eq!(cfg.max_upload_bytes, 1024);
    }

    #[test]
    fn bad_numbers_are_rejected() {
        let err = config(&[(API_KEY_VAR, "k"), (TEMPERATURE_VAR, "warm")]).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { var: TEMPERATURE_VAR, .. }));

        let err = config(&[(API_KEY_VAR, "k"), (TEMPERATURE_VAR, "3.5")]).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { var: TEMPERATURE_VAR, .. }));

        let err = config(&[(API_KEY_VAR, "k"), (REQUEST_TIMEOUT_VAR, "0")]).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { var: REQUEST_TIMEOUT_VAR, .. }));
    }

    #[test]
    fn key_is_redacted_in_debug_output() {
        let cfg = config(&[(API_KEY_VAR, "sk-secret")]).unwrap();
        assert!(!format!("{cfg:?}").contains("sk-secret"));
    }
}

//! Configuration module for the vanity hunter
//!
//! Everything is read from the environment, layered over an optional `.env`
//! file in the working directory. There are no CLI flags. Defaults come from
//! utils/constants.rs.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::info;

use crate::models::errors::{AppError, AppResult, ErrorCode};
use crate::utils::constants::{
    DEFAULT_OUTPUT_DIR, DEFAULT_PROGRESS_INTERVAL_MS, DEFAULT_PUSH_MAX_IN_FLIGHT,
    DEFAULT_PUSH_TIMEOUT_SECS, DEFAULT_WORKERS, DOTENV_FILE, ENV_OUTPUT_DIR, ENV_PROGRESS_INTERVAL_MS,
    ENV_PUSH_MAX_IN_FLIGHT, ENV_PUSH_TIMEOUT_SECS, ENV_PUSH_URL, ENV_WORKERS,
};

/// Configuration for the vanity hunter
#[derive(Debug, Clone)]
pub struct VanityConfig {
    /// Root directory for per-category match files
    pub output_dir: PathBuf,
    /// Notification endpoint; `None` disables pushes
    pub push_url: Option<String>,
    /// Number of generation loops
    pub workers: usize,
    /// Maximum concurrent push deliveries
    pub push_max_in_flight: usize,
    /// Timeout for a single push request
    pub push_timeout: Duration,
    /// Status line refresh period
    pub progress_interval: Duration,
}

impl Default for VanityConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            push_url: None,
            workers: DEFAULT_WORKERS,
            push_max_in_flight: DEFAULT_PUSH_MAX_IN_FLIGHT,
            push_timeout: Duration::from_secs(DEFAULT_PUSH_TIMEOUT_SECS),
            progress_interval: Duration::from_millis(DEFAULT_PROGRESS_INTERVAL_MS),
        }
    }
}

impl VanityConfig {
    /// Load configuration from the process environment and `./.env`
    pub fn from_env() -> AppResult<Self> {
        Self::from_env_file(DOTENV_FILE)
    }

    /// Process environment first, then the variables in `path`.
    /// A missing file is the same as an empty one.
    pub fn from_env_file(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let mut file_vars = HashMap::new();

        match dotenvy::from_path_iter(path) {
            Ok(iter) => {
                for item in iter {
                    let (key, value) = item.map_err(|e| {
                        AppError::new(
                            ErrorCode::ConfigInvalidValue,
                            format!("cannot parse {}: {}", path.display(), e),
                        )
                    })?;
                    file_vars.insert(key, value);
                }
                info!("Loaded {} variable(s) from {}", file_vars.len(), path.display());
            }
            Err(e) if e.not_found() => {}
            Err(e) => {
                return Err(AppError::new(
                    ErrorCode::ConfigInvalidValue,
                    format!("cannot read {}: {}", path.display(), e),
                ))
            }
        }

        Self::from_lookup(|key| std::env::var(key).ok().or_else(|| file_vars.get(key).cloned()))
    }

    /// Load configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let output_dir = lookup(ENV_OUTPUT_DIR)
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.output_dir);

        let push_url = lookup(ENV_PUSH_URL)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());

        let workers = parse_positive(&lookup, ENV_WORKERS)?.unwrap_or(defaults.workers);
        let push_max_in_flight = parse_positive(&lookup, ENV_PUSH_MAX_IN_FLIGHT)?
            .unwrap_or(defaults.push_max_in_flight);
        let push_timeout = parse_positive(&lookup, ENV_PUSH_TIMEOUT_SECS)?
            .map(|secs| Duration::from_secs(secs as u64))
            .unwrap_or(defaults.push_timeout);
        let progress_interval = parse_positive(&lookup, ENV_PROGRESS_INTERVAL_MS)?
            .map(|ms| Duration::from_millis(ms as u64))
            .unwrap_or(defaults.progress_interval);

        if push_url.is_some() {
            // URL may embed a token, keep it out of the logs
            info!("📨 {} configured, matches will be pushed", ENV_PUSH_URL);
        }

        Ok(Self {
            output_dir,
            push_url,
            workers,
            push_max_in_flight,
            push_timeout,
            progress_interval,
        })
    }
}

/// Parse an optional strictly positive integer setting
fn parse_positive<F>(lookup: &F, key: &str) -> AppResult<Option<usize>>
where
    F: Fn(&str) -> Option<String>,
{
    let raw = match lookup(key) {
        Some(raw) if !raw.trim().is_empty() => raw,
        _ => return Ok(None),
    };

    let value: usize = raw
        .trim()
        .parse()
        .map_err(|_| AppError::invalid_config(key, &raw, "expected a positive integer"))?;

    if value == 0 {
        return Err(AppError::invalid_config(key, &raw, "must be greater than zero"));
    }

    Ok(Some(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_env_empty() {
        let config = VanityConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.output_dir, PathBuf::from("address"));
        assert!(config.push_url.is_none());
        assert_eq!(config.workers, 1);
        assert_eq!(config.push_max_in_flight, 16);
        assert_eq!(config.push_timeout, Duration::from_secs(10));
        assert_eq!(config.progress_interval, Duration::from_millis(250));
    }

    #[test]
    fn test_overrides() {
        let config = VanityConfig::from_lookup(lookup_from(&[
            ("PUSH_URL", " https://hooks.example/vanity "),
            ("VANITY_OUTPUT_DIR", "/tmp/hits"),
            ("VANITY_WORKERS", "4"),
            ("PUSH_MAX_IN_FLIGHT", "2"),
            ("PUSH_TIMEOUT_SECS", "3"),
            ("PROGRESS_INTERVAL_MS", "1000"),
        ]))
        .unwrap();

        assert_eq!(config.push_url.as_deref(), Some("https://hooks.example/vanity"));
        assert_eq!(config.output_dir, PathBuf::from("/tmp/hits"));
        assert_eq!(config.workers, 4);
        assert_eq!(config.push_max_in_flight, 2);
        assert_eq!(config.push_timeout, Duration::from_secs(3));
        assert_eq!(config.progress_interval, Duration::from_secs(1));
    }

    #[test]
    fn test_blank_push_url_disables_push() {
        let config = VanityConfig::from_lookup(lookup_from(&[("PUSH_URL", "   ")])).unwrap();
        assert!(config.push_url.is_none());
    }

    #[test]
    fn test_zero_workers_rejected() {
        let err = VanityConfig::from_lookup(lookup_from(&[("VANITY_WORKERS", "0")])).unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigInvalidValue);
    }

    #[test]
    fn test_garbage_number_rejected() {
        let err =
            VanityConfig::from_lookup(lookup_from(&[("PUSH_TIMEOUT_SECS", "soon")])).unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigInvalidValue);
        assert!(err.message.contains("PUSH_TIMEOUT_SECS"));
    }

    #[test]
    fn test_dotenv_file_supplies_settings() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join(".env");
        std::fs::write(
            &path,
            "# local overrides\nVANITY_TEST_UNUSED=1\nPUSH_MAX_IN_FLIGHT=3\nPUSH_TIMEOUT_SECS=\"7\"\n",
        )
        .unwrap();

        let config = VanityConfig::from_env_file(&path).unwrap();
        assert_eq!(config.push_max_in_flight, 3);
        assert_eq!(config.push_timeout, Duration::from_secs(7));
    }

    #[test]
    fn test_missing_dotenv_file_uses_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let config = VanityConfig::from_env_file(tmp.path().join(".env")).unwrap();
        assert_eq!(config.push_max_in_flight, 16);
    }

    #[test]
    fn test_bad_value_in_dotenv_file_rejected() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join(".env");
        std::fs::write(&path, "PROGRESS_INTERVAL_MS=often\n").unwrap();

        let err = VanityConfig::from_env_file(&path).unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigInvalidValue);
    }
}

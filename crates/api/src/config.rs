use std::path::{Path, PathBuf};

use cyclear_core::error::CoreError;
use cyclear_core::lqs::LqsPolicy;

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Optional JSON file overriding the default LQS policy.
    pub lqs_policy_path: Option<PathBuf>,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `LQS_POLICY_PATH`      | unset (default policy)     |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins = parse_origins(
            &std::env::var("CORS_ORIGINS").unwrap_or_else(|_| "http://localhost:5173".into()),
        );

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let lqs_policy_path = std::env::var("LQS_POLICY_PATH")
            .ok()
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            lqs_policy_path,
        }
    }

    /// Resolve the scoring policy: the configured file, or the default.
    pub fn load_policy(&self) -> Result<LqsPolicy, ConfigError> {
        match &self.lqs_policy_path {
            Some(path) => load_policy(path),
            None => Ok(LqsPolicy::default()),
        }
    }
}

/// Errors raised while loading configuration files.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read LQS policy file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Invalid(#[from] CoreError),
}

/// Read and validate an LQS policy JSON file.
pub fn load_policy(path: &Path) -> Result<LqsPolicy, ConfigError> {
    let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.display().to_string(),
        source,
    })?;
    Ok(LqsPolicy::from_json_str(&json)?)
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn origins_are_trimmed_and_blank_entries_dropped() {
        assert_eq!(
            parse_origins(" http://a.test , ,http://b.test"),
            vec!["http://a.test".to_string(), "http://b.test".to_string()]
        );
    }

    #[test]
    fn policy_file_is_loaded() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"visual_baseline": 15, "health": {{"healthy_from": 85}}}}"#).unwrap();

        let policy = load_policy(file.path()).unwrap();
        assert_eq!(policy.visual_baseline, 15.0);
        assert_eq!(policy.health.healthy_from, 85);
        assert_eq!(policy.health.warning_from, 50);
    }

    #[test]
    fn invalid_policy_file_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"health": {{"warning_from": 90, "healthy_from": 10}}}}"#).unwrap();

        assert_matches!(
            load_policy(file.path()),
            Err(ConfigError::Invalid(CoreError::Validation(_)))
        );
    }

    #[test]
    fn missing_policy_file_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");
        assert_matches!(load_policy(&path), Err(ConfigError::Read { .. }));
    }

    #[test]
    fn no_path_means_default_policy() {
        let config = ServerConfig {
            host: "127.0.0.1".into(),
            port: 0,
            cors_origins: vec![],
            request_timeout_secs: 30,
            lqs_policy_path: None,
        };
        assert_eq!(config.load_policy().unwrap(), LqsPolicy::default());
    }
}

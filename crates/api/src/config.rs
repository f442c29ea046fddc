use std::str::FromStr;

use crate::auth::jwt::JwtConfig;

/// Error raised when the environment does not describe a usable configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set in the environment")]
    Missing(&'static str),

    #[error("{key} must be a valid {expected}, got '{value}'")]
    Invalid {
        key: &'static str,
        expected: &'static str,
        value: String,
    },
}

/// Server configuration loaded from environment variables.
///
/// Everything except `JWT_SECRET` has a default suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8000`).
    pub port: u16,
    /// Postgres connection string.
    pub database_url: String,
    /// Upper bound on pooled connections (default: `10`).
    pub db_max_connections: u32,
    /// Apply the bundled migrations at startup (default: `false`).
    pub run_migrations: bool,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    /// A single `*` allows any origin.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// JWT token configuration (secret, expiry).
    pub jwt: JwtConfig,
}

/// One year.
const MAX_ACCESS_EXPIRY_MINS: i64 = 525_600;

const DEFAULT_CORS_ORIGINS: &str = "http://localhost:3000,http://localhost:8080";

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                       | Default                                        |
    /// |-------------------------------|------------------------------------------------|
    /// | `HOST`                        | `0.0.0.0`                                      |
    /// | `PORT`                        | `8000`                                         |
    /// | `DATABASE_URL`                | built from the `DB_*` variables below          |
    /// | `DB_HOST`                     | `localhost`                                    |
    /// | `DB_PORT`                     | `5432`                                         |
    /// | `DB_USER`                     | `postgres`                                     |
    /// | `DB_PASSWORD`                 | empty                                          |
    /// | `DB_NAME`                     | `stream_box`                                   |
    /// | `DB_MAX_CONNECTIONS`          | `10`                                           |
    /// | `DB_RUN_MIGRATIONS`           | `false`                                        |
    /// | `JWT_SECRET`                  | **required**                                   |
    /// | `ACCESS_TOKEN_EXPIRE_MINUTES` | `100`                                          |
    /// | `CORS_ORIGINS`                | `http://localhost:3000,http://localhost:8080`  |
    /// | `REQUEST_TIMEOUT_SECS`        | `30`                                           |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let host = get("HOST").unwrap_or_else(|| "0.0.0.0".into());
        let port = parse_or(&get, "PORT", 8000u16, "u16")?;

        let database_url = match get("DATABASE_URL") {
            Some(url) => url,
            None => {
                let db_host = get("DB_HOST").unwrap_or_else(|| "localhost".into());
                let db_port = parse_or(&get, "DB_PORT", 5432u16, "u16")?;
                let db_user = get("DB_USER").unwrap_or_else(|| "postgres".into());
                let db_password = get("DB_PASSWORD").unwrap_or_default();
                let db_name = get("DB_NAME").unwrap_or_else(|| "stream_box".into());
                format!("postgres://{db_user}:{db_password}@{db_host}:{db_port}/{db_name}")
            }
        };

        let db_max_connections = parse_or(&get, "DB_MAX_CONNECTIONS", 10u32, "u32")?;
        let run_migrations = parse_or(&get, "DB_RUN_MIGRATIONS", false, "bool")?;

        let cors_origins: Vec<String> = get("CORS_ORIGINS")
            .unwrap_or_else(|| DEFAULT_CORS_ORIGINS.into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs = parse_or(&get, "REQUEST_TIMEOUT_SECS", 30u64, "u64")?;

        let secret = get("JWT_SECRET").ok_or(ConfigError::Missing("JWT_SECRET"))?;
        let access_token_expiry_mins = parse_or(
            &get,
            "ACCESS_TOKEN_EXPIRE_MINUTES",
            crate::auth::jwt::DEFAULT_ACCESS_EXPIRY_MINS,
            "i64",
        )?;
        if !(1..=MAX_ACCESS_EXPIRY_MINS).contains(&access_token_expiry_mins) {
            return Err(ConfigError::Invalid {
                key: "ACCESS_TOKEN_EXPIRE_MINUTES",
                expected: "number of minutes between 1 and 525600",
                value: access_token_expiry_mins.to_string(),
            });
        }

        Ok(Self {
            host,
            port,
            database_url,
            db_max_connections,
            run_migrations,
            cors_origins,
            request_timeout_secs,
            jwt: JwtConfig {
                secret,
                access_token_expiry_mins,
            },
        })
    }

    /// Whether `CORS_ORIGINS` allows every origin.
    pub fn allows_any_origin(&self) -> bool {
        self.cors_origins.iter().any(|o| o == "*")
    }
}

fn parse_or<G, T>(get: &G, key: &'static str, default: T, expected: &'static str) -> Result<T, ConfigError>
where
    G: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match get(key) {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid {
            key,
            expected,
            value: raw,
        }),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use assert_matches::assert_matches;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_only_the_secret_is_set() {
        let config = load(&[("JWT_SECRET", "s3cret")]).unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8000);
        assert_eq!(config.database_url, "postgres://postgres:@localhost:5432/stream_box");
        assert_eq!(config.db_max_connections, 10);
        assert!(!config.run_migrations);
        assert_eq!(
            config.cors_origins,
            vec!["http://localhost:3000", "http://localhost:8080"]
        );
        assert_eq!(config.request_timeout_secs, 30);
        assert_eq!(config.jwt.access_token_expiry_mins, 100);
        assert!(!config.allows_any_origin());
    }

    #[test]
    fn missing_secret_is_an_error() {
        assert_matches!(load(&[]), Err(ConfigError::Missing("JWT_SECRET")));
        assert_matches!(
            load(&[("JWT_SECRET", "  ")]),
            Err(ConfigError::Missing("JWT_SECRET"))
        );
    }

    #[test]
    fn database_url_is_built_from_parts() {
        let config = load(&[
            ("JWT_SECRET", "x"),
            ("DB_HOST", "db"),
            ("DB_PORT", "6543"),
            ("DB_USER", "stream"),
            ("DB_PASSWORD", "pw"),
            ("DB_NAME", "videos"),
        ])
        .unwrap();
        assert_eq!(config.database_url, "postgres://stream:pw@db:6543/videos");
    }

    #[test]
    fn explicit_database_url_wins() {
        let config = load(&[
            ("JWT_SECRET", "x"),
            ("DATABASE_URL", "postgres://a:b@c/d"),
            ("DB_HOST", "ignored"),
        ])
        .unwrap();
        assert_eq!(config.database_url, "postgres://a:b@c/d");
    }

    #[test]
    fn overrides_are_parsed() {
        let config = load(&[
            ("JWT_SECRET", "x"),
            ("PORT", "9000"),
            ("DB_RUN_MIGRATIONS", "true"),
            ("ACCESS_TOKEN_EXPIRE_MINUTES", "5"),
            ("CORS_ORIGINS", " * "),
        ])
        .unwrap();
        assert_eq!(config.port, 9000);
        assert!(config.run_migrations);
        assert_eq!(config.jwt.access_token_expiry_mins, 5);
        assert!(config.allows_any_origin());
    }

    #[test]
    fn malformed_numbers_are_rejected() {
        assert_matches!(
            load(&[("JWT_SECRET", "x"), ("PORT", "eighty")]),
            Err(ConfigError::Invalid { key: "PORT", .. })
        );
        assert_matches!(
            load(&[("JWT_SECRET", "x"), ("DB_RUN_MIGRATIONS", "yes")]),
            Err(ConfigError::Invalid { key: "DB_RUN_MIGRATIONS", .. })
        );
    }

    #[test]
    fn token_lifetime_must_be_positive_and_bounded() {
        for value in ["0", "-5", "525601", "9223372036854775807"] {
            assert_matches!(
                load(&[("JWT_SECRET", "x"), ("ACCESS_TOKEN_EXPIRE_MINUTES", value)]),
                Err(ConfigError::Invalid { key: "ACCESS_TOKEN_EXPIRE_MINUTES", .. }),
                "{value} should be rejected"
            );
        }
        let config = load(&[("JWT_SECRET", "x"), ("ACCESS_TOKEN_EXPIRE_MINUTES", "525600")]).unwrap();
        assert_eq!(config.jwt.expires_in_secs(), 525_600 * 60);
    }
}

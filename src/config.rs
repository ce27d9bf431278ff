use std::env;
use std::time::Duration;

use sea_orm::ConnectOptions;
use url::Url;

use crate::auth::adapter::outgoing::jwt::{IdentityAssertionConfig, JwtConfig};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("{key} has an invalid value: {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// Postgres connection settings. Certificate verification is on unless
/// `DB_ALLOW_INSECURE_TLS` is set outside production.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub user: String,
    pub password: String,
    pub host: String,
    pub port: u16,
    pub name: String,
    pub ssl_mode: String,
    pub max_connections: u32,
}

impl DatabaseConfig {
    /// Credentials and database name are percent-encoded, so reserved characters
    /// in a password cannot move the host or drop the `sslmode` parameter.
    pub fn url(&self) -> Result<String, ConfigError> {
        let mut url = Url::parse("postgres://localhost").map_err(|e| invalid("DB_HOST", e))?;
        url.set_host(Some(&self.host))
            .map_err(|e| invalid("DB_HOST", e))?;
        url.set_port(Some(self.port))
            .map_err(|_| invalid("DB_PORT", "cannot be set on this URL"))?;
        url.set_username(&self.user)
            .map_err(|_| invalid("DB_USER", "cannot be set on this URL"))?;
        url.set_password(Some(&self.password))
            .map_err(|_| invalid("DB_PASSWORD", "cannot be set on this URL"))?;
        url.path_segments_mut()
            .map_err(|_| invalid("DB_NAME", "cannot be set on this URL"))?
            .push(&self.name);
        url.query_pairs_mut().append_pair("sslmode", &self.ssl_mode);

        Ok(url.into())
    }

    pub fn connect_options(&self) -> Result<ConnectOptions, ConfigError> {
        let mut opt = ConnectOptions::new(self.url()?);
        opt.max_connections(self.max_connections)
            .min_connections(1)
            .connect_timeout(Duration::from_secs(5))
            .acquire_timeout(Duration::from_secs(5))
            .idle_timeout(Duration::from_secs(300))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false);
        Ok(opt)
    }
}

fn invalid(key: &'static str, reason: impl std::fmt::Display) -> ConfigError {
    ConfigError::Invalid {
        key,
        reason: reason.to_string(),
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: String,
    pub host: String,
    pub port: u16,
    pub database: DatabaseConfig,
    pub session: JwtConfig,
    pub identity: IdentityAssertionConfig,
    pub allowed_email_domain: String,
    pub run_migrations: bool,
}

impl AppConfig {
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Loads `.env.{RUST_ENV}` (falling back to `.env`) and reads the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let environment = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
        let env_file = format!(".env.{}", environment);
        if dotenvy::from_filename(&env_file).is_err() {
            dotenvy::dotenv().ok();
        }

        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = lookup("RUST_ENV").unwrap_or_else(|| "development".to_string());
        let is_production = environment == "production";

        let allow_insecure_tls = parse_bool(&lookup, "DB_ALLOW_INSECURE_TLS", false)?;
        if allow_insecure_tls && is_production {
            return Err(ConfigError::Invalid {
                key: "DB_ALLOW_INSECURE_TLS",
                reason: "insecure TLS is not allowed in production".to_string(),
            });
        }

        let ssl_mode = if allow_insecure_tls {
            "require".to_string()
        } else {
            let mode = lookup("DB_SSL_MODE").unwrap_or_else(|| "verify-full".to_string());
            match mode.as_str() {
                "verify-full" | "verify-ca" => mode,
                "disable" | "prefer" | "require" => {
                    return Err(ConfigError::Invalid {
                        key: "DB_SSL_MODE",
                        reason: format!(
                            "'{}' skips certificate verification; set DB_ALLOW_INSECURE_TLS instead",
                            mode
                        ),
                    })
                }
                other => {
                    return Err(ConfigError::Invalid {
                        key: "DB_SSL_MODE",
                        reason: format!("unknown sslmode '{}'", other),
                    })
                }
            }
        };

        let database = DatabaseConfig {
            user: required(&lookup, "DB_USER")?,
            password: required(&lookup, "DB_PASSWORD")?,
            host: required(&lookup, "DB_HOST")?,
            port: parse_number(&lookup, "DB_PORT", 5432)?,
            name: required(&lookup, "DB_NAME")?,
            ssl_mode,
            max_connections: parse_number(&lookup, "DB_MAX_CONNECTIONS", 20)?,
        };
        database.url()?;

        let secret_key = required(&lookup, "SESSION_SECRET")?;
        if secret_key.len() < 32 {
            return Err(ConfigError::Invalid {
                key: "SESSION_SECRET",
                reason: "must be at least 32 characters long for HS256".to_string(),
            });
        }

        let session_ttl: i64 = parse_number(&lookup, "SESSION_TTL_SECONDS", 86400)?;
        if session_ttl <= 0 || session_ttl > 7 * 86400 {
            return Err(ConfigError::Invalid {
                key: "SESSION_TTL_SECONDS",
                reason: "must be between 1 second and 7 days".to_string(),
            });
        }

        let session = JwtConfig {
            secret_key,
            issuer: lookup("SESSION_ISSUER").unwrap_or_else(|| "campus-events".to_string()),
            session_token_expiry: session_ttl,
        };

        let identity = IdentityAssertionConfig {
            client_id: required(&lookup, "IDP_CLIENT_ID")?,
            client_secret: required(&lookup, "IDP_CLIENT_SECRET")?,
        };

        let allowed_email_domain = lookup("ALLOWED_EMAIL_DOMAIN")
            .unwrap_or_else(|| "gitam.in".to_string())
            .trim()
            .trim_start_matches('@')
            .to_lowercase();
        if allowed_email_domain.is_empty() {
            return Err(ConfigError::Invalid {
                key: "ALLOWED_EMAIL_DOMAIN",
                reason: "must not be empty".to_string(),
            });
        }

        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: parse_number(&lookup, "PORT", 8080)?,
            run_migrations: parse_bool(&lookup, "RUN_MIGRATIONS", true)?,
            environment,
            database,
            session,
            identity,
            allowed_email_domain,
        })
    }
}

fn required<F>(lookup: &F, key: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ConfigError::Missing(key)),
    }
}

fn parse_number<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw.trim().parse::<T>().map_err(|e| ConfigError::Invalid {
            key,
            reason: e.to_string(),
        }),
    }
}

fn parse_bool<F>(lookup: &F, key: &'static str, default: bool) -> Result<bool, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key).as_deref().map(str::trim) {
        None => Ok(default),
        Some("1") | Some("true") | Some("yes") => Ok(true),
        Some("0") | Some("false") | Some("no") => Ok(false),
        Some(other) => Err(ConfigError::Invalid {
            key,
            reason: format!("expected true/false, got '{}'", other),
        }),
    }
}

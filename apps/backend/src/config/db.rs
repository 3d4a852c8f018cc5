use std::env;
use std::time::Duration;

use crate::error::AppError;

pub const DEFAULT_SQLITE_FILE: &str = "aventura.sqlite";

/// Which database the backend talks to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DbProfile {
    /// Postgres, configured from POSTGRES_* / AVENTURA_DB / APP_DB_* variables
    Postgres,
    /// SQLite database file, created if missing
    SqliteFile { file: String },
    /// Private in-memory SQLite database (tests, demos)
    InMemory,
}

impl DbProfile {
    /// Read `DB_KIND` (`postgres` | `sqlite-file` | `sqlite-memory`), default `postgres`.
    pub fn from_env() -> Result<Self, AppError> {
        let kind = env::var("DB_KIND").unwrap_or_else(|_| "postgres".to_string());
        match kind.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(Self::Postgres),
            "sqlite-file" | "sqlite" => Ok(Self::SqliteFile {
                file: env::var("SQLITE_FILE").unwrap_or_else(|_| DEFAULT_SQLITE_FILE.to_string()),
            }),
            "sqlite-memory" | "memory" => Ok(Self::InMemory),
            other => Err(AppError::config(format!(
                "DB_KIND must be one of postgres | sqlite-file | sqlite-memory, got '{other}'"
            ))),
        }
    }

    pub fn is_sqlite(&self) -> bool {
        !matches!(self, Self::Postgres)
    }

    pub fn engine(&self) -> &'static str {
        match self {
            Self::Postgres => "postgres",
            Self::SqliteFile { .. } => "sqlite-file",
            Self::InMemory => "sqlite-memory",
        }
    }
}

/// Builds a database URL for `profile` from environment variables
pub fn db_url(profile: &DbProfile) -> Result<String, AppError> {
    match profile {
        DbProfile::Postgres => {
            let host = env::var("POSTGRES_HOST").unwrap_or_else(|_| "localhost".to_string());
            let port = env::var("POSTGRES_PORT").unwrap_or_else(|_| "5432".to_string());
            let db_name = must_var("AVENTURA_DB")?;
            let username = must_var("APP_DB_USER")?;
            let password = must_var("APP_DB_PASSWORD")?;
            Ok(format!(
                "postgresql://{username}:{password}@{host}:{port}/{db_name}"
            ))
        }
        DbProfile::SqliteFile { file } => Ok(format!("sqlite://{file}?mode=rwc")),
        DbProfile::InMemory => Ok("sqlite::memory:".to_string()),
    }
}

/// Connection pool sizing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolSettings {
    pub max_connections: u32,
    pub min_connections: u32,
    pub acquire_timeout: Duration,
}

impl Default for PoolSettings {
    fn default() -> Self {
        Self {
            max_connections: 10,
            min_connections: 1,
            acquire_timeout: Duration::from_millis(5000),
        }
    }
}

impl PoolSettings {
    /// `DB_POOL_MAX`, `DB_POOL_MIN`, `DB_ACQUIRE_TIMEOUT_MS`
    pub fn from_env() -> Result<Self, AppError> {
        let defaults = Self::default();
        let max_connections = parse_var("DB_POOL_MAX", defaults.max_connections)?;
        let min_connections = parse_var("DB_POOL_MIN", defaults.min_connections)?;
        let acquire_ms = parse_var("DB_ACQUIRE_TIMEOUT_MS", 5000u64)?;

        if max_connections == 0 || min_connections > max_connections {
            return Err(AppError::config(format!(
                "invalid pool sizing: min={min_connections} max={max_connections}"
            )));
        }

        Ok(Self {
            max_connections,
            min_connections,
            acquire_timeout: Duration::from_millis(acquire_ms),
        })
    }

    /// SQLite profiles are pinned to a single connection.
    ///
    /// Every connection to `sqlite::memory:` opens its own database. A file
    /// database has one writer, and two deferred transactions that both read
    /// before writing cannot both upgrade; one connection makes requests
    /// queue on acquire instead of failing with `database is locked`.
    pub fn for_profile(self, profile: &DbProfile) -> Self {
        if profile.is_sqlite() {
            Self {
                max_connections: 1,
                min_connections: 1,
                ..self
            }
        } else {
            self
        }
    }
}

fn parse_var<T: std::str::FromStr>(name: &str, default: T) -> Result<T, AppError> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| AppError::config(format!("{name} must be a number, got '{raw}'"))),
        Err(_) => Ok(default),
    }
}

/// Get required environment variable or return error
fn must_var(name: &str) -> Result<String, AppError> {
    env::var(name)
        .map_err(|_| AppError::config(format!("Required environment variable '{name}' is not set")))
}

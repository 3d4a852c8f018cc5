use std::future::Future;
use std::str::FromStr;
use std::time::Duration;

use migration::{migrate, MigrationCommand};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, SqlxSqliteConnector};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tracing::{info, trace, warn};

use crate::config::db::{db_url, DbProfile, PoolSettings};
use crate::error::AppError;
use crate::logging::pii::Redacted;

const CONNECT_ATTEMPTS: u32 = 5;
const CONNECT_RETRY_INTERVAL_MS: u64 = 500;

/// How long a SQLite connection waits on a lock held by another process
const SQLITE_BUSY_TIMEOUT_MS: u64 = 5000;

async fn retry_connection<T, F, Fut>(
    mut connect_fn: F,
    max_attempts: u32,
    interval_ms: u64,
) -> Result<T, AppError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, AppError>>,
{
    let mut attempt = 1;
    loop {
        match connect_fn().await {
            Ok(result) => {
                if attempt > 1 {
                    info!("connection_retry=success attempts={attempt} interval_ms={interval_ms}");
                }
                return Ok(result);
            }
            Err(e) if attempt < max_attempts => {
                warn!(
                    "connection_retry=failed attempt={attempt} max_attempts={max_attempts} \
                     interval_ms={interval_ms} error={e}"
                );
                tokio::time::sleep(Duration::from_millis(interval_ms)).await;
                attempt += 1;
            }
            Err(e) => return Err(e),
        }
    }
}

/// Open a pooled connection for `profile`. Does NOT run migrations.
pub async fn connect_db(
    profile: &DbProfile,
    pool: &PoolSettings,
) -> Result<DatabaseConnection, AppError> {
    let url = db_url(profile)?;
    let pool = pool.clone().for_profile(profile);

    info!(
        "pool=connecting engine={} min={} max={} acquire_timeout_ms={}",
        profile.engine(),
        pool.min_connections,
        pool.max_connections,
        pool.acquire_timeout.as_millis()
    );

    if profile.is_sqlite() {
        return build_sqlite_pool(profile, &url, &pool).await;
    }

    let mut opt = ConnectOptions::new(&url);
    opt.max_connections(pool.max_connections)
        .min_connections(pool.min_connections)
        .acquire_timeout(pool.acquire_timeout)
        .sqlx_logging(false);

    let connect = || {
        let opt = opt.clone();
        async move {
            Database::connect(opt).await.map_err(|e| {
                AppError::config(format!(
                    "failed to connect to database: {}",
                    Redacted(&e.to_string())
                ))
            })
        }
    };

    // Postgres may still be starting up
    retry_connection(connect, CONNECT_ATTEMPTS, CONNECT_RETRY_INTERVAL_MS).await
}

/// Per-connection PRAGMAs; WAL only makes sense for a file.
fn sqlite_pragmas(profile: &DbProfile) -> Vec<String> {
    let mut pragmas = vec![
        format!("PRAGMA busy_timeout = {SQLITE_BUSY_TIMEOUT_MS};"),
        "PRAGMA foreign_keys = ON;".to_string(),
    ];
    if matches!(profile, DbProfile::SqliteFile { .. }) {
        pragmas.push("PRAGMA journal_mode = WAL;".to_string());
        pragmas.push("PRAGMA synchronous = NORMAL;".to_string());
    }
    pragmas
}

/// SQLite pool built with sqlx so every connection gets its PRAGMAs, then
/// handed to SeaORM. Local, so no retry.
async fn build_sqlite_pool(
    profile: &DbProfile,
    url: &str,
    pool: &PoolSettings,
) -> Result<DatabaseConnection, AppError> {
    let connect_opts = SqliteConnectOptions::from_str(url)
        .map_err(|e| AppError::config(format!("invalid SQLite connection options: {e}")))?
        .create_if_missing(true);

    let pragmas = sqlite_pragmas(profile);
    let sqlite_pool = SqlitePoolOptions::new()
        .min_connections(pool.min_connections)
        .max_connections(pool.max_connections)
        .acquire_timeout(pool.acquire_timeout)
        .after_connect(move |conn, _meta| {
            let pragmas = pragmas.clone();
            Box::pin(async move {
                for pragma in &pragmas {
                    sqlx::query(pragma).execute(&mut *conn).await?;
                }
                trace!("db=sqlite hook=after_connect ok");
                Ok::<_, sqlx::Error>(())
            })
        })
        .connect_with(connect_opts)
        .await
        .map_err(|e| {
            AppError::config(format!(
                "failed to create SQLite connection pool: {}",
                Redacted(&e.to_string())
            ))
        })?;

    Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(sqlite_pool))
}

/// Connect *and* bring the schema up to date.
///
/// For the in-memory profile the migration must run on the same single
/// connection that is handed back, otherwise the schema lands in a
/// database nobody else sees.
pub async fn bootstrap_db(
    profile: &DbProfile,
    pool: &PoolSettings,
) -> Result<DatabaseConnection, AppError> {
    info!("bootstrap=start engine={}", profile.engine());

    let conn = connect_db(profile, pool).await?;
    migrate(&conn, MigrationCommand::Up)
        .await
        .map_err(|e| AppError::config(format!("migration failed: {e}")))?;

    info!("bootstrap=ready engine={}", profile.engine());
    Ok(conn)
}

use backend::config::db::{DbProfile, PoolSettings};
use backend::infra::db::connect_db;
use clap::Parser;
use migration::MigrationCommand;
use sea_orm::{Database, DatabaseConnection};
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "migration-cli")]
#[command(about = "Aventura Matemática ranking database migration tool")]
struct Args {
    /// Migration command: up | down | fresh | reset | refresh | status
    command: MigrationCommand,

    /// Connect to this URL instead of the DB_KIND / POSTGRES_* environment
    #[arg(long, env = "DATABASE_URL")]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stdout)
        .without_time()
        .with_target(false)
        .with_env_filter("migration=info,migration_cli=info,sqlx=warn")
        .init();

    let args = Args::parse();

    let conn = match connect(args.database_url.as_deref()).await {
        Ok(conn) => conn,
        Err(e) => {
            error!(error = %e, "could not connect");
            std::process::exit(1);
        }
    };

    if let Err(e) = migration::migrate(&conn, args.command).await {
        error!(error = %e, command = ?args.command, "migration failed");
        std::process::exit(1);
    }
    info!(command = ?args.command, "migration finished");
}

async fn connect(url: Option<&str>) -> Result<DatabaseConnection, String> {
    if let Some(url) = url {
        return Database::connect(url).await.map_err(|e| e.to_string());
    }

    let profile = DbProfile::from_env().map_err(|e| e.to_string())?;
    if profile == DbProfile::InMemory {
        // Nothing would survive the process; refuse rather than pretend
        return Err("in-memory SQLite is not supported for CLI migrations".to_string());
    }
    connect_db(&profile, &PoolSettings::default())
        .await
        .map_err(|e| e.to_string())
}

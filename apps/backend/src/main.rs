use actix_web::{web, App, HttpServer};
use backend::config::db::{DbProfile, PoolSettings};
use backend::config::server::ServerConfig;
use backend::infra::state::build_state;
use backend::middleware::{cors_middleware, RequestTrace, StructuredLogger, TraceSpan};
use backend::routes;
use tracing::{error, info};

mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    // Configuration comes from the process environment only
    let (server, profile, pool) = match load_config() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    info!(
        host = %server.host,
        port = server.port,
        db = profile.engine(),
        "starting Aventura Matemática ranking backend"
    );

    let app_state = match build_state().with_db(profile).with_pool(pool).build().await {
        Ok(state) => state,
        Err(e) => {
            error!(error = %e, "failed to build application state");
            std::process::exit(1);
        }
    };

    info!("database connected and migrated");

    let data = web::Data::new(app_state);

    HttpServer::new(move || {
        App::new()
            .wrap(cors_middleware())
            .wrap(StructuredLogger)
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((server.host.as_str(), server.port))?
    .run()
    .await
}

fn load_config() -> Result<(ServerConfig, DbProfile, PoolSettings), backend::AppError> {
    Ok((
        ServerConfig::from_env()?,
        DbProfile::from_env()?,
        PoolSettings::from_env()?,
    ))
}

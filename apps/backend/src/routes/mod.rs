use actix_web::web;

pub mod health;
pub mod ranking;
pub mod root;

/// Register every route. Used by `main.rs` and by the test app builder,
/// so both serve the same paths.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Welcome/status: /
    cfg.configure(root::configure_routes);

    // Health check: /health
    cfg.service(web::scope("/health").configure(health::configure_routes));

    // Leaderboard: /ranking
    cfg.service(web::scope("/ranking").configure(ranking::configure_routes));
}

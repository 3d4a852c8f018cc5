use actix_web::{web, HttpResponse};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct RootResponse {
    message: &'static str,
    endpoints: [&'static str; 2],
}

/// Status/welcome document listing the ranking endpoints
async fn root() -> HttpResponse {
    HttpResponse::Ok().json(RootResponse {
        message: "API do Ranking da Aventura Matemática está online!",
        endpoints: ["GET /ranking", "POST /ranking"],
    })
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(root));
}

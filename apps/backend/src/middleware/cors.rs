use std::env;

use actix_cors::Cors;
use actix_web::http::header;

const DEFAULT_ORIGINS: [&str; 4] = [
    "http://localhost:3000",
    "http://127.0.0.1:3000",
    "http://localhost:5500",
    "http://127.0.0.1:5500",
];

/// Comma-separated origins from `CORS_ALLOWED_ORIGINS`. Unset or `*` allows
/// any origin, which the browser client needs when opened from `file://`.
/// Entries that are empty, `null`, or not http(s) are ignored.
fn allowed_origins(raw: Option<&str>) -> Option<Vec<String>> {
    let raw = raw?;
    if raw.trim() == "*" {
        return None;
    }

    let origins: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty() && *s != "null")
        .filter(|s| s.starts_with("http://") || s.starts_with("https://"))
        .map(str::to_string)
        .collect();

    if origins.is_empty() {
        Some(DEFAULT_ORIGINS.iter().map(|s| s.to_string()).collect())
    } else {
        Some(origins)
    }
}

/// CORS for the browser client: GET/POST only, JSON bodies.
pub fn cors_middleware() -> Cors {
    let raw = env::var("CORS_ALLOWED_ORIGINS").ok();
    cors_for(raw.as_deref())
}

fn cors_for(raw: Option<&str>) -> Cors {
    let cors = Cors::default()
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(vec![header::CONTENT_TYPE, header::ACCEPT])
        .expose_headers(vec![header::HeaderName::from_static("x-trace-id")])
        .max_age(3600);

    match allowed_origins(raw) {
        None => cors.allow_any_origin(),
        Some(origins) => origins
            .iter()
            .fold(cors, |cors, origin| cors.allowed_origin(origin)),
    }
}

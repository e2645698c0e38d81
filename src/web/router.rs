use axum::{http::Method, routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use crate::web::handlers::{about, api_links, healthz, index, links_htmx, metrics_text};
use crate::web::state::AppState;

pub fn app_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET])
        .allow_headers(Any);

    let api = Router::new().route("/links", get(api_links)).layer(cors);

    Router::new()
        .route("/", get(index))
        .route("/links", get(links_htmx))
        .route("/about", get(about))
        .route("/healthz", get(healthz))
        .route("/metrics", get(metrics_text))
        .nest("/api", api)
        .nest_service("/static", ServeDir::new("static"))
        .with_state(state)
}

use askama::Template;
use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::{Html, IntoResponse, Json, Response},
};
use serde_json::json;
use tracing::{debug, error};

use crate::error::WizardError;
use crate::metrics;
use crate::web::models::{LinkParams, LinksResponse, Listing};
use crate::web::state::AppState;
use crate::web::templates::{AboutTemplate, IndexTemplate, LinksListTemplate};

fn render_html<T: Template>(template: &T) -> Response {
    match template.render().map_err(WizardError::from) {
        Ok(body) => Html(body).into_response(),
        Err(e) => {
            error!("{}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Template rendering failed").into_response()
        }
    }
}

fn build_listing(state: &AppState, params: &LinkParams) -> Listing {
    let query = params.to_query();
    let listing = Listing::build(&state.catalog, &query);
    debug!(query = %query.query, category = query.category.as_param(), shown = listing.shown, "Filtered links");
    metrics::record_filter(listing.shown);
    listing
}

pub async fn index(State(state): State<AppState>, Query(params): Query<LinkParams>) -> Response {
    metrics::record_page_view("index");
    let template = IndexTemplate {
        app_name: state.app_name.clone(),
        listing: build_listing(&state, &params),
    };
    render_html(&template)
}

pub async fn links_htmx(
    State(state): State<AppState>,
    Query(params): Query<LinkParams>,
    headers: HeaderMap,
) -> Response {
    metrics::record_page_view("links");
    let listing = build_listing(&state, &params);

    // If it's an HTMX request, return just the partial. Otherwise, return the full page.
    if headers.contains_key("HX-Request") {
        render_html(&LinksListTemplate { listing })
    } else {
        render_html(&IndexTemplate {
            app_name: state.app_name.clone(),
            listing,
        })
    }
}

pub async fn about(State(state): State<AppState>) -> Response {
    metrics::record_page_view("about");
    render_html(&AboutTemplate {
        app_name: state.app_name.clone(),
    })
}

pub async fn api_links(State(state): State<AppState>, Query(params): Query<LinkParams>) -> Response {
    metrics::record_page_view("api_links");
    let matched = state.catalog.filter(&params.to_query());
    let links = params.page(matched);
    let body = LinksResponse {
        app: &state.app_name,
        count: links.len(),
        links,
    };
    Json(body).into_response()
}

pub async fn healthz() -> impl IntoResponse {
    Json(json!({ "ok": true }))
}

pub async fn metrics_text() -> Response {
    match metrics::render() {
        Some(body) => (StatusCode::OK, body).into_response(),
        None => (StatusCode::SERVICE_UNAVAILABLE, "metrics recorder not installed").into_response(),
    }
}

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;
use wizardwebb::catalog::{parse_links, Catalog};
use wizardwebb::web::{app_router, AppState};

const LINKS: &str = r#"
- {id: ddg, name: DuckDuckGo, url: "https://duckduckgo.com", category: Search, tags: [privacy]}
- {id: wmn, name: WhatsMyName, category: OSINT, tags: usernames, status: omitted}
- {id: r101, name: Regex Tester, url: "https://regex101.com", category: Web Tools, status: caution}
"#;

fn app() -> Router {
    let items = parse_links(LINKS).expect("fixture parses");
    let catalog = Catalog::from_items("data/links.yml", Arc::new(items));
    app_router(AppState::new("WizardWebb", catalog))
}

async fn get(uri: &str, htmx: bool) -> (StatusCode, String) {
    let mut builder = Request::builder().uri(uri);
    if htmx {
        builder = builder.header("HX-Request", "true");
    }
    let response = app()
        .oneshot(builder.body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn healthz_reports_ok() {
    let (status, body) = get("/healthz", false).await;
    assert_eq!(status, StatusCode::OK);
    let json: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json, serde_json::json!({ "ok": true }));
}

#[tokio::test]
async fn api_links_returns_full_dataset() {
    let (status, body) = get("/api/links", false).await;
    assert_eq!(status, StatusCode::OK);
    let json: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["app"], "WizardWebb");
    assert_eq!(json["count"], 3);
    let links = json["links"].as_array().unwrap();
    assert_eq!(links.len(), 3);
    assert_eq!(links[0]["id"], "ddg");
    assert_eq!(links[1]["url"], Value::Null);
    assert_eq!(links[1]["tags"], serde_json::json!(["usernames"]));
    assert_eq!(links[1]["status"], "omitted");
}

#[tokio::test]
async fn api_links_applies_filters_and_slicing() {
    let (_, body) = get("/api/links?show_unlinked=false", false).await;
    let json: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["count"], 2);

    let (_, body) = get("/api/links?category=Web%20Tools", false).await;
    let json: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["count"], 1);
    assert_eq!(json["links"][0]["id"], "r101");

    let (_, body) = get("/api/links?offset=1&limit=1", false).await;
    let json: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["count"], 1);
    assert_eq!(json["links"][0]["id"], "wmn");
}

#[tokio::test]
async fn index_renders_every_card_and_controls() {
    let (status, body) = get("/", false).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("DuckDuckGo"));
    assert!(body.contains("WhatsMyName"));
    assert!(body.contains("Regex Tester"));
    assert!(body.contains("3 shown / 3 total"));
    assert!(body.contains("Unlinked by default"));
    assert!(body.contains("Caution"));
    assert!(body.contains("No link"));
    assert!(body.contains(r#"<option value="All" selected>All</option>"#));
}

#[tokio::test]
async fn links_partial_for_htmx_requests() {
    let (status, body) = get("/links?q=regex&filtered=1&show_unlinked=on", true).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("1 shown / 3 total"));
    assert!(body.contains("Regex Tester"));
    assert!(!body.contains("DuckDuckGo"));
    assert!(!body.contains("<html"));
}

#[tokio::test]
async fn links_without_htmx_header_renders_full_page() {
    let (_, body) = get("/links?filtered=1", false).await;
    assert!(body.contains("<html"));
    // Submitted form with the checkbox cleared hides unlinked entries
    assert!(body.contains("2 shown / 3 total"));
    assert!(!body.contains("WhatsMyName"));
}

#[tokio::test]
async fn empty_result_shows_notice() {
    let (_, body) = get("/links?q=nothing-matches", true).await;
    assert!(body.contains("No matches"));
    assert!(body.contains("0 shown / 3 total"));
}

#[tokio::test]
async fn about_page_renders() {
    let (status, body) = get("/about", false).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("About WizardWebb"));
}

#[tokio::test]
async fn static_script_wires_copy_and_search_shortcut() {
    let (status, body) = get("/static/app.js", false).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("data-copy"));
    assert!(body.contains("keydown"));
    assert!(body.contains("input[name=q]"));
}

//! Prometheus counters for page views and filter usage.
//!
//! The recorder is installed in-process only; `/metrics` renders it directly
//! instead of running a separate exporter listener.

use std::sync::OnceLock;

use metrics::{counter, describe_counter, describe_gauge, gauge};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use tracing::{info, warn};

pub const PAGE_VIEWS: &str = "wizardwebb_page_views_total";
pub const FILTER_REQUESTS: &str = "wizardwebb_filter_requests_total";
pub const LINKS_LOADED: &str = "wizardwebb_links_loaded";
pub const LINKS_SHOWN: &str = "wizardwebb_links_shown";

static HANDLE: OnceLock<Option<PrometheusHandle>> = OnceLock::new();

/// Install the global recorder. Idempotent; returns `None` if another
/// recorder was already installed.
pub fn init_metrics() -> Option<&'static PrometheusHandle> {
    HANDLE
        .get_or_init(|| match PrometheusBuilder::new().install_recorder() {
            Ok(handle) => {
                describe_counter!(PAGE_VIEWS, "Rendered pages and API responses by route");
                describe_counter!(FILTER_REQUESTS, "Filter evaluations over the catalog");
                describe_gauge!(LINKS_LOADED, "Links in the loaded catalog");
                describe_gauge!(LINKS_SHOWN, "Links matched by the most recent filter");
                info!("Prometheus recorder installed");
                Some(handle)
            }
            Err(e) => {
                warn!("Failed to install Prometheus recorder: {}", e);
                None
            }
        })
        .as_ref()
}

/// Render current metrics in Prometheus text format, if a recorder is installed.
pub fn render() -> Option<String> {
    HANDLE.get().and_then(|h| h.as_ref()).map(PrometheusHandle::render)
}

pub fn record_page_view(route: &'static str) {
    counter!(PAGE_VIEWS, "route" => route).increment(1);
}

pub fn record_catalog_size(total: usize) {
    gauge!(LINKS_LOADED).set(total as f64);
}

pub fn record_filter(shown: usize) {
    counter!(FILTER_REQUESTS).increment(1);
    gauge!(LINKS_SHOWN).set(shown as f64);
}

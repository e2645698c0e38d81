pub mod catalog;
pub mod config;
pub mod constants;
pub mod domain;
pub mod error;
pub mod logging;
pub mod metrics;
pub mod web;

pub use catalog::{distinct_categories, filter_links, load_links, matches, Catalog};
pub use domain::{CategorySelection, LinkItem, LinkQuery, StatusBadge};
pub use error::{Result, WizardError};

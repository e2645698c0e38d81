/// Display name used in page titles and the `/api/links` payload.
pub const APP_NAME: &str = "WizardWebb";

/// Bundled sample catalog, relative to the working directory.
pub const DEFAULT_LINKS_FILE: &str = "data/links.yml";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_LOG_DIR: &str = "logs";
pub const DEFAULT_CONFIG_FILE: &str = "wizardwebb.toml";

// Environment overrides
pub const ENV_LINKS_FILE: &str = "LINKS_FILE";
pub const ENV_HOST: &str = "HOST";
pub const ENV_PORT: &str = "PORT";
pub const ENV_LOG_DIR: &str = "WIZARDWEBB_LOG_DIR";

// Normalization defaults
pub const UNNAMED: &str = "(Unnamed)";
pub const DEFAULT_CATEGORY: &str = "Other";
pub const DEFAULT_STATUS: &str = "ok";
pub const ID_PREFIX: &str = "item_";

/// Selector value meaning "no category restriction". Never produced by the categorizer.
pub const ALL_CATEGORIES: &str = "All";

/// Categories listed first, in this order, when present.
pub const PREFERRED_CATEGORIES: [&str; 7] = [
    "Search",
    "Research",
    "OSINT",
    "Security & Privacy",
    "Web Tools",
    "Freebies & Deals",
    "Other",
];

/// Cards show at most this many tags.
pub const MAX_CARD_TAGS: usize = 6;

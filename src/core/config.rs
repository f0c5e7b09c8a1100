//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.beacon/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::core::page::Section;
use crate::core::router::{DEFAULT_APP_VIEW, DEFAULT_HUB_VIEW, NavLink};
use crate::quote::retry::{
    DEFAULT_ATTEMPT_TIMEOUT_MS, DEFAULT_BASE_DELAY_MS, DEFAULT_MAX_ATTEMPTS, DEFAULT_MAX_DELAY_MS,
};
use crate::quote::{FieldPair, RetryPolicy, default_field_pairs};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct BeaconConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub quote: QuoteConfig,
    #[serde(default)]
    pub retry: RetryConfig,
    pub go_to_app: Option<NavLink>,
    #[serde(default)]
    pub nav: Vec<NavLink>,
    #[serde(default)]
    pub sections: Vec<Section>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub views: Option<Vec<String>>,
    pub hub_view: Option<String>,
    pub fetch_on_start: Option<bool>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct QuoteConfig {
    pub api_url: Option<String>,
    pub fields: Option<Vec<FieldPair>>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct RetryConfig {
    pub max_attempts: Option<u32>,
    pub attempt_timeout_ms: Option<u64>,
    pub base_delay_ms: Option<u64>,
    pub max_delay_ms: Option<u64>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_QUOTE_URL: &str = "https://api.quotable.io/random";
pub const QUOTE_SECTION: &str = "quote-generator";

fn default_nav() -> Vec<NavLink> {
    vec![
        NavLink::new("Home", DEFAULT_HUB_VIEW, "home"),
        NavLink::new("About", DEFAULT_HUB_VIEW, "about"),
        NavLink::new("Contact", DEFAULT_HUB_VIEW, "contact"),
        NavLink::new("Quotes", DEFAULT_APP_VIEW, QUOTE_SECTION),
    ]
}

fn default_sections() -> Vec<Section> {
    vec![
        Section::new(
            "home",
            "Welcome",
            "A small hub with a quote generator next door. Use the tabs above, \
             the number keys, or click a tab to move around.",
        ),
        Section::new(
            "about",
            "About",
            "The quote generator pulls a random quote from a public API. When the \
             API is slow or down it retries a few times, backing off between \
             attempts, before falling back to a static message.",
        ),
        Section::new(
            "contact",
            "Contact",
            "Point `quote.api_url` in ~/.beacon/config.toml at your own endpoint.",
        ),
    ]
}

fn default_go_to_app() -> NavLink {
    NavLink::new("Open the quote generator", DEFAULT_APP_VIEW, QUOTE_SECTION)
}

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub views: Vec<String>,
    pub hub_view: String,
    pub nav: Vec<NavLink>,
    pub sections: Vec<Section>,
    pub go_to_app: NavLink,
    pub fetch_on_start: bool,
    pub quote_url: String,
    pub fields: Vec<FieldPair>,
    pub retry: RetryPolicy,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        resolve_with_env(&BeaconConfig::default(), &CliOverrides::default(), None)
    }
}

/// Values supplied on the command line. `None` means not specified.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub quote_url: Option<String>,
    pub max_attempts: Option<u32>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.beacon/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".beacon").join("config.toml"))
}

/// Load config from an explicit path, or from `~/.beacon/config.toml`.
///
/// An explicit path must exist. The default path is generated with
/// commented-out defaults when missing, and `BeaconConfig::default()` is
/// returned.
pub fn load_config(explicit: Option<&Path>) -> Result<BeaconConfig, ConfigError> {
    if let Some(path) = explicit {
        return read_config(path);
    }

    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(BeaconConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(BeaconConfig::default());
    }

    read_config(&path)
}

fn read_config(path: &Path) -> Result<BeaconConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: BeaconConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Beacon Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# views = ["hub-view", "app-view"]
# hub_view = "hub-view"
# fetch_on_start = true

# [quote]
# api_url = "https://api.quotable.io/random"   # Or set BEACON_QUOTE_URL env var
# fields = [
#   { text = "content", author = "author" },
#   { text = "q", author = "a" },
# ]

# [retry]
# max_attempts = 3
# attempt_timeout_ms = 5000
# base_delay_ms = 1000
# max_delay_ms = 30000

# [go_to_app]
# label = "Open the quote generator"
# view = "app-view"
# section = "quote-generator"

# [[nav]]
# label = "Home"
# view = "hub-view"
# section = "home"

# [[nav]]
# label = "Quotes"
# view = "app-view"
# section = "quote-generator"

# [[sections]]
# id = "home"
# title = "Welcome"
# body = "Shown at the top of the hub view."
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &BeaconConfig, cli: &CliOverrides) -> ResolvedConfig {
    let env_url = std::env::var("BEACON_QUOTE_URL").ok();
    resolve_with_env(config, cli, env_url)
}

fn resolve_with_env(
    config: &BeaconConfig,
    cli: &CliOverrides,
    env_url: Option<String>,
) -> ResolvedConfig {
    let mut views = config
        .general
        .views
        .clone()
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| vec![DEFAULT_HUB_VIEW.to_string(), DEFAULT_APP_VIEW.to_string()]);

    let hub_view = config
        .general
        .hub_view
        .clone()
        .unwrap_or_else(|| DEFAULT_HUB_VIEW.to_string());
    if !views.contains(&hub_view) {
        warn!("Hub view '{}' is not in the view list, adding it", hub_view);
        views.insert(0, hub_view.clone());
    }

    let nav = if config.nav.is_empty() {
        default_nav()
    } else {
        config.nav.clone()
    };
    let sections = if config.sections.is_empty() {
        default_sections()
    } else {
        config.sections.clone()
    };

    // Quote URL: CLI → env → config → default
    let quote_url = cli
        .quote_url
        .clone()
        .or(env_url)
        .or_else(|| config.quote.api_url.clone())
        .unwrap_or_else(|| DEFAULT_QUOTE_URL.to_string());

    let fields = config
        .quote
        .fields
        .clone()
        .filter(|f| !f.is_empty())
        .unwrap_or_else(default_field_pairs);

    let retry = RetryPolicy {
        max_attempts: cli
            .max_attempts
            .or(config.retry.max_attempts)
            .unwrap_or(DEFAULT_MAX_ATTEMPTS)
            .max(1),
        attempt_timeout: Duration::from_millis(
            config
                .retry
                .attempt_timeout_ms
                .unwrap_or(DEFAULT_ATTEMPT_TIMEOUT_MS),
        ),
        base_delay: Duration::from_millis(
            config.retry.base_delay_ms.unwrap_or(DEFAULT_BASE_DELAY_MS),
        ),
        max_delay: Duration::from_millis(config.retry.max_delay_ms.unwrap_or(DEFAULT_MAX_DELAY_MS)),
    };

    ResolvedConfig {
        views,
        hub_view,
        nav,
        sections,
        go_to_app: config.go_to_app.clone().unwrap_or_else(default_go_to_app),
        fetch_on_start: config.general.fetch_on_start.unwrap_or(true),
        quote_url,
        fields,
        retry,
    }
}

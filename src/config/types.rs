// Configuration type definitions

use serde::Deserialize;

pub const DEFAULT_DEBOUNCE_MS: u64 = 300;
pub const DEFAULT_MIN_TERM_LEN: usize = 0;
pub const DEFAULT_MAX_VISIBLE: usize = 8;

/// User search configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct SearchConfig {
    /// Search endpoint; mention completion is disabled when unset
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    #[serde(default = "default_min_term_len")]
    pub min_term_len: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            url: None,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            min_term_len: DEFAULT_MIN_TERM_LEN,
        }
    }
}

/// Dropdown display configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct DropdownConfig {
    #[serde(default = "default_max_visible")]
    pub max_visible: usize,
}

impl Default for DropdownConfig {
    fn default() -> Self {
        DropdownConfig {
            max_visible: DEFAULT_MAX_VISIBLE,
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub dropdown: DropdownConfig,
}

fn default_debounce_ms() -> u64 {
    DEFAULT_DEBOUNCE_MS
}

fn default_min_term_len() -> usize {
    DEFAULT_MIN_TERM_LEN
}

fn default_max_visible() -> usize {
    DEFAULT_MAX_VISIBLE
}

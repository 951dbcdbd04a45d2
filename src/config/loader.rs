use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::error::MentioError;

use super::types::Config;

const CONFIG_DIR: &str = "mentio";
const CONFIG_FILE: &str = "config.toml";

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load the config file, falling back to defaults when it does not exist.
/// A file that exists but fails to parse is an error, not a silent default.
pub fn load() -> Result<Config, MentioError> {
    let Some(path) = config_path() else {
        return Ok(Config::default());
    };
    load_from_path(&path)
}

pub fn load_from_path(path: &Path) -> Result<Config, MentioError> {
    let mut file = match File::open(path) {
        Ok(f) => f,
        Err(_) => return Ok(Config::default()),
    };

    let mut contents = String::new();
    file.read_to_string(&mut contents)?;

    toml::from_str(&contents).map_err(|e| MentioError::Config(e.to_string()))
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod loader_tests;

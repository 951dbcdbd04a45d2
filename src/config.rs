pub mod loader;
pub mod types;

pub use loader::{config_path, load, load_from_path};
pub use types::{Config, DropdownConfig, SearchConfig};

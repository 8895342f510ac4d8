// Core configuration types
mod core;
mod loader;

pub use self::core::AppConfig;
pub use loader::{
    directory_ancestors, find_config_file, load_config, load_config_from_path, parse_config,
    ConfigSyntax, DEFAULT_CONFIG_FILE,
};

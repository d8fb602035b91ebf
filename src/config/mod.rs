#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

pub const DEFAULT_STORE_PATH: &str = "./data/menus.json";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;
pub const DEFAULT_REFRESH_MINUTES: u64 = 15;
pub const MAX_TIMEOUT_SECONDS: u64 = 120;

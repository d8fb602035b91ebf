pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::{CliConfig, Commands};
pub use crate::config::toml_config::TomlConfig;

pub use crate::adapters::{FoodProFetcher, JsonFileStore, MemoryStore};
pub use crate::core::{builder::DayMenuBuilder, service::MenuService, week_cache::WeekCache};
pub use crate::utils::error::{MenuError, Result};

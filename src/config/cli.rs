use crate::adapters::http::DEFAULT_ENDPOINT;
use crate::config::{DEFAULT_REFRESH_MINUTES, DEFAULT_STORE_PATH, DEFAULT_TIMEOUT_SECONDS, MAX_TIMEOUT_SECONDS};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::{Parser, Subcommand};
use std::time::Duration;

#[derive(Debug, Clone, Parser)]
#[command(name = "campus-menu")]
#[command(about = "Scrapes FoodPro dining hall menus and serves a rolling week")]
pub struct CliConfig {
    #[command(subcommand)]
    pub command: Commands,

    /// Load settings from a TOML file instead of the flags below
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[arg(long, global = true, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    #[arg(long, global = true, default_value = DEFAULT_STORE_PATH)]
    pub store_path: String,

    #[arg(long, global = true, default_value_t = DEFAULT_TIMEOUT_SECONDS)]
    pub timeout_seconds: u64,

    /// Stop reading a hall's page at the "Powered by FoodPro" footer
    #[arg(long, global = true)]
    pub footer_ends_dinner: bool,

    #[arg(long, global = true, default_value_t = DEFAULT_REFRESH_MINUTES)]
    pub refresh_minutes: u64,

    /// Print views as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Log as JSON lines
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Build the seven-day window and summarize it
    Week,
    /// Lunch for day offset 0-6
    Lunch {
        #[arg(default_value_t = 0)]
        day: usize,
    },
    /// Dinner for day offset 0-6
    Dinner {
        #[arg(default_value_t = 0)]
        day: usize,
    },
    /// The meal the home page shows right now
    Now,
    /// Today's weekday and the navigation labels
    About,
    /// Rebuild the window and record today's menu if not yet stored
    Refresh,
    /// Look up a recorded menu
    History { month: u32, day: u32, year: i32 },
    /// Keep refreshing once per day change
    Watch,
}

impl ConfigProvider for CliConfig {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    fn store_path(&self) -> &str {
        &self.store_path
    }

    fn footer_ends_dinner(&self) -> bool {
        self.footer_ends_dinner
    }

    fn refresh_period(&self) -> Duration {
        Duration::from_secs(self.refresh_minutes * 60)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("endpoint", &self.endpoint)?;
        validation::validate_path("store_path", &self.store_path)?;
        validation::validate_file_extension("store_path", &self.store_path, &["json"])?;
        validation::validate_range("timeout_seconds", self.timeout_seconds, 1, MAX_TIMEOUT_SECONDS)?;
        validation::validate_positive_number("refresh_minutes", self.refresh_minutes, 1)?;
        Ok(())
    }
}

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MenuError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Fetching {hall} timed out after {seconds}s")]
    FetchTimeout { hall: String, seconds: u64 },

    #[error("Upstream returned HTTP {status} for {hall}")]
    HttpStatusError { hall: String, status: u16 },

    #[error("Menu page not found for {hall}")]
    PageNotFound { hall: String },

    #[error("Unexpected menu markup: {message}")]
    ParseAnomaly { message: String },

    #[error("No menu stored for {date}")]
    NotFound { date: NaiveDate },

    #[error("Found {count} menus stored for {date}")]
    IntegrityError { date: NaiveDate, count: usize },

    #[error("Day index {index} is outside the 7-day window")]
    DayOutOfRange { index: usize },

    #[error("Invalid date {month}/{day}/{year}")]
    InvalidDate { month: u32, day: u32, year: i32 },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },
}

pub type Result<T> = std::result::Result<T, MenuError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Parse,
    Storage,
    Configuration,
    Request,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

/// JSON body returned by the history API when a lookup fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorPayload {
    pub reason: String,
    pub description: String,
}

impl MenuError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            MenuError::HttpError(_)
            | MenuError::FetchTimeout { .. }
            | MenuError::HttpStatusError { .. }
            | MenuError::PageNotFound { .. } => ErrorCategory::Network,
            MenuError::ParseAnomaly { .. } => ErrorCategory::Parse,
            MenuError::NotFound { .. }
            | MenuError::IntegrityError { .. }
            | MenuError::IoError(_)
            | MenuError::SerializationError(_) => ErrorCategory::Storage,
            MenuError::DayOutOfRange { .. } | MenuError::InvalidDate { .. } => {
                ErrorCategory::Request
            }
            MenuError::ConfigError { .. }
            | MenuError::InvalidConfigValueError { .. }
            | MenuError::ConfigValidationError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            MenuError::DayOutOfRange { .. }
            | MenuError::InvalidDate { .. }
            | MenuError::NotFound { .. }
            | MenuError::ParseAnomaly { .. } => ErrorSeverity::Low,
            MenuError::HttpError(_)
            | MenuError::FetchTimeout { .. }
            | MenuError::HttpStatusError { .. }
            | MenuError::PageNotFound { .. } => ErrorSeverity::Medium,
            MenuError::ConfigError { .. }
            | MenuError::InvalidConfigValueError { .. }
            | MenuError::ConfigValidationError { .. }
            | MenuError::SerializationError(_) => ErrorSeverity::High,
            MenuError::IntegrityError { .. } | MenuError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    /// HTTP status class used when the error crosses the API boundary.
    pub fn status_code(&self) -> u16 {
        match self {
            MenuError::DayOutOfRange { .. } | MenuError::InvalidDate { .. } => 400,
            MenuError::NotFound { .. } => 404,
            MenuError::FetchTimeout { .. } => 504,
            MenuError::HttpError(_)
            | MenuError::HttpStatusError { .. }
            | MenuError::PageNotFound { .. }
            | MenuError::ParseAnomaly { .. } => 502,
            _ => 500,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Network => {
                "Check network connectivity and that the FoodPro endpoint is reachable"
            }
            ErrorCategory::Parse => "The menu page layout may have changed; inspect the raw page",
            ErrorCategory::Storage => match self {
                MenuError::NotFound { .. } => "Pick a date that has a recorded menu",
                MenuError::IntegrityError { .. } => {
                    "Remove the duplicate records for that date from the store"
                }
                _ => "Check that the store path exists and is writable",
            },
            ErrorCategory::Configuration => "Fix the configuration file or command line flags",
            ErrorCategory::Request => "Use a day index between 0 and 6 and a valid calendar date",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            MenuError::DayOutOfRange { .. } => "error".to_string(),
            MenuError::NotFound { date } => format!("No menu was recorded on {}", date),
            MenuError::IntegrityError { .. } => {
                "Database problem please use contact form on homepage".to_string()
            }
            MenuError::FetchTimeout { hall, .. } | MenuError::HttpStatusError { hall, .. } => {
                format!("Could not load the menu for {}", hall)
            }
            other => other.to_string(),
        }
    }

    /// Payload for the `/api/<month>/<day>/<year>` boundary.
    pub fn to_api_payload(&self) -> ApiErrorPayload {
        let reason = match self {
            MenuError::NotFound { .. } => "DoesNotExist".to_string(),
            MenuError::IntegrityError { .. } => {
                "Database problem please use contact form on homepage".to_string()
            }
            MenuError::InvalidDate { .. } | MenuError::DayOutOfRange { .. } => {
                "BadRequest".to_string()
            }
            _ => "InternalError".to_string(),
        };
        ApiErrorPayload {
            reason,
            description: self.to_string(),
        }
    }
}

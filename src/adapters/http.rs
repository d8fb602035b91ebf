use crate::domain::model::{Hall, MealPeriod};
use crate::domain::ports::{ConfigProvider, HallFetcher};
use crate::utils::error::{MenuError, Result};
use async_trait::async_trait;
use chrono::{Datelike, NaiveDate};
use reqwest::{Client, StatusCode};
use std::collections::HashMap;
use std::time::Duration;
use url::Url;

pub const DEFAULT_ENDPOINT: &str =
    "https://campusdining.princeton.edu/dining/_Foodpro/menuSamp.asp";

/// Fetches FoodPro `menuSamp.asp` pages over HTTP.
#[derive(Debug, Clone)]
pub struct FoodProFetcher {
    client: Client,
    endpoint: Url,
    locations: HashMap<Hall, String>,
    timeout: Duration,
}

impl FoodProFetcher {
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self> {
        let endpoint = Url::parse(endpoint).map_err(|e| MenuError::InvalidConfigValueError {
            field: "endpoint".to_string(),
            value: endpoint.to_string(),
            reason: format!("Invalid URL format: {}", e),
        })?;

        Ok(Self {
            client: Client::new(),
            endpoint,
            locations: Hall::ALL
                .into_iter()
                .map(|hall| (hall, hall.location_num().to_string()))
                .collect(),
            timeout,
        })
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        let mut fetcher = Self::new(config.endpoint(), config.fetch_timeout())?;
        for hall in Hall::ALL {
            fetcher.locations.insert(hall, config.location_num(hall));
        }
        Ok(fetcher)
    }

    /// The page URL for one hall and date, e.g. `...?myaction=read&dtdate=3%2F7%2F2016&locationNum=02`.
    pub fn menu_url(&self, hall: Hall, date: NaiveDate) -> Url {
        let location = self
            .locations
            .get(&hall)
            .map(String::as_str)
            .unwrap_or_else(|| hall.location_num());

        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("myaction", "read")
            .append_pair(
                "dtdate",
                &format!("{}/{}/{}", date.month(), date.day(), date.year()),
            )
            .append_pair("locationNum", location);
        url
    }
}

#[async_trait]
impl HallFetcher for FoodProFetcher {
    async fn fetch(&self, hall: Hall, date: NaiveDate, meal_hint: MealPeriod) -> Result<String> {
        let url = self.menu_url(hall, date);
        tracing::debug!("Fetching {} ({}) from: {}", hall, meal_hint, url);

        let response = self
            .client
            .get(url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    MenuError::FetchTimeout {
                        hall: hall.to_string(),
                        seconds: self.timeout.as_secs(),
                    }
                } else {
                    MenuError::HttpError(e)
                }
            })?;

        tracing::debug!("FoodPro response status for {}: {}", hall, response.status());

        match response.status() {
            status if status.is_success() => Ok(response.text().await?),
            StatusCode::NOT_FOUND => Err(MenuError::PageNotFound {
                hall: hall.to_string(),
            }),
            status => Err(MenuError::HttpStatusError {
                hall: hall.to_string(),
                status: status.as_u16(),
            }),
        }
    }
}

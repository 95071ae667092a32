use std::env;
use std::time::Duration;

use crate::errors::AppError;

pub const DEFAULT_LINE_API_URL: &str = "https://api.line.me";
pub const DEFAULT_HOTEL_SEARCH_URL: &str =
    "https://app.rakuten.co.jp/services/api/Travel/SimpleHotelSearch/20170426";

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub line_channel_secret: String,
    pub line_channel_access_token: String,
    pub line_api_url: String,
    pub rakuten_application_id: String,
    pub hotel_search_url: String,
    pub hotel_search_timeout_secs: u64,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8080),
            line_channel_secret: env::var("LINE_CHANNEL_SECRET").unwrap_or_default(),
            line_channel_access_token: env::var("LINE_CHANNEL_ACCESS_TOKEN").unwrap_or_default(),
            line_api_url: env::var("LINE_API_URL")
                .unwrap_or_else(|_| DEFAULT_LINE_API_URL.to_string()),
            rakuten_application_id: env::var("RAKUTEN_APPLICATION_ID").unwrap_or_default(),
            hotel_search_url: env::var("HOTEL_SEARCH_URL")
                .unwrap_or_else(|_| DEFAULT_HOTEL_SEARCH_URL.to_string()),
            hotel_search_timeout_secs: env::var("HOTEL_SEARCH_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5),
        }
    }

    /// Every credential is required; the webhook cannot verify or answer anything without them.
    pub fn validate(&self) -> Result<(), AppError> {
        let required = [
            ("LINE_CHANNEL_SECRET", &self.line_channel_secret),
            ("LINE_CHANNEL_ACCESS_TOKEN", &self.line_channel_access_token),
            ("RAKUTEN_APPLICATION_ID", &self.rakuten_application_id),
        ];
        for (name, value) in required {
            if value.trim().is_empty() {
                return Err(AppError::Config(format!("{name} must be set")));
            }
        }
        if self.hotel_search_timeout_secs == 0 {
            return Err(AppError::Config(
                "HOTEL_SEARCH_TIMEOUT_SECS must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    pub fn hotel_search_timeout(&self) -> Duration {
        Duration::from_secs(self.hotel_search_timeout_secs)
    }
}

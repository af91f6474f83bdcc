use std::env;
use std::time::Duration;

use crate::error::ApiError;

pub const DEFAULT_PAGE_SIZE: u32 = 10;
pub const DEFAULT_SEARCH_DEBOUNCE_MS: u64 = 400;

#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub page_size: u32,
    pub search_debounce: Duration,
}

impl ClientConfig {
    pub fn new(api_base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: api_base_url.into(),
            page_size: DEFAULT_PAGE_SIZE,
            search_debounce: Duration::from_millis(DEFAULT_SEARCH_DEBOUNCE_MS),
        }
    }

    pub fn new_from_env() -> Result<Self, ApiError> {
        dotenvy::dotenv().ok();

        let api_base_url = env::var("LMS_API_BASE_URL")
            .map_err(|_| ApiError::Config("LMS_API_BASE_URL is not set".to_string()))?;
        if api_base_url.trim().is_empty() {
            return Err(ApiError::Config("LMS_API_BASE_URL is empty".to_string()));
        }

        let page_size = match env::var("LMS_PAGE_SIZE") {
            Ok(raw) => parse_page_size(&raw)?,
            Err(_) => DEFAULT_PAGE_SIZE,
        };

        let debounce_ms = match env::var("LMS_SEARCH_DEBOUNCE_MS") {
            Ok(raw) => raw.trim().parse::<u64>().map_err(|_| {
                ApiError::Config(format!("LMS_SEARCH_DEBOUNCE_MS is not a number: {}", raw))
            })?,
            Err(_) => DEFAULT_SEARCH_DEBOUNCE_MS,
        };

        Ok(Self {
            api_base_url,
            page_size,
            search_debounce: Duration::from_millis(debounce_ms),
        })
    }
}

fn parse_page_size(raw: &str) -> Result<u32, ApiError> {
    match raw.trim().parse::<u32>() {
        Ok(size) if size > 0 => Ok(size),
        _ => Err(ApiError::Config(format!(
            "LMS_PAGE_SIZE must be a positive integer: {}",
            raw
        ))),
    }
}

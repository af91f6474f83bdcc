use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ApiError;

/// Status line and body of one HTTP exchange, before envelope checks.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Debug, Deserialize)]
pub struct ApiEnvelope {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Pageable {
    pub page_number: u32,
    pub page_size: u32,
    pub offset: u64,
    pub paged: bool,
    pub unpaged: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResponse<T> {
    pub content: Vec<T>,
    #[serde(default)]
    pub pageable: Option<Pageable>,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub total_elements: u64,
    #[serde(default)]
    pub number: u32,
    #[serde(default)]
    pub size: u32,
    #[serde(default)]
    pub number_of_elements: u32,
    #[serde(default)]
    pub first: bool,
    #[serde(default)]
    pub last: bool,
    #[serde(default)]
    pub empty: bool,
}

impl<T> PageResponse<T> {
    /// Builds a well-formed page the way the backend would, used by fakes.
    pub fn from_slice(all: Vec<T>, page: u32, size: u32) -> Self {
        let size = size.max(1);
        let total_elements = all.len() as u64;
        let total_pages = total_elements.div_ceil(u64::from(size)) as u32;
        let content: Vec<T> = all
            .into_iter()
            .skip((page as usize) * (size as usize))
            .take(size as usize)
            .collect();
        let number_of_elements = content.len() as u32;
        Self {
            empty: content.is_empty(),
            content,
            pageable: Some(Pageable {
                page_number: page,
                page_size: size,
                offset: u64::from(page) * u64::from(size),
                paged: true,
                unpaged: false,
            }),
            total_pages,
            total_elements,
            number: page,
            size,
            number_of_elements,
            first: page == 0,
            last: page.saturating_add(1) >= total_pages,
        }
    }
}

/// Validates the response envelope and extracts `data` as `T`.
///
/// Downstream code only ever sees `Ok(data)` or a normalized `ApiError`.
pub fn decode<T: DeserializeOwned>(raw: RawResponse) -> Result<T, ApiError> {
    let trimmed = raw.body.trim();
    let envelope = if trimmed.is_empty() {
        None
    } else {
        Some(serde_json::from_str::<ApiEnvelope>(trimmed))
    };

    if !raw.is_success() {
        let message = envelope
            .and_then(|parsed| parsed.ok())
            .and_then(|env| env.message)
            .filter(|m| !m.trim().is_empty());
        return Err(ApiError::from_status(raw.status, message));
    }

    let envelope = match envelope {
        None => return Ok(serde_json::from_value(Value::Null)?),
        Some(parsed) => parsed?,
    };

    if envelope.success == Some(false) {
        let message = envelope
            .message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| crate::error::FALLBACK_VALIDATION.to_string());
        return Err(ApiError::Validation(message));
    }

    Ok(serde_json::from_value(envelope.data.unwrap_or(Value::Null))?)
}

pub mod dto;

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{Client, Method, Url, multipart};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::sync::RwLock;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::config::ClientConfig;
use crate::error::ApiError;

pub use dto::{PageResponse, RawResponse};

#[derive(Debug, Clone)]
pub struct FilePart {
    pub field: String,
    pub file_name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl FilePart {
    /// Multipart part named `file`, MIME type guessed from the file name.
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let file_name = file_name.into();
        let mime = mime_guess::from_path(&file_name)
            .first_or_octet_stream()
            .essence_str()
            .to_string();
        Self {
            field: "file".to_string(),
            file_name,
            mime,
            bytes,
        }
    }
}

#[derive(Debug, Clone)]
pub enum RequestBody {
    Empty,
    Json(serde_json::Value),
    Multipart(FilePart),
}

#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: RequestBody,
    pub bearer: Option<String>,
}

impl ApiRequest {
    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: ApiRequest) -> Result<RawResponse, ApiError>;
}

pub struct HttpTransport {
    client: Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        Url::parse(&config.api_base_url)
            .map_err(|e| ApiError::Config(format!("Invalid LMS_API_BASE_URL: {}", e)))?;
        let client = Client::builder()
            .build()
            .map_err(|e| ApiError::Config(format!("Failed to build http client: {}", e)))?;
        Ok(Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url_for(&self, path: &str, query: &[(String, String)]) -> Result<Url, ApiError> {
        let joined = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        let mut url = Url::parse(&joined)
            .map_err(|e| ApiError::Config(format!("Invalid request url {}: {}", joined, e)))?;
        if !query.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(query.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        }
        Ok(url)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<RawResponse, ApiError> {
        let url = self.url_for(&request.path, &request.query)?;
        let request_id = Uuid::new_v4();

        let mut builder = self
            .client
            .request(request.method.clone(), url)
            .header("X-Request-Id", request_id.to_string());
        if let Some(token) = &request.bearer {
            builder = builder.bearer_auth(token);
        }
        builder = match request.body {
            RequestBody::Empty => builder,
            RequestBody::Json(value) => builder.json(&value),
            RequestBody::Multipart(file) => {
                let part = multipart::Part::bytes(file.bytes)
                    .file_name(file.file_name)
                    .mime_str(&file.mime)
                    .map_err(|e| ApiError::Validation(format!("Invalid attachment type: {}", e)))?;
                builder.multipart(multipart::Form::new().part(file.field, part))
            }
        };

        let response = builder.send().await.map_err(|e| {
            warn!(%request_id, "{} {} failed: {}", request.method, request.path, e);
            ApiError::Network(e.to_string())
        })?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        debug!(%request_id, "{} {} -> {}", request.method, request.path, status);

        Ok(RawResponse { status, body })
    }
}

/// Typed front door to the REST backend.
///
/// Cloning is cheap; clones share the transport and the session token.
#[derive(Clone)]
pub struct ApiClient {
    transport: Arc<dyn Transport>,
    token: Arc<RwLock<Option<String>>>,
}

impl ApiClient {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            token: Arc::new(RwLock::new(None)),
        }
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self, ApiError> {
        Ok(Self::new(Arc::new(HttpTransport::new(config)?)))
    }

    pub async fn set_token(&self, token: Option<String>) {
        *self.token.write().await = token;
    }

    pub async fn has_token(&self) -> bool {
        self.token.read().await.is_some()
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        query: Vec<(String, String)>,
        body: RequestBody,
    ) -> Result<T, ApiError> {
        let bearer = self.token.read().await.clone();
        let raw = self
            .transport
            .send(ApiRequest {
                method,
                path: path.to_string(),
                query,
                body,
                bearer,
            })
            .await?;
        dto::decode(raw)
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.execute(Method::GET, path, Vec::new(), RequestBody::Empty)
            .await
    }

    pub async fn get_with<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> Result<T, ApiError> {
        self.execute(Method::GET, path, query.to_vec(), RequestBody::Empty)
            .await
    }

    pub async fn get_page<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> Result<PageResponse<T>, ApiError> {
        self.get_with(path, query).await
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let json = serde_json::to_value(body)?;
        self.execute(Method::POST, path, Vec::new(), RequestBody::Json(json))
            .await
    }

    pub async fn patch<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let json = serde_json::to_value(body)?;
        self.execute(Method::PATCH, path, Vec::new(), RequestBody::Json(json))
            .await
    }

    pub async fn patch_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> Result<T, ApiError> {
        self.execute(Method::PATCH, path, query.to_vec(), RequestBody::Empty)
            .await
    }

    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.execute::<serde_json::Value>(Method::DELETE, path, Vec::new(), RequestBody::Empty)
            .await
            .map(|_| ())
    }

    pub async fn upload<T: DeserializeOwned>(&self, path: &str, file: FilePart) -> Result<T, ApiError> {
        self.execute(Method::POST, path, Vec::new(), RequestBody::Multipart(file))
            .await
    }
}

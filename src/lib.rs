pub mod client;
pub mod config;
pub mod error;
pub mod forms;
pub mod list;
pub mod models;
pub mod mutation;
pub mod pages;
pub mod services;
pub mod session;

pub use client::{ApiClient, HttpTransport, Transport};
pub use config::ClientConfig;
pub use error::ApiError;
pub use session::AppContext;

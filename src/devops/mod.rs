mod api;
pub mod client;
mod config;
mod dto;
mod timeout;

pub use api::DevOpsApi;
pub use client::AzureDevOpsClient;
pub use config::{DevOpsConfig, DEFAULT_API_VERSION, DEFAULT_BASE_URL, DEFAULT_REQUEST_TIMEOUT};
pub use timeout::TimeoutApi;

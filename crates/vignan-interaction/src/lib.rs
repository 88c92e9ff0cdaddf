//! HTTP client for the assistant backend.

mod api_client;

pub use api_client::HttpInferenceClient;

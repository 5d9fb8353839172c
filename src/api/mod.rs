pub mod auth;
pub mod commands;
pub mod devices;
pub mod sensors;
pub mod types;

use crate::config::UemConfig;
use anyhow::{Context, Result};
use reqwest::Client;
use reqwest::header::HeaderMap;
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct UemClient {
    pub(crate) client: Client,
    pub(crate) base_url: String,
    pub(crate) headers: HeaderMap,
}

impl UemClient {
    pub fn new(config: &UemConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .context("Failed to build HTTP client")?;
        let headers = auth::build_headers(&config.username, &config.password, &config.tenant_code)?;
        Ok(Self {
            client,
            base_url: config.api_url.trim_end_matches('/').to_string(),
            headers,
        })
    }
}

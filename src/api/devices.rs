use super::UemClient;
use super::types::{Device, DevicesPage};
use anyhow::{Context, Result};
use tracing::debug;

#[allow(async_fn_in_trait)]
pub trait DevicesApi {
    async fn search_macos_devices(&self) -> Result<Vec<Device>>;
}

impl DevicesApi for UemClient {
    /// Fetches every macOS device in the tenant, walking the paginated
    /// search endpoint until the reported total is exhausted.
    async fn search_macos_devices(&self) -> Result<Vec<Device>> {
        let url = format!("{}/API/mdm/devices/search", self.base_url);

        let mut devices: Vec<Device> = Vec::new();
        let mut page: i64 = 0;

        loop {
            let page_param = page.to_string();
            let response = self
                .client
                .get(&url)
                .headers(self.headers.clone())
                .query(&[("platform", "AppleOsX"), ("page", page_param.as_str())])
                .send()
                .await
                .context("Failed to send device search request")?;

            let status = response.status();
            if !status.is_success() {
                let text = response.text().await.unwrap_or_default();
                anyhow::bail!("Device search failed with status: {} - {}", status, text);
            }

            let text = response
                .text()
                .await
                .context("Failed to get response text")?;
            let body: DevicesPage =
                serde_json::from_str(&text).context("Failed to parse device search JSON")?;

            debug!(
                "Device search page {} ({} of {} total)",
                body.page,
                body.devices.len(),
                body.total
            );

            let fetched = body.devices.len();
            devices.extend(body.devices);

            // Stop once the pages seen cover the reported total, or when a
            // page comes back empty.
            if (body.page + 1) * body.page_size >= body.total || fetched == 0 {
                break;
            }
            page = body.page + 1;
        }

        Ok(devices)
    }
}

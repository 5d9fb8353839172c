use super::UemClient;
use super::types::SensorSearch;
use anyhow::{Context, Result};

#[allow(async_fn_in_trait)]
pub trait SensorsApi {
    async fn search_device_sensor(&self, device_uuid: &str, sensor: &str) -> Result<SensorSearch>;
}

impl SensorsApi for UemClient {
    async fn search_device_sensor(&self, device_uuid: &str, sensor: &str) -> Result<SensorSearch> {
        let url = format!("{}/API/mdm/devices/{}/sensors", self.base_url, device_uuid);

        let response = self
            .client
            .get(&url)
            .headers(self.headers.clone())
            .query(&[("search_text", sensor)])
            .send()
            .await
            .context("Failed to send sensor search request")?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            anyhow::bail!("Sensor search failed with status: {} - {}", status, text);
        }

        let text = response
            .text()
            .await
            .context("Failed to get response text")?;
        let search = serde_json::from_str(&text).context("Failed to parse sensor search JSON")?;
        Ok(search)
    }
}

use super::UemClient;
use anyhow::{Context, Result};
use reqwest::StatusCode;

#[allow(async_fn_in_trait)]
pub trait CommandsApi {
    async fn issue_command(&self, device_id: i64, command: &str) -> Result<StatusCode>;
}

impl CommandsApi for UemClient {
    /// Queues a remote command on a device. Fire-and-forget: the response
    /// body is not read and a non-success status is the caller's to report,
    /// not an error.
    async fn issue_command(&self, device_id: i64, command: &str) -> Result<StatusCode> {
        let url = format!("{}/API/mdm/devices/{}/commands", self.base_url, device_id);

        let response = self
            .client
            .post(&url)
            .headers(self.headers.clone())
            .query(&[("command", command)])
            .send()
            .await
            .context("Failed to send device command request")?;

        Ok(response.status())
    }
}

use crate::api::UemClient;
use crate::api::commands::CommandsApi;
use crate::api::sensors::SensorsApi;
use crate::api::types::Device;
use anyhow::Result;
use chrono::{DateTime, NaiveDateTime, Utc};
use tracing::{debug, info, warn};

/// Sensor key the console reports the installed Hub version under.
pub const HUB_VERSION_SENSOR: &str = "hub_version";
/// Remote command that reinstalls the packaged macOS agent.
pub const INSTALL_HUB_COMMAND: &str = "InstallPackagedMacOSXAgent";
/// Sentinel version for devices whose sensor lookup came back empty. Never a
/// member of a real accepted set, so these devices always get remediated.
pub const NO_RESULT: &str = "No result";

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunTally {
    pub scanned: usize,
    pub version_not_found: usize,
    pub install_requests: usize,
}

/// A device needs remediation iff its observed version is not an exact
/// member of the accepted set. No semver ordering.
pub fn needs_remediation(observed: &str, accepted: &[String]) -> bool {
    !accepted.iter().any(|v| v == observed)
}

/// Hours elapsed since an ISO-8601 last-seen timestamp. Consoles report
/// these both with and without a UTC offset; offset-less values are taken
/// as UTC. Informational only, never part of the remediation decision.
pub fn hours_since_seen(last_seen: &str, now: DateTime<Utc>) -> Option<f64> {
    let seen = DateTime::parse_from_rfc3339(last_seen)
        .map(|dt| dt.with_timezone(&Utc))
        .or_else(|_| {
            NaiveDateTime::parse_from_str(last_seen, "%Y-%m-%dT%H:%M:%S%.f")
                .map(|naive| naive.and_utc())
        })
        .ok()?;
    Some((now - seen).num_seconds() as f64 / 3600.0)
}

/// Evaluates every fetched device exactly once: look up its Hub version
/// sensor, flag it when the version is not accepted, and (outside dry-run)
/// queue the reinstall command on flagged devices.
pub async fn sweep_devices(
    client: &UemClient,
    devices: &[Device],
    accepted: &[String],
    dry_run: bool,
) -> Result<RunTally> {
    let mut tally = RunTally::default();

    for device in devices {
        tally.scanned += 1;
        let device_id = device.id.value;
        let last_seen_hours = hours_since_seen(&device.last_seen, Utc::now());

        let search = client
            .search_device_sensor(&device.uuid, HUB_VERSION_SENSOR)
            .await?;
        let hub_version = match search.single_value() {
            Some(value) => {
                debug!("Sensor search result for [{}]: [{}]", device.uuid, value);
                value.to_string()
            }
            None => {
                tally.version_not_found += 1;
                NO_RESULT.to_string()
            }
        };

        if !needs_remediation(&hub_version, accepted) {
            continue;
        }

        match last_seen_hours {
            Some(hours) => info!(
                "Mac device #{} device_id:[{}] UUID:[{}] hub_version:[{}] last seen:[{:.0}] hours ago",
                tally.scanned, device_id, device.uuid, hub_version, hours
            ),
            None => warn!(
                "Mac device #{} device_id:[{}] UUID:[{}] hub_version:[{}] last seen:[{}] (unparseable)",
                tally.scanned, device_id, device.uuid, hub_version, device.last_seen
            ),
        }

        if dry_run {
            continue;
        }

        let status = client.issue_command(device_id, INSTALL_HUB_COMMAND).await?;
        tally.install_requests += 1;
        println!(
            "Request to update hub on device {}. Result: {}",
            device_id,
            status.as_u16()
        );
    }

    Ok(tally)
}

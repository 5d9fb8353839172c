use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct DeviceId {
    #[serde(rename = "Value")]
    pub value: i64,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Device {
    #[serde(rename = "Id")]
    pub id: DeviceId,
    #[serde(rename = "Uuid")]
    pub uuid: String,
    /// ISO-8601, as reported by the console. Parsed for recency logging only.
    #[serde(rename = "LastSeen")]
    pub last_seen: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct DevicesPage {
    #[serde(rename = "Devices")]
    pub devices: Vec<Device>,
    #[serde(rename = "Page")]
    pub page: i64,
    #[serde(rename = "PageSize")]
    pub page_size: i64,
    #[serde(rename = "Total")]
    pub total: i64,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SensorReading {
    pub value: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SensorSearch {
    pub total_results: i64,
    #[serde(default)]
    pub results: Vec<SensorReading>,
}

impl SensorSearch {
    /// The observed sensor value, present only when the search matched
    /// exactly one result. Anything else counts as "no result".
    pub fn single_value(&self) -> Option<&str> {
        if self.total_results == 1 {
            self.results.first().map(|r| r.value.as_str())
        } else {
            None
        }
    }
}

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::symbols::Reels;

/// Where a play request came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriggerSource {
    /// Beam-break sensor on the cabinet.
    Sensor,
    /// Spin button in the UI.
    Manual,
    /// Simulated hit, only accepted in simulator mode.
    Simulated,
}

impl TriggerSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            TriggerSource::Sensor => "sensor",
            TriggerSource::Manual => "manual",
            TriggerSource::Simulated => "simulated",
        }
    }
}

impl fmt::Display for TriggerSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TriggerSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sensor" | "ir" => Ok(TriggerSource::Sensor),
            "manual" => Ok(TriggerSource::Manual),
            "simulated" | "simulator" => Ok(TriggerSource::Simulated),
            other => Err(format!("unknown trigger source: {}", other)),
        }
    }
}

/// One play: its outcome and what the reels show.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayEvent {
    pub id: String,
    pub win: bool,
    pub reels: Reels,
    pub source: TriggerSource,
    /// Serialized as float seconds since the Unix epoch.
    #[serde(
        serialize_with = "serialize_epoch_seconds",
        deserialize_with = "deserialize_epoch_seconds"
    )]
    pub created_at: DateTime<Utc>,
}

impl PlayEvent {
    /// Build an event with a fresh id, stamped now.
    pub fn new(win: bool, reels: Reels, source: TriggerSource) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            win,
            reels,
            source,
            created_at: Utc::now(),
        }
    }
}

fn serialize_epoch_seconds<S: Serializer>(
    at: &DateTime<Utc>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    let seconds = at.timestamp() as f64 + f64::from(at.timestamp_subsec_micros()) / 1_000_000.0;
    serializer.serialize_f64(seconds)
}

fn deserialize_epoch_seconds<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<DateTime<Utc>, D::Error> {
    let seconds = f64::deserialize(deserializer)?;
    let micros = (seconds * 1_000_000.0).round() as i64;
    Utc.timestamp_micros(micros)
        .single()
        .ok_or_else(|| serde::de::Error::custom(format!("timestamp out of range: {}", seconds)))
}

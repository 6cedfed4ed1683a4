//! Serde helpers for `chrono::Duration` fields, stored as integer
//! milliseconds on the wire.

use chrono::Duration;
use serde::{Deserialize, Deserializer, Serializer};

pub fn serialize<S: Serializer>(d: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_i64(d.num_milliseconds())
}

pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
    let ms = i64::deserialize(deserializer)?;
    Ok(Duration::milliseconds(ms))
}

use std::fmt;

use chrono::{DateTime, FixedOffset, NaiveDateTime, Utc};
use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

use crate::error::PayError;

const WIRE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

fn gateway_offset() -> FixedOffset {
    FixedOffset::east_opt(8 * 3600).expect("UTC+8 is a valid offset")
}

/// A point in time carried on the legacy wire as a `YYYY-MM-DD HH:MM:SS`
/// local-time string in a fixed UTC+8 offset, independent of the host
/// timezone.
///
/// Modern JSON payloads carry RFC 3339 strings instead and never go through
/// this codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GatewayTime(pub DateTime<Utc>);

impl GatewayTime {
    /// Parse the wire string. Fails with `MalformedTimestamp` if the string
    /// does not match the expected pattern.
    pub fn parse(value: &str) -> Result<Self, PayError> {
        let naive = NaiveDateTime::parse_from_str(value, WIRE_FORMAT)
            .map_err(|_| PayError::MalformedTimestamp(value.to_string()))?;
        let local = naive
            .and_local_timezone(gateway_offset())
            .single()
            .ok_or_else(|| PayError::MalformedTimestamp(value.to_string()))?;
        Ok(Self(local.with_timezone(&Utc)))
    }

    /// Render back to the UTC+8 wire form.
    pub fn to_wire(&self) -> String {
        self.0
            .with_timezone(&gateway_offset())
            .format(WIRE_FORMAT)
            .to_string()
    }
}

impl fmt::Display for GatewayTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_wire())
    }
}

impl Serialize for GatewayTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_wire())
    }
}

impl<'de> Deserialize<'de> for GatewayTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        GatewayTime::parse(&value).map_err(de::Error::custom)
    }
}

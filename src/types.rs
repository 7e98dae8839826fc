use std::fmt;
use std::ops::Deref;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use chrono::{DateTime, Utc};
use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};
use serde_with::{DeserializeAs, PickFirst, Same, SerializeAs, TimestampSecondsWithFrac};

/// Point in time reported or accepted by the service.
///
/// The JSON protocol carries epoch seconds with a fractional part, which is
/// what gets written. RFC 3339 strings are accepted on input as well.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    pub fn new(at: DateTime<Utc>) -> Self {
        Timestamp(at)
    }

    pub fn into_inner(self) -> DateTime<Utc> {
        self.0
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(at: DateTime<Utc>) -> Self {
        Timestamp(at)
    }
}

impl Deref for Timestamp {
    type Target = DateTime<Utc>;

    fn deref(&self) -> &DateTime<Utc> {
        &self.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        TimestampSecondsWithFrac::<f64>::serialize_as(&self.0, serializer)
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        PickFirst::<(TimestampSecondsWithFrac<f64>, Same)>::deserialize_as(deserializer)
            .map(Timestamp)
    }
}

/// Opaque binary payload, base64 encoded on the wire.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Blob(Vec<u8>);

impl Blob {
    pub fn new<B: Into<Vec<u8>>>(bytes: B) -> Self {
        Blob(bytes.into())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.0
    }
}

impl From<Vec<u8>> for Blob {
    fn from(bytes: Vec<u8>) -> Self {
        Blob(bytes)
    }
}

impl From<&[u8]> for Blob {
    fn from(bytes: &[u8]) -> Self {
        Blob(bytes.to_vec())
    }
}

impl fmt::Debug for Blob {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Blob({} bytes)", self.0.len())
    }
}

impl Serialize for Blob {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&STANDARD.encode(&self.0))
    }
}

impl<'de> Deserialize<'de> for Blob {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let encoded = String::deserialize(deserializer)?;
        STANDARD
            .decode(encoded.as_bytes())
            .map(Blob)
            .map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blob_travels_as_base64() {
        let blob = Blob::new(&b"{\"key\":\"value\"}"[..]);
        let json = serde_json::to_string(&blob).unwrap();
        assert_eq!(json, "\"eyJrZXkiOiJ2YWx1ZSJ9\"");
        let back: Blob = serde_json::from_str(&json).unwrap();
        assert_eq!(back, blob);
    }

    #[test]
    fn timestamp_reads_epoch_seconds() {
        let at: Timestamp = serde_json::from_str("1578312000.5").unwrap();
        assert_eq!(at.timestamp(), 1_578_312_000);
        assert_eq!(at.timestamp_subsec_millis(), 500);
        assert_eq!(serde_json::to_string(&at).unwrap(), "1578312000.5");

        let whole: Timestamp = serde_json::from_str("1578312000").unwrap();
        assert_eq!(whole.timestamp(), 1_578_312_000);
    }

    #[test]
    fn timestamp_accepts_rfc3339_and_writes_epoch() {
        let at: Timestamp = serde_json::from_str("\"2020-01-06T12:00:00Z\"").unwrap();
        assert_eq!(at.timestamp(), 1_578_312_000);
        assert_eq!(serde_json::to_value(&at).unwrap(), serde_json::json!(1578312000.0));
    }

    #[test]
    fn timestamp_rejects_garbage() {
        assert!(serde_json::from_str::<Timestamp>("\"yesterday\"").is_err());
        assert!(serde_json::from_str::<Timestamp>("true").is_err());
    }

    #[test]
    fn blob_rejects_invalid_base64() {
        let result: Result<Blob, _> = serde_json::from_str("\"not base64!\"");
        assert!(result.is_err());
    }
}

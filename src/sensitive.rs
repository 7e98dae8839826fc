//! Log redaction primitives shared by every shape.
//!
//! A shape field is either retained as-is, masked with [`SENSITIVE_STRING`],
//! or delegated to the redaction helper of the nested shape it holds.

use std::collections::HashMap;
use std::fmt;

use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

/// Marker written in place of a sensitive value.
pub const SENSITIVE_STRING: &str = "***SensitiveInformation***";

/// How a single field is treated by `filter_sensitive_log`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Redaction {
    /// Copied unchanged.
    Retain,
    /// Replaced with [`SENSITIVE_STRING`] when present.
    Mask,
    /// Passed through the nested shape's own helper.
    Delegate,
}

impl Redaction {
    pub fn as_str(self) -> &'static str {
        match self {
            Redaction::Retain => "retain",
            Redaction::Mask => "mask",
            Redaction::Delegate => "delegate",
        }
    }
}

impl fmt::Display for Redaction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A field value that may have been replaced by the redaction marker.
///
/// Encodes as the inner value, or as the sentinel string once redacted. A
/// sentinel string on the wire decodes back to `Redacted`, so a redacted
/// document survives a round trip.
#[derive(Clone, PartialEq)]
pub enum Sensitive<T> {
    Value(T),
    Redacted,
}

impl<T> Sensitive<T> {
    pub fn is_redacted(&self) -> bool {
        match self {
            Sensitive::Redacted => true,
            Sensitive::Value(_) => false,
        }
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Sensitive::Value(v) => Some(v),
            Sensitive::Redacted => None,
        }
    }

    pub fn into_value(self) -> Option<T> {
        match self {
            Sensitive::Value(v) => Some(v),
            Sensitive::Redacted => None,
        }
    }
}

impl<T: Default> Default for Sensitive<T> {
    fn default() -> Self {
        Sensitive::Value(T::default())
    }
}

impl<T> From<T> for Sensitive<T> {
    fn from(value: T) -> Self {
        Sensitive::Value(value)
    }
}

impl From<&str> for Sensitive<String> {
    fn from(value: &str) -> Self {
        Sensitive::Value(value.to_owned())
    }
}

/// Never prints the value, redacted or not. Use [`Sensitive::value`] to
/// reach it.
impl<T> fmt::Debug for Sensitive<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(SENSITIVE_STRING)
    }
}

impl<T: Serialize> Serialize for Sensitive<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Sensitive::Value(v) => v.serialize(serializer),
            Sensitive::Redacted => serializer.serialize_str(SENSITIVE_STRING),
        }
    }
}

/// Matches only the sentinel string.
struct Marker;

impl<'de> Deserialize<'de> for Marker {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        if raw == SENSITIVE_STRING {
            Ok(Marker)
        } else {
            Err(de::Error::custom("not the redaction marker"))
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Repr<T> {
    Redacted(Marker),
    Value(T),
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Sensitive<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Repr::deserialize(deserializer)? {
            Repr::Redacted(Marker) => Ok(Sensitive::Redacted),
            Repr::Value(v) => Ok(Sensitive::Value(v)),
        }
    }
}

/// Replacement of a sensitive field by the marker.
pub trait Mask {
    fn mask(&self) -> Self;

    /// A populated, not yet redacted value.
    fn present() -> Self;
}

impl<T: Default> Mask for Sensitive<T> {
    fn mask(&self) -> Self {
        Sensitive::Redacted
    }

    fn present() -> Self {
        Sensitive::Value(T::default())
    }
}

impl<T: Mask> Mask for Option<T> {
    fn mask(&self) -> Self {
        self.as_ref().map(Mask::mask)
    }

    fn present() -> Self {
        Some(T::present())
    }
}

/// Produces a copy of `self` that is safe to write to logs.
///
/// Implementations never touch `self`; fields that are not sensitive come
/// back equal to the input.
pub trait FilterSensitiveLog: Sized {
    fn filter_sensitive_log(&self) -> Self;
}

impl<T: FilterSensitiveLog> FilterSensitiveLog for Option<T> {
    fn filter_sensitive_log(&self) -> Self {
        self.as_ref().map(FilterSensitiveLog::filter_sensitive_log)
    }
}

impl<T: FilterSensitiveLog> FilterSensitiveLog for Vec<T> {
    fn filter_sensitive_log(&self) -> Self {
        self.iter().map(FilterSensitiveLog::filter_sensitive_log).collect()
    }
}

impl<T: FilterSensitiveLog> FilterSensitiveLog for HashMap<String, T> {
    fn filter_sensitive_log(&self) -> Self {
        self.iter()
            .map(|(k, v)| (k.clone(), v.filter_sensitive_log()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mask_keeps_absent_values_absent() {
        let absent: Option<Sensitive<String>> = None;
        assert_eq!(absent.mask(), None);
        let present: Option<Sensitive<String>> = Some("hunter2".into());
        assert_eq!(present.mask(), Some(Sensitive::Redacted));
    }

    #[test]
    fn redacted_value_encodes_as_sentinel() {
        let masked: Sensitive<Vec<String>> = Sensitive::Redacted;
        let json = serde_json::to_string(&masked).unwrap();
        assert_eq!(json, format!("\"{}\"", SENSITIVE_STRING));
    }

    #[test]
    fn sentinel_decodes_as_redacted() {
        let json = format!("\"{}\"", SENSITIVE_STRING);
        let masked: Sensitive<Vec<String>> = serde_json::from_str(&json).unwrap();
        assert!(masked.is_redacted());

        let plain: Sensitive<String> = serde_json::from_str("\"visible\"").unwrap();
        assert_eq!(plain.value().map(String::as_str), Some("visible"));
    }

    #[test]
    fn debug_never_prints_payload() {
        let masked: Sensitive<String> = Sensitive::Redacted;
        assert_eq!(format!("{:?}", masked), SENSITIVE_STRING);

        let plain: Sensitive<String> = "hunter2".into();
        let printed = format!("{:?}", Some(plain.clone()));
        assert!(!printed.contains("hunter2"));
        assert_eq!(printed, format!("Some({})", SENSITIVE_STRING));
        assert_eq!(plain.value().map(String::as_str), Some("hunter2"));
    }

    #[test]
    fn present_is_populated_and_masks() {
        let present: Option<Sensitive<Vec<String>>> = Mask::present();
        assert_eq!(present, Some(Sensitive::Value(Vec::new())));
        assert_eq!(present.mask(), Some(Sensitive::Redacted));
    }
}

use std::fmt;
use std::str::FromStr;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::sensitive::{FilterSensitiveLog, Redaction};

/// Role a shape plays in the service API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ShapeKind {
    Request,
    Result,
    Structure,
    Exception,
}

impl ShapeKind {
    /// Kind of a non-exception shape, derived from its name suffix.
    pub fn of(name: &str) -> ShapeKind {
        if name.ends_with("Request") {
            ShapeKind::Request
        } else if name.ends_with("Result") {
            ShapeKind::Result
        } else {
            ShapeKind::Structure
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ShapeKind::Request => "request",
            ShapeKind::Result => "result",
            ShapeKind::Structure => "structure",
            ShapeKind::Exception => "exception",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShapeKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "request" => Ok(ShapeKind::Request),
            "result" => Ok(ShapeKind::Result),
            "structure" => Ok(ShapeKind::Structure),
            "exception" => Ok(ShapeKind::Exception),
            other => Err(format!("unknown shape kind: {}", other)),
        }
    }
}

/// A named record of the service API with a static redaction plan.
pub trait Shape:
    FilterSensitiveLog + Serialize + DeserializeOwned + Default + Clone + PartialEq + fmt::Debug
{
    /// Service model name, also the discriminant of exception shapes.
    const NAME: &'static str;
    /// Every field by Rust name, with the treatment it gets when redacted.
    const REDACTION: &'static [(&'static str, Redaction)];

    /// The default value with every masked field present.
    fn sensitive_sample() -> Self;

    fn sensitive_fields() -> Vec<&'static str> {
        Self::fields_with(Redaction::Mask)
    }

    fn delegated_fields() -> Vec<&'static str> {
        Self::fields_with(Redaction::Delegate)
    }

    fn fields_with(redaction: Redaction) -> Vec<&'static str> {
        Self::REDACTION
            .iter()
            .filter(|(_, r)| *r == redaction)
            .map(|(field, _)| *field)
            .collect()
    }

    /// JSON rendering of the redacted copy, for log lines.
    fn to_log_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.filter_sensitive_log())
    }
}

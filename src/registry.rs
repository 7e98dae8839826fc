//! Name-indexed catalogue of every shape, exception and enum in the crate.
//!
//! The registry lets callers that only hold a shape name and a JSON document
//! (log shippers, the command line tool) apply the right redaction helper.

use std::collections::BTreeMap;

use serde_json::Value;
use tracing::{debug, trace, warn};

use crate::enums::{self, OpenEnum};
use crate::error::ShapeError;
use crate::exceptions::{FaultOrigin, ServiceException, SsmServiceError};
use crate::sensitive::{FilterSensitiveLog, Redaction};
use crate::shape::{Shape, ShapeKind};
use crate::shapes;

type JsonTransform = fn(Value) -> Result<Value, ShapeError>;

fn redact_value<S: Shape>(value: Value) -> Result<Value, ShapeError> {
    let shape: S = serde_json::from_value(value).map_err(|cause| ShapeError::Decode {
        shape: S::NAME.to_owned(),
        cause,
    })?;
    encode(shape.filter_sensitive_log())
}

fn encode<S: Shape>(shape: S) -> Result<Value, ShapeError> {
    serde_json::to_value(shape).map_err(|cause| ShapeError::Encode {
        shape: S::NAME.to_owned(),
        cause,
    })
}

fn sample_value<S: Shape>() -> Result<Value, ShapeError> {
    encode(S::default())
}

fn sensitive_sample_value<S: Shape>() -> Result<Value, ShapeError> {
    encode(S::sensitive_sample())
}

/// Metadata and JSON-level helpers for one shape.
#[derive(Clone)]
pub struct ShapeEntry {
    pub name: &'static str,
    pub kind: ShapeKind,
    /// Set for exception shapes only.
    pub fault: Option<FaultOrigin>,
    pub redaction: &'static [(&'static str, Redaction)],
    redact: JsonTransform,
    sample: fn() -> Result<Value, ShapeError>,
    sensitive_sample: fn() -> Result<Value, ShapeError>,
}

impl ShapeEntry {
    fn of<S: Shape>(kind: ShapeKind, fault: Option<FaultOrigin>) -> Self {
        ShapeEntry {
            name: S::NAME,
            kind,
            fault,
            redaction: S::REDACTION,
            redact: redact_value::<S>,
            sample: sample_value::<S>,
            sensitive_sample: sensitive_sample_value::<S>,
        }
    }

    pub fn fields_with(&self, redaction: Redaction) -> Vec<&'static str> {
        self.redaction
            .iter()
            .filter(|(_, r)| *r == redaction)
            .map(|(field, _)| *field)
            .collect()
    }

    pub fn sensitive_fields(&self) -> Vec<&'static str> {
        self.fields_with(Redaction::Mask)
    }

    /// True when the helper changes anything, directly or through nesting.
    pub fn has_redaction(&self) -> bool {
        self.redaction.iter().any(|(_, r)| *r != Redaction::Retain)
    }

    /// Decodes `value` as this shape and returns its redacted encoding.
    pub fn redact(&self, value: Value) -> Result<Value, ShapeError> {
        (self.redact)(value)
    }

    /// Encoding of the shape's default value.
    pub fn sample(&self) -> Result<Value, ShapeError> {
        (self.sample)()
    }

    /// Encoding of the default value with every masked field populated.
    pub fn sensitive_sample(&self) -> Result<Value, ShapeError> {
        (self.sensitive_sample)()
    }
}

#[derive(Debug, Clone)]
pub struct EnumEntry {
    pub name: &'static str,
    pub values: &'static [&'static str],
}

#[derive(Clone, Default)]
pub struct ShapeRegistry {
    shapes: BTreeMap<&'static str, ShapeEntry>,
    enums: BTreeMap<&'static str, EnumEntry>,
}

impl ShapeRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every Systems Manager shape, exception and enum this crate defines.
    pub fn ssm() -> Self {
        let mut registry = ShapeRegistry::new();
        shapes::register_all(&mut registry);
        SsmServiceError::register_all(&mut registry);
        enums::register_enums(&mut registry);
        debug!(
            shapes = registry.shapes.len(),
            enums = registry.enums.len(),
            "shape registry ready"
        );
        registry
    }

    pub fn register<S: Shape>(&mut self) {
        self.insert(ShapeEntry::of::<S>(ShapeKind::of(S::NAME), None));
    }

    pub fn register_exception<E: ServiceException>(&mut self) {
        self.insert(ShapeEntry::of::<E>(ShapeKind::Exception, Some(E::FAULT)));
    }

    pub fn register_enum<E: OpenEnum>(&mut self) {
        let entry = EnumEntry {
            name: E::NAME,
            values: E::VALUES,
        };
        if self.enums.insert(E::NAME, entry).is_some() {
            warn!(name = E::NAME, "enum registered twice");
        }
    }

    fn insert(&mut self, entry: ShapeEntry) {
        let name = entry.name;
        if self.shapes.insert(name, entry).is_some() {
            warn!(shape = name, "shape registered twice");
        }
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&ShapeEntry> {
        self.shapes.get(name)
    }

    pub fn lookup(&self, name: &str) -> Result<&ShapeEntry, ShapeError> {
        trace!(shape = name, "looking up shape");
        self.get(name)
            .ok_or_else(|| ShapeError::UnknownShape(name.to_owned()))
    }

    /// All shapes, ordered by name.
    pub fn shapes(&self) -> impl Iterator<Item = &ShapeEntry> {
        self.shapes.values()
    }

    pub fn of_kind(&self, kind: ShapeKind) -> impl Iterator<Item = &ShapeEntry> {
        self.shapes.values().filter(move |entry| entry.kind == kind)
    }

    /// All enums, ordered by name.
    pub fn enums(&self) -> impl Iterator<Item = &EnumEntry> {
        self.enums.values()
    }

    pub fn lookup_enum(&self, name: &str) -> Result<&EnumEntry, ShapeError> {
        self.enums
            .get(name)
            .ok_or_else(|| ShapeError::UnknownEnum(name.to_owned()))
    }

    /// Redacts a JSON document of the named shape.
    pub fn redact_json(&self, name: &str, value: Value) -> Result<Value, ShapeError> {
        let entry = self.lookup(name)?;
        let redacted = entry.redact(value)?;
        debug!(
            shape = entry.name,
            masked = entry.sensitive_fields().len(),
            "redacted shape"
        );
        Ok(redacted)
    }
}

//! Request, result and error shapes for AWS Systems Manager, with helpers
//! that produce log-safe copies of them.
//!
//! Every shape implements [`FilterSensitiveLog`]: fields the service model
//! marks sensitive are replaced with [`SENSITIVE_STRING`], nested shapes are
//! redacted through their own helper, and everything else is copied.

#[macro_use]
extern crate serde_derive;
#[macro_use]
extern crate failure_derive;

#[macro_use]
mod macros;

pub mod enums;
pub mod error;
pub mod exceptions;
pub mod logging;
pub mod registry;
pub mod sensitive;
pub mod shape;
pub mod shapes;
pub mod types;

pub use crate::error::ShapeError;
pub use crate::exceptions::{FaultOrigin, ServiceException, SsmServiceError, UnhandledError};
pub use crate::registry::{EnumEntry, ShapeEntry, ShapeRegistry};
pub use crate::sensitive::{FilterSensitiveLog, Mask, Redaction, Sensitive, SENSITIVE_STRING};
pub use crate::shape::{Shape, ShapeKind};
pub use crate::types::{Blob, Timestamp};

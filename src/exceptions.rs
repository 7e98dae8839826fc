//! Error shapes returned by the service.
//!
//! Each exception is an ordinary shape with a discriminant (its name) and a
//! fault origin. [`SsmServiceError`] gathers them behind one type.

use std::fmt;

use crate::error::ShapeError;
use crate::registry::ShapeRegistry;
use crate::sensitive::FilterSensitiveLog;
use crate::shape::Shape;

/// Whether the caller or the service caused an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FaultOrigin {
    Client,
    Server,
}

impl FaultOrigin {
    pub fn as_str(self) -> &'static str {
        match self {
            FaultOrigin::Client => "client",
            FaultOrigin::Server => "server",
        }
    }
}

impl fmt::Display for FaultOrigin {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An exception shape.
pub trait ServiceException: Shape + failure::Fail {
    const FAULT: FaultOrigin;

    fn message(&self) -> Option<&str>;

    fn discriminant(&self) -> &'static str {
        Self::NAME
    }

    fn fault(&self) -> FaultOrigin {
        Self::FAULT
    }
}

exception! {
    /// The resource already exists.
    pub struct AlreadyExistsException: Client {}
}

exception! {
    pub struct AssociationAlreadyExists: Client {}
}

exception! {
    pub struct AssociationDoesNotExist: Client {}
}

exception! {
    pub struct AssociationExecutionDoesNotExist: Client {}
}

exception! {
    /// The account has reached its association quota.
    pub struct AssociationLimitExceeded: Client {}
}

exception! {
    pub struct AssociationVersionLimitExceeded: Client {}
}

exception! {
    pub struct ComplianceTypeCountLimitExceededException: Client {}
}

exception! {
    pub struct DocumentAlreadyExists: Client {}
}

exception! {
    pub struct DocumentLimitExceeded: Client {}
}

exception! {
    pub struct DoesNotExistException: Client {}
}

exception! {
    pub struct DuplicateInstanceId: Client {}
}

exception! {
    pub struct FeatureNotAvailableException: Client {}
}

exception! {
    /// A parameter hierarchy is deeper than fifteen levels.
    pub struct HierarchyLevelLimitExceededException: Client {}
}

exception! {
    /// The parameter type cannot change from `String` or `StringList` to
    /// `SecureString` under the same hierarchy.
    pub struct HierarchyTypeMismatchException: Client {}
}

exception! {
    pub struct IdempotentParameterMismatch: Client {}
}

exception! {
    pub struct IncompatiblePolicyException: Client {}
}

exception! {
    /// The one server-side fault of the service.
    pub struct InternalServerError: Server {}
}

exception! {
    pub struct InvalidActivation: Client {}
}

exception! {
    pub struct InvalidActivationId: Client {}
}

exception! {
    pub struct InvalidAllowedPatternException: Client {}
}

exception! {
    pub struct InvalidAssociationVersion: Client {}
}

exception! {
    pub struct InvalidCommandId: Client {}
}

exception! {
    pub struct InvalidDocument: Client {}
}

exception! {
    pub struct InvalidDocumentContent: Client {}
}

exception! {
    pub struct InvalidDocumentOperation: Client {}
}

exception! {
    pub struct InvalidDocumentSchemaVersion: Client {}
}

exception! {
    pub struct InvalidDocumentType: Client {}
}

exception! {
    pub struct InvalidDocumentVersion: Client {}
}

exception! {
    pub struct InvalidFilter: Client {}
}

exception! {
    pub struct InvalidFilterKey: Client {}
}

exception! {
    pub struct InvalidFilterValue: Client {}
}

exception! {
    pub struct InvalidInstanceId: Client {}
}

exception! {
    pub struct InvalidInstanceInformationFilterValue: Client {}
}

exception! {
    pub struct InvalidItemContentException: Client {
        type_name: Option<String>,
    }
}

exception! {
    pub struct InvalidKeyId: Client {}
}

exception! {
    pub struct InvalidNextToken: Client {}
}

exception! {
    pub struct InvalidNotificationConfig: Client {}
}

exception! {
    pub struct InvalidOutputFolder: Client {}
}

exception! {
    pub struct InvalidOutputLocation: Client {}
}

exception! {
    pub struct InvalidParameters: Client {}
}

exception! {
    pub struct InvalidPluginName: Client {}
}

exception! {
    pub struct InvalidPolicyAttributeException: Client {}
}

exception! {
    pub struct InvalidPolicyTypeException: Client {}
}

exception! {
    pub struct InvalidResourceId: Client {}
}

exception! {
    pub struct InvalidResourceType: Client {}
}

exception! {
    pub struct InvalidRole: Client {}
}

exception! {
    pub struct InvalidSchedule: Client {}
}

exception! {
    pub struct InvalidTarget: Client {}
}

exception! {
    pub struct InvalidTypeNameException: Client {}
}

exception! {
    pub struct InvalidUpdate: Client {}
}

exception! {
    pub struct InvocationDoesNotExist: Client {}
}

exception! {
    pub struct ItemContentMismatchException: Client {
        type_name: Option<String>,
    }
}

exception! {
    pub struct ItemSizeLimitExceededException: Client {
        type_name: Option<String>,
    }
}

exception! {
    pub struct MaxDocumentSizeExceeded: Client {}
}

exception! {
    pub struct ParameterAlreadyExists: Client {}
}

exception! {
    pub struct ParameterLimitExceeded: Client {}
}

exception! {
    /// A parameter has reached 100 versions; the oldest must be deleted
    /// before a new one can be written.
    pub struct ParameterMaxVersionLimitExceeded: Client {}
}

exception! {
    pub struct ParameterNotFound: Client {}
}

exception! {
    pub struct ParameterPatternMismatchException: Client {}
}

exception! {
    pub struct ParameterVersionLabelLimitExceeded: Client {}
}

exception! {
    pub struct ParameterVersionNotFound: Client {}
}

exception! {
    pub struct PoliciesLimitExceededException: Client {}
}

exception! {
    pub struct ResourceInUseException: Client {}
}

exception! {
    pub struct ResourceLimitExceededException: Client {}
}

exception! {
    pub struct TargetInUseException: Client {}
}

exception! {
    pub struct TargetNotConnected: Client {}
}

exception! {
    pub struct ThrottlingException: Client {
        quota_code: Option<String>,
        service_code: Option<String>,
    }
}

exception! {
    pub struct TooManyTagsError: Client {}
}

exception! {
    pub struct TooManyUpdates: Client {}
}

exception! {
    pub struct TotalSizeLimitExceededException: Client {}
}

exception! {
    pub struct UnsupportedOperatingSystem: Client {}
}

exception! {
    pub struct UnsupportedParameterType: Client {}
}

exception! {
    pub struct UnsupportedPlatformType: Client {}
}

exception! {
    pub struct ValidationException: Client {
        reason_code: Option<String>,
    }
}

/// An error whose discriminant this crate does not model.
#[derive(Debug, Clone, PartialEq)]
pub struct UnhandledError {
    pub name: String,
    pub fault: FaultOrigin,
    pub message: Option<String>,
}

impl fmt::Display for UnhandledError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.message {
            Some(ref message) => write!(f, "{}: {}", self.name, message),
            None => f.write_str(&self.name),
        }
    }
}

/// Strips the namespace prefix (`com.amazonaws.ssm#`) and URI suffix
/// (`:http://...`) the service may attach to an error type.
pub fn sanitize_discriminant(raw: &str) -> &str {
    let name = raw.split(':').next().unwrap_or(raw);
    match name.rfind('#') {
        Some(pos) => &name[pos + 1..],
        None => name,
    }
}

fn decode<E: ServiceException>(body: &str) -> Result<E, ShapeError> {
    serde_json::from_str(body).map_err(|cause| ShapeError::Decode {
        shape: E::NAME.to_owned(),
        cause,
    })
}

fn unhandled(name: &str, body: &str) -> Result<UnhandledError, ShapeError> {
    let value: serde_json::Value =
        serde_json::from_str(body).map_err(|cause| ShapeError::Decode {
            shape: name.to_owned(),
            cause,
        })?;
    let message = value
        .get("Message")
        .or_else(|| value.get("message"))
        .and_then(|m| m.as_str())
        .map(String::from);
    Ok(UnhandledError {
        name: name.to_owned(),
        fault: FaultOrigin::Client,
        message,
    })
}

macro_rules! service_errors {
    ($($exception:ident),+ $(,)?) => {
        /// Any error the service can answer with.
        #[derive(Debug, Clone, PartialEq)]
        pub enum SsmServiceError {
            $( $exception($exception), )+
            Unhandled(UnhandledError),
        }

        impl SsmServiceError {
            /// Names of every modelled exception.
            pub const DISCRIMINANTS: &'static [&'static str] = &[
                $( <$exception as Shape>::NAME, )+
            ];

            /// Decodes an error body, picking the shape by discriminant.
            ///
            /// Unknown discriminants become `Unhandled` with whatever message
            /// the body carries. A blank body reads as `{}`.
            pub fn from_json(discriminant: &str, body: &str) -> Result<Self, ShapeError> {
                let name = sanitize_discriminant(discriminant);
                let body = if body.trim().is_empty() { "{}" } else { body };
                $(
                    if name == <$exception as Shape>::NAME {
                        return decode::<$exception>(body).map(SsmServiceError::$exception);
                    }
                )+
                unhandled(name, body).map(SsmServiceError::Unhandled)
            }

            pub fn discriminant(&self) -> &str {
                match self {
                    $( SsmServiceError::$exception(e) => e.discriminant(), )+
                    SsmServiceError::Unhandled(e) => &e.name,
                }
            }

            pub fn fault(&self) -> FaultOrigin {
                match self {
                    $( SsmServiceError::$exception(e) => e.fault(), )+
                    SsmServiceError::Unhandled(e) => e.fault,
                }
            }

            pub fn message(&self) -> Option<&str> {
                match self {
                    $( SsmServiceError::$exception(e) => ServiceException::message(e), )+
                    SsmServiceError::Unhandled(e) => e.message.as_ref().map(String::as_str),
                }
            }

            pub(crate) fn register_all(registry: &mut ShapeRegistry) {
                $( registry.register_exception::<$exception>(); )+
            }
        }

        impl FilterSensitiveLog for SsmServiceError {
            fn filter_sensitive_log(&self) -> Self {
                match self {
                    $( SsmServiceError::$exception(e) => SsmServiceError::$exception(e.filter_sensitive_log()), )+
                    SsmServiceError::Unhandled(e) => SsmServiceError::Unhandled(e.clone()),
                }
            }
        }

        impl fmt::Display for SsmServiceError {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                match self {
                    $( SsmServiceError::$exception(e) => fmt::Display::fmt(e, f), )+
                    SsmServiceError::Unhandled(e) => fmt::Display::fmt(e, f),
                }
            }
        }

        $(
            impl From<$exception> for SsmServiceError {
                fn from(e: $exception) -> Self {
                    SsmServiceError::$exception(e)
                }
            }
        )+
    };
}

service_errors! {
    AlreadyExistsException,
    AssociationAlreadyExists,
    AssociationDoesNotExist,
    AssociationExecutionDoesNotExist,
    AssociationLimitExceeded,
    AssociationVersionLimitExceeded,
    ComplianceTypeCountLimitExceededException,
    DocumentAlreadyExists,
    DocumentLimitExceeded,
    DoesNotExistException,
    DuplicateInstanceId,
    FeatureNotAvailableException,
    HierarchyLevelLimitExceededException,
    HierarchyTypeMismatchException,
    IdempotentParameterMismatch,
    IncompatiblePolicyException,
    InternalServerError,
    InvalidActivation,
    InvalidActivationId,
    InvalidAllowedPatternException,
    InvalidAssociationVersion,
    InvalidCommandId,
    InvalidDocument,
    InvalidDocumentContent,
    InvalidDocumentOperation,
    InvalidDocumentSchemaVersion,
    InvalidDocumentType,
    InvalidDocumentVersion,
    InvalidFilter,
    InvalidFilterKey,
    InvalidFilterValue,
    InvalidInstanceId,
    InvalidInstanceInformationFilterValue,
    InvalidItemContentException,
    InvalidKeyId,
    InvalidNextToken,
    InvalidNotificationConfig,
    InvalidOutputFolder,
    InvalidOutputLocation,
    InvalidParameters,
    InvalidPluginName,
    InvalidPolicyAttributeException,
    InvalidPolicyTypeException,
    InvalidResourceId,
    InvalidResourceType,
    InvalidRole,
    InvalidSchedule,
    InvalidTarget,
    InvalidTypeNameException,
    InvalidUpdate,
    InvocationDoesNotExist,
    ItemContentMismatchException,
    ItemSizeLimitExceededException,
    MaxDocumentSizeExceeded,
    ParameterAlreadyExists,
    ParameterLimitExceeded,
    ParameterMaxVersionLimitExceeded,
    ParameterNotFound,
    ParameterPatternMismatchException,
    ParameterVersionLabelLimitExceeded,
    ParameterVersionNotFound,
    PoliciesLimitExceededException,
    ResourceInUseException,
    ResourceLimitExceededException,
    TargetInUseException,
    TargetNotConnected,
    ThrottlingException,
    TooManyTagsError,
    TooManyUpdates,
    TotalSizeLimitExceededException,
    UnsupportedOperatingSystem,
    UnsupportedParameterType,
    UnsupportedPlatformType,
    ValidationException,
}

impl failure::Fail for SsmServiceError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exception_carries_discriminant_and_fault() {
        let err = ParameterNotFound {
            message: Some("Parameter /app/db/password not found.".to_string()),
            ..Default::default()
        };
        assert_eq!(err.discriminant(), "ParameterNotFound");
        assert_eq!(err.fault(), FaultOrigin::Client);
        assert_eq!(
            err.to_string(),
            "ParameterNotFound: Parameter /app/db/password not found."
        );
        assert_eq!(InternalServerError::FAULT, FaultOrigin::Server);
    }

    #[test]
    fn message_accepts_both_spellings() {
        let upper: InvalidKeyId = serde_json::from_str(r#"{"Message":"bad key"}"#).unwrap();
        let lower: InvalidKeyId = serde_json::from_str(r#"{"message":"bad key"}"#).unwrap();
        assert_eq!(upper, lower);
        assert_eq!(ServiceException::message(&upper), Some("bad key"));
    }

    #[test]
    fn from_json_picks_shape_by_discriminant() {
        let err = SsmServiceError::from_json(
            "com.amazonaws.ssm#ItemContentMismatchException",
            r#"{"Message":"hash mismatch","TypeName":"AWS:Application"}"#,
        )
        .unwrap();
        match err {
            SsmServiceError::ItemContentMismatchException(ref e) => {
                assert_eq!(e.type_name.as_ref().map(String::as_str), Some("AWS:Application"));
            }
            ref other => panic!("unexpected error: {:?}", other),
        }
        assert_eq!(err.discriminant(), "ItemContentMismatchException");
        assert_eq!(err.message(), Some("hash mismatch"));
    }

    #[test]
    fn unknown_discriminant_is_unhandled() {
        let err = SsmServiceError::from_json("OpsItemLimitExceededException", r#"{"message":"slow down"}"#)
            .unwrap();
        assert_eq!(err.discriminant(), "OpsItemLimitExceededException");
        assert_eq!(err.fault(), FaultOrigin::Client);
        assert_eq!(err.message(), Some("slow down"));
    }

    #[test]
    fn sanitize_strips_namespace_and_uri() {
        assert_eq!(
            sanitize_discriminant("InvalidFilterKey:http://internal.amazon.com/coral/com.amazonaws.ssm/"),
            "InvalidFilterKey"
        );
        assert_eq!(sanitize_discriminant("com.amazonaws.ssm#TooManyUpdates"), "TooManyUpdates");
        assert_eq!(sanitize_discriminant("TooManyUpdates"), "TooManyUpdates");
    }

    #[test]
    fn blank_body_still_yields_discriminant_and_fault() {
        let err = SsmServiceError::from_json("InternalServerError", "").unwrap();
        assert_eq!(err.discriminant(), "InternalServerError");
        assert_eq!(err.fault(), FaultOrigin::Server);
        assert_eq!(err.message(), None);

        let unknown = SsmServiceError::from_json("OpsMetadataNotFoundException", " \n").unwrap();
        assert_eq!(unknown.discriminant(), "OpsMetadataNotFoundException");
        assert_eq!(unknown.fault(), FaultOrigin::Client);
    }

    #[test]
    fn invalid_body_is_a_decode_error() {
        let result = SsmServiceError::from_json("InvalidDocument", "not json");
        match result {
            Err(ShapeError::Decode { ref shape, .. }) => assert_eq!(shape, "InvalidDocument"),
            other => panic!("expected decode error, got {:?}", other),
        }
    }
}

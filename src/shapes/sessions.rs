//! Session Manager shapes.

use crate::enums::{SessionFilterKey, SessionState, SessionStatus};
use crate::registry::ShapeRegistry;
use crate::shapes::common::ParameterValues;
use crate::types::Timestamp;

shape! {
    pub struct StartSessionRequest {
        target: String,
        document_name: Option<String>,
        reason: Option<String>,
        parameters: Option<ParameterValues>,
    }
}

shape! {
    /// Connection details for the Session Manager data channel.
    pub struct StartSessionResult {
        session_id: Option<String>,
        token_value: Option<String>,
        stream_url: Option<String>,
    }
}

shape! {
    pub struct ResumeSessionRequest {
        session_id: String,
    }
}

shape! {
    pub struct ResumeSessionResult {
        session_id: Option<String>,
        token_value: Option<String>,
        stream_url: Option<String>,
    }
}

shape! {
    pub struct TerminateSessionRequest {
        session_id: String,
    }
}

shape! {
    pub struct TerminateSessionResult {
        session_id: Option<String>,
    }
}

shape! {
    pub struct SessionManagerOutputUrl {
        s3_output_url: Option<String>,
        cloud_watch_output_url: Option<String>,
    }
}

shape! {
    pub struct Session {
        session_id: Option<String>,
        target: Option<String>,
        status: Option<SessionStatus>,
        start_date: Option<Timestamp>,
        end_date: Option<Timestamp>,
        document_name: Option<String>,
        owner: Option<String>,
        reason: Option<String>,
        details: Option<String>,
        output_url: Option<SessionManagerOutputUrl>,
        max_session_duration: Option<String>,
    }
}

shape! {
    pub struct SessionFilter {
        key: SessionFilterKey,
        value: String,
    }
}

shape! {
    pub struct DescribeSessionsRequest {
        state: SessionState,
        max_results: Option<i32>,
        next_token: Option<String>,
        filters: Option<Vec<SessionFilter>>,
    }
}

shape! {
    pub struct DescribeSessionsResult {
        sessions: Option<Vec<Session>>,
        next_token: Option<String>,
    }
}

pub(crate) fn register_sessions(registry: &mut ShapeRegistry) {
    register_shapes!(registry;
        StartSessionRequest,
        StartSessionResult,
        ResumeSessionRequest,
        ResumeSessionResult,
        TerminateSessionRequest,
        TerminateSessionResult,
        SessionManagerOutputUrl,
        Session,
        SessionFilter,
        DescribeSessionsRequest,
        DescribeSessionsResult,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sensitive::FilterSensitiveLog;

    #[test]
    fn describe_sessions_request_requires_state() {
        let missing: Result<DescribeSessionsRequest, _> = serde_json::from_str("{}");
        assert!(missing.is_err());

        let request: DescribeSessionsRequest =
            serde_json::from_str(r#"{"State":"Active","MaxResults":10}"#).unwrap();
        assert_eq!(request.state, SessionState::Active);
        assert_eq!(request.filter_sensitive_log(), request);
    }
}

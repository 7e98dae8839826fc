//! Maintenance window shapes.
//!
//! Task parameters, owner information, descriptions and the payloads of
//! every task flavour (Run Command, Automation, Step Functions, Lambda) are
//! sensitive here.

use std::collections::HashMap;

use crate::enums::{
    DocumentHashType, MaintenanceWindowExecutionStatus, MaintenanceWindowResourceType,
    MaintenanceWindowTaskCutoffBehavior, MaintenanceWindowTaskType,
};
use crate::registry::ShapeRegistry;
use crate::sensitive::Sensitive;
use crate::shapes::common::{
    AlarmConfiguration, CloudWatchOutputConfig, NotificationConfig, ParameterValues, Tag, Target,
};
use crate::types::{Blob, Timestamp};

/// Task parameters keyed by name.
pub type TaskParameters = HashMap<String, MaintenanceWindowTaskParameterValueExpression>;

shape! {
    /// Values of one task parameter. The list is masked as a whole.
    pub struct MaintenanceWindowTaskParameterValueExpression {
        values: Option<Sensitive<Vec<String>>> => mask,
    }
}

shape! {
    pub struct LoggingInfo {
        s3_bucket_name: String,
        s3_key_prefix: Option<String>,
        s3_region: String,
    }
}

shape! {
    pub struct MaintenanceWindowRunCommandParameters {
        comment: Option<String>,
        cloud_watch_output_config: Option<CloudWatchOutputConfig>,
        document_hash: Option<String>,
        document_hash_type: Option<DocumentHashType>,
        document_version: Option<String>,
        notification_config: Option<NotificationConfig>,
        output_s3_bucket_name: Option<String>,
        output_s3_key_prefix: Option<String>,
        parameters: Option<Sensitive<ParameterValues>> => mask,
        service_role_arn: Option<String>,
        timeout_seconds: Option<i32>,
    }
}

shape! {
    pub struct MaintenanceWindowAutomationParameters {
        document_version: Option<String>,
        parameters: Option<ParameterValues>,
    }
}

shape! {
    pub struct MaintenanceWindowStepFunctionsParameters {
        input: Option<Sensitive<String>> => mask,
        name: Option<String>,
    }
}

shape! {
    pub struct MaintenanceWindowLambdaParameters {
        client_context: Option<String>,
        qualifier: Option<String>,
        payload: Option<Sensitive<Blob>> => mask,
    }
}

shape! {
    /// Parameters for whichever task type is registered; only one member is
    /// expected to be set.
    pub struct MaintenanceWindowTaskInvocationParameters {
        run_command: Option<MaintenanceWindowRunCommandParameters> => nested,
        automation: Option<MaintenanceWindowAutomationParameters> => nested,
        step_functions: Option<MaintenanceWindowStepFunctionsParameters> => nested,
        lambda: Option<MaintenanceWindowLambdaParameters> => nested,
    }
}

shape! {
    pub struct CreateMaintenanceWindowRequest {
        name: String,
        description: Option<Sensitive<String>> => mask,
        start_date: Option<String>,
        end_date: Option<String>,
        schedule: String,
        schedule_timezone: Option<String>,
        schedule_offset: Option<i32>,
        duration: i32,
        cutoff: i32,
        allow_unassociated_targets: bool,
        client_token: Option<String>,
        tags: Option<Vec<Tag>>,
    }
}

shape! {
    pub struct CreateMaintenanceWindowResult {
        window_id: Option<String>,
    }
}

shape! {
    pub struct GetMaintenanceWindowRequest {
        window_id: String,
    }
}

shape! {
    pub struct GetMaintenanceWindowResult {
        window_id: Option<String>,
        name: Option<String>,
        description: Option<Sensitive<String>> => mask,
        start_date: Option<String>,
        end_date: Option<String>,
        schedule: Option<String>,
        schedule_timezone: Option<String>,
        schedule_offset: Option<i32>,
        next_execution_time: Option<String>,
        duration: Option<i32>,
        cutoff: Option<i32>,
        allow_unassociated_targets: Option<bool>,
        enabled: Option<bool>,
        created_date: Option<Timestamp>,
        modified_date: Option<Timestamp>,
    }
}

shape! {
    pub struct MaintenanceWindowFilter {
        key: Option<String>,
        values: Option<Vec<String>>,
    }
}

shape! {
    pub struct MaintenanceWindowIdentity {
        window_id: Option<String>,
        name: Option<String>,
        description: Option<Sensitive<String>> => mask,
        enabled: Option<bool>,
        duration: Option<i32>,
        cutoff: Option<i32>,
        schedule: Option<String>,
        schedule_timezone: Option<String>,
        schedule_offset: Option<i32>,
        end_date: Option<String>,
        start_date: Option<String>,
        next_execution_time: Option<String>,
    }
}

shape! {
    pub struct DescribeMaintenanceWindowsRequest {
        filters: Option<Vec<MaintenanceWindowFilter>>,
        max_results: Option<i32>,
        next_token: Option<String>,
    }
}

shape! {
    pub struct DescribeMaintenanceWindowsResult {
        window_identities: Option<Vec<MaintenanceWindowIdentity>> => nested,
        next_token: Option<String>,
    }
}

shape! {
    pub struct RegisterTargetWithMaintenanceWindowRequest {
        window_id: String,
        resource_type: MaintenanceWindowResourceType,
        targets: Vec<Target>,
        owner_information: Option<Sensitive<String>> => mask,
        name: Option<String>,
        description: Option<Sensitive<String>> => mask,
        client_token: Option<String>,
    }
}

shape! {
    pub struct RegisterTargetWithMaintenanceWindowResult {
        window_target_id: Option<String>,
    }
}

shape! {
    pub struct MaintenanceWindowTarget {
        window_id: Option<String>,
        window_target_id: Option<String>,
        resource_type: Option<MaintenanceWindowResourceType>,
        targets: Option<Vec<Target>>,
        owner_information: Option<Sensitive<String>> => mask,
        name: Option<String>,
        description: Option<Sensitive<String>> => mask,
    }
}

shape! {
    pub struct DescribeMaintenanceWindowTargetsRequest {
        window_id: String,
        filters: Option<Vec<MaintenanceWindowFilter>>,
        max_results: Option<i32>,
        next_token: Option<String>,
    }
}

shape! {
    pub struct DescribeMaintenanceWindowTargetsResult {
        targets: Option<Vec<MaintenanceWindowTarget>> => nested,
        next_token: Option<String>,
    }
}

shape! {
    pub struct RegisterTaskWithMaintenanceWindowRequest {
        window_id: String,
        targets: Option<Vec<Target>>,
        task_arn: String,
        service_role_arn: Option<String>,
        task_type: MaintenanceWindowTaskType,
        task_parameters: Option<Sensitive<TaskParameters>> => mask,
        task_invocation_parameters: Option<MaintenanceWindowTaskInvocationParameters> => nested,
        priority: Option<i32>,
        max_concurrency: Option<String>,
        max_errors: Option<String>,
        logging_info: Option<LoggingInfo>,
        name: Option<String>,
        description: Option<Sensitive<String>> => mask,
        client_token: Option<String>,
        cutoff_behavior: Option<MaintenanceWindowTaskCutoffBehavior>,
        alarm_configuration: Option<AlarmConfiguration>,
    }
}

shape! {
    pub struct RegisterTaskWithMaintenanceWindowResult {
        window_task_id: Option<String>,
    }
}

shape! {
    pub struct MaintenanceWindowTask {
        window_id: Option<String>,
        window_task_id: Option<String>,
        task_arn: Option<String>,
        #[serde(rename = "Type")]
        task_type: Option<MaintenanceWindowTaskType>,
        targets: Option<Vec<Target>>,
        task_parameters: Option<Sensitive<TaskParameters>> => mask,
        priority: Option<i32>,
        logging_info: Option<LoggingInfo>,
        service_role_arn: Option<String>,
        max_concurrency: Option<String>,
        max_errors: Option<String>,
        name: Option<String>,
        description: Option<Sensitive<String>> => mask,
        cutoff_behavior: Option<MaintenanceWindowTaskCutoffBehavior>,
        alarm_configuration: Option<AlarmConfiguration>,
    }
}

shape! {
    pub struct DescribeMaintenanceWindowTasksRequest {
        window_id: String,
        filters: Option<Vec<MaintenanceWindowFilter>>,
        max_results: Option<i32>,
        next_token: Option<String>,
    }
}

shape! {
    pub struct DescribeMaintenanceWindowTasksResult {
        tasks: Option<Vec<MaintenanceWindowTask>> => nested,
        next_token: Option<String>,
    }
}

shape! {
    pub struct MaintenanceWindowExecution {
        window_id: Option<String>,
        window_execution_id: Option<String>,
        status: Option<MaintenanceWindowExecutionStatus>,
        status_details: Option<String>,
        start_time: Option<Timestamp>,
        end_time: Option<Timestamp>,
    }
}

shape! {
    pub struct DescribeMaintenanceWindowExecutionsRequest {
        window_id: String,
        filters: Option<Vec<MaintenanceWindowFilter>>,
        max_results: Option<i32>,
        next_token: Option<String>,
    }
}

shape! {
    pub struct DescribeMaintenanceWindowExecutionsResult {
        window_executions: Option<Vec<MaintenanceWindowExecution>>,
        next_token: Option<String>,
    }
}

shape! {
    pub struct GetMaintenanceWindowExecutionTaskRequest {
        window_execution_id: String,
        task_id: String,
    }
}

shape! {
    pub struct GetMaintenanceWindowExecutionTaskResult {
        window_execution_id: Option<String>,
        task_execution_id: Option<String>,
        task_arn: Option<String>,
        service_role: Option<String>,
        #[serde(rename = "Type")]
        task_type: Option<MaintenanceWindowTaskType>,
        task_parameters: Option<Sensitive<Vec<TaskParameters>>> => mask,
        priority: Option<i32>,
        max_concurrency: Option<String>,
        max_errors: Option<String>,
        status: Option<MaintenanceWindowExecutionStatus>,
        status_details: Option<String>,
        start_time: Option<Timestamp>,
        end_time: Option<Timestamp>,
        alarm_configuration: Option<AlarmConfiguration>,
    }
}

shape! {
    pub struct MaintenanceWindowExecutionTaskInvocationIdentity {
        window_execution_id: Option<String>,
        task_execution_id: Option<String>,
        invocation_id: Option<String>,
        execution_id: Option<String>,
        task_type: Option<MaintenanceWindowTaskType>,
        parameters: Option<Sensitive<String>> => mask,
        status: Option<MaintenanceWindowExecutionStatus>,
        status_details: Option<String>,
        start_time: Option<Timestamp>,
        end_time: Option<Timestamp>,
        owner_information: Option<Sensitive<String>> => mask,
        window_target_id: Option<String>,
    }
}

shape! {
    pub struct DescribeMaintenanceWindowExecutionTaskInvocationsRequest {
        window_execution_id: String,
        task_id: String,
        filters: Option<Vec<MaintenanceWindowFilter>>,
        max_results: Option<i32>,
        next_token: Option<String>,
    }
}

shape! {
    pub struct DescribeMaintenanceWindowExecutionTaskInvocationsResult {
        window_execution_task_invocation_identities:
            Option<Vec<MaintenanceWindowExecutionTaskInvocationIdentity>> => nested,
        next_token: Option<String>,
    }
}

pub(crate) fn register_maintenance_windows(registry: &mut ShapeRegistry) {
    register_shapes!(registry;
        MaintenanceWindowTaskParameterValueExpression,
        LoggingInfo,
        MaintenanceWindowRunCommandParameters,
        MaintenanceWindowAutomationParameters,
        MaintenanceWindowStepFunctionsParameters,
        MaintenanceWindowLambdaParameters,
        MaintenanceWindowTaskInvocationParameters,
        CreateMaintenanceWindowRequest,
        CreateMaintenanceWindowResult,
        GetMaintenanceWindowRequest,
        GetMaintenanceWindowResult,
        MaintenanceWindowFilter,
        MaintenanceWindowIdentity,
        DescribeMaintenanceWindowsRequest,
        DescribeMaintenanceWindowsResult,
        RegisterTargetWithMaintenanceWindowRequest,
        RegisterTargetWithMaintenanceWindowResult,
        MaintenanceWindowTarget,
        DescribeMaintenanceWindowTargetsRequest,
        DescribeMaintenanceWindowTargetsResult,
        RegisterTaskWithMaintenanceWindowRequest,
        RegisterTaskWithMaintenanceWindowResult,
        MaintenanceWindowTask,
        DescribeMaintenanceWindowTasksRequest,
        DescribeMaintenanceWindowTasksResult,
        MaintenanceWindowExecution,
        DescribeMaintenanceWindowExecutionsRequest,
        DescribeMaintenanceWindowExecutionsResult,
        GetMaintenanceWindowExecutionTaskRequest,
        GetMaintenanceWindowExecutionTaskResult,
        MaintenanceWindowExecutionTaskInvocationIdentity,
        DescribeMaintenanceWindowExecutionTaskInvocationsRequest,
        DescribeMaintenanceWindowExecutionTaskInvocationsResult,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sensitive::{FilterSensitiveLog, SENSITIVE_STRING};

    fn lambda_invocation() -> MaintenanceWindowTaskInvocationParameters {
        MaintenanceWindowTaskInvocationParameters {
            lambda: Some(MaintenanceWindowLambdaParameters {
                client_context: None,
                qualifier: Some("$LATEST".to_string()),
                payload: Some(Blob::new(&b"{\"password\":\"hunter2\"}"[..]).into()),
                ..Default::default()
            }),
            step_functions: Some(MaintenanceWindowStepFunctionsParameters {
                input: None,
                name: Some("nightly".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    #[test]
    fn lambda_payload_is_masked_and_siblings_kept() {
        let input = lambda_invocation();
        let redacted = input.filter_sensitive_log();
        let lambda = redacted.lambda.as_ref().unwrap();
        assert_eq!(lambda.payload, Some(Sensitive::Redacted));
        assert_eq!(lambda.qualifier, Some("$LATEST".to_string()));
        assert_eq!(redacted.step_functions, input.step_functions);
        assert_eq!(redacted.run_command, None);
        assert_eq!(redacted.automation, None);
    }

    #[test]
    fn task_parameter_values_are_masked_wholesale() {
        let expression = MaintenanceWindowTaskParameterValueExpression {
            values: Some(vec!["a".to_string(), "b".to_string()].into()),
            ..Default::default()
        };
        let json = serde_json::to_value(&expression.filter_sensitive_log()).unwrap();
        assert_eq!(json["Values"], SENSITIVE_STRING);
    }

    #[test]
    fn register_task_masks_map_and_description() {
        let mut task_parameters = TaskParameters::new();
        task_parameters.insert(
            "commands".to_string(),
            MaintenanceWindowTaskParameterValueExpression {
                values: Some(vec!["yum update -y".to_string()].into()),
                ..Default::default()
            },
        );
        let request = RegisterTaskWithMaintenanceWindowRequest {
            window_id: "mw-0c50858d01EXAMPLE".to_string(),
            task_arn: "AWS-RunShellScript".to_string(),
            task_type: MaintenanceWindowTaskType::RunCommand,
            task_parameters: Some(task_parameters.into()),
            task_invocation_parameters: Some(MaintenanceWindowTaskInvocationParameters {
                run_command: Some(MaintenanceWindowRunCommandParameters {
                    comment: Some("patch".to_string()),
                    timeout_seconds: Some(600),
                    ..Default::default()
                }),
                ..Default::default()
            }),
            description: Some("runs as root".into()),
            ..Default::default()
        };
        let redacted = request.filter_sensitive_log();
        assert_eq!(redacted.task_parameters, Some(Sensitive::Redacted));
        assert_eq!(redacted.description, Some(Sensitive::Redacted));
        assert_eq!(redacted.task_invocation_parameters, request.task_invocation_parameters);
        assert_eq!(redacted.task_type, MaintenanceWindowTaskType::RunCommand);
    }

    #[test]
    fn invocation_identities_mask_parameters_and_owner() {
        let result = DescribeMaintenanceWindowExecutionTaskInvocationsResult {
            window_execution_task_invocation_identities: Some(vec![
                MaintenanceWindowExecutionTaskInvocationIdentity {
                    invocation_id: Some("c0b7b4d8".to_string()),
                    parameters: Some("{\"commands\":[\"whoami\"]}".into()),
                    owner_information: Some("team-a".into()),
                    status: Some(MaintenanceWindowExecutionStatus::Success),
                    ..Default::default()
                },
            ]),
            next_token: None,
            ..Default::default()
        };
        let redacted = result.filter_sensitive_log();
        let identity = &redacted.window_execution_task_invocation_identities.unwrap()[0];
        assert_eq!(identity.parameters, Some(Sensitive::Redacted));
        assert_eq!(identity.owner_information, Some(Sensitive::Redacted));
        assert_eq!(identity.invocation_id, Some("c0b7b4d8".to_string()));
    }

    #[test]
    fn lambda_payload_decodes_from_base64() {
        let body = r#"{"Lambda":{"Qualifier":"1","Payload":"eyJrZXkiOiJ2YWx1ZSJ9"}}"#;
        let parameters: MaintenanceWindowTaskInvocationParameters =
            serde_json::from_str(body).unwrap();
        let payload = parameters.lambda.unwrap().payload.unwrap();
        assert_eq!(
            payload.value().map(Blob::as_bytes),
            Some(&b"{\"key\":\"value\"}"[..])
        );
    }
}

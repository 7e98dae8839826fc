//! Run Command shapes.

use crate::enums::{
    CommandFilterKey, CommandInvocationDetailStatus, CommandInvocationStatus, CommandPluginStatus,
    CommandStatus, DocumentHashType,
};
use crate::registry::ShapeRegistry;
use crate::sensitive::Sensitive;
use crate::shapes::common::{
    AlarmConfiguration, CloudWatchOutputConfig, NotificationConfig, ParameterValues, Target,
};
use crate::types::Timestamp;

shape! {
    pub struct SendCommandRequest {
        instance_ids: Option<Vec<String>>,
        targets: Option<Vec<Target>>,
        document_name: String,
        document_version: Option<String>,
        document_hash: Option<String>,
        document_hash_type: Option<DocumentHashType>,
        timeout_seconds: Option<i32>,
        comment: Option<String>,
        parameters: Option<Sensitive<ParameterValues>> => mask,
        output_s3_region: Option<String>,
        output_s3_bucket_name: Option<String>,
        output_s3_key_prefix: Option<String>,
        max_concurrency: Option<String>,
        max_errors: Option<String>,
        service_role_arn: Option<String>,
        notification_config: Option<NotificationConfig>,
        cloud_watch_output_config: Option<CloudWatchOutputConfig>,
        alarm_configuration: Option<AlarmConfiguration>,
    }
}

shape! {
    /// A command as tracked by the service after `SendCommand`.
    pub struct Command {
        command_id: Option<String>,
        document_name: Option<String>,
        document_version: Option<String>,
        comment: Option<String>,
        expires_after: Option<Timestamp>,
        parameters: Option<Sensitive<ParameterValues>> => mask,
        instance_ids: Option<Vec<String>>,
        targets: Option<Vec<Target>>,
        requested_date_time: Option<Timestamp>,
        status: Option<CommandStatus>,
        status_details: Option<String>,
        output_s3_region: Option<String>,
        output_s3_bucket_name: Option<String>,
        output_s3_key_prefix: Option<String>,
        max_concurrency: Option<String>,
        max_errors: Option<String>,
        target_count: Option<i32>,
        completed_count: Option<i32>,
        error_count: Option<i32>,
        delivery_timed_out_count: Option<i32>,
        service_role: Option<String>,
        notification_config: Option<NotificationConfig>,
        cloud_watch_output_config: Option<CloudWatchOutputConfig>,
        timeout_seconds: Option<i32>,
        alarm_configuration: Option<AlarmConfiguration>,
    }
}

shape! {
    pub struct SendCommandResult {
        command: Option<Command> => nested,
    }
}

shape! {
    pub struct CommandFilter {
        key: CommandFilterKey,
        value: String,
    }
}

shape! {
    pub struct ListCommandsRequest {
        command_id: Option<String>,
        instance_id: Option<String>,
        max_results: Option<i32>,
        next_token: Option<String>,
        filters: Option<Vec<CommandFilter>>,
    }
}

shape! {
    pub struct ListCommandsResult {
        commands: Option<Vec<Command>> => nested,
        next_token: Option<String>,
    }
}

shape! {
    pub struct CommandPlugin {
        name: Option<String>,
        status: Option<CommandPluginStatus>,
        status_details: Option<String>,
        response_code: Option<i32>,
        response_start_date_time: Option<Timestamp>,
        response_finish_date_time: Option<Timestamp>,
        output: Option<String>,
        standard_output_url: Option<String>,
        standard_error_url: Option<String>,
        output_s3_region: Option<String>,
        output_s3_bucket_name: Option<String>,
        output_s3_key_prefix: Option<String>,
    }
}

shape! {
    /// The command as it ran on one managed node.
    pub struct CommandInvocation {
        command_id: Option<String>,
        instance_id: Option<String>,
        instance_name: Option<String>,
        comment: Option<String>,
        document_name: Option<String>,
        document_version: Option<String>,
        requested_date_time: Option<Timestamp>,
        status: Option<CommandInvocationStatus>,
        status_details: Option<String>,
        trace_output: Option<String>,
        standard_output_url: Option<String>,
        standard_error_url: Option<String>,
        command_plugins: Option<Vec<CommandPlugin>>,
        service_role: Option<String>,
        notification_config: Option<NotificationConfig>,
        cloud_watch_output_config: Option<CloudWatchOutputConfig>,
    }
}

shape! {
    pub struct ListCommandInvocationsRequest {
        command_id: Option<String>,
        instance_id: Option<String>,
        max_results: Option<i32>,
        next_token: Option<String>,
        filters: Option<Vec<CommandFilter>>,
        details: Option<bool>,
    }
}

shape! {
    pub struct ListCommandInvocationsResult {
        command_invocations: Option<Vec<CommandInvocation>>,
        next_token: Option<String>,
    }
}

shape! {
    pub struct GetCommandInvocationRequest {
        command_id: String,
        instance_id: String,
        plugin_name: Option<String>,
    }
}

shape! {
    pub struct GetCommandInvocationResult {
        command_id: Option<String>,
        instance_id: Option<String>,
        comment: Option<String>,
        document_name: Option<String>,
        document_version: Option<String>,
        plugin_name: Option<String>,
        response_code: Option<i32>,
        execution_start_date_time: Option<String>,
        execution_elapsed_time: Option<String>,
        execution_end_date_time: Option<String>,
        status: Option<CommandInvocationStatus>,
        status_details: Option<CommandInvocationDetailStatus>,
        standard_output_content: Option<String>,
        standard_output_url: Option<String>,
        standard_error_content: Option<String>,
        standard_error_url: Option<String>,
        cloud_watch_output_config: Option<CloudWatchOutputConfig>,
    }
}

shape! {
    pub struct CancelCommandRequest {
        command_id: String,
        instance_ids: Option<Vec<String>>,
    }
}

shape! {
    pub struct CancelCommandResult {}
}

pub(crate) fn register_commands(registry: &mut ShapeRegistry) {
    register_shapes!(registry;
        SendCommandRequest,
        Command,
        SendCommandResult,
        CommandFilter,
        ListCommandsRequest,
        ListCommandsResult,
        CommandPlugin,
        CommandInvocation,
        ListCommandInvocationsRequest,
        ListCommandInvocationsResult,
        GetCommandInvocationRequest,
        GetCommandInvocationResult,
        CancelCommandRequest,
        CancelCommandResult,
    );
}

//! State Manager association shapes.

use std::collections::HashMap;

use crate::enums::{
    AssociationComplianceSeverity, AssociationExecutionFilterKey, AssociationFilterKey,
    AssociationFilterOperatorType, AssociationStatusName, AssociationSyncCompliance, Fault,
};
use crate::registry::ShapeRegistry;
use crate::sensitive::Sensitive;
use crate::shapes::common::{AlarmConfiguration, ParameterValues, S3OutputLocation, Target, Tag};
use crate::types::Timestamp;

shape! {
    pub struct InstanceAssociationOutputLocation {
        s3_location: Option<S3OutputLocation>,
    }
}

shape! {
    pub struct AssociationStatus {
        date: Timestamp,
        name: AssociationStatusName,
        message: String,
        additional_info: Option<String>,
    }
}

shape! {
    /// Per-status counts of the targets an association ran against.
    pub struct AssociationOverview {
        status: Option<String>,
        detailed_status: Option<String>,
        association_status_aggregated_count: Option<HashMap<String, i32>>,
    }
}

shape! {
    pub struct AssociationDescription {
        name: Option<String>,
        instance_id: Option<String>,
        association_version: Option<String>,
        date: Option<Timestamp>,
        last_update_association_date: Option<Timestamp>,
        status: Option<AssociationStatus>,
        overview: Option<AssociationOverview>,
        document_version: Option<String>,
        automation_target_parameter_name: Option<String>,
        parameters: Option<Sensitive<ParameterValues>> => mask,
        association_id: Option<String>,
        targets: Option<Vec<Target>>,
        schedule_expression: Option<String>,
        output_location: Option<InstanceAssociationOutputLocation>,
        last_execution_date: Option<Timestamp>,
        last_successful_execution_date: Option<Timestamp>,
        association_name: Option<String>,
        max_errors: Option<String>,
        max_concurrency: Option<String>,
        compliance_severity: Option<AssociationComplianceSeverity>,
        sync_compliance: Option<AssociationSyncCompliance>,
        apply_only_at_cron_interval: Option<bool>,
        calendar_names: Option<Vec<String>>,
        schedule_offset: Option<i32>,
        duration: Option<i32>,
        alarm_configuration: Option<AlarmConfiguration>,
    }
}

shape! {
    /// Summary row of `ListAssociations`; carries no parameters.
    pub struct Association {
        name: Option<String>,
        instance_id: Option<String>,
        association_id: Option<String>,
        association_version: Option<String>,
        document_version: Option<String>,
        targets: Option<Vec<Target>>,
        last_execution_date: Option<Timestamp>,
        overview: Option<AssociationOverview>,
        schedule_expression: Option<String>,
        association_name: Option<String>,
        schedule_offset: Option<i32>,
        duration: Option<i32>,
    }
}

shape! {
    pub struct CreateAssociationRequest {
        name: String,
        document_version: Option<String>,
        instance_id: Option<String>,
        parameters: Option<Sensitive<ParameterValues>> => mask,
        targets: Option<Vec<Target>>,
        schedule_expression: Option<String>,
        output_location: Option<InstanceAssociationOutputLocation>,
        association_name: Option<String>,
        automation_target_parameter_name: Option<String>,
        max_errors: Option<String>,
        max_concurrency: Option<String>,
        compliance_severity: Option<AssociationComplianceSeverity>,
        sync_compliance: Option<AssociationSyncCompliance>,
        apply_only_at_cron_interval: Option<bool>,
        calendar_names: Option<Vec<String>>,
        schedule_offset: Option<i32>,
        duration: Option<i32>,
        tags: Option<Vec<Tag>>,
        alarm_configuration: Option<AlarmConfiguration>,
    }
}

shape! {
    pub struct CreateAssociationResult {
        association_description: Option<AssociationDescription> => nested,
    }
}

shape! {
    pub struct CreateAssociationBatchRequestEntry {
        name: String,
        instance_id: Option<String>,
        parameters: Option<Sensitive<ParameterValues>> => mask,
        automation_target_parameter_name: Option<String>,
        document_version: Option<String>,
        targets: Option<Vec<Target>>,
        schedule_expression: Option<String>,
        output_location: Option<InstanceAssociationOutputLocation>,
        association_name: Option<String>,
        max_errors: Option<String>,
        max_concurrency: Option<String>,
        compliance_severity: Option<AssociationComplianceSeverity>,
        sync_compliance: Option<AssociationSyncCompliance>,
        apply_only_at_cron_interval: Option<bool>,
        calendar_names: Option<Vec<String>>,
        schedule_offset: Option<i32>,
        duration: Option<i32>,
        alarm_configuration: Option<AlarmConfiguration>,
    }
}

shape! {
    pub struct CreateAssociationBatchRequest {
        entries: Vec<CreateAssociationBatchRequestEntry> => nested,
    }
}

shape! {
    pub struct FailedCreateAssociation {
        entry: Option<CreateAssociationBatchRequestEntry> => nested,
        message: Option<String>,
        fault: Option<Fault>,
    }
}

shape! {
    pub struct CreateAssociationBatchResult {
        successful: Option<Vec<AssociationDescription>> => nested,
        failed: Option<Vec<FailedCreateAssociation>> => nested,
    }
}

shape! {
    pub struct DescribeAssociationRequest {
        name: Option<String>,
        instance_id: Option<String>,
        association_id: Option<String>,
        association_version: Option<String>,
    }
}

shape! {
    pub struct DescribeAssociationResult {
        association_description: Option<AssociationDescription> => nested,
    }
}

shape! {
    pub struct AssociationFilter {
        key: AssociationFilterKey,
        value: String,
    }
}

shape! {
    pub struct ListAssociationsRequest {
        association_filter_list: Option<Vec<AssociationFilter>>,
        max_results: Option<i32>,
        next_token: Option<String>,
    }
}

shape! {
    pub struct ListAssociationsResult {
        associations: Option<Vec<Association>>,
        next_token: Option<String>,
    }
}

shape! {
    pub struct UpdateAssociationRequest {
        association_id: String,
        parameters: Option<Sensitive<ParameterValues>> => mask,
        document_version: Option<String>,
        schedule_expression: Option<String>,
        output_location: Option<InstanceAssociationOutputLocation>,
        name: Option<String>,
        targets: Option<Vec<Target>>,
        association_name: Option<String>,
        association_version: Option<String>,
        automation_target_parameter_name: Option<String>,
        max_errors: Option<String>,
        max_concurrency: Option<String>,
        compliance_severity: Option<AssociationComplianceSeverity>,
        sync_compliance: Option<AssociationSyncCompliance>,
        apply_only_at_cron_interval: Option<bool>,
        calendar_names: Option<Vec<String>>,
        schedule_offset: Option<i32>,
        duration: Option<i32>,
        alarm_configuration: Option<AlarmConfiguration>,
    }
}

shape! {
    pub struct UpdateAssociationResult {
        association_description: Option<AssociationDescription> => nested,
    }
}

shape! {
    pub struct DeleteAssociationRequest {
        name: Option<String>,
        instance_id: Option<String>,
        association_id: Option<String>,
    }
}

shape! {
    pub struct DeleteAssociationResult {}
}

shape! {
    pub struct AssociationExecution {
        association_id: Option<String>,
        association_version: Option<String>,
        execution_id: Option<String>,
        status: Option<String>,
        detailed_status: Option<String>,
        created_time: Option<Timestamp>,
        last_execution_date: Option<Timestamp>,
        resource_count_by_status: Option<String>,
        alarm_configuration: Option<AlarmConfiguration>,
    }
}

shape! {
    pub struct AssociationExecutionFilter {
        key: AssociationExecutionFilterKey,
        value: String,
        #[serde(rename = "Type")]
        filter_type: AssociationFilterOperatorType,
    }
}

shape! {
    pub struct DescribeAssociationExecutionsRequest {
        association_id: String,
        filters: Option<Vec<AssociationExecutionFilter>>,
        max_results: Option<i32>,
        next_token: Option<String>,
    }
}

shape! {
    pub struct DescribeAssociationExecutionsResult {
        association_executions: Option<Vec<AssociationExecution>>,
        next_token: Option<String>,
    }
}

pub(crate) fn register_associations(registry: &mut ShapeRegistry) {
    register_shapes!(registry;
        InstanceAssociationOutputLocation,
        AssociationStatus,
        AssociationOverview,
        AssociationDescription,
        Association,
        CreateAssociationRequest,
        CreateAssociationResult,
        CreateAssociationBatchRequestEntry,
        CreateAssociationBatchRequest,
        FailedCreateAssociation,
        CreateAssociationBatchResult,
        DescribeAssociationRequest,
        DescribeAssociationResult,
        AssociationFilter,
        ListAssociationsRequest,
        ListAssociationsResult,
        UpdateAssociationRequest,
        UpdateAssociationResult,
        DeleteAssociationRequest,
        DeleteAssociationResult,
        AssociationExecution,
        AssociationExecutionFilter,
        DescribeAssociationExecutionsRequest,
        DescribeAssociationExecutionsResult,
    );
}

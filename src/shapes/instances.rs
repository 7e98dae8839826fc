//! Managed node inventory, hybrid activations and connectivity.

use std::collections::HashMap;

use crate::enums::{
    ConnectionStatus, InstanceInformationFilterKey, PingStatus, PlatformType, ResourceType,
};
use crate::registry::ShapeRegistry;
use crate::shapes::common::Tag;
use crate::types::Timestamp;

shape! {
    pub struct InstanceAggregatedAssociationOverview {
        detailed_status: Option<String>,
        instance_association_status_aggregated_count: Option<HashMap<String, i32>>,
    }
}

shape! {
    pub struct InstanceInformation {
        instance_id: Option<String>,
        ping_status: Option<PingStatus>,
        last_ping_date_time: Option<Timestamp>,
        agent_version: Option<String>,
        is_latest_version: Option<bool>,
        platform_type: Option<PlatformType>,
        platform_name: Option<String>,
        platform_version: Option<String>,
        activation_id: Option<String>,
        iam_role: Option<String>,
        registration_date: Option<Timestamp>,
        resource_type: Option<ResourceType>,
        name: Option<String>,
        #[serde(rename = "IPAddress")]
        ip_address: Option<String>,
        computer_name: Option<String>,
        association_status: Option<String>,
        last_association_execution_date: Option<Timestamp>,
        last_successful_association_execution_date: Option<Timestamp>,
        association_overview: Option<InstanceAggregatedAssociationOverview>,
        source_id: Option<String>,
        source_type: Option<String>,
    }
}

shape! {
    pub struct InstanceInformationFilter {
        key: InstanceInformationFilterKey,
        value_set: Vec<String>,
    }
}

shape! {
    /// Filter by any key, including `tag:<name>` and `AssociationStatus`.
    pub struct InstanceInformationStringFilter {
        key: String,
        values: Vec<String>,
    }
}

shape! {
    pub struct DescribeInstanceInformationRequest {
        instance_information_filter_list: Option<Vec<InstanceInformationFilter>>,
        filters: Option<Vec<InstanceInformationStringFilter>>,
        max_results: Option<i32>,
        next_token: Option<String>,
    }
}

shape! {
    pub struct DescribeInstanceInformationResult {
        instance_information_list: Option<Vec<InstanceInformation>>,
        next_token: Option<String>,
    }
}

shape! {
    pub struct RegistrationMetadataItem {
        key: String,
        value: String,
    }
}

shape! {
    pub struct CreateActivationRequest {
        description: Option<String>,
        default_instance_name: Option<String>,
        iam_role: String,
        registration_limit: Option<i32>,
        expiration_date: Option<Timestamp>,
        tags: Option<Vec<Tag>>,
        registration_metadata: Option<Vec<RegistrationMetadataItem>>,
    }
}

shape! {
    /// The activation code is shown once and is needed to register nodes;
    /// it is kept in logs like the id.
    pub struct CreateActivationResult {
        activation_id: Option<String>,
        activation_code: Option<String>,
    }
}

shape! {
    pub struct Activation {
        activation_id: Option<String>,
        description: Option<String>,
        default_instance_name: Option<String>,
        iam_role: Option<String>,
        registration_limit: Option<i32>,
        registrations_count: Option<i32>,
        expiration_date: Option<Timestamp>,
        expired: Option<bool>,
        created_date: Option<Timestamp>,
        tags: Option<Vec<Tag>>,
    }
}

shape! {
    pub struct GetConnectionStatusRequest {
        target: String,
    }
}

shape! {
    pub struct GetConnectionStatusResult {
        target: Option<String>,
        status: Option<ConnectionStatus>,
    }
}

pub(crate) fn register_instances(registry: &mut ShapeRegistry) {
    register_shapes!(registry;
        InstanceAggregatedAssociationOverview,
        InstanceInformation,
        InstanceInformationFilter,
        InstanceInformationStringFilter,
        DescribeInstanceInformationRequest,
        DescribeInstanceInformationResult,
        RegistrationMetadataItem,
        CreateActivationRequest,
        CreateActivationResult,
        Activation,
        GetConnectionStatusRequest,
        GetConnectionStatusResult,
    );
}

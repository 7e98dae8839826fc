//! Shapes shared across service areas: tags, targets, output locations and
//! the tagging operations.

use std::collections::HashMap;

use crate::enums::{NotificationEvent, NotificationType, ResourceTypeForTagging};
use crate::registry::ShapeRegistry;

shape! {
    /// Key/value metadata attached to a resource.
    pub struct Tag {
        key: String,
        value: String,
    }
}

shape! {
    /// Selects the managed nodes an operation runs on, by key and values
    /// (`InstanceIds`, `tag:<name>`, `resource-groups:Name`...).
    pub struct Target {
        key: Option<String>,
        values: Option<Vec<String>>,
    }
}

shape! {
    pub struct NotificationConfig {
        notification_arn: Option<String>,
        notification_events: Option<Vec<NotificationEvent>>,
        notification_type: Option<NotificationType>,
    }
}

shape! {
    pub struct CloudWatchOutputConfig {
        cloud_watch_log_group_name: Option<String>,
        cloud_watch_output_enabled: Option<bool>,
    }
}

shape! {
    pub struct S3OutputLocation {
        output_s3_region: Option<String>,
        output_s3_bucket_name: Option<String>,
        output_s3_key_prefix: Option<String>,
    }
}

shape! {
    pub struct S3OutputUrl {
        output_url: Option<String>,
    }
}

shape! {
    pub struct AlarmConfiguration {
        ignore_poll_alarm_failure: Option<bool>,
        alarms: Vec<Alarm>,
    }
}

shape! {
    pub struct Alarm {
        name: String,
    }
}

shape! {
    pub struct AddTagsToResourceRequest {
        resource_type: ResourceTypeForTagging,
        resource_id: String,
        tags: Vec<Tag>,
    }
}

shape! {
    pub struct AddTagsToResourceResult {}
}

shape! {
    pub struct RemoveTagsFromResourceRequest {
        resource_type: ResourceTypeForTagging,
        resource_id: String,
        tag_keys: Vec<String>,
    }
}

shape! {
    pub struct RemoveTagsFromResourceResult {}
}

shape! {
    pub struct ListTagsForResourceRequest {
        resource_type: ResourceTypeForTagging,
        resource_id: String,
    }
}

shape! {
    pub struct ListTagsForResourceResult {
        tag_list: Option<Vec<Tag>>,
    }
}

/// Parameters keyed by name, as accepted by commands and automation runs.
pub type ParameterValues = HashMap<String, Vec<String>>;

pub(crate) fn register_common(registry: &mut ShapeRegistry) {
    register_shapes!(registry;
        Tag,
        Target,
        NotificationConfig,
        CloudWatchOutputConfig,
        S3OutputLocation,
        S3OutputUrl,
        AlarmConfiguration,
        Alarm,
        AddTagsToResourceRequest,
        AddTagsToResourceResult,
        RemoveTagsFromResourceRequest,
        RemoveTagsFromResourceResult,
        ListTagsForResourceRequest,
        ListTagsForResourceResult,
    );
}

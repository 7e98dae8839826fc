//! Parameter Store shapes.

use crate::enums::{ParameterTier, ParameterType, ParametersFilterKey};
use crate::registry::ShapeRegistry;
use crate::sensitive::Sensitive;
use crate::shapes::common::Tag;
use crate::types::Timestamp;

shape! {
    /// A parameter as returned by the Get* operations. `Value` is decrypted
    /// when the request asked for it, so it is always masked.
    pub struct Parameter {
        name: Option<String>,
        #[serde(rename = "Type")]
        p_type: Option<ParameterType>,
        value: Option<Sensitive<String>> => mask,
        version: Option<i64>,
        selector: Option<String>,
        source_result: Option<String>,
        last_modified_date: Option<Timestamp>,
        #[serde(rename = "ARN")]
        arn: Option<String>,
        data_type: Option<String>,
    }
}

shape! {
    pub struct ParameterInlinePolicy {
        policy_text: Option<String>,
        policy_type: Option<String>,
        policy_status: Option<String>,
    }
}

shape! {
    /// One version of a parameter.
    pub struct ParameterHistory {
        name: Option<String>,
        #[serde(rename = "Type")]
        p_type: Option<ParameterType>,
        key_id: Option<String>,
        last_modified_date: Option<Timestamp>,
        last_modified_user: Option<String>,
        description: Option<String>,
        value: Option<Sensitive<String>> => mask,
        allowed_pattern: Option<String>,
        version: Option<i64>,
        labels: Option<Vec<String>>,
        tier: Option<ParameterTier>,
        policies: Option<Vec<ParameterInlinePolicy>>,
        data_type: Option<String>,
    }
}

shape! {
    /// Parameter information without its value, from `DescribeParameters`.
    pub struct ParameterMetadata {
        name: Option<String>,
        #[serde(rename = "ARN")]
        arn: Option<String>,
        #[serde(rename = "Type")]
        p_type: Option<ParameterType>,
        key_id: Option<String>,
        last_modified_date: Option<Timestamp>,
        last_modified_user: Option<String>,
        description: Option<String>,
        allowed_pattern: Option<String>,
        version: Option<i64>,
        tier: Option<ParameterTier>,
        policies: Option<Vec<ParameterInlinePolicy>>,
        data_type: Option<String>,
    }
}

shape! {
    /// `Key` is `Name`, `Type`, `KeyId`, `Path`, `Label`, `Tier`,
    /// `DataType` or `tag:<name>`; `Option` is `Equals`, `BeginsWith`,
    /// `Recursive` or `OneLevel`.
    pub struct ParameterStringFilter {
        key: String,
        option: Option<String>,
        values: Option<Vec<String>>,
    }
}

shape! {
    pub struct ParametersFilter {
        key: ParametersFilterKey,
        values: Vec<String>,
    }
}

shape! {
    pub struct PutParameterRequest {
        name: String,
        description: Option<String>,
        value: Sensitive<String> => mask,
        #[serde(rename = "Type")]
        p_type: Option<ParameterType>,
        key_id: Option<String>,
        overwrite: Option<bool>,
        allowed_pattern: Option<String>,
        tags: Option<Vec<Tag>>,
        tier: Option<ParameterTier>,
        policies: Option<String>,
        data_type: Option<String>,
    }
}

shape! {
    pub struct PutParameterResult {
        version: Option<i64>,
        tier: Option<ParameterTier>,
    }
}

shape! {
    pub struct GetParameterRequest {
        name: String,
        with_decryption: Option<bool>,
    }
}

shape! {
    pub struct GetParameterResult {
        parameter: Option<Parameter> => nested,
    }
}

shape! {
    pub struct GetParametersRequest {
        names: Vec<String>,
        with_decryption: Option<bool>,
    }
}

shape! {
    pub struct GetParametersResult {
        parameters: Option<Vec<Parameter>> => nested,
        invalid_parameters: Option<Vec<String>>,
    }
}

shape! {
    pub struct GetParametersByPathRequest {
        path: String,
        recursive: Option<bool>,
        parameter_filters: Option<Vec<ParameterStringFilter>>,
        with_decryption: Option<bool>,
        max_results: Option<i32>,
        next_token: Option<String>,
    }
}

shape! {
    pub struct GetParametersByPathResult {
        parameters: Option<Vec<Parameter>> => nested,
        next_token: Option<String>,
    }
}

shape! {
    pub struct GetParameterHistoryRequest {
        name: String,
        with_decryption: Option<bool>,
        max_results: Option<i32>,
        next_token: Option<String>,
    }
}

shape! {
    pub struct GetParameterHistoryResult {
        parameters: Option<Vec<ParameterHistory>> => nested,
        next_token: Option<String>,
    }
}

shape! {
    pub struct DescribeParametersRequest {
        filters: Option<Vec<ParametersFilter>>,
        parameter_filters: Option<Vec<ParameterStringFilter>>,
        max_results: Option<i32>,
        next_token: Option<String>,
        shared: Option<bool>,
    }
}

shape! {
    pub struct DescribeParametersResult {
        parameters: Option<Vec<ParameterMetadata>>,
        next_token: Option<String>,
    }
}

shape! {
    pub struct DeleteParameterRequest {
        name: String,
    }
}

shape! {
    pub struct DeleteParameterResult {}
}

shape! {
    pub struct DeleteParametersRequest {
        names: Vec<String>,
    }
}

shape! {
    pub struct DeleteParametersResult {
        deleted_parameters: Option<Vec<String>>,
        invalid_parameters: Option<Vec<String>>,
    }
}

shape! {
    pub struct LabelParameterVersionRequest {
        name: String,
        parameter_version: Option<i64>,
        labels: Vec<String>,
    }
}

shape! {
    pub struct LabelParameterVersionResult {
        invalid_labels: Option<Vec<String>>,
        parameter_version: Option<i64>,
    }
}

pub(crate) fn register_parameters(registry: &mut ShapeRegistry) {
    register_shapes!(registry;
        Parameter,
        ParameterInlinePolicy,
        ParameterHistory,
        ParameterMetadata,
        ParameterStringFilter,
        ParametersFilter,
        PutParameterRequest,
        PutParameterResult,
        GetParameterRequest,
        GetParameterResult,
        GetParametersRequest,
        GetParametersResult,
        GetParametersByPathRequest,
        GetParametersByPathResult,
        GetParameterHistoryRequest,
        GetParameterHistoryResult,
        DescribeParametersRequest,
        DescribeParametersResult,
        DeleteParameterRequest,
        DeleteParameterResult,
        DeleteParametersRequest,
        DeleteParametersResult,
        LabelParameterVersionRequest,
        LabelParameterVersionResult,
    );
}

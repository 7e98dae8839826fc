//! Compliance shapes.

use std::collections::HashMap;

use crate::enums::{
    ComplianceQueryOperatorType, ComplianceSeverity, ComplianceStatus, ComplianceUploadType,
};
use crate::registry::ShapeRegistry;
use crate::types::Timestamp;

shape! {
    pub struct ComplianceExecutionSummary {
        execution_time: Timestamp,
        execution_id: Option<String>,
        execution_type: Option<String>,
    }
}

shape! {
    pub struct ComplianceItemEntry {
        id: Option<String>,
        title: Option<String>,
        severity: ComplianceSeverity,
        status: ComplianceStatus,
        details: Option<HashMap<String, String>>,
    }
}

shape! {
    pub struct PutComplianceItemsRequest {
        resource_id: String,
        resource_type: String,
        compliance_type: String,
        execution_summary: ComplianceExecutionSummary,
        items: Vec<ComplianceItemEntry>,
        item_content_hash: Option<String>,
        upload_type: Option<ComplianceUploadType>,
    }
}

shape! {
    pub struct PutComplianceItemsResult {}
}

shape! {
    pub struct ComplianceItem {
        compliance_type: Option<String>,
        resource_type: Option<String>,
        resource_id: Option<String>,
        id: Option<String>,
        title: Option<String>,
        status: Option<ComplianceStatus>,
        severity: Option<ComplianceSeverity>,
        execution_summary: Option<ComplianceExecutionSummary>,
        details: Option<HashMap<String, String>>,
    }
}

shape! {
    pub struct ComplianceStringFilter {
        key: Option<String>,
        values: Option<Vec<String>>,
        #[serde(rename = "Type")]
        filter_type: Option<ComplianceQueryOperatorType>,
    }
}

shape! {
    pub struct ListComplianceItemsRequest {
        filters: Option<Vec<ComplianceStringFilter>>,
        resource_ids: Option<Vec<String>>,
        resource_types: Option<Vec<String>>,
        next_token: Option<String>,
        max_results: Option<i32>,
    }
}

shape! {
    pub struct ListComplianceItemsResult {
        compliance_items: Option<Vec<ComplianceItem>>,
        next_token: Option<String>,
    }
}

pub(crate) fn register_compliance(registry: &mut ShapeRegistry) {
    register_shapes!(registry;
        ComplianceExecutionSummary,
        ComplianceItemEntry,
        PutComplianceItemsRequest,
        PutComplianceItemsResult,
        ComplianceItem,
        ComplianceStringFilter,
        ListComplianceItemsRequest,
        ListComplianceItemsResult,
    );
}

//! SSM document shapes.

use crate::enums::{
    DocumentFilterKey, DocumentFormat, DocumentHashType, DocumentParameterType, DocumentStatus,
    DocumentType, PlatformType,
};
use crate::registry::ShapeRegistry;
use crate::shapes::common::Tag;
use crate::types::Timestamp;

shape! {
    pub struct AttachmentsSource {
        key: Option<String>,
        values: Option<Vec<String>>,
        name: Option<String>,
    }
}

shape! {
    pub struct DocumentRequires {
        name: String,
        version: Option<String>,
        require_type: Option<String>,
        version_name: Option<String>,
    }
}

shape! {
    pub struct DocumentParameter {
        name: Option<String>,
        #[serde(rename = "Type")]
        parameter_type: Option<DocumentParameterType>,
        description: Option<String>,
        default_value: Option<String>,
    }
}

shape! {
    pub struct DocumentDescription {
        sha1: Option<String>,
        hash: Option<String>,
        hash_type: Option<DocumentHashType>,
        name: Option<String>,
        display_name: Option<String>,
        version_name: Option<String>,
        owner: Option<String>,
        created_date: Option<Timestamp>,
        status: Option<DocumentStatus>,
        status_information: Option<String>,
        document_version: Option<String>,
        description: Option<String>,
        parameters: Option<Vec<DocumentParameter>>,
        platform_types: Option<Vec<PlatformType>>,
        document_type: Option<DocumentType>,
        schema_version: Option<String>,
        latest_version: Option<String>,
        default_version: Option<String>,
        document_format: Option<DocumentFormat>,
        target_type: Option<String>,
        tags: Option<Vec<Tag>>,
        requires: Option<Vec<DocumentRequires>>,
        author: Option<String>,
        category: Option<Vec<String>>,
        category_enum: Option<Vec<String>>,
    }
}

shape! {
    pub struct CreateDocumentRequest {
        content: String,
        requires: Option<Vec<DocumentRequires>>,
        attachments: Option<Vec<AttachmentsSource>>,
        name: String,
        display_name: Option<String>,
        version_name: Option<String>,
        document_type: Option<DocumentType>,
        document_format: Option<DocumentFormat>,
        target_type: Option<String>,
        tags: Option<Vec<Tag>>,
    }
}

shape! {
    pub struct CreateDocumentResult {
        document_description: Option<DocumentDescription>,
    }
}

shape! {
    pub struct DescribeDocumentRequest {
        name: String,
        document_version: Option<String>,
        version_name: Option<String>,
    }
}

shape! {
    pub struct DescribeDocumentResult {
        document: Option<DocumentDescription>,
    }
}

shape! {
    pub struct GetDocumentRequest {
        name: String,
        version_name: Option<String>,
        document_version: Option<String>,
        document_format: Option<DocumentFormat>,
    }
}

shape! {
    pub struct GetDocumentResult {
        name: Option<String>,
        created_date: Option<Timestamp>,
        display_name: Option<String>,
        version_name: Option<String>,
        document_version: Option<String>,
        status: Option<DocumentStatus>,
        status_information: Option<String>,
        content: Option<String>,
        document_type: Option<DocumentType>,
        document_format: Option<DocumentFormat>,
        requires: Option<Vec<DocumentRequires>>,
    }
}

shape! {
    pub struct DocumentFilter {
        key: DocumentFilterKey,
        value: String,
    }
}

shape! {
    pub struct DocumentKeyValuesFilter {
        key: Option<String>,
        values: Option<Vec<String>>,
    }
}

shape! {
    pub struct DocumentIdentifier {
        name: Option<String>,
        created_date: Option<Timestamp>,
        display_name: Option<String>,
        owner: Option<String>,
        version_name: Option<String>,
        platform_types: Option<Vec<PlatformType>>,
        document_version: Option<String>,
        document_type: Option<DocumentType>,
        schema_version: Option<String>,
        document_format: Option<DocumentFormat>,
        target_type: Option<String>,
        tags: Option<Vec<Tag>>,
        requires: Option<Vec<DocumentRequires>>,
        author: Option<String>,
    }
}

shape! {
    pub struct ListDocumentsRequest {
        document_filter_list: Option<Vec<DocumentFilter>>,
        filters: Option<Vec<DocumentKeyValuesFilter>>,
        max_results: Option<i32>,
        next_token: Option<String>,
    }
}

shape! {
    pub struct ListDocumentsResult {
        document_identifiers: Option<Vec<DocumentIdentifier>>,
        next_token: Option<String>,
    }
}

shape! {
    pub struct DeleteDocumentRequest {
        name: String,
        document_version: Option<String>,
        version_name: Option<String>,
        force: Option<bool>,
    }
}

shape! {
    pub struct DeleteDocumentResult {}
}

pub(crate) fn register_documents(registry: &mut ShapeRegistry) {
    register_shapes!(registry;
        AttachmentsSource,
        DocumentRequires,
        DocumentParameter,
        DocumentDescription,
        CreateDocumentRequest,
        CreateDocumentResult,
        DescribeDocumentRequest,
        DescribeDocumentResult,
        GetDocumentRequest,
        GetDocumentResult,
        DocumentFilter,
        DocumentKeyValuesFilter,
        DocumentIdentifier,
        ListDocumentsRequest,
        ListDocumentsResult,
        DeleteDocumentRequest,
        DeleteDocumentResult,
    );
}

use std::collections::HashMap;

use serde_json::{json, Value};

use ssm_shapes::enums::{MaintenanceWindowTaskType, ParameterType};
use ssm_shapes::shapes::*;
use ssm_shapes::{
    Blob, FilterSensitiveLog, Redaction, Sensitive, ServiceException, Shape, ShapeKind,
    ShapeRegistry, SsmServiceError, SENSITIVE_STRING,
};

fn command_parameters() -> ParameterValues {
    let mut parameters = HashMap::new();
    parameters.insert(
        "commands".to_string(),
        vec!["export DB_PASSWORD=hunter2".to_string()],
    );
    parameters
}

fn lambda_task() -> MaintenanceWindowTaskInvocationParameters {
    MaintenanceWindowTaskInvocationParameters {
        run_command: Some(MaintenanceWindowRunCommandParameters {
            comment: Some("nightly patching".to_string()),
            document_version: Some("$DEFAULT".to_string()),
            timeout_seconds: Some(600),
            ..Default::default()
        }),
        automation: Some(MaintenanceWindowAutomationParameters {
            document_version: Some("1".to_string()),
            ..Default::default()
        }),
        step_functions: Some(MaintenanceWindowStepFunctionsParameters {
            name: Some("cleanup".to_string()),
            ..Default::default()
        }),
        lambda: Some(MaintenanceWindowLambdaParameters {
            client_context: Some("eyJjdXN0b20iOnt9fQ==".to_string()),
            qualifier: Some("$LATEST".to_string()),
            payload: Some(Blob::new(&b"{\"token\":\"abc123\"}"[..]).into()),
            ..Default::default()
        }),
        ..Default::default()
    }
}

#[test]
fn lambda_payload_is_masked_in_task_invocation_parameters() {
    let input = lambda_task();
    let redacted = input.filter_sensitive_log();

    let lambda = redacted.lambda.as_ref().unwrap();
    assert_eq!(lambda.payload, Some(Sensitive::Redacted));
    assert_eq!(lambda.qualifier, Some("$LATEST".to_string()));
    assert_eq!(lambda.client_context, input.lambda.as_ref().unwrap().client_context);
    assert_eq!(redacted.run_command, input.run_command);
    assert_eq!(redacted.step_functions, input.step_functions);
    assert_eq!(redacted.automation, input.automation);

    let json = serde_json::to_value(&redacted).unwrap();
    assert_eq!(json["Lambda"]["Payload"], SENSITIVE_STRING);
    assert_eq!(json["Lambda"]["Qualifier"], "$LATEST");
}

#[test]
fn helpers_do_not_mutate_input() {
    let input = lambda_task();
    let before = input.clone();
    let _ = input.filter_sensitive_log();
    assert_eq!(input, before);

    let request = SendCommandRequest {
        document_name: "AWS-RunShellScript".to_string(),
        parameters: Some(command_parameters().into()),
        ..Default::default()
    };
    let before = request.clone();
    let redacted = request.filter_sensitive_log();
    assert_eq!(request, before);
    assert_eq!(redacted.parameters, Some(Sensitive::Redacted));
}

#[test]
fn unmasked_input_comes_back_equal() {
    let request = SendCommandRequest {
        document_name: "AWS-RunShellScript".to_string(),
        instance_ids: Some(vec!["i-0123456789abcdef0".to_string()]),
        comment: Some("uptime".to_string()),
        timeout_seconds: Some(60),
        ..Default::default()
    };
    assert_eq!(request.filter_sensitive_log(), request);

    let result = GetParametersResult {
        parameters: Some(vec![Parameter {
            name: Some("/app/name".to_string()),
            p_type: Some(ParameterType::String),
            ..Default::default()
        }]),
        invalid_parameters: None,
        ..Default::default()
    };
    assert_eq!(result.filter_sensitive_log(), result);
}

#[test]
fn delegation_equals_nested_helper() {
    let entry = CreateAssociationBatchRequestEntry {
        name: "AWS-RunPatchBaseline".to_string(),
        parameters: Some(command_parameters().into()),
        ..Default::default()
    };
    let result = CreateAssociationBatchResult {
        successful: None,
        failed: Some(vec![FailedCreateAssociation {
            entry: Some(entry.clone()),
            message: Some("Association limit exceeded".to_string()),
            fault: None,
            ..Default::default()
        }]),
        ..Default::default()
    };

    let redacted = result.filter_sensitive_log();
    let failed = redacted.failed.unwrap();
    assert_eq!(failed.len(), 1);
    assert_eq!(failed[0].entry, Some(entry.filter_sensitive_log()));
    assert_eq!(failed[0].message, Some("Association limit exceeded".to_string()));

    let batch = CreateAssociationBatchRequest {
        entries: vec![entry.clone(), entry.clone()],
        ..Default::default()
    };
    let redacted = batch.filter_sensitive_log();
    assert_eq!(
        redacted.entries,
        vec![entry.filter_sensitive_log(), entry.filter_sensitive_log()]
    );
}

#[test]
fn redaction_is_idempotent() {
    let task = lambda_task();
    let once = task.filter_sensitive_log();
    assert_eq!(once.filter_sensitive_log(), once);

    let request = RegisterTaskWithMaintenanceWindowRequest {
        window_id: "mw-0c50858d01EXAMPLE".to_string(),
        task_arn: "arn:aws:lambda:us-east-1:123456789012:function:cleanup".to_string(),
        task_type: MaintenanceWindowTaskType::Lambda,
        task_invocation_parameters: Some(task),
        description: Some("cleanup".into()),
        ..Default::default()
    };
    let once = request.filter_sensitive_log();
    assert_eq!(once.filter_sensitive_log(), once);

    // the sentinel survives a trip through JSON as a redacted value
    let json = serde_json::to_string(&once).unwrap();
    let decoded: RegisterTaskWithMaintenanceWindowRequest = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, once);
}

#[test]
fn every_registered_shape_redacts_its_sample() {
    let registry = ShapeRegistry::ssm();
    assert!(!registry.is_empty());

    for entry in registry.shapes() {
        let sample = entry.sample().unwrap();
        let once = entry.redact(sample.clone()).unwrap();
        let twice = entry.redact(once.clone()).unwrap();
        assert_eq!(once, twice, "{} is not idempotent", entry.name);

        let (sample, once) = match (sample, once) {
            (Value::Object(sample), Value::Object(once)) => (sample, once),
            other => panic!("{} does not encode as an object: {:?}", entry.name, other),
        };
        assert_eq!(
            sample.keys().collect::<Vec<_>>(),
            once.keys().collect::<Vec<_>>(),
            "{} changed its field set",
            entry.name
        );

        let masked = once
            .iter()
            .filter(|(key, value)| **value != sample[key.as_str()])
            .inspect(|(key, value)| {
                assert_eq!(
                    **value, SENSITIVE_STRING,
                    "{}.{} changed without being masked",
                    entry.name, key
                )
            })
            .count();
        assert!(
            masked <= entry.sensitive_fields().len(),
            "{} masked more fields than its plan lists",
            entry.name
        );
    }
}

#[test]
fn every_masked_field_is_replaced_when_present() {
    let registry = ShapeRegistry::ssm();

    for entry in registry.shapes() {
        let populated = entry.sensitive_sample().unwrap();
        let redacted = entry.redact(populated.clone()).unwrap();
        assert_eq!(
            entry.redact(redacted.clone()).unwrap(),
            redacted,
            "{} is not idempotent",
            entry.name
        );

        let (populated, redacted) = match (populated, redacted) {
            (Value::Object(populated), Value::Object(redacted)) => (populated, redacted),
            other => panic!("{} does not encode as an object: {:?}", entry.name, other),
        };
        assert_eq!(
            populated.keys().collect::<Vec<_>>(),
            redacted.keys().collect::<Vec<_>>(),
            "{} changed its field set",
            entry.name
        );

        let changed: Vec<&String> = redacted
            .iter()
            .filter(|(key, value)| **value != populated[key.as_str()])
            .map(|(key, _)| key)
            .collect();
        assert_eq!(
            changed.len(),
            entry.sensitive_fields().len(),
            "{} masked {:?}, plan lists {:?}",
            entry.name,
            changed,
            entry.sensitive_fields()
        );
        for key in changed {
            assert_eq!(redacted[key.as_str()], SENSITIVE_STRING, "{}.{}", entry.name, key);
        }
    }
}

#[test]
fn populated_service_documents_mask_only_sensitive_members() {
    let registry = ShapeRegistry::ssm();
    let cases = vec![
        (
            "ParameterHistory",
            json!({"Name": "/app/db/password", "Type": "SecureString", "Value": "hunter2",
                   "Version": 4, "Labels": ["prod"], "LastModifiedDate": 1578312000.5}),
            vec!["Value"],
        ),
        (
            "InstancePatchState",
            json!({"InstanceId": "i-0123456789abcdef0", "PatchGroup": "web", "BaselineId": "pb-0c10e65780EXAMPLE",
                   "OwnerInformation": "team-payments", "InstalledCount": 12,
                   "OperationStartTime": 1578312000.0, "OperationEndTime": 1578312600.0,
                   "Operation": "Scan"}),
            vec!["OwnerInformation"],
        ),
        (
            "MaintenanceWindowTarget",
            json!({"WindowId": "mw-0c50858d01EXAMPLE", "ResourceType": "INSTANCE",
                   "OwnerInformation": "team-payments", "Name": "web", "Description": "prod web fleet",
                   "Targets": [{"Key": "tag:Role", "Values": ["web"]}]}),
            vec!["OwnerInformation", "Description"],
        ),
        (
            "MaintenanceWindowIdentity",
            json!({"WindowId": "mw-0c50858d01EXAMPLE", "Name": "nightly", "Description": "patch db hosts",
                   "Enabled": true, "Duration": 4, "Cutoff": 1}),
            vec!["Description"],
        ),
        (
            "CreateMaintenanceWindowRequest",
            json!({"Name": "nightly", "Description": "patch db hosts", "Schedule": "cron(0 2 ? * * *)",
                   "Duration": 4, "Cutoff": 1, "AllowUnassociatedTargets": false}),
            vec!["Description"],
        ),
        (
            "MaintenanceWindowStepFunctionsParameters",
            json!({"Name": "rotate", "Input": "{\"secret\":\"abc\"}"}),
            vec!["Input"],
        ),
        (
            "MaintenanceWindowRunCommandParameters",
            json!({"Comment": "patch", "TimeoutSeconds": 600,
                   "Parameters": {"commands": ["echo $TOKEN"]}}),
            vec!["Parameters"],
        ),
        (
            "GetMaintenanceWindowExecutionTaskResult",
            json!({"WindowExecutionId": "518d5565-5969-4cca-8f0e-da3b2EXAMPLE", "Type": "RUN_COMMAND",
                   "TaskParameters": [{"commands": {"Values": ["yum update -y"]}}],
                   "Status": "SUCCESS", "StartTime": 1578312000.0}),
            vec!["TaskParameters"],
        ),
        (
            "CreateAssociationRequest",
            json!({"Name": "AWS-RunShellScript", "InstanceId": "i-0123456789abcdef0",
                   "Parameters": {"commands": ["curl -H 'Authorization: abc'"]},
                   "ScheduleExpression": "rate(30 minutes)"}),
            vec!["Parameters"],
        ),
        (
            "UpdateAssociationRequest",
            json!({"AssociationId": "8dfe3659-4309-493a-8755-0123456789ab",
                   "Parameters": {"commands": ["echo secret"]}, "DocumentVersion": "$LATEST"}),
            vec!["Parameters"],
        ),
    ];

    for (shape, document, masked) in cases {
        let redacted = registry.redact_json(shape, document.clone()).unwrap();
        let (document, redacted) = match (document, redacted) {
            (Value::Object(document), Value::Object(redacted)) => (document, redacted),
            other => panic!("{} does not encode as an object: {:?}", shape, other),
        };
        assert_eq!(
            document.keys().collect::<Vec<_>>(),
            redacted.keys().collect::<Vec<_>>(),
            "{}",
            shape
        );
        for (key, value) in &redacted {
            if masked.contains(&key.as_str()) {
                assert_eq!(*value, SENSITIVE_STRING, "{}.{}", shape, key);
            } else {
                assert_eq!(*value, document[key.as_str()], "{}.{}", shape, key);
            }
        }
    }
}

#[test]
fn unmodelled_members_survive_redaction() {
    let registry = ShapeRegistry::ssm();
    let redacted = registry
        .redact_json(
            "Parameter",
            json!({"Name": "x", "Value": "s", "SourceResult": "r", "NewServiceField": "keep-me"}),
        )
        .unwrap();
    assert_eq!(redacted["NewServiceField"], "keep-me");
    assert_eq!(redacted["SourceResult"], "r");
    assert_eq!(redacted["Value"], SENSITIVE_STRING);

    let parameter: Parameter =
        serde_json::from_value(json!({"Name": "x", "Value": "s", "Tier": "Advanced"})).unwrap();
    assert_eq!(parameter.extra.get("Tier"), Some(&json!("Advanced")));
    assert_eq!(parameter.filter_sensitive_log().extra, parameter.extra);
}

#[test]
fn empty_documents_stay_empty() {
    let registry = ShapeRegistry::ssm();
    for entry in registry.shapes() {
        if entry.sample().unwrap() != json!({}) {
            continue;
        }
        assert_eq!(entry.redact(json!({})).unwrap(), json!({}), "{}", entry.name);
    }
}

#[test]
fn redaction_plans_are_consistent() {
    let registry = ShapeRegistry::ssm();
    let entry = registry.lookup("MaintenanceWindowLambdaParameters").unwrap();
    assert_eq!(entry.sensitive_fields(), vec!["payload"]);
    assert!(entry.has_redaction());

    let parameters = registry
        .lookup("MaintenanceWindowTaskInvocationParameters")
        .unwrap();
    assert_eq!(
        parameters.fields_with(Redaction::Delegate),
        MaintenanceWindowTaskInvocationParameters::delegated_fields()
    );
    assert!(parameters.sensitive_fields().is_empty());

    assert!(!registry.lookup("DescribeDocumentRequest").unwrap().has_redaction());
}

#[test]
fn registry_redacts_send_command_result_json() {
    let registry = ShapeRegistry::ssm();
    let body = json!({
        "Command": {
            "CommandId": "0831e1a8-a1ac-4257-a1fd-c831bEXAMPLE",
            "DocumentName": "AWS-RunPowerShellScript",
            "Parameters": {"commands": ["$env:SECRET"]},
            "Status": "Pending",
            "RequestedDateTime": 1578312000.5
        }
    });
    let original = body.clone();
    let redacted = registry.redact_json("SendCommandResult", body).unwrap();

    assert_eq!(redacted["Command"]["Parameters"], SENSITIVE_STRING);
    assert_eq!(redacted["Command"]["Status"], "Pending");
    assert_eq!(redacted["Command"]["CommandId"], original["Command"]["CommandId"]);
}

#[test]
fn every_exception_is_registered_with_its_fault() {
    let registry = ShapeRegistry::ssm();
    let exceptions: Vec<&str> = registry.of_kind(ShapeKind::Exception).map(|e| e.name).collect();
    let mut discriminants = SsmServiceError::DISCRIMINANTS.to_vec();
    discriminants.sort();
    assert_eq!(exceptions, discriminants);
    assert!(registry
        .of_kind(ShapeKind::Exception)
        .all(|e| e.fault.is_some()));
}

#[test]
fn service_error_round_trip_keeps_message() {
    let err = SsmServiceError::from_json(
        "com.amazonaws.ssm#ThrottlingException:http://internal.amazon.com/coral/com.amazonaws.ssm/",
        r#"{"Message":"Rate exceeded","QuotaCode":"L-1","ServiceCode":"ssm"}"#,
    )
    .unwrap();
    assert_eq!(err.discriminant(), "ThrottlingException");
    assert_eq!(err.message(), Some("Rate exceeded"));
    assert_eq!(err.filter_sensitive_log(), err);

    match err {
        SsmServiceError::ThrottlingException(ref e) => {
            assert_eq!(e.quota_code, Some("L-1".to_string()));
            assert_eq!(ServiceException::message(e), Some("Rate exceeded"));
        }
        ref other => panic!("unexpected error {:?}", other),
    }
}

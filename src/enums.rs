//! Enumerations used inside shapes.
//!
//! The service adds values over time, so each enum keeps unrecognised wire
//! strings in an `Unknown` variant instead of failing to decode.

use crate::registry::ShapeRegistry;

/// Common surface of the generated string enums.
pub trait OpenEnum {
    const NAME: &'static str;
    /// Known wire values, in declaration order.
    const VALUES: &'static [&'static str];

    fn as_str(&self) -> &str;
}

string_enum! {
    pub enum ParameterType {
        String = "String",
        StringList = "StringList",
        SecureString = "SecureString",
    }
}

string_enum! {
    pub enum ParameterTier {
        Standard = "Standard",
        Advanced = "Advanced",
        IntelligentTiering = "Intelligent-Tiering",
    }
}

string_enum! {
    pub enum ParametersFilterKey {
        Name = "Name",
        Type = "Type",
        KeyId = "KeyId",
    }
}

string_enum! {
    pub enum CommandStatus {
        Pending = "Pending",
        InProgress = "InProgress",
        Success = "Success",
        Cancelled = "Cancelled",
        Failed = "Failed",
        TimedOut = "TimedOut",
        Cancelling = "Cancelling",
    }
}

string_enum! {
    pub enum CommandInvocationStatus {
        Pending = "Pending",
        InProgress = "InProgress",
        Delayed = "Delayed",
        Success = "Success",
        Cancelled = "Cancelled",
        TimedOut = "TimedOut",
        Failed = "Failed",
        Cancelling = "Cancelling",
    }
}

string_enum! {
    pub enum CommandPluginStatus {
        Pending = "Pending",
        InProgress = "InProgress",
        Success = "Success",
        TimedOut = "TimedOut",
        Cancelled = "Cancelled",
        Failed = "Failed",
    }
}

string_enum! {
    /// Status reported by `GetCommandInvocation` for a single plugin.
    pub enum CommandInvocationDetailStatus {
        Pending = "Pending",
        InProgress = "InProgress",
        Delayed = "Delayed",
        Success = "Success",
        Cancelled = "Cancelled",
        TimedOut = "TimedOut",
        Failed = "Failed",
        Cancelling = "Cancelling",
    }
}

string_enum! {
    pub enum CommandFilterKey {
        InvokedAfter = "InvokedAfter",
        InvokedBefore = "InvokedBefore",
        Status = "Status",
        ExecutionStage = "ExecutionStage",
        DocumentName = "DocumentName",
    }
}

string_enum! {
    pub enum DocumentHashType {
        Sha256 = "Sha256",
        Sha1 = "Sha1",
    }
}

string_enum! {
    pub enum NotificationEvent {
        All = "All",
        InProgress = "InProgress",
        Success = "Success",
        TimedOut = "TimedOut",
        Cancelled = "Cancelled",
        Failed = "Failed",
    }
}

string_enum! {
    pub enum NotificationType {
        Command = "Command",
        Invocation = "Invocation",
    }
}

string_enum! {
    /// Progress of an association: Pending, then Success or Failed.
    pub enum AssociationStatusName {
        Pending = "Pending",
        Success = "Success",
        Failed = "Failed",
    }
}

string_enum! {
    pub enum AssociationComplianceSeverity {
        Critical = "CRITICAL",
        High = "HIGH",
        Medium = "MEDIUM",
        Low = "LOW",
        Unspecified = "UNSPECIFIED",
    }
}

string_enum! {
    pub enum AssociationSyncCompliance {
        Auto = "AUTO",
        Manual = "MANUAL",
    }
}

string_enum! {
    pub enum AssociationFilterKey {
        InstanceId = "InstanceId",
        Name = "Name",
        AssociationId = "AssociationId",
        AssociationStatusName = "AssociationStatusName",
        LastExecutedBefore = "LastExecutedBefore",
        LastExecutedAfter = "LastExecutedAfter",
        AssociationName = "AssociationName",
        ResourceGroupName = "ResourceGroupName",
    }
}

string_enum! {
    pub enum AssociationExecutionFilterKey {
        ExecutionId = "ExecutionId",
        Status = "Status",
        CreatedTime = "CreatedTime",
    }
}

string_enum! {
    pub enum AssociationFilterOperatorType {
        Equal = "EQUAL",
        LessThan = "LESS_THAN",
        GreaterThan = "GREATER_THAN",
    }
}

string_enum! {
    /// Origin of a failed association batch entry.
    pub enum Fault {
        Client = "Client",
        Server = "Server",
        Unclassified = "Unknown",
    }
}

string_enum! {
    pub enum DocumentType {
        Command = "Command",
        Policy = "Policy",
        Automation = "Automation",
        Session = "Session",
        Package = "Package",
        ApplicationConfiguration = "ApplicationConfiguration",
        ApplicationConfigurationSchema = "ApplicationConfigurationSchema",
        DeploymentStrategy = "DeploymentStrategy",
        ChangeCalendar = "ChangeCalendar",
        ChangeTemplate = "Automation.ChangeTemplate",
        ProblemAnalysis = "ProblemAnalysis",
        ProblemAnalysisTemplate = "ProblemAnalysisTemplate",
    }
}

string_enum! {
    pub enum DocumentFormat {
        Yaml = "YAML",
        Json = "JSON",
        Text = "TEXT",
    }
}

string_enum! {
    pub enum DocumentStatus {
        Creating = "Creating",
        Active = "Active",
        Updating = "Updating",
        Deleting = "Deleting",
        Failed = "Failed",
    }
}

string_enum! {
    pub enum DocumentFilterKey {
        Name = "Name",
        Owner = "Owner",
        PlatformTypes = "PlatformTypes",
        DocumentType = "DocumentType",
    }
}

string_enum! {
    pub enum DocumentParameterType {
        String = "String",
        StringList = "StringList",
    }
}

string_enum! {
    pub enum PlatformType {
        Windows = "Windows",
        Linux = "Linux",
        MacOs = "MacOS",
    }
}

string_enum! {
    pub enum MaintenanceWindowTaskType {
        RunCommand = "RUN_COMMAND",
        Automation = "AUTOMATION",
        StepFunctions = "STEP_FUNCTIONS",
        Lambda = "LAMBDA",
    }
}

string_enum! {
    pub enum MaintenanceWindowExecutionStatus {
        Pending = "PENDING",
        InProgress = "IN_PROGRESS",
        Success = "SUCCESS",
        Failed = "FAILED",
        TimedOut = "TIMED_OUT",
        Cancelling = "CANCELLING",
        Cancelled = "CANCELLED",
        SkippedOverlapping = "SKIPPED_OVERLAPPING",
    }
}

string_enum! {
    pub enum MaintenanceWindowResourceType {
        Instance = "INSTANCE",
        ResourceGroup = "RESOURCE_GROUP",
    }
}

string_enum! {
    pub enum MaintenanceWindowTaskCutoffBehavior {
        ContinueTask = "CONTINUE_TASK",
        CancelTask = "CANCEL_TASK",
    }
}

string_enum! {
    pub enum OperatingSystem {
        Windows = "WINDOWS",
        AmazonLinux = "AMAZON_LINUX",
        AmazonLinux2 = "AMAZON_LINUX_2",
        AmazonLinux2022 = "AMAZON_LINUX_2022",
        AmazonLinux2023 = "AMAZON_LINUX_2023",
        Ubuntu = "UBUNTU",
        RedhatEnterpriseLinux = "REDHAT_ENTERPRISE_LINUX",
        Suse = "SUSE",
        CentOs = "CENTOS",
        OracleLinux = "ORACLE_LINUX",
        Debian = "DEBIAN",
        MacOs = "MACOS",
        Raspbian = "RASPBIAN",
        RockyLinux = "ROCKY_LINUX",
        AlmaLinux = "ALMA_LINUX",
    }
}

string_enum! {
    pub enum PatchAction {
        AllowAsDependency = "ALLOW_AS_DEPENDENCY",
        Block = "BLOCK",
    }
}

string_enum! {
    pub enum PatchComplianceLevel {
        Critical = "CRITICAL",
        High = "HIGH",
        Medium = "MEDIUM",
        Low = "LOW",
        Informational = "INFORMATIONAL",
        Unspecified = "UNSPECIFIED",
    }
}

string_enum! {
    pub enum PatchFilterKey {
        Arch = "ARCH",
        AdvisoryId = "ADVISORY_ID",
        BugzillaId = "BUGZILLA_ID",
        Classification = "CLASSIFICATION",
        CveId = "CVE_ID",
        Epoch = "EPOCH",
        MsrcSeverity = "MSRC_SEVERITY",
        Name = "NAME",
        PatchId = "PATCH_ID",
        PatchSet = "PATCH_SET",
        Priority = "PRIORITY",
        Product = "PRODUCT",
        ProductFamily = "PRODUCT_FAMILY",
        Release = "RELEASE",
        Repository = "REPOSITORY",
        Section = "SECTION",
        Security = "SECURITY",
        Severity = "SEVERITY",
        Version = "VERSION",
    }
}

string_enum! {
    pub enum PatchOperationType {
        Scan = "Scan",
        Install = "Install",
    }
}

string_enum! {
    pub enum RebootOption {
        RebootIfNeeded = "RebootIfNeeded",
        NoReboot = "NoReboot",
    }
}

string_enum! {
    pub enum ComplianceSeverity {
        Critical = "CRITICAL",
        High = "HIGH",
        Medium = "MEDIUM",
        Low = "LOW",
        Informational = "INFORMATIONAL",
        Unspecified = "UNSPECIFIED",
    }
}

string_enum! {
    pub enum ComplianceStatus {
        Compliant = "COMPLIANT",
        NonCompliant = "NON_COMPLIANT",
    }
}

string_enum! {
    pub enum ComplianceUploadType {
        Complete = "COMPLETE",
        Partial = "PARTIAL",
    }
}

string_enum! {
    pub enum ComplianceQueryOperatorType {
        Equal = "EQUAL",
        NotEqual = "NOT_EQUAL",
        BeginWith = "BEGIN_WITH",
        LessThan = "LESS_THAN",
        GreaterThan = "GREATER_THAN",
    }
}

string_enum! {
    pub enum PingStatus {
        Online = "Online",
        ConnectionLost = "ConnectionLost",
        Inactive = "Inactive",
    }
}

string_enum! {
    pub enum ResourceType {
        ManagedInstance = "ManagedInstance",
        Document = "Document",
        Ec2Instance = "EC2Instance",
    }
}

string_enum! {
    pub enum InstanceInformationFilterKey {
        InstanceIds = "InstanceIds",
        AgentVersion = "AgentVersion",
        PingStatus = "PingStatus",
        PlatformTypes = "PlatformTypes",
        ActivationIds = "ActivationIds",
        IamRole = "IamRole",
        ResourceType = "ResourceType",
        AssociationStatus = "AssociationStatus",
    }
}

string_enum! {
    pub enum ConnectionStatus {
        Connected = "connected",
        NotConnected = "notconnected",
    }
}

string_enum! {
    pub enum SessionState {
        Active = "Active",
        History = "History",
    }
}

string_enum! {
    pub enum SessionStatus {
        Connected = "Connected",
        Connecting = "Connecting",
        Disconnected = "Disconnected",
        Terminated = "Terminated",
        Terminating = "Terminating",
        Failed = "Failed",
    }
}

string_enum! {
    pub enum SessionFilterKey {
        InvokedAfter = "InvokedAfter",
        InvokedBefore = "InvokedBefore",
        Target = "Target",
        Owner = "Owner",
        Status = "Status",
        SessionId = "SessionId",
    }
}

string_enum! {
    pub enum ResourceTypeForTagging {
        Document = "Document",
        ManagedInstance = "ManagedInstance",
        MaintenanceWindow = "MaintenanceWindow",
        Parameter = "Parameter",
        PatchBaseline = "PatchBaseline",
        OpsItem = "OpsItem",
        OpsMetadata = "OpsMetadata",
        Automation = "Automation",
        Association = "Association",
    }
}

pub(crate) fn register_enums(registry: &mut ShapeRegistry) {
    macro_rules! register_enums {
        ($registry:ident; $($name:ident),+ $(,)?) => {
            $( $registry.register_enum::<$name>(); )+
        };
    }

    register_enums!(registry;
        ParameterType,
        ParameterTier,
        ParametersFilterKey,
        CommandStatus,
        CommandInvocationStatus,
        CommandPluginStatus,
        CommandInvocationDetailStatus,
        CommandFilterKey,
        DocumentHashType,
        NotificationEvent,
        NotificationType,
        AssociationStatusName,
        AssociationComplianceSeverity,
        AssociationSyncCompliance,
        AssociationFilterKey,
        AssociationExecutionFilterKey,
        AssociationFilterOperatorType,
        Fault,
        DocumentType,
        DocumentFormat,
        DocumentStatus,
        DocumentFilterKey,
        DocumentParameterType,
        PlatformType,
        MaintenanceWindowTaskType,
        MaintenanceWindowExecutionStatus,
        MaintenanceWindowResourceType,
        MaintenanceWindowTaskCutoffBehavior,
        OperatingSystem,
        PatchAction,
        PatchComplianceLevel,
        PatchFilterKey,
        PatchOperationType,
        RebootOption,
        ComplianceSeverity,
        ComplianceStatus,
        ComplianceUploadType,
        ComplianceQueryOperatorType,
        PingStatus,
        ResourceType,
        InstanceInformationFilterKey,
        ConnectionStatus,
        SessionState,
        SessionStatus,
        SessionFilterKey,
        ResourceTypeForTagging,
    );
}

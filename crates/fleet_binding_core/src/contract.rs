use serde::{Deserialize, Serialize};

pub const MISSING_PROPERTIES_REASON: &str = "Missing required properties";

/// Provisioning phase carried in the event's `RequestType` field.
///
/// Events without a `RequestType` are treated as `Create`; the apply path is
/// identical for create and update. `Delete` is surfaced explicitly so the
/// handler can acknowledge it without touching the control plane.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum LifecyclePhase {
    Create,
    Update,
    Delete,
}

impl Default for LifecyclePhase {
    fn default() -> Self {
        Self::Create
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResourceProperties {
    #[serde(rename = "InstanceGroupName")]
    pub instance_group_name: Option<String>,
    #[serde(rename = "TargetGroupId")]
    pub target_group_id: Option<String>,
}

/// One lifecycle event from the provisioning orchestrator. Immutable per
/// invocation; the correlation id (`LogicalResourceId`) names the binding on
/// error paths where no real identity can be computed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LifecycleEvent {
    #[serde(rename = "RequestType", default)]
    pub request_type: LifecyclePhase,
    #[serde(rename = "LogicalResourceId")]
    pub logical_resource_id: String,
    #[serde(rename = "PhysicalResourceId", default)]
    pub physical_resource_id: Option<String>,
    #[serde(rename = "ResourceProperties", default)]
    pub resource_properties: ResourceProperties,
}

/// Validated binding identifiers extracted from an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindingRequest {
    pub instance_group_name: String,
    pub target_group_id: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum LifecycleStatus {
    #[serde(rename = "SUCCESS")]
    Success,
    #[serde(rename = "FAILED")]
    Failed,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LifecycleResponse {
    #[serde(rename = "Status")]
    pub status: LifecycleStatus,
    #[serde(rename = "Reason", skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(rename = "PhysicalResourceId")]
    pub physical_resource_id: String,
}

impl LifecycleResponse {
    pub fn success(physical_resource_id: impl Into<String>) -> Self {
        Self {
            status: LifecycleStatus::Success,
            reason: None,
            physical_resource_id: physical_resource_id.into(),
        }
    }

    pub fn failed(reason: impl Into<String>, physical_resource_id: impl Into<String>) -> Self {
        Self {
            status: LifecycleStatus::Failed,
            reason: Some(reason.into()),
            physical_resource_id: physical_resource_id.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    message: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Failure of a group-description or target-registration call. Carries the
/// underlying message verbatim; retry policy belongs to the orchestrator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlPlaneError {
    message: String,
}

impl ControlPlaneError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ControlPlaneError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ControlPlaneError {}

pub fn binding_from_event(event: &LifecycleEvent) -> Result<BindingRequest, ValidationError> {
    let instance_group_name = event
        .resource_properties
        .instance_group_name
        .as_deref()
        .map(str::trim)
        .unwrap_or_default();
    let target_group_id = event
        .resource_properties
        .target_group_id
        .as_deref()
        .map(str::trim)
        .unwrap_or_default();

    if instance_group_name.is_empty() || target_group_id.is_empty() {
        return Err(ValidationError::new(MISSING_PROPERTIES_REASON));
    }

    Ok(BindingRequest {
        instance_group_name: instance_group_name.to_string(),
        target_group_id: target_group_id.to_string(),
    })
}

/// Deterministic binding identity. Must reproduce identically for every
/// successful reconciliation of the same binding; the orchestrator keys
/// resource identity on it.
pub fn binding_physical_id(instance_group_name: &str, target_group_id: &str) -> String {
    format!("{instance_group_name}-{target_group_id}")
}

use fleet_binding_core::contract::{
    binding_from_event, binding_physical_id, LifecycleEvent, LifecyclePhase, LifecycleResponse,
    LifecycleStatus,
};
use serde_json::{json, Value};

use crate::adapters::group_inspector::GroupInspector;
use crate::adapters::target_binder::TargetBinder;

/// Reconciles one lifecycle event: resolves the named group's current
/// members and registers them with the target group. Total over its input;
/// every failure path is captured into a `FAILED` response.
pub fn handle_lifecycle_event(
    event: Value,
    inspector: &dyn GroupInspector,
    binder: &dyn TargetBinder,
) -> LifecycleResponse {
    let fallback_identity = event
        .get("LogicalResourceId")
        .and_then(Value::as_str)
        .unwrap_or("unknown")
        .to_string();

    let event = match serde_json::from_value::<LifecycleEvent>(event) {
        Ok(value) => value,
        Err(error) => {
            let response =
                LifecycleResponse::failed(format!("Malformed event: {error}"), fallback_identity);
            log_register_error(
                "event_rejected",
                json!({ "reason": response.reason.clone() }),
            );
            return response;
        }
    };

    log_register_info(
        "event_received",
        json!({
            "phase": event.request_type,
            "logical_resource_id": event.logical_resource_id.clone(),
        }),
    );

    let response = reconcile(&event, inspector, binder);

    match response.status {
        LifecycleStatus::Success => log_register_info(
            "reconcile_succeeded",
            json!({
                "logical_resource_id": event.logical_resource_id.clone(),
                "physical_resource_id": response.physical_resource_id.clone(),
            }),
        ),
        LifecycleStatus::Failed => log_register_error(
            "reconcile_failed",
            json!({
                "logical_resource_id": event.logical_resource_id.clone(),
                "reason": response.reason.clone(),
            }),
        ),
    }

    response
}

fn reconcile(
    event: &LifecycleEvent,
    inspector: &dyn GroupInspector,
    binder: &dyn TargetBinder,
) -> LifecycleResponse {
    let binding = match binding_from_event(event) {
        Ok(value) => value,
        Err(error) => {
            return LifecycleResponse::failed(error.message(), event.logical_resource_id.clone());
        }
    };

    let physical_id = binding_physical_id(&binding.instance_group_name, &binding.target_group_id);

    if event.request_type == LifecyclePhase::Delete {
        // Targets drain when their instances terminate; a delete only has to
        // acknowledge the stable binding identity.
        return LifecycleResponse::success(physical_id);
    }

    let members = match inspector.list_members(&binding.instance_group_name) {
        Ok(value) => value,
        Err(error) => {
            return LifecycleResponse::failed(
                format!("Error: {}", error.message()),
                event.logical_resource_id.clone(),
            );
        }
    };

    if members.is_empty() {
        log_register_info(
            "group_empty",
            json!({ "instance_group_name": binding.instance_group_name.clone() }),
        );
        return LifecycleResponse::success(physical_id);
    }

    if let Err(error) = binder.register_members(&binding.target_group_id, &members) {
        return LifecycleResponse::failed(
            format!("Error: {}", error.message()),
            event.logical_resource_id.clone(),
        );
    }

    log_register_info(
        "members_registered",
        json!({
            "instance_group_name": binding.instance_group_name.clone(),
            "target_group_id": binding.target_group_id.clone(),
            "member_count": members.len(),
        }),
    );

    LifecycleResponse::success(physical_id)
}

fn log_register_info(event: &str, details: Value) {
    eprintln!(
        "{}",
        json!({
            "component": "register_handler",
            "event": event,
            "timestamp": chrono::Utc::now().to_rfc3339(),
            "details": details,
        })
    );
}

fn log_register_error(event: &str, details: Value) {
    eprintln!(
        "{}",
        json!({
            "component": "register_handler",
            "level": "error",
            "event": event,
            "timestamp": chrono::Utc::now().to_rfc3339(),
            "details": details,
        })
    );
}

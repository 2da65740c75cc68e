use aws_sdk_elasticloadbalancingv2::types::TargetDescription;
use fleet_binding_core::contract::{ControlPlaneError, LifecycleResponse};
use fleet_binding_lambda::adapters::group_inspector::GroupInspector;
use fleet_binding_lambda::adapters::target_binder::TargetBinder;
use fleet_binding_lambda::handlers::register::handle_lifecycle_event;
use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;

struct AutoScalingGroupInspector {
    autoscaling_client: aws_sdk_autoscaling::Client,
}

struct ElbTargetBinder {
    elbv2_client: aws_sdk_elasticloadbalancingv2::Client,
}

impl GroupInspector for AutoScalingGroupInspector {
    fn list_members(&self, group_name: &str) -> Result<Vec<String>, ControlPlaneError> {
        let client = self.autoscaling_client.clone();
        let group_name = group_name.to_string();

        tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(async move {
                let output = client
                    .describe_auto_scaling_groups()
                    .auto_scaling_group_names(group_name.clone())
                    .send()
                    .await
                    .map_err(|error| {
                        ControlPlaneError::new(format!(
                            "failed to describe auto scaling group: {error}"
                        ))
                    })?;

                let group = output.auto_scaling_groups().first().ok_or_else(|| {
                    ControlPlaneError::new(format!("auto scaling group not found: {group_name}"))
                })?;

                Ok(group
                    .instances()
                    .iter()
                    .filter_map(|instance| instance.instance_id().map(str::to_string))
                    .collect())
            })
        })
    }
}

impl TargetBinder for ElbTargetBinder {
    fn register_members(
        &self,
        target_group_id: &str,
        members: &[String],
    ) -> Result<(), ControlPlaneError> {
        if members.is_empty() {
            return Ok(());
        }

        let client = self.elbv2_client.clone();
        let target_group_arn = target_group_id.to_string();
        let members = members.to_vec();

        tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(async move {
                let mut targets = Vec::with_capacity(members.len());
                for member in &members {
                    let target = TargetDescription::builder().id(member).build();
                    targets.push(target);
                }

                client
                    .register_targets()
                    .target_group_arn(target_group_arn)
                    .set_targets(Some(targets))
                    .send()
                    .await
                    .map(|_| ())
                    .map_err(|error| {
                        ControlPlaneError::new(format!("failed to register targets: {error}"))
                    })
            })
        })
    }
}

async fn handle_request(
    event: LambdaEvent<Value>,
    inspector: &dyn GroupInspector,
    binder: &dyn TargetBinder,
) -> Result<LifecycleResponse, Error> {
    Ok(handle_lifecycle_event(event.payload, inspector, binder))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Clients are built once per process; each invocation reuses the handles.
    let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    let inspector = AutoScalingGroupInspector {
        autoscaling_client: aws_sdk_autoscaling::Client::new(&config),
    };
    let binder = ElbTargetBinder {
        elbv2_client: aws_sdk_elasticloadbalancingv2::Client::new(&config),
    };

    lambda_runtime::run(service_fn(|event: LambdaEvent<Value>| {
        handle_request(event, &inspector, &binder)
    }))
    .await
}

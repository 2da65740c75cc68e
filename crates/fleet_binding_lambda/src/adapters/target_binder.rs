use fleet_binding_core::contract::ControlPlaneError;

/// Registers instance members with a target group in a single all-or-nothing
/// call. Implementations must treat an empty member list as a trivial
/// success.
pub trait TargetBinder {
    fn register_members(
        &self,
        target_group_id: &str,
        members: &[String],
    ) -> Result<(), ControlPlaneError>;
}

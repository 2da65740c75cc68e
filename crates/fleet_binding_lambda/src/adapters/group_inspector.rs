use fleet_binding_core::contract::ControlPlaneError;

/// Read-only view of an elastic instance group's current membership.
///
/// An empty member list is a legitimate result (a group scaling from or to
/// zero), never an error; errors mean the group could not be described at
/// all.
pub trait GroupInspector {
    fn list_members(&self, group_name: &str) -> Result<Vec<String>, ControlPlaneError>;
}

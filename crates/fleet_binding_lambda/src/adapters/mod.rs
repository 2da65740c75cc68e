pub mod group_inspector;
pub mod target_binder;

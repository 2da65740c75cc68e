//! AWS-oriented adapters and handlers for binding reconciliation.
//!
//! This crate owns runtime integration details (the Lambda handler and the
//! control-plane adapter seams) and leaves the lifecycle contract to
//! `fleet_binding_core`.

pub mod adapters;
pub mod handlers;

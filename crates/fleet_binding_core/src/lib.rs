//! Shared binding-reconciler domain primitives.
//!
//! This crate owns the lifecycle request/response contract, event validation,
//! and the deterministic binding identity. It intentionally excludes AWS SDK
//! and Lambda runtime concerns.

pub mod contract;

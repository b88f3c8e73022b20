//! The access policy gating writes by role and partition.

pub mod enforcer;

pub use enforcer::AccessPolicy;

//! Application layer: the two operations this crate exists for.
//!
//! `PermissionSynchronizer` seeds the admin hub's roles and permissions through
//! the storage ports, and `build_auth_payload` shapes checkout data into the
//! card gateway's authorization body.

pub mod auth_payload;
pub mod permission_sync;

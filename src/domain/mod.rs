//! Domain types and the ports the application layer depends on.

pub mod payment;
pub mod permission;
pub mod ports;

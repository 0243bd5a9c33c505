//! Adapters for the domain ports: storage, manifests and the card gateway.

pub mod in_memory;
pub mod manifest;
pub mod opayo;
#[cfg(feature = "storage-rocksdb")]
pub mod rocksdb;

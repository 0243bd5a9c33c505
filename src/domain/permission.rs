use serde::{Deserialize, Serialize};

/// Guard value stamped on every role and permission created by the synchronizer.
pub const STAFF_GUARD: &str = "Staff";

/// Roles that must always exist in the admin hub.
pub const HUB_ROLES: [&str; 2] = ["Admin", "Staff"];

/// A permission declared by the hub manifest.
///
/// Only `handle` is persisted; the remaining fields exist so manifests can be
/// authored and reviewed as plain JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionDescriptor {
    pub handle: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub first_party: bool,
}

impl PermissionDescriptor {
    pub fn new(handle: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            handle: handle.into(),
            name: name.into(),
            description: None,
            first_party: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub name: String,
    pub display_name: String,
}

impl Role {
    pub fn staff(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            display_name: STAFF_GUARD.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Permission {
    pub name: String,
    pub display_name: String,
}

impl Permission {
    pub fn staff(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            display_name: STAFF_GUARD.to_string(),
        }
    }
}

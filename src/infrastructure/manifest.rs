use crate::domain::permission::PermissionDescriptor;
use crate::domain::ports::PermissionManifest;
use crate::error::Result;
use std::io::Read;

/// Permissions shipped with the admin hub itself.
const HUB_PERMISSIONS: &[(&str, &str)] = &[
    ("settings", "Settings"),
    ("settings:core", "Core settings"),
    ("settings:manage-staff", "Manage staff"),
    ("settings:manage-attributes", "Manage attributes"),
    ("catalogue:manage-products", "Manage products"),
    ("catalogue:manage-collections", "Manage collections"),
    ("catalogue:manage-orders", "Manage orders"),
    ("catalogue:manage-customers", "Manage customers"),
    ("catalogue:manage-discounts", "Manage discounts"),
];

/// A manifest whose permission list is fixed at construction.
#[derive(Debug, Clone, Default)]
pub struct StaticManifest {
    permissions: Vec<PermissionDescriptor>,
}

impl StaticManifest {
    pub fn new(permissions: Vec<PermissionDescriptor>) -> Self {
        Self { permissions }
    }

    /// The hub's built-in permissions.
    pub fn hub() -> Self {
        Self::new(
            HUB_PERMISSIONS
                .iter()
                .map(|(handle, name)| PermissionDescriptor::new(*handle, *name))
                .collect(),
        )
    }

    /// Reads a JSON array of permission descriptors.
    pub fn from_reader<R: Read>(source: R) -> Result<Self> {
        let permissions: Vec<PermissionDescriptor> = serde_json::from_reader(source)?;
        Ok(Self::new(permissions))
    }
}

impl PermissionManifest for StaticManifest {
    fn list_permissions(&self) -> Vec<PermissionDescriptor> {
        self.permissions.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hub_manifest_handles_are_unique() {
        let permissions = StaticManifest::hub().list_permissions();
        let mut handles: Vec<&str> = permissions.iter().map(|p| p.handle.as_str()).collect();
        handles.sort_unstable();
        handles.dedup();
        assert_eq!(handles.len(), permissions.len());
    }

    #[test]
    fn test_from_reader_keeps_order() {
        let json = r#"[
            {"handle": "reports:view", "name": "View reports"},
            {"handle": "reports:export"}
        ]"#;
        let manifest = StaticManifest::from_reader(json.as_bytes()).unwrap();
        let handles: Vec<String> = manifest
            .list_permissions()
            .into_iter()
            .map(|p| p.handle)
            .collect();
        assert_eq!(handles, vec!["reports:view", "reports:export"]);
    }

    #[test]
    fn test_from_reader_rejects_malformed_json() {
        assert!(StaticManifest::from_reader("[{\"name\": 1}]".as_bytes()).is_err());
    }
}

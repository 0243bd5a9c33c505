use crate::domain::permission::{Permission, Role};
use crate::domain::ports::{PermissionStore, RoleStore};
use crate::error::Result;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe in-memory store for roles, keyed by name.
///
/// Clones share the same map, which lets callers keep a handle for inspection
/// after boxing one into the synchronizer.
#[derive(Default, Clone)]
pub struct InMemoryRoleStore {
    roles: Arc<RwLock<BTreeMap<String, Role>>>,
}

impl InMemoryRoleStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RoleStore for InMemoryRoleStore {
    async fn find(&self, name: &str) -> Result<Option<Role>> {
        let roles = self.roles.read().await;
        Ok(roles.get(name).cloned())
    }

    async fn create(&self, role: Role) -> Result<()> {
        let mut roles = self.roles.write().await;
        roles.entry(role.name.clone()).or_insert(role);
        Ok(())
    }

    async fn get_all(&self) -> Result<Vec<Role>> {
        let roles = self.roles.read().await;
        Ok(roles.values().cloned().collect())
    }
}

/// A thread-safe in-memory store for permissions, keyed by name.
#[derive(Default, Clone)]
pub struct InMemoryPermissionStore {
    permissions: Arc<RwLock<BTreeMap<String, Permission>>>,
}

impl InMemoryPermissionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PermissionStore for InMemoryPermissionStore {
    async fn find(&self, name: &str) -> Result<Option<Permission>> {
        let permissions = self.permissions.read().await;
        Ok(permissions.get(name).cloned())
    }

    async fn create(&self, permission: Permission) -> Result<()> {
        let mut permissions = self.permissions.write().await;
        permissions
            .entry(permission.name.clone())
            .or_insert(permission);
        Ok(())
    }

    async fn get_all(&self) -> Result<Vec<Permission>> {
        let permissions = self.permissions.read().await;
        Ok(permissions.values().cloned().collect())
    }
}

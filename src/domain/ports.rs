use super::payment::{AuthPayload, ThreeDsChallengeResult};
use super::permission::{Permission, PermissionDescriptor, Role};
use crate::error::Result;
use async_trait::async_trait;
use serde_json::Value;

/// Source of the permissions the admin hub declares.
pub trait PermissionManifest: Send + Sync {
    fn list_permissions(&self) -> Vec<PermissionDescriptor>;
}

/// Roles keyed by name. `create` inserts only when the name is free and never
/// replaces a stored row.
#[async_trait]
pub trait RoleStore: Send + Sync {
    async fn find(&self, name: &str) -> Result<Option<Role>>;
    async fn create(&self, role: Role) -> Result<()>;
    async fn get_all(&self) -> Result<Vec<Role>>;
}

/// Permissions keyed by name, with the same insert-only `create` as
/// [`RoleStore`].
#[async_trait]
pub trait PermissionStore: Send + Sync {
    async fn find(&self, name: &str) -> Result<Option<Permission>>;
    async fn create(&self, permission: Permission) -> Result<()>;
    async fn get_all(&self) -> Result<Vec<Permission>>;
}

/// Card gateway operations.
///
/// Every remote call returns `Ok(None)` when the gateway answers with a
/// non-success status; only transport failures are errors.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    async fn merchant_session_key(&self) -> Result<Option<String>>;
    async fn transaction(&self, id: &str) -> Result<Option<Value>>;
    async fn authorize(&self, payload: &AuthPayload) -> Result<Option<Value>>;
    async fn complete_challenge(
        &self,
        transaction_id: &str,
        challenge: &ThreeDsChallengeResult,
    ) -> Result<Option<Value>>;
}

pub type ManifestBox = Box<dyn PermissionManifest>;
pub type RoleStoreBox = Box<dyn RoleStore>;
pub type PermissionStoreBox = Box<dyn PermissionStore>;
pub type PaymentGatewayBox = Box<dyn PaymentGateway>;

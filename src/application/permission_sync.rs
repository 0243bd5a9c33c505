use crate::domain::permission::{HUB_ROLES, Permission, Role};
use crate::domain::ports::{ManifestBox, PermissionStoreBox, RoleStoreBox};
use crate::error::Result;

/// Rows created by a single synchronizer run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SyncReport {
    pub roles_created: usize,
    pub permissions_created: usize,
}

/// Makes sure the hub roles and every manifest permission exist in storage.
///
/// Rows are matched by name and created only when missing. Existing rows are
/// never touched and permissions dropped from the manifest are left in place.
pub struct PermissionSynchronizer {
    manifest: ManifestBox,
    role_store: RoleStoreBox,
    permission_store: PermissionStoreBox,
}

impl PermissionSynchronizer {
    pub fn new(
        manifest: ManifestBox,
        role_store: RoleStoreBox,
        permission_store: PermissionStoreBox,
    ) -> Self {
        Self {
            manifest,
            role_store,
            permission_store,
        }
    }

    /// Runs one synchronization pass.
    ///
    /// Writes happen one at a time; the first storage error aborts the run and
    /// whatever was created before it stays. Running again finishes the job.
    pub async fn sync(&self) -> Result<SyncReport> {
        let mut report = SyncReport::default();

        for name in HUB_ROLES {
            if self.role_store.find(name).await?.is_none() {
                self.role_store.create(Role::staff(name)).await?;
                tracing::debug!(role = name, "Role created");
                report.roles_created += 1;
            }
        }

        for descriptor in self.manifest.list_permissions() {
            if self.permission_store.find(&descriptor.handle).await?.is_none() {
                self.permission_store
                    .create(Permission::staff(descriptor.handle.as_str()))
                    .await?;
                tracing::debug!(permission = %descriptor.handle, "Permission created");
                report.permissions_created += 1;
            }
        }

        tracing::info!(
            roles_created = report.roles_created,
            permissions_created = report.permissions_created,
            "Roles and permissions synchronized"
        );

        Ok(report)
    }

    /// Consumes the synchronizer and returns what is now stored.
    pub async fn into_results(self) -> Result<(Vec<Role>, Vec<Permission>)> {
        let roles = self.role_store.get_all().await?;
        let permissions = self.permission_store.get_all().await?;
        Ok((roles, permissions))
    }
}

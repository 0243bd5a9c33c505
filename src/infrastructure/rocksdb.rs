use crate::domain::permission::{Permission, Role};
use crate::domain::ports::{PermissionStore, RoleStore};
use crate::error::{Error, Result};
use async_trait::async_trait;
use rocksdb::{ColumnFamilyDescriptor, DB, Options};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::path::Path;
use std::sync::Arc;

/// Column Family for storing roles.
pub const CF_ROLES: &str = "roles";
/// Column Family for storing permissions.
pub const CF_PERMISSIONS: &str = "permissions";

/// A persistent role and permission store backed by RocksDB.
///
/// Each record lives in its own column family under its name, serialized as
/// JSON. `Clone` shares the underlying `Arc<DB>`.
#[derive(Clone)]
pub struct RocksDBStore {
    db: Arc<DB>,
}

impl RocksDBStore {
    /// Opens or creates a RocksDB instance at the specified path.
    ///
    /// Ensures that the "roles" and "permissions" column families exist.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut opts = Options::default();
        opts.create_if_missing(true);
        opts.create_missing_column_families(true);

        let cf_roles = ColumnFamilyDescriptor::new(CF_ROLES, Options::default());
        let cf_permissions = ColumnFamilyDescriptor::new(CF_PERMISSIONS, Options::default());

        let db = DB::open_cf_descriptors(&opts, path, vec![cf_roles, cf_permissions])?;

        Ok(Self { db: Arc::new(db) })
    }

    fn get_record<T: DeserializeOwned>(&self, cf_name: &str, name: &str) -> Result<Option<T>> {
        let cf = self
            .db
            .cf_handle(cf_name)
            .ok_or_else(|| Error::Storage(format!("{cf_name} column family not found")))?;

        match self.db.get_cf(&cf, name.as_bytes())? {
            Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            None => Ok(None),
        }
    }

    /// Writes `record` under `name` unless a record with that name exists.
    fn insert_record<T: Serialize>(&self, cf_name: &str, name: &str, record: &T) -> Result<()> {
        let cf = self
            .db
            .cf_handle(cf_name)
            .ok_or_else(|| Error::Storage(format!("{cf_name} column family not found")))?;

        if self.db.get_cf(&cf, name.as_bytes())?.is_some() {
            return Ok(());
        }

        let value = serde_json::to_vec(record)?;
        self.db.put_cf(&cf, name.as_bytes(), value)?;
        Ok(())
    }

    fn all_records<T: DeserializeOwned>(&self, cf_name: &str) -> Result<Vec<T>> {
        let cf = self
            .db
            .cf_handle(cf_name)
            .ok_or_else(|| Error::Storage(format!("{cf_name} column family not found")))?;

        let mut records = Vec::new();
        for item in self.db.iterator_cf(&cf, rocksdb::IteratorMode::Start) {
            let (_key, value) = item?;
            records.push(serde_json::from_slice(&value)?);
        }

        Ok(records)
    }
}

#[async_trait]
impl RoleStore for RocksDBStore {
    async fn find(&self, name: &str) -> Result<Option<Role>> {
        self.get_record(CF_ROLES, name)
    }

    async fn create(&self, role: Role) -> Result<()> {
        self.insert_record(CF_ROLES, &role.name, &role)
    }

    async fn get_all(&self) -> Result<Vec<Role>> {
        self.all_records(CF_ROLES)
    }
}

#[async_trait]
impl PermissionStore for RocksDBStore {
    async fn find(&self, name: &str) -> Result<Option<Permission>> {
        self.get_record(CF_PERMISSIONS, name)
    }

    async fn create(&self, permission: Permission) -> Result<()> {
        self.insert_record(CF_PERMISSIONS, &permission.name, &permission)
    }

    async fn get_all(&self) -> Result<Vec<Permission>> {
        self.all_records(CF_PERMISSIONS)
    }
}

#![allow(async_fn_in_trait)]

use uuid::Uuid;

use stockroom_domain::employee::Employee;
use stockroom_domain::item::Item;

use crate::domain::types::{EmployeeProfileDraft, IdentityRecord, ItemDraft};
use crate::error::InventoryError;

/// Repository for catalog items.
pub trait ItemRepository: Send + Sync {
    /// Full catalog in persistence order (ascending id).
    async fn list(&self) -> Result<Vec<Item>, InventoryError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Item>, InventoryError>;
    /// Insert a new item. Returns the stored item with its assigned id.
    async fn insert(&self, draft: &ItemDraft) -> Result<Item, InventoryError>;
    async fn update(&self, id: i64, draft: &ItemDraft) -> Result<(), InventoryError>;
    /// Delete an item. Returns `true` if a row was deleted.
    async fn delete_by_id(&self, id: i64) -> Result<bool, InventoryError>;
}

/// Repository for employee profiles.
pub trait EmployeeRepository: Send + Sync {
    async fn find_by_user_id(&self, user_id: Uuid) -> Result<Option<Employee>, InventoryError>;
    async fn update_profile(
        &self,
        id: i64,
        draft: &EmployeeProfileDraft,
    ) -> Result<(), InventoryError>;
}

/// Port onto the identity subsystem: lookups for login and authorization,
/// plus the registration write.
pub trait IdentityRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<IdentityRecord>, InventoryError>;
    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<IdentityRecord>, InventoryError>;
    /// Group names held by a user.
    async fn groups_of(&self, user_id: Uuid) -> Result<Vec<String>, InventoryError>;
    /// Atomically create the identity, its default group membership and the
    /// linked empty employee profile. Any step failing rolls back all three.
    async fn register(&self, user: &IdentityRecord, group: &str) -> Result<(), InventoryError>;
}

use anyhow::Context as _;
use sea_orm::{
    ActiveModelTrait,
    ActiveValue::{NotSet, Set},
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, TransactionTrait,
};
use uuid::Uuid;

use stockroom_domain::employee::Employee;
use stockroom_domain::item::{Category, Item};
use stockroom_inventory_schema::{employees, group_memberships, items, users};

use crate::domain::repository::{EmployeeRepository, IdentityRepository, ItemRepository};
use crate::domain::types::{EmployeeProfileDraft, IdentityRecord, ItemDraft};
use crate::error::InventoryError;

// ── Item repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbItemRepository {
    pub db: std::sync::Arc<DatabaseConnection>,
}

impl ItemRepository for DbItemRepository {
    async fn list(&self) -> Result<Vec<Item>, InventoryError> {
        let models = items::Entity::find()
            .order_by_asc(items::Column::Id)
            .all(&*self.db)
            .await
            .context("list items")?;
        models.into_iter().map(item_from_model).collect()
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Item>, InventoryError> {
        let model = items::Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .context("find item by id")?;
        model.map(item_from_model).transpose()
    }

    async fn insert(&self, draft: &ItemDraft) -> Result<Item, InventoryError> {
        let model = items::ActiveModel {
            id: NotSet,
            name: Set(draft.name.clone()),
            category: Set(draft.category.as_str().to_string()),
            cost: Set(draft.cost),
            amount: Set(draft.amount),
        }
        .insert(&*self.db)
        .await
        .context("insert item")?;
        item_from_model(model)
    }

    async fn update(&self, id: i64, draft: &ItemDraft) -> Result<(), InventoryError> {
        items::ActiveModel {
            id: Set(id),
            name: Set(draft.name.clone()),
            category: Set(draft.category.as_str().to_string()),
            cost: Set(draft.cost),
            amount: Set(draft.amount),
        }
        .update(&*self.db)
        .await
        .map_err(|e| match e {
            // The row can vanish between the use case's existence check and
            // this statement; that is still a missing item, not a failure.
            sea_orm::DbErr::RecordNotUpdated => InventoryError::ItemNotFound,
            e => InventoryError::Internal(anyhow::Error::new(e).context("update item")),
        })?;
        Ok(())
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, InventoryError> {
        let result = items::Entity::delete_many()
            .filter(items::Column::Id.eq(id))
            .exec(&*self.db)
            .await
            .context("delete item")?;
        Ok(result.rows_affected > 0)
    }
}

fn item_from_model(model: items::Model) -> Result<Item, InventoryError> {
    // Categories are validated on the way in; an unknown stored value means
    // the row was written outside the application.
    let category = Category::parse(&model.category)
        .ok_or_else(|| anyhow::anyhow!("unknown category in items row {}: {}", model.id, model.category))?;
    Ok(Item {
        id: model.id,
        name: model.name,
        category,
        cost: model.cost,
        amount: model.amount,
    })
}

// ── Employee repository ──────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbEmployeeRepository {
    pub db: std::sync::Arc<DatabaseConnection>,
}

impl EmployeeRepository for DbEmployeeRepository {
    async fn find_by_user_id(&self, user_id: Uuid) -> Result<Option<Employee>, InventoryError> {
        let model = employees::Entity::find()
            .filter(employees::Column::UserId.eq(user_id))
            .one(&*self.db)
            .await
            .context("find employee by user id")?;
        Ok(model.map(employee_from_model))
    }

    async fn update_profile(
        &self,
        id: i64,
        draft: &EmployeeProfileDraft,
    ) -> Result<(), InventoryError> {
        employees::ActiveModel {
            id: Set(id),
            name: Set(draft.name.clone()),
            position: Set(draft.position.clone()),
            ..Default::default()
        }
        .update(&*self.db)
        .await
        .context("update employee profile")?;
        Ok(())
    }
}

fn employee_from_model(model: employees::Model) -> Employee {
    Employee {
        id: model.id,
        user_id: model.user_id,
        name: model.name,
        position: model.position,
    }
}

// ── Identity repository ──────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbIdentityRepository {
    pub db: std::sync::Arc<DatabaseConnection>,
}

impl IdentityRepository for DbIdentityRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<IdentityRecord>, InventoryError> {
        let model = users::Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .context("find user by id")?;
        Ok(model.map(identity_from_model))
    }

    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<IdentityRecord>, InventoryError> {
        let model = users::Entity::find()
            .filter(users::Column::Username.eq(username))
            .one(&*self.db)
            .await
            .context("find user by username")?;
        Ok(model.map(identity_from_model))
    }

    async fn groups_of(&self, user_id: Uuid) -> Result<Vec<String>, InventoryError> {
        let models = group_memberships::Entity::find()
            .filter(group_memberships::Column::UserId.eq(user_id))
            .all(&*self.db)
            .await
            .context("list group memberships")?;
        Ok(models.into_iter().map(|m| m.group_name).collect())
    }

    async fn register(&self, user: &IdentityRecord, group: &str) -> Result<(), InventoryError> {
        self.db
            .transaction::<_, (), sea_orm::DbErr>(|txn| {
                let user = user.clone();
                let group = group.to_owned();
                Box::pin(async move {
                    users::ActiveModel {
                        id: Set(user.id),
                        username: Set(user.username.clone()),
                        email: Set(user.email.clone()),
                        password_hash: Set(user.password_hash.clone()),
                        created_at: Set(user.created_at),
                    }
                    .insert(txn)
                    .await?;

                    group_memberships::ActiveModel {
                        user_id: Set(user.id),
                        group_name: Set(group),
                        created_at: Set(user.created_at),
                    }
                    .insert(txn)
                    .await?;

                    employees::ActiveModel {
                        id: NotSet,
                        user_id: Set(Some(user.id)),
                        name: Set(String::new()),
                        position: Set(String::new()),
                    }
                    .insert(txn)
                    .await?;

                    Ok(())
                })
            })
            .await
            .context("register identity")?;
        Ok(())
    }
}

fn identity_from_model(model: users::Model) -> IdentityRecord {
    IdentityRecord {
        id: model.id,
        username: model.username,
        email: model.email,
        password_hash: model.password_hash,
        created_at: model.created_at,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn draft() -> ItemDraft {
        ItemDraft {
            name: "Milk".into(),
            category: Category::Dairy,
            cost: None,
            amount: 20,
        }
    }

    #[tokio::test]
    async fn should_report_not_found_when_updated_row_vanished() {
        // UPDATE .. RETURNING resolves to no row.
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<items::Model>::new()])
            .into_connection();
        let repo = DbItemRepository { db: std::sync::Arc::new(db) };

        let err = repo.update(9999, &draft()).await.unwrap_err();
        assert!(matches!(err, InventoryError::ItemNotFound));
    }

    #[tokio::test]
    async fn should_reject_unknown_stored_category() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![items::Model {
                id: 1,
                name: "Mystery".into(),
                category: "Snacks".into(),
                cost: None,
                amount: 1,
            }]])
            .into_connection();
        let repo = DbItemRepository { db: std::sync::Arc::new(db) };

        let err = repo.find_by_id(1).await.unwrap_err();
        assert!(matches!(err, InventoryError::Internal(_)));
    }
}

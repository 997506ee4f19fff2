use stockroom_domain::item::Item;

use crate::domain::repository::ItemRepository;
use crate::domain::types::ItemDraft;
use crate::error::InventoryError;

// ── ListItems ────────────────────────────────────────────────────────────────

pub struct ListItemsUseCase<R: ItemRepository> {
    pub repo: R,
}

impl<R: ItemRepository> ListItemsUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<Item>, InventoryError> {
        self.repo.list().await
    }
}

// ── GetItem ──────────────────────────────────────────────────────────────────

pub struct GetItemUseCase<R: ItemRepository> {
    pub repo: R,
}

impl<R: ItemRepository> GetItemUseCase<R> {
    pub async fn execute(&self, id: i64) -> Result<Item, InventoryError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(InventoryError::ItemNotFound)
    }
}

// ── CreateItem ───────────────────────────────────────────────────────────────

pub struct CreateItemUseCase<R: ItemRepository> {
    pub repo: R,
}

impl<R: ItemRepository> CreateItemUseCase<R> {
    pub async fn execute(&self, draft: ItemDraft) -> Result<Item, InventoryError> {
        self.repo.insert(&draft).await
    }
}

// ── UpdateItem ───────────────────────────────────────────────────────────────

pub struct UpdateItemUseCase<R: ItemRepository> {
    pub repo: R,
}

impl<R: ItemRepository> UpdateItemUseCase<R> {
    /// Replaces every submitted field of an existing item. Not-found rather
    /// than upsert when the id does not resolve.
    pub async fn execute(&self, id: i64, draft: ItemDraft) -> Result<(), InventoryError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(InventoryError::ItemNotFound)?;
        self.repo.update(id, &draft).await
    }
}

// ── DeleteItem ───────────────────────────────────────────────────────────────

pub struct DeleteItemUseCase<R: ItemRepository> {
    pub repo: R,
}

impl<R: ItemRepository> DeleteItemUseCase<R> {
    pub async fn execute(&self, id: i64) -> Result<(), InventoryError> {
        if !self.repo.delete_by_id(id).await? {
            return Err(InventoryError::ItemNotFound);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use stockroom_domain::item::Category;

    struct MockItemRepo {
        items: Mutex<Vec<Item>>,
    }

    impl MockItemRepo {
        fn new(items: Vec<Item>) -> Self {
            Self {
                items: Mutex::new(items),
            }
        }
    }

    impl ItemRepository for MockItemRepo {
        async fn list(&self) -> Result<Vec<Item>, InventoryError> {
            Ok(self.items.lock().unwrap().clone())
        }

        async fn find_by_id(&self, id: i64) -> Result<Option<Item>, InventoryError> {
            Ok(self.items.lock().unwrap().iter().find(|i| i.id == id).cloned())
        }

        async fn insert(&self, draft: &ItemDraft) -> Result<Item, InventoryError> {
            let mut items = self.items.lock().unwrap();
            let id = items.iter().map(|i| i.id).max().unwrap_or(0) + 1;
            let item = Item {
                id,
                name: draft.name.clone(),
                category: draft.category,
                cost: draft.cost,
                amount: draft.amount,
            };
            items.push(item.clone());
            Ok(item)
        }

        async fn update(&self, id: i64, draft: &ItemDraft) -> Result<(), InventoryError> {
            let mut items = self.items.lock().unwrap();
            let item = items.iter_mut().find(|i| i.id == id).unwrap();
            item.name = draft.name.clone();
            item.category = draft.category;
            item.cost = draft.cost;
            item.amount = draft.amount;
            Ok(())
        }

        async fn delete_by_id(&self, id: i64) -> Result<bool, InventoryError> {
            let mut items = self.items.lock().unwrap();
            let before = items.len();
            items.retain(|i| i.id != id);
            Ok(items.len() < before)
        }
    }

    fn milk() -> Item {
        Item {
            id: 1,
            name: "Milk".into(),
            category: Category::Dairy,
            cost: Some("3.5".parse().unwrap()),
            amount: 20,
        }
    }

    fn draft(name: &str, category: Category, amount: i32) -> ItemDraft {
        ItemDraft {
            name: name.into(),
            category,
            cost: None,
            amount,
        }
    }

    #[tokio::test]
    async fn should_create_item_with_submitted_fields_and_new_id() {
        let repo = MockItemRepo::new(vec![milk()]);
        let usecase = CreateItemUseCase { repo };
        let created = usecase
            .execute(ItemDraft {
                name: "Bread".into(),
                category: Category::Bread,
                cost: Some("3.0".parse().unwrap()),
                amount: 5,
            })
            .await
            .unwrap();
        assert_eq!(created.id, 2);
        assert_eq!(created.name, "Bread");
        assert_eq!(created.category, Category::Bread);

        let all = usecase.repo.list().await.unwrap();
        assert_eq!(all.len(), 2);
    }

    #[tokio::test]
    async fn should_return_not_found_for_missing_item() {
        let usecase = GetItemUseCase {
            repo: MockItemRepo::new(vec![]),
        };
        let result = usecase.execute(9999).await;
        assert!(matches!(result, Err(InventoryError::ItemNotFound)));
    }

    #[tokio::test]
    async fn should_replace_fields_on_update() {
        let repo = MockItemRepo::new(vec![milk()]);
        let usecase = UpdateItemUseCase { repo };
        usecase
            .execute(1, draft("Updated Milk", Category::Beverage, 15))
            .await
            .unwrap();
        let item = usecase.repo.find_by_id(1).await.unwrap().unwrap();
        assert_eq!(item.name, "Updated Milk");
        assert_eq!(item.category, Category::Beverage);
        assert_eq!(item.cost, None);
        assert_eq!(item.amount, 15);
    }

    #[tokio::test]
    async fn should_not_update_missing_item() {
        let usecase = UpdateItemUseCase {
            repo: MockItemRepo::new(vec![milk()]),
        };
        let result = usecase.execute(42, draft("x", Category::Dairy, 1)).await;
        assert!(matches!(result, Err(InventoryError::ItemNotFound)));
    }

    #[tokio::test]
    async fn should_delete_then_lookup_yields_not_found() {
        let repo = MockItemRepo::new(vec![milk()]);
        let usecase = DeleteItemUseCase { repo };
        usecase.execute(1).await.unwrap();

        let get = GetItemUseCase { repo: usecase.repo };
        let result = get.execute(1).await;
        assert!(matches!(result, Err(InventoryError::ItemNotFound)));
    }

    #[tokio::test]
    async fn should_return_not_found_when_deleting_missing_item() {
        let usecase = DeleteItemUseCase {
            repo: MockItemRepo::new(vec![]),
        };
        let result = usecase.execute(1).await;
        assert!(matches!(result, Err(InventoryError::ItemNotFound)));
    }

    #[tokio::test]
    async fn should_list_items_in_persistence_order() {
        let mut second = milk();
        second.id = 2;
        second.name = "Cheese".into();
        let usecase = ListItemsUseCase {
            repo: MockItemRepo::new(vec![milk(), second]),
        };
        let items = usecase.execute().await.unwrap();
        assert_eq!(items[0].id, 1);
        assert_eq!(items[1].id, 2);
    }
}

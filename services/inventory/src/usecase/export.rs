use crate::domain::repository::ItemRepository;
use crate::error::InventoryError;
use crate::export::write_catalog;

pub struct ExportCatalogUseCase<R: ItemRepository> {
    pub repo: R,
}

impl<R: ItemRepository> ExportCatalogUseCase<R> {
    /// Materialize the whole catalog and serialize it. Fine while the catalog
    /// fits a single request's memory budget; there is no pagination.
    pub async fn execute(&self) -> Result<Vec<u8>, InventoryError> {
        let items = self.repo.list().await?;
        write_catalog(&items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use stockroom_domain::item::{Category, Item};

    use crate::domain::types::ItemDraft;

    struct MockItemRepo {
        items: Vec<Item>,
    }

    impl ItemRepository for MockItemRepo {
        async fn list(&self) -> Result<Vec<Item>, InventoryError> {
            Ok(self.items.clone())
        }

        async fn find_by_id(&self, _id: i64) -> Result<Option<Item>, InventoryError> {
            unreachable!("export only lists");
        }

        async fn insert(&self, _draft: &ItemDraft) -> Result<Item, InventoryError> {
            unreachable!("export only lists");
        }

        async fn update(&self, _id: i64, _draft: &ItemDraft) -> Result<(), InventoryError> {
            unreachable!("export only lists");
        }

        async fn delete_by_id(&self, _id: i64) -> Result<bool, InventoryError> {
            unreachable!("export only lists");
        }
    }

    #[tokio::test]
    async fn should_export_full_catalog() {
        let usecase = ExportCatalogUseCase {
            repo: MockItemRepo {
                items: vec![Item {
                    id: 1,
                    name: "Milk".into(),
                    category: Category::Dairy,
                    cost: Some("3.5".parse().unwrap()),
                    amount: 20,
                }],
            },
        };
        let buffer = usecase.execute().await.unwrap();
        assert_eq!(&buffer[..2], b"PK");
    }
}

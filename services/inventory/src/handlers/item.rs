//! Catalog item workflows: list, detail, add, update, delete.

use axum::extract::{Path, State};
use axum::response::{IntoResponse, Redirect, Response};
use axum::{Form, Json};
use rust_decimal::Decimal;
use serde::Serialize;

use stockroom_domain::item::{Category, Item};

use crate::error::InventoryError;
use crate::forms::{FieldErrors, ItemForm};
use crate::state::AppState;
use crate::usecase::item::{
    CreateItemUseCase, DeleteItemUseCase, GetItemUseCase, ListItemsUseCase, UpdateItemUseCase,
};

/// List-page locator, used as the post-mutation redirect target.
pub const INVENTORY_PATH: &str = "/inventory/";

#[derive(Debug, Serialize)]
pub struct ItemView {
    pub id: i64,
    pub name: String,
    pub category: &'static str,
    pub cost: Option<Decimal>,
    pub amount: i32,
    pub url: String,
}

impl From<Item> for ItemView {
    fn from(item: Item) -> Self {
        Self {
            url: item.detail_path(),
            id: item.id,
            name: item.name,
            category: item.category.as_str(),
            cost: item.cost,
            amount: item.amount,
        }
    }
}

/// Form-page context, re-rendered with the submitted values on failure.
#[derive(Debug, Serialize)]
struct ItemFormContext {
    values: ItemForm,
    errors: FieldErrors,
    categories: [&'static str; 6],
}

impl ItemFormContext {
    fn new(values: ItemForm, errors: FieldErrors) -> Self {
        Self {
            values,
            errors,
            categories: Category::ALL.map(Category::as_str),
        }
    }
}

#[derive(Debug, Serialize)]
struct ItemListContext {
    items: Vec<ItemView>,
}

/// Handler for `GET /inventory/`.
pub async fn list_items(State(state): State<AppState>) -> Result<Response, InventoryError> {
    let usecase = ListItemsUseCase {
        repo: state.item_repo(),
    };
    let items = usecase.execute().await?;
    let context = ItemListContext {
        items: items.into_iter().map(ItemView::from).collect(),
    };
    Ok(Json(context).into_response())
}

/// Handler for `GET /inventory/{id}/`.
pub async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Response, InventoryError> {
    let usecase = GetItemUseCase {
        repo: state.item_repo(),
    };
    let item = usecase.execute(id).await?;
    Ok(Json(ItemView::from(item)).into_response())
}

/// Handler for `GET /inventory/add_item/` — blank form context.
pub async fn add_item_form() -> Json<impl Serialize> {
    Json(ItemFormContext::new(
        ItemForm::default(),
        FieldErrors::default(),
    ))
}

/// Handler for `POST /inventory/add_item/`.
pub async fn add_item(
    State(state): State<AppState>,
    Form(form): Form<ItemForm>,
) -> Result<Response, InventoryError> {
    let draft = match form.validate() {
        Ok(draft) => draft,
        Err(errors) => {
            return Ok(Json(ItemFormContext::new(form, errors)).into_response());
        }
    };
    let usecase = CreateItemUseCase {
        repo: state.item_repo(),
    };
    usecase.execute(draft).await?;
    Ok(Redirect::to(INVENTORY_PATH).into_response())
}

/// Handler for `GET /inventory/update_item/{id}/` — form pre-filled from the
/// stored item.
pub async fn update_item_form(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Response, InventoryError> {
    let usecase = GetItemUseCase {
        repo: state.item_repo(),
    };
    let item = usecase.execute(id).await?;
    let context = ItemFormContext::new(ItemForm::from_item(&item), FieldErrors::default());
    Ok(Json(context).into_response())
}

/// Handler for `POST /inventory/update_item/{id}/`.
pub async fn update_item(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Form(form): Form<ItemForm>,
) -> Result<Response, InventoryError> {
    let draft = match form.validate() {
        Ok(draft) => draft,
        Err(errors) => {
            return Ok(Json(ItemFormContext::new(form, errors)).into_response());
        }
    };
    let usecase = UpdateItemUseCase {
        repo: state.item_repo(),
    };
    usecase.execute(id, draft).await?;
    Ok(Redirect::to(INVENTORY_PATH).into_response())
}

/// Handler for `GET /inventory/delete_item/{id}/` — confirmation context.
pub async fn delete_item_form(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Response, InventoryError> {
    let usecase = GetItemUseCase {
        repo: state.item_repo(),
    };
    let item = usecase.execute(id).await?;
    Ok(Json(serde_json::json!({ "item": ItemView::from(item) })).into_response())
}

/// Handler for `POST /inventory/delete_item/{id}/`.
pub async fn delete_item(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Response, InventoryError> {
    let usecase = DeleteItemUseCase {
        repo: state.item_repo(),
    };
    usecase.execute(id).await?;
    Ok(Redirect::to(INVENTORY_PATH).into_response())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_carry_detail_url_in_item_view() {
        let view = ItemView::from(Item {
            id: 7,
            name: "Milk".into(),
            category: Category::Dairy,
            cost: None,
            amount: 3,
        });
        assert_eq!(view.url, "/inventory/7/");
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["category"], "Dairy");
        assert_eq!(json["cost"], serde_json::Value::Null);
    }

    #[test]
    fn should_list_all_categories_in_form_context() {
        let context = ItemFormContext::new(ItemForm::default(), FieldErrors::default());
        let json = serde_json::to_value(&context).unwrap();
        assert_eq!(json["categories"].as_array().unwrap().len(), 6);
        assert_eq!(json["categories"][0], "Dairy");
    }
}

//! Route table.
//!
//! Mutating inventory workflows, the profile editor and the export sit behind
//! the employee guard; reads, registration and login stay public. The guard is
//! composed explicitly per sub-router rather than implied by the handlers.

use axum::Router;
use axum::middleware;
use axum::routing::get;

use stockroom_core::health::{healthz, readyz};
use stockroom_core::middleware::request_id_layer;

use crate::guard::employee_required;
use crate::handlers::{account, export, item, pages, profile};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let protected = Router::new()
        .route(
            "/inventory/add_item/",
            get(item::add_item_form).post(item::add_item),
        )
        .route(
            "/inventory/update_item/{id}/",
            get(item::update_item_form).post(item::update_item),
        )
        .route(
            "/inventory/delete_item/{id}/",
            get(item::delete_item_form).post(item::delete_item),
        )
        .route(
            "/user/update/{id}/",
            get(profile::update_profile_form).post(profile::update_profile),
        )
        .route(
            "/download-to-excel/",
            get(export::download_to_excel).post(export::download_to_excel),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            employee_required,
        ));

    Router::new()
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        .route("/", get(pages::index))
        .route("/inventory/", get(item::list_items))
        .route("/inventory/{id}/", get(item::get_item))
        .route(
            "/accounts/register/",
            get(account::register_form).post(account::register),
        )
        .route(
            "/accounts/login/",
            get(account::login_form).post(account::login),
        )
        .route("/accounts/logout/", get(account::logout).post(account::logout))
        .route("/user/{id}/", get(profile::user_page))
        .merge(protected)
        .layer(request_id_layer())
        .with_state(state)
}

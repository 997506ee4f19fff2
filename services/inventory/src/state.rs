use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::infra::db::{DbEmployeeRepository, DbIdentityRepository, DbItemRepository};

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<DatabaseConnection>,
    pub session_secret: String,
    pub cookie_domain: String,
}

impl AppState {
    pub fn item_repo(&self) -> DbItemRepository {
        DbItemRepository {
            db: self.db.clone(),
        }
    }

    pub fn employee_repo(&self) -> DbEmployeeRepository {
        DbEmployeeRepository {
            db: self.db.clone(),
        }
    }

    pub fn identity_repo(&self) -> DbIdentityRepository {
        DbIdentityRepository {
            db: self.db.clone(),
        }
    }
}

use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};

/// Login entry point unauthenticated callers are redirected to.
pub const LOGIN_PATH: &str = "/accounts/login/";

/// Inventory service domain error variants.
///
/// Validation failures are not errors: they re-render the form context with
/// per-field messages and a success status, so they never pass through here.
#[derive(Debug, thiserror::Error)]
pub enum InventoryError {
    #[error("item not found")]
    ItemNotFound,
    #[error("employee not found")]
    EmployeeNotFound,
    #[error("authentication required")]
    Unauthenticated,
    #[error("forbidden")]
    Forbidden,
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl InventoryError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ItemNotFound => "ITEM_NOT_FOUND",
            Self::EmployeeNotFound => "EMPLOYEE_NOT_FOUND",
            Self::Unauthenticated => "UNAUTHENTICATED",
            Self::Forbidden => "FORBIDDEN",
            Self::Internal(_) => "INTERNAL",
        }
    }
}

impl IntoResponse for InventoryError {
    fn into_response(self) -> Response {
        // Unauthenticated callers are sent to the login page to retry,
        // matching the form-flow contract rather than a bare 401.
        if let Self::Unauthenticated = self {
            return Redirect::to(LOGIN_PATH).into_response();
        }
        let status = match &self {
            Self::ItemNotFound | Self::EmployeeNotFound => StatusCode::NOT_FOUND,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::Unauthenticated => unreachable!(),
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if let Self::Internal(ref e) = self {
            tracing::error!(error = %e, kind = "INTERNAL", "internal error");
        }
        let body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use axum::response::IntoResponse;

    async fn assert_error(
        error: InventoryError,
        expected_status: StatusCode,
        expected_kind: &str,
        expected_message: &str,
    ) {
        let resp = error.into_response();
        assert_eq!(resp.status(), expected_status);
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["kind"], expected_kind);
        assert_eq!(json["message"], expected_message);
    }

    #[tokio::test]
    async fn should_return_item_not_found() {
        assert_error(
            InventoryError::ItemNotFound,
            StatusCode::NOT_FOUND,
            "ITEM_NOT_FOUND",
            "item not found",
        )
        .await;
    }

    #[tokio::test]
    async fn should_return_employee_not_found() {
        assert_error(
            InventoryError::EmployeeNotFound,
            StatusCode::NOT_FOUND,
            "EMPLOYEE_NOT_FOUND",
            "employee not found",
        )
        .await;
    }

    #[tokio::test]
    async fn should_return_forbidden() {
        assert_error(
            InventoryError::Forbidden,
            StatusCode::FORBIDDEN,
            "FORBIDDEN",
            "forbidden",
        )
        .await;
    }

    #[tokio::test]
    async fn should_return_internal() {
        assert_error(
            InventoryError::Internal(anyhow::anyhow!("db error")),
            StatusCode::INTERNAL_SERVER_ERROR,
            "INTERNAL",
            "internal error",
        )
        .await;
    }

    #[tokio::test]
    async fn should_redirect_unauthenticated_to_login() {
        let resp = InventoryError::Unauthenticated.into_response();
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(resp.headers()["location"], LOGIN_PATH);
    }
}

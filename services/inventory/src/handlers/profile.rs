//! Employee profile pages.

use axum::extract::{Path, State};
use axum::response::{IntoResponse, Redirect, Response};
use axum::{Extension, Form, Json};
use serde::Serialize;
use uuid::Uuid;

use stockroom_domain::employee::{Employee, profile_path};

use crate::error::InventoryError;
use crate::forms::{EmployeeForm, FieldErrors};
use crate::guard::CurrentUser;
use crate::state::AppState;
use crate::usecase::profile::{GetProfileUseCase, UpdateProfileUseCase};

#[derive(Debug, Serialize)]
pub struct EmployeeView {
    pub id: i64,
    pub name: String,
    pub position: String,
    pub url: Option<String>,
}

impl From<Employee> for EmployeeView {
    fn from(employee: Employee) -> Self {
        Self {
            url: employee.user_id.map(profile_path),
            id: employee.id,
            name: employee.name,
            position: employee.position,
        }
    }
}

#[derive(Debug, Serialize)]
struct ProfileFormContext {
    values: EmployeeForm,
    errors: FieldErrors,
}

/// Handler for `GET /user/{id}/` — public profile page.
pub async fn user_page(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Response, InventoryError> {
    let usecase = GetProfileUseCase {
        repo: state.employee_repo(),
    };
    let employee = usecase.execute(user_id).await?;
    Ok(Json(serde_json::json!({ "employee": EmployeeView::from(employee) })).into_response())
}

/// Handler for `GET /user/update/{id}/` — form pre-filled from the caller's
/// own profile. The path id must be the caller's; anyone else's is denied.
pub async fn update_profile_form(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
    Path(user_id): Path<Uuid>,
) -> Result<Response, InventoryError> {
    if user_id != current.user_id {
        return Err(InventoryError::Forbidden);
    }
    let usecase = GetProfileUseCase {
        repo: state.employee_repo(),
    };
    let employee = usecase.execute(user_id).await?;
    let context = ProfileFormContext {
        values: EmployeeForm {
            name: employee.name,
            position: employee.position,
        },
        errors: FieldErrors::default(),
    };
    Ok(Json(context).into_response())
}

/// Handler for `POST /user/update/{id}/`.
pub async fn update_profile(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
    Path(user_id): Path<Uuid>,
    Form(form): Form<EmployeeForm>,
) -> Result<Response, InventoryError> {
    if user_id != current.user_id {
        return Err(InventoryError::Forbidden);
    }
    let draft = match form.validate() {
        Ok(draft) => draft,
        Err(errors) => {
            return Ok(Json(ProfileFormContext {
                values: form,
                errors,
            })
            .into_response());
        }
    };
    let usecase = UpdateProfileUseCase {
        repo: state.employee_repo(),
    };
    usecase.execute(user_id, draft).await?;
    Ok(Redirect::to(&profile_path(user_id)).into_response())
}

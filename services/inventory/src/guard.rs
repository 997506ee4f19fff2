//! Authorization gate.
//!
//! An explicit middleware composed in front of each protected route via
//! [`axum::middleware::from_fn_with_state`]. Unauthenticated callers are
//! redirected to the login page; authenticated callers lacking every group in
//! the route's allow-list are denied with 403. The group check is enforced
//! for real — there is no permissive pass-through.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use axum_extra::extract::CookieJar;
use uuid::Uuid;

use stockroom_auth::cookie::STOCKROOM_SESSION;
use stockroom_auth::session::validate_session_token;
use stockroom_domain::group;

use crate::domain::repository::IdentityRepository;
use crate::error::InventoryError;
use crate::state::AppState;

/// Authenticated caller, inserted into request extensions by the guard.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub user_id: Uuid,
    pub username: String,
    pub groups: Vec<String>,
}

/// Resolve the session cookie into a [`CurrentUser`], then check the
/// allow-list. `Unauthenticated` when the cookie is missing, invalid, expired
/// or references a deleted identity; `Forbidden` when no held group is
/// allowed.
pub async fn authorize(
    state: &AppState,
    jar: &CookieJar,
    allowed: &[&str],
) -> Result<CurrentUser, InventoryError> {
    let token = jar
        .get(STOCKROOM_SESSION)
        .map(|c| c.value().to_owned())
        .ok_or(InventoryError::Unauthenticated)?;

    let info = validate_session_token(&token, &state.session_secret)
        .map_err(|_| InventoryError::Unauthenticated)?;

    let repo = state.identity_repo();
    let user = repo
        .find_by_id(info.user_id)
        .await?
        .ok_or(InventoryError::Unauthenticated)?;
    let groups = repo.groups_of(user.id).await?;

    if !group::any_allowed(&groups, allowed) {
        return Err(InventoryError::Forbidden);
    }

    Ok(CurrentUser {
        user_id: user.id,
        username: user.username,
        groups,
    })
}

/// Guard middleware for employee-only workflows. Apply with
/// `.route_layer(middleware::from_fn_with_state(state, employee_required))`.
pub async fn employee_required(
    State(state): State<AppState>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Result<Response, InventoryError> {
    let user = authorize(&state, &jar, &[group::EMPLOYEE]).await?;
    request.extensions_mut().insert(user);
    Ok(next.run(request).await)
}

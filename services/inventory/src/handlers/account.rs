//! Registration, login and logout workflows.

use axum::extract::State;
use axum::response::{IntoResponse, Redirect, Response};
use axum::{Form, Json};
use axum_extra::extract::CookieJar;
use serde::Serialize;

use stockroom_auth::cookie::{clear_session_cookie, set_session_cookie};

use crate::error::{InventoryError, LOGIN_PATH};
use crate::forms::{FieldErrors, LoginForm, RegisterForm};
use crate::state::AppState;
use crate::usecase::login::LoginUseCase;
use crate::usecase::register::{RegisterOutcome, RegisterUseCase};

const USERNAME_TAKEN: &str = "A user with that username already exists.";
const LOGIN_FAILED: &str = "Your username and password didn't match. Please try again.";

/// Registration form context. Passwords are never echoed back.
#[derive(Debug, Serialize)]
struct RegisterContext {
    values: RegisterValues,
    errors: FieldErrors,
}

#[derive(Debug, Default, Serialize)]
struct RegisterValues {
    username: String,
    email: String,
}

/// Login form context. The credential failure is a single form-level message,
/// never a field-level hint about which part was wrong.
#[derive(Debug, Serialize)]
struct LoginContext {
    values: LoginValues,
    errors: FieldErrors,
    error: Option<&'static str>,
}

#[derive(Debug, Default, Serialize)]
struct LoginValues {
    username: String,
}

/// Handler for `GET /accounts/register/` — blank form context.
pub async fn register_form() -> Json<impl Serialize> {
    Json(RegisterContext {
        values: RegisterValues::default(),
        errors: FieldErrors::default(),
    })
}

/// Handler for `POST /accounts/register/`.
///
/// Success creates the identity, its default group membership and an empty
/// employee profile, then redirects to the login page. The new user has no
/// session yet.
pub async fn register(
    State(state): State<AppState>,
    Form(form): Form<RegisterForm>,
) -> Result<Response, InventoryError> {
    let values = RegisterValues {
        username: form.username.clone(),
        email: form.email.clone(),
    };
    let draft = match form.validate() {
        Ok(draft) => draft,
        Err(errors) => {
            return Ok(Json(RegisterContext { values, errors }).into_response());
        }
    };

    let usecase = RegisterUseCase {
        repo: state.identity_repo(),
    };
    match usecase.execute(draft).await? {
        RegisterOutcome::Created => Ok(Redirect::to(LOGIN_PATH).into_response()),
        RegisterOutcome::UsernameTaken => {
            let mut errors = FieldErrors::default();
            errors.add("username", USERNAME_TAKEN);
            Ok(Json(RegisterContext { values, errors }).into_response())
        }
    }
}

/// Handler for `GET /accounts/login/` — blank form context.
pub async fn login_form() -> Json<impl Serialize> {
    Json(LoginContext {
        values: LoginValues::default(),
        errors: FieldErrors::default(),
        error: None,
    })
}

/// Handler for `POST /accounts/login/`.
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<LoginForm>,
) -> Result<Response, InventoryError> {
    let values = LoginValues {
        username: form.username.clone(),
    };
    let (username, password) = match form.validate() {
        Ok(credentials) => credentials,
        Err(errors) => {
            return Ok(Json(LoginContext {
                values,
                errors,
                error: None,
            })
            .into_response());
        }
    };

    let usecase = LoginUseCase {
        repo: state.identity_repo(),
        session_secret: state.session_secret.clone(),
    };
    match usecase.execute(&username, &password).await? {
        Some(token) => {
            let jar = set_session_cookie(jar, token, state.cookie_domain.clone());
            Ok((jar, Redirect::to("/")).into_response())
        }
        None => Ok(Json(LoginContext {
            values,
            errors: FieldErrors::default(),
            error: Some(LOGIN_FAILED),
        })
        .into_response()),
    }
}

/// Handler for `GET|POST /accounts/logout/`. Clears the session cookie;
/// idempotent for callers without one.
pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> Response {
    let jar = clear_session_cookie(jar, state.cookie_domain.clone());
    (jar, Json(serde_json::json!({ "page": "logged_out" }))).into_response()
}

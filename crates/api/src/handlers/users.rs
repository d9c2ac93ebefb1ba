//! Account registration pages.

use axum::extract::State;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;
use serde::Deserialize;

use crate::auth::registration::register;
use crate::error::{AppError, AppResult};
use crate::state::AppState;
use crate::views::auth::register_page;

#[derive(Debug, Deserialize)]
pub struct RegisterForm {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    // `confirm` is checked in the browser and ignored here.
}

/// GET /register
pub async fn register_form() -> Html<String> {
    Html(register_page(None, "", ""))
}

/// POST /users
///
/// On success redirects to `/` (the new user still has to log in). A
/// rejected submission re-renders the form with the message and the
/// username / email echoed back.
pub async fn create_user(
    State(state): State<AppState>,
    Form(form): Form<RegisterForm>,
) -> AppResult<Response> {
    let result = register(
        &state.pool,
        form.username.as_deref(),
        form.email.as_deref(),
        form.password.as_deref(),
    )
    .await;

    match result {
        Ok(_) => Ok(Redirect::to("/").into_response()),
        Err(e) => match e.user_message() {
            Some(message) => {
                tracing::info!(reason = %e, "Registration refused");
                let page = register_page(
                    Some(message),
                    form.username.as_deref().unwrap_or_default(),
                    form.email.as_deref().unwrap_or_default(),
                );
                Ok(Html(page).into_response())
            }
            None => Err(AppError::InternalError(e.to_string())),
        },
    }
}

//! Login and logout.

use agri_core::forms::present;
use axum::extract::State;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;
use serde::Deserialize;

use crate::auth::credentials::verify_credentials;
use crate::error::{AppError, AppResult};
use crate::session::Session;
use crate::state::AppState;
use crate::views::auth::{login_page, LOGIN_FAILED_MESSAGE};

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// POST /login
///
/// Success stores the user's name in the session and redirects to `/`.
/// Failure re-renders the login form; it never says which field was wrong.
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> AppResult<Response> {
    let email = present(form.email.as_deref());
    let password = form.password.as_deref().filter(|p| !p.is_empty());

    let user = match (email, password) {
        (Some(email), Some(password)) => verify_credentials(&state.pool, email, password)
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?,
        _ => None,
    };

    match user {
        Some(user) => {
            session.log_in(&user.name).await;
            tracing::info!(user_id = %user.id, "Login succeeded");
            Ok(Redirect::to("/").into_response())
        }
        None => {
            tracing::info!("Login failed");
            Ok(Html(login_page(Some(LOGIN_FAILED_MESSAGE))).into_response())
        }
    }
}

/// GET /logout
pub async fn logout(session: Session) -> Redirect {
    session.destroy().await;
    Redirect::to("/")
}

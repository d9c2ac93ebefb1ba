//! Email + password checks for the login form.

use agri_db::models::user::User;
use agri_db::repositories::UserRepo;
use agri_db::DbPool;

use super::password::{burn_verification, verify_password};

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// The stored hash could not be parsed or checked.
    #[error("Password verification failed: {0}")]
    Hash(String),
}

/// Return the user owning `email` if `password` matches their stored hash.
///
/// An unknown email still pays for one Argon2 verification.
pub async fn verify_credentials(
    pool: &DbPool,
    email: &str,
    password: &str,
) -> Result<Option<User>, AuthError> {
    let Some(user) = UserRepo::find_by_email(pool, email.trim()).await else {
        burn_verification(password);
        return Ok(None);
    };

    let matches = verify_password(password, &user.password_hash)
        .map_err(|e| AuthError::Hash(e.to_string()))?;

    Ok(matches.then_some(user))
}

/// `true` iff a user with `email` exists and `password` matches.
pub async fn authenticate(pool: &DbPool, email: &str, password: &str) -> Result<bool, AuthError> {
    Ok(verify_credentials(pool, email, password).await?.is_some())
}

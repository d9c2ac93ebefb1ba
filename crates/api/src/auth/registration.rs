//! New-account registration.

use agri_core::email::is_valid_email;
use agri_core::forms::present;
use agri_db::models::user::{CreateUser, User};
use agri_db::repositories::UserRepo;
use agri_db::{DbError, DbPool};

use super::password::hash_password;

/// Why a registration was refused.
#[derive(Debug, thiserror::Error)]
pub enum RegistrationError {
    #[error("Username, email and password are all required")]
    MissingFields,

    #[error("Email address is malformed")]
    InvalidEmail,

    #[error("Email address is already registered")]
    EmailTaken,

    #[error("Password hashing failed: {0}")]
    Hashing(String),

    #[error(transparent)]
    Storage(DbError),
}

impl RegistrationError {
    /// Message shown under the registration form.
    ///
    /// `None` for failures the user cannot fix; those become a 500.
    pub fn user_message(&self) -> Option<&'static str> {
        match self {
            Self::MissingFields => Some("Veuillez remplir tous les champs."),
            Self::InvalidEmail => Some("Format d'email invalide"),
            Self::EmailTaken => Some("Email déjà utilisé"),
            Self::Hashing(_) | Self::Storage(_) => None,
        }
    }
}

/// Create an account.
///
/// Name and email are stored trimmed; the password is hashed as submitted.
/// The email uniqueness check is repeated under the table lock at insert,
/// so two concurrent registrations of one address cannot both succeed.
pub async fn register(
    pool: &DbPool,
    name: Option<&str>,
    email: Option<&str>,
    password: Option<&str>,
) -> Result<User, RegistrationError> {
    let password = password.filter(|p| present(Some(*p)).is_some());
    let (Some(name), Some(email), Some(password)) = (present(name), present(email), password)
    else {
        return Err(RegistrationError::MissingFields);
    };

    if !is_valid_email(email) {
        return Err(RegistrationError::InvalidEmail);
    }
    if UserRepo::find_by_email(pool, email).await.is_some() {
        return Err(RegistrationError::EmailTaken);
    }

    let password_hash =
        hash_password(password).map_err(|e| RegistrationError::Hashing(e.to_string()))?;

    let input = CreateUser {
        name: name.to_string(),
        email: email.to_string(),
        password_hash,
    };
    let user = UserRepo::create(pool, &input).await.map_err(|e| match e {
        DbError::UniqueViolation { .. } => RegistrationError::EmailTaken,
        other => RegistrationError::Storage(other),
    })?;

    tracing::info!(user_id = %user.id, "User registered");
    Ok(user)
}

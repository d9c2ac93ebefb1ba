//! Account management: password hashing, registration, and login checks.

pub mod credentials;
pub mod password;
pub mod registration;

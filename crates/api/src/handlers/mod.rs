//! Request handlers.
//!
//! Each submodule serves one page family. Record handlers delegate to the
//! matching repository in `agri_db`; form outcomes travel back to the
//! landing page as a session flash.

pub mod auth;
pub mod crops;
pub mod equipment;
pub mod finance;
pub mod home;
pub mod livestock;
pub mod users;
pub mod weather;

/// Shown when an add-form arrives with a blank required field.
pub const MISSING_FIELDS_MESSAGE: &str = "Veuillez remplir tous les champs.";

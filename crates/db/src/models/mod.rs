//! Entity models and their create / update DTOs.

pub mod animal;
pub mod crop;
pub mod equipment;
pub mod finance;
pub mod user;

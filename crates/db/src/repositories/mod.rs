//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&DbPool` as the first argument.

pub mod crop_repo;
pub mod equipment_repo;
pub mod finance_repo;
pub mod livestock_repo;
pub mod user_repo;

pub use crop_repo::CropRepo;
pub use equipment_repo::EquipmentRepo;
pub use finance_repo::FinanceRepo;
pub use livestock_repo::LivestockRepo;
pub use user_repo::UserRepo;

/// Case-insensitive substring match used by the `find_by_*` searches.
pub(crate) fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::contains_ci;

    #[test]
    fn contains_ci_ignores_case() {
        assert!(contains_ci("Blé tendre", "BLÉ"));
        assert!(contains_ci("Tracteur", "act"));
        assert!(contains_ci("anything", ""));
        assert!(!contains_ci("Orge", "blé"));
    }
}

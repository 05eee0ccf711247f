//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument.

pub mod catalog_repo;
pub mod deposit_repo;
pub mod savings_repo;

pub use catalog_repo::{PackagePeriodRepo, PeriodRepo, SettingsRepo};
pub use deposit_repo::DepositRepo;
pub use savings_repo::SavingsAccountRepo;

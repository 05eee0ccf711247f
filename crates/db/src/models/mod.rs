//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A create DTO for inserts
//! - `Deserialize` request body DTOs for the endpoints that operate on
//!   the entity

pub mod catalog;
pub mod deposit;
pub mod savings;
pub mod status;

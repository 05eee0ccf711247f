//! Request handlers, grouped by resource.

pub mod deposits;
pub mod savings;

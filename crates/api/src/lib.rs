//! HTTP service for the qurban savings core.
//!
//! Exposed as a library so integration tests can build the exact router
//! and middleware stack the binary runs.

pub mod config;
pub mod error;
pub mod handlers;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;

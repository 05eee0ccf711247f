//! Route definitions for the deposit verification workflow.
//!
//! Mounted at `/deposits`.
//!
//! ```text
//! GET  /pending             list_pending_deposits
//! POST /{id}/verify         verify_deposit
//! POST /{id}/reject         reject_deposit
//! POST /verify-bulk         verify_deposits_bulk
//! ```

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::deposits;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/pending", get(deposits::list_pending_deposits))
        .route("/{id}/verify", post(deposits::verify_deposit))
        .route("/{id}/reject", post(deposits::reject_deposit))
        .route("/verify-bulk", post(deposits::verify_deposits_bulk))
}

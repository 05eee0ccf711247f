//! Route definitions for savings accounts.
//!
//! Mounted at `/savings`.
//!
//! ```text
//! GET  /                    list_savings_accounts
//! POST /                    create_savings_account
//! GET  /{id}                get_savings_account
//! GET  /{id}/deposits       list_deposits
//! POST /{id}/deposits       record_deposit
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::{deposits, savings};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(savings::list_savings_accounts).post(savings::create_savings_account),
        )
        .route("/{id}", get(savings::get_savings_account))
        .route(
            "/{id}/deposits",
            get(deposits::list_deposits).post(deposits::record_deposit),
        )
}

pub mod deposits;
pub mod health;
pub mod savings;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /savings                        list, create
/// /savings/{id}                   get
/// /savings/{id}/deposits          list, record (lands in pending)
///
/// /deposits/pending               verification queue (oldest first)
/// /deposits/{id}/verify           verify one (POST)
/// /deposits/{id}/reject           reject one with reason (POST)
/// /deposits/verify-bulk           best-effort batch verify (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Savings accounts and their deposit history.
        .nest("/savings", savings::router())
        // Verification workflow over pending deposits.
        .nest("/deposits", deposits::router())
}

//! Handlers for deposit recording and the verification workflow.
//!
//! Verification is the only operation that moves a savings balance. The
//! atomic check-and-set lives in the repository; these handlers translate
//! its outcomes into HTTP results, and the bulk path applies the
//! single-item operation per id so one lost race never blocks the rest of
//! the batch.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use qurban_core::error::CoreError;
use qurban_core::types::DbId;
use qurban_db::models::deposit::{
    BulkVerifyRequest, CreateDeposit, DepositTransaction, RecordDepositRequest, RejectOutcome,
    RejectRequest, VerifyOutcome, VerifyRequest,
};
use qurban_db::models::savings::SavingsAccount;
use qurban_db::models::status::SavingsStatus;
use qurban_db::repositories::{DepositRepo, SavingsAccountRepo};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Response payload for a successful verification: the finalized deposit
/// plus the account with its updated balance.
#[derive(Debug, Serialize)]
pub struct VerifiedDeposit {
    pub deposit: DepositTransaction,
    pub account: SavingsAccount,
}

/// Per-item outcome in a bulk verification response.
#[derive(Debug, Serialize)]
pub struct BulkVerifyItem {
    pub deposit_id: DbId,
    /// `verified`, `already_finalized`, `not_found`, or `error`.
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Response payload for bulk verification.
#[derive(Debug, Serialize)]
pub struct BulkVerifyResponse {
    pub results: Vec<BulkVerifyItem>,
    pub verified_count: usize,
}

/// POST /api/v1/savings/{id}/deposits
///
/// Record a deposit against a savings account. The deposit lands in
/// pending status and counts toward the balance only once verified.
pub async fn record_deposit(
    State(state): State<AppState>,
    Path(savings_id): Path<DbId>,
    Json(input): Json<RecordDepositRequest>,
) -> AppResult<impl IntoResponse> {
    if input.amount <= 0 {
        return Err(CoreError::Validation(format!(
            "Deposit amount must be positive, got {}",
            input.amount
        ))
        .into());
    }

    let account = SavingsAccountRepo::find_by_id(&state.pool, savings_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "SavingsAccount",
            id: savings_id,
        }))?;

    // Only active accounts take deposits: a completed account would blow
    // past its target, and a cancelled one is closed.
    if account.status_id != SavingsStatus::Active.id() {
        return Err(CoreError::Validation(format!(
            "Savings account {} is not active and no longer accepts deposits",
            account.savings_number
        ))
        .into());
    }

    let create = CreateDeposit {
        savings_id,
        amount: input.amount,
        transaction_date: input.transaction_date,
        payment_method: input.payment_method,
        payment_channel: input.payment_channel,
        payment_proof_url: input.payment_proof_url,
        notes: input.notes,
    };

    let deposit = DepositRepo::record(&state.pool, &create).await?;

    tracing::info!(
        deposit_id = deposit.id,
        savings_id = savings_id,
        amount = deposit.amount,
        transaction_number = %deposit.transaction_number,
        "Deposit recorded, awaiting verification"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: deposit })))
}

/// GET /api/v1/savings/{id}/deposits
///
/// All deposits on an account, newest first.
pub async fn list_deposits(
    State(state): State<AppState>,
    Path(savings_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    SavingsAccountRepo::find_by_id(&state.pool, savings_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "SavingsAccount",
            id: savings_id,
        }))?;

    let deposits = DepositRepo::list_for_savings(&state.pool, savings_id).await?;
    Ok(Json(DataResponse { data: deposits }))
}

/// GET /api/v1/deposits/pending
///
/// The verification queue: pending deposits across all accounts, oldest
/// first. Consumers poll this; a stale list is harmless because the
/// verify/reject operations re-check status atomically.
pub async fn list_pending_deposits(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let pending = DepositRepo::list_pending(&state.pool).await?;
    Ok(Json(DataResponse { data: pending }))
}

/// POST /api/v1/deposits/{id}/verify
///
/// Verify a pending deposit, crediting its account. Returns 409 when
/// another actor already finalized the deposit.
pub async fn verify_deposit(
    State(state): State<AppState>,
    Path(deposit_id): Path<DbId>,
    Json(input): Json<VerifyRequest>,
) -> AppResult<impl IntoResponse> {
    match DepositRepo::mark_verified(&state.pool, deposit_id, input.actor_id).await? {
        VerifyOutcome::Verified { deposit, account } => {
            tracing::info!(
                deposit_id = deposit.id,
                savings_id = account.id,
                amount = deposit.amount,
                current_amount = account.current_amount,
                verified_by = input.actor_id,
                "Deposit verified"
            );
            Ok(Json(DataResponse {
                data: VerifiedDeposit { deposit, account },
            }))
        }
        VerifyOutcome::AlreadyFinalized => {
            Err(CoreError::AlreadyFinalized { id: deposit_id }.into())
        }
        VerifyOutcome::NotFound => Err(CoreError::NotFound {
            entity: "DepositTransaction",
            id: deposit_id,
        }
        .into()),
    }
}

/// POST /api/v1/deposits/{id}/reject
///
/// Reject a pending deposit with a mandatory reason. Never touches the
/// account balance.
pub async fn reject_deposit(
    State(state): State<AppState>,
    Path(deposit_id): Path<DbId>,
    Json(input): Json<RejectRequest>,
) -> AppResult<impl IntoResponse> {
    let reason = input.reason.trim();
    if reason.is_empty() {
        return Err(CoreError::Validation("Rejection reason is required".to_string()).into());
    }

    match DepositRepo::mark_rejected(&state.pool, deposit_id, input.actor_id, reason).await? {
        RejectOutcome::Rejected(deposit) => {
            tracing::info!(
                deposit_id = deposit.id,
                savings_id = deposit.savings_id,
                rejected_by = input.actor_id,
                reason = %reason,
                "Deposit rejected"
            );
            Ok(Json(DataResponse { data: deposit }))
        }
        RejectOutcome::AlreadyFinalized => {
            Err(CoreError::AlreadyFinalized { id: deposit_id }.into())
        }
        RejectOutcome::NotFound => Err(CoreError::NotFound {
            entity: "DepositTransaction",
            id: deposit_id,
        }
        .into()),
    }
}

/// POST /api/v1/deposits/verify-bulk
///
/// Verify a batch of deposits, best-effort. Items are independent: each
/// deposit gets its own atomic transaction, and a deposit another actor
/// finalized moments earlier is reported in its item result without
/// aborting the rest.
pub async fn verify_deposits_bulk(
    State(state): State<AppState>,
    Json(input): Json<BulkVerifyRequest>,
) -> AppResult<impl IntoResponse> {
    if input.deposit_ids.is_empty() {
        return Err(CoreError::Validation("deposit_ids must not be empty".to_string()).into());
    }

    let mut results = Vec::with_capacity(input.deposit_ids.len());
    let mut verified_count = 0;

    for &deposit_id in &input.deposit_ids {
        let item = match DepositRepo::mark_verified(&state.pool, deposit_id, input.actor_id).await {
            Ok(VerifyOutcome::Verified { .. }) => {
                verified_count += 1;
                BulkVerifyItem {
                    deposit_id,
                    status: "verified",
                    error: None,
                }
            }
            Ok(VerifyOutcome::AlreadyFinalized) => BulkVerifyItem {
                deposit_id,
                status: "already_finalized",
                error: Some(format!(
                    "Deposit {deposit_id} was already verified or rejected"
                )),
            },
            Ok(VerifyOutcome::NotFound) => BulkVerifyItem {
                deposit_id,
                status: "not_found",
                error: Some(format!("DepositTransaction with id {deposit_id} not found")),
            },
            Err(err) => {
                tracing::error!(deposit_id, error = %err, "Bulk verification item failed");
                BulkVerifyItem {
                    deposit_id,
                    status: "error",
                    error: Some("An internal error occurred".to_string()),
                }
            }
        };
        results.push(item);
    }

    tracing::info!(
        requested = input.deposit_ids.len(),
        verified_count,
        actor_id = input.actor_id,
        "Bulk verification finished"
    );

    Ok(Json(DataResponse {
        data: BulkVerifyResponse {
            results,
            verified_count,
        },
    }))
}

//! Deposit transaction models and DTOs.

use qurban_core::types::{Amount, DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::savings::SavingsAccount;
use super::status::StatusId;

/// A row from the `deposit_transactions` table.
///
/// Status is monotonic: a deposit is created pending and moves exactly once
/// to verified or rejected. In a terminal state, either
/// `verified_at`/`verified_by` or `rejected_by`/`rejection_reason` is
/// populated, never both.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DepositTransaction {
    pub id: DbId,
    pub savings_id: DbId,
    pub transaction_number: String,
    pub amount: Amount,
    pub transaction_type: String,
    pub transaction_date: Timestamp,
    pub payment_method: Option<String>,
    pub payment_channel: Option<String>,
    /// Opaque reference to the uploaded payment proof. Storage and
    /// interpretation of the file are external to this service.
    pub payment_proof_url: Option<String>,
    pub status_id: StatusId,
    pub notes: Option<String>,
    pub verified_at: Option<Timestamp>,
    pub verified_by: Option<DbId>,
    pub rejected_by: Option<DbId>,
    pub rejection_reason: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for inserting a new deposit. Always lands in pending status.
#[derive(Debug, Clone)]
pub struct CreateDeposit {
    pub savings_id: DbId,
    pub amount: Amount,
    /// Defaults to now when `None`.
    pub transaction_date: Option<Timestamp>,
    pub payment_method: Option<String>,
    pub payment_channel: Option<String>,
    pub payment_proof_url: Option<String>,
    pub notes: Option<String>,
}

/// Request body for recording a deposit against a savings account.
#[derive(Debug, Clone, Deserialize)]
pub struct RecordDepositRequest {
    pub amount: Amount,
    pub transaction_date: Option<Timestamp>,
    pub payment_method: Option<String>,
    pub payment_channel: Option<String>,
    pub payment_proof_url: Option<String>,
    pub notes: Option<String>,
}

/// Request body for the verify endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct VerifyRequest {
    pub actor_id: DbId,
}

/// Request body for the reject endpoint. The reason is mandatory.
#[derive(Debug, Clone, Deserialize)]
pub struct RejectRequest {
    pub actor_id: DbId,
    pub reason: String,
}

/// Request body for bulk verification.
#[derive(Debug, Clone, Deserialize)]
pub struct BulkVerifyRequest {
    pub deposit_ids: Vec<DbId>,
    pub actor_id: DbId,
}

/// A pending-queue item: a deposit joined with its account summary so staff
/// can verify without a second lookup.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PendingDepositItem {
    pub id: DbId,
    pub savings_id: DbId,
    pub transaction_number: String,
    pub amount: Amount,
    pub transaction_date: Timestamp,
    pub payment_method: Option<String>,
    pub payment_channel: Option<String>,
    pub payment_proof_url: Option<String>,
    pub notes: Option<String>,
    pub created_at: Timestamp,
    pub savings_number: String,
    pub donor_name: String,
    pub donor_phone: String,
    pub current_amount: Amount,
    pub target_amount: Amount,
    pub period_name: String,
}

/// Outcome of an attempt to verify a deposit.
///
/// `AlreadyFinalized` and `NotFound` are data, not errors, at this layer:
/// the bulk path records them per item and keeps going, while the
/// single-item handlers translate them into HTTP 409/404.
#[derive(Debug)]
pub enum VerifyOutcome {
    /// The deposit was flipped to verified and the account balance
    /// incremented in the same transaction.
    Verified {
        deposit: DepositTransaction,
        account: SavingsAccount,
    },
    /// Another actor finalized this deposit first.
    AlreadyFinalized,
    NotFound,
}

/// Outcome of an attempt to reject a deposit.
#[derive(Debug)]
pub enum RejectOutcome {
    Rejected(DepositTransaction),
    /// Another actor finalized this deposit first.
    AlreadyFinalized,
    NotFound,
}

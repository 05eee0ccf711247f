//! Repository for the `deposit_transactions` table.
//!
//! Verification and rejection are conditional updates scoped to pending
//! status, so two staff members racing on the same deposit can never both
//! succeed, and a deposit's amount can never be counted into a balance
//! twice. The balance increment happens in the same database transaction
//! as the status flip.

use qurban_core::types::DbId;
use sqlx::PgPool;

use crate::models::deposit::{
    CreateDeposit, DepositTransaction, PendingDepositItem, RejectOutcome, VerifyOutcome,
};
use crate::models::savings::SavingsAccount;
use crate::models::status::{DepositStatus, SavingsStatus};
use crate::repositories::savings_repo;

/// Column list for `deposit_transactions` queries.
const COLUMNS: &str = "\
    id, savings_id, transaction_number, amount, transaction_type, \
    transaction_date, payment_method, payment_channel, payment_proof_url, \
    status_id, notes, verified_at, verified_by, rejected_by, \
    rejection_reason, created_at, updated_at";

/// Provides operations for deposit transactions and their verification
/// state machine.
pub struct DepositRepo;

impl DepositRepo {
    /// Insert a new deposit in pending status, returning the created row.
    /// The transaction number is generated by the database (`DEP-NNNNNN`).
    pub async fn record(
        pool: &PgPool,
        input: &CreateDeposit,
    ) -> Result<DepositTransaction, sqlx::Error> {
        let query = format!(
            "INSERT INTO deposit_transactions \
                (savings_id, amount, transaction_date, payment_method, \
                 payment_channel, payment_proof_url, notes, status_id) \
             VALUES ($1, $2, COALESCE($3, NOW()), $4, $5, $6, $7, $8) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, DepositTransaction>(&query)
            .bind(input.savings_id)
            .bind(input.amount)
            .bind(input.transaction_date)
            .bind(&input.payment_method)
            .bind(&input.payment_channel)
            .bind(&input.payment_proof_url)
            .bind(&input.notes)
            .bind(DepositStatus::Pending.id())
            .fetch_one(pool)
            .await
    }

    /// Find a deposit by its ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<DepositTransaction>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM deposit_transactions WHERE id = $1");
        sqlx::query_as::<_, DepositTransaction>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all deposits on a savings account, newest first.
    pub async fn list_for_savings(
        pool: &PgPool,
        savings_id: DbId,
    ) -> Result<Vec<DepositTransaction>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM deposit_transactions \
             WHERE savings_id = $1 \
             ORDER BY transaction_date DESC, id DESC"
        );
        sqlx::query_as::<_, DepositTransaction>(&query)
            .bind(savings_id)
            .fetch_all(pool)
            .await
    }

    /// The pending verification queue across all accounts, oldest first so
    /// overdue deposits surface at the top. Each item carries the account
    /// summary staff need to verify without a second lookup.
    pub async fn list_pending(pool: &PgPool) -> Result<Vec<PendingDepositItem>, sqlx::Error> {
        sqlx::query_as::<_, PendingDepositItem>(
            "SELECT
                d.id, d.savings_id, d.transaction_number, d.amount,
                d.transaction_date, d.payment_method, d.payment_channel,
                d.payment_proof_url, d.notes, d.created_at,
                s.savings_number, s.donor_name, s.donor_phone,
                s.current_amount, s.target_amount,
                p.name AS period_name
             FROM deposit_transactions d
             JOIN savings_accounts s ON s.id = d.savings_id
             JOIN periods p ON p.id = s.period_id
             WHERE d.status_id = $1
             ORDER BY d.transaction_date ASC, d.id ASC",
        )
        .bind(DepositStatus::Pending.id())
        .fetch_all(pool)
        .await
    }

    /// Atomically verify a pending deposit and credit its account.
    ///
    /// The status flip is a conditional update scoped to pending status;
    /// zero affected rows means another actor finalized the deposit first
    /// (or the id is unknown), and nothing is written. On success the
    /// owning account's balance is incremented in the same transaction,
    /// and the account completes when the balance reaches its target.
    pub async fn mark_verified(
        pool: &PgPool,
        deposit_id: DbId,
        verified_by: DbId,
    ) -> Result<VerifyOutcome, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "UPDATE deposit_transactions \
             SET status_id = $2, verified_at = NOW(), verified_by = $3 \
             WHERE id = $1 AND status_id = $4 \
             RETURNING {COLUMNS}"
        );
        let deposit = sqlx::query_as::<_, DepositTransaction>(&query)
            .bind(deposit_id)
            .bind(DepositStatus::Verified.id())
            .bind(verified_by)
            .bind(DepositStatus::Pending.id())
            .fetch_optional(&mut *tx)
            .await?;

        let Some(deposit) = deposit else {
            tx.rollback().await?;
            return Self::diagnose_finalized(pool, deposit_id).await;
        };

        let account_query = format!(
            "UPDATE savings_accounts \
             SET current_amount = current_amount + $2, \
                 status_id = CASE \
                     WHEN status_id = $3 AND current_amount + $2 >= target_amount THEN $4 \
                     ELSE status_id \
                 END \
             WHERE id = $1 \
             RETURNING {}",
            savings_repo::COLUMNS
        );
        let account = sqlx::query_as::<_, SavingsAccount>(&account_query)
            .bind(deposit.savings_id)
            .bind(deposit.amount)
            .bind(SavingsStatus::Active.id())
            .bind(SavingsStatus::Completed.id())
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(VerifyOutcome::Verified { deposit, account })
    }

    /// Atomically reject a pending deposit with a reason. Never touches
    /// the account balance.
    pub async fn mark_rejected(
        pool: &PgPool,
        deposit_id: DbId,
        rejected_by: DbId,
        reason: &str,
    ) -> Result<RejectOutcome, sqlx::Error> {
        let query = format!(
            "UPDATE deposit_transactions \
             SET status_id = $2, rejected_by = $3, rejection_reason = $4 \
             WHERE id = $1 AND status_id = $5 \
             RETURNING {COLUMNS}"
        );
        let deposit = sqlx::query_as::<_, DepositTransaction>(&query)
            .bind(deposit_id)
            .bind(DepositStatus::Rejected.id())
            .bind(rejected_by)
            .bind(reason)
            .bind(DepositStatus::Pending.id())
            .fetch_optional(pool)
            .await?;

        match deposit {
            Some(deposit) => Ok(RejectOutcome::Rejected(deposit)),
            None => match Self::diagnose_finalized(pool, deposit_id).await? {
                VerifyOutcome::NotFound => Ok(RejectOutcome::NotFound),
                _ => Ok(RejectOutcome::AlreadyFinalized),
            },
        }
    }

    /// Sum of verified deposit amounts on an account. Reconciliation
    /// helper: must always equal the account's `current_amount`.
    pub async fn sum_verified(pool: &PgPool, savings_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COALESCE(SUM(amount), 0)::BIGINT \
             FROM deposit_transactions \
             WHERE savings_id = $1 AND status_id = $2",
        )
        .bind(savings_id)
        .bind(DepositStatus::Verified.id())
        .fetch_one(pool)
        .await
    }

    /// Distinguish a missing deposit from one already in a terminal state
    /// after a conditional update affected zero rows. Terminal states are
    /// monotonic, so this read cannot race back to pending.
    async fn diagnose_finalized(
        pool: &PgPool,
        deposit_id: DbId,
    ) -> Result<VerifyOutcome, sqlx::Error> {
        let status: Option<(i16,)> =
            sqlx::query_as("SELECT status_id FROM deposit_transactions WHERE id = $1")
                .bind(deposit_id)
                .fetch_optional(pool)
                .await?;

        Ok(match status {
            Some(_) => VerifyOutcome::AlreadyFinalized,
            None => VerifyOutcome::NotFound,
        })
    }
}

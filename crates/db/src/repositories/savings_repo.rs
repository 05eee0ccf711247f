//! Repository for the `savings_accounts` table.

use qurban_core::types::DbId;
use sqlx::PgPool;

use crate::models::savings::{CreateSavingsAccount, SavingsAccount, SavingsListQuery};

/// Column list for `savings_accounts` queries. Shared with the deposit
/// repository, which returns the updated account from the verification
/// transaction.
pub(crate) const COLUMNS: &str = "\
    id, savings_number, donor_name, donor_phone, period_id, package_period_id, \
    target_amount, current_amount, installment_frequency, installment_count, \
    installment_amount, installment_day, start_date, status_id, \
    created_at, updated_at";

/// Maximum page size for account listing.
const MAX_LIMIT: i64 = 100;

/// Default page size for account listing.
const DEFAULT_LIMIT: i64 = 50;

/// Provides CRUD operations for savings accounts.
pub struct SavingsAccountRepo;

impl SavingsAccountRepo {
    /// Insert a new savings account, returning the created row. The
    /// savings number is generated by the database (`SAV-NNNNNN`) and the
    /// balance starts at zero in active status.
    pub async fn create(
        pool: &PgPool,
        input: &CreateSavingsAccount,
    ) -> Result<SavingsAccount, sqlx::Error> {
        let query = format!(
            "INSERT INTO savings_accounts \
                (donor_name, donor_phone, period_id, package_period_id, \
                 target_amount, installment_frequency, installment_count, \
                 installment_amount, installment_day, start_date) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SavingsAccount>(&query)
            .bind(&input.donor_name)
            .bind(&input.donor_phone)
            .bind(input.period_id)
            .bind(input.package_period_id)
            .bind(input.target_amount)
            .bind(&input.installment_frequency)
            .bind(input.installment_count)
            .bind(input.installment_amount)
            .bind(input.installment_day)
            .bind(input.start_date)
            .fetch_one(pool)
            .await
    }

    /// Find a savings account by its ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<SavingsAccount>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM savings_accounts WHERE id = $1");
        sqlx::query_as::<_, SavingsAccount>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a savings account by its human-facing number.
    pub async fn find_by_number(
        pool: &PgPool,
        savings_number: &str,
    ) -> Result<Option<SavingsAccount>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM savings_accounts WHERE savings_number = $1");
        sqlx::query_as::<_, SavingsAccount>(&query)
            .bind(savings_number)
            .fetch_optional(pool)
            .await
    }

    /// List savings accounts, newest first, with optional status filter
    /// and pagination.
    pub async fn list(
        pool: &PgPool,
        params: &SavingsListQuery,
    ) -> Result<Vec<SavingsAccount>, sqlx::Error> {
        let limit = params.limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT);
        let offset = params.offset.unwrap_or(0);

        match params.status_id {
            Some(status_id) => {
                let query = format!(
                    "SELECT {COLUMNS} FROM savings_accounts \
                     WHERE status_id = $1 \
                     ORDER BY created_at DESC \
                     LIMIT $2 OFFSET $3"
                );
                sqlx::query_as::<_, SavingsAccount>(&query)
                    .bind(status_id)
                    .bind(limit)
                    .bind(offset)
                    .fetch_all(pool)
                    .await
            }
            None => {
                let query = format!(
                    "SELECT {COLUMNS} FROM savings_accounts \
                     ORDER BY created_at DESC \
                     LIMIT $1 OFFSET $2"
                );
                sqlx::query_as::<_, SavingsAccount>(&query)
                    .bind(limit)
                    .bind(offset)
                    .fetch_all(pool)
                    .await
            }
        }
    }
}

//! Savings account models and DTOs.

use chrono::NaiveDate;
use qurban_core::types::{Amount, DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::status::StatusId;

/// A row from the `savings_accounts` table.
///
/// `target_amount`, `installment_amount`, and the schedule fields are frozen
/// at creation. `current_amount` is mutated only by deposit verification and
/// always equals the sum of verified deposit amounts on the account.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SavingsAccount {
    pub id: DbId,
    pub savings_number: String,
    pub donor_name: String,
    pub donor_phone: String,
    pub period_id: DbId,
    pub package_period_id: DbId,
    pub target_amount: Amount,
    pub current_amount: Amount,
    pub installment_frequency: String,
    pub installment_count: i32,
    pub installment_amount: Amount,
    pub installment_day: i16,
    pub start_date: NaiveDate,
    pub status_id: StatusId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for inserting a new savings account. Amounts are the output of the
/// installment planner, already validated.
#[derive(Debug, Clone)]
pub struct CreateSavingsAccount {
    pub donor_name: String,
    pub donor_phone: String,
    pub period_id: DbId,
    pub package_period_id: DbId,
    pub target_amount: Amount,
    pub installment_frequency: String,
    pub installment_count: i32,
    pub installment_amount: Amount,
    pub installment_day: i16,
    pub start_date: NaiveDate,
}

/// Request body for the create-savings-account endpoint. Amounts are not
/// accepted from the caller; they are derived from the package period price
/// and the fee settings.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSavingsAccountRequest {
    pub donor_name: String,
    pub donor_phone: String,
    pub period_id: DbId,
    pub package_period_id: DbId,
    pub installment_frequency: String,
    pub installment_count: i32,
    pub installment_day: i16,
    /// Defaults to today when omitted.
    pub start_date: Option<NaiveDate>,
}

/// Query parameters for listing savings accounts.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SavingsListQuery {
    pub status_id: Option<StatusId>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

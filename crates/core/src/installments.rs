//! Installment planning for savings accounts.
//!
//! Derives the savings target and per-installment amount from a package
//! period's price and the unit fee, and validates the deposit schedule.
//! Planning is pure; once an account is persisted its amounts are frozen.

use crate::error::CoreError;
use crate::types::Amount;

/// Deposits are due on a fixed weekday (1-7).
pub const FREQUENCY_WEEKLY: &str = "weekly";

/// Deposits are due on a fixed day of month (1-28).
pub const FREQUENCY_MONTHLY: &str = "monthly";

/// All valid installment frequencies.
pub const VALID_FREQUENCIES: &[&str] = &[FREQUENCY_WEEKLY, FREQUENCY_MONTHLY];

/// The only installment counts donors may choose.
pub const ALLOWED_INSTALLMENT_COUNTS: &[i32] = &[3, 6, 12, 24];

/// Highest schedulable weekday (Monday = 1).
pub const MAX_WEEKLY_DAY: i16 = 7;

/// Highest schedulable day of month. Days 29-31 are disallowed so every
/// month can carry an installment.
pub const MAX_MONTHLY_DAY: i16 = 28;

/// The computed savings target and per-installment amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstallmentPlan {
    /// Package price plus unit fee.
    pub target_amount: Amount,
    /// `ceil(target_amount / installment_count)`. Ceiling rounding means
    /// `count` full installments always reach the target; the donor's last
    /// payment may overshoot it slightly, which is accepted.
    pub installment_amount: Amount,
}

/// Compute the savings plan for a package at a given price.
pub fn plan(
    package_price: Amount,
    unit_fee: Amount,
    installment_count: i32,
) -> Result<InstallmentPlan, CoreError> {
    if package_price <= 0 {
        return Err(CoreError::Validation(format!(
            "Package price must be positive, got {package_price}"
        )));
    }
    if unit_fee < 0 {
        return Err(CoreError::Validation(format!(
            "Unit fee must not be negative, got {unit_fee}"
        )));
    }
    validate_installment_count(installment_count)?;

    let target_amount = package_price + unit_fee;
    let installment_amount = target_amount.div_ceil(installment_count as Amount);

    Ok(InstallmentPlan {
        target_amount,
        installment_amount,
    })
}

/// Validate that the chosen number of installments is offered.
pub fn validate_installment_count(count: i32) -> Result<(), CoreError> {
    if ALLOWED_INSTALLMENT_COUNTS.contains(&count) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid installment count {count}. Must be one of: {}",
            ALLOWED_INSTALLMENT_COUNTS
                .iter()
                .map(|c| c.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        )))
    }
}

/// Validate the deposit day against the chosen frequency.
pub fn validate_schedule(frequency: &str, installment_day: i16) -> Result<(), CoreError> {
    let max_day = match frequency {
        FREQUENCY_WEEKLY => MAX_WEEKLY_DAY,
        FREQUENCY_MONTHLY => MAX_MONTHLY_DAY,
        other => {
            return Err(CoreError::Validation(format!(
                "Invalid installment frequency '{other}'. Must be one of: {}",
                VALID_FREQUENCIES.join(", ")
            )))
        }
    };

    if (1..=max_day).contains(&installment_day) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Installment day {installment_day} is out of range for {frequency} \
             deposits (must be 1-{max_day})"
        )))
    }
}

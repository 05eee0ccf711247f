//! Catalog reference data: periods, packages, package-period pricing, and
//! the amil fee settings.
//!
//! These tables are authoritative external data as far as this service is
//! concerned. It reads them to price a savings plan and never writes them.

use qurban_core::types::{Amount, DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `periods` table (one qurban campaign, e.g. a year).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Period {
    pub id: DbId,
    pub name: String,
    pub slaughter_date: Option<chrono::NaiveDate>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A package offered in a period at a price, joined with the fields the
/// planner needs. One row per (package, period) pair; the set of rows for a
/// package is its list of available periods.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PackagePeriodDetail {
    pub id: DbId,
    pub package_id: DbId,
    pub period_id: DbId,
    pub price: Amount,
    pub package_name: String,
    pub animal_type: String,
    pub package_type: String,
    pub max_slots: Option<i32>,
    pub period_name: String,
}

/// The single row of `qurban_settings`: base administrative fees.
/// `sapi` (cow) packages use the first fee, everything else the per-animal
/// ("perekor") fee.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct QurbanSettings {
    pub id: DbId,
    pub amil_qurban_sapi_fee: Amount,
    pub amil_qurban_perekor_fee: Amount,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

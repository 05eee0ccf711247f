//! Read-only repositories for catalog reference data.
//!
//! Periods, packages, package-period pricing, and the fee settings are
//! maintained by an external system; this service only looks them up.

use qurban_core::types::DbId;
use sqlx::PgPool;

use crate::models::catalog::{PackagePeriodDetail, Period, QurbanSettings};

/// Read operations for the `periods` table.
pub struct PeriodRepo;

impl PeriodRepo {
    /// Find a period by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Period>, sqlx::Error> {
        sqlx::query_as::<_, Period>(
            "SELECT id, name, slaughter_date, created_at, updated_at \
             FROM periods WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }
}

/// Read operations for the `package_periods` table.
pub struct PackagePeriodRepo;

impl PackagePeriodRepo {
    /// Find a package period joined with the package and period fields the
    /// installment planner needs.
    pub async fn find_detail(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<PackagePeriodDetail>, sqlx::Error> {
        sqlx::query_as::<_, PackagePeriodDetail>(
            "SELECT
                pp.id,
                pp.package_id,
                pp.period_id,
                pp.price,
                pk.name AS package_name,
                pk.animal_type,
                pk.package_type,
                pk.max_slots,
                pr.name AS period_name
             FROM package_periods pp
             JOIN packages pk ON pk.id = pp.package_id
             JOIN periods pr ON pr.id = pp.period_id
             WHERE pp.id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }
}

/// Read operations for the single-row `qurban_settings` table.
pub struct SettingsRepo;

impl SettingsRepo {
    /// Fetch the fee settings. Returns `None` when the row was never
    /// seeded, which is a deployment problem rather than a caller error.
    pub async fn get(pool: &PgPool) -> Result<Option<QurbanSettings>, sqlx::Error> {
        sqlx::query_as::<_, QurbanSettings>(
            "SELECT id, amil_qurban_sapi_fee, amil_qurban_perekor_fee, \
                    created_at, updated_at \
             FROM qurban_settings ORDER BY id LIMIT 1",
        )
        .fetch_optional(pool)
        .await
    }
}

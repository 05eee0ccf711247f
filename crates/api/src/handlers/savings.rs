//! Handlers for savings accounts.
//!
//! Account creation is where the fee calculator and installment planner
//! run: the caller picks a package period and a schedule, the service
//! derives the target and per-installment amounts from the period's price
//! and the amil fee settings, and the amounts are frozen from then on.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;

use qurban_core::error::CoreError;
use qurban_core::types::DbId;
use qurban_core::{fees, installments};
use qurban_db::models::savings::{
    CreateSavingsAccount, CreateSavingsAccountRequest, SavingsListQuery,
};
use qurban_db::repositories::{PackagePeriodRepo, PeriodRepo, SavingsAccountRepo, SettingsRepo};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/savings
///
/// Create a savings account for a donor. Validates the donor contact and
/// schedule, prices the chosen package period, and derives the frozen
/// target/installment amounts.
pub async fn create_savings_account(
    State(state): State<AppState>,
    Json(input): Json<CreateSavingsAccountRequest>,
) -> AppResult<impl IntoResponse> {
    if input.donor_name.trim().is_empty() {
        return Err(CoreError::Validation("Donor name is required".to_string()).into());
    }
    if input.donor_phone.trim().is_empty() {
        return Err(CoreError::Validation("Donor phone is required".to_string()).into());
    }
    installments::validate_installment_count(input.installment_count)?;
    installments::validate_schedule(&input.installment_frequency, input.installment_day)?;

    PeriodRepo::find_by_id(&state.pool, input.period_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Period",
            id: input.period_id,
        }))?;

    let period = PackagePeriodRepo::find_detail(&state.pool, input.package_period_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "PackagePeriod",
            id: input.package_period_id,
        }))?;

    // The chosen package period must belong to the chosen target period.
    if period.period_id != input.period_id {
        return Err(CoreError::Validation(format!(
            "Package period {} does not belong to period {}",
            input.package_period_id, input.period_id
        ))
        .into());
    }

    let settings = SettingsRepo::get(&state.pool).await?.ok_or_else(|| {
        AppError::Core(CoreError::InvalidConfiguration(
            "Qurban fee settings are not configured".to_string(),
        ))
    })?;

    let unit_fee = fees::compute_unit_fee(
        &period.animal_type,
        &period.package_type,
        period.max_slots,
        settings.amil_qurban_sapi_fee,
        settings.amil_qurban_perekor_fee,
    )?;
    let plan = installments::plan(period.price, unit_fee, input.installment_count)?;

    let create = CreateSavingsAccount {
        donor_name: input.donor_name,
        donor_phone: input.donor_phone,
        period_id: input.period_id,
        package_period_id: input.package_period_id,
        target_amount: plan.target_amount,
        installment_frequency: input.installment_frequency,
        installment_count: input.installment_count,
        installment_amount: plan.installment_amount,
        installment_day: input.installment_day,
        start_date: input.start_date.unwrap_or_else(|| Utc::now().date_naive()),
    };

    let account = SavingsAccountRepo::create(&state.pool, &create).await?;

    tracing::info!(
        savings_id = account.id,
        savings_number = %account.savings_number,
        target_amount = account.target_amount,
        installment_amount = account.installment_amount,
        "Savings account created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: account })))
}

/// GET /api/v1/savings
///
/// List savings accounts, newest first, with optional status filter.
pub async fn list_savings_accounts(
    State(state): State<AppState>,
    Query(params): Query<SavingsListQuery>,
) -> AppResult<impl IntoResponse> {
    let accounts = SavingsAccountRepo::list(&state.pool, &params).await?;
    Ok(Json(DataResponse { data: accounts }))
}

/// GET /api/v1/savings/{id}
pub async fn get_savings_account(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let account = SavingsAccountRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "SavingsAccount",
            id,
        }))?;
    Ok(Json(DataResponse { data: account }))
}

//! Administrative fee ("amil") calculation for qurban packages.
//!
//! Every package carries a per-unit administrative fee on top of the animal
//! price. Individual packages owe the full base fee for their animal type;
//! shared packages split the fee across their slots, rounding up so the sum
//! of per-slot fees collected is never less than the total fee owed.

use crate::error::CoreError;
use crate::types::Amount;

/// A whole cow, or one slot of a shared cow ("sapi").
pub const ANIMAL_COW: &str = "cow";

/// A goat, always an individual package.
pub const ANIMAL_GOAT: &str = "goat";

/// All valid animal types.
pub const VALID_ANIMAL_TYPES: &[&str] = &[ANIMAL_COW, ANIMAL_GOAT];

/// Package bought by a single donor.
pub const PACKAGE_INDIVIDUAL: &str = "individual";

/// Package split among multiple donors ("patungan").
pub const PACKAGE_SHARED: &str = "shared";

/// All valid package types.
pub const VALID_PACKAGE_TYPES: &[&str] = &[PACKAGE_INDIVIDUAL, PACKAGE_SHARED];

/// Compute the administrative fee owed by one unit (one donor) of a package.
///
/// The base fee is selected by animal type (`base_fee_cow` for cows,
/// `base_fee_other` for everything else). Shared packages divide it by
/// `max_slots` with ceiling rounding.
///
/// A shared package with a missing or non-positive slot count is a
/// data-integrity problem in the package catalog, reported as
/// [`CoreError::InvalidConfiguration`].
pub fn compute_unit_fee(
    animal_type: &str,
    package_type: &str,
    max_slots: Option<i32>,
    base_fee_cow: Amount,
    base_fee_other: Amount,
) -> Result<Amount, CoreError> {
    let base_fee = match animal_type {
        ANIMAL_COW => base_fee_cow,
        ANIMAL_GOAT => base_fee_other,
        other => {
            return Err(CoreError::InvalidConfiguration(format!(
                "Unknown animal type '{other}'. Must be one of: {}",
                VALID_ANIMAL_TYPES.join(", ")
            )))
        }
    };

    match package_type {
        PACKAGE_INDIVIDUAL => Ok(base_fee),
        PACKAGE_SHARED => match max_slots {
            Some(slots) if slots > 0 => Ok(base_fee.div_ceil(slots as Amount)),
            _ => Err(CoreError::InvalidConfiguration(
                "Shared package requires a positive max_slots".to_string(),
            )),
        },
        other => Err(CoreError::InvalidConfiguration(format!(
            "Unknown package type '{other}'. Must be one of: {}",
            VALID_PACKAGE_TYPES.join(", ")
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn individual_cow_pays_full_cow_fee() {
        let fee =
            compute_unit_fee(ANIMAL_COW, PACKAGE_INDIVIDUAL, None, 1_200_000, 300_000).unwrap();
        assert_eq!(fee, 1_200_000);
    }

    #[test]
    fn individual_goat_pays_full_other_fee() {
        let fee =
            compute_unit_fee(ANIMAL_GOAT, PACKAGE_INDIVIDUAL, None, 1_200_000, 300_000).unwrap();
        assert_eq!(fee, 300_000);
    }

    #[test]
    fn shared_cow_fee_rounds_up() {
        // 1,200,000 / 7 = 171,428.57... -> 171,429
        let fee =
            compute_unit_fee(ANIMAL_COW, PACKAGE_SHARED, Some(7), 1_200_000, 300_000).unwrap();
        assert_eq!(fee, 171_429);
    }

    #[test]
    fn shared_fee_exact_division_does_not_round() {
        let fee =
            compute_unit_fee(ANIMAL_COW, PACKAGE_SHARED, Some(4), 1_200_000, 300_000).unwrap();
        assert_eq!(fee, 300_000);
    }

    #[test]
    fn rounded_slot_fees_cover_the_full_fee() {
        let base = 1_200_000;
        let slots = 7;
        let fee = compute_unit_fee(ANIMAL_COW, PACKAGE_SHARED, Some(slots), base, 0).unwrap();
        assert!(fee * slots as i64 >= base);
    }

    #[test]
    fn shared_without_slots_is_invalid_configuration() {
        let err =
            compute_unit_fee(ANIMAL_COW, PACKAGE_SHARED, None, 1_200_000, 300_000).unwrap_err();
        assert!(matches!(err, CoreError::InvalidConfiguration(_)));
    }

    #[test]
    fn shared_with_zero_slots_is_invalid_configuration() {
        let err =
            compute_unit_fee(ANIMAL_COW, PACKAGE_SHARED, Some(0), 1_200_000, 300_000).unwrap_err();
        assert!(matches!(err, CoreError::InvalidConfiguration(_)));
    }

    #[test]
    fn shared_with_negative_slots_is_invalid_configuration() {
        let err =
            compute_unit_fee(ANIMAL_COW, PACKAGE_SHARED, Some(-3), 1_200_000, 300_000).unwrap_err();
        assert!(matches!(err, CoreError::InvalidConfiguration(_)));
    }

    #[test]
    fn unknown_animal_type_is_invalid_configuration() {
        let err =
            compute_unit_fee("camel", PACKAGE_INDIVIDUAL, None, 1_200_000, 300_000).unwrap_err();
        assert!(matches!(err, CoreError::InvalidConfiguration(_)));
    }

    #[test]
    fn unknown_package_type_is_invalid_configuration() {
        let err = compute_unit_fee(ANIMAL_COW, "group", None, 1_200_000, 300_000).unwrap_err();
        assert!(matches!(err, CoreError::InvalidConfiguration(_)));
    }
}

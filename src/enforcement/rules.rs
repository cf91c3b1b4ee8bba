//! Validation rules for operation arguments.
//!
//! Rules return a `Validation` so independent checks can be combined and
//! report every violation at once instead of stopping at the first.

use crate::core::Denomination;
use crate::enforcement::violations::ParamViolation;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Outcome of a validation rule.
pub type RuleResult = Validation<(), NonEmptyVec<ParamViolation>>;

fn check(ok: bool, violation: impl FnOnce() -> ParamViolation) -> RuleResult {
    if ok {
        Validation::success(())
    } else {
        Validation::fail(violation())
    }
}

/// A restocked coin count must satisfy `1 <= count <= capacity`.
pub fn coin_count_in_range(denomination: Denomination, count: u32, capacity: u32) -> RuleResult {
    check((1..=capacity).contains(&count), || {
        ParamViolation::CoinCountOutOfRange {
            denomination,
            count,
            capacity,
        }
    })
}

/// Both coin counts of a restock, validated together.
pub fn coin_refill(ones: u32, ones_capacity: u32, twos: u32, twos_capacity: u32) -> RuleResult {
    Validation::all_vec(vec![
        coin_count_in_range(Denomination::One, ones, ones_capacity),
        coin_count_in_range(Denomination::Two, twos, twos_capacity),
    ])
    .map(|_| ())
}

pub fn price_positive(price: u32) -> RuleResult {
    check(price > 0, || ParamViolation::NonPositivePrice)
}

/// A purchase must ask for `1 <= count <= max` units.
pub fn product_count_in_range(count: u32, max: u32) -> RuleResult {
    check((1..=max).contains(&count), || {
        ParamViolation::ProductCountOutOfRange { count, max }
    })
}

pub fn admin_code_matches(supplied: u64, expected: u64) -> RuleResult {
    check(supplied == expected, || ParamViolation::WrongAdminCode)
}

/// Collapse a rule outcome into the violations it found.
pub fn into_result(outcome: RuleResult) -> Result<(), Vec<ParamViolation>> {
    match outcome {
        Validation::Success(_) => Ok(()),
        Validation::Failure(errors) => Err(errors.iter().cloned().collect()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coin_refill_accepts_bounds() {
        assert!(coin_refill(1, 50, 50, 50).is_success());
    }

    #[test]
    fn coin_refill_accumulates_all_violations() {
        let result = coin_refill(0, 50, 51, 50);

        match result {
            Validation::Failure(errors) => {
                assert_eq!(errors.len(), 2);
                assert!(errors.iter().any(|e| matches!(
                    e,
                    ParamViolation::CoinCountOutOfRange {
                        denomination: Denomination::One,
                        count: 0,
                        ..
                    }
                )));
                assert!(errors.iter().any(|e| matches!(
                    e,
                    ParamViolation::CoinCountOutOfRange {
                        denomination: Denomination::Two,
                        count: 51,
                        ..
                    }
                )));
            }
            Validation::Success(_) => panic!("Expected failures, got success"),
        }
    }

    #[test]
    fn coin_refill_reports_single_bad_argument() {
        let violations = into_result(coin_refill(5, 50, 0, 50)).unwrap_err();
        assert_eq!(
            violations,
            vec![ParamViolation::CoinCountOutOfRange {
                denomination: Denomination::Two,
                count: 0,
                capacity: 50,
            }]
        );
    }

    #[test]
    fn price_must_be_positive() {
        assert!(price_positive(1).is_success());
        assert_eq!(
            into_result(price_positive(0)),
            Err(vec![ParamViolation::NonPositivePrice])
        );
    }

    #[test]
    fn product_count_bounds() {
        assert!(product_count_in_range(1, 40).is_success());
        assert!(product_count_in_range(40, 40).is_success());
        assert!(product_count_in_range(0, 40).is_failure());
        assert!(product_count_in_range(41, 40).is_failure());
    }

    #[test]
    fn admin_code_must_match() {
        assert!(admin_code_matches(7, 7).is_success());
        assert_eq!(
            into_result(admin_code_matches(0, 7)),
            Err(vec![ParamViolation::WrongAdminCode])
        );
    }
}

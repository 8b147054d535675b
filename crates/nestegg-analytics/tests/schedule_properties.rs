//! Property tests for projection schedules.

use nestegg_analytics::prelude::*;
use nestegg_core::CompoundingFrequency;
use proptest::prelude::*;

fn frequency_strategy() -> impl Strategy<Value = CompoundingFrequency> {
    prop::sample::select(CompoundingFrequency::SUPPORTED_COUNTS.to_vec())
        .prop_map(|count| CompoundingFrequency::try_from(count).unwrap())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn schedule_has_one_row_per_year_plus_start(
        initial in 0.0f64..1_000_000.0,
        monthly in -1_000.0f64..1_000.0,
        rate in -20.0f64..30.0,
        years in 0u32..60,
        frequency in frequency_strategy(),
    ) {
        let schedule = project(initial, monthly, rate, years, frequency);
        prop_assert_eq!(schedule.len(), years as usize + 1);
        for (index, row) in schedule.iter().enumerate() {
            prop_assert_eq!(row.year as usize, index);
        }
    }

    #[test]
    fn year_zero_is_the_initial_investment(
        initial in 0.0f64..1_000_000.0,
        monthly in -1_000.0f64..1_000.0,
        rate in -20.0f64..30.0,
        years in 0u32..10,
        frequency in frequency_strategy(),
    ) {
        let schedule = project(initial, monthly, rate, years, frequency);
        prop_assert_eq!(schedule[0].year, 0);
        prop_assert_eq!(schedule[0].interest_earned, 0.0);
        prop_assert_eq!(schedule[0].total_amount, initial);
        prop_assert_eq!(schedule[0].current_principal, initial);
    }

    #[test]
    fn principal_is_straight_line_contributions(
        initial in 0.0f64..1_000_000.0,
        monthly in -1_000.0f64..1_000.0,
        rate in -20.0f64..30.0,
        years in 0u32..40,
        frequency in frequency_strategy(),
    ) {
        let schedule = project(initial, monthly, rate, years, frequency);
        for row in &schedule {
            let expected = initial + f64::from(row.year) * 12.0 * monthly;
            prop_assert_eq!(row.current_principal, expected);
            prop_assert_eq!(row.interest_earned, row.total_amount - row.current_principal);
        }
    }

    #[test]
    fn growth_never_shrinks_the_balance(
        initial in 0.0f64..1_000_000.0,
        monthly in 0.0f64..5_000.0,
        rate in 0.0f64..30.0,
        years in 1u32..40,
        frequency in frequency_strategy(),
    ) {
        let schedule = project(initial, monthly, rate, years, frequency);
        for pair in schedule.windows(2) {
            prop_assert!(
                pair[1].total_amount >= pair[0].total_amount,
                "year {} fell from {} to {}",
                pair[1].year,
                pair[0].total_amount,
                pair[1].total_amount
            );
        }
    }

    #[test]
    fn zero_rate_earns_nothing(
        initial in 0u32..1_000_000,
        monthly in 0u32..10_000,
        years in 0u32..40,
        frequency in frequency_strategy(),
    ) {
        let schedule = project(f64::from(initial), f64::from(monthly), 0.0, years, frequency);
        for row in &schedule {
            prop_assert_eq!(row.interest_earned, 0.0);
            prop_assert_eq!(row.total_amount, row.current_principal);
        }
    }

    #[test]
    fn projection_is_bit_for_bit_repeatable(
        initial in 0.0f64..1_000_000.0,
        monthly in -1_000.0f64..1_000.0,
        rate in -20.0f64..30.0,
        years in 0u32..30,
        frequency in frequency_strategy(),
    ) {
        let first = project(initial, monthly, rate, years, frequency);
        let second = project(initial, monthly, rate, years, frequency);
        prop_assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(&second) {
            prop_assert_eq!(a.total_amount.to_bits(), b.total_amount.to_bits());
            prop_assert_eq!(a.interest_earned.to_bits(), b.interest_earned.to_bits());
            prop_assert_eq!(a.current_principal.to_bits(), b.current_principal.to_bits());
        }
    }
}

#[test]
fn scenario_monthly_one_year() {
    let schedule = project(1000.0, 100.0, 8.0, 1, CompoundingFrequency::Monthly);
    assert_eq!(schedule.len(), 2);

    let start = schedule[0];
    assert_eq!(
        (start.year, start.current_principal, start.interest_earned, start.total_amount),
        (0, 1000.0, 0.0, 1000.0)
    );

    let end = schedule[1];
    assert_eq!(end.current_principal, 2200.0);
    assert!(end.total_amount > 2200.0);
}

#[test]
fn every_frequency_grows_a_positive_rate() {
    for count in CompoundingFrequency::SUPPORTED_COUNTS {
        let frequency = CompoundingFrequency::try_from(count).unwrap();
        let schedule = project(1000.0, 0.0, 5.0, 1, frequency);
        assert!(schedule[1].total_amount > 1000.0, "{frequency}");
        assert!(schedule[1].interest_earned > 0.0, "{frequency}");
    }
}

//! Property tests for business-day rolling and maturity resolution.

use advance_core::calendars::{resolve_maturity_date, Calendar, HolidayCalendar};
use advance_core::types::{Date, FrequencyUnit};
use proptest::prelude::*;

const UNITS: [FrequencyUnit; 4] = [
    FrequencyUnit::Days,
    FrequencyUnit::Weeks,
    FrequencyUnit::Months,
    FrequencyUnit::Years,
];

fn candidate_date(offset: i64) -> Date {
    Date::from_ymd(2026, 1, 1).unwrap().add_days(offset)
}

fn calendar_around(candidate: Date, holiday_offsets: &[i64]) -> HolidayCalendar {
    HolidayCalendar::from_dates(
        "prop",
        holiday_offsets.iter().map(|h| candidate.add_days(*h)),
    )
}

proptest! {
    #[test]
    fn resolved_maturity_is_always_a_business_day(
        offset in 0i64..730,
        holiday_offsets in proptest::collection::vec(-10i64..10, 0..6),
        unit_idx in 0usize..4,
    ) {
        let candidate = candidate_date(offset);
        let cal = calendar_around(candidate, &holiday_offsets);
        if let Ok(resolved) = resolve_maturity_date(candidate, UNITS[unit_idx], &cal) {
            prop_assert!(cal.is_business_day(resolved));
            prop_assert!(!resolved.is_weekend());
        }
    }

    #[test]
    fn day_and_week_terms_only_roll_forward(
        offset in 0i64..730,
        holiday_offsets in proptest::collection::vec(-10i64..10, 0..6),
    ) {
        let candidate = candidate_date(offset);
        let cal = calendar_around(candidate, &holiday_offsets);
        for unit in [FrequencyUnit::Days, FrequencyUnit::Weeks] {
            if let Ok(resolved) = resolve_maturity_date(candidate, unit, &cal) {
                prop_assert!(resolved >= candidate);
            }
        }
    }

    #[test]
    fn month_and_year_terms_never_slip_into_the_next_month(
        offset in 0i64..730,
        holiday_offsets in proptest::collection::vec(-10i64..10, 0..6),
    ) {
        let candidate = candidate_date(offset);
        let cal = calendar_around(candidate, &holiday_offsets);
        for unit in [FrequencyUnit::Months, FrequencyUnit::Years] {
            if let Ok(resolved) = resolve_maturity_date(candidate, unit, &cal) {
                prop_assert!(resolved <= candidate.end_of_month());
                prop_assert_eq!(resolved.month(), candidate.month());
                prop_assert_eq!(resolved.year(), candidate.year());
            }
        }
    }

    #[test]
    fn empty_holiday_set_resolves_like_weekend_only(
        offset in 0i64..730,
        unit_idx in 0usize..4,
    ) {
        let candidate = candidate_date(offset);
        let empty = HolidayCalendar::from_dates("empty", []);
        let resolved = resolve_maturity_date(candidate, UNITS[unit_idx], &empty).unwrap();
        prop_assert!(!resolved.is_weekend());
        // At most one weekend to cross
        prop_assert!((candidate.days_between(&resolved)).abs() <= 2);
    }
}

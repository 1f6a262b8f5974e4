//! Property-based tests for `StayDates` and night arithmetic.

use super::{calculate_nights, StayDates};
use crate::database::test_util::{create_test_database, sample_property};
use crate::database::Database;
use crate::{Money, Reservation};
use chrono::{Days, NaiveDate};
use proptest::prelude::*;

fn base() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
}

fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    (0u64..730).prop_map(|offset| base() + Days::new(offset))
}

// Stays of one to sixty nights starting within a two-year window
fn stay_strategy() -> impl Strategy<Value = StayDates> {
    (0u64..730, 1u64..=60).prop_map(|(offset, len)| {
        let start = base() + Days::new(offset);
        StayDates::new(start, start + Days::new(len)).unwrap()
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    #[test]
    fn nights_match_day_difference(a in date_strategy(), b in date_strategy()) {
        let result = calculate_nights(a, b);
        if a < b {
            let expected = (b - a).num_days();
            prop_assert_eq!(i64::from(result.unwrap()), expected);
        } else {
            prop_assert!(result.is_err());
        }
    }

    #[test]
    fn overlap_is_symmetric(x in stay_strategy(), y in stay_strategy()) {
        prop_assert_eq!(x.overlaps(&y), y.overlaps(&x));
    }

    #[test]
    fn overlap_matches_shared_nights(x in stay_strategy(), y in stay_strategy()) {
        let shares_a_night = x
            .start()
            .iter_days()
            .take_while(|day| *day < x.end())
            .any(|day| y.start() <= day && day < y.end());
        prop_assert_eq!(x.overlaps(&y), shares_a_night);
    }

    #[test]
    fn adjacent_stays_never_overlap(x in stay_strategy(), len in 1u64..=30) {
        let next = StayDates::new(x.end(), x.end() + Days::new(len)).unwrap();
        prop_assert!(!x.overlaps(&next));
        prop_assert!(!next.overlaps(&x));
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 48,
        .. ProptestConfig::default()
    })]

    // The indexed range query must agree with the in-memory predicate
    #[test]
    fn storage_conflicts_agree_with_predicate(
        existing in prop::collection::vec(stay_strategy(), 0..12),
        candidate in stay_strategy(),
    ) {
        let db = create_test_database();
        let conn = db.connection();
        let property = Database::insert_property(conn, &sample_property("Rua A", "1")).unwrap();

        let mut expected = Vec::new();
        for stay in &existing {
            let request = Reservation::builder(property.id, *stay)
                .client("Ana", "ana@example.com")
                .guests(1)
                .build()
                .unwrap();
            let stored = Database::insert_reservation(conn, &request, Money::ZERO).unwrap();
            if stay.overlaps(&candidate) {
                expected.push(stored.id);
            }
        }

        let found =
            Database::find_overlapping_reservations(conn, property.id, &candidate, true).unwrap();
        prop_assert_eq!(found, expected);
    }
}

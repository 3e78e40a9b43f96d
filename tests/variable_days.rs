// Tests for Veterans' Day and Budget Day computation.
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use proptest::prelude::*;
use vlaginstructie::model::variable_days::{
    BUDGET_DAY, TUESDAY, VETERANS_DAY, compute, nth_weekday_of_month,
};

proptest! {
    #[test]
    fn computed_days_have_the_right_weekdays(year in 1900i32..=2400) {
        let days = compute(year);
        prop_assert_eq!(days.len(), 2);

        let (june, vet) = days.iter().find(|(d, _)| d.month() == 6).unwrap();
        prop_assert_eq!(june.weekday(), Weekday::Sat);
        prop_assert!(june.day() > 23, "not the last Saturday: {}", june);
        prop_assert_eq!(vet.name.as_str(), VETERANS_DAY);

        let (sept, budget) = days.iter().find(|(d, _)| d.month() == 9).unwrap();
        prop_assert_eq!(sept.weekday(), Weekday::Tue);
        let first = nth_weekday_of_month(year, 9, TUESDAY, 1).unwrap();
        prop_assert!(first.day() <= 7);
        prop_assert_eq!(*sept - first, Duration::days(14));
        prop_assert_eq!(budget.name.as_str(), BUDGET_DAY);

        for obs in days.values() {
            prop_assert!(!obs.half_mast);
            prop_assert!(!obs.pennant);
        }
    }
}

#[test]
fn test_known_years() {
    let d2025 = compute(2025);
    assert!(d2025.contains_key(&NaiveDate::from_ymd_opt(2025, 6, 28).unwrap()));
    assert!(d2025.contains_key(&NaiveDate::from_ymd_opt(2025, 9, 16).unwrap()));

    let d2026 = compute(2026);
    assert!(d2026.contains_key(&NaiveDate::from_ymd_opt(2026, 6, 27).unwrap()));
    assert!(d2026.contains_key(&NaiveDate::from_ymd_opt(2026, 9, 15).unwrap()));
}

// File: ./src/model/easter.rs
use chrono::{Datelike, Duration, NaiveDate};

/// Easter Sunday for a Gregorian year (Meeus/Jones/Butcher).
///
/// Returns None only for years chrono cannot represent.
pub fn easter_sunday(year: i32) -> Option<NaiveDate> {
    let a = year.rem_euclid(19);
    let b = year.div_euclid(100);
    let c = year.rem_euclid(100);
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15).rem_euclid(30);
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k).rem_euclid(7);
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;
    NaiveDate::from_ymd_opt(year, month as u32, day as u32)
}

/// The movable Christian holidays of one year, all derived from Easter Sunday.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MovableFeasts {
    pub good_friday: NaiveDate,
    pub easter_sunday: NaiveDate,
    pub easter_monday: NaiveDate,
    pub ascension: NaiveDate,
    pub pentecost: NaiveDate,
    pub pentecost_monday: NaiveDate,
}

impl MovableFeasts {
    pub fn for_year(year: i32) -> Option<Self> {
        let easter = easter_sunday(year)?;
        Some(Self {
            good_friday: easter - Duration::days(2),
            easter_sunday: easter,
            easter_monday: easter + Duration::days(1),
            ascension: easter + Duration::days(39),
            pentecost: easter + Duration::days(49),
            pentecost_monday: easter + Duration::days(50),
        })
    }

    fn contains(&self, date: NaiveDate) -> bool {
        [
            self.good_friday,
            self.easter_sunday,
            self.easter_monday,
            self.ascension,
            self.pentecost,
            self.pentecost_monday,
        ]
        .contains(&date)
    }
}

/// True iff `date` is one of the holidays that trigger the alternate-date shift:
/// Good Friday, Easter Sunday/Monday, Ascension, Pentecost Sunday/Monday,
/// or Christmas (25 and 26 December).
pub fn is_recognized_holiday(date: NaiveDate) -> bool {
    if date.month() == 12 && (date.day() == 25 || date.day() == 26) {
        return true;
    }
    MovableFeasts::for_year(date.year()).is_some_and(|feasts| feasts.contains(date))
}

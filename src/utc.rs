use std::cmp::Ordering;

use crate::date::*;
use crate::leapsecs::*;

/// A validated UTC date and time of day.
///
/// The seconds field runs up to 61 on a day that ends with a positive
/// leap second. Which seconds exist depends on the leap second table the
/// value was constructed with; the operators on this type use
/// [`LeapSecs::builtin()`]. Use the methods on [`LeapSecs`] to work with
/// any other table.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct UtcTime {
    date: Gregorian,
    hour: i32,
    minute: i32,
    second: f64,
}

fn invalid(field: Field, value: f64, min: f64, max: f64) -> Error {
    Error::InvalidField { field, value, min, max }
}

impl LeapSecs {
    /// Construct a UTC time, checking each field in order from the year
    /// down to the second.
    pub fn utc(
        &self,
        year: i32,
        month: i32,
        day: i32,
        hour: i32,
        minute: i32,
        second: f64,
    ) -> Result<UtcTime> {
        if year < 1 {
            return Err(invalid(Field::Year, year.into(), 1.0, f64::INFINITY));
        }
        if !(1..=12).contains(&month) {
            return Err(invalid(Field::Month, month.into(), 1.0, 13.0));
        }
        let days = days_in_month(year, month);
        if day < 1 || day > days {
            return Err(invalid(Field::Day, day.into(), 1.0, (days + 1).into()));
        }
        if !(0..24).contains(&hour) {
            return Err(invalid(Field::Hour, hour.into(), 0.0, 24.0));
        }
        if !(0..60).contains(&minute) {
            return Err(invalid(Field::Minute, minute.into(), 0.0, 60.0));
        }
        let date = Gregorian(year, month, day);
        let length: f64 = self.minute_length(date, hour, minute).into();
        // also rejects NaN
        if !(second >= 0.0 && second < length) {
            return Err(invalid(Field::Second, second, 0.0, length));
        }
        // no negative zero, so that Eq and Ord agree
        let second = second + 0.0;
        Ok(UtcTime { date, hour, minute, second })
    }

    /// Is the time between `a` and `b` no more than `tolerance` seconds?
    pub fn approx_eq(&self, a: UtcTime, b: UtcTime, tolerance: f64) -> bool {
        self.elapsed(a, b).abs() <= tolerance
    }
}

impl UtcTime {
    /// Construct a UTC time using the builtin leap second table.
    pub fn new(
        year: i32,
        month: i32,
        day: i32,
        hour: i32,
        minute: i32,
        second: f64,
    ) -> Result<UtcTime> {
        LeapSecs::builtin().utc(year, month, day, hour, minute, second)
    }

    /// The start of a day. `date` must be valid.
    pub(crate) fn midnight(date: Gregorian) -> UtcTime {
        UtcTime { date, hour: 0, minute: 0, second: 0.0 }
    }

    pub fn date(&self) -> Gregorian {
        self.date
    }
    pub fn year(&self) -> i32 {
        self.date.year()
    }
    pub fn month(&self) -> i32 {
        self.date.month()
    }
    pub fn day(&self) -> i32 {
        self.date.day()
    }
    pub fn hour(&self) -> i32 {
        self.hour
    }
    pub fn minute(&self) -> i32 {
        self.minute
    }
    pub fn second(&self) -> f64 {
        self.second
    }

    pub fn seconds_since_midnight(&self) -> f64 {
        (self.hour * 3600 + self.minute * 60) as f64 + self.second
    }

    /// See [`LeapSecs::approx_eq`]; this uses the builtin table.
    pub fn approx_eq(&self, other: &UtcTime, tolerance: f64) -> bool {
        LeapSecs::builtin().approx_eq(*self, *other, tolerance)
    }
}

// seconds are never NaN
impl Eq for UtcTime {}

impl Ord for UtcTime {
    fn cmp(&self, other: &UtcTime) -> Ordering {
        self.date
            .cmp(&other.date)
            .then(self.hour.cmp(&other.hour))
            .then(self.minute.cmp(&other.minute))
            .then(self.second.total_cmp(&other.second))
    }
}

impl PartialOrd for UtcTime {
    fn partial_cmp(&self, other: &UtcTime) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Elapsed SI seconds from `rhs` to `self`.
impl std::ops::Sub<UtcTime> for UtcTime {
    type Output = f64;
    fn sub(self, rhs: UtcTime) -> f64 {
        LeapSecs::builtin().elapsed(rhs, self)
    }
}

/// The time `rhs` SI seconds after `self`.
impl std::ops::Add<f64> for UtcTime {
    type Output = Result<UtcTime>;
    fn add(self, rhs: f64) -> Result<UtcTime> {
        LeapSecs::builtin().after(self, rhs)
    }
}

/// The time `rhs` SI seconds before `self`.
impl std::ops::Sub<f64> for UtcTime {
    type Output = Result<UtcTime>;
    fn sub(self, rhs: f64) -> Result<UtcTime> {
        LeapSecs::builtin().after(self, -rhs)
    }
}

#[cfg(test)]
mod test {
    use crate::*;

    fn field(err: Error) -> Field {
        match err {
            Error::InvalidField { field, .. } => field,
            err => panic!("unexpected {}", err),
        }
    }

    #[test]
    fn validation() {
        assert!(UtcTime::new(2016, 2, 29, 12, 0, 0.0).is_ok());
        let err = UtcTime::new(2017, 2, 29, 12, 0, 0.0).unwrap_err();
        assert_eq!(err.to_string(), "day 29 is not within 1..29");
        assert_eq!(field(err), Field::Day);
        assert_eq!(field(UtcTime::new(0, 1, 1, 0, 0, 0.0).unwrap_err()), Field::Year);
        assert_eq!(field(UtcTime::new(2017, 13, 1, 0, 0, 0.0).unwrap_err()), Field::Month);
        assert_eq!(field(UtcTime::new(2017, 1, 0, 0, 0, 0.0).unwrap_err()), Field::Day);
        assert_eq!(field(UtcTime::new(2017, 1, 1, 24, 0, 0.0).unwrap_err()), Field::Hour);
        assert_eq!(field(UtcTime::new(2017, 1, 1, 0, 60, 0.0).unwrap_err()), Field::Minute);
        assert_eq!(field(UtcTime::new(2017, 1, 1, 0, 0, -0.5).unwrap_err()), Field::Second);
        assert_eq!(field(UtcTime::new(2017, 1, 1, 0, 0, f64::NAN).unwrap_err()), Field::Second);
        // checked in order from the year down
        assert_eq!(field(UtcTime::new(2017, 2, 29, 25, 0, 99.0).unwrap_err()), Field::Day);
    }

    #[test]
    fn leap_seconds() {
        assert!(UtcTime::new(2016, 12, 31, 23, 59, 60.9).is_ok());
        assert!(UtcTime::new(2016, 12, 31, 23, 58, 60.0).is_err());
        assert!(UtcTime::new(2017, 12, 31, 23, 59, 60.0).is_err());
        let err = UtcTime::new(2016, 12, 31, 23, 59, 61.0).unwrap_err();
        assert_eq!(err.to_string(), "second 61 is not within 0..61");

        let table = LeapSecs::new(vec![LeapSec::neg(2030, 6, 30)], Gregorian(2031, 1, 1))
            .unwrap();
        assert!(table.utc(2030, 6, 30, 23, 59, 58.5).is_ok());
        assert!(table.utc(2030, 6, 30, 23, 59, 59.0).is_err());
        assert!(table.utc(2030, 6, 30, 23, 58, 59.0).is_ok());
        assert!(LeapSecs::none().utc(2016, 12, 31, 23, 59, 60.0).is_err());
    }

    #[test]
    fn ordering() {
        let a = UtcTime::new(2016, 12, 31, 23, 59, 59.5).unwrap();
        let b = UtcTime::new(2016, 12, 31, 23, 59, 60.5).unwrap();
        let c = UtcTime::new(2017, 1, 1, 0, 0, 0.0).unwrap();
        assert!(a < b && b < c && a < c);
        assert!(c > a);
        assert_eq!(a.max(c), c);
        assert_eq!(UtcTime::new(2017, 1, 1, 0, 0, -0.0).unwrap(), c);
        assert_eq!(
            UtcTime::new(2017, 1, 1, 0, 0, -0.0).unwrap().cmp(&c),
            std::cmp::Ordering::Equal
        );
        for &(x, y) in &[(a, b), (b, c), (a, c), (c, a), (a, a)] {
            assert_eq!(x < y, y - x > 0.0);
            assert_eq!(x == y, y - x == 0.0);
        }
    }

    #[test]
    fn approx() {
        let a = UtcTime::new(2016, 12, 31, 23, 59, 60.9995).unwrap();
        let b = UtcTime::new(2017, 1, 1, 0, 0, 0.0).unwrap();
        assert_ne!(a, b);
        assert!(a.approx_eq(&b, 0.001));
        assert!(!a.approx_eq(&b, 0.0001));
        // across the leap second with a table that does not have it
        let a = LeapSecs::none().utc(2016, 12, 31, 23, 59, 59.9995).unwrap();
        assert!(LeapSecs::none().approx_eq(a, b, 0.001));
        assert!(!LeapSecs::builtin().approx_eq(a, b, 0.001));
    }

    #[test]
    fn operators() {
        let a = UtcTime::new(2016, 12, 31, 23, 59, 0.0).unwrap();
        let b = UtcTime::new(2017, 1, 1, 0, 0, 0.0).unwrap();
        assert_eq!(b - a, 61.0);
        assert_eq!(a - b, -61.0);
        assert_eq!((a + 61.0).unwrap(), b);
        assert_eq!((b - 61.0).unwrap(), a);
        assert_eq!((a + 60.0).unwrap(), UtcTime::new(2016, 12, 31, 23, 59, 60.0).unwrap());
    }
}

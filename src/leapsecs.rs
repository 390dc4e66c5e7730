use thiserror::Error;

use crate::date::*;
use crate::nist::Hash;

pub use crate::from::LeapSecs;

/// The direction of a change in the length of UTC days.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Leap {
    Zero,
    Neg,
    Pos,
    Exp,
}

// https://www.ucolick.org/~sla/leapsecs/dutc.html
//
// Historically leap seconds have been at the end of June or December,
// and they have all been positive. Nothing here depends on either.

/// The last minute of `date` (23:59 UTC) has `60 + delta` seconds.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct LeapSec {
    date: Gregorian,
    delta: i32,
}

impl LeapSec {
    pub const fn new(date: Gregorian, delta: i32) -> Self {
        LeapSec { date, delta }
    }
    pub const fn pos(year: i32, month: i32, day: i32) -> Self {
        LeapSec::new(Gregorian(year, month, day), 1)
    }
    pub const fn neg(year: i32, month: i32, day: i32) -> Self {
        LeapSec::new(Gregorian(year, month, day), -1)
    }
    pub fn date(self) -> Gregorian {
        self.date
    }
    pub fn delta(self) -> i32 {
        self.delta
    }
    /// Length of the day in SI seconds.
    pub fn day_length(self) -> i64 {
        86400 + self.delta as i64
    }
}

impl std::fmt::Display for LeapSec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {:+}", self.date, self.delta)
    }
}

impl LeapSecs {
    /// The leap second entry for `date`, if there is one.
    pub fn leap_on(&self, date: Gregorian) -> Option<LeapSec> {
        let list = self.as_slice();
        list.binary_search_by_key(&date, |leap| leap.date)
            .ok()
            .map(|i| list[i])
    }

    /// Number of seconds in the minute starting at `hour:minute` on `date`.
    pub fn minute_length(&self, date: Gregorian, hour: i32, minute: i32) -> i32 {
        match self.leap_on(date) {
            Some(leap) if (hour, minute) == (23, 59) => 60 + leap.delta,
            _ => 60,
        }
    }

    /// Number of seconds on `date`.
    pub fn day_length(&self, date: Gregorian) -> i64 {
        self.leap_on(date).map_or(86400, LeapSec::day_length)
    }
}

/// A component of a [`UtcTime`](crate::UtcTime).
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Field {
    Year,
    Month,
    Day,
    Hour,
    Minute,
    Second,
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Field::Year => "year",
            Field::Month => "month",
            Field::Day => "day",
            Field::Hour => "hour",
            Field::Minute => "minute",
            Field::Second => "second",
        })
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("{field} {value} is not within {min}..{max}")]
    InvalidField { field: Field, value: f64, min: f64, max: f64 },
    #[error("time offset {0} reaches outside years 1 to {}", i32::MAX)]
    OutOfRange(f64),
    #[error("malformed UTC time {0:?}")]
    MalformedInput(String),

    #[error("invalid date for leap second {0}")]
    BadDate(Gregorian),
    #[error("leap second of zero ({0})")]
    NoLeap(LeapSec),
    #[error("leap seconds are disordered ({0} >= {1})")]
    OutOfOrder(LeapSec, LeapSec),
    #[error("table expires {0} before its last leap second {1}")]
    TooLate(Gregorian, LeapSec),
    #[error("leap second is not at the end of a month ({0})")]
    NotMonthEnd(LeapSec),
    #[error("leap second is out of range ({0})")]
    LargeLeap(LeapSec),
    #[error("leap seconds list must start at 1972-01-01 with DTAI 10")]
    FalseStart,
    #[error("compact leap second table runs past the last month")]
    TooLong,

    #[error("checksum failed {0} <> {1} data {2}")]
    Checksum(Hash, Hash, String),
    #[error("format error {0}")]
    Format(#[from] std::fmt::Error),
    #[error("expected {0}, found {1}")]
    FromStr(&'static str, char),
    #[error("time is not midnight ({0})")]
    Midnight(i64),
    #[error("DTAI does not change at {0}")]
    NoChange(Gregorian),
    #[error("parse error {0}")]
    Nom(String),
    #[error("timestamp and date do not match ({0} <> {1})")]
    TimeDate(i64, Gregorian),
    #[error("{0}")]
    Unicode(#[from] std::str::Utf8Error),
}

#[cfg(test)]
mod test {
    use crate::*;

    #[test]
    fn lengths() {
        let table = LeapSecs::builtin();
        let leap = Gregorian(2016, 12, 31);
        assert_eq!(table.minute_length(leap, 23, 59), 61);
        assert_eq!(table.minute_length(leap, 23, 58), 60);
        assert_eq!(table.minute_length(leap, 0, 59), 60);
        assert_eq!(table.minute_length(Gregorian(2017, 12, 31), 23, 59), 60);
        assert_eq!(table.day_length(leap), 86401);
        assert_eq!(table.day_length(Gregorian(2016, 12, 30)), 86400);

        let table = LeapSecs::new(
            vec![LeapSec::neg(2030, 6, 30), LeapSec::new(Gregorian(2031, 3, 14), 3)],
            Gregorian(2032, 1, 1),
        )
        .unwrap();
        assert_eq!(table.minute_length(Gregorian(2030, 6, 30), 23, 59), 59);
        assert_eq!(table.day_length(Gregorian(2030, 6, 30)), 86399);
        assert_eq!(table.minute_length(Gregorian(2031, 3, 14), 23, 59), 63);
        assert_eq!(LeapSecs::none().day_length(leap), 86400);
    }

    #[test]
    fn errors() {
        let err = Error::InvalidField {
            field: Field::Day,
            value: 29.0,
            min: 1.0,
            max: 29.0,
        };
        assert_eq!(err.to_string(), "day 29 is not within 1..29");
        let leap = LeapSec::new(Gregorian(2016, 12, 31), 0);
        assert_eq!(Error::NoLeap(leap).to_string(), "leap second of zero (2016-12-31 +0)");
    }
}

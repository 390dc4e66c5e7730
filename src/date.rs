use std::convert::TryFrom;

/// A proleptic Gregorian calendar date: year, month (1..=12), day.
///
/// The derived ordering is chronological for valid dates.
#[derive(Copy, Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Gregorian(pub i32, pub i32, pub i32);

impl std::fmt::Display for Gregorian {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year(), self.month(), self.day())
    }
}

pub const fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

pub const fn days_in_month(year: i32, month: i32) -> i32 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

pub const fn days_in_year(year: i32) -> i32 {
    if is_leap_year(year) {
        366
    } else {
        365
    }
}

const DAYS_IN_400_YEARS: i64 = 146097;

// keep a 400 year margin below i32::MAX while stepping
const MAX_YEAR: i64 = i32::MAX as i64 - 401;

impl Gregorian {
    pub fn year(self) -> i32 {
        self.0
    }
    pub fn month(self) -> i32 {
        self.1
    }
    pub fn day(self) -> i32 {
        self.2
    }

    /// Does this date exist in the calendar, from 0001-01-01 onwards?
    pub fn is_valid(self) -> bool {
        let Gregorian(y, m, d) = self;
        y >= 1 && (1..=12).contains(&m) && d >= 1 && d <= days_in_month(y, m)
    }

    /// 0-based day of the year.
    pub fn day_of_year(self) -> i32 {
        let Gregorian(y, m, d) = self;
        (1..m).map(|m| days_in_month(y, m)).sum::<i32>() + d - 1
    }

    pub fn is_month_end(self) -> bool {
        self.day() == days_in_month(self.year(), self.month())
    }

    /// The following day.
    pub fn succ(self) -> Gregorian {
        let Gregorian(y, m, d) = self;
        if d < days_in_month(y, m) {
            Gregorian(y, m, d + 1)
        } else if m < 12 {
            Gregorian(y, m + 1, 1)
        } else {
            Gregorian(y + 1, 1, 1)
        }
    }

    /// The preceding day, i.e. `None` on 0001-01-01.
    pub fn pred(self) -> Option<Gregorian> {
        self.sub_days(1)
    }

    /// Count whole days from `self` to a date that is not earlier.
    ///
    /// This works in years, months, and days so that the result is a
    /// small exact integer however far apart the dates are.
    pub fn days_until(self, to: Gregorian) -> i64 {
        let Gregorian(y0, m0, d0) = self;
        let Gregorian(y1, m1, d1) = to;
        if y0 != y1 {
            let head = days_in_year(y0) - self.day_of_year();
            let whole = days_in_years(y1 as i64 - 1) - days_in_years(y0 as i64);
            head as i64 + whole + to.day_of_year() as i64
        } else if m0 != m1 {
            let head = days_in_month(y0, m0) - d0 + 1;
            let whole: i32 = (m0 + 1..m1).map(|m| days_in_month(y0, m)).sum();
            (head + whole + d1 - 1) as i64
        } else {
            (d1 - d0) as i64
        }
    }

    /// Step forward `days` days, or `None` if the year overflows.
    pub fn add_days(self, days: i64) -> Option<Gregorian> {
        if days == 0 {
            return Some(self);
        }
        let Gregorian(y, mut m, d) = self;
        // count from the first of the month so that Feb 29 never has
        // to land in a year without one
        let mut n = days + (d - 1) as i64;
        let y = y as i64 + 400 * (n / DAYS_IN_400_YEARS);
        n %= DAYS_IN_400_YEARS;
        if y > MAX_YEAR {
            return None;
        }
        let mut y = y as i32;
        loop {
            let span = if m <= 2 { days_in_year(y) } else { days_in_year(y + 1) };
            if n < span as i64 {
                break;
            }
            n -= span as i64;
            y += 1;
        }
        loop {
            let span = days_in_month(y, m) as i64;
            if n < span {
                break;
            }
            n -= span;
            m += 1;
            if m > 12 {
                m = 1;
                y += 1;
            }
        }
        Some(Gregorian(y, m, 1 + n as i32))
    }

    /// Step back `days` days, or `None` if that is before 0001-01-01.
    pub fn sub_days(self, days: i64) -> Option<Gregorian> {
        let Gregorian(y, mut m, d) = self;
        if days < d as i64 {
            return Some(Gregorian(y, m, d - days as i32));
        }
        let mut n = days - (d - 1) as i64;
        let y = y as i64 - 400 * (n / DAYS_IN_400_YEARS);
        n %= DAYS_IN_400_YEARS;
        if y < 1 {
            return None;
        }
        let mut y = y as i32;
        loop {
            let span = if m <= 2 { days_in_year(y - 1) } else { days_in_year(y) };
            if n < span as i64 {
                break;
            }
            n -= span as i64;
            y -= 1;
        }
        let date = loop {
            if n == 0 {
                break Gregorian(y, m, 1);
            }
            let (py, pm) = if m == 1 { (y - 1, 12) } else { (y, m - 1) };
            let span = days_in_month(py, pm) as i64;
            if n <= span {
                break Gregorian(py, pm, (span - n) as i32 + 1);
            }
            n -= span;
            y = py;
            m = pm;
        };
        Some(date).filter(|date| date.year() >= 1)
    }

    pub const fn mjd(self) -> MJD {
        let Gregorian(y, m, d) = self;
        let (y, m) = if m > 2 { (y, m + 1) } else { (y - 1, m + 13) };
        MJD(days_in_years(y as i64) as i32 + muldiv(m, 153, 5) + d - 679004)
    }
}

impl From<MJD> for Gregorian {
    fn from(mjd: MJD) -> Gregorian {
        let mut d = mjd.0 + 678881;
        let mut y = muldiv(d, 400, 146097) + 1;
        y -= (days_in_years(y as i64) > d as i64) as i32;
        d -= days_in_years(y as i64) as i32 - 31;
        let m = muldiv(d, 17, 520);
        d -= muldiv(m, 520, 17);
        if m > 10 {
            Gregorian(y + 1, m - 10, d)
        } else {
            Gregorian(y, m + 2, d)
        }
    }
}

impl From<Gregorian> for MJD {
    fn from(date: Gregorian) -> MJD {
        date.mjd()
    }
}

/// Days in the years 1 to `y` inclusive.
const fn days_in_years(y: i64) -> i64 {
    (y * 1461).div_euclid(4) - y.div_euclid(100) + y.div_euclid(400)
}

const fn muldiv(var: i32, mul: i32, div: i32) -> i32 {
    (var * mul).div_euclid(div)
}

/// Modified Julian Day number, used where the NIST list counts seconds
/// from an epoch. The arithmetic engines never go through day numbers.
#[allow(clippy::upper_case_acronyms)]
#[derive(Copy, Clone, Eq, Ord, PartialEq, PartialOrd)]
pub struct MJD(i32);

impl std::fmt::Display for MJD {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} mjd {}", Gregorian::from(*self), self.0)
    }
}

impl std::fmt::Debug for MJD {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "MJD({})", self)
    }
}

impl From<i32> for MJD {
    fn from(mjd: i32) -> MJD {
        MJD(mjd)
    }
}

impl std::ops::Add<i32> for MJD {
    type Output = MJD;
    fn add(self, days: i32) -> MJD {
        MJD(self.0 + days)
    }
}

impl std::ops::Sub<MJD> for MJD {
    type Output = i32;
    fn sub(self, other: MJD) -> i32 {
        self.0 - other.0
    }
}

/// Today's UTC date according to the system clock.
pub fn today() -> Gregorian {
    use std::time::SystemTime;
    let days = SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .map(|since| since.as_secs() / 86400)
        .unwrap_or(0);
    let days = i32::try_from(days).unwrap_or_default();
    Gregorian::from(MJD::from(Gregorian(1970, 1, 1)) + days)
}

use crate::date::*;
use crate::leapsecs::*;

/// A number of months since the previous change, and what happens then.
pub(crate) struct Gap(pub i32, pub Leap);

/// The year and month `n` months after January 1972.
pub(crate) fn month(n: i32) -> (i32, i32) {
    (1972 + n.div_euclid(12), n.rem_euclid(12) + 1)
}

/// Months after January 1972 of the start of the month after `date`.
pub(crate) fn months_after(date: Gregorian) -> i64 {
    (i64::from(date.year()) - 1972) * 12 + i64::from(date.month())
}

fn month_end(n: i32) -> Gregorian {
    let (year, month) = month(n);
    Gregorian(year, month, days_in_month(year, month))
}

impl std::convert::TryFrom<Vec<Gap>> for LeapSecs {
    type Error = Error;
    fn try_from(gaps: Vec<Gap>) -> Result<LeapSecs> {
        let mut list = Vec::new();
        let mut months: i32 = 0;
        let mut valid_through = month_end(-1);
        for Gap(gap, leap) in gaps {
            months = months.checked_add(gap).ok_or(Error::TooLong)?;
            // a change at the start of a month is a leap second at the
            // end of the previous month
            let date = month_end(months - 1);
            match leap {
                Leap::Zero => valid_through = date,
                Leap::Neg => {
                    list.push(LeapSec::new(date, -1));
                    valid_through = date;
                }
                Leap::Pos => {
                    list.push(LeapSec::new(date, 1));
                    valid_through = date;
                }
                Leap::Exp => {
                    // NIST expiry date is 28th of the month
                    let (year, month) = month(months);
                    valid_through = Gregorian(year, month, 28);
                }
            }
        }
        LeapSecs::new(list, valid_through)
    }
}

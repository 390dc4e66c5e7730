// The compact text form of a leap second table: the number of months
// between changes, starting from January 1972, each followed by the
// sign of the leap second, ending with the number of months to the
// expiry date and a question mark. A trailing number without a sign
// says that there is no change up to that month.

use std::convert::TryFrom;
use std::fmt::Write;

use crate::gaps::*;
use crate::leapsecs::*;

impl std::str::FromStr for LeapSecs {
    type Err = Error;
    fn from_str(s: &str) -> Result<LeapSecs> {
        enum What {
            Zero,
            Digit(i32),
            Sign(Leap),
            Other,
        }
        use What::*;
        let mut gaps = Vec::new();
        let mut digits = 0;
        let mut gap = 0;
        for c in s.chars() {
            if let Some(Gap(_, Leap::Exp)) = gaps.last() {
                return Err(Error::FromStr("end", c));
            }
            let what = match c {
                '0' => Zero,
                '1'..='9' => Digit(c as i32 - '0' as i32),
                '-' => Sign(Leap::Neg),
                '+' => Sign(Leap::Pos),
                '?' => Sign(Leap::Exp),
                _ => Other,
            };
            match (digits, what) {
                (0..=3, Digit(n)) => {
                    digits += 1;
                    gap = gap * 10 + n;
                }
                (1..=3, Zero) => {
                    digits += 1;
                    gap *= 10;
                }
                (1..=4, Sign(leap)) => {
                    gaps.push(Gap(gap, leap));
                    digits = 0;
                    gap = 0;
                }
                (0, _) => return Err(Error::FromStr("[1-9]", c)),
                (1..=3, _) => return Err(Error::FromStr("[0-9?+-]", c)),
                (_, _) => return Err(Error::FromStr("[?+-]", c)),
            };
        }
        if digits != 0 {
            gaps.push(Gap(gap, Leap::Zero));
        }
        LeapSecs::try_from(gaps)
    }
}

impl LeapSecs {
    /// Write the table in compact form, if it only has single leap
    /// seconds at the ends of months from 1972 onwards.
    pub fn compact(&self) -> Result<String> {
        let mut out = String::new();
        let mut prev = 0;
        for &leap in self {
            let sign = match leap.delta() {
                1 => '+',
                -1 => '-',
                _ => return Err(Error::LargeLeap(leap)),
            };
            if !leap.date().is_month_end() {
                return Err(Error::NotMonthEnd(leap));
            }
            let next = months_after(leap.date());
            if next <= prev {
                return Err(Error::FalseStart);
            }
            write!(out, "{}{}", next - prev, sign)?;
            prev = next;
        }
        let expiry = self.valid_through();
        if expiry.day() == 28 && months_after(expiry) - 1 > prev {
            write!(out, "{}?", months_after(expiry) - 1 - prev)?;
        } else if expiry.is_month_end() && months_after(expiry) > prev {
            write!(out, "{}", months_after(expiry) - prev)?;
        } else if expiry != self.iter().last().map_or(expiry, |leap| leap.date()) {
            return Err(Error::BadDate(expiry));
        }
        Ok(out)
    }
}

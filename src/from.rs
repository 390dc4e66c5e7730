use std::borrow::Cow;

use crate::date::*;
use crate::leapsecs::*;

/// An immutable, validated leap second table.
///
/// Entries are in strictly increasing date order. `valid_through` is
/// the last date for which the table is known to be complete; beyond it
/// any results are projections.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LeapSecs {
    list: Cow<'static, [LeapSec]>,
    valid_through: Gregorian,
}

const LAST_DAY: Gregorian = Gregorian(i32::MAX, 12, 31);

static NONE: LeapSecs = LeapSecs::from_static(&[], LAST_DAY);

impl LeapSecs {
    /// Check and wrap a list of leap seconds.
    pub fn new(list: Vec<LeapSec>, valid_through: Gregorian) -> Result<LeapSecs> {
        let mut prev: Option<LeapSec> = None;
        for &this in list.iter() {
            // the day after a leap second must exist
            if !this.date().is_valid() || this.date() >= LAST_DAY {
                return Err(Error::BadDate(this.date()));
            }
            if this.delta() == 0 {
                return Err(Error::NoLeap(this));
            }
            if this.delta() <= -60 || this.delta() >= 60 {
                return Err(Error::LargeLeap(this));
            }
            match prev {
                Some(prev) if prev.date() >= this.date() => {
                    return Err(Error::OutOfOrder(prev, this));
                }
                _ => prev = Some(this),
            }
        }
        if !valid_through.is_valid() {
            return Err(Error::BadDate(valid_through));
        }
        match prev {
            Some(last) if last.date() > valid_through => {
                Err(Error::TooLate(valid_through, last))
            }
            _ => Ok(LeapSecs { list: Cow::Owned(list), valid_through }),
        }
    }

    /// A table without leap seconds, where every day has 86400 seconds.
    pub fn none() -> &'static LeapSecs {
        &NONE
    }

    pub(crate) const fn from_static(
        list: &'static [LeapSec],
        valid_through: Gregorian,
    ) -> LeapSecs {
        LeapSecs { list: Cow::Borrowed(list), valid_through }
    }

    pub fn valid_through(&self) -> Gregorian {
        self.valid_through
    }

    pub fn as_slice(&self) -> &[LeapSec] {
        &self.list
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LeapSec> {
        self.list.iter()
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }
}

impl<'a> IntoIterator for &'a LeapSecs {
    type Item = &'a LeapSec;
    type IntoIter = std::slice::Iter<'a, LeapSec>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> From<&'a LeapSecs> for &'a [LeapSec] {
    fn from(s: &'a LeapSecs) -> &'a [LeapSec] {
        s.as_slice()
    }
}

impl From<LeapSecs> for Vec<LeapSec> {
    fn from(s: LeapSecs) -> Vec<LeapSec> {
        s.list.into_owned()
    }
}

#[cfg(test)]
mod test {
    use crate::*;

    fn check(list: Vec<LeapSec>) -> Result<LeapSecs> {
        LeapSecs::new(list, Gregorian(2040, 1, 1))
    }

    #[test]
    fn test() {
        let table = check(vec![LeapSec::pos(2016, 12, 31), LeapSec::neg(2030, 6, 30)]);
        assert_eq!(table.unwrap().len(), 2);
        assert!(check(Vec::new()).unwrap().is_empty());

        let err = check(vec![LeapSec::pos(2017, 2, 29)]).unwrap_err();
        assert!(matches!(err, Error::BadDate(Gregorian(2017, 2, 29))));

        let err = check(vec![LeapSec::new(Gregorian(2016, 12, 31), 0)]).unwrap_err();
        assert!(matches!(err, Error::NoLeap(_)));

        let err = check(vec![LeapSec::new(Gregorian(2016, 12, 31), -60)]).unwrap_err();
        assert!(matches!(err, Error::LargeLeap(_)));

        let err = check(vec![LeapSec::pos(2016, 12, 31), LeapSec::pos(2016, 6, 30)])
            .unwrap_err();
        assert!(matches!(err, Error::OutOfOrder(..)));

        let err = check(vec![LeapSec::pos(2016, 12, 31), LeapSec::neg(2016, 12, 31)])
            .unwrap_err();
        assert!(matches!(err, Error::OutOfOrder(..)));

        let err = LeapSecs::new(vec![LeapSec::pos(2016, 12, 31)], Gregorian(2016, 6, 30))
            .unwrap_err();
        assert!(matches!(err, Error::TooLate(..)));

        let last = Gregorian(i32::MAX, 12, 31);
        let err = LeapSecs::new(vec![LeapSec::pos(i32::MAX, 12, 31)], last).unwrap_err();
        assert!(matches!(err, Error::BadDate(date) if date == last));
        let table = LeapSecs::new(vec![LeapSec::pos(i32::MAX, 12, 30)], last).unwrap();
        let start = table.utc(i32::MAX, 12, 30, 0, 0, 0.0).unwrap();
        let end = table.utc(i32::MAX, 12, 31, 0, 0, 0.0).unwrap();
        assert_eq!(table.after(start, 86401.0).unwrap(), end);
        assert!(matches!(table.after(end, 86400.0), Err(Error::OutOfRange(_))));

        let list: Vec<LeapSec> = LeapSecs::builtin().clone().into();
        assert_eq!(list.len(), LeapSecs::builtin().len());
    }
}

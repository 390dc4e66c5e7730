use std::fmt::Write;

use super::{date2ntp, UncheckedLeap};
use crate::date::*;
use crate::leapsecs::*;

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// The rows of the list: each date that DTAI changes, starting with
/// 10 seconds at 1972-01-01.
fn rows(table: &LeapSecs) -> Result<Vec<UncheckedLeap>> {
    let start = Gregorian(1972, 1, 1);
    let mut dtai = 10;
    let mut rows = vec![(date2ntp(start), dtai, start)];
    for &leap in table {
        let date = leap.date().succ();
        if date <= start {
            return Err(Error::FalseStart);
        }
        dtai += i64::from(leap.delta());
        rows.push((date2ntp(date), dtai, date));
    }
    Ok(rows)
}

/// Write a leap second table in NIST format, with its checksum.
pub fn format(table: &LeapSecs, updated: Gregorian) -> Result<String> {
    if table.valid_through().year() > 9999 {
        return Err(Error::BadDate(table.valid_through()));
    }
    let mut out = String::new();
    let updated = date2ntp(updated);
    let expires = date2ntp(table.valid_through());
    let rows = rows(table)?;
    writeln!(out, "#\tleap seconds table written by utcspan")?;
    writeln!(out, "#")?;
    writeln!(out, "#$\t{}", updated)?;
    writeln!(out, "#@\t{}", expires)?;
    writeln!(out, "#")?;
    for &(ntp, dtai, date) in &rows {
        let month = MONTHS[(date.month() - 1) as usize];
        writeln!(out, "{}\t{}\t# {} {} {}", ntp, dtai, date.day(), month, date.year())?;
    }
    writeln!(out, "#")?;
    writeln!(out, "#h\t{}", super::hash::hash(updated, expires, &rows)?)?;
    Ok(out)
}

#[cfg(test)]
mod test {
    use crate::*;

    #[test]
    fn test() {
        let table = LeapSecs::new(
            vec![LeapSec::pos(2030, 6, 30), LeapSec::neg(2031, 12, 31)],
            Gregorian(2032, 6, 28),
        )
        .unwrap();
        let text = nist::format(&table, Gregorian(2030, 1, 1)).unwrap();
        assert!(text.contains("\n4118083200\t11\t# 1 Jul 2030\n"));
        assert!(text.contains("\n4165516800\t10\t# 1 Jan 2032\n"));
        assert_eq!(nist::read_str(&text).unwrap(), table);

        let early = LeapSecs::new(vec![LeapSec::pos(1971, 12, 31)], Gregorian(1980, 1, 1));
        assert!(matches!(nist::format(&early.unwrap(), today()), Err(Error::FalseStart)));
        assert!(matches!(nist::format(LeapSecs::none(), today()), Err(Error::BadDate(_))));
    }
}

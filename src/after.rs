use crate::date::*;
use crate::leapsecs::*;
use crate::utc::UtcTime;

// more than i32::MAX years
const MAX_DAYS: f64 = 1e12;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum Direction {
    Forward,
    Backward,
}

use Direction::*;

impl Direction {
    /// The midnights that start and end a leap second day, in the
    /// order they are reached when walking in this direction.
    fn ends(self, leap: LeapSec) -> (Gregorian, Gregorian) {
        match self {
            Forward => (leap.date(), leap.date().succ()),
            Backward => (leap.date().succ(), leap.date()),
        }
    }

    /// Leap-free seconds between midnights, walking from `here`.
    fn span(self, here: Gregorian, there: Gregorian) -> f64 {
        let days = match self {
            Forward => here.days_until(there),
            Backward => there.days_until(here),
        };
        (days * 86400) as f64
    }

    /// Does a walk of `dist` stop before (or, going backward, exactly at)
    /// the end of a stretch `span` seconds long?
    fn stops_within(self, dist: f64, span: f64) -> bool {
        match self {
            Forward => dist < span,
            Backward => dist <= span,
        }
    }

    /// Seconds since midnight after walking `dist` into a day.
    fn into_day(self, dist: f64, length: f64) -> f64 {
        match self {
            Forward => dist,
            Backward => length - dist,
        }
    }
}

impl LeapSecs {
    /// The UTC time `offset` SI seconds after `start` (before it, if
    /// `offset` is negative).
    pub fn after(&self, start: UtcTime, offset: f64) -> Result<UtcTime> {
        if !offset.is_finite() {
            return Err(Error::OutOfRange(offset));
        }
        let date = start.date();
        let dist = offset + start.seconds_since_midnight();
        let list = self.as_slice();
        let (behind, ahead) = list.split_at(list.partition_point(|leap| leap.date() < date));
        if dist == 0.0 {
            Ok(UtcTime::midnight(date))
        } else if dist > 0.0 {
            self.walk(Forward, ahead.iter(), date, dist, offset)
        } else {
            self.walk(Backward, behind.iter().rev(), date, -dist, offset)
        }
    }

    /// Walk `dist` seconds from midnight on `date`, crossing one leap
    /// second day at a time until no more leap seconds are in reach.
    fn walk<'a, I>(
        &self,
        dir: Direction,
        leaps: I,
        mut date: Gregorian,
        mut dist: f64,
        offset: f64,
    ) -> Result<UtcTime>
    where
        I: Iterator<Item = &'a LeapSec>,
    {
        for &leap in leaps {
            let (near, far) = dir.ends(leap);
            let gap = dir.span(date, near);
            if dir.stops_within(dist, gap) {
                break;
            }
            dist -= gap;
            date = near;
            let length = leap.day_length() as f64;
            if dir.stops_within(dist, length) {
                return self.clock(leap.date(), dir.into_day(dist, length));
            }
            dist -= length;
            date = far;
        }

        // every day from here to the destination has 86400 seconds
        let days = match dir {
            Forward => (dist / 86400.0).floor(),
            Backward => (dist / 86400.0).ceil(),
        };
        if days > MAX_DAYS {
            return Err(Error::OutOfRange(offset));
        }
        let mut days = days as i64;
        let mut sod = match dir {
            Forward => dist - days as f64 * 86400.0,
            Backward => days as f64 * 86400.0 - dist,
        };
        // the division can round across a day boundary
        let step = if dir == Forward { 1 } else { -1 };
        if sod < 0.0 {
            sod += 86400.0;
            days -= step;
        } else if sod >= 86400.0 {
            sod -= 86400.0;
            days += step;
        }
        let date = match dir {
            Forward => date.add_days(days),
            Backward => date.sub_days(days),
        };
        match date {
            Some(date) => self.clock(date, sod),
            None => Err(Error::OutOfRange(offset)),
        }
    }

    /// The time `sod` seconds after midnight on `date`.
    fn clock(&self, date: Gregorian, sod: f64) -> Result<UtcTime> {
        let minutes = (sod / 60.0).floor();
        let hours = (minutes / 60.0).floor();
        // the date is already in place, so the end of the day (and any
        // leap second) stays in its last minute instead of rolling over
        let (hour, minute, second) = if hours >= 24.0 || minutes >= 1439.0 {
            (23, 59, sod - 86340.0)
        } else {
            (hours as i32, (minutes - hours * 60.0) as i32, sod - minutes * 60.0)
        };
        let Gregorian(y, m, d) = date;
        self.utc(y, m, d, hour, minute, second.max(0.0))
    }
}

use crate::leapsecs::*;
use crate::utc::UtcTime;

impl LeapSecs {
    /// Signed SI seconds from `from` to `to`.
    ///
    /// Whole days and leap seconds are counted exactly as integers; only
    /// the two times of day are floating point, so precision does not
    /// depend on how far apart the dates are.
    pub fn elapsed(&self, from: UtcTime, to: UtcTime) -> f64 {
        if to < from {
            return -self.elapsed(to, from);
        }
        let (start, end) = (from.date(), to.date());
        let days = start.days_until(end);
        // a leap second belongs to the day it ends, so one on the
        // last date has not happened by its midnight
        let leaps: i64 = self
            .iter()
            .skip_while(|leap| leap.date() < start)
            .take_while(|leap| leap.date() < end)
            .map(|leap| leap.delta() as i64)
            .sum();
        (days * 86400 + leaps) as f64 - from.seconds_since_midnight()
            + to.seconds_since_midnight()
    }
}

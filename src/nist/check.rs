use std::convert::TryFrom;

use super::{ntp_epoch, UncheckedList, NTP_DAY};
use crate::date::*;
use crate::leapsecs::*;

fn timestamp(ntp: i64) -> Result<Gregorian> {
    if ntp.rem_euclid(NTP_DAY) != 0 {
        return Err(Error::Midnight(ntp));
    }
    // about ten thousand years
    let days = ntp / NTP_DAY;
    if !(0..1 << 22).contains(&days) {
        return Err(Error::Nom(format!("timestamp out of range ({})", ntp)));
    }
    Ok(Gregorian::from(ntp_epoch() + days as i32))
}

impl TryFrom<UncheckedList> for LeapSecs {
    type Error = Error;
    fn try_from(u: UncheckedList) -> Result<LeapSecs> {
        let mut list = Vec::new();
        let mut dtai = None;
        for &(ntp, tai, date) in &u.leapsecs {
            let day = timestamp(ntp)?;
            if day != date {
                return Err(Error::TimeDate(ntp, date));
            }
            match dtai {
                None if day != Gregorian(1972, 1, 1) || tai != 10 => {
                    return Err(Error::FalseStart);
                }
                None => (),
                Some(prev) if tai == prev => return Err(Error::NoChange(day)),
                Some(prev) => {
                    // the leap second is at the end of the day before
                    // DTAI changes
                    let date = day.pred().ok_or(Error::FalseStart)?;
                    let delta = i32::try_from(tai - prev).unwrap_or(i32::MAX);
                    list.push(LeapSec::new(date, delta));
                }
            }
            dtai = Some(tai);
        }
        if dtai.is_none() {
            return Err(Error::FalseStart);
        }
        super::hash::check(&u)?;
        LeapSecs::new(list, timestamp(u.expires)?)
    }
}

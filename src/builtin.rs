use crate::date::Gregorian;
use crate::leapsecs::*;

// From the IERS leap-seconds.list file that expires 28 June 2026.
// When the list is updated, extend LIST and VALID_THROUGH together.

const VALID_THROUGH: Gregorian = Gregorian(2026, 6, 28);

const LIST: [LeapSec; 27] = [
    LeapSec::pos(1972, 6, 30),
    LeapSec::pos(1972, 12, 31),
    LeapSec::pos(1973, 12, 31),
    LeapSec::pos(1974, 12, 31),
    LeapSec::pos(1975, 12, 31),
    LeapSec::pos(1976, 12, 31),
    LeapSec::pos(1977, 12, 31),
    LeapSec::pos(1978, 12, 31),
    LeapSec::pos(1979, 12, 31),
    LeapSec::pos(1981, 6, 30),
    LeapSec::pos(1982, 6, 30),
    LeapSec::pos(1983, 6, 30),
    LeapSec::pos(1985, 6, 30),
    LeapSec::pos(1987, 12, 31),
    LeapSec::pos(1989, 12, 31),
    LeapSec::pos(1990, 12, 31),
    LeapSec::pos(1992, 6, 30),
    LeapSec::pos(1993, 6, 30),
    LeapSec::pos(1994, 6, 30),
    LeapSec::pos(1995, 12, 31),
    LeapSec::pos(1997, 6, 30),
    LeapSec::pos(1998, 12, 31),
    LeapSec::pos(2005, 12, 31),
    LeapSec::pos(2008, 12, 31),
    LeapSec::pos(2012, 6, 30),
    LeapSec::pos(2015, 6, 30),
    LeapSec::pos(2016, 12, 31),
];

static BUILTIN: LeapSecs = LeapSecs::from_static(&LIST, VALID_THROUGH);

impl LeapSecs {
    /// The embedded table of historical leap seconds.
    pub fn builtin() -> &'static LeapSecs {
        &BUILTIN
    }
}

//! Exact elapsed-time and offset arithmetic on UTC, counting the leap
//! seconds in a [`LeapSecs`] table.

pub mod date;
pub mod from;
pub mod leapsecs;
pub mod nist;
pub mod txt;
pub mod utc;

mod after;
mod builtin;
mod elapsed;
mod gaps;
mod iso;

pub use crate::date::*;
pub use crate::leapsecs::*;
pub use crate::utc::UtcTime;

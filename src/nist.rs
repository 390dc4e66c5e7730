// read and write the NIST leap-seconds.list

use anyhow::Context;
use std::convert::TryInto;
use std::path::Path;

use crate::date::*;
use crate::leapsecs::*;

mod check;
mod fmt;
mod hash;
mod parse;

pub use fmt::format;

pub fn read_bytes(data: &[u8]) -> Result<LeapSecs> {
    read_str(std::str::from_utf8(data)?)
}

pub fn read_file(name: impl AsRef<Path>) -> anyhow::Result<LeapSecs> {
    let name = name.as_ref();
    let data = std::fs::read(name)
        .with_context(|| format!("failed to read {}", name.display()))?;
    read_bytes(&data).with_context(|| format!("failed to load {}", name.display()))
}

pub fn read_str(text: &str) -> Result<LeapSecs> {
    match parse::parse(text) {
        Ok((_, unchecked)) => unchecked.try_into(),
        Err(nom::Err::Error(err)) | Err(nom::Err::Failure(err)) => {
            Err(Error::Nom(nom::error::convert_error(text, err)))
        }
        Err(nom::Err::Incomplete(_)) => Err(Error::Nom("incomplete input".to_string())),
    }
}

////////////////////////////////////////////////////////////////////////

/// A SHA-1 digest as it appears on the `#h` line.
// public for error reporting
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Hash([u32; 5]);

impl std::fmt::Display for Hash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [a, b, c, d, e] = self.0;
        write!(f, "{:08x} {:08x} {:08x} {:08x} {:08x}", a, b, c, d, e)
    }
}

// timestamp, DTAI, date
type UncheckedLeap = (i64, i64, Gregorian);

#[derive(Clone, Debug, Default)]
struct UncheckedList {
    pub updated: i64,
    pub expires: i64,
    pub leapsecs: Vec<UncheckedLeap>,
    pub hash: Hash,
}

const NTP_DAY: i64 = 86400;

/// NTP timestamps count seconds from 1900-01-01.
fn ntp_epoch() -> MJD {
    Gregorian(1900, 1, 1).mjd()
}

fn date2ntp(date: Gregorian) -> i64 {
    i64::from(date.mjd() - ntp_epoch()) * NTP_DAY
}

////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod test {
    use crate::*;

    const LIST: &str = include_str!("../data/leap-seconds.list");

    #[test]
    fn test() {
        let original = nist::read_str(LIST).expect("parse leap-seconds.list");
        assert_eq!(&original, LeapSecs::builtin());
        let printed = nist::format(&original, Gregorian(2025, 7, 8))
            .expect("formatting leap seconds");
        let parsed = nist::read_str(&printed).expect("re-parsing leap-seconds");
        assert_eq!(original, parsed);
        assert_eq!(nist::read_bytes(printed.as_bytes()).unwrap(), parsed);
    }

    #[test]
    fn file() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/data/leap-seconds.list");
        assert_eq!(&nist::read_file(path).unwrap(), LeapSecs::builtin());
        let err = nist::read_file("no/such/leap-seconds.list").unwrap_err();
        assert!(err.to_string().contains("no/such/leap-seconds.list"));
    }

    #[test]
    fn errors() {
        let broken = LIST.replace("#$\t", "#$\t1");
        assert!(matches!(nist::read_str(&broken), Err(Error::Checksum(..))));
        let broken = LIST.replace("2272060800\t10", "2272060801\t10");
        assert!(matches!(nist::read_str(&broken), Err(Error::Midnight(2272060801))));
        let broken = LIST.replace("# 1 Jan 2017", "# 2 Jan 2017");
        assert!(matches!(nist::read_str(&broken), Err(Error::TimeDate(..))));
        let broken = LIST.replace("2272060800\t10", "2272060800\t11");
        assert!(matches!(nist::read_str(&broken), Err(Error::FalseStart)));
        let broken = LIST.replace("\t37\t", "\t36\t");
        assert!(matches!(
            nist::read_str(&broken),
            Err(Error::NoChange(Gregorian(2017, 1, 1)))
        ));
        assert!(matches!(nist::read_str("#\n"), Err(Error::Nom(_))));
        assert!(matches!(nist::read_bytes(b"\xff"), Err(Error::Unicode(_))));
    }

    #[test]
    fn hash() {
        let hash = nist::Hash([0x16edd0f0, 0x3666784f, 0x37db6bdd, 0xe74ced87, 0x59af48f1]);
        assert_eq!(hash.to_string(), "16edd0f0 3666784f 37db6bdd e74ced87 59af48f1");
        let hash = nist::Hash([0, 1, 2, 0xa, 0xffffffff]);
        assert_eq!(hash.to_string(), "00000000 00000001 00000002 0000000a ffffffff");
    }
}

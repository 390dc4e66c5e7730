use ring::digest::*;
use std::convert::TryInto;
use std::fmt::Write;

use super::{Hash, UncheckedLeap, UncheckedList};
use crate::leapsecs::*;

fn sha1(input: &str) -> Hash {
    let digest = digest(&SHA1_FOR_LEGACY_USE_ONLY, input.as_bytes());
    let mut hash = Hash::default();
    for (word, bytes) in hash.0.iter_mut().zip(digest.as_ref().chunks_exact(4)) {
        // chunks_exact always yields 4 bytes
        if let Ok(bytes) = bytes.try_into() {
            *word = u32::from_be_bytes(bytes);
        }
    }
    hash
}

/// The digest covers the digits of the timestamps and the DTAI values,
/// without any whitespace or punctuation.
fn hashin(updated: i64, expires: i64, leapsecs: &[UncheckedLeap]) -> Result<String> {
    let mut hashin = String::new();
    write!(hashin, "{}{}", updated, expires)?;
    for (ntp, dtai, _) in leapsecs {
        write!(hashin, "{}{}", ntp, dtai)?;
    }
    Ok(hashin)
}

pub(super) fn hash(updated: i64, expires: i64, leapsecs: &[UncheckedLeap]) -> Result<Hash> {
    Ok(sha1(&hashin(updated, expires, leapsecs)?))
}

pub(super) fn check(u: &UncheckedList) -> Result<()> {
    let hashin = hashin(u.updated, u.expires, &u.leapsecs)?;
    let output = sha1(&hashin);
    if u.hash != output {
        Err(Error::Checksum(u.hash.clone(), output, hashin))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test() {
        // SHA-1 of the empty string
        assert_eq!(
            sha1("").to_string(),
            "da39a3ee 5e6b4b0d 3255bfef 95601890 afd80709"
        );
        assert_eq!(
            sha1("abc").to_string(),
            "a9993e36 4706816a ba3e2571 7850c26c 9cd0d89d"
        );
        let leapsecs = [(2272060800, 10, crate::Gregorian(1972, 1, 1))];
        assert_eq!(
            hashin(1, 2, &leapsecs).unwrap(),
            "12227206080010"
        );
    }
}

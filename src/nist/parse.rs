use super::{Hash, UncheckedLeap, UncheckedList};
use crate::date::*;

use nom::branch::*;
use nom::bytes::complete::*;
use nom::character::complete::*;
use nom::combinator::*;
use nom::error::VerboseError;
use nom::multi::*;
use nom::sequence::*;
use std::str::FromStr;

type Result<'a, O> = nom::IResult<&'a str, O, VerboseError<&'a str>>;

fn dec32<'a>(input: &'a str) -> Result<'a, i32> {
    map_res(digit1, i32::from_str)(input)
}

fn dec64<'a>(input: &'a str) -> Result<'a, i64> {
    map_res(digit1, i64::from_str)(input)
}

fn hex32<'a>(input: &'a str) -> Result<'a, u32> {
    map_res(hex_digit1, |s| u32::from_str_radix(s, 16))(input)
}

fn month<'a>(input: &'a str) -> Result<'a, i32> {
    alt((
        value(1, tag("Jan")),
        value(2, tag("Feb")),
        value(3, tag("Mar")),
        value(4, tag("Apr")),
        value(5, tag("May")),
        value(6, tag("Jun")),
        value(7, tag("Jul")),
        value(8, tag("Aug")),
        value(9, tag("Sep")),
        value(10, tag("Oct")),
        value(11, tag("Nov")),
        value(12, tag("Dec")),
    ))(input)
}

fn date<'a>(input: &'a str) -> Result<'a, Gregorian> {
    map(
        tuple((
            preceded(space1, dec32),
            preceded(space1, month),
            preceded(space1, dec32),
        )),
        |(d, m, y)| Gregorian(y, m, d),
    )(input)
}

fn empty<'a>(input: &'a str) -> Result<'a, ()> {
    value((), pair(tag("#"), line_ending))(input)
}

fn comment<'a>(input: &'a str) -> Result<'a, ()> {
    value((), tuple((tag("#"), space1, not_line_ending, line_ending)))(input)
}

fn ignore<'a>(input: &'a str) -> Result<'a, ()> {
    value((), many0_count(alt((empty, comment))))(input)
}

fn updated<'a>(input: &'a str) -> Result<'a, i64> {
    delimited(pair(tag("#$"), space1), dec64, line_ending)(input)
}

fn expires<'a>(input: &'a str) -> Result<'a, i64> {
    delimited(pair(tag("#@"), space1), dec64, line_ending)(input)
}

fn leapsec<'a>(input: &'a str) -> Result<'a, UncheckedLeap> {
    tuple((
        terminated(dec64, space1),
        terminated(dec64, space1),
        delimited(tag("#"), date, pair(space0, line_ending)),
    ))(input)
}

fn leapsecs<'a>(input: &'a str) -> Result<'a, Vec<UncheckedLeap>> {
    many1(terminated(leapsec, ignore))(input)
}

fn hash<'a>(input: &'a str) -> Result<'a, Hash> {
    map(
        delimited(
            tag("#h"),
            count(preceded(space1, hex32), 5),
            pair(space0, line_ending),
        ),
        |words| {
            let mut hash = Hash::default();
            hash.0.copy_from_slice(&words);
            hash
        },
    )(input)
}

pub(super) fn parse<'a>(input: &'a str) -> Result<'a, UncheckedList> {
    all_consuming(map(
        tuple((
            preceded(ignore, updated),
            preceded(ignore, expires),
            preceded(ignore, leapsecs),
            terminated(hash, ignore),
        )),
        |(updated, expires, leapsecs, hash)| UncheckedList {
            updated,
            expires,
            leapsecs,
            hash,
        },
    ))(input)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn lines() {
        assert_eq!(month("Sep rest").unwrap(), (" rest", 9));
        assert_eq!(
            leapsec("3692217600\t37\t# 1 Jan 2017\n").unwrap(),
            ("", (3692217600, 37, Gregorian(2017, 1, 1)))
        );
        assert_eq!(
            leapsec("2272060800 10 #  1 Jan 1972\r\n").unwrap(),
            ("", (2272060800, 10, Gregorian(1972, 1, 1)))
        );
        assert!(leapsec("2272060800\t10\n").is_err());
        assert_eq!(ignore("#\n#\tcomment\n#$\t1").unwrap().0, "#$\t1");
        assert_eq!(updated("#$\t3945196800\n").unwrap().1, 3945196800);
        let (rest, hash) = hash("#h\t16edd0f0 3666784f 37db6bdd e74ced87 59af48f1\n").unwrap();
        assert_eq!(rest, "");
        assert_eq!(hash.0, [0x16edd0f0, 0x3666784f, 0x37db6bdd, 0xe74ced87, 0x59af48f1]);
        assert!(super::hash("#h\t16edd0f0 3666784f\n").is_err());
    }
}

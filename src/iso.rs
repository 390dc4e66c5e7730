// ISO 8601 text for UTC times: YYYY-MM-DDThh:mm:ss[.fff]Z

use nom::bytes::complete::*;
use nom::character::complete::*;
use nom::combinator::*;
use nom::sequence::*;

use crate::leapsecs::*;
use crate::utc::UtcTime;

type IResult<'a, O> = nom::IResult<&'a str, O, nom::error::Error<&'a str>>;

fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

fn number<'a>(min: usize, max: usize) -> impl FnMut(&'a str) -> IResult<'a, i32> {
    map_res(take_while_m_n(min, max, is_digit), |s: &str| s.parse::<i32>())
}

fn seconds<'a>(input: &'a str) -> IResult<'a, f64> {
    map_res(
        recognize(pair(
            take_while_m_n(2, 2, is_digit),
            opt(pair(char('.'), digit1)),
        )),
        |s: &str| s.parse::<f64>(),
    )(input)
}

type Fields = (i32, i32, i32, i32, i32, f64);

fn fields<'a>(input: &'a str) -> IResult<'a, Fields> {
    all_consuming(tuple((
        terminated(number(4, 9), char('-')),
        terminated(number(2, 2), char('-')),
        terminated(number(2, 2), char('T')),
        terminated(number(2, 2), opt(char(':'))),
        terminated(number(2, 2), opt(char(':'))),
        terminated(seconds, char('Z')),
    )))(input)
}

impl LeapSecs {
    /// Parse an ISO 8601 UTC time, where the colons are optional.
    pub fn parse_utc(&self, text: &str) -> Result<UtcTime> {
        match fields(text) {
            Ok((_, (year, month, day, hour, minute, second))) => {
                self.utc(year, month, day, hour, minute, second)
            }
            Err(_) => Err(Error::MalformedInput(text.to_string())),
        }
    }
}

impl UtcTime {
    /// ISO 8601 with `digits` decimal places, truncated, not rounded.
    pub fn format(&self, digits: usize) -> String {
        // shortest round-trip decimal, never in exponent form
        let second = self.second().to_string();
        let (whole, fraction) = second.split_once('.').unwrap_or((second.as_str(), ""));
        let mut out = format!(
            "{}T{:02}:{:02}:{:0>2}",
            self.date(),
            self.hour(),
            self.minute(),
            whole
        );
        if digits > 0 {
            out.push_str(&format!(".{:0<digits$.digits$}", fraction, digits = digits));
        }
        out.push('Z');
        out
    }
}

impl std::fmt::Display for UtcTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.format(3))
    }
}

impl std::str::FromStr for UtcTime {
    type Err = Error;
    fn from_str(s: &str) -> Result<UtcTime> {
        LeapSecs::builtin().parse_utc(s)
    }
}

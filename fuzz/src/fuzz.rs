#![no_main]
use libfuzzer_sys::fuzz_target;
use std::convert::TryInto;
use std::fmt::Write;
use std::str::FromStr;
use utcspan::*;

fn fuzz_iso(data: &[u8]) {
    let text = match std::str::from_utf8(data) {
        Ok(text) => text,
        Err(_) => return,
    };
    let parsed = match UtcTime::from_str(text) {
        Ok(parsed) => parsed,
        Err(Error::MalformedInput(_)) => return,
        Err(Error::InvalidField { .. }) => return,
        Err(err) => panic!("\ninput {:?}\nerror {}\n", text, err),
    };
    let output = parsed.format(20);
    let reparsed = UtcTime::from_str(&output).unwrap();
    assert_eq!(
        (reparsed.date(), reparsed.hour(), reparsed.minute()),
        (parsed.date(), parsed.hour(), parsed.minute())
    );
    // the digits are truncated after 20 places
    assert!((reparsed.second() - parsed.second()).abs() < 1e-19, "{}", output);
}

fn fuzz_offset(data: &[u8]) {
    if data.len() < 16 {
        return;
    }
    let (a, b) = data.split_at(8);
    let start = u64::from_le_bytes(a[..8].try_into().unwrap());
    let offset = f64::from_le_bytes(b[..8].try_into().unwrap());
    if !offset.is_finite() || offset.abs() > 1e12 {
        return;
    }
    // somewhere in the years 1 to 9999
    let days = (start % 3_652_059) as i64;
    let date = Gregorian(1, 1, 1).add_days(days).unwrap();
    let from = UtcTime::new(date.year(), date.month(), date.day(), 0, 0, 0.0).unwrap();
    let table = LeapSecs::builtin();
    let to = match table.after(from, offset) {
        Ok(to) => to,
        Err(Error::OutOfRange(_)) => return,
        Err(err) => panic!("\n{} + {}\nerror {}\n", from, offset, err),
    };
    if offset < 0.0 {
        assert!(to <= from);
    } else {
        assert!(to >= from);
    }
    let back = table.elapsed(from, to);
    let tolerance = offset.abs().max(1.0) * 1e-9;
    assert!((back - offset).abs() <= tolerance, "{} + {} = {} ({})", from, offset, to, back);
}

fn fuzz_txt(data: &[u8]) {
    if data.is_empty() {
        return;
    }
    let mut input = String::new();
    for &byte in &data[1..] {
        let sign = if byte < 128 { "-" } else { "+" };
        write!(input, "{}{}", byte % 128 + 1, sign).unwrap();
    }
    write!(input, "{}?", data[0] as u16 + 1).unwrap();
    let parsed = match LeapSecs::from_str(&input) {
        Ok(parsed) => parsed,
        Err(e) => panic!("{}\n{}", input, e),
    };
    assert_eq!(input, parsed.compact().unwrap());
    if parsed.valid_through().year() <= 9999 {
        let printed = nist::format(&parsed, parsed.valid_through()).unwrap();
        assert_eq!(nist::read_str(&printed).unwrap(), parsed);
    }
}

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }
    let rest = &data[1..];
    match data[0] {
        0 => fuzz_iso(rest),
        1 => fuzz_offset(rest),
        2 => fuzz_txt(rest),
        _ => (),
    }
});

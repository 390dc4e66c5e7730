use anyhow::*;
use utcspan::{nist, today, LeapSecs, UtcTime};

const USAGE: &str = "usage: utcspan [--leap-seconds FILE | --no-leap-seconds] <command>
commands:
    elapsed FROM TO      SI seconds from FROM to TO
    after FROM SECONDS   the UTC time SECONDS after FROM
    table                the leap second table in compact form
    nist                 the leap second table as a leap-seconds.list";

fn main() -> Result<()> {
    let mut args: Vec<String> = std::env::args().skip(1).collect();
    let loaded;
    let table = match args.first().map(String::as_str) {
        Some("--leap-seconds") if args.len() > 1 => {
            loaded = nist::read_file(&args[1])?;
            args.drain(..2);
            &loaded
        }
        Some("--no-leap-seconds") => {
            args.remove(0);
            LeapSecs::none()
        }
        _ => LeapSecs::builtin(),
    };
    if table.valid_through() < today() {
        eprintln!(
            "warning: leap second table expired after {}, later results are projections",
            table.valid_through()
        );
    }
    let args: Vec<&str> = args.iter().map(String::as_str).collect();
    match args.as_slice() {
        ["elapsed", from, to] => {
            let from = parse(table, from)?;
            let to = parse(table, to)?;
            println!("{}", table.elapsed(from, to));
        }
        ["after", from, seconds] => {
            let from = parse(table, from)?;
            let seconds: f64 = seconds
                .parse()
                .with_context(|| format!("invalid number of seconds {:?}", seconds))?;
            println!("{}", table.after(from, seconds)?.format(9));
        }
        ["table"] => {
            println!("{}", table.compact()?);
            println!("valid through {}", table.valid_through());
        }
        ["nist"] => print!("{}", nist::format(table, today())?),
        _ => bail!(USAGE),
    }
    Ok(())
}

fn parse(table: &LeapSecs, text: &str) -> Result<UtcTime> {
    table
        .parse_utc(text)
        .with_context(|| format!("invalid time {:?}", text))
}

use std::env;
use std::process;

use anstream::println;
use clap::{arg, command, value_parser};
use log::warn;
use owo_colors::OwoColorize;
use rng_uuid::source::{OsSource, RngSource};
use rng_uuid::{ByteSource, Generator, Uuid};

pub fn main() {
    let matches = command!()
        .arg(
            arg!([count] "Number of UUIDs to generate")
                .default_value("1")
                .value_parser(value_parser!(u32).range(1..)),
        )
        .arg(
            arg!(-q --quiet "Quiet, only show the UUIDs")
                .visible_alias("only-values"),
        )
        .arg(arg!(-u --upper "Uppercase hex digits"))
        .arg(
            arg!(--seed <SEED> "Seed a reproducible generator. NOT cryptographically secure")
                .value_parser(value_parser!(u64)),
        )
        .arg(
            arg!(--color <WHEN> "Controls when to use color")
                .default_value("auto")
                .value_parser(clap::builder::EnumValueParser::<clap::ColorChoice>::new()),
        )
        .get_matches();

    env_logger::Builder::new()
        .parse_filters(&env::var("RUUID_LOG").unwrap_or_else(|_| "warn".to_owned()))
        .init();

    let color = match matches
        .get_one::<clap::ColorChoice>("color")
        .expect("default color value")
    {
        clap::ColorChoice::Auto => anstream::ColorChoice::Auto,
        clap::ColorChoice::Always => anstream::ColorChoice::Always,
        clap::ColorChoice::Never => anstream::ColorChoice::Never,
    };
    color.write_global();

    let opts = Opts {
        count: *matches.get_one::<u32>("count").expect("default count value") as usize,
        quiet: matches.get_flag("quiet"),
        upper: matches.get_flag("upper"),
    };

    let res = match matches.get_one::<u64>("seed").copied() {
        Some(seed) => {
            warn!("seeded generator in use, the UUIDs are predictable");
            run(Generator::new(RngSource::seeded(seed)), opts)
        }
        None => run(Generator::new(OsSource), opts),
    };

    if let Err(err) = res {
        println!("{}: {err:#}", "error".red());
        process::exit(1);
    }
}

#[derive(Debug, Clone, Copy)]
struct Opts {
    count: usize,
    quiet: bool,
    upper: bool,
}

fn run<S>(mut generator: Generator<S>, opts: Opts) -> anyhow::Result<()>
where
    S: ByteSource<Error = rng_uuid::Error>,
{
    let uuids = generator.generate_many(opts.count)?;
    let show_index = !opts.quiet && uuids.len() > 1;
    for (i, uuid) in uuids.iter().enumerate() {
        let text = hyphenated(uuid, opts.upper);
        if show_index {
            println!("{} {text}", format!("{}:", i + 1).dimmed());
        } else {
            println!("{text}");
        }
    }
    Ok(())
}

const HEX: [u8; 16] = *b"0123456789abcdef";
const PARTS: [u8; 5] = [8, 4, 4, 4, 12];

/// `xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx`
fn hyphenated(uuid: &Uuid, upper: bool) -> String {
    let mut dst = String::with_capacity(36);

    let mut curr_part_len = 0;
    let mut p = 0;

    for &b in uuid.as_bytes() {
        dst.push(HEX[(b >> 4) as usize] as char);
        dst.push(HEX[(b & 0x0f) as usize] as char);
        curr_part_len += 2;
        if curr_part_len == PARTS[p] && p < PARTS.len() - 1 {
            p += 1;
            curr_part_len = 0;
            dst.push('-');
        }
    }

    if upper {
        dst.make_ascii_uppercase();
    }
    dst
}

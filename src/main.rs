use std::process::exit;

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use tirage::bits::RngSource;
use tirage::draw::DrawParams;

fn parse_args() -> Result<(u64, usize, Option<u64>)> {
    let max_number: u64 = match std::env::args().nth(1) {
        Some(arg) => arg.parse().context("could not parse max_number as an int")?,
        None => tirage::MAX_NUMBER,
    };
    let count: usize = match std::env::args().nth(2) {
        Some(arg) => arg.parse().context("could not parse count as an int")?,
        None => tirage::COUNT,
    };
    let seed: Option<u64> = match std::env::args().nth(3) {
        Some(arg) => Some(arg.parse().context("could not parse seed as an int")?),
        None => None,
    };

    Ok((max_number, count, seed))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::try_init().expect("cannot init logger");

    let (max_number, count, seed) = parse_args()?;
    let params = DrawParams::new(max_number, count);

    let mut source = match seed {
        Some(seed) => {
            info!("drawing with seed {}", seed);
            RngSource::from_seed(seed)
        }
        None => RngSource::new(StdRng::from_entropy()),
    };

    match tirage::draw_with(params, &mut source) {
        Ok(draw) => println!("{}", draw),
        Err(e) => {
            eprintln!("{}", e);
            exit(1);
        }
    }

    Ok(())
}

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use tirage::bits::RngSource;
use tirage::draw::DrawParams;

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// how many draws to run
    #[arg(short, default_value_t = 1)]
    n: usize,

    #[arg(long, default_value_t = tirage::MAX_NUMBER)]
    max_number: u64,

    #[arg(long, default_value_t = tirage::COUNT)]
    count: usize,

    #[arg(long)]
    prng_seed: Option<u64>,
}

fn main() {
    let cli = Cli::parse();

    let rng = match cli.prng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut source = RngSource::new(rng);

    let params = DrawParams::new(cli.max_number, cli.count);
    for _ in 0..cli.n {
        match tirage::draw_with(params, &mut source) {
            Ok(draw) => println!("{}", draw),
            Err(e) => {
                eprintln!("{}", e);
                std::process::exit(1);
            }
        }
    }
}

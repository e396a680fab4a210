use rand::rngs::StdRng;
use rand::SeedableRng;

use treasure_hunter::build_info;
use treasure_hunter::display::ConsoleSink;
use treasure_hunter::game::{self, StdinSource};

fn main() {
    let mut plain = false;
    let mut seed: Option<u64> = None;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-v" => {
                println!(
                    "treasure-hunter {} ({})",
                    build_info::BUILD_DATE,
                    build_info::BUILD_COMMIT
                );
                std::process::exit(0);
            }
            "--help" | "-h" => {
                println!("Treasure Hunter - Terminal Treasure Hunt\n");
                println!("Usage: treasure-hunter [options]\n");
                println!("Options:");
                println!("  --plain     Plain output: no colors, no screen clearing");
                println!("  --seed <n>  Seed the dice for a reproducible hunt");
                println!("  --version   Show version information");
                println!("  --help      Show this help message");
                std::process::exit(0);
            }
            "--plain" => plain = true,
            "--seed" => {
                let value = args.next().unwrap_or_default();
                match value.parse::<u64>() {
                    Ok(n) => seed = Some(n),
                    Err(_) => {
                        eprintln!("--seed expects a number, got '{}'", value);
                        std::process::exit(1);
                    }
                }
            }
            other => {
                eprintln!("Unknown option: {}", other);
                eprintln!("Run 'treasure-hunter --help' for usage.");
                std::process::exit(1);
            }
        }
    }

    let mut input = StdinSource;
    let mut sink = if plain {
        ConsoleSink::plain()
    } else {
        ConsoleSink::colored()
    };
    let mut rng = match seed {
        Some(n) => StdRng::seed_from_u64(n),
        None => StdRng::from_entropy(),
    };

    game::play(&mut input, &mut sink, &mut rng);
}

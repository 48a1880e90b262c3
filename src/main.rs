use std::io::{self, BufRead, Write};

use rocket_descent::errors::SimulationError;
use rocket_descent::*;

const HELP: &str = "Commands: [t]hrust, [p]rechute, para[c]hute, [w]ait [n], [q]uit. \
                    An empty line waits one tick.";

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .with_target(false)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .with_target(false)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

fn prompt(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    text: &str,
) -> io::Result<Option<String>> {
    print!("{text}");
    io::stdout().flush()?;
    lines.next().transpose()
}

fn report_deployment(name: &str, deployment: Deployment) {
    match deployment {
        Deployment::Opened => println!("{name} deployed!"),
        Deployment::AlreadyDeployed => println!("{name} is already out."),
        Deployment::TooSlow => println!("Falling too slowly, the {name} stays packed."),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env locally; safe to ignore when not present.
    let _ = dotenvy::dotenv();
    init_tracing();

    let config = SimulationConfig::from_env()?;
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("--- Rocket Simulator ---");

    'game: loop {
        let Some(input) = prompt(&mut lines, "Enter fuel amount: ")? else {
            break;
        };

        let mut round = match Round::start(&input, &config) {
            Ok(round) => round,
            Err(e @ SimulationError::InvalidFuel(_)) => {
                println!("{e}");
                continue;
            }
            Err(e) => return Err(e.into()),
        };

        println!("{}", round.get_last_readout());
        println!("{HELP}");

        while !round.is_over() {
            let Some(line) = prompt(&mut lines, "> ")? else {
                break 'game;
            };
            let command = match line.parse::<Command>() {
                Ok(command) => command,
                Err(e) => {
                    println!("{e}\n{HELP}");
                    continue;
                }
            };

            let turn = round.execute(command)?;
            if round.is_abandoned() {
                break 'game;
            }
            if let Some(deployment) = turn.deployment {
                let name = match command {
                    Command::DeployPrechute => "Prechute",
                    _ => "Parachute",
                };
                report_deployment(name, deployment);
            }
            if let Some(readout) = turn.readout {
                if turn.ticks > 1 {
                    println!("({} ticks)", turn.ticks);
                }
                println!("{readout}");
            }
        }

        if let Some(outcome) = round.get_outcome() {
            println!("\n{outcome}");
            println!("{}", round.get_telemetry().summary());
        }

        let Some(answer) = prompt(&mut lines, "Play again? [y/N] ")? else {
            break;
        };
        if !matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes") {
            break;
        }
    }

    Ok(())
}

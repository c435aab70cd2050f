#[macro_use]
extern crate lazy_static;

use std::error::Error;

use clap::Parser;
use log::{error, info};
use tokio::io::{AsyncBufReadExt, BufReader};

use expression::EvalError;

use crate::render::Frame;
use crate::terminal::Terminal;

mod config;
mod render;
mod session;
mod terminal;

#[derive(Debug, Parser)]
#[command(about = "Keypad calculator for arithmetic expressions")]
struct Args {
    /// Evaluate a single expression and exit
    expression: Option<String>,
}

/// Evaluates a single expression given on the command line, without reading
/// any rendering configuration
fn evaluate_once(text: &str) -> Result<String, EvalError> {
    expression::calculate(text)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = Args::parse();

    if let Some(text) = args.expression {
        match evaluate_once(&text) {
            Ok(result) => println!("{}", result),
            Err(e) => {
                eprintln!("{}", e);
                std::process::exit(1);
            }
        }
        return Ok(());
    }

    let config = config::Config::from_env()?;
    let format = config.output;
    let terminal = Terminal::new(
        config.render.policy,
        config.render.duration(),
        move |frame: Frame| match format.render(&frame) {
            Ok(line) => println!("{}", line),
            Err(e) => error!("Failed to render frame: {}", e),
        },
    );
    info!(
        "Rendering with {} policy after {:?}",
        terminal.render().policy(),
        terminal.render().delay()
    );

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line == ":metrics" {
            print!("{}", telemetry::encode()?);
            continue;
        }

        terminal.feed(line);
    }

    // Input is exhausted, draw whatever is still waiting on the timer
    terminal.finish();
    Ok(())
}

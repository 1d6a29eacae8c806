extern crate anyhow;

mod demo;
mod error;
mod eval;
mod history;
mod op;
mod parse;
mod session;

use anyhow::Context;
use clap::Parser;
use session::{IOReader, PromptReader, Reader, Session, Settings, MAX_PRECISION};
use std::io::{self, BufReader};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Interactive calculator with a session history
#[derive(Parser, Debug)]
#[command(name = "icalc")]
struct Args {
    /// Digits printed after the decimal point
    #[arg(
        long,
        default_value_t = 6,
        value_parser = clap::value_parser!(u16).range(..=MAX_PRECISION as i64)
    )]
    precision: u16,

    /// Do not print the welcome banner
    #[arg(long, short)]
    quiet: bool,

    /// Read commands from a file instead of the terminal
    #[arg(long)]
    script: Option<PathBuf>,

    /// Run the arithmetic and factorial walkthrough, then exit
    #[arg(long)]
    demo: bool,
}

fn init_logging() -> anyhow::Result<()> {
    // ICALC_LOG takes the usual EnvFilter directives, warn when unset.
    let filter = EnvFilter::try_from_env("ICALC_LOG")
        .or_else(|_| EnvFilter::try_new("warn"))
        .context("Failed to build the log filter.")?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
    Ok(())
}

fn start<T: Reader>(reader: T, args: &Args) -> anyhow::Result<()> {
    let settings = Settings {
        precision: usize::from(args.precision),
    };
    let mut session = Session::new(reader, io::stdout(), settings);
    if !args.quiet {
        session.banner()?;
    }
    session.all()
}

fn run(args: Args) -> anyhow::Result<()> {
    init_logging()?;

    if args.demo {
        return demo::run(10.0, 5.0, 5, &mut io::stdout());
    }

    match &args.script {
        Some(path) => {
            info!(path = %path.display(), "reading script");
            start(IOReader::new_file(path)?, &args)
        }
        None if atty::is(atty::Stream::Stdin) => {
            info!("interactive session");
            start(PromptReader::new(), &args)
        }
        None => {
            info!("reading piped input");
            start(IOReader::new(BufReader::new(io::stdin())), &args)
        }
    }
}

fn main() {
    run(Args::parse()).unwrap_or_else(|e| {
        eprintln!("{:#}", e);
        std::process::exit(1);
    })
}

mod logging;

use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use luach::{GregorianDate, HebrewDate, convert};
use tracing::info;

/// Convert a Gregorian date to the Hebrew calendar.
#[derive(Parser)]
#[command(name = "luach", version, about = "Convert a Gregorian date to the Hebrew calendar")]
struct Cli {
    /// Gregorian date as year/month/day.
    #[arg(default_value = "2015/5/13")]
    date: String,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let date: GregorianDate = cli
        .date
        .parse()
        .with_context(|| format!("invalid Gregorian date: {}", cli.date))?;
    info!(%date, "converting");

    let conversion = convert::<_, HebrewDate>(&date)
        .with_context(|| format!("{date} has no Hebrew calendar equivalent"))?;
    println!("{conversion}");
    Ok(())
}

use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use rand::{SeedableRng, rngs::StdRng};
use time::OffsetDateTime;
use tracing_subscriber::EnvFilter;

use league_sim_lib::{db, logic::{app_data::AppData, config::LeagueConfig, error::Result, random::RandomSource, season::{self, Outcome}, time::{date_to_string, string_to_date}}};

#[derive(Parser)]
#[command(name = "league-sim")]
#[command(about = "Advance a simulated sports league one schedule step at a time", long_about = None)]
struct Cli {
    /// SQLite database file, created if missing
    #[arg(long, default_value = "league.db")]
    database: PathBuf,

    /// League config JSON file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// How many steps to take at most
    #[arg(long, default_value_t = 1)]
    steps: u32,

    /// Simulated date (YYYY-MM-DD), today if not given
    #[arg(long)]
    date: Option<String>,
}

fn describe(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Retried(entry) => format!("retried {}", entry.label()),
        Outcome::Bootstrapped(year) => format!("created a new league for {year}"),
        Outcome::RolledOver(year) => format!("moved on to the {year} season"),
        Outcome::NotDue(entry) => format!("{} is not due until {}", entry.label(), date_to_string(entry.target_date)),
        Outcome::Processed(entry) => format!("processed {}", entry.label()),
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = LeagueConfig::load(cli.config.as_deref())?;
    let db = db::setup(&format!("sqlite://{}", cli.database.display())).await?;
    let data = AppData::build(db, config)?;

    let today = match cli.date {
        Some(date) => string_to_date(&date)?,
        None => OffsetDateTime::now_utc().date(),
    };

    let mut rng: Box<dyn RandomSource> = match cli.seed {
        Some(seed) => Box::new(StdRng::seed_from_u64(seed)),
        None => Box::new(rand::rng()),
    };

    for step in 1..=cli.steps {
        let outcome = season::advance(&data, rng.as_mut(), today).await?;
        tracing::info!("Step {step}: {}", describe(&outcome));
        if matches!(outcome, Outcome::NotDue(_)) {
            break;
        }
    }

    data.db.close().await;
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    match run(Cli::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.is_domain_error() => {
            tracing::error!("League step failed: {e}");
            ExitCode::FAILURE
        },
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        },
    }
}

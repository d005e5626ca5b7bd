use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use marsclock::config::Config;
use marsclock::format::{hours_to_hm, hours_to_hms};
use marsclock::logging::init_logging;
use marsclock::missions::MissionTime;
use marsclock::publisher::wiki::WikiPublisher;
use marsclock::status::render_status;
use marsclock::time::{parse_timestamp, TimeConfig};
use marsclock::updater::StatusUpdater;
use marsclock::{MarsEphemeris, TimeSnapshot};

#[derive(Parser)]
#[command(name = "marsclock", about = "Mars Sol Date, MTC and rover local solar time")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Mars time for the current instant
    Now {
        /// Print the full snapshot as JSON
        #[arg(long)]
        json: bool,
        /// TT - UTC offset in seconds
        #[arg(long)]
        tt_offset: Option<f64>,
    },
    /// Mars time for a given instant
    At {
        /// Unix seconds or a date (e.g. "2012-08-06T05:17:57 UTC")
        timestamp: String,
        /// Print the full snapshot as JSON
        #[arg(long)]
        json: bool,
        /// TT - UTC offset in seconds
        #[arg(long)]
        tt_offset: Option<f64>,
    },
    /// Print the status block that would be published now
    Status {
        /// TT - UTC offset in seconds
        #[arg(long)]
        tt_offset: Option<f64>,
    },
    /// Keep the remote status block up to date until Ctrl-C
    Run {
        /// Path to the TOML configuration
        #[arg(long, default_value = "marsclock.toml")]
        config: PathBuf,
    },
}

fn ephemeris(tt_offset: Option<f64>) -> MarsEphemeris {
    tt_offset
        .map(|offset| MarsEphemeris::new(TimeConfig::new(offset)))
        .unwrap_or_default()
}

fn print_mission(name: &str, time: &MissionTime) {
    println!(
        "{:<12} sol {:>6}   LMST {}   LTST {}",
        name,
        time.sol_index,
        hours_to_hms(time.local_mean_solar_time),
        hours_to_hms(time.local_true_solar_time)
    );
}

fn print_snapshot(snapshot: &TimeSnapshot, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(snapshot)?);
        return Ok(());
    }

    println!("Unix seconds     {:.3}", snapshot.epoch_seconds);
    println!("JD (TT)          {:.6}", snapshot.julian_date_tt);
    println!("Mars Sol Date    {:.5}", snapshot.mars_sol_date_msd);
    println!(
        "MTC              {} ({})",
        hours_to_hms(snapshot.coordinated_mars_time_mtc),
        hours_to_hm(snapshot.coordinated_mars_time_mtc)
    );
    println!("Ls               {:.3} deg", snapshot.areocentric_solar_longitude_ls);
    println!(
        "EOT              {:.4} deg ({:.4} h)",
        snapshot.equation_of_time_eot,
        snapshot.equation_of_time_hours()
    );
    print_mission("Curiosity", &snapshot.curiosity);
    print_mission("Opportunity", &snapshot.opportunity);
    Ok(())
}

async fn run_updater(path: PathBuf) -> anyhow::Result<()> {
    let config = Config::from_file(&path)
        .with_context(|| format!("Failed to load configuration from {}", path.display()))?;
    init_logging(&config.log_level)?;

    if config.publisher.access_token.is_empty() {
        tracing::warn!("No access token configured, publications will be rejected");
    }

    let publisher = WikiPublisher::new(&config.publisher)?;
    let mut updater = StatusUpdater::from_config(&config, publisher);

    updater
        .run(config.poll_interval(), async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!("Unable to listen for Ctrl-C: {}", e);
                std::future::pending::<()>().await;
            }
        })
        .await;

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Now { json, tt_offset } => {
            let snapshot = ephemeris(tt_offset).now()?;
            print_snapshot(&snapshot, json)?;
        }
        Commands::At {
            timestamp,
            json,
            tt_offset,
        } => {
            let secs = parse_timestamp(&timestamp)?;
            let snapshot = ephemeris(tt_offset).compute(secs)?;
            print_snapshot(&snapshot, json)?;
        }
        Commands::Status { tt_offset } => {
            let snapshot = ephemeris(tt_offset).now()?;
            print!("{}", render_status(&snapshot));
        }
        Commands::Run { config } => run_updater(config).await?,
    }

    Ok(())
}

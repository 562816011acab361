use chamber_config::config::{ChamberSpec, ConfigStore, DEFAULT_CONFIG_PATH};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;

// Command-line arguments
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Inspect the chamber installation configuration.",
    long_about = "Loads the installation's JSON configuration with the same rules the controller uses and prints the values consumers will see."
)]
struct Args {
    /// Configuration file to load.
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Default log filter; RUST_LOG takes precedence.
    #[arg(long, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Load the file and report whether it is valid.
    Check,
    /// Print the API address.
    Api,
    /// Print one summary line per chamber.
    Chambers,
    /// Print every field of one chamber as JSON.
    Chamber {
        /// Zero-based chamber index.
        index: usize,
    },
}

fn init_logging(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn summary(index: usize, chamber: &ChamberSpec) -> String {
    let sensors: Vec<String> = chamber.temp_sensors.iter().map(ToString::to_string).collect();
    format!(
        "[{index}] {name}: led={led} fan={fan} heater={heater} rate={rate} sensors=[{sensors}]",
        name = chamber.name,
        led = chamber.led_io,
        fan = chamber.fan_io,
        heater = chamber.heater_io,
        rate = chamber.sampling_rate,
        sensors = sensors.join(", "),
    )
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let store = ConfigStore::from_path(&args.config);
    store.load()?;
    info!(path = %args.config.display(), "Configuration loaded");

    match args.command {
        Command::Check => {
            println!(
                "OK: {} chamber(s) in {}",
                store.chambers_count()?,
                store.source_description()
            );
        }
        Command::Api => {
            println!("{}:{}", store.api_host()?, store.api_port()?);
        }
        Command::Chambers => {
            let snapshot = store.snapshot()?;
            for (index, chamber) in snapshot.chambers.iter().enumerate() {
                println!("{}", summary(index, chamber));
            }
        }
        Command::Chamber { index } => {
            let chamber = store.chamber(index)?;
            println!("{}", serde_json::to_string_pretty(&chamber)?);
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(&args.log_level);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

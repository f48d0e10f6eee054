use std::io;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use tracing_subscriber::EnvFilter;

use aqi_predictor::utils::input::prompt_readings;
use aqi_predictor::web::server::{PredictResponse, run_server};
use aqi_predictor::{ArtifactPaths, InputVector, ModelArtifacts, assess};

/// Predict the Air Quality Index from pollutant concentrations (µg/m³).
#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    #[command(flatten)]
    verbose: Verbosity<InfoLevel>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the prediction form over HTTP
    Serve {
        /// Directory holding the estimator and scaler artifacts
        #[arg(long, default_value = ".")]
        artifacts: PathBuf,

        /// Address to listen on
        #[arg(long, default_value = "127.0.0.1:8501")]
        addr: SocketAddr,
    },

    /// Predict once from twelve readings given on the command line
    ///
    /// Readings are in the order PM2.5, PM10, NO, NO2, NOx, SO2, NH3, CO,
    /// O3, Benzene, Toluene, Xylene.
    Predict {
        /// Directory holding the estimator and scaler artifacts
        #[arg(long, default_value = ".")]
        artifacts: PathBuf,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,

        /// The readings
        #[arg(required = true, num_args = 1..)]
        values: Vec<f64>,
    },

    /// Prompt for each reading on the terminal
    Interactive {
        /// Directory holding the estimator and scaler artifacts
        #[arg(long, default_value = ".")]
        artifacts: PathBuf,
    },
}

fn load_artifacts(dir: &Path) -> Result<ModelArtifacts> {
    ModelArtifacts::load(&ArtifactPaths::in_dir(dir))
        .with_context(|| format!("cannot load model artifacts from {}", dir.display()))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so `predict --json` stays pipeable.
    let level = cli.verbose.tracing_level_filter();
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("warn,aqi_predictor={level}")));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    match cli.command {
        Commands::Serve { artifacts, addr } => {
            let artifacts = load_artifacts(&artifacts)?;
            run_server(artifacts, addr)
                .await
                .with_context(|| format!("server on {addr} failed"))?;
        }
        Commands::Predict {
            artifacts,
            json,
            values,
        } => {
            let artifacts = load_artifacts(&artifacts)?;
            let input = InputVector::try_from(values.as_slice())?;
            let assessment = assess(&input, &artifacts)?;
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&PredictResponse::from(&assessment))?
                );
            } else {
                println!("{assessment}");
            }
        }
        Commands::Interactive { artifacts } => {
            let artifacts = load_artifacts(&artifacts)?;
            println!("Model ready for predictions");
            println!("\nEnter air quality parameters to predict (blank = 0.00):");

            let stdin = io::stdin();
            let mut stdout = io::stdout();
            let input = prompt_readings(&mut stdin.lock(), &mut stdout)?;
            match assess(&input, &artifacts) {
                Ok(assessment) => println!("\n{assessment}"),
                Err(e) => println!("\n{e}"),
            }
        }
    }

    Ok(())
}

mod config;
mod error;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use endpoint::{EndpointAdapter, Task};

use config::Config;
use error::Result;

const CONFIG_FILE: &str = "tiller.toml";

#[derive(Parser)]
#[command(name = "tiller")]
#[command(about = "Call a hosted text-generation endpoint", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Send a prompt to the configured endpoint and print the reply
    Generate {
        /// The prompt to send
        prompt: String,
        /// Stop sequence to truncate the reply at; may be repeated
        #[arg(short, long = "stop")]
        stop: Vec<String>,
        /// Path to the configuration file
        #[arg(short, long, default_value = CONFIG_FILE)]
        config: PathBuf,
    },
    /// List the tasks an endpoint can be configured with
    Tasks,
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            prompt,
            stop,
            config,
        } => cmd_generate(&prompt, &stop, &config).await,
        Commands::Tasks => cmd_tasks(),
    }
}

async fn cmd_generate(prompt: &str, stop: &[String], config_path: &Path) -> Result<()> {
    let config = Config::load(config_path)?;
    let adapter = EndpointAdapter::new(config.endpoint_config()?, config.client());

    let stop = (!stop.is_empty()).then_some(stop);
    let text = adapter.generate(prompt, stop).await?;

    println!("{text}");
    Ok(())
}

fn cmd_tasks() -> Result<()> {
    for task in Task::ALL {
        println!("{task}");
    }
    Ok(())
}

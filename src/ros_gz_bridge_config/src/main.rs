//! ros_gz_bridge_config CLI

use clap::Parser;
use ros_gz_bridge_config::{
    bridges_from_value, open_config_file, parse_document, BridgeSpec, ConfigError,
};
use std::{
    path::{Path, PathBuf},
    process,
};

#[derive(Parser)]
#[command(name = "ros_gz_bridge_config")]
#[command(about = "Validate a ROS 2 / Gazebo bridge configuration file", long_about = None)]
#[command(version)]
struct Cli {
    /// Bridge configuration YAML file
    config_file: PathBuf,

    /// Write the parsed bridges as JSON to this file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Fail if any entry was dropped
    #[arg(long)]
    strict: bool,

    #[arg(short, long)]
    verbose: bool,

    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    let cli = Cli::parse();

    // Set up logging
    let log_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "info"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    log::info!("Loading bridge config: {}", cli.config_file.display());

    let (bridges, declared) = load(&cli.config_file)?;

    match &cli.output {
        Some(output) => {
            let json = serde_json::to_string_pretty(&bridges)?;
            std::fs::write(output, json)?;
            log::info!("Wrote {} bridges to {}", bridges.len(), output.display());
        }
        None => {
            for bridge in &bridges {
                log::info!("Bridge {}", bridge);
            }
        }
    }

    if bridges.len() != declared {
        log::warn!(
            "{} of {} entries were dropped",
            declared - bridges.len(),
            declared
        );
        if cli.strict {
            return Err(format!(
                "{} of {} entries failed validation",
                declared - bridges.len(),
                declared
            )
            .into());
        }
    }

    Ok(())
}

/// Load the bridges along with the number of entries the document declares
fn load(path: &Path) -> Result<(Vec<BridgeSpec>, usize), ConfigError> {
    let document = parse_document(open_config_file(path)?)?;
    let declared = document.as_sequence().map_or(0, |entries| entries.len());
    Ok((bridges_from_value(&document), declared))
}

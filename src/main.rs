use std::path::PathBuf;
use std::process;

use clap::Parser;

use portal_scenario::config::{GeneratorConfig, LogLevel};
use portal_scenario::model::Aggregation;
use portal_scenario::scenario::generate;
use portal_scenario::sim::PhaseKind;

/// Generate portal status test data as a directory of per-second snapshots.
#[derive(Parser, Debug)]
#[command(name = "portal-scenario", version, about, long_about = None)]
struct Cli {
    /// Generate test data at this location.
    #[arg(long, default_value = "./scenario")]
    output: PathBuf,
    /// Log level: debug, info, warning|warn, error|err or fatal.
    #[arg(long, default_value = "warning")]
    loglevel: LogLevel,
    /// Phases to play back to back: capture, decay, build.
    #[arg(long, value_delimiter = ',', default_value = "build")]
    phases: Vec<PhaseKind>,
    /// Resonators averaged into portal level and health: deployed or all-present.
    #[arg(long, default_value = "deployed")]
    aggregation: Aggregation,
}

impl From<Cli> for GeneratorConfig {
    fn from(cli: Cli) -> Self {
        Self {
            output_dir: cli.output,
            log_level: cli.loglevel,
            aggregation: cli.aggregation,
            phases: cli.phases,
        }
    }
}

fn main() {
    let config = GeneratorConfig::from(Cli::parse());

    tracing_subscriber::fmt()
        .with_max_level(config.log_level.filter())
        .with_target(false)
        .init();

    match generate(&config) {
        Ok(timeline) => {
            tracing::info!(final_second = timeline.final_second, "done");
        }
        Err(err) => {
            tracing::error!(error = %err, "scenario generation failed");
            process::exit(err.exit_code());
        }
    }
}

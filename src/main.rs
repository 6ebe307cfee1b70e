use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use flowtag::{
    aggregator::{process_flow_logs, Summary},
    args::{Cli, ConfigFile},
    output::OutputWriter,
};
use log::{debug, error, info};

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    // If a config file is provided, it replaces the command line options
    let config = match cli.config_file.clone() {
        Some(config_path) => match confy::load_path::<ConfigFile>(&config_path) {
            Ok(config) => config,
            Err(e) => {
                error!("Error loading configuration file {}: {:?}", config_path, e);
                std::process::exit(1);
            }
        },
        None => ConfigFile::from(cli),
    };

    if let Err(err) = run_with_config(&config) {
        error!("Error: {:?}", err);
        std::process::exit(1);
    }
}

fn run_with_config(config: &ConfigFile) -> anyhow::Result<()> {
    debug!("Running with configuration: {:?}", config);
    let start = Instant::now();

    let summary = process_flow_logs(&config.input.flow_log, &config.input.lookup_table)?;

    let mut output_writer =
        OutputWriter::new(config.output.output, Some(config.output.export_path.as_str()))?;
    output_writer
        .write_summary(&summary)
        .context("failed to write report")?;
    output_writer
        .flush_and_close()
        .context("failed to flush report")?;

    log_statistics(&summary);
    info!(
        "Duration: {:.4} seconds",
        Instant::now().duration_since(start).as_secs_f64()
    );
    Ok(())
}

fn log_statistics(summary: &Summary) {
    info!(
        "Lines read: {}, classified: {}, skipped: {}",
        summary.lines_read,
        summary.lines_classified(),
        summary.lines_skipped
    );
    info!(
        "Distinct tags: {}, distinct port/protocol pairs: {}",
        summary.tag_counts.len(),
        summary.port_protocol_counts.len()
    );
}

use anyhow::Context;
use clap::Args;
use optostat_analysis::aggregator::SessionAggregator;

use crate::config::ConfigArg;

#[derive(Debug, Clone, Args)]
pub(crate) struct SummarizeArg {
    #[clap(flatten)]
    config: ConfigArg,
}

pub(crate) fn run(arg: &SummarizeArg) -> anyhow::Result<()> {
    let config = arg.config.resolve()?;
    let input_directory = config.input_directory.clone();
    let output_path = config.output_path.clone();

    println!(
        "Summarizing the raw force/torque channels of every recorded session to estimate the \
         load range required for sensor calibration."
    );
    println!(
        "This is not part of the regular data pipeline; it characterizes the forces typically \
         applied to the sensor before calibration testing."
    );

    let aggregator = SessionAggregator::new(config);
    let report = aggregator
        .run(|progress| println!("{} of {} ...", progress.processed, progress.total))
        .with_context(|| {
            format!(
                "Failed to summarize sessions in {}",
                input_directory.display()
            )
        })?;

    if !report.skipped.is_empty() {
        println!("Skipped {} files:", report.skipped.len());
        for skipped in &report.skipped {
            println!("  {}: {}", skipped.path.display(), skipped.error);
        }
    }
    println!(
        "Done. Statistics of {} sessions written to {}",
        report.table.len(),
        output_path.display()
    );
    Ok(())
}

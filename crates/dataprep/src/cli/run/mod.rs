//! The `dataprep run` command for normalizing datasets.

mod progress;
mod setup;

use clap::Args;
use dataprep_core::{Config, Normalizer};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use progress::BarProgress;
use setup::apply_overrides;

/// Arguments for the `run` command.
#[derive(Args, Debug, Default)]
pub struct RunArgs {
    /// Input directories (defaults to `datasets.inputs` from the config)
    #[arg(value_name = "INPUT")]
    pub inputs: Vec<PathBuf>,

    /// Edge length of the square output images
    #[arg(short, long, env = "DATAPREP_SIZE")]
    pub size: Option<u32>,

    /// JPEG quality (1-100)
    #[arg(short, long, env = "DATAPREP_QUALITY")]
    pub quality: Option<u8>,
}

/// Execute the run command.
pub async fn execute(args: RunArgs, config: Config) -> anyhow::Result<()> {
    let config = apply_overrides(config, &args)?;
    let inputs = config.input_dirs();

    let normalizer = Normalizer::new(&config);
    watch_for_interrupt(normalizer.stop_flag());

    tracing::info!(
        "Normalizing {} dataset(s) to {}x{}",
        inputs.len(),
        config.output.size,
        config.output.size
    );

    let mut progress = BarProgress::new();
    let reports = normalizer.normalize_all(&inputs, &mut progress).await?;

    if let Some(report) = reports.iter().find(|r| r.interrupted) {
        let not_started = inputs.len() - reports.len();
        anyhow::bail!(
            "Interrupted while processing {:?} ({} dataset(s) not started). \
             Run again to resume; existing outputs are skipped.",
            report.dataset.input_dir,
            not_started
        );
    }

    Ok(())
}

/// Set `stop` on the first Ctrl-C; exit immediately on the second.
fn watch_for_interrupt(stop: Arc<AtomicBool>) {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_err() {
            return;
        }
        tracing::warn!("Interrupt received, stopping after the current file");
        stop.store(true, Ordering::SeqCst);

        if tokio::signal::ctrl_c().await.is_ok() {
            std::process::exit(130);
        }
    });
}

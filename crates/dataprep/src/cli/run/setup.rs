//! Run setup: apply command-line overrides to the loaded config.

use dataprep_core::Config;

use super::RunArgs;

/// Apply `args` on top of `config` and validate the result.
pub fn apply_overrides(mut config: Config, args: &RunArgs) -> anyhow::Result<Config> {
    if !args.inputs.is_empty() {
        config.datasets.inputs = args.inputs.clone();
    }
    if let Some(size) = args.size {
        config.output.size = size;
    }
    if let Some(quality) = args.quality {
        config.output.quality = quality;
    }

    config.validate()?;
    Ok(config)
}

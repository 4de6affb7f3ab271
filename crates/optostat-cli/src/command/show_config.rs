use std::path::PathBuf;

use clap::Args;

use crate::{config::ConfigArg, util};

#[derive(Debug, Clone, Args)]
pub(crate) struct ShowConfigArg {
    #[clap(flatten)]
    config: ConfigArg,

    /// Write the configuration to this file instead of stdout
    #[arg(long)]
    save: Option<PathBuf>,
}

pub(crate) fn run(arg: &ShowConfigArg) -> anyhow::Result<()> {
    let config = arg.config.resolve()?;
    util::write_json(&config, arg.save.as_deref())?;
    if let Some(path) = &arg.save {
        eprintln!("Configuration saved to: {}", path.display());
    }
    Ok(())
}

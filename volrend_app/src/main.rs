use anyhow::Result;
use env_logger::Env;

mod args;
mod config;
mod image_out;
mod stats;
mod sweep;

use crate::{args::get_command, config::Config};

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cmd = get_command();
    let matches = cmd.get_matches();

    let cfg = Config::from_args(matches).map_err(anyhow::Error::msg)?;
    log::info!("{cfg:?}");

    let stats = sweep::run_sweep(&cfg)?;
    stats.log_summary();

    Ok(())
}

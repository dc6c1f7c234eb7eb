use log::info;

mod args;
mod config;
mod file;
mod generators;
mod header;

use crate::{args::get_command, config::Config, generators::generate_cube};

pub fn main() {
    env_logger::init();

    let cmd = get_command();
    let args = cmd.get_matches();

    let cfg = match Config::from_args(args) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    info!("generating datacube...");
    info!("{cfg:?}");

    if let Err(e) = generate_cube(&cfg) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

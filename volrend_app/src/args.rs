//! Argument parsing and validation
//! Uses library `clap`

use clap::{Arg, Command};

// up to 32bit value
pub fn is_positive_number(num: &str) -> Result<(), String> {
    let n = num.parse::<u32>();
    match n {
        Ok(n) => {
            if n > 0 {
                Ok(())
            } else {
                Err("Number must be greater than 0".into())
            }
        }
        Err(_) => Err("Number required".into()),
    }
}

const METHOD_NAMES: &[&str] = &["nearest", "linear"];

pub fn get_command<'a>() -> Command<'a> {
    Command::new("Volrend")
        .version("0.1.0")
        .about("Volume-rendering sweep over a datacube")
        .arg(
            Arg::new("angles")
                .help("Number of camera angles to render")
                .long("angles")
                .short('a')
                .value_name("N")
                .default_value("10")
                .validator(is_positive_number),
        )
        .arg(
            Arg::new("resolution")
                .help("Side of the cubic camera grid")
                .long("resolution")
                .short('r')
                .value_name("SIDE")
                .default_value("180")
                .validator(is_positive_number),
        )
        .arg(
            Arg::new("method")
                .help("Resampling method")
                .long("method")
                .short('m')
                .value_name("NAME")
                .default_value("linear")
                .possible_values(METHOD_NAMES),
        )
        .arg(
            Arg::new("runs")
                .help("Number of repeated sweeps, for timing stability")
                .long("runs")
                .short('n')
                .value_name("N")
                .default_value("1")
                .validator(is_positive_number),
        )
}

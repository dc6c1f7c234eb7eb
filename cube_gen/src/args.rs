//! Argument parsing and validation
//! Uses library `clap`

use std::ffi::OsStr;

use clap::{Arg, Command, ValueHint};

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

pub fn is_float_number(num: &str) -> Result<(), String> {
    let n = num.parse::<f32>();
    match n {
        Ok(n) => {
            if n > 0.0 {
                Ok(())
            } else {
                Err("Number must be greater than 0.0".into())
            }
        }
        Err(_) => Err("Number required".into()),
    }
}

const GENERATOR_NAMES: &[&str] = &["solid", "blobs"];

pub fn get_command<'a>() -> Command<'a> {
    Command::new("Cube-gen")
        .version("0.1.0")
        .about("Synthetic datacube generator")
        .arg(
            Arg::new("dims")
                .help("Dimensions of the density field")
                .long("dims")
                .short('d')
                .required(true)
                .number_of_values(3)
                .value_names(&["X", "Y", "Z"])
                .use_value_delimiter(true)
                .require_value_delimiter(true)
                .require_equals(true)
                .validator(is_positive_number),
        )
        .arg(
            Arg::new("generator")
                .help("Type of generator")
                .long("generator")
                .short('g')
                .required(true)
                .takes_value(true)
                .value_name("NAME")
                .possible_values(GENERATOR_NAMES),
        )
        .arg(
            Arg::new("value")
                .help("Density of the solid generator")
                .long("value")
                .value_name("DENSITY")
                .default_value("10.0")
                .validator(is_float_number),
        )
        .arg(
            Arg::new("n-of-blobs")
                .help("Number of clumps generated in the field")
                .long("n-of-blobs")
                .value_name("N")
                .default_value("8")
                .validator(is_positive_number),
        )
        .arg(
            Arg::new("amplitude")
                .help("Peak density of generated clumps")
                .long("amplitude")
                .value_name("DENSITY")
                .default_value("8000.0")
                .validator(is_float_number),
        )
        .arg(
            Arg::new("seed")
                .help("Seed for RNG, leave out for random seed")
                .long("seed")
                .value_name("SEED")
                .validator(is_positive_number),
        )
        .arg(
            Arg::new("output-file")
                .help("File name to output")
                .long("output-file")
                .short('o')
                .value_name("FILE")
                .allow_invalid_utf8(true)
                .value_hint(ValueHint::FilePath)
                .default_value_os(OsStr::new("datacube.dcb")),
        )
}

use std::{ffi::OsString, str::FromStr};

use clap::ArgMatches;
use nalgebra::{vector, Vector3};

/// Transform `Values` into `Vector`
fn values_to_vector3<T>(args: &ArgMatches, key: &str) -> Vector3<T>
where
    T: FromStr + Copy,
    <T as std::str::FromStr>::Err: std::fmt::Debug,
{
    let vals: Vec<T> = args
        .values_of(key)
        .unwrap()
        .map(|v| v.parse::<T>().expect("Parse error"))
        .collect();
    vector![vals[0], vals[1], vals[2]]
}

/// App configuration
/// Config is built from args parsed by `clap`
#[derive(Debug)]
pub struct Config {
    /// Dimensions of the generated field
    pub dims: Vector3<u32>,
    /// Type of generator to be used
    pub generator: GeneratorConfig,
    /// Output file name
    pub file_name: OsString,
    /// Optional seed for RNG, to replicate results
    pub seed: Option<u64>,
}

impl Config {
    pub fn from_args(args: ArgMatches) -> Result<Config, String> {
        let dims = values_to_vector3(&args, "dims");
        let generator = GeneratorConfig::from_args(&args)?;

        // Unwrap safe, has default value
        let file_name = args.value_of_os("output-file").unwrap().into();

        let seed = args.value_of("seed").map(|s| s.parse().unwrap());

        Ok(Config {
            dims,
            generator,
            file_name,
            seed,
        })
    }
}

/// Settings specific to generator variant
#[derive(Debug, Clone, Copy)]
pub enum GeneratorConfig {
    /// Constant density everywhere
    Solid { value: f32 },
    /// Randomly placed Gaussian clumps
    Blobs { n_of_blobs: usize, amplitude: f32 },
}

impl GeneratorConfig {
    pub fn from_args(args: &ArgMatches) -> Result<GeneratorConfig, String> {
        // Unwraps safe, args checked by parser
        let s = args.value_of("generator").unwrap();

        match s {
            "solid" => {
                let value = args.value_of("value").unwrap().parse().unwrap();
                Ok(GeneratorConfig::Solid { value })
            }
            "blobs" => {
                let n_of_blobs = args.value_of("n-of-blobs").unwrap().parse().unwrap();
                let amplitude = args.value_of("amplitude").unwrap().parse().unwrap();
                Ok(GeneratorConfig::Blobs {
                    n_of_blobs,
                    amplitude,
                })
            }
            _ => Err(format!("Unknown generator '{s}'")),
        }
    }
}

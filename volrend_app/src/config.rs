use clap::ArgMatches;

use volrend_lib::Interpolation;

/// App configuration
/// Config is built from args parsed by `clap`
#[derive(Debug)]
pub struct Config {
    /// Number of camera angles per sweep
    pub n_angles: usize,
    /// Side of the cubic camera grid
    pub resolution: usize,
    /// Resampling method
    pub interpolation: Interpolation,
    /// Number of repeated sweeps
    pub num_runs: usize,
}

impl Config {
    pub fn from_args(args: ArgMatches) -> Result<Config, String> {
        // Unwraps safe, all args have defaults and validators
        let n_angles = args.value_of("angles").unwrap().parse().unwrap();
        let resolution = args.value_of("resolution").unwrap().parse().unwrap();
        let num_runs = args.value_of("runs").unwrap().parse().unwrap();

        let interpolation = match args.value_of("method").unwrap() {
            "nearest" => Interpolation::Nearest,
            "linear" => Interpolation::Linear,
            m => return Err(format!("Unknown method '{m}'")),
        };

        Ok(Config {
            n_angles,
            resolution,
            interpolation,
            num_runs,
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::args::get_command;

    #[test]
    fn config_from_full_args() {
        let matches = get_command()
            .try_get_matches_from([
                "volrend", "-a", "4", "-r", "32", "-m", "nearest", "-n", "3",
            ])
            .unwrap();
        let cfg = Config::from_args(matches).unwrap();

        assert_eq!(cfg.n_angles, 4);
        assert_eq!(cfg.resolution, 32);
        assert_eq!(cfg.interpolation, Interpolation::Nearest);
        assert_eq!(cfg.num_runs, 3);
    }
}

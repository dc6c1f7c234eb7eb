use std::{
    error::Error,
    io::{BufWriter, Write},
};

use byteorder::{LittleEndian, WriteBytesExt};
use indicatif::ProgressBar;
use log::info;
use nalgebra::Vector3;

use crate::{
    config::{Config, GeneratorConfig},
    file::open_create_file,
    header::generate_header,
};

mod blobs;
mod solid;

// Generates one sample at a time, at any location
pub trait SampleGenerator {
    fn sample_at(&self, coords: Vector3<u32>) -> f32;
}

pub fn get_sample_generator(config: &Config) -> Box<dyn SampleGenerator> {
    match config.generator {
        GeneratorConfig::Solid { .. } => Box::new(solid::SolidGenerator::from_config(config)),
        GeneratorConfig::Blobs { .. } => Box::new(blobs::BlobGenerator::from_config(config)),
    }
}

// Samples in the field's linear order: z fastest, then y, then x
pub fn write_samples<W: Write>(
    sg: &dyn SampleGenerator,
    dims: Vector3<u32>,
    writer: &mut W,
    progress: &ProgressBar,
) -> Result<(), std::io::Error> {
    for x in 0..dims.x {
        for y in 0..dims.y {
            for z in 0..dims.z {
                let sample = sg.sample_at(Vector3::new(x, y, z));
                writer.write_f32::<LittleEndian>(sample)?;
            }
            progress.inc(dims.z as u64);
        }
    }

    Ok(())
}

pub fn generate_cube(config: &Config) -> Result<(), Box<dyn Error>> {
    let sg = get_sample_generator(config);

    let file = open_create_file(&config.file_name)?;
    let mut writer = BufWriter::new(file);

    let header = generate_header(config);
    writer.write_all(&header)?;

    let dims = config.dims;
    let n_samples = dims.x as u64 * dims.y as u64 * dims.z as u64;
    let progress = ProgressBar::new(n_samples);

    write_samples(sg.as_ref(), dims, &mut writer, &progress)?;
    progress.finish();

    writer.flush()?;
    info!("generating finished, result in {:?}", config.file_name);

    Ok(())
}

#[cfg(test)]
mod test {
    use nalgebra::vector;

    use super::*;
    use crate::args::get_command;
    use volrend_lib::volumetric::{parse_dataset, DENSITY_DATASET};

    fn config_from(args: &[&str]) -> Config {
        let matches = get_command().try_get_matches_from(args).unwrap();
        Config::from_args(matches).unwrap()
    }

    #[test]
    fn generated_bytes_parse_back() {
        let cfg = config_from(&["cube_gen", "--dims=3,4,5", "-g", "solid", "--value", "2.5"]);
        let sg = get_sample_generator(&cfg);

        let mut bytes = generate_header(&cfg);
        write_samples(
            sg.as_ref(),
            cfg.dims,
            &mut bytes,
            &ProgressBar::hidden(),
        )
        .unwrap();

        let field = parse_dataset(&bytes, DENSITY_DATASET).unwrap();
        assert_eq!(field.size(), vector![3, 4, 5]);
        assert_eq!(field.get_data(2, 3, 4), 2.5);
    }

    #[test]
    fn seeded_blobs_are_reproducible() {
        let cfg = config_from(&[
            "cube_gen",
            "--dims=8,8,8",
            "-g",
            "blobs",
            "--seed",
            "42",
        ]);

        let first = get_sample_generator(&cfg);
        let second = get_sample_generator(&cfg);

        for x in 0..8 {
            for y in 0..8 {
                for z in 0..8 {
                    let coords = vector![x, y, z];
                    assert_eq!(first.sample_at(coords), second.sample_at(coords));
                }
            }
        }
    }
}

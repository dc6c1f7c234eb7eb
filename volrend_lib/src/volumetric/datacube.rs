//! Datacube container parsing.
//!
//! A datacube file is a flat directory of named 3D float datasets:
//! magic + version + dataset count, then per dataset a length-prefixed
//! name, three u32 dimensions and the raw little-endian f32 samples in
//! linear order. The pipeline only ever asks for the `density` dataset,
//! the container itself does not care.

use std::path::Path;

use memmap::{Mmap, MmapOptions};
use nalgebra::vector;
use nom::{
    bytes::complete::{tag, take},
    number::complete::{le_u16, le_u32},
    sequence::tuple,
    IResult,
};

use log::{debug, info};

use crate::{error::VolumeError, volumetric::DensityField};

pub const DATACUBE_MAGIC: &[u8; 4] = b"DCUB";
pub const DATACUBE_VERSION: u16 = 1;
/// Dataset holding the scalar field the pipeline renders
pub const DENSITY_DATASET: &str = "density";

pub enum DataSource {
    Vec(Vec<u8>),
    Mmap(Mmap),
}

impl DataSource {
    pub fn get_slice(&self) -> &[u8] {
        match self {
            DataSource::Vec(v) => v.as_slice(),
            DataSource::Mmap(m) => &m[..],
        }
    }

    pub fn from_vec(vec: Vec<u8>) -> DataSource {
        DataSource::Vec(vec)
    }

    pub fn from_file<P>(path: P) -> Result<DataSource, VolumeError>
    where
        P: AsRef<Path>,
    {
        let file = std::fs::File::open(path)?;
        let mmap = unsafe { MmapOptions::new().map(&file)? };
        Ok(DataSource::Mmap(mmap))
    }
}

struct DatasetHeader {
    name: String,
    dims: [usize; 3],
}

fn container_header(s: &[u8]) -> IResult<&[u8], (u16, u16)> {
    let (s, _) = tag(&DATACUBE_MAGIC[..])(s)?;
    tuple((le_u16, le_u16))(s)
}

fn dataset_header(s: &[u8]) -> IResult<&[u8], DatasetHeader> {
    let (s, name_len) = le_u16(s)?;
    let (s, name) = take(name_len)(s)?;
    let (s, dims) = tuple((le_u32, le_u32, le_u32))(s)?;

    Ok((
        s,
        DatasetHeader {
            name: String::from_utf8_lossy(name).into_owned(),
            dims: [dims.0 as usize, dims.1 as usize, dims.2 as usize],
        },
    ))
}

/// Parse the named dataset out of a datacube held in memory.
pub fn parse_dataset(slice: &[u8], dataset: &str) -> Result<DensityField, VolumeError> {
    let (mut rest, (version, count)) = match container_header(slice) {
        Ok(r) => r,
        Err(_) => return Err(VolumeError::Parse("bad magic or truncated header")),
    };

    if version != DATACUBE_VERSION {
        return Err(VolumeError::Parse("unsupported container version"));
    }

    debug!("datacube holds {count} dataset(s)");

    for _ in 0..count {
        let (after_header, header) = match dataset_header(rest) {
            Ok(r) => r,
            Err(_) => return Err(VolumeError::Parse("truncated dataset header")),
        };

        let n_samples = header.dims[0] * header.dims[1] * header.dims[2];
        let payload_len = n_samples * 4;

        if header.name == dataset {
            let payload =
                after_header
                    .get(..payload_len)
                    .ok_or(VolumeError::PayloadSize {
                        dims: header.dims,
                        expected: n_samples,
                        actual: after_header.len() / 4,
                    })?;

            let data = payload
                .chunks_exact(4)
                .map(|b| f32::from_le_bytes([b[0], b[1], b[2], b[3]]))
                .collect();

            let size = vector![header.dims[0], header.dims[1], header.dims[2]];
            return DensityField::new(size, data);
        }

        // not the one, skip its payload
        rest = match take::<_, _, nom::error::Error<&[u8]>>(payload_len)(after_header) {
            Ok((r, _)) => r,
            Err(_) => return Err(VolumeError::Parse("truncated dataset payload")),
        };
    }

    Err(VolumeError::MissingDataset(dataset.to_string()))
}

/// Load a named dataset from a datacube file.
pub fn from_file<P, S>(path: P, dataset: S) -> Result<DensityField, VolumeError>
where
    P: AsRef<Path>,
    S: AsRef<str>,
{
    let ds = DataSource::from_file(path)?;
    parse_dataset(ds.get_slice(), dataset.as_ref())
}

/// Load the density field from the datacube at `path`.
pub fn load_density<P: AsRef<Path>>(path: P) -> Result<DensityField, VolumeError> {
    let field = from_file(path, DENSITY_DATASET)?;
    info!("loaded density field {:?}", field.size());
    Ok(field)
}

#[cfg(test)]
mod test {
    use super::*;

    fn encode(datasets: &[(&str, [u32; 3], &[f32])]) -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(DATACUBE_MAGIC);
        bytes.extend_from_slice(&DATACUBE_VERSION.to_le_bytes());
        bytes.extend_from_slice(&(datasets.len() as u16).to_le_bytes());

        for (name, dims, samples) in datasets {
            bytes.extend_from_slice(&(name.len() as u16).to_le_bytes());
            bytes.extend_from_slice(name.as_bytes());
            for d in dims {
                bytes.extend_from_slice(&d.to_le_bytes());
            }
            for s in *samples {
                bytes.extend_from_slice(&s.to_le_bytes());
            }
        }

        bytes
    }

    #[test]
    fn round_trip() {
        let samples: Vec<f32> = (0..8).map(|i| i as f32).collect();
        let bytes = encode(&[("density", [2, 2, 2], &samples)]);

        let field = parse_dataset(&bytes, "density").unwrap();
        assert_eq!(field.size(), vector![2, 2, 2]);
        assert_eq!(field.get_data(1, 1, 1), 7.0);
    }

    #[test]
    fn skips_preceding_datasets() {
        let other: Vec<f32> = vec![42.0; 27];
        let samples: Vec<f32> = (0..8).map(|i| i as f32 * 0.5).collect();
        let bytes = encode(&[("pressure", [3, 3, 3], &other), ("density", [2, 2, 2], &samples)]);

        let field = parse_dataset(&bytes, "density").unwrap();
        assert_eq!(field.size(), vector![2, 2, 2]);
        assert_eq!(field.get_data(0, 0, 1), 0.5);
    }

    #[test]
    fn missing_dataset() {
        let samples = vec![1.0f32; 8];
        let bytes = encode(&[("pressure", [2, 2, 2], &samples)]);

        let res = parse_dataset(&bytes, "density");
        match res {
            Err(VolumeError::MissingDataset(name)) => assert_eq!(name, "density"),
            other => panic!("expected MissingDataset, got {other:?}"),
        }
    }

    #[test]
    fn bad_magic() {
        let bytes = b"NOPE\x01\x00\x00\x00".to_vec();
        assert!(matches!(
            parse_dataset(&bytes, "density"),
            Err(VolumeError::Parse(_))
        ));
    }

    #[test]
    fn wrong_version() {
        let samples = vec![1.0f32; 8];
        let mut bytes = encode(&[("density", [2, 2, 2], &samples)]);
        bytes[4] = 99;
        assert!(matches!(
            parse_dataset(&bytes, "density"),
            Err(VolumeError::Parse(_))
        ));
    }

    #[test]
    fn truncated_payload() {
        let samples = vec![1.0f32; 8];
        let mut bytes = encode(&[("density", [2, 2, 2], &samples)]);
        bytes.truncate(bytes.len() - 4);

        assert!(matches!(
            parse_dataset(&bytes, "density"),
            Err(VolumeError::PayloadSize { .. })
        ));
    }
}

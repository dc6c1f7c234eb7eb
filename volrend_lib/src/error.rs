use thiserror::Error;

/// Errors surfaced while loading volumetric data.
///
/// Rendering itself is infallible once a field exists; everything here is
/// about getting a well-formed field out of a datacube file.
#[derive(Debug, Error)]
pub enum VolumeError {
    #[error("cannot read datacube: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed datacube: {0}")]
    Parse(&'static str),

    #[error("datacube has no dataset named '{0}'")]
    MissingDataset(String),

    #[error("dataset shape {dims:?} needs {expected} samples, payload has {actual}")]
    PayloadSize {
        dims: [usize; 3],
        expected: usize,
        actual: usize,
    },

    #[error("dataset dimension {0} is too small, interpolation needs at least 2 samples per axis")]
    InvalidDims(usize),
}

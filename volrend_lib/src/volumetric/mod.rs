pub mod datacube;
mod density_field;

pub use datacube::{
    load_density, parse_dataset, DataSource, DATACUBE_MAGIC, DATACUBE_VERSION, DENSITY_DATASET,
};
pub use density_field::{DensityField, Interpolation, Projection};

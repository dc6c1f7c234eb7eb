use nalgebra::Vector3;

use crate::config::{Config, GeneratorConfig};

use super::SampleGenerator;

/// Thin gas between the clumps
const AMBIENT_DENSITY: f32 = 0.05;

/// Generate a field of randomly placed Gaussian clumps
///
/// Densities decay smoothly away from each clump, so a render sweeps
/// through every band of the transfer function.
pub struct BlobGenerator {
    blobs: Vec<Blob>,
}

struct Blob {
    center: Vector3<f32>,
    sigma: f32,
    amplitude: f32,
}

impl BlobGenerator {
    pub fn from_config(config: &Config) -> BlobGenerator {
        let (n_of_blobs, amplitude) = match config.generator {
            GeneratorConfig::Blobs {
                n_of_blobs,
                amplitude,
            } => (n_of_blobs, amplitude),
            _ => panic!("Bad generator config"),
        };

        let rng = fastrand::Rng::new();
        if let Some(seed) = config.seed {
            rng.seed(seed);
        }

        let dims = config.dims.cast::<f32>();
        let min_side = dims.x.min(dims.y).min(dims.z);

        let blobs = (0..n_of_blobs)
            .map(|_| Blob {
                center: Vector3::new(rng.f32() * dims.x, rng.f32() * dims.y, rng.f32() * dims.z),
                // clump widths between 1/12 and 1/6 of the smallest side
                sigma: min_side / 12.0 * (1.0 + rng.f32()),
                // peaks spread over two decades, renders cross all bands
                amplitude: amplitude * 10f32.powf(-2.0 * rng.f32()),
            })
            .collect();

        BlobGenerator { blobs }
    }
}

impl SampleGenerator for BlobGenerator {
    fn sample_at(&self, coords: Vector3<u32>) -> f32 {
        let pos = coords.cast::<f32>();

        let mut density = AMBIENT_DENSITY;
        for blob in &self.blobs {
            let r2 = (pos - blob.center).norm_squared();
            density += blob.amplitude * (-r2 / (2.0 * blob.sigma * blob.sigma)).exp();
        }

        density
    }
}

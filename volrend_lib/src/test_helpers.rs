//! Module with helper functions
//! Saves repetition in unit tests and benches

use nalgebra::{vector, Vector3};

use crate::volumetric::DensityField;

/// Field with the same density everywhere.
pub fn uniform_field(size: Vector3<usize>, value: f32) -> DensityField {
    let data = vec![value; size.x * size.y * size.z];
    DensityField::new(size, data).unwrap()
}

/// Field where sample (x, y, z) holds its own linear index, handy for
/// checking interpolation against exact lattice values.
pub fn counting_field(size: Vector3<usize>) -> DensityField {
    let data = (0..size.x * size.y * size.z).map(|i| i as f32).collect();
    DensityField::new(size, data).unwrap()
}

/// Cubic field with one Gaussian clump in the middle, peak `amplitude`.
///
/// Densities fall off smoothly, so renders touch all transfer-function
/// bands when the amplitude is large enough.
pub fn blob_field(side: usize, amplitude: f32) -> DensityField {
    let center = (side as f32 - 1.0) / 2.0;
    let sigma = side as f32 / 6.0;

    let mut data = vec![0.0f32; side * side * side];
    for x in 0..side {
        for y in 0..side {
            for z in 0..side {
                let dx = x as f32 - center;
                let dy = y as f32 - center;
                let dz = z as f32 - center;
                let r2 = dx * dx + dy * dy + dz * dz;
                data[z + y * side + x * side * side] =
                    amplitude * (-r2 / (2.0 * sigma * sigma)).exp();
            }
        }
    }

    DensityField::new(vector![side, side, side], data).unwrap()
}

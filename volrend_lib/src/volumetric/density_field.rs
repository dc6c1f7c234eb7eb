use nalgebra::{Point3, Vector3};

use crate::{error::VolumeError, DENSITY_FLOOR};

/// How the field is resampled between lattice points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interpolation {
    Nearest,
    Linear,
}

// Field assumes f32 data
// Grid is axis aligned and centered at the origin:
// axis i holds size[i] samples spanning [-size[i]/2, size[i]/2]
pub struct DensityField {
    size: Vector3<usize>,
    data: Vec<f32>,
}

impl std::fmt::Debug for DensityField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DensityField")
            .field("size", &self.size)
            .field("data len ", &self.data.len())
            .finish()
    }
}

impl DensityField {
    pub fn new(size: Vector3<usize>, data: Vec<f32>) -> Result<DensityField, VolumeError> {
        for &dim in size.iter() {
            if dim < 2 {
                return Err(VolumeError::InvalidDims(dim));
            }
        }

        let expected = size.x * size.y * size.z;
        if data.len() != expected {
            return Err(VolumeError::PayloadSize {
                dims: [size.x, size.y, size.z],
                expected,
                actual: data.len(),
            });
        }

        Ok(DensityField { size, data })
    }

    pub fn size(&self) -> Vector3<usize> {
        self.size
    }

    fn get_3d_index(&self, x: usize, y: usize, z: usize) -> usize {
        z + y * self.size.z + x * self.size.y * self.size.z
    }

    // indices must be in range
    pub fn get_data(&self, x: usize, y: usize, z: usize) -> f32 {
        self.data[self.get_3d_index(x, y, z)]
    }

    /// World coordinate of lattice index `index` on `axis`
    pub fn axis_coord(&self, axis: usize, index: usize) -> f32 {
        let n = self.size[axis] as f32;
        -n / 2.0 + index as f32 * n / (n - 1.0)
    }

    // World position to fractional lattice coordinates, clamped to the
    // domain so out-of-bounds queries stick to the boundary sample
    fn world_to_grid(&self, pos: Point3<f32>) -> Vector3<f32> {
        let mut grid = Vector3::zeros();
        for axis in 0..3 {
            let n = self.size[axis] as f32;
            let t = (pos[axis] + n / 2.0) * (n - 1.0) / n;
            grid[axis] = t.clamp(0.0, n - 1.0);
        }
        grid
    }

    /// Resampled density at a world position.
    pub fn sample_at(&self, pos: Point3<f32>, method: Interpolation) -> f32 {
        match method {
            Interpolation::Nearest => self.sample_nearest(pos),
            Interpolation::Linear => self.sample_trilinear(pos),
        }
    }

    fn sample_nearest(&self, pos: Point3<f32>) -> f32 {
        let grid = self.world_to_grid(pos);
        self.get_data(
            grid.x.round() as usize,
            grid.y.round() as usize,
            grid.z.round() as usize,
        )
    }

    fn sample_trilinear(&self, pos: Point3<f32>) -> f32 {
        let grid = self.world_to_grid(pos);

        let x0 = grid.x.floor() as usize;
        let y0 = grid.y.floor() as usize;
        let z0 = grid.z.floor() as usize;
        let x1 = (x0 + 1).min(self.size.x - 1);
        let y1 = (y0 + 1).min(self.size.y - 1);
        let z1 = (z0 + 1).min(self.size.z - 1);

        let x_t = grid.x - x0 as f32;
        let y_t = grid.y - y0 as f32;
        let z_t = grid.z - z0 as f32;

        // collapse along x, then y, then z
        let c00 = self.get_data(x0, y0, z0) * (1.0 - x_t) + self.get_data(x1, y0, z0) * x_t;
        let c01 = self.get_data(x0, y0, z1) * (1.0 - x_t) + self.get_data(x1, y0, z1) * x_t;
        let c10 = self.get_data(x0, y1, z0) * (1.0 - x_t) + self.get_data(x1, y1, z0) * x_t;
        let c11 = self.get_data(x0, y1, z1) * (1.0 - x_t) + self.get_data(x1, y1, z1) * x_t;

        let c0 = c00 * (1.0 - y_t) + c10 * y_t;
        let c1 = c01 * (1.0 - y_t) + c11 * y_t;

        c0 * (1.0 - z_t) + c1 * z_t
    }

    /// Log of the mean density along axis 0, the cheap reference view.
    pub fn projection(&self) -> Projection {
        let (rows, cols) = (self.size.y, self.size.z);
        let mut data = vec![0.0f32; rows * cols];

        for x in 0..self.size.x {
            for j in 0..rows {
                for k in 0..cols {
                    data[j * cols + k] += self.get_data(x, j, k);
                }
            }
        }

        let inv = 1.0 / self.size.x as f32;
        for v in &mut data {
            *v = (*v * inv).max(DENSITY_FLOOR).ln();
        }

        Projection { rows, cols, data }
    }
}

/// Mean-density reference image, log scale.
///
/// Row j / column k follow the field's y / z axes.
pub struct Projection {
    pub rows: usize,
    pub cols: usize,
    pub data: Vec<f32>,
}

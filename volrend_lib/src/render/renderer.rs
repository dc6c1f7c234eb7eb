use nalgebra::{point, Rotation3, Vector3};
use rayon::prelude::*;

use crate::{
    color::RGBA,
    transfer_function::{log_density_tf, TF},
    volumetric::{DensityField, Interpolation},
    DENSITY_FLOOR,
};

use super::Image;

/// Camera-grid settings for a renderer.
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    /// Side of the cubic query grid
    pub resolution: usize,
    /// Resampling method used on the rotated grid
    pub interpolation: Interpolation,
}

impl RenderOptions {
    pub fn new(resolution: usize, interpolation: Interpolation) -> RenderOptions {
        assert!(resolution > 0, "camera grid needs at least one sample");
        RenderOptions {
            resolution,
            interpolation,
        }
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            resolution: 180,
            interpolation: Interpolation::Linear,
        }
    }
}

/// Renders scenes of a density field seen through a rotating camera grid.
///
/// Stateless between calls; every `render_scene` builds its grid, image and
/// intermediate buffers from scratch.
pub struct VolumeRenderer {
    options: RenderOptions,
    tf: TF,
}

impl VolumeRenderer {
    pub fn new(options: RenderOptions) -> VolumeRenderer {
        VolumeRenderer {
            options,
            tf: log_density_tf,
        }
    }

    /// Renderer with a custom transfer function.
    pub fn with_tf(options: RenderOptions, tf: TF) -> VolumeRenderer {
        VolumeRenderer { options, tf }
    }

    /// Render one scene: resample the field on the query grid rotated by
    /// `angle` (radians, about the x axis) and composite the slices in
    /// order along the viewing direction.
    pub fn render_scene(&self, field: &DensityField, angle: f32) -> Image {
        let n = self.options.resolution;
        let camera_grid = self.camera_grid(field, angle);

        let mut image = Image::new(n);
        let mut colors: Vec<RGBA> = Vec::with_capacity(n * n);

        for slab in camera_grid.chunks_exact(n * n) {
            colors.clear();
            colors.extend(
                slab.iter()
                    .map(|&density| (self.tf)(density.max(DENSITY_FLOOR).ln())),
            );
            image.composite_over(&colors);
        }

        image.clip();
        image
    }

    /// Resample the field at the rotated query points.
    ///
    /// Slab i of the result is the y-z plane at query x = c[i], row-major
    /// in (y, z). Slabs are independent, so the work splits across threads.
    pub fn camera_grid(&self, field: &DensityField, angle: f32) -> Vec<f32> {
        let n = self.options.resolution;
        let coords = query_axis(n);
        let rotation = Rotation3::from_axis_angle(&Vector3::x_axis(), angle);
        let method = self.options.interpolation;

        let mut grid = vec![0.0f32; n * n * n];
        grid.par_chunks_exact_mut(n * n)
            .enumerate()
            .for_each(|(i, slab)| {
                let qx = coords[i];
                for (j, &qy) in coords.iter().enumerate() {
                    for (k, &qz) in coords.iter().enumerate() {
                        let query = rotation * point![qx, qy, qz];
                        slab[j * n + k] = field.sample_at(query, method);
                    }
                }
            });

        grid
    }
}

/// Query-grid coordinates: `n` samples spanning [-n/2, n/2].
pub fn query_axis(n: usize) -> Vec<f32> {
    if n == 1 {
        return vec![0.0];
    }

    let half = n as f32 / 2.0;
    let step = n as f32 / (n - 1) as f32;
    (0..n).map(|i| -half + step * i as f32).collect()
}

mod error;

pub mod render;
pub mod test_helpers;
pub mod transfer_function;
pub mod volumetric;

pub use error::VolumeError;
pub use render::{Image, RenderOptions, VolumeRenderer};
pub use volumetric::{DensityField, Interpolation};

/// Densities below this are clamped before the log transform, so zero-density
/// voxels stay finite instead of feeding -inf into the transfer function.
pub const DENSITY_FLOOR: f32 = 1e-8;

pub mod color {
    use nalgebra::{vector, Vector4};

    pub type RGBA = Vector4<f32>;

    pub fn new(r: f32, g: f32, b: f32, a: f32) -> RGBA {
        vector![r, g, b, a]
    }

    pub fn zero() -> RGBA {
        vector![0.0, 0.0, 0.0, 0.0]
    }
}

/// Renders one scene with the default camera options and transfer function.
pub fn render_frame(field: &DensityField, angle: f32) -> Vec<u8> {
    let renderer = VolumeRenderer::new(RenderOptions::default());
    let image = renderer.render_scene(field, angle);
    image.to_rgb8()
}

mod image;
mod renderer;

pub use image::Image;
pub use renderer::{query_axis, RenderOptions, VolumeRenderer};

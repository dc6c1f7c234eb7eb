//! PNG output for rendered scenes and the projection image.

use std::path::Path;

use image::{ImageError, Rgb, RgbImage};

use volrend_lib::{volumetric::Projection, Image};

/// Fixed display range of the projection colormap, log-density units
const PROJECTION_RANGE: (f32, f32) = (-5.0, 5.0);

pub fn save_render(img: &Image, path: &Path) -> Result<(), ImageError> {
    let side = img.side() as u32;
    // buffer length always matches side * side * 3
    let rgb = RgbImage::from_vec(side, side, img.to_rgb8()).expect("image buffer size");
    rgb.save(path)
}

/// Color-map the projection with viridis over the fixed range and save it.
pub fn save_projection(proj: &Projection, path: &Path) -> Result<(), ImageError> {
    let gradient = colorgrad::viridis();
    let (lo, hi) = PROJECTION_RANGE;

    let mut rgb = RgbImage::new(proj.cols as u32, proj.rows as u32);
    for row in 0..proj.rows {
        for col in 0..proj.cols {
            let v = proj.data[row * proj.cols + col];
            let t = ((v - lo) / (hi - lo)).clamp(0.0, 1.0);
            let [r, g, b, _] = gradient.at(t as f64).to_rgba8();
            rgb.put_pixel(col as u32, row as u32, Rgb([r, g, b]));
        }
    }

    rgb.save(path)
}

#[cfg(test)]
mod test {
    use super::*;

    use nalgebra::vector;
    use volrend_lib::test_helpers::uniform_field;
    use volrend_lib::{Interpolation, RenderOptions, VolumeRenderer};

    #[test]
    fn render_png_round_trip() {
        let field = uniform_field(vector![8, 8, 8], 10.0);
        let renderer = VolumeRenderer::new(RenderOptions::new(8, Interpolation::Linear));
        let image = renderer.render_scene(&field, 0.0);

        let path = std::env::temp_dir().join("volrend_render_roundtrip.png");
        save_render(&image, &path).unwrap();

        let loaded = image::open(&path).unwrap().to_rgb8();
        assert_eq!(loaded.dimensions(), (8, 8));

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn projection_png_uses_full_canvas() {
        let field = uniform_field(vector![4, 6, 5], 1.0);
        let proj = field.projection();

        let path = std::env::temp_dir().join("volrend_projection_roundtrip.png");
        save_projection(&proj, &path).unwrap();

        let loaded = image::open(&path).unwrap().to_rgb8();
        // cols follow z, rows follow y
        assert_eq!(loaded.dimensions(), (5, 6));

        std::fs::remove_file(&path).ok();
    }
}

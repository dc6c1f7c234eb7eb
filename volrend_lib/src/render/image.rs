use crate::color::RGBA;

/// Square RGB accumulator for one rendered scene.
///
/// Channels are linear f32, row-major rgb triplets. The compositor blends
/// one slice at a time with the "over" operator; values stay unclamped
/// until [`Image::clip`] runs once at the end.
pub struct Image {
    side: usize,
    data: Vec<f32>,
}

impl Image {
    pub fn new(side: usize) -> Image {
        Image {
            side,
            data: vec![0.0; side * side * 3],
        }
    }

    pub fn side(&self) -> usize {
        self.side
    }

    pub fn data(&self) -> &[f32] {
        &self.data
    }

    pub fn pixel(&self, row: usize, col: usize) -> [f32; 3] {
        let i = (row * self.side + col) * 3;
        [self.data[i], self.data[i + 1], self.data[i + 2]]
    }

    /// Blend one slice worth of colors over the accumulated image.
    ///
    /// `colors` holds one RGBA per pixel in the image's row-major order.
    pub fn composite_over(&mut self, colors: &[RGBA]) {
        debug_assert_eq!(colors.len(), self.side * self.side);

        for (px, color) in self.data.chunks_exact_mut(3).zip(colors) {
            let a = color.w;
            px[0] = a * color.x + (1.0 - a) * px[0];
            px[1] = a * color.y + (1.0 - a) * px[1];
            px[2] = a * color.z + (1.0 - a) * px[2];
        }
    }

    /// Clamp every channel into [0, 1].
    pub fn clip(&mut self) {
        for v in &mut self.data {
            *v = v.clamp(0.0, 1.0);
        }
    }

    /// Pack into 8-bit RGB, for handing to image encoders.
    pub fn to_rgb8(&self) -> Vec<u8> {
        self.data
            .iter()
            .map(|v| (v.clamp(0.0, 1.0) * 255.0).round() as u8)
            .collect()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::color;

    #[test]
    fn transparent_slice_is_identity() {
        let mut image = Image::new(4);
        let colors = vec![color::new(0.7, 0.2, 0.9, 0.0); 16];
        image.composite_over(&colors);

        assert!(image.data().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn opaque_slice_overwrites() {
        let mut image = Image::new(4);
        // something already accumulated
        image.composite_over(&vec![color::new(0.3, 0.3, 0.3, 0.5); 16]);

        image.composite_over(&vec![color::new(1.0, 1.0, 1.0, 1.0); 16]);
        assert!(image.data().iter().all(|&v| v == 1.0));
    }

    #[test]
    fn over_operator_blends() {
        let mut image = Image::new(1);
        image.composite_over(&[color::new(1.0, 0.0, 0.0, 0.5)]);
        image.composite_over(&[color::new(0.0, 1.0, 0.0, 0.5)]);

        let px = image.pixel(0, 0);
        assert!((px[0] - 0.25).abs() < 1e-6);
        assert!((px[1] - 0.5).abs() < 1e-6);
        assert_eq!(px[2], 0.0);
    }

    #[test]
    fn clip_bounds_channels() {
        let mut image = Image::new(1);
        image.composite_over(&[color::new(3.0, -1.0, 0.5, 1.0)]);
        image.clip();

        let px = image.pixel(0, 0);
        assert_eq!(px, [1.0, 0.0, 0.5]);
    }
}

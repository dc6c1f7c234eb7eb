//! Log-density to RGBA mapping.
//!
//! The pipeline's colors come from one fixed transfer function: three
//! Gaussian bumps in log-density space, blended per channel with a fixed
//! weight matrix. Dense gas shows up yellow-white, the mid band green, thin
//! gas blue and nearly transparent.

use crate::color::{self, RGBA};

/// A transfer function maps one log-density sample to an RGBA contribution.
pub type TF = fn(f32) -> RGBA;

// R G B A -- components are NOT clamped here, the image clips once at the end
pub fn log_density_tf(x: f32) -> RGBA {
    let dense = (-(x - 9.0) * (x - 9.0) / 1.0).exp();
    let mid = (-(x - 3.0) * (x - 3.0) / 0.1).exp();
    let thin = (-(x + 3.0) * (x + 3.0) / 0.5).exp();

    color::new(
        1.0 * dense + 0.1 * mid + 0.1 * thin,
        1.0 * dense + 1.0 * mid + 0.1 * thin,
        0.1 * dense + 0.1 * mid + 1.0 * thin,
        0.6 * dense + 0.1 * mid + 0.01 * thin,
    )
}

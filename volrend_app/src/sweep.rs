//! The render sweep: drives the library once per angle per run and
//! persists what comes out.

use std::f32::consts::FRAC_PI_2;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use log::{error, info};

use volrend_lib::{volumetric, RenderOptions, VolumeRenderer};

use crate::{
    config::Config,
    image_out,
    stats::{RunStats, SweepStats},
};

/// Fixed input location, as written by `cube_gen`
pub const DATACUBE_PATH: &str = "datacube.dcb";

/// Camera angle of scene `i` out of `n_angles`, radians.
pub fn scene_angle(i: usize, n_angles: usize) -> f32 {
    FRAC_PI_2 * i as f32 / n_angles as f32
}

pub fn run_sweep(cfg: &Config) -> Result<SweepStats> {
    let field = volumetric::load_density(DATACUBE_PATH)
        .with_context(|| format!("cannot load density from '{DATACUBE_PATH}'"))?;

    let renderer = VolumeRenderer::new(RenderOptions::new(cfg.resolution, cfg.interpolation));
    let mut stats = SweepStats::default();

    for run in 0..cfg.num_runs {
        info!("run {} of {}", run + 1, cfg.num_runs);
        let mut run_stats = RunStats::default();

        for i in 0..cfg.n_angles {
            info!("rendering scene {} of {}", i + 1, cfg.n_angles);

            let start = Instant::now();
            let image = renderer.render_scene(&field, scene_angle(i, cfg.n_angles));
            let elapsed = start.elapsed();

            info!("scene {} rendered in {:?}", i + 1, elapsed);
            run_stats.record(elapsed);

            // A failed write must not abort the sweep
            let path = PathBuf::from(format!("volumerender{i}.png"));
            if let Err(e) = image_out::save_render(&image, &path) {
                error!("cannot save {}: {e}", path.display());
            }
        }

        run_stats.log_summary();
        stats.push_run(run_stats);
    }

    let projection = field.projection();
    if let Err(e) = image_out::save_projection(&projection, Path::new("projection.png")) {
        error!("cannot save projection.png: {e}");
    }

    Ok(stats)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn angles_cover_quarter_turn() {
        let n = 10;
        let angles: Vec<f32> = (0..n).map(|i| scene_angle(i, n)).collect();

        assert_eq!(angles[0], 0.0);
        // last angle stays short of pi/2
        assert!(angles[n - 1] < FRAC_PI_2);
        let step = angles[1] - angles[0];
        assert!((step - FRAC_PI_2 / n as f32).abs() < 1e-6);
    }
}

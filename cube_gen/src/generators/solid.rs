use nalgebra::Vector3;

use crate::config::{Config, GeneratorConfig};

use super::SampleGenerator;

/// Generate a solid field
/// All sample values are the same
pub struct SolidGenerator {
    value: f32,
}

impl SolidGenerator {
    pub fn from_config(config: &Config) -> SolidGenerator {
        let value = match config.generator {
            GeneratorConfig::Solid { value } => value,
            _ => panic!("Bad generator config"),
        };

        SolidGenerator { value }
    }
}

impl SampleGenerator for SolidGenerator {
    fn sample_at(&self, _coords: Vector3<u32>) -> f32 {
        self.value
    }
}

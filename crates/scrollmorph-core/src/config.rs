use serde::{Deserialize, Serialize};

use crate::error::{MorphError, Result};
use crate::shapes::dispatcher::ShapeKind;

/// Authoring-time settings for a morph context.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MorphConfig {
    /// Points per shape.
    pub particle_count: usize,
    /// Seed for the shape jitter; `None` draws from entropy.
    pub seed: Option<u64>,
    /// Morph order.
    pub shapes: Vec<ShapeKind>,
    /// Rotation (radians) per unit of normalised pointer offset.
    pub rotation_sensitivity: f32,
    /// Per-frame smoothing factor for the rotation.
    pub rotation_easing: f32,
    /// Duration of the ease into the final shape; 0 snaps.
    pub final_snap_seconds: f32,
}

impl Default for MorphConfig {
    fn default() -> Self {
        Self {
            particle_count: 1000,
            seed: None,
            shapes: ShapeKind::ALL.to_vec(),
            rotation_sensitivity: 0.2,
            rotation_easing: 0.05,
            final_snap_seconds: 0.0,
        }
    }
}

impl MorphConfig {
    pub fn validate(&self) -> Result<()> {
        if self.particle_count == 0 {
            return Err(MorphError::ZeroParticles);
        }
        if self.shapes.is_empty() {
            return Err(MorphError::EmptySequence);
        }
        if !self.rotation_sensitivity.is_finite() {
            return Err(invalid("rotation_sensitivity", self.rotation_sensitivity));
        }
        if !(0.0..=1.0).contains(&self.rotation_easing) {
            return Err(invalid("rotation_easing", self.rotation_easing));
        }
        if !(self.final_snap_seconds.is_finite() && self.final_snap_seconds >= 0.0) {
            return Err(invalid("final_snap_seconds", self.final_snap_seconds));
        }
        Ok(())
    }
}

fn invalid(name: &'static str, value: f32) -> MorphError {
    MorphError::InvalidParameter {
        name,
        value: value.to_string(),
    }
}

use log::debug;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::config::MorphConfig;
use crate::error::Result;
use crate::live::LiveBuffer;
use crate::morph::MorphDriver;
use crate::rotation::{PointerInput, RotationSmoother};
use crate::shapes::sequence::ShapeSequence;

/// What changed during one frame tick.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameOutput {
    /// The live buffer was written and needs re-uploading.
    pub positions_dirty: bool,
    pub rotation_x: f32,
    pub rotation_y: f32,
}

/// Everything the page owns for one particle cloud.
///
/// Scroll progress and pointer position arrive on their own channels and are
/// only sampled when [`tick`](Self::tick) runs, once per rendered frame.
pub struct MorphContext {
    config: MorphConfig,
    sequence: ShapeSequence,
    live: LiveBuffer,
    driver: MorphDriver,
    rotation: RotationSmoother,
    pending_progress: Option<f32>,
    last_progress: Option<f32>,
}

impl MorphContext {
    /// Generate the configured shapes and start on the first one.
    pub fn new(config: MorphConfig) -> Result<Self> {
        config.validate()?;
        let mut rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        let sequence = ShapeSequence::from_kinds(&config.shapes, config.particle_count, &mut rng)?;
        Ok(Self::with_sequence(config, sequence))
    }

    /// Use a pre-built sequence.
    ///
    /// `config.particle_count` and `config.shapes` are overwritten from the
    /// sequence. A sequence built from raw point sets has no kinds, so
    /// `shapes` ends up empty.
    pub fn with_sequence(mut config: MorphConfig, sequence: ShapeSequence) -> Self {
        config.particle_count = sequence.point_count();
        config.shapes = sequence.kinds().to_vec();
        let live = LiveBuffer::from_point_set(sequence.first());
        let driver = MorphDriver::new(config.final_snap_seconds);
        let rotation = RotationSmoother::new(config.rotation_sensitivity, config.rotation_easing);
        debug!(
            "morph context ready: {} shapes, {} particles",
            sequence.len(),
            sequence.point_count()
        );
        Self {
            config,
            sequence,
            live,
            driver,
            rotation,
            pending_progress: None,
            last_progress: None,
        }
    }

    pub fn config(&self) -> &MorphConfig {
        &self.config
    }

    pub fn sequence(&self) -> &ShapeSequence {
        &self.sequence
    }

    pub fn live(&self) -> &LiveBuffer {
        &self.live
    }

    pub fn driver(&self) -> &MorphDriver {
        &self.driver
    }

    pub fn rotation(&self) -> (f32, f32) {
        self.rotation.rotation()
    }

    /// Scroll channel: latest progress wins.
    pub fn set_scroll_progress(&mut self, progress: f32) {
        self.pending_progress = Some(progress);
    }

    /// Pointer channel.
    pub fn set_pointer(&mut self, pointer: PointerInput) {
        self.rotation.set_pointer(pointer);
    }

    /// Apply the morph for `progress` right away, bypassing the scroll channel.
    pub fn apply_progress(&mut self, progress: f32) -> bool {
        self.pending_progress = None;
        self.last_progress = Some(clamp_progress(progress));
        self.driver.update(progress, &self.sequence, &mut self.live)
    }

    /// One rendered frame: apply pending scroll progress, advance the final
    /// tween and ease the rotation.
    pub fn tick(&mut self, dt: f32) -> FrameOutput {
        let mut written = false;
        if let Some(progress) = self.pending_progress.take() {
            let clamped = clamp_progress(progress);
            if self.last_progress != Some(clamped) {
                self.last_progress = Some(clamped);
                written |= self.driver.update(progress, &self.sequence, &mut self.live);
            }
        }
        written |= self.driver.advance(dt, &self.sequence, &mut self.live);
        self.rotation.step();

        let (rotation_x, rotation_y) = self.rotation.rotation();
        FrameOutput {
            positions_dirty: written || self.live.is_dirty(),
            rotation_x,
            rotation_y,
        }
    }

    /// Read and clear the dirty flag once the renderer has uploaded the buffer.
    pub fn take_dirty(&mut self) -> bool {
        self.live.take_dirty()
    }
}

/// Same normalisation the driver applies: NaN to 0, then clamp.
fn clamp_progress(progress: f32) -> f32 {
    if progress.is_nan() {
        0.0
    } else {
        progress.clamp(0.0, 1.0)
    }
}

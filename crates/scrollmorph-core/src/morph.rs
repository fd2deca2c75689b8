//! Scroll-driven morphing between consecutive shapes.
//!
//! Progress in `[0, 1]` is split into `len - 1` equal segments. Inside a
//! segment every particle is linearly interpolated between the segment's start
//! and end shapes; past the last segment the buffer holds the final shape.

use glam::Vec3;
use log::{trace, warn};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::live::LiveBuffer;
use crate::math::lerp;
use crate::shapes::sequence::ShapeSequence;

/// Where a progress value lands in the sequence.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MorphState {
    /// Blending shape `index` into shape `index + 1` by `local` in `[0, 1)`.
    Segment { index: usize, local: f32 },
    /// At (or past) the end of the timeline.
    Final,
}

/// Resolve `progress` against a sequence with `segment_count` segments.
///
/// NaN maps to the start; values outside `[0, 1]` are clamped. The segment
/// index never exceeds `segment_count - 1`.
pub fn morph_state(progress: f32, segment_count: usize) -> MorphState {
    if segment_count == 0 {
        return MorphState::Final;
    }
    let progress = if progress.is_nan() { 0.0 } else { progress.clamp(0.0, 1.0) };
    let segment_progress = progress * segment_count as f32;
    let index = segment_progress.floor() as usize;
    if index >= segment_count {
        return MorphState::Final;
    }
    let local = (segment_progress - index as f32).clamp(0.0, 1.0);
    MorphState::Segment { index, local }
}

/// Write `lerp(a[i], b[i], t)` into `out[i]` for every particle.
pub fn lerp_into(out: &mut [Vec3], a: &[Vec3], b: &[Vec3], t: f32) {
    debug_assert_eq!(out.len(), a.len());
    debug_assert_eq!(out.len(), b.len());

    #[cfg(feature = "parallel")]
    {
        out.par_iter_mut()
            .zip(a.par_iter().zip(b.par_iter()))
            .for_each(|(o, (pa, pb))| *o = lerp_vec(*pa, *pb, t));
    }

    #[cfg(not(feature = "parallel"))]
    {
        for ((o, pa), pb) in out.iter_mut().zip(a).zip(b) {
            *o = lerp_vec(*pa, *pb, t);
        }
    }
}

#[inline]
fn lerp_vec(a: Vec3, b: Vec3, t: f32) -> Vec3 {
    Vec3::new(lerp(a.x, b.x, t), lerp(a.y, b.y, t), lerp(a.z, b.z, t))
}

/// Short ease from wherever the buffer was into the final shape.
#[derive(Clone, Debug)]
pub struct FinalTween {
    from: Vec<Vec3>,
    elapsed: f32,
    duration: f32,
}

impl FinalTween {
    fn new(from: &[Vec3], duration: f32) -> Self {
        Self {
            from: from.to_vec(),
            elapsed: 0.0,
            duration,
        }
    }

    /// Eased completion in `[0, 1]` (quadratic ease-out).
    pub fn progress(&self) -> f32 {
        let t = (self.elapsed / self.duration).clamp(0.0, 1.0);
        1.0 - (1.0 - t) * (1.0 - t)
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }
}

/// Maps progress onto the live buffer.
///
/// Holds only what must survive between calls: the last applied state and an
/// in-flight final tween.
#[derive(Debug, Default)]
pub struct MorphDriver {
    final_snap_seconds: f32,
    state: Option<MorphState>,
    tween: Option<FinalTween>,
    out_of_range: bool,
}

impl MorphDriver {
    /// `final_snap_seconds == 0` snaps straight to the final shape.
    pub fn new(final_snap_seconds: f32) -> Self {
        Self {
            final_snap_seconds: final_snap_seconds.max(0.0),
            state: None,
            tween: None,
            out_of_range: false,
        }
    }

    /// Last state applied by [`update`](Self::update).
    pub fn state(&self) -> Option<MorphState> {
        self.state
    }

    pub fn is_tweening(&self) -> bool {
        self.tween.is_some()
    }

    /// Apply `progress` to `live`. Returns `true` if the buffer was written.
    pub fn update(&mut self, progress: f32, sequence: &ShapeSequence, live: &mut LiveBuffer) -> bool {
        // one warning per excursion outside the range
        let in_range = (0.0..=1.0).contains(&progress);
        if !in_range && !self.out_of_range {
            warn!("scroll progress {progress} outside [0, 1], clamping");
        }
        self.out_of_range = !in_range;
        let state = morph_state(progress, sequence.segment_count());

        if self.state.map(segment_of) != Some(segment_of(state)) {
            trace!("morph state -> {:?}", state);
        }

        match state {
            MorphState::Segment { index, local } => {
                self.tween = None;
                lerp_into(
                    live.positions_mut(),
                    sequence[index].points(),
                    sequence[index + 1].points(),
                    local,
                );
                live.mark_dirty();
                self.state = Some(state);
                true
            }
            MorphState::Final => {
                let already_final = self.state == Some(MorphState::Final);
                self.state = Some(state);
                if already_final {
                    // Either settled or a tween is already heading there.
                    return false;
                }
                if self.final_snap_seconds > 0.0 {
                    self.tween = Some(FinalTween::new(live.positions(), self.final_snap_seconds));
                    false
                } else {
                    live.copy_from(sequence.last());
                    true
                }
            }
        }
    }

    /// Step an in-flight final tween by `dt` seconds. Returns `true` if the
    /// buffer was written.
    pub fn advance(&mut self, dt: f32, sequence: &ShapeSequence, live: &mut LiveBuffer) -> bool {
        let Some(tween) = self.tween.as_mut() else {
            return false;
        };
        tween.elapsed += dt.max(0.0);
        if tween.is_finished() {
            live.copy_from(sequence.last());
            self.tween = None;
        } else {
            let t = tween.progress();
            lerp_into(live.positions_mut(), &tween.from, sequence.last().points(), t);
            live.mark_dirty();
        }
        true
    }
}

fn segment_of(state: MorphState) -> Option<usize> {
    match state {
        MorphState::Segment { index, .. } => Some(index),
        MorphState::Final => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_start_and_end() {
        assert_eq!(morph_state(0.0, 3), MorphState::Segment { index: 0, local: 0.0 });
        assert_eq!(morph_state(1.0, 3), MorphState::Final);
    }

    #[test]
    fn test_state_overshoot_and_nan() {
        assert_eq!(morph_state(1.0 + 1e-6, 2), MorphState::Final);
        assert_eq!(morph_state(-0.5, 2), MorphState::Segment { index: 0, local: 0.0 });
        assert_eq!(morph_state(f32::NAN, 2), MorphState::Segment { index: 0, local: 0.0 });
    }

    #[test]
    fn test_state_single_shape_is_final() {
        assert_eq!(morph_state(0.3, 0), MorphState::Final);
    }

    #[test]
    fn test_segment_index_never_exceeds_last() {
        for i in 0..=1000 {
            let p = i as f32 / 1000.0;
            if let MorphState::Segment { index, local } = morph_state(p, 5) {
                assert!(index < 5);
                assert!((0.0..=1.0).contains(&local));
            }
        }
    }

    #[test]
    fn test_out_of_range_flag_tracks_excursion() {
        let a = crate::PointSet::new(vec![Vec3::ZERO]);
        let b = crate::PointSet::new(vec![Vec3::ONE]);
        let seq = ShapeSequence::new(vec![a, b]).unwrap();
        let mut live = LiveBuffer::from_point_set(seq.first());
        let mut driver = MorphDriver::new(0.0);

        driver.update(1.02, &seq, &mut live);
        assert!(driver.out_of_range);
        driver.update(1.05, &seq, &mut live);
        assert!(driver.out_of_range);
        driver.update(0.5, &seq, &mut live);
        assert!(!driver.out_of_range);
        driver.update(f32::NAN, &seq, &mut live);
        assert!(driver.out_of_range);
    }

    #[test]
    fn test_final_tween_eases_out() {
        let tween = FinalTween {
            from: Vec::new(),
            elapsed: 0.05,
            duration: 0.1,
        };
        assert!((tween.progress() - 0.75).abs() < 1e-6);
        assert!(!tween.is_finished());
    }
}

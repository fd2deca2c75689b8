use rand::Rng;

/// Linear interpolation: `a + (b - a) * t`.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Uniform sample in `[-amplitude, amplitude)`.
///
/// Matches the `(random - 0.5) * 2a` texture noise added to every
/// non-sphere shape.
#[inline]
pub fn jitter<R: Rng + ?Sized>(rng: &mut R, amplitude: f32) -> f32 {
    (rng.gen::<f32>() - 0.5) * 2.0 * amplitude
}

/// Radius sampled as `max * sqrt(u)` so points cover a disk with uniform
/// areal density.
#[inline]
pub fn disk_radius<R: Rng + ?Sized>(rng: &mut R, max: f32) -> f32 {
    max * rng.gen::<f32>().sqrt()
}

/// One step of exponential smoothing toward `target`.
#[inline]
pub fn ease_toward(current: f32, target: f32, factor: f32) -> f32 {
    current + (target - current) * factor
}

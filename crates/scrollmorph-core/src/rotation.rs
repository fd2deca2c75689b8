use crate::math::ease_toward;

/// Cursor position normalised to `[-1, 1]` on both axes, y pointing up.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerInput {
    pub x: f32,
    pub y: f32,
}

impl PointerInput {
    /// Non-finite components map to the centre line.
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x: finite_or_zero(x).clamp(-1.0, 1.0),
            y: finite_or_zero(y).clamp(-1.0, 1.0),
        }
    }

    /// Normalise viewport-relative client coordinates.
    ///
    /// A zero-sized or non-finite viewport, or a non-finite coordinate, yields
    /// the centre.
    pub fn from_client(client_x: f32, client_y: f32, width: f32, height: f32) -> Self {
        let all_finite = [client_x, client_y, width, height]
            .iter()
            .all(|v| v.is_finite());
        if !all_finite || width <= 0.0 || height <= 0.0 {
            return Self::default();
        }
        Self::new(
            (client_x / width) * 2.0 - 1.0,
            -(client_y / height) * 2.0 + 1.0,
        )
    }
}

fn finite_or_zero(v: f32) -> f32 {
    if v.is_finite() {
        v
    } else {
        0.0
    }
}

/// Mouse-reactive rotation of the whole cloud.
///
/// The target angles follow the pointer; the applied angles ease toward them
/// once per rendered frame and are independent of the morph timeline.
#[derive(Clone, Debug)]
pub struct RotationSmoother {
    /// Radians of rotation per unit of normalised pointer offset.
    pub sensitivity: f32,
    /// Fraction of the remaining distance covered each frame.
    pub easing: f32,
    target_x: f32,
    target_y: f32,
    rotation_x: f32,
    rotation_y: f32,
}

impl Default for RotationSmoother {
    fn default() -> Self {
        Self::new(0.2, 0.05)
    }
}

impl RotationSmoother {
    pub fn new(sensitivity: f32, easing: f32) -> Self {
        Self {
            sensitivity: finite_or_zero(sensitivity),
            easing: finite_or_zero(easing).clamp(0.0, 1.0),
            target_x: 0.0,
            target_y: 0.0,
            rotation_x: 0.0,
            rotation_y: 0.0,
        }
    }

    /// Horizontal pointer motion turns the cloud about y, vertical about x.
    pub fn set_pointer(&mut self, pointer: PointerInput) {
        self.target_y = pointer.x * self.sensitivity;
        self.target_x = pointer.y * self.sensitivity;
    }

    /// Ease one frame toward the target.
    pub fn step(&mut self) {
        self.rotation_x = ease_toward(self.rotation_x, self.target_x, self.easing);
        self.rotation_y = ease_toward(self.rotation_y, self.target_y, self.easing);
    }

    /// Applied `(x, y)` rotation in radians.
    pub fn rotation(&self) -> (f32, f32) {
        (self.rotation_x, self.rotation_y)
    }

    pub fn target(&self) -> (f32, f32) {
        (self.target_x, self.target_y)
    }
}

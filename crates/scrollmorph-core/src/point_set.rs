use glam::Vec3;

/// One shape state: an ordered, fixed-length list of particle positions.
///
/// Immutable once generated. The positions are stored as `Vec3` and can be
/// viewed as a flat `[x0, y0, z0, x1, ...]` slice for upload.
#[derive(Clone, Debug, PartialEq)]
pub struct PointSet {
    points: Vec<Vec3>,
}

impl PointSet {
    pub fn new(points: Vec<Vec3>) -> Self {
        Self { points }
    }

    /// Build from a flat `[x, y, z, ...]` slice. A trailing partial triple is
    /// dropped.
    pub fn from_flat(flat: &[f32]) -> Self {
        let points = flat
            .chunks_exact(3)
            .map(|c| Vec3::new(c[0], c[1], c[2]))
            .collect();
        Self { points }
    }

    /// Number of points (N), not scalars.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    /// Flat view of length `3 * len()`.
    pub fn as_flat(&self) -> &[f32] {
        bytemuck::cast_slice(&self.points)
    }
}

impl From<Vec<Vec3>> for PointSet {
    fn from(points: Vec<Vec3>) -> Self {
        Self::new(points)
    }
}

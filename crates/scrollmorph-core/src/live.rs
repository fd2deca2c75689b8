use glam::Vec3;

use crate::point_set::PointSet;

/// Current particle positions as the renderer sees them.
///
/// The morph driver is the only writer; the renderer reads the flat view each
/// frame and clears the dirty flag once it has re-uploaded the data.
pub struct LiveBuffer {
    positions: Vec<Vec3>,
    dirty: bool,
}

impl LiveBuffer {
    /// Start from an initial shape. The buffer begins dirty so the first frame
    /// uploads it.
    pub fn from_point_set(initial: &PointSet) -> Self {
        Self {
            positions: initial.points().to_vec(),
            dirty: true,
        }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn positions_mut(&mut self) -> &mut [Vec3] {
        &mut self.positions
    }

    /// Flat `[x, y, z, ...]` view, length `3 * len()`.
    pub fn as_flat(&self) -> &[f32] {
        bytemuck::cast_slice(&self.positions)
    }

    /// Raw pointer to the first scalar, for zero-copy views from JavaScript.
    pub fn as_ptr(&self) -> *const f32 {
        self.as_flat().as_ptr()
    }

    /// Overwrite every position with `shape`.
    pub fn copy_from(&mut self, shape: &PointSet) {
        self.positions.copy_from_slice(shape.points());
        self.dirty = true;
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Read and clear the dirty flag.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.dirty, false)
    }
}

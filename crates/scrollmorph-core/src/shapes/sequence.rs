use log::debug;
use rand::Rng;

use crate::error::{MorphError, Result};
use crate::point_set::PointSet;
use crate::shapes::dispatcher::{generate, ShapeKind};

/// Ordered list of shape states the morph driver walks through.
///
/// Every shape holds the same number of points and the list is never empty.
/// The number of morph segments is always `len() - 1`, so adding or removing
/// a shape needs no other change.
#[derive(Clone, Debug)]
pub struct ShapeSequence {
    shapes: Vec<PointSet>,
    kinds: Vec<ShapeKind>,
}

impl ShapeSequence {
    /// Wrap pre-built point sets, checking they all share one length.
    pub fn new(shapes: Vec<PointSet>) -> Result<Self> {
        let first = shapes.first().ok_or(MorphError::EmptySequence)?;
        let expected = first.len();
        if expected == 0 {
            return Err(MorphError::ZeroParticles);
        }
        if let Some((index, shape)) = shapes
            .iter()
            .enumerate()
            .find(|(_, s)| s.len() != expected)
        {
            return Err(MorphError::LengthMismatch {
                index,
                expected,
                found: shape.len(),
            });
        }
        Ok(Self {
            shapes,
            kinds: Vec::new(),
        })
    }

    /// Generate one point set of `n` points per kind, in order.
    pub fn from_kinds<R: Rng + ?Sized>(kinds: &[ShapeKind], n: usize, rng: &mut R) -> Result<Self> {
        if kinds.is_empty() {
            return Err(MorphError::EmptySequence);
        }
        if n == 0 {
            return Err(MorphError::ZeroParticles);
        }
        let shapes = kinds.iter().map(|&k| generate(k, n, rng)).collect();
        let mut sequence = Self::new(shapes)?;
        sequence.kinds = kinds.to_vec();
        debug!(
            "built shape sequence: {} shapes x {} points ({})",
            kinds.len(),
            n,
            sequence.names().join(" -> ")
        );
        Ok(sequence)
    }

    /// Number of shapes.
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Points per shape.
    pub fn point_count(&self) -> usize {
        self.shapes[0].len()
    }

    pub fn segment_count(&self) -> usize {
        self.shapes.len() - 1
    }

    pub fn get(&self, index: usize) -> Option<&PointSet> {
        self.shapes.get(index)
    }

    pub fn first(&self) -> &PointSet {
        &self.shapes[0]
    }

    pub fn last(&self) -> &PointSet {
        &self.shapes[self.shapes.len() - 1]
    }

    pub fn shapes(&self) -> &[PointSet] {
        &self.shapes
    }

    /// Kinds the sequence was generated from; empty for raw point sets.
    pub fn kinds(&self) -> &[ShapeKind] {
        &self.kinds
    }

    /// Shape names in order; unnamed shapes are listed as `shape-<index>`.
    pub fn names(&self) -> Vec<String> {
        (0..self.shapes.len())
            .map(|i| match self.kinds.get(i) {
                Some(kind) => kind.to_string(),
                None => format!("shape-{i}"),
            })
            .collect()
    }
}

impl std::ops::Index<usize> for ShapeSequence {
    type Output = PointSet;

    fn index(&self, index: usize) -> &PointSet {
        &self.shapes[index]
    }
}

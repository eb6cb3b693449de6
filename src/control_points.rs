//! The control point store edited by the user and read by the evaluators.

use crate::error::SketchError;
use crate::{PointN, Vertex};

/// Ordered control points kept as one flat `[x0, y0, z0, x1, y1, z1, ...]` buffer
/// so it can be uploaded to a vertex buffer as is.
///
/// The buffer length is always a multiple of three. Insertion order is draw order
/// and curve order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ControlPointSequence {
    coords: Vec<f32>,
}

impl ControlPointSequence {
    pub fn new() -> Self {
        ControlPointSequence { coords: Vec::new() }
    }

    /// Wrap an existing flat buffer, rejecting one that does not hold whole points.
    pub fn from_flat(coords: Vec<f32>) -> Result<Self, SketchError> {
        if !coords.len().is_multiple_of(3) {
            return Err(SketchError::RaggedBuffer(coords.len()));
        }
        Ok(ControlPointSequence { coords })
    }

    /// Append `(x, y, 0)` and return its index.
    pub fn push(&mut self, x: f32, y: f32) -> usize {
        self.coords.extend_from_slice(&[x, y, 0.0]);
        self.len() - 1
    }

    /// Move point `index` to `(x, y)` in place.
    pub fn set(&mut self, index: usize, x: f32, y: f32) -> Result<(), SketchError> {
        let len = self.len();
        if index >= len {
            return Err(SketchError::IndexOutOfRange { index, len });
        }
        self.coords[3 * index] = x;
        self.coords[3 * index + 1] = y;
        Ok(())
    }

    /// Number of points (not floats).
    pub fn len(&self) -> usize {
        self.coords.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.coords
    }

    pub fn point(&self, index: usize) -> Option<Vertex> {
        let c = self.coords.get(3 * index..3 * index + 3)?;
        Some(PointN::new([c[0], c[1], c[2]]))
    }

    pub fn last(&self) -> Option<Vertex> {
        self.len().checked_sub(1).and_then(|i| self.point(i))
    }

    pub fn points(&self) -> impl Iterator<Item = Vertex> + '_ {
        self.coords
            .chunks_exact(3)
            .map(|c| PointN::new([c[0], c[1], c[2]]))
    }

    pub fn to_vec(&self) -> Vec<Vertex> {
        self.points().collect()
    }

    /// Index of the point under `(x, y)`: the last one whose x and y both lie within
    /// `tolerance` of the query, in curve space.
    pub fn pick(&self, x: f32, y: f32, tolerance: f32) -> Option<usize> {
        self.coords
            .chunks_exact(3)
            .rposition(|c| (x - c[0]).abs() <= tolerance && (y - c[1]).abs() <= tolerance)
    }
}

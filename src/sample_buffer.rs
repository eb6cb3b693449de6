use crate::{Point, PointN, Vertex};

/// Dense polyline produced by one evaluator run, stored flat as xyz triples
/// ready for a line-strip draw call. Every sample lies in the z = 0 plane.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SampleBuffer {
    coords: Vec<f32>,
}

impl SampleBuffer {
    pub fn new() -> Self {
        SampleBuffer { coords: Vec::new() }
    }

    /// Reserve room for `points` samples.
    pub fn with_capacity(points: usize) -> Self {
        SampleBuffer {
            coords: Vec::with_capacity(3 * points),
        }
    }

    /// Append a sample; only x and y are kept, z is written as 0.
    pub fn push<P>(&mut self, p: P)
    where
        P: Point<Scalar = f32>,
    {
        self.coords.extend_from_slice(&[p.axis(0), p.axis(1), 0.0]);
    }

    /// Number of samples, i.e. `as_slice().len() / 3`.
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

    pub fn first(&self) -> Option<Vertex> {
        self.point(0)
    }

    pub fn last(&self) -> Option<Vertex> {
        self.len().checked_sub(1).and_then(|i| self.point(i))
    }

    pub fn points(&self) -> impl Iterator<Item = Vertex> + '_ {
        self.coords
            .chunks_exact(3)
            .map(|c| PointN::new([c[0], c[1], c[2]]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_flattens_into_z_plane() {
        let mut buffer = SampleBuffer::with_capacity(2);
        buffer.push(PointN::new([0.25f32, 0.5, 7.0]));
        buffer.push(Vertex::planar(-1.0, 1.0));

        assert_eq!(buffer.len(), 2);
        assert_eq!(buffer.as_slice(), &[0.25, 0.5, 0.0, -1.0, 1.0, 0.0]);
        assert_eq!(buffer.first(), Some(Vertex::planar(0.25, 0.5)));
        assert_eq!(buffer.last(), Some(Vertex::planar(-1.0, 1.0)));
    }

    #[test]
    fn empty_buffer_has_no_endpoints() {
        let buffer = SampleBuffer::new();
        assert!(buffer.is_empty());
        assert_eq!(buffer.first(), None);
        assert_eq!(buffer.last(), None);
        assert_eq!(buffer.points().count(), 0);
    }
}

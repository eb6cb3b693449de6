//! Pixel to curve space mapping.
//!
//! Curve space spans [-1, 1] on both axes with the origin at the bottom left,
//! pixel space has its origin at the top left, so y is flipped.

use crate::error::SketchError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    width: u32,
    height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Result<Self, SketchError> {
        if width == 0 || height == 0 {
            return Err(SketchError::EmptyViewport { width, height });
        }
        Ok(Viewport { width, height })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Adopt a new window size; a zero-sized (minimized) window keeps the old one.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), SketchError> {
        *self = Viewport::new(width, height)?;
        Ok(())
    }

    /// `X = -1 + 2 * px / W`, `Y = -1 + 2 * (H - py) / H`.
    pub fn to_curve_space(&self, px: f32, py: f32) -> (f32, f32) {
        let w = self.width as f64;
        let h = self.height as f64;
        let x = -1.0 + (px as f64 / w) * 2.0;
        let y = -1.0 + ((h - py as f64) / h) * 2.0;
        (x as f32, y as f32)
    }

    /// Inverse of [`Viewport::to_curve_space`].
    pub fn to_pixels(&self, x: f32, y: f32) -> (f32, f32) {
        let w = self.width as f64;
        let h = self.height as f64;
        let px = (x as f64 + 1.0) / 2.0 * w;
        let py = h - (y as f64 + 1.0) / 2.0 * h;
        (px as f32, py as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn corners_and_center() {
        let viewport = Viewport::new(640, 480).unwrap();
        assert_eq!(viewport.to_curve_space(0.0, 0.0), (-1.0, 1.0));
        assert_eq!(viewport.to_curve_space(640.0, 480.0), (1.0, -1.0));
        assert_eq!(viewport.to_curve_space(320.0, 240.0), (0.0, 0.0));
        assert_eq!(viewport.to_curve_space(0.0, 480.0), (-1.0, -1.0));
    }

    #[test]
    fn pixels_round_trip() {
        let viewport = Viewport::new(640, 640).unwrap();
        let (x, y) = viewport.to_curve_space(123.0, 457.0);
        let (px, py) = viewport.to_pixels(x, y);
        assert_relative_eq!(px, 123.0, epsilon = 1e-3);
        assert_relative_eq!(py, 457.0, epsilon = 1e-3);
    }

    #[test]
    fn zero_size_is_rejected() {
        assert!(matches!(
            Viewport::new(0, 480),
            Err(SketchError::EmptyViewport { width: 0, height: 480 })
        ));

        let mut viewport = Viewport::new(640, 640).unwrap();
        assert!(viewport.resize(800, 0).is_err());
        assert_eq!(viewport.width(), 640);
        viewport.resize(800, 600).unwrap();
        assert_eq!((viewport.width(), viewport.height()), (800, 600));
    }
}

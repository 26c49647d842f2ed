//! .
//!
//! The origin of coordinate system is in top-left corner. All coordinates are
//! in canvas pixels.

use {
  euclid::{Point2D, Size2D},
  num_traits::Float
};

/// Pixel coordinate basis
#[derive(Debug, Copy, Clone)]
pub struct PixelSpace;

pub type P2 = Point2D<f32, PixelSpace>;
pub type CanvasSize = Size2D<u32, PixelSpace>;

/// Euclidean distance between two points.
pub fn dist<T: Float, S>(a: Point2D<T, S>, b: Point2D<T, S>) -> T {
  ((b.x - a.x).powi(2) + (b.y - a.y).powi(2)).sqrt()
}

//! Derives the set of admissible seed coordinates ("spots") from a mask
//! image: the mask is scaled to fit the canvas, and every pixel bright
//! enough to pass the luminance threshold becomes a spot, centered within
//! the canvas.

use {
  crate::geometry::{CanvasSize, PixelSpace},
  euclid::Point2D,
  image::{imageops::FilterType, DynamicImage, GenericImageView, Rgba},
  itertools::iproduct
};


/// An immutable admissible seed coordinate, in canvas pixels.
pub type Spot = Point2D<i32, PixelSpace>;

/// WCAG relative luminance on a 0..1 scale: sRGB channels are linearized,
/// then perceptually weighted. Alpha is ignored.
pub fn relative_luminance(pixel: Rgba<u8>) -> f32 {
  fn linearize(c: u8) -> f32 {
    let c = c as f32 / 255.0;
    if c <= 0.03928 { c / 12.92 } else { ((c + 0.055) / 1.055).powf(2.4) }
  }
  0.2126 * linearize(pixel.0[0])
    + 0.7152 * linearize(pixel.0[1])
    + 0.0722 * linearize(pixel.0[2])
}

// scale the mask so its longer dimension covers `size_ratio` of the
// corresponding canvas dimension, preserving aspect ratio
fn scaled_size(mask: &DynamicImage, canvas: CanvasSize, size_ratio: f32) -> (u32, u32) {
  let (width, height) = mask.dimensions();
  if width == 0 || height == 0 {
    return (0, 0);
  }
  let aspect = width as f32 / height as f32;
  if aspect >= 1.0 {
    let scaled_width = (canvas.width as f32 * size_ratio).round() as u32;
    (scaled_width, (scaled_width as f32 / aspect).round() as u32)
  } else {
    let scaled_height = (canvas.height as f32 * size_ratio).round() as u32;
    ((scaled_height as f32 * aspect).round() as u32, scaled_height)
  }
}

/// Compute all admissible spots for the given canvas dimensions.
///
/// A degenerate scaling (either axis collapsing to zero pixels) yields an
/// empty set, which the engine treats as a permanent placement no-op.
pub fn compute_spots(
  mask: &DynamicImage,
  canvas: CanvasSize,
  size_ratio: f32,
  luminance_threshold: f32
) -> Vec<Spot> {
  let (scaled_width, scaled_height) = scaled_size(mask, canvas, size_ratio);
  if scaled_width == 0 || scaled_height == 0 {
    return vec![];
  }
  let scaled = mask.resize_exact(scaled_width, scaled_height, FilterType::Triangle);

  // integer-division centering, so the offset is stable for odd sizes
  let offset_x = canvas.width as i32 / 2 - scaled_width as i32 / 2;
  let offset_y = canvas.height as i32 / 2 - scaled_height as i32 / 2;

  iproduct!(0..scaled_width, 0..scaled_height)
    .filter(|&(x, y)| relative_luminance(scaled.get_pixel(x, y)) >= luminance_threshold)
    .map(|(x, y)| Spot::new(x as i32 + offset_x, y as i32 + offset_y))
    .collect()
}

use {
  crate::geometry::{P2, PixelSpace},
  euclid::{Box2D, Point2D, Size2D},
  image::{Pixel, Rgba, RgbaImage},
  itertools::iproduct
};


/// Rendering surface contract consumed by the engine: one [`Surface::clear`]
/// for the background, then one [`Surface::draw_disc`] per circle per tick.
pub trait Surface {
  fn clear(&mut self, region: Box2D<f32, PixelSpace>, fill: Rgba<u8>);
  /// Paint a stroked (unfilled) disc.
  fn draw_disc(&mut self, center: P2, radius: f32, stroke_width: f32, color: Rgba<u8>);
}

fn clip_to(region: Box2D<f32, PixelSpace>, image: &RgbaImage) -> Option<Box2D<u32, PixelSpace>> {
  let resolution: Size2D<u32, PixelSpace> = image.dimensions().into();
  region
    .round_out()
    .intersection(&Box2D::from_size(resolution.to_f32()))
    .map(|x| x.to_u32())
}

// 1px antialias ramp on both edges of the stroke band
fn stroke_overlay_aa(dist_to_band: f32, half_stroke: f32, mut dst: Rgba<u8>, mut src: Rgba<u8>) -> Rgba<u8> {
  let alpha = (half_stroke - dist_to_band + 0.5).clamp(0.0, 1.0);
  src.0[3] = ((src.0[3] as f32) * alpha) as u8;
  dst.blend(&src);
  dst
}

impl Surface for RgbaImage {
  fn clear(&mut self, region: Box2D<f32, PixelSpace>, fill: Rgba<u8>) {
    let region = match clip_to(region, self) {
      Some(x) => x,
      None => return
    };
    iproduct!(region.y_range(), region.x_range())
      .for_each(|(y, x)| *self.get_pixel_mut(x, y) = fill);
  }

  fn draw_disc(&mut self, center: P2, radius: f32, stroke_width: f32, color: Rgba<u8>) {
    let half_stroke = stroke_width / 2.0;
    let extent = radius + half_stroke + 1.0;
    let bounds = match clip_to(
      Box2D::new(
        Point2D::new(center.x - extent, center.y - extent),
        Point2D::new(center.x + extent, center.y + extent)
      ),
      self
    ) {
      Some(x) => x,
      None => return
    };
    iproduct!(bounds.y_range(), bounds.x_range())
      .for_each(|(y, x)| {
        // sample at the pixel center
        let sample = Point2D::new(x as f32 + 0.5, y as f32 + 0.5);
        let dist_to_band = (crate::geometry::dist(sample, center) - radius).abs();
        let pixel = self.get_pixel_mut(x, y);
        *pixel = stroke_overlay_aa(dist_to_band, half_stroke, *pixel, color);
      });
  }
}

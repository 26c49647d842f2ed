use {
  crate::{drawing::Surface, geometry::P2},
  image::Rgba
};

/// A growable, collidable stroked disc.
///
/// The lifecycle is strictly `growing -> frozen`: once [`Circle::freeze`] has
/// been called the radius is fixed forever. The center is immutable for the
/// whole lifetime; only `radius` and the growth flag ever change.
#[derive(Debug, Clone)]
pub struct Circle {
  center: P2,
  radius: f32,
  growing: bool,
  stroke_width: f32,
  color: Rgba<u8>
}

impl Circle {
  pub fn new(center: P2, color: Rgba<u8>, stroke_width: f32, radius: f32) -> Self {
    Self {
      center,
      radius,
      growing: true,
      stroke_width,
      color
    }
  }

  pub fn center(&self) -> P2 { self.center }
  pub fn radius(&self) -> f32 { self.radius }
  pub fn growing(&self) -> bool { self.growing }
  pub fn stroke_width(&self) -> f32 { self.stroke_width }
  pub fn color(&self) -> Rgba<u8> { self.color }

  /// Whether the stroked extent would cross any of the four canvas
  /// boundaries. The stroke width is inset symmetrically on all sides.
  pub fn is_touching_edge(&self, width: f32, height: f32) -> bool {
    self.center.x + self.radius - self.stroke_width > width
      || self.center.x - self.radius - self.stroke_width < 0.0
      || self.center.y + self.radius - self.stroke_width > height
      || self.center.y - self.radius - self.stroke_width < 0.0
  }

  /// Advance the radius by one step; no-op once frozen.
  pub fn grow(&mut self, step: f32) {
    if self.growing {
      self.radius += step;
    }
  }

  /// One-way transition; re-freezing is a no-op.
  pub fn freeze(&mut self) {
    self.growing = false;
  }

  pub fn draw(&self, surface: &mut impl Surface) {
    surface.draw_disc(self.center, self.radius, self.stroke_width, self.color);
  }
}

//! The per-tick packing loop.
//!
//! [`PackingEngine`] owns the live circle collection and the admissible spot
//! set. A driver feeds it [`PackingEngine::on_resize`] whenever the canvas
//! dimensions change and [`PackingEngine::on_tick`] once per animation frame;
//! between ticks it may paint the current state with [`PackingEngine::draw`].
//! The tick path never fails: an empty spot set or a saturated canvas only
//! means fewer circles get placed.

use {
  crate::{
    circle::Circle,
    drawing::Surface,
    geometry::{dist, CanvasSize, P2},
    mask::{self, Spot}
  },
  anyhow::{ensure, Result},
  euclid::Box2D,
  image::{DynamicImage, Rgba},
  rand::{Rng, SeedableRng},
  rand_pcg::Pcg64
};

#[cfg(test)] mod tests;

/// Engine parameters. All knobs are explicit; defaults match the classic
/// rendition of the effect.
#[derive(Debug, Clone)]
pub struct PackingConfig {
  /// Hard cap on live circles; placement stops the instant it is reached.
  pub max_circles: usize,
  /// Successful placements allowed per tick.
  pub circles_added_per_tick: usize,
  /// Raw placement attempts allowed per tick, successful or not. Bounds the
  /// work wasted near saturation, when free spots become rare.
  pub attempt_threshold: usize,
  /// Fraction of the canvas covered by the mask's longer dimension, in (0, 1].
  pub mask_size_ratio: f32,
  /// Minimum relative luminance for a mask pixel to become a spot, 0..1 scale.
  pub luminance_threshold: f32,
  pub stroke_width: f32,
  /// Radius assigned to a freshly placed circle.
  pub starting_radius: f32,
  /// Radius increment per tick while growing.
  pub growth_step: f32,
  pub background: Rgba<u8>,
  /// Stroke colors, drawn uniformly at random per circle.
  pub palette: Vec<Rgba<u8>>,
  /// Fixed RNG seed for reproducible packings; entropy-seeded when `None`.
  pub seed: Option<u64>
}

impl Default for PackingConfig {
  fn default() -> Self {
    Self {
      max_circles: 1000,
      circles_added_per_tick: 3,
      attempt_threshold: 500,
      mask_size_ratio: 0.6,
      luminance_threshold: 0.8,
      stroke_width: 4.0,
      starting_radius: 1.0,
      growth_step: 1.0,
      background: Rgba([0, 0, 0, 255]),
      palette: vec![
        Rgba([0xa8, 0xb5, 0xc7, 255]), // light grey blue
        Rgba([0xff, 0xff, 0xff, 255]), // white
        Rgba([0xd3, 0xd3, 0xd3, 255]), // light grey
        Rgba([0xc0, 0xc0, 0xc0, 255]), // silver
      ],
      seed: None
    }
  }
}

pub struct PackingEngine {
  config: PackingConfig,
  mask: Option<DynamicImage>,
  canvas: CanvasSize,
  spots: Vec<Spot>,
  pub (crate) circles: Vec<Circle>,
  rng: Pcg64
}

impl PackingEngine {
  pub fn new(config: PackingConfig) -> Result<Self> {
    ensure!(
      config.mask_size_ratio > 0.0 && config.mask_size_ratio <= 1.0,
      "mask_size_ratio must be in (0, 1], got {}", config.mask_size_ratio
    );
    ensure!(config.attempt_threshold >= 1, "attempt_threshold must be at least 1");
    ensure!(!config.palette.is_empty(), "palette must contain at least one color");
    let rng = match config.seed {
      Some(seed) => Pcg64::seed_from_u64(seed),
      None => Pcg64::from_entropy()
    };
    Ok(Self {
      config,
      mask: None,
      canvas: CanvasSize::zero(),
      spots: vec![],
      circles: vec![],
      rng
    })
  }

  /// Supply the mask image. Without one the spot set stays empty and the
  /// engine never places circles.
  pub fn with_mask(mut self, mask: DynamicImage) -> Self {
    self.mask = Some(mask);
    self
  }

  pub fn circles(&self) -> &[Circle] {
    &self.circles
  }

  pub fn spots(&self) -> &[Spot] {
    &self.spots
  }

  pub fn config(&self) -> &PackingConfig {
    &self.config
  }

  /// Full reset: discards all circles, recomputes the spot set for the new
  /// dimensions, and restarts the packing at state zero. Safe to call
  /// repeatedly, identical dimensions included.
  pub fn on_resize(&mut self, width: u32, height: u32) {
    self.canvas = CanvasSize::new(width, height);
    self.circles.clear();
    self.spots = match &self.mask {
      Some(mask) => mask::compute_spots(
        mask,
        self.canvas,
        self.config.mask_size_ratio,
        self.config.luminance_threshold
      ),
      None => vec![]
    };
  }

  /// Advance the packing by one step: attempt new placements, then grow
  /// every still-growing circle and resolve collisions.
  pub fn on_tick(&mut self) {
    // the growing subset is snapshotted before placement: circles born this
    // tick keep their starting radius until the next tick, but do take part
    // in collision checks as passive parties
    let growing: Vec<usize> = (0..self.circles.len())
      .filter(|&i| self.circles[i].growing())
      .collect();
    self.place_circles();
    self.grow_circles(growing);
  }

  /// Paint the background and every circle, in insertion order.
  pub fn draw(&self, surface: &mut impl Surface) {
    surface.clear(
      Box2D::from_size(self.canvas.to_f32()),
      self.config.background
    );
    for circle in &self.circles {
      circle.draw(surface);
    }
  }

  // Placement phase: up to `circles_added_per_tick` successes within
  // `attempt_threshold` raw attempts. Exhausting the attempt budget with
  // zero successes is the expected steady state near saturation.
  fn place_circles(&mut self) {
    if self.spots.is_empty() {
      return;
    }
    let mut placed = 0;
    let mut attempts = 0;
    while self.circles.len() < self.config.max_circles
      && placed < self.config.circles_added_per_tick
      && attempts < self.config.attempt_threshold
    {
      attempts += 1;
      if self.try_place_circle() {
        placed += 1;
      }
    }
  }

  fn try_place_circle(&mut self) -> bool {
    let spot = self.spots[self.rng.gen_range(0..self.spots.len())];
    let center = P2::new(spot.x as f32, spot.y as f32);

    // rejection sampling: a spot strictly inside an existing circle is
    // discarded; a spot exactly on a boundary is accepted
    if self.circles.iter().any(|c| dist(center, c.center()) < c.radius()) {
      return false;
    }

    let color = self.config.palette[self.rng.gen_range(0..self.config.palette.len())];
    self.circles.push(Circle::new(
      center,
      color,
      self.config.stroke_width,
      self.config.starting_radius
    ));
    true
  }

  // Growth phase, index-addressed on a stable array so that both parties
  // of a collision can be frozen the tick the overlap is detected.
  fn grow_circles(&mut self, growing: Vec<usize>) {
    let width = self.canvas.width as f32;
    let height = self.canvas.height as f32;

    for i in growing {
      if self.circles[i].is_touching_edge(width, height) {
        self.circles[i].freeze();
        continue;
      }

      // collision uses current radii, before this tick's growth step
      let mut collided = false;
      for j in 0..self.circles.len() {
        if i == j {
          continue;
        }
        let d = dist(self.circles[i].center(), self.circles[j].center());
        if d - self.circles[i].stroke_width() <= self.circles[i].radius() + self.circles[j].radius() {
          // symmetric freeze; re-freezing an already frozen circle is a no-op
          self.circles[j].freeze();
          collided = true;
        }
      }

      if collided {
        self.circles[i].freeze();
      } else {
        self.circles[i].grow(self.config.growth_step);
      }
    }
  }
}

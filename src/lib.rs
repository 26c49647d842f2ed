//! Animated circle packing constrained to an image mask.
//!
//! Circles are seeded at random positions inside the bright silhouette of a
//! mask image, then grown one step per tick until they collide with each
//! other or the canvas edge, producing a stippled rendering of the mask
//! shape over time.
//!
//! The crate is split into four modules: [`mask`] for deriving admissible
//! seed coordinates from an image, [`circle`] for the growable entity,
//! [`engine`] for the per-tick packing loop, and [`drawing`] for painting
//! the result onto an [`image::RgbaImage`] (or any other [`drawing::Surface`]).
//!
//! # Basic usage
//! ```no_run
//! use {
//!   circle_packing::engine::{PackingEngine, PackingConfig},
//!   anyhow::Result
//! };
//!
//! fn main() -> Result<()> {
//!   let mask = image::open("mask.png")?;
//!   let mut engine = PackingEngine::new(PackingConfig::default())?
//!     .with_mask(mask);
//!   let mut frame = image::RgbaImage::new(1024, 1024);
//!
//!   // a resize computes the spot set and arms the engine
//!   engine.on_resize(1024, 1024);
//!
//!   // the driver owns the clock; each tick advances the packing by one step
//!   for _ in 0..600 {
//!     engine.on_tick();
//!     engine.draw(&mut frame);
//!   }
//!   frame.save("out.png")?;
//!   Ok(())
//! }
//! ```
//!
//! The engine never returns an error from the tick path: an unavailable or
//! fully black mask simply yields zero spots, and a saturated canvas makes
//! placement a silent no-op. The worst case is always "fewer circles placed
//! this tick than requested".

pub mod geometry;
pub mod mask;
pub mod circle;
pub mod engine;
pub mod drawing;

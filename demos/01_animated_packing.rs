//! Pack circles into the bright silhouette of a mask image, and save the
//! settled frame.

use {
  circle_packing::engine::{PackingConfig, PackingEngine},
  anyhow::Result
};

fn main() -> Result<()> {
  let path = "out.png";
  let mask = std::env::args().nth(1)
    .expect("please provide a mask image path in arguments");
  let mask = image::open(&mask)?;

  let mut engine = PackingEngine::new(PackingConfig {
    seed: Some(0),
    ..Default::default()
  })?.with_mask(mask);
  let mut frame = image::RgbaImage::new(1024, 1024);

  engine.on_resize(1024, 1024);

  // one tick per frame; a real driver would redraw every ~16ms
  for _ in 0..600 {
    engine.on_tick();
  }
  engine.draw(&mut frame);

  frame.save(path)?;
  open::that(path)?;
  Ok(())
}

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use cdg::frame::{RenderFrame, H, W};

pub fn write(frame: &RenderFrame, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
  let file = File::create(path)?;
  let mut encoder = png::Encoder::new(BufWriter::new(file), W as u32, H as u32);
  encoder.set_color(png::ColorType::Rgba);
  encoder.set_depth(png::BitDepth::Eight);
  let mut writer = encoder.write_header()?;
  writer.write_image_data(frame.pixels())?;
  Ok(())
}

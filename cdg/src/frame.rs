pub const W: usize = 300;
pub const H: usize = 216;
const BYTES_PER_PIXEL: usize = 4; // 0xRR 0xGG 0xBB 0xAA

pub struct RenderFrame {
  pixels: Box<[u8; W * H * BYTES_PER_PIXEL]>,
}

impl RenderFrame {
  pub fn new() -> RenderFrame {
    // Before anything is composited this is already a valid image: an
    // opaque black screen.
    let mut pixels = Box::new([0; W * H * BYTES_PER_PIXEL]);
    for alpha in pixels.iter_mut().skip(3).step_by(BYTES_PER_PIXEL) {
      *alpha = 0xff;
    }
    RenderFrame { pixels }
  }

  pub fn set_pixel(&mut self, x: usize, y: usize, rgb: (u8, u8, u8)) {
    let i = (y * W + x) * BYTES_PER_PIXEL;
    self.pixels[i] = rgb.0;
    self.pixels[i + 1] = rgb.1;
    self.pixels[i + 2] = rgb.2;
    self.pixels[i + 3] = 0xff;
  }

  pub fn pixels(&self) -> &[u8] {
    &self.pixels[..]
  }

  pub fn pitch(&self) -> usize {
    W * BYTES_PER_PIXEL
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn starts_opaque_black() {
    let frame = RenderFrame::new();
    assert_eq!(frame.pixels().len(), W * H * 4);
    assert!(frame.pixels().chunks(4).all(|px| px == [0, 0, 0, 0xff]));
  }

  #[test]
  fn set_pixel_lands_on_the_right_bytes() {
    let mut frame = RenderFrame::new();
    frame.set_pixel(2, 1, (10, 20, 30));
    let i = (W + 2) * 4;
    assert_eq!(&frame.pixels()[i..i + 4], [10, 20, 30, 0xff]);
  }

  #[test]
  fn pitch_is_one_full_row() {
    assert_eq!(RenderFrame::new().pitch(), W * 4);
  }
}

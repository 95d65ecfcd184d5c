// The sixteen-color raster a CDG stream paints into. Tiles are 6x12 and the
// outermost tile band on every edge is the border. Instruction walkthrough:
// https://jbum.com/cdg_revealed.html

use bitflags::bitflags;
use common::bits;
use log::debug;

use crate::frame::{RenderFrame, H, W};
use crate::packet::{Instruction, Packet, DATA_SIZE};

pub const TILE_W: usize = 6;
pub const TILE_H: usize = 12;

const GRID_LEN: usize = W * H;
const CLUT_LEN: usize = 16;
const MAX_TILE_ROW: usize = H - TILE_H;
const MAX_TILE_COL: usize = W - TILE_W;

bitflags! {
  /// What an instruction actually changed. Anything non-empty means the
  /// next composite will differ from the previous one.
  pub struct Changes: u8 {
    const PIXELS = 1;
    const CLUT = 1 << 1;
    const BORDER = 1 << 2;
    const SCROLL = 1 << 3;
  }
}

fn in_border(row: usize, col: usize) -> bool {
  row < TILE_H || row >= H - TILE_H || col < TILE_W || col >= W - TILE_W
}

pub struct Raster {
  pixels: Box<[u8; GRID_LEN]>,
  clut: [(u8, u8, u8); CLUT_LEN],
  border: u8,
  scroll_x: usize,
  scroll_y: usize,
}

impl Raster {
  pub fn new() -> Self {
    Self {
      pixels: Box::new([0; GRID_LEN]),
      clut: [(0, 0, 0); CLUT_LEN],
      border: 0,
      scroll_x: 0,
      scroll_y: 0,
    }
  }

  /// Back to the blank screen: zeroed grid, all-black color table, border
  /// color 0, no scroll.
  pub fn reset(&mut self) {
    self.pixels.fill(0);
    self.clut = [(0, 0, 0); CLUT_LEN];
    self.border = 0;
    self.scroll_x = 0;
    self.scroll_y = 0;
  }

  pub fn apply(&mut self, packet: &Packet) -> Changes {
    let data = packet.data();
    match packet.instruction() {
      Some(Instruction::MemoryPreset) => self.memory_preset(data),
      Some(Instruction::BorderPreset) => self.border_preset(data),
      Some(Instruction::TileNormal) => self.tile_block(data, false),
      Some(Instruction::TileXor) => self.tile_block(data, true),
      Some(Instruction::ScrollPreset) => self.scroll(data, true),
      Some(Instruction::ScrollCopy) => self.scroll(data, false),
      Some(Instruction::LoadClutLow) => self.load_clut(data, 0),
      Some(Instruction::LoadClutHigh) => self.load_clut(data, 8),
      None => Changes::empty(),
    }
  }

  fn memory_preset(&mut self, data: &[u8; DATA_SIZE]) -> Changes {
    let color = data[0] & 0x0f;
    let repeat = data[1] & 0x0f;

    let mut changes = self.set_border(color);

    // Nonzero repeat counts are retransmissions of a fill we already have.
    // The stream is assumed intact, so only the first one floods the grid.
    if repeat == 0 {
      for px in self.pixels.iter_mut() {
        if *px != color {
          *px = color;
          changes |= Changes::PIXELS;
        }
      }
    }
    changes
  }

  fn border_preset(&mut self, data: &[u8; DATA_SIZE]) -> Changes {
    let color = data[0] & 0x0f;
    let mut changes = self.set_border(color);

    // The preset also lands in the stored grid: margin cells keep the
    // color even if they later scroll into the visible area.
    for y in 0..H {
      for x in 0..W {
        if in_border(y, x) {
          changes |= self.put(y, x, color);
        }
      }
    }
    changes
  }

  fn load_clut(&mut self, data: &[u8; DATA_SIZE], base: usize) -> Changes {
    let mut changes = Changes::empty();
    for (i, pair) in data.chunks_exact(2).enumerate() {
      // Each entry packs 4-bit RGB into the low six bits of two bytes:
      // [rrrrgg] [ggbbbb]
      let high = pair[0] & 0x3f;
      let low = pair[1] & 0x3f;
      let rgb = (
        bits::expand4(high >> 2),
        bits::expand4((high & 0x03) << 2 | low >> 4),
        bits::expand4(low),
      );
      if self.clut[base + i] != rgb {
        self.clut[base + i] = rgb;
        changes |= Changes::CLUT;
      }
    }
    changes
  }

  fn tile_block(&mut self, data: &[u8; DATA_SIZE], xor: bool) -> Changes {
    let color0 = data[0] & 0x0f;
    let color1 = data[1] & 0x0f;
    let row = (data[2] & 0x1f) as usize * TILE_H;
    let col = (data[3] & 0x3f) as usize * TILE_W;

    if row > MAX_TILE_ROW || col > MAX_TILE_COL {
      debug!("tile outside the raster, dropped (row {}, col {})", row, col);
      return Changes::empty();
    }

    let mut changes = Changes::empty();
    for (dy, byte) in data[4..].iter().enumerate() {
      for dx in 0..TILE_W {
        // Bit 5 is the leftmost pixel of the row.
        let color = if byte & (0x20 >> dx) != 0 { color1 } else { color0 };
        let i = (row + dy) * W + col + dx;
        let new = if xor { self.pixels[i] ^ color } else { color };
        if self.pixels[i] != new {
          self.pixels[i] = new;
          changes |= Changes::PIXELS;
        }
      }
    }
    changes
  }

  fn scroll(&mut self, data: &[u8; DATA_SIZE], fill: bool) -> Changes {
    let color = data[0] & 0x0f;
    let h_cmd = (data[1] & 0x30) >> 4;
    let v_cmd = (data[2] & 0x30) >> 4;

    let mut changes = Changes::empty();

    // The sub-tile offsets shift the compositing window by single pixels.
    let x_off = ((data[1] & 0x07) as usize).min(TILE_W - 1);
    let y_off = ((data[2] & 0x0f) as usize).min(TILE_H - 1);
    if (x_off, y_off) != (self.scroll_x, self.scroll_y) {
      self.scroll_x = x_off;
      self.scroll_y = y_off;
      changes |= Changes::SCROLL;
    }

    // Whole-tile movement rotates the grid itself, one tile per packet.
    let dx = match h_cmd {
      1 => TILE_W as isize,
      2 => -(TILE_W as isize),
      _ => 0,
    };
    let dy = match v_cmd {
      1 => TILE_H as isize,
      2 => -(TILE_H as isize),
      _ => 0,
    };
    if dx == 0 && dy == 0 {
      return changes;
    }

    let mut shifted = Box::new([0u8; GRID_LEN]);
    for y in 0..H {
      let src_y = (y as isize - dy).rem_euclid(H as isize) as usize;
      for x in 0..W {
        let src_x = (x as isize - dx).rem_euclid(W as isize) as usize;
        shifted[y * W + x] = self.pixels[src_y * W + src_x];
      }
    }

    if fill {
      // Preset mode paints the vacated band instead of wrapping the far
      // edge into it.
      for y in 0..H {
        for x in 0..W {
          let vacated = (dy > 0 && y < TILE_H)
            || (dy < 0 && y >= H - TILE_H)
            || (dx > 0 && x < TILE_W)
            || (dx < 0 && x >= W - TILE_W);
          if vacated {
            shifted[y * W + x] = color;
          }
        }
      }
    }

    if shifted != self.pixels {
      changes |= Changes::PIXELS;
    }
    self.pixels = shifted;
    changes
  }

  fn set_border(&mut self, color: u8) -> Changes {
    if self.border != color {
      self.border = color;
      Changes::BORDER
    } else {
      Changes::empty()
    }
  }

  fn put(&mut self, row: usize, col: usize, color: u8) -> Changes {
    let i = row * W + col;
    if self.pixels[i] != color {
      self.pixels[i] = color;
      Changes::PIXELS
    } else {
      Changes::empty()
    }
  }

  /// Composites the full 300x216 frame: the border band from the border
  /// color, the interior through the color table at the scrolled address.
  pub fn render_into(&self, frame: &mut RenderFrame) {
    for y in 0..H {
      for x in 0..W {
        let index = if in_border(y, x) {
          self.border
        } else {
          // Offsets are clamped below one tile, so the scrolled address
          // never leaves the grid.
          self.pixels[(y + self.scroll_y) * W + x + self.scroll_x]
        };
        frame.set_pixel(x, y, self.clut[index as usize]);
      }
    }
  }

  pub fn pixel(&self, row: usize, col: usize) -> u8 {
    self.pixels[row * W + col]
  }

  pub fn clut_entry(&self, index: usize) -> (u8, u8, u8) {
    self.clut[index]
  }

  pub fn border_color(&self) -> u8 {
    self.border
  }

  pub fn scroll_offset(&self) -> (usize, usize) {
    (self.scroll_x, self.scroll_y)
  }
}

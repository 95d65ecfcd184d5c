use log::debug;

use crate::frame::RenderFrame;
use crate::raster::{Changes, Raster};
use crate::stream::{PacketStream, PACKETS_PER_SECOND};

/// Replays a packet stream against the clock of some external audio source.
/// Feed it the current playback position and it hands back a freshly
/// composited frame whenever the screen actually changed.
pub struct Player {
  stream: PacketStream,
  raster: Raster,
  frame: RenderFrame,
  cursor: usize,
}

impl Player {
  pub fn new(stream: PacketStream) -> Self {
    Self {
      stream,
      raster: Raster::new(),
      frame: RenderFrame::new(),
      cursor: 0,
    }
  }

  /// Catches the raster up to `millis` and composites if anything visible
  /// changed. None means the frame returned last time is still current.
  ///
  /// Time moving backwards is a seek: the whole state resets and replays
  /// from the first packet.
  pub fn render_at(&mut self, millis: usize) -> Option<&RenderFrame> {
    let target = millis * PACKETS_PER_SECOND / 1000;

    if target < self.cursor {
      debug!("seek from packet {} back to {}, replaying the stream", self.cursor, target);
      self.raster.reset();
      self.cursor = 0;
    }

    let stop = target.min(self.stream.len());
    let mut changes = Changes::empty();
    for packet in &self.stream.packets()[self.cursor..stop] {
      changes |= self.raster.apply(packet);
    }
    self.cursor = stop;

    if changes.is_empty() {
      return None;
    }

    self.raster.render_into(&mut self.frame);
    Some(&self.frame)
  }

  /// Whatever render_at composited last, an opaque black screen before
  /// the first composite.
  pub fn frame(&self) -> &RenderFrame {
    &self.frame
  }

  pub fn raster(&self) -> &Raster {
    &self.raster
  }

  /// Index of the next unconsumed packet.
  pub fn cursor(&self) -> usize {
    self.cursor
  }

  pub fn duration_millis(&self) -> usize {
    self.stream.duration_millis()
  }
}

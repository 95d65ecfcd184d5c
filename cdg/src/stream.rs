use std::fs;
use std::io::Read;
use std::path::Path;

use log::debug;

use crate::error::CdgError;
use crate::packet::{Packet, PACKET_SIZE};

/// 75 subchannel sectors per second, 4 packets per sector.
pub const PACKETS_PER_SECOND: usize = 300;

pub struct PacketStream {
  packets: Vec<Packet>,
}

impl PacketStream {
  pub fn from_file(path: &Path) -> Result<PacketStream, CdgError> {
    let bytes = fs::read(path)?;
    Ok(Self::from_bytes(&bytes))
  }

  pub fn from_reader<R: Read>(mut reader: R) -> Result<PacketStream, CdgError> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    Ok(Self::from_bytes(&bytes))
  }

  /// Strict 24-byte chunking. A trailing partial record can't be decoded
  /// and is dropped.
  pub fn from_bytes(bytes: &[u8]) -> PacketStream {
    let trailing = bytes.len() % PACKET_SIZE;
    if trailing != 0 {
      debug!("not a whole number of packets, dropping {} trailing bytes", trailing);
    }

    let packets = bytes.chunks(PACKET_SIZE).filter_map(Packet::from_record).collect();
    PacketStream { packets }
  }

  pub fn get(&self, index: usize) -> Option<&Packet> {
    self.packets.get(index)
  }

  pub fn packets(&self) -> &[Packet] {
    &self.packets
  }

  pub fn len(&self) -> usize {
    self.packets.len()
  }

  pub fn is_empty(&self) -> bool {
    self.packets.is_empty()
  }

  /// Playback time the stream covers, truncated to whole milliseconds.
  pub fn duration_millis(&self) -> usize {
    self.packets.len() * 1000 / PACKETS_PER_SECOND
  }
}

impl std::fmt::Display for PacketStream {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{} packets, {} ms", self.len(), self.duration_millis())
  }
}

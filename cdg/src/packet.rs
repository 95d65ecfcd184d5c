// CD+G packs graphics into the R-W subchannel of an audio CD, four 24-byte
// packets per 1/75s sector. Format notes: https://jbum.com/cdg_revealed.html

pub const PACKET_SIZE: usize = 24;
pub const DATA_SIZE: usize = 16;

const CMD_GRAPHICS: u8 = 0x09;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
  MemoryPreset,
  BorderPreset,
  TileNormal,
  TileXor,
  ScrollPreset,
  ScrollCopy,
  LoadClutLow,
  LoadClutHigh,
}

impl Instruction {
  fn from_code(code: u8) -> Option<Instruction> {
    match code {
      1 => Some(Instruction::MemoryPreset),
      2 => Some(Instruction::BorderPreset),
      6 => Some(Instruction::TileNormal),
      20 => Some(Instruction::ScrollPreset),
      24 => Some(Instruction::ScrollCopy),
      30 => Some(Instruction::LoadClutLow),
      31 => Some(Instruction::LoadClutHigh),
      38 => Some(Instruction::TileXor),
      _ => None,
    }
  }
}

#[derive(Debug, Clone)]
#[allow(dead_code)]
pub struct Packet {
  command: u8,
  instruction: u8,
  // Q/P error-correction parity. Carried, never checked.
  parity_q: [u8; 2],
  data: [u8; DATA_SIZE],
  parity_p: [u8; 4],
}

impl Packet {
  /// Slices one 24-byte subchannel record. Anything shorter (a truncated
  /// tail) is rejected with None.
  pub fn from_record(record: &[u8]) -> Option<Packet> {
    let record: &[u8; PACKET_SIZE] = record.try_into().ok()?;

    let mut data = [0; DATA_SIZE];
    data.copy_from_slice(&record[4..20]);

    Some(Packet {
      command: record[0] & 0x3f,
      instruction: record[1] & 0x3f,
      parity_q: [record[2], record[3]],
      data,
      parity_p: [record[20], record[21], record[22], record[23]],
    })
  }

  pub fn command(&self) -> u8 {
    self.command
  }

  /// The decoded graphics instruction. None for non-graphics commands and
  /// for instruction codes this decoder does not know. Both are inert as
  /// far as the raster is concerned.
  pub fn instruction(&self) -> Option<Instruction> {
    if self.command != CMD_GRAPHICS {
      return None;
    }
    Instruction::from_code(self.instruction)
  }

  pub fn data(&self) -> &[u8; DATA_SIZE] {
    &self.data
  }
}

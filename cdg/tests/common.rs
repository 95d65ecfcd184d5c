#![allow(dead_code)]

use cdg::packet::{DATA_SIZE, PACKET_SIZE};

pub fn record(instruction: u8, data: &[u8]) -> [u8; PACKET_SIZE] {
  let mut record = [0u8; PACKET_SIZE];
  record[0] = 0x09;
  record[1] = instruction;
  record[4..4 + data.len()].copy_from_slice(data);
  record
}

pub fn filler() -> [u8; PACKET_SIZE] {
  [0; PACKET_SIZE]
}

pub fn memory_preset(color: u8, repeat: u8) -> [u8; PACKET_SIZE] {
  record(1, &[color, repeat])
}

pub fn border_preset(color: u8) -> [u8; PACKET_SIZE] {
  record(2, &[color])
}

/// Loads color table entries 0..8 (or 8..16) from 4-bit RGB triples.
pub fn load_clut(upper: bool, entries: [(u8, u8, u8); 8]) -> [u8; PACKET_SIZE] {
  let mut data = [0u8; DATA_SIZE];
  for (i, (r, g, b)) in entries.into_iter().enumerate() {
    data[i * 2] = r << 2 | g >> 2;
    data[i * 2 + 1] = (g & 0x03) << 4 | b;
  }
  record(if upper { 31 } else { 30 }, &data)
}

pub fn tile_normal(color0: u8, color1: u8, tile_row: u8, tile_col: u8, rows: [u8; 12]) -> [u8; PACKET_SIZE] {
  tile(6, color0, color1, tile_row, tile_col, rows)
}

pub fn tile_xor(color0: u8, color1: u8, tile_row: u8, tile_col: u8, rows: [u8; 12]) -> [u8; PACKET_SIZE] {
  tile(38, color0, color1, tile_row, tile_col, rows)
}

fn tile(instruction: u8, color0: u8, color1: u8, tile_row: u8, tile_col: u8, rows: [u8; 12]) -> [u8; PACKET_SIZE] {
  let mut data = [0u8; DATA_SIZE];
  data[0] = color0;
  data[1] = color1;
  data[2] = tile_row;
  data[3] = tile_col;
  data[4..].copy_from_slice(&rows);
  record(instruction, &data)
}

pub fn scroll_copy(h: u8, v: u8) -> [u8; PACKET_SIZE] {
  record(24, &[0, h, v])
}

pub fn scroll_preset(color: u8, h: u8, v: u8) -> [u8; PACKET_SIZE] {
  record(20, &[color, h, v])
}

pub fn stream_of(records: &[[u8; PACKET_SIZE]]) -> Vec<u8> {
  records.concat()
}

/// The first timestamp whose packet target reaches exactly n packets.
pub fn millis_for(n: usize) -> usize {
  (n * 10 + 2) / 3
}

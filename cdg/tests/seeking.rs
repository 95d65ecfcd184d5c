use cdg::frame::{H, W};
use cdg::player::Player;
use cdg::stream::PacketStream;

mod common;

#[test]
fn seeking_backwards_matches_a_fresh_decode() {
  let bytes = showcase_stream();
  let mut seeked = Player::new(PacketStream::from_bytes(&bytes));
  seeked.render_at(common::millis_for(10));

  // Hop backwards and forwards; after every hop the state must be
  // bit-for-bit what a fresh decode to the same spot produces.
  for packets in [7, 3, 9, 1] {
    let at = common::millis_for(packets);
    seeked.render_at(at);

    let mut fresh = Player::new(PacketStream::from_bytes(&bytes));
    fresh.render_at(at);

    assert_eq!(seeked.cursor(), fresh.cursor());
    assert_eq!(full_grid(&seeked), full_grid(&fresh));
    assert_eq!(seeked.frame().pixels(), fresh.frame().pixels());
    assert_eq!(seeked.raster().border_color(), fresh.raster().border_color());
    assert_eq!(seeked.raster().scroll_offset(), fresh.raster().scroll_offset());
  }
}

#[test]
fn forward_stepping_processes_each_packet_once() {
  let bytes = showcase_stream();
  let mut stepped = Player::new(PacketStream::from_bytes(&bytes));

  let mut last_cursor = 0;
  for ms in 0..=40 {
    stepped.render_at(ms);
    assert!(stepped.cursor() >= last_cursor);
    last_cursor = stepped.cursor();
  }
  assert_eq!(stepped.cursor(), 10);

  let mut oneshot = Player::new(PacketStream::from_bytes(&bytes));
  oneshot.render_at(40);
  assert_eq!(full_grid(&stepped), full_grid(&oneshot));
  assert_eq!(stepped.frame().pixels(), oneshot.frame().pixels());
}

#[test]
fn seeking_an_empty_stream_is_harmless() {
  let mut player = Player::new(PacketStream::from_bytes(&[]));
  assert!(player.render_at(5000).is_none());
  assert!(player.render_at(100).is_none());
  assert_eq!(player.cursor(), 0);
}

// A bit of everything: presets, colors, tiles, both scroll modes, a
// repeated preset, and idle filler in between.
fn showcase_stream() -> Vec<u8> {
  let mut entries = [(0, 0, 0); 8];
  entries[1] = (15, 8, 0);
  entries[2] = (0, 4, 12);
  let records = [
    common::memory_preset(1, 0),
    common::load_clut(false, entries),
    common::filler(),
    common::border_preset(2),
    common::tile_normal(1, 2, 5, 10, [0x2d; 12]),
    common::filler(),
    common::scroll_preset(3, 0x10, 0),
    common::tile_xor(0, 7, 5, 10, [0x1e; 12]),
    common::scroll_copy(0x02, 0x05),
    common::memory_preset(1, 1),
  ];
  common::stream_of(&records)
}

fn full_grid(player: &Player) -> Vec<u8> {
  let raster = player.raster();
  (0..H).flat_map(|row| (0..W).map(move |col| raster.pixel(row, col))).collect()
}

#![cfg_attr(not(test), no_std)]

pub mod bits {
  /// Expands a 4-bit channel value to 8 bits. 0 maps to 0, 15 to 255.
  pub fn expand4(n: u8) -> u8 {
    (n & 0x0f) * 17
  }
}

pub mod timecode {
  /// Parses a timestamp given as plain milliseconds ("2500") or as a
  /// minutes:seconds timecode with an optional fraction ("1:23", "1:23.500").
  pub fn parse_millis(src: &str) -> core::result::Result<usize, core::num::ParseIntError> {
    let (minutes, rest) = match src.split_once(':') {
      None => return src.parse(),
      Some((m, rest)) => (m.parse::<usize>()?, rest),
    };

    let (seconds, frac) = match rest.split_once('.') {
      None => (rest.parse::<usize>()?, 0),
      Some((s, f)) => (s.parse::<usize>()?, parse_frac(f)?),
    };

    Ok((minutes * 60 + seconds) * 1000 + frac)
  }

  // "5" is 500ms, "05" is 50ms, "055" is 55ms. Anything past the third
  // digit is below millisecond resolution and truncated away.
  fn parse_frac(frac: &str) -> core::result::Result<usize, core::num::ParseIntError> {
    let n = frac.parse::<usize>()?;
    Ok(match frac.len() {
      1 => n * 100,
      2 => n * 10,
      3 => n,
      len => n / 10usize.pow(len as u32 - 3),
    })
  }
}

use std::collections::BTreeMap;
use std::path::PathBuf;

use cdg::player::Player;
use cdg::stream::PacketStream;
use common::timecode;
use structopt::StructOpt;

mod snapshot;

#[derive(StructOpt, Debug)]
struct Cli {
  path: PathBuf,
  #[structopt(short, long, parse(try_from_str = timecode::parse_millis))]
  at: Option<usize>,
  #[structopt(short, long)]
  out: Option<PathBuf>,
  #[structopt(short, long)]
  info: bool,
  #[structopt(short, long)]
  verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
  let args: Cli = Cli::from_args();
  let level = if args.verbose { "debug" } else { "info" };
  let _logger = flexi_logger::Logger::try_with_str(level)?.start()?;

  println!("Loading {:?}.", args.path);
  let stream = PacketStream::from_file(&args.path)?;
  println!("Loaded! {}", stream);

  if args.info {
    print_info(&stream);
    return Ok(());
  }

  let at = args.at.unwrap_or_else(|| stream.duration_millis());
  let out = args.out.unwrap_or_else(|| args.path.with_extension("png"));

  let mut player = Player::new(stream);
  player.render_at(at);
  snapshot::write(player.frame(), &out)?;
  println!("Rendered {} into {:?}.", fmt_millis(at), out);

  Ok(())
}

fn print_info(stream: &PacketStream) {
  let duration = stream.duration_millis();
  println!("packets: {}", stream.len());
  println!("duration: {} ({} ms)", fmt_millis(duration), duration);

  let mut counts: BTreeMap<String, usize> = BTreeMap::new();
  for packet in stream.packets() {
    let name = match packet.instruction() {
      Some(instruction) => format!("{:?}", instruction),
      None => "(filler)".to_string(),
    };
    *counts.entry(name).or_default() += 1;
  }

  println!("instructions:");
  for (name, count) in &counts {
    println!("  {:<13} {}", name, count);
  }
}

fn fmt_millis(millis: usize) -> String {
  format!("{}:{:02}.{:03}", millis / 60_000, millis / 1000 % 60, millis % 1000)
}

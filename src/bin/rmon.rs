extern crate env_logger;
#[macro_use]
extern crate log;
extern crate rmon;

use clap::Parser;
use rmon::{Options, Stop};
use std::io::{stderr, Write};
use std::process;
use std::time::Duration;

/// Track RandR screen, CRTC, output and output property changes
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// X display to connect to (defaults to $DISPLAY).
  #[arg(short, long)]
  display: Option<String>,
  /// Milliseconds to sleep between termination checks while idle.
  #[arg(long, value_name = "MS", default_value_t = 250)]
  poll_interval: u64,
}

impl From<Cli> for Options {
  fn from(cli: Cli) -> Options {
    Options {
      display: cli.display,
      poll_interval: Duration::from_millis(cli.poll_interval),
    }
  }
}

fn main() {
  env_logger::init();
  let options = Options::from(Cli::parse());

  match rmon::run(&options) {
    Ok(Stop::Terminated(signals)) => info!("terminated after {} signal(s)", signals),
    Ok(Stop::ConnectionClosed) => {
      let _ = writeln!(&mut stderr(), "Display connection closed by server");
    }
    Err(err) => {
      let _ = writeln!(&mut stderr(), "error: {}", err);
      process::exit(1);
    }
  }
}

#[macro_use]
extern crate log;
extern crate libc;
extern crate x11rb;

mod backend;
pub mod config;
pub mod decode;
mod env;
pub mod error;
pub mod event;
pub mod labels;
pub mod signal;

pub use backend::{Display, EventSource, Incoming};
pub use config::Options;
pub use env::{Env, Stop};
pub use error::Error;

use std::io;

/// Prints RandR notifications to stdout until a termination signal or a
/// server disconnect.
pub fn run(options: &Options) -> Result<Stop, Error> {
  let display = Display::open(options)?;
  signal::install_handlers()?;

  let stdout = io::stdout();
  trace!("watching window 0x{:x}", display.window());
  let mut env = Env::new(display, stdout.lock(), &signal::TERMINATE, options.poll_interval);

  info!("now starting main loop...");
  env.handle_events()
}

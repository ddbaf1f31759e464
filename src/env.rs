use crate::backend::{EventSource, Incoming};
use crate::decode;
use crate::error::Error;
use crate::event::RandrEvent;
use crate::signal::TerminationFlag;
use std::io::Write;
use std::time::Duration;

/// Why the event loop returned.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Stop {
  /// A termination signal was seen; carries the number received so far.
  Terminated(usize),
  /// The server went away.
  ConnectionClosed,
}

/// Everything the event loop works with.
pub struct Env<'a, S, W> {
  source: S,
  out: W,
  quit: &'a TerminationFlag,
  poll_interval: Duration,
}

impl<'a, S: EventSource, W: Write> Env<'a, S, W> {
  pub fn new(source: S, out: W, quit: &'a TerminationFlag, poll_interval: Duration) -> Env<'a, S, W> {
    Env {
      source: source,
      out: out,
      quit: quit,
      poll_interval: poll_interval,
    }
  }

  /// Runs until a termination signal is seen or the connection breaks.
  ///
  /// Every event already queued is printed before the flag is checked.
  pub fn handle_events(&mut self) -> Result<Stop, Error> {
    loop {
      loop {
        match self.source.poll_event() {
          Ok(Some(Incoming::Randr(ev))) => self.print(&ev)?,
          Ok(Some(Incoming::Ignored)) => (),
          Ok(None) => break,
          Err(err) => return Self::on_error(err),
        }
      }

      if self.quit.is_raised() {
        info!("termination requested");
        return Ok(Stop::Terminated(self.quit.count()));
      }

      if let Err(err) = self.source.wait_readable(self.poll_interval) {
        return Self::on_error(err);
      }
    }
  }

  fn print(&mut self, ev: &RandrEvent) -> Result<(), Error> {
    trace!("event: {:?}", ev);
    decode::print_event(&mut self.out, &self.source, ev)?;
    self.out.flush()?;
    Ok(())
  }

  fn on_error(err: Error) -> Result<Stop, Error> {
    if err.is_disconnect() {
      debug!("display connection lost: {:?}", err);
      Ok(Stop::ConnectionClosed)
    } else {
      Err(err)
    }
  }

  #[cfg(test)]
  fn into_source(self) -> S {
    self.source
  }
}

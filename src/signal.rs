use crate::error::Error;
use std::io;
use std::mem::zeroed;
use std::os::raw::c_int;
use std::ptr::null_mut;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Signals that end the event loop.
pub const TERMINATION_SIGNALS: [c_int; 4] = [libc::SIGINT, libc::SIGHUP, libc::SIGQUIT, libc::SIGTERM];

/// A counter raised from signal context and polled by the main loop.
pub struct TerminationFlag(AtomicUsize);

impl TerminationFlag {
  pub const fn new() -> TerminationFlag {
    TerminationFlag(AtomicUsize::new(0))
  }

  pub fn raise(&self) {
    self.0.fetch_add(1, Ordering::SeqCst);
  }

  /// How many times the flag has been raised.
  pub fn count(&self) -> usize {
    self.0.load(Ordering::SeqCst)
  }

  pub fn is_raised(&self) -> bool {
    self.count() > 0
  }
}

pub static TERMINATE: TerminationFlag = TerminationFlag::new();

extern "C" fn termination_handler(_: c_int) {
  TERMINATE.raise();
}

/// Routes the termination signals to `TERMINATE`.
///
/// `SA_RESTART` is left out so a blocking wait returns with `EINTR`.
pub fn install_handlers() -> Result<(), Error> {
  unsafe {
    let mut sa = zeroed::<libc::sigaction>();
    sa.sa_sigaction = termination_handler as extern "C" fn(c_int) as libc::sighandler_t;
    libc::sigemptyset(&mut sa.sa_mask);
    sa.sa_flags = 0;

    for &signum in TERMINATION_SIGNALS.iter() {
      if libc::sigaction(signum, &sa, null_mut()) != 0 {
        return Err(Error::Signal(signum, io::Error::last_os_error()));
      }
    }
  }
  trace!("installed termination handlers");
  Ok(())
}

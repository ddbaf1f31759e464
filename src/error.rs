use std::io;
use std::os::raw::c_int;
use x11rb::errors::{ConnectError, ConnectionError, ReplyError, ReplyOrIdError};

#[derive(thiserror::Error, Debug)]
pub enum Error {
  #[error("Failed to connect to display")]
  Connect(#[from] ConnectError),
  #[error("Failed to get default screen")]
  NoScreen,
  #[error("RandR extension missing")]
  MissingExtension,
  #[error("display connection error")]
  Connection(#[from] ConnectionError),
  #[error("display request failed")]
  Reply(#[from] ReplyError),
  #[error("failed to allocate a resource id")]
  ReplyOrId(#[from] ReplyOrIdError),
  #[error("failed to install handler for signal {0}")]
  Signal(c_int, #[source] io::Error),
  #[error("I/O error")]
  Io(#[from] io::Error),
}

impl Error {
  /// Whether the error means the display connection is gone.
  ///
  /// Only socket failures count; parse and protocol errors leave the
  /// connection usable and are reported as errors.
  pub fn is_disconnect(&self) -> bool {
    match self {
      Error::Connection(ConnectionError::IoError(_)) => true,
      Error::Reply(ReplyError::ConnectionError(ConnectionError::IoError(_))) => true,
      Error::ReplyOrId(ReplyOrIdError::ConnectionError(ConnectionError::IoError(_))) => true,
      _ => false,
    }
  }
}

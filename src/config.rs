use std::time::Duration;

pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(250);

#[derive(Debug, Clone, PartialEq)]
pub struct Options {
  /// X display to connect to; `$DISPLAY` when unset.
  pub display: Option<String>,
  /// Longest idle stretch before the termination flag is looked at again.
  pub poll_interval: Duration,
}

impl Default for Options {
  fn default() -> Options {
    Options {
      display: None,
      poll_interval: DEFAULT_POLL_INTERVAL,
    }
  }
}

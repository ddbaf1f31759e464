//! Human readable names for the small integer codes RandR puts on the wire.

use std::fmt;

/// An association of wire codes to labels.
pub struct Table {
  entries: &'static [(u32, &'static str)],
}

impl Table {
  const fn new(entries: &'static [(u32, &'static str)]) -> Table {
    Table { entries: entries }
  }

  pub fn lookup(&self, code: u32) -> Option<&'static str> {
    self.entries
      .iter()
      .find(|&&(c, _)| c == code)
      .map(|&(_, label)| label)
  }

  /// Label for `code`, falling back to the raw value when absent.
  pub fn label(&self, code: u32) -> Label {
    Label {
      code: code,
      name: self.lookup(code),
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Label {
  code: u32,
  name: Option<&'static str>,
}

impl fmt::Display for Label {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match self.name {
      Some(name) => f.write_str(name),
      None => write!(f, "unknown (raw value {})", self.code),
    }
  }
}

/// Keyed by the flag value itself, so a combined rotation and reflection
/// has no entry.
pub static ROTATION: Table = Table::new(&[
  (1, "XCB_RANDR_ROTATION_0"),
  (2, "XCB_RANDR_ROTATION_90"),
  (4, "XCB_RANDR_ROTATION_180"),
  (8, "XCB_RANDR_ROTATION_270"),
  (16, "XCB_RANDR_ROTATION_REFLECT_X"),
  (32, "XCB_RANDR_ROTATION_REFLECT_Y"),
]);

pub static CONNECTION: Table = Table::new(&[
  (0, "XCB_RANDR_CONNECTION_CONNECTED"),
  (1, "XCB_RANDR_CONNECTION_DISCONNECTED"),
  (2, "XCB_RANDR_CONNECTION_UNKNOWN"),
]);

pub static PROPERTY_STATUS: Table = Table::new(&[(0, "NEW"), (1, "DELETE")]);

pub static NOTIFY_SUBTYPE: Table = Table::new(&[
  (0, "XCB_RANDR_NOTIFY_CRTC_CHANGE"),
  (1, "XCB_RANDR_NOTIFY_OUTPUT_CHANGE"),
  (2, "XCB_RANDR_NOTIFY_OUTPUT_PROPERTY"),
  (3, "XCB_RANDR_NOTIFY_PROVIDER_CHANGE"),
  (4, "XCB_RANDR_NOTIFY_PROVIDER_PROPERTY"),
  (5, "XCB_RANDR_NOTIFY_RESOURCE_CHANGE"),
  (6, "XCB_RANDR_NOTIFY_LEASE"),
]);

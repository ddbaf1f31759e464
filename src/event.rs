use x11rb::protocol::randr;
use x11rb::protocol::Event as XEvent;
use x11rb::protocol::xproto::{Atom, Timestamp, Window};

/// RandR notifications this tool understands.
#[derive(Debug, Clone, PartialEq)]
pub enum RandrEvent {
  ScreenChange(ScreenChange),
  Notify(Notify),
}

/// Payload of the generic `RRNotify` event, discriminated by its subtype.
#[derive(Debug, Clone, PartialEq)]
pub enum Notify {
  CrtcChange(CrtcChange),
  OutputChange(OutputChange),
  OutputProperty(OutputProperty),
  /// A subtype this build does not decode (providers, resources, leases).
  Other(u32),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScreenChange {
  pub root: Window,
  pub timestamp: Timestamp,
  pub config_timestamp: Timestamp,
  pub rotation: u32,
  pub width: u32,
  pub height: u32,
  pub mwidth: u32,
  pub mheight: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CrtcChange {
  pub window: Window,
  pub timestamp: Timestamp,
  pub crtc: u32,
  pub mode: u32,
  pub rotation: u32,
  pub x: i32,
  pub y: i32,
  pub width: u32,
  pub height: u32,
}

// subpixel order is left out
#[derive(Debug, Clone, PartialEq)]
pub struct OutputChange {
  pub window: Window,
  pub timestamp: Timestamp,
  pub config_timestamp: Timestamp,
  pub output: u32,
  pub crtc: u32,
  pub mode: u32,
  pub rotation: u32,
  pub connection: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OutputProperty {
  pub window: Window,
  pub timestamp: Timestamp,
  pub output: u32,
  pub atom: Atom,
  pub status: u32,
}

impl Notify {
  pub fn subtype(&self) -> u32 {
    match self {
      Notify::CrtcChange(_) => u32::from(u8::from(randr::Notify::CRTC_CHANGE)),
      Notify::OutputChange(_) => u32::from(u8::from(randr::Notify::OUTPUT_CHANGE)),
      Notify::OutputProperty(_) => u32::from(u8::from(randr::Notify::OUTPUT_PROPERTY)),
      Notify::Other(code) => *code,
    }
  }
}

impl RandrEvent {
  /// Picks the RandR notifications out of everything the server sends.
  ///
  /// The event code comparison against the extension's first event is done
  /// by x11rb while parsing, so only the subtype is left to look at here.
  pub fn from_x11(event: &XEvent) -> Option<RandrEvent> {
    match event {
      XEvent::RandrScreenChangeNotify(ev) => Some(RandrEvent::ScreenChange(ev.into())),
      XEvent::RandrNotify(ev) => Some(RandrEvent::Notify(ev.into())),
      _ => None,
    }
  }
}

impl<'a> From<&'a randr::ScreenChangeNotifyEvent> for ScreenChange {
  fn from(ev: &randr::ScreenChangeNotifyEvent) -> ScreenChange {
    ScreenChange {
      root: ev.root,
      timestamp: ev.timestamp,
      config_timestamp: ev.config_timestamp,
      rotation: u32::from(ev.rotation),
      width: u32::from(ev.width),
      height: u32::from(ev.height),
      mwidth: u32::from(ev.mwidth),
      mheight: u32::from(ev.mheight),
    }
  }
}

impl<'a> From<&'a randr::NotifyEvent> for Notify {
  fn from(ev: &randr::NotifyEvent) -> Notify {
    match ev.sub_code {
      randr::Notify::CRTC_CHANGE => {
        let cc = ev.u.as_cc();
        Notify::CrtcChange(CrtcChange {
          window: cc.window,
          timestamp: cc.timestamp,
          crtc: cc.crtc,
          mode: cc.mode,
          rotation: u32::from(cc.rotation),
          x: i32::from(cc.x),
          y: i32::from(cc.y),
          width: u32::from(cc.width),
          height: u32::from(cc.height),
        })
      }
      randr::Notify::OUTPUT_CHANGE => {
        let oc = ev.u.as_oc();
        Notify::OutputChange(OutputChange {
          window: oc.window,
          timestamp: oc.timestamp,
          config_timestamp: oc.config_timestamp,
          output: oc.output,
          crtc: oc.crtc,
          mode: oc.mode,
          rotation: u32::from(oc.rotation),
          connection: u32::from(oc.connection),
        })
      }
      randr::Notify::OUTPUT_PROPERTY => {
        let op = ev.u.as_op();
        Notify::OutputProperty(OutputProperty {
          window: op.window,
          timestamp: op.timestamp,
          output: op.output,
          atom: op.atom,
          status: u32::from(op.status),
        })
      }
      other => Notify::Other(u32::from(u8::from(other))),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use x11rb::protocol::randr::{CrtcChange as RawCrtcChange, NotifyData, NotifyEvent};
  use x11rb::protocol::xproto::Property;

  fn notify(sub_code: randr::Notify, u: NotifyData) -> NotifyEvent {
    NotifyEvent {
      response_type: 90,
      sub_code: sub_code,
      sequence: 7,
      u: u,
    }
  }

  #[test]
  fn crtc_change_keeps_signed_position() {
    let raw = RawCrtcChange {
      timestamp: 1000,
      window: 0x200001,
      crtc: 63,
      mode: 70,
      rotation: 2u8.into(),
      x: -1920,
      y: 0,
      width: 1080,
      height: 1920,
    };
    let ev = notify(randr::Notify::CRTC_CHANGE, NotifyData::from(raw));
    match Notify::from(&ev) {
      Notify::CrtcChange(cc) => {
        assert_eq!(cc.window, 0x200001);
        assert_eq!(cc.rotation, 2);
        assert_eq!(cc.x, -1920);
        assert_eq!(cc.height, 1920);
      }
      other => panic!("unexpected {:?}", other),
    }
  }

  #[test]
  fn screen_change_keeps_config_timestamp_and_physical_size() {
    let raw = randr::ScreenChangeNotifyEvent {
      response_type: 89,
      rotation: 1u8.into(),
      sequence: 12,
      timestamp: 123456,
      config_timestamp: 123000,
      root: 0x2b0,
      request_window: 0x1e00001,
      size_id: 0,
      subpixel_order: x11rb::protocol::render::SubPixel::UNKNOWN,
      width: 1920,
      height: 1080,
      mwidth: 508,
      mheight: 285,
    };
    match RandrEvent::from_x11(&XEvent::RandrScreenChangeNotify(raw)) {
      Some(RandrEvent::ScreenChange(sc)) => {
        assert_eq!(sc,
                   ScreenChange {
                     root: 0x2b0,
                     timestamp: 123456,
                     config_timestamp: 123000,
                     rotation: 1,
                     width: 1920,
                     height: 1080,
                     mwidth: 508,
                     mheight: 285,
                   });
      }
      other => panic!("unexpected {:?}", other),
    }
  }

  #[test]
  fn output_change_keeps_connection_state() {
    let raw = randr::OutputChange {
      timestamp: 4242,
      config_timestamp: 4000,
      window: 0x1e00001,
      output: 66,
      crtc: 63,
      mode: 70,
      rotation: 4u8.into(),
      connection: randr::Connection::UNKNOWN,
      subpixel_order: x11rb::protocol::render::SubPixel::HORIZONTAL_RGB,
    };
    let ev = notify(randr::Notify::OUTPUT_CHANGE, NotifyData::from(raw));
    assert_eq!(Notify::from(&ev),
               Notify::OutputChange(OutputChange {
                 window: 0x1e00001,
                 timestamp: 4242,
                 config_timestamp: 4000,
                 output: 66,
                 crtc: 63,
                 mode: 70,
                 rotation: 4,
                 connection: 2,
               }));
  }

  #[test]
  fn output_property_status_is_numeric() {
    let raw = randr::OutputProperty {
      window: 0x200001,
      output: 66,
      atom: 301,
      timestamp: 5,
      status: Property::DELETE,
    };
    let ev = notify(randr::Notify::OUTPUT_PROPERTY, NotifyData::from(raw));
    let decoded = Notify::from(&ev);
    assert_eq!(decoded.subtype(), 2);
    match decoded {
      Notify::OutputProperty(op) => {
        assert_eq!(op.atom, 301);
        assert_eq!(op.status, 1);
      }
      other => panic!("unexpected {:?}", other),
    }
  }

  #[test]
  fn unknown_subtype_is_kept_as_raw_code() {
    let raw = randr::OutputProperty {
      window: 0x200001,
      output: 66,
      atom: 301,
      timestamp: 5,
      status: Property::NEW_VALUE,
    };
    let ev = notify(randr::Notify::from(42u8), NotifyData::from(raw));
    assert_eq!(Notify::from(&ev), Notify::Other(42));
  }
}

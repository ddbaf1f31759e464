use crate::error::Error;
use crate::event::{CrtcChange, Notify, OutputChange, OutputProperty, RandrEvent, ScreenChange};
use crate::labels::{CONNECTION, NOTIFY_SUBTYPE, PROPERTY_STATUS, ROTATION};
use std::io::{self, Write};
use x11rb::protocol::xproto::Atom;

/// Resolves atoms to their names with a round trip to the server.
pub trait AtomNames {
  fn atom_name(&self, atom: Atom) -> Result<String, Error>;
}

pub fn print_event<W: Write>(out: &mut W, atoms: &dyn AtomNames, ev: &RandrEvent) -> io::Result<()> {
  match ev {
    RandrEvent::ScreenChange(sc) => print_screen_change(out, sc),
    RandrEvent::Notify(notify) => print_notify(out, atoms, notify),
  }
}

pub fn print_screen_change<W: Write>(out: &mut W, ev: &ScreenChange) -> io::Result<()> {
  writeln!(out, "randr_screen_change:")?;
  writeln!(out,
           "\troot 0x{:x}, timestamp {}, config_timestamp {}",
           ev.root,
           ev.timestamp,
           ev.config_timestamp)?;
  writeln!(out, "\trotation {}", ROTATION.label(ev.rotation))?;
  writeln!(out,
           "\twidth {}, height {}, mwidth {}, mheight {}",
           ev.width,
           ev.height,
           ev.mwidth,
           ev.mheight)
}

/// Prints the envelope and its payload; subtypes without a decoder print nothing.
pub fn print_notify<W: Write>(out: &mut W, atoms: &dyn AtomNames, ev: &Notify) -> io::Result<()> {
  if let Notify::Other(subtype) = *ev {
    debug!("ignoring randr notify {}", NOTIFY_SUBTYPE.label(subtype));
    return Ok(());
  }

  writeln!(out, "randr_notify (subtype {})", ev.subtype())?;
  match ev {
    Notify::CrtcChange(cc) => print_crtc_change(out, cc),
    Notify::OutputChange(oc) => print_output_change(out, oc),
    Notify::OutputProperty(op) => print_output_property(out, atoms, op),
    Notify::Other(_) => Ok(()),
  }
}

pub fn print_crtc_change<W: Write>(out: &mut W, cc: &CrtcChange) -> io::Result<()> {
  writeln!(out, "\trandr_crtc_change:")?;
  writeln!(out,
           "\twindow 0x{:x}, timestamp {}, crtc {}, mode {}",
           cc.window,
           cc.timestamp,
           cc.crtc,
           cc.mode)?;
  writeln!(out, "\trotation {}", ROTATION.label(cc.rotation))?;
  writeln!(out,
           "\tx {}, y {}, width {}, height {}",
           cc.x,
           cc.y,
           cc.width,
           cc.height)
}

pub fn print_output_change<W: Write>(out: &mut W, oc: &OutputChange) -> io::Result<()> {
  writeln!(out, "\trandr_output_change:")?;
  writeln!(out,
           "\twindow 0x{:x}, timestamp {}, config_timestamp {}",
           oc.window,
           oc.timestamp,
           oc.config_timestamp)?;
  writeln!(out, "\toutput {}, crtc {}, mode {}", oc.output, oc.crtc, oc.mode)?;
  writeln!(out, "\trotation {}", ROTATION.label(oc.rotation))?;
  writeln!(out, "\tconnection {}", CONNECTION.label(oc.connection))
}

pub fn print_output_property<W: Write>(out: &mut W,
                                       atoms: &dyn AtomNames,
                                       op: &OutputProperty)
                                       -> io::Result<()> {
  writeln!(out, "\trandr_output_property:")?;
  writeln!(out,
           "\twindow 0x{:x}, timestamp {}, output {}",
           op.window,
           op.timestamp,
           op.output)?;

  let name = match atoms.atom_name(op.atom) {
    Ok(name) => name,
    Err(err) => {
      warn!("get_atom_name({}): {}", op.atom, err);
      return writeln!(out, "\tfailed to get name for atom {}", op.atom);
    }
  };
  writeln!(out, "\tproperty {} ({})", name, PROPERTY_STATUS.label(op.status))
}

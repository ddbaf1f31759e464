use crate::config::Options;
use crate::decode::AtomNames;
use crate::error::Error;
use crate::event::RandrEvent;
use std::io;
use std::os::raw::c_int;
use std::os::unix::io::AsRawFd;
use std::time::Duration;
use x11rb::connection::{Connection, RequestConnection};
use x11rb::protocol::randr::{self, ConnectionExt as _};
use x11rb::protocol::xproto::{Atom, ConnectionExt as _, CreateWindowAux, EventMask, Window,
                              WindowClass};
use x11rb::protocol::Event as XEvent;
use x11rb::rust_connection::RustConnection;

/// What came off the connection's event queue.
#[derive(Debug, Clone, PartialEq)]
pub enum Incoming {
  Randr(RandrEvent),
  /// Core events and anything else the notification window happens to receive.
  Ignored,
}

/// The event queue the main loop drains.
pub trait EventSource: AtomNames {
  /// Non-blocking dequeue; `Ok(None)` once the queue is empty.
  fn poll_event(&mut self) -> Result<Option<Incoming>, Error>;

  /// Sleeps until the server has more to say, a signal arrives, or `timeout` passes.
  fn wait_readable(&mut self, timeout: Duration) -> Result<(), Error>;
}

/// A connection to the X server with RandR notifications routed to a private window.
pub struct Display {
  conn: RustConnection,
  window: Window,
}

impl Drop for Display {
  fn drop(&mut self) {
    let res = self.conn
      .destroy_window(self.window)
      .and_then(|_| self.conn.flush());
    if let Err(err) = res {
      debug!("destroy_window(0x{:x}): {}", self.window, err);
    }
  }
}

impl Display {
  pub fn open(options: &Options) -> Result<Display, Error> {
    let (conn, screen_num) = x11rb::connect(options.display.as_deref())?;
    info!("success: connect (screen {})", screen_num);

    let (root, root_depth) = {
      let screen = conn.setup().roots.get(screen_num).ok_or(Error::NoScreen)?;
      (screen.root, screen.root_depth)
    };

    let ext = conn.extension_information(randr::X11_EXTENSION_NAME)?
      .ok_or(Error::MissingExtension)?;
    debug!("RandR major opcode {}, first event {}",
           ext.major_opcode,
           ext.first_event);

    // the server withholds CRTC and output notifications from pre-1.2 clients
    let version = conn.randr_query_version(1, 2)?.reply()?;
    info!("success: RandR {}.{}",
          version.major_version,
          version.minor_version);

    let window = Self::create_notify_window(&conn, root, root_depth)?;
    info!("success: notification window 0x{:x}", window);

    Ok(Display {
      conn: conn,
      window: window,
    })
  }

  fn create_notify_window(conn: &RustConnection, root: Window, depth: u8) -> Result<Window, Error> {
    let window = conn.generate_id()?;
    let event_mask = EventMask::EXPOSURE | EventMask::VISIBILITY_CHANGE |
                     EventMask::STRUCTURE_NOTIFY |
                     EventMask::RESIZE_REDIRECT |
                     EventMask::SUBSTRUCTURE_NOTIFY;
    conn.create_window(depth,
                       window,
                       root,
                       0,
                       0,
                       1,
                       1,
                       0,
                       WindowClass::COPY_FROM_PARENT,
                       x11rb::COPY_FROM_PARENT,
                       &CreateWindowAux::new().event_mask(event_mask))?;
    conn.randr_select_input(window,
                            randr::NotifyMask::SCREEN_CHANGE | randr::NotifyMask::CRTC_CHANGE |
                            randr::NotifyMask::OUTPUT_CHANGE |
                            randr::NotifyMask::OUTPUT_PROPERTY)?;
    conn.flush()?;
    Ok(window)
  }

  pub fn window(&self) -> Window {
    self.window
  }
}

impl AtomNames for Display {
  fn atom_name(&self, atom: Atom) -> Result<String, Error> {
    let reply = self.conn.get_atom_name(atom)?.reply()?;
    Ok(String::from_utf8_lossy(&reply.name).into_owned())
  }
}

impl EventSource for Display {
  fn poll_event(&mut self) -> Result<Option<Incoming>, Error> {
    let event = match self.conn.poll_for_event()? {
      Some(event) => event,
      None => return Ok(None),
    };

    if let XEvent::Error(ref err) = event {
      warn!("X error: {:?}", err);
      return Ok(Some(Incoming::Ignored));
    }

    Ok(Some(match RandrEvent::from_x11(&event) {
      Some(ev) => Incoming::Randr(ev),
      None => {
        trace!("ignoring non-RandR event");
        Incoming::Ignored
      }
    }))
  }

  fn wait_readable(&mut self, timeout: Duration) -> Result<(), Error> {
    let mut fds = [libc::pollfd {
                     fd: self.conn.stream().as_raw_fd(),
                     events: libc::POLLIN,
                     revents: 0,
                   }];
    let timeout = timeout.as_millis().min(c_int::max_value() as u128) as c_int;

    let ret = unsafe { libc::poll(fds.as_mut_ptr(), fds.len() as libc::nfds_t, timeout) };
    if ret < 0 {
      let err = io::Error::last_os_error();
      if err.kind() != io::ErrorKind::Interrupted {
        return Err(err.into());
      }
    }
    Ok(())
  }
}

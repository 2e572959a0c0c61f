//! Publishing the status line to the window manager

use std::io::Write;
use thiserror::Error;
use x11rb::connection::Connection;
use x11rb::errors::{ConnectError, ConnectionError, ReplyError};
use x11rb::protocol::xproto::{Atom, AtomEnum, ConnectionExt as _, PropMode, Window};
use x11rb::rust_connection::RustConnection;
use x11rb::wrapper::ConnectionExt as _;

/// Errors raised while publishing a status line
#[derive(Debug, Error)]
pub enum PublishError {
    #[error("cannot connect to the X server: {0}")]
    Connect(#[from] ConnectError),

    #[error("X connection failed: {0}")]
    Connection(#[from] ConnectionError),

    #[error("X request failed: {0}")]
    Reply(#[from] ReplyError),

    #[error("cannot write status line: {0}")]
    Io(#[from] std::io::Error),
}

/// Destination for composed status lines
pub trait Publisher: Send {
    /// Replace the currently displayed status with `text`
    fn publish(&mut self, text: &str) -> Result<(), PublishError>;
}

/// Sets the root window name, which dwm shows as its status text
pub struct X11Publisher {
    conn: RustConnection,
    root: Window,
    utf8_string: Atom,
}

impl X11Publisher {
    /// Connect to `display`, or to `$DISPLAY` when `None`
    pub fn connect(display: Option<&str>) -> Result<Self, PublishError> {
        let (conn, screen_num) = x11rb::connect(display)?;
        let root = conn.setup().roots[screen_num].root;
        let utf8_string = conn.intern_atom(false, b"UTF8_STRING")?.reply()?.atom;

        log::info!("Connected to X display, root window {:#x}", root);
        Ok(Self {
            conn,
            root,
            utf8_string,
        })
    }
}

impl Publisher for X11Publisher {
    fn publish(&mut self, text: &str) -> Result<(), PublishError> {
        // Checked request: a dead connection surfaces here instead of on the next tick
        self.conn
            .change_property8(
                PropMode::REPLACE,
                self.root,
                AtomEnum::WM_NAME,
                self.utf8_string,
                text.as_bytes(),
            )?
            .check()?;
        Ok(())
    }
}

/// Writes one status line per tick, for previews and piping into other bars
pub struct WriterPublisher<W> {
    out: W,
}

/// [`WriterPublisher`] on standard output
pub type StdoutPublisher = WriterPublisher<std::io::Stdout>;

impl StdoutPublisher {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> WriterPublisher<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write + Send> Publisher for WriterPublisher<W> {
    fn publish(&mut self, text: &str) -> Result<(), PublishError> {
        writeln!(self.out, "{}", text)?;
        self.out.flush()?;
        Ok(())
    }
}

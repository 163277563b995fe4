//! Scoped mouse capture
//!
//! Pointer events only reach the app while the terminal reports them. The
//! guard turns reporting on when acquired and off again when dropped, so an
//! unmounted app never leaves the terminal capturing the mouse.

use std::io::{self, Write};

use ratatui::crossterm::ExecutableCommand;
use ratatui::crossterm::event::{DisableMouseCapture, EnableMouseCapture};

pub struct MouseCaptureGuard {
    writer: Box<dyn Write>,
}

impl MouseCaptureGuard {
    pub fn acquire<W: Write + 'static>(writer: W) -> io::Result<Self> {
        let mut writer: Box<dyn Write> = Box::new(writer);
        writer.execute(EnableMouseCapture)?;
        log::debug!("Mouse capture enabled");
        Ok(Self { writer })
    }
}

impl Drop for MouseCaptureGuard {
    fn drop(&mut self) {
        if let Err(e) = self.writer.execute(DisableMouseCapture) {
            log::warn!("Failed to disable mouse capture: {}", e);
        }
        log::debug!("Mouse capture released");
    }
}

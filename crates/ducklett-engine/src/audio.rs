//! Best-effort sound cues.
//!
//! Playback is never allowed to fail an interaction: callers go through
//! [`Renderer::cue`](crate::Renderer::cue), which logs and discards errors.

use std::fmt;
use std::io::{self, Write};

use is_terminal::IsTerminal;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundCue {
    Sad,
    Happy,
    Celebration,
}

impl SoundCue {
    pub fn as_str(&self) -> &'static str {
        match self {
            SoundCue::Sad => "sad",
            SoundCue::Happy => "happy",
            SoundCue::Celebration => "celebration",
        }
    }
}

#[derive(Debug)]
pub enum AudioError {
    /// No device (or no permission) to play on
    Unavailable(String),
    Io(io::Error),
}

impl fmt::Display for AudioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AudioError::Unavailable(reason) => write!(f, "audio unavailable: {}", reason),
            AudioError::Io(err) => write!(f, "IO error: {}", err),
        }
    }
}

impl std::error::Error for AudioError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AudioError::Io(err) => Some(err),
            AudioError::Unavailable(_) => None,
        }
    }
}

impl From<io::Error> for AudioError {
    fn from(err: io::Error) -> Self {
        AudioError::Io(err)
    }
}

pub trait Chime {
    fn play(&mut self, cue: SoundCue) -> Result<(), AudioError>;
}

/// Rings the terminal bell (BEL) on stdout
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalBell;

impl Chime for TerminalBell {
    fn play(&mut self, _cue: SoundCue) -> Result<(), AudioError> {
        let mut stdout = io::stdout();
        if !stdout.is_terminal() {
            return Err(AudioError::Unavailable("stdout is not a terminal".to_string()));
        }
        stdout.write_all(b"\x07")?;
        stdout.flush()?;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl Chime for Silent {
    fn play(&mut self, _cue: SoundCue) -> Result<(), AudioError> {
        Ok(())
    }
}

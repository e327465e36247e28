//! Audio cue trait

/// Errors that can occur when playing the cue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CueError {
    /// A previous cue is still queued
    Busy,
    /// No audio output is available
    Unavailable,
    /// Output hardware reported a fault
    Hardware,
}

/// Trait for the step-complete audio cue
///
/// Implementations should return quickly: queue the sound and let the
/// output play it in the background.
pub trait CuePlayer {
    /// Request one cue
    fn play_cue(&mut self) -> Result<(), CueError>;
}

/// Cue player for hosts without audio output
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentCue;

impl CuePlayer for SilentCue {
    fn play_cue(&mut self) -> Result<(), CueError> {
        Err(CueError::Unavailable)
    }
}

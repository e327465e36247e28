//! Board implementations of the session collaborators

use cadence_core::traits::{CueError, CuePlayer, ViewError, ViewMode};

use crate::channels::CUE_SIGNAL;

/// Cue player that hands beeps to the buzzer task
#[derive(Debug, Clone, Copy, Default)]
pub struct BuzzerCue;

impl CuePlayer for BuzzerCue {
    fn play_cue(&mut self) -> Result<(), CueError> {
        if CUE_SIGNAL.signaled() {
            return Err(CueError::Busy);
        }
        CUE_SIGNAL.signal(());
        Ok(())
    }
}

/// Fullscreen on the OLED means the focus layout
#[derive(Debug, Clone, Copy, Default)]
pub struct FocusView {
    focus: bool,
}

impl ViewMode for FocusView {
    fn set_fullscreen(&mut self, on: bool) -> Result<(), ViewError> {
        self.focus = on;
        Ok(())
    }

    fn is_fullscreen(&self) -> bool {
        self.focus
    }
}

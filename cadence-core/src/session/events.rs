//! Session signals and transport commands

/// Signals raised by the session while ticking
///
/// Every variant marks the end of a step and drives the audio cue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SessionEvent {
    /// A step ran out and the next one started
    StepComplete {
        /// Index of the finished step
        completed: usize,
        /// Index of the step now playing
        next: usize,
    },
    /// The last step ran out
    ProgramFinished {
        /// Index of the finished (last) step
        completed: usize,
    },
}

impl SessionEvent {
    /// Index of the step that just ended
    pub fn completed_index(&self) -> usize {
        match self {
            SessionEvent::StepComplete { completed, .. } => *completed,
            SessionEvent::ProgramFinished { completed } => *completed,
        }
    }

    /// Check if this event ends the program
    pub fn is_program_finished(&self) -> bool {
        matches!(self, SessionEvent::ProgramFinished { .. })
    }
}

/// Transport commands issued by the host's input layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// Flip between playing and paused
    TogglePlayPause,
    /// Skip to the next step
    Next,
    /// Back to the first step, paused
    Restart,
    /// Flip the mute flag
    ToggleMute,
    /// Set the mute flag
    SetMuted(bool),
    /// Enter or leave fullscreen
    ToggleFullscreen,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completed_index() {
        let rollover = SessionEvent::StepComplete {
            completed: 3,
            next: 4,
        };
        assert_eq!(rollover.completed_index(), 3);
        assert!(!rollover.is_program_finished());

        let finished = SessionEvent::ProgramFinished { completed: 19 };
        assert_eq!(finished.completed_index(), 19);
        assert!(finished.is_program_finished());
    }
}

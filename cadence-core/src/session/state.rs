//! Session state types

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Transport state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Playback {
    /// Paused (ticks are ignored)
    Idle,
    /// Counting down
    Active,
}

impl Playback {
    /// Check if ticks advance the timer
    pub fn is_active(&self) -> bool {
        matches!(self, Playback::Active)
    }

    /// The other state
    pub fn toggled(self) -> Self {
        match self {
            Playback::Idle => Playback::Active,
            Playback::Active => Playback::Idle,
        }
    }
}

/// Snapshot of the mutable session state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SessionState {
    /// Index of the current step (0-based)
    pub current_index: usize,
    /// Seconds left in the current step
    pub seconds_remaining: u16,
    /// Whether ticks advance the timer
    pub is_running: bool,
    /// Whether the step-complete cue is silenced
    pub is_muted: bool,
}

impl SessionState {
    /// State at the start of a program whose first step lasts `first_duration_s`
    pub const fn start(first_duration_s: u16) -> Self {
        Self {
            current_index: 0,
            seconds_remaining: first_duration_s,
            is_running: false,
            is_muted: false,
        }
    }

    pub fn playback(&self) -> Playback {
        if self.is_running {
            Playback::Active
        } else {
            Playback::Idle
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_state() {
        let state = SessionState::start(45);
        assert_eq!(state.current_index, 0);
        assert_eq!(state.seconds_remaining, 45);
        assert_eq!(state.playback(), Playback::Idle);
        assert!(!state.is_muted);
    }

    #[test]
    fn test_playback_toggle() {
        assert_eq!(Playback::Idle.toggled(), Playback::Active);
        assert_eq!(Playback::Active.toggled(), Playback::Idle);
        assert!(Playback::Active.is_active());
        assert!(!Playback::Idle.is_active());
    }
}

//! Session controller
//!
//! Tracks the current step, the seconds left in it and the run flag, and
//! moves through the program one tick at a time. The program is only read.

use crate::program::{Program, Step};

use super::events::SessionEvent;
use super::state::{Playback, SessionState};

/// Playback state machine over a fixed program
#[derive(Debug, Clone)]
pub struct Session<'a> {
    program: &'a Program<'a>,
    state: SessionState,
}

impl<'a> Session<'a> {
    /// Create a session positioned at the first step, paused
    pub fn new(program: &'a Program<'a>) -> Self {
        debug_assert!(!program.is_empty(), "session over an empty program");

        let first = program.get(0).map(|s| s.duration_s()).unwrap_or(0);
        Self {
            program,
            state: SessionState::start(first),
        }
    }

    /// The program being played
    pub fn program(&self) -> &'a Program<'a> {
        self.program
    }

    /// Snapshot of the current state
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Index of the step playing now
    pub fn current_index(&self) -> usize {
        self.state.current_index
    }

    /// The step playing now
    pub fn current_step(&self) -> &'a Step<'a> {
        &self.program.steps()[self.state.current_index]
    }

    /// Seconds left in the current step
    pub fn seconds_remaining(&self) -> u16 {
        self.state.seconds_remaining
    }

    /// Check if ticks advance the timer
    pub fn is_running(&self) -> bool {
        self.state.is_running
    }

    /// Check if the step-complete cue is silenced
    pub fn is_muted(&self) -> bool {
        self.state.is_muted
    }

    /// Run flag as a transport state
    pub fn playback(&self) -> Playback {
        self.state.playback()
    }

    /// Check if the last step has run out
    pub fn is_finished(&self) -> bool {
        self.state.current_index == self.program.last_index() && self.state.seconds_remaining == 0
    }

    /// Advance the timer by one second
    ///
    /// Ignored while paused or once the program has finished. Otherwise
    /// either counts the current step down by one second or, on its final
    /// second, completes it and moves on. Never both in one call.
    pub fn tick(&mut self) -> Option<SessionEvent> {
        if !self.state.is_running || self.is_finished() {
            return None;
        }

        if self.state.seconds_remaining > 1 {
            self.state.seconds_remaining -= 1;
            return None;
        }

        let completed = self.state.current_index;
        self.advance_to_next();

        if self.is_finished() {
            Some(SessionEvent::ProgramFinished { completed })
        } else {
            Some(SessionEvent::StepComplete {
                completed,
                next: self.state.current_index,
            })
        }
    }

    /// Flip between playing and paused
    ///
    /// Leaves the step and remaining time alone.
    pub fn toggle_play_pause(&mut self) -> Playback {
        let playback = self.state.playback().toggled();
        self.state.is_running = playback.is_active();
        playback
    }

    /// Move to the next step
    ///
    /// The new step always starts full. On the last step the index stays
    /// put and the remaining time drops to zero, which finishes the
    /// program. The run flag is left as it was.
    pub fn advance_to_next(&mut self) {
        let last = self.program.last_index();
        if self.state.current_index >= last {
            self.state.current_index = last;
            self.state.seconds_remaining = 0;
            return;
        }

        self.state.current_index += 1;
        self.state.seconds_remaining = self.current_step().duration_s();
    }

    /// Back to the first step, paused
    ///
    /// The mute flag survives a restart.
    pub fn restart(&mut self) {
        self.state = SessionState {
            is_muted: self.state.is_muted,
            ..SessionState::start(self.program.get(0).map(|s| s.duration_s()).unwrap_or(0))
        };
    }

    /// Silence or restore the step-complete cue
    pub fn set_muted(&mut self, muted: bool) {
        self.state.is_muted = muted;
    }

    /// Seconds spent in the current step
    pub fn step_elapsed_s(&self) -> u16 {
        self.current_step()
            .duration_s()
            .saturating_sub(self.state.seconds_remaining)
    }

    /// Seconds since the start of the program
    ///
    /// All steps before the current one count in full, plus the part of
    /// the current step already played.
    pub fn elapsed_total_s(&self) -> u32 {
        self.program.start_offset_s(self.state.current_index) + self.step_elapsed_s() as u32
    }

    /// Seconds until the end of the program
    pub fn remaining_total_s(&self) -> u32 {
        self.program
            .total_duration_s()
            .saturating_sub(self.elapsed_total_s())
    }

    /// Fraction of the program played, clamped to 1
    pub fn progress(&self) -> f32 {
        let total = self.program.total_duration_s();
        if total == 0 {
            return 1.0;
        }
        (self.elapsed_total_s() as f32 / total as f32).min(1.0)
    }

    /// Fraction of the current step played
    pub fn step_progress(&self) -> f32 {
        let duration = self.current_step().duration_s();
        if duration == 0 {
            return 1.0;
        }
        (self.step_elapsed_s() as f32 / duration as f32).min(1.0)
    }

    /// Up to `count` steps after the current one
    pub fn upcoming(&self, count: usize) -> impl Iterator<Item = &'a Step<'a>> {
        self.program.upcoming(self.state.current_index + 1, count)
    }
}

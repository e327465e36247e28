//! Command dispatch and side effects
//!
//! Wraps a session together with the host's cue player and view. Audio
//! and view failures are logged and swallowed; the session keeps running.

use crate::traits::{CuePlayer, ViewMode};

use super::controller::Session;
use super::events::{Command, SessionEvent};

/// Session plus its side-effect collaborators
pub struct Transport<'a, C: CuePlayer, V: ViewMode> {
    session: Session<'a>,
    cue: C,
    view: V,
}

impl<'a, C: CuePlayer, V: ViewMode> Transport<'a, C, V> {
    pub fn new(session: Session<'a>, cue: C, view: V) -> Self {
        Self { session, cue, view }
    }

    pub fn session(&self) -> &Session<'a> {
        &self.session
    }

    pub fn cue(&self) -> &C {
        &self.cue
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn is_fullscreen(&self) -> bool {
        self.view.is_fullscreen()
    }

    /// Advance the session by one second
    ///
    /// Plays the cue on every step completion unless muted.
    pub fn tick(&mut self) -> Option<SessionEvent> {
        let event = self.session.tick()?;

        if !self.session.is_muted() {
            self.play_cue();
        }

        Some(event)
    }

    /// Apply one command
    pub fn handle(&mut self, command: Command) {
        match command {
            Command::TogglePlayPause => {
                self.session.toggle_play_pause();
            }
            Command::Next => self.session.advance_to_next(),
            Command::Restart => self.session.restart(),
            Command::ToggleMute => {
                let muted = !self.session.is_muted();
                self.session.set_muted(muted);
            }
            Command::SetMuted(muted) => self.session.set_muted(muted),
            Command::ToggleFullscreen => {
                let on = !self.view.is_fullscreen();
                if let Err(_e) = self.view.set_fullscreen(on) {
                    #[cfg(feature = "defmt")]
                    defmt::warn!("Fullscreen request failed: {}", _e);
                }
            }
        }
    }

    fn play_cue(&mut self) {
        if let Err(_e) = self.cue.play_cue() {
            #[cfg(feature = "defmt")]
            defmt::warn!("Cue playback failed: {}", _e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::program::preset;
    use crate::traits::{CueError, FixedView, SilentCue, ViewError};

    #[derive(Default)]
    struct CountingCue {
        played: u32,
        fail: bool,
    }

    impl CuePlayer for CountingCue {
        fn play_cue(&mut self) -> Result<(), CueError> {
            self.played += 1;
            if self.fail {
                Err(CueError::Hardware)
            } else {
                Ok(())
            }
        }
    }

    #[derive(Default)]
    struct MockView {
        fullscreen: bool,
        requests: u32,
        deny: bool,
    }

    impl ViewMode for MockView {
        fn set_fullscreen(&mut self, on: bool) -> Result<(), ViewError> {
            self.requests += 1;
            if self.deny {
                return Err(ViewError::Denied);
            }
            self.fullscreen = on;
            Ok(())
        }

        fn is_fullscreen(&self) -> bool {
            self.fullscreen
        }
    }

    fn run_seconds<C: CuePlayer, V: ViewMode>(transport: &mut Transport<'_, C, V>, seconds: u32) {
        for _ in 0..seconds {
            transport.tick();
        }
    }

    #[test]
    fn test_cue_on_step_complete() {
        let program = preset::full_body().unwrap();
        let mut transport = Transport::new(
            Session::new(&program),
            CountingCue::default(),
            MockView::default(),
        );
        transport.handle(Command::TogglePlayPause);

        run_seconds(&mut transport, 59);
        assert_eq!(transport.cue().played, 0);

        run_seconds(&mut transport, 1);
        assert_eq!(transport.cue().played, 1);
        assert_eq!(transport.session().current_index(), 1);
    }

    #[test]
    fn test_muted_cue_is_silent() {
        let program = preset::full_body().unwrap();
        let mut transport = Transport::new(
            Session::new(&program),
            CountingCue::default(),
            MockView::default(),
        );
        transport.handle(Command::SetMuted(true));
        transport.handle(Command::TogglePlayPause);

        run_seconds(&mut transport, 180);
        assert_eq!(transport.session().current_index(), 3);
        assert_eq!(transport.cue().played, 0);

        transport.handle(Command::ToggleMute);
        run_seconds(&mut transport, 60);
        assert_eq!(transport.cue().played, 1);
    }

    #[test]
    fn test_cue_on_program_finished() {
        let program = preset::full_body().unwrap();
        let mut transport = Transport::new(
            Session::new(&program),
            CountingCue::default(),
            MockView::default(),
        );
        transport.handle(Command::TogglePlayPause);

        run_seconds(&mut transport, program.total_duration_s() + 30);
        assert!(transport.session().is_finished());
        // One cue per step, none after the end
        assert_eq!(transport.cue().played, program.len() as u32);
    }

    #[test]
    fn test_failing_cue_does_not_stop_session() {
        let program = preset::full_body().unwrap();
        let mut transport = Transport::new(
            Session::new(&program),
            CountingCue {
                played: 0,
                fail: true,
            },
            MockView::default(),
        );
        transport.handle(Command::TogglePlayPause);

        run_seconds(&mut transport, 125);
        assert_eq!(transport.cue().played, 2);
        assert_eq!(transport.session().current_index(), 2);
        assert_eq!(transport.session().seconds_remaining(), 55);
        assert!(transport.session().is_running());
    }

    #[test]
    fn test_commands() {
        let program = preset::full_body().unwrap();
        let mut transport = Transport::new(
            Session::new(&program),
            CountingCue::default(),
            MockView::default(),
        );

        transport.handle(Command::Next);
        transport.handle(Command::Next);
        assert_eq!(transport.session().current_index(), 2);
        assert!(!transport.session().is_running());

        transport.handle(Command::TogglePlayPause);
        run_seconds(&mut transport, 10);
        assert_eq!(transport.session().elapsed_total_s(), 130);

        transport.handle(Command::Restart);
        assert_eq!(transport.session().current_index(), 0);
        assert!(!transport.session().is_running());
        // Skipping never cues
        assert_eq!(transport.cue().played, 0);
    }

    #[test]
    fn test_toggle_fullscreen() {
        let program = preset::full_body().unwrap();
        let mut transport = Transport::new(
            Session::new(&program),
            CountingCue::default(),
            MockView::default(),
        );

        transport.handle(Command::ToggleFullscreen);
        assert!(transport.is_fullscreen());
        transport.handle(Command::ToggleFullscreen);
        assert!(!transport.is_fullscreen());
        assert_eq!(transport.view().requests, 2);
    }

    #[test]
    fn test_second_elapsed_while_paused_is_not_counted() {
        let program = preset::full_body().unwrap();
        let mut transport = Transport::new(
            Session::new(&program),
            CountingCue::default(),
            MockView::default(),
        );

        // A second that ran out while paused, applied ahead of the play press
        transport.tick();
        transport.handle(Command::TogglePlayPause);
        assert_eq!(transport.session().seconds_remaining(), 60);
        assert_eq!(transport.session().elapsed_total_s(), 0);

        // Pausing after a played second keeps it
        transport.tick();
        transport.handle(Command::TogglePlayPause);
        transport.tick();
        assert_eq!(transport.session().seconds_remaining(), 59);
    }

    #[test]
    fn test_host_without_audio_or_fullscreen() {
        let program = preset::full_body().unwrap();
        let mut transport = Transport::new(Session::new(&program), SilentCue, FixedView);
        transport.handle(Command::TogglePlayPause);
        transport.handle(Command::ToggleFullscreen);

        run_seconds(&mut transport, program.total_duration_s());
        assert!(transport.session().is_finished());
        assert!(!transport.is_fullscreen());
        assert_eq!(
            transport.session().elapsed_total_s(),
            program.total_duration_s()
        );
    }

    #[test]
    fn test_denied_fullscreen_is_ignored() {
        let program = preset::full_body().unwrap();
        let mut transport = Transport::new(
            Session::new(&program),
            CountingCue::default(),
            MockView {
                deny: true,
                ..MockView::default()
            },
        );
        let before = transport.session().state();

        transport.handle(Command::ToggleFullscreen);
        assert!(!transport.is_fullscreen());
        assert_eq!(transport.session().state(), before);
    }
}

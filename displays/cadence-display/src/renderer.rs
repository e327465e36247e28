//! Screen rendering
//!
//! Projects a session onto the 21x8 text screen. Three layouts exist:
//! the overview while a workout is in progress, a focus view used for
//! fullscreen, and a summary once the program has finished.

use heapless::String;

use cadence_core::session::Session;

use crate::screen::{Screen, LINE_LEN, SCREEN_COLS};

type Line = String<LINE_LEN>;

/// Steps listed under "Next:" in the overview
pub const LOOKAHEAD: usize = 2;

/// Inner width of a progress bar (between the brackets)
const BAR_WIDTH: u32 = SCREEN_COLS as u32 - 2;

/// Screen renderer for the session views
pub struct Renderer {
    screen: Screen,
}

impl Renderer {
    /// Create a new renderer
    pub fn new() -> Self {
        Self {
            screen: Screen::new(),
        }
    }

    /// Get the current screen buffer
    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Render the start-up screen
    pub fn render_boot(&mut self, label: &str) {
        self.screen.clear();
        self.screen.set_line(2, "      CADENCE");
        self.screen.set_line(4, label);
        self.screen.set_line(6, "CLICK=Start");
    }

    /// Render whichever view fits the session
    pub fn render(&mut self, session: &Session<'_>, label: &str, focus: bool) {
        if session.is_finished() {
            self.render_finished(session, label);
        } else if focus {
            self.render_focus(session);
        } else {
            self.render_overview(session);
        }
    }

    /// Render the overview
    ///
    /// Phase header with position, exercise title, step time, step and
    /// program progress, and the next steps.
    pub fn render_overview(&mut self, session: &Session<'_>) {
        self.screen.clear();
        let step = session.current_step();

        let header_len = self.render_header(session);
        self.screen.set_highlight(0, 0, header_len);

        self.screen.set_line(1, step.title());

        let mut time_line = Line::new();
        let _ = push_mmss(&mut time_line, session.seconds_remaining() as u32);
        let _ = time_line.push_str(" / ");
        let _ = push_mmss(&mut time_line, step.duration_s() as u32);
        self.screen.set_line(2, &time_line);

        self.screen.set_line(3, &progress_bar(session.step_progress()));

        let mut total_line = Line::new();
        let _ = total_line.push_str("Total ");
        let _ = push_mmss(&mut total_line, session.elapsed_total_s());
        let _ = total_line.push('/');
        let _ = push_mmss(&mut total_line, session.program().total_duration_s());
        self.screen.set_line(4, &total_line);

        self.screen.set_line(5, &progress_bar(session.progress()));

        let mut next = session.upcoming(LOOKAHEAD);
        let mut next_line = Line::new();
        let _ = next_line.push_str("Next: ");
        match next.next() {
            Some(step) => {
                let _ = next_line.push_str(step.title());
            }
            None => {
                let _ = next_line.push('-');
            }
        }
        self.screen.set_line(6, &next_line);

        if let Some(step) = next.next() {
            let mut then_line = Line::new();
            let _ = then_line.push_str("      ");
            let _ = then_line.push_str(step.title());
            self.screen.set_line(7, &then_line);
        }
    }

    /// Render the focus view
    ///
    /// Remaining time in the middle with the cue text below it.
    pub fn render_focus(&mut self, session: &Session<'_>) {
        self.screen.clear();
        self.render_header(session);

        let mut left_line = Line::new();
        let _ = left_line.push_str("  Workout left ");
        let _ = push_mmss(&mut left_line, session.remaining_total_s());
        self.screen.set_line(1, &left_line);

        let mut time_line = Line::new();
        let _ = time_line.push_str(if session.is_running() {
            "     >> "
        } else {
            "     || "
        });
        let _ = push_mmss(&mut time_line, session.seconds_remaining() as u32);
        let _ = time_line.push_str(if session.is_running() { " <<" } else { " ||" });
        self.screen.set_line(2, &time_line);
        self.screen.set_highlight(2, 5, 16);

        let mut row = 4;
        for chunk in wrap(session.current_step().cue(), SCREEN_COLS) {
            if row > 7 {
                break;
            }
            self.screen.set_line(row, chunk);
            row += 1;
        }
    }

    /// Render the program complete screen
    pub fn render_finished(&mut self, session: &Session<'_>, label: &str) {
        self.screen.clear();
        self.screen.set_line(1, "   ** COMPLETE **");

        let mut name_line = Line::new();
        let _ = name_line.push_str("  ");
        let _ = name_line.push_str(label);
        self.screen.set_line(3, &name_line);

        let mut time_line = Line::new();
        let _ = time_line.push_str("  Time: ");
        let _ = push_mmss(&mut time_line, session.elapsed_total_s());
        self.screen.set_line(5, &time_line);

        self.screen.set_line(7, "HOLD=Restart");
    }

    /// Header row: phase label, position in phase and status flags
    ///
    /// Returns the width of the phase part for highlighting.
    fn render_header(&mut self, session: &Session<'_>) -> u8 {
        let step = session.current_step();

        let mut header = Line::new();
        let _ = write_to_string(
            &mut header,
            format_args!(
                "{} {}/{}",
                step.phase.label(),
                step.position_in_phase,
                step.total_in_phase
            ),
        );
        let phase_len = header.len() as u8;

        let flags = match (session.is_muted(), session.is_running()) {
            (true, true) => "M >",
            (true, false) => "M ||",
            (false, true) => ">",
            (false, false) => "||",
        };
        while header.len() + flags.len() < SCREEN_COLS {
            if header.push(' ').is_err() {
                break;
            }
        }
        let _ = header.push_str(flags);

        self.screen.set_line(0, &header);
        phase_len
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Append seconds as `mm:ss`
fn push_mmss(s: &mut Line, seconds: u32) -> core::fmt::Result {
    write_to_string(s, format_args!("{:02}:{:02}", seconds / 60, seconds % 60))
}

/// Bracketed bar filled to `fraction` (0..=1)
fn progress_bar(fraction: f32) -> Line {
    let filled = (fraction.clamp(0.0, 1.0) * BAR_WIDTH as f32) as u32;

    let mut bar = Line::new();
    let _ = bar.push('[');
    for i in 0..BAR_WIDTH {
        let _ = bar.push(if i < filled { '#' } else { '-' });
    }
    let _ = bar.push(']');
    bar
}

/// Split text into rows of at most `width` characters, breaking at spaces
fn wrap(text: &str, width: usize) -> impl Iterator<Item = &str> {
    let mut rest = text.trim();
    core::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }

        let cut = match rest.char_indices().nth(width) {
            None => rest.len(),
            Some((limit, _)) => rest[..limit]
                .rfind(' ')
                .filter(|&i| i > 0)
                .unwrap_or(limit),
        };

        let (line, tail) = rest.split_at(cut);
        rest = tail.trim_start();
        Some(line.trim_end())
    })
}

/// Helper to write formatted output to a heapless String
fn write_to_string(s: &mut Line, args: core::fmt::Arguments<'_>) -> core::fmt::Result {
    use core::fmt::Write;
    s.write_fmt(args)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screen::tests::RecordingBackend;
    use cadence_core::program::preset;

    #[test]
    fn test_render_boot() {
        let mut renderer = Renderer::new();
        renderer.render_boot(preset::LABEL);
        assert!(renderer.screen().get_line(2).unwrap().contains("CADENCE"));
        assert_eq!(renderer.screen().get_line(4), Some("Full Body"));
    }

    #[test]
    fn test_render_overview_at_start() {
        let program = preset::full_body().unwrap();
        let session = Session::new(&program);

        let mut renderer = Renderer::new();
        renderer.render(&session, preset::LABEL, false);
        let screen = renderer.screen();

        let header = screen.get_line(0).unwrap();
        assert!(header.starts_with("WARM-UP 1/5"));
        assert!(header.ends_with("||"));
        assert_eq!(header.len(), SCREEN_COLS);
        assert_eq!(screen.get_highlight(0), Some((0, 11)));

        assert_eq!(screen.get_line(1), Some("March in Place"));
        assert_eq!(screen.get_line(2), Some("01:00 / 01:00"));
        assert_eq!(screen.get_line(3), Some("[-------------------]"));
        assert_eq!(screen.get_line(4), Some("Total 00:00/20:00"));
        assert_eq!(screen.get_line(6), Some("Next: Arm Circles"));
        assert_eq!(screen.get_line(7), Some("      Hip Circles"));
    }

    #[test]
    fn test_render_overview_second_strength_round() {
        let program = preset::full_body().unwrap();
        let mut session = Session::new(&program);
        // Skip the warm-up and the first strength round plus two exercises
        for _ in 0..12 {
            session.advance_to_next();
        }
        session.toggle_play_pause();
        for _ in 0..30 {
            session.tick();
        }
        session.set_muted(true);

        let mut renderer = Renderer::new();
        renderer.render_overview(&session);
        let screen = renderer.screen();

        let header = screen.get_line(0).unwrap();
        assert!(header.starts_with("STRENGTH 8/10"));
        assert!(header.ends_with("M >"));
        assert_eq!(screen.get_line(1), Some("Reverse Lunges"));
        assert_eq!(screen.get_line(2), Some("00:30 / 01:00"));
        // Half of 19 cells
        assert_eq!(screen.get_line(3), Some("[#########----------]"));
        assert_eq!(screen.get_line(4), Some("Total 12:30/20:00"));
    }

    #[test]
    fn test_render_overview_last_step() {
        let program = preset::full_body().unwrap();
        let mut session = Session::new(&program);
        for _ in 0..19 {
            session.advance_to_next();
        }

        let mut renderer = Renderer::new();
        renderer.render_overview(&session);

        assert!(renderer
            .screen()
            .get_line(0)
            .unwrap()
            .starts_with("COOL-DOWN 5/5"));
        assert_eq!(renderer.screen().get_line(6), Some("Next: -"));
        assert_eq!(renderer.screen().get_line(7), Some(""));
    }

    #[test]
    fn test_render_focus() {
        let program = preset::full_body().unwrap();
        let mut session = Session::new(&program);
        session.toggle_play_pause();
        session.tick();

        let mut renderer = Renderer::new();
        renderer.render(&session, preset::LABEL, true);
        let screen = renderer.screen();

        assert_eq!(screen.get_line(1), Some("  Workout left 19:59"));
        assert_eq!(screen.get_line(2), Some("     >> 00:59 <<"));
        assert_eq!(screen.get_line(4), Some("Lift knees to hip"));
        assert_eq!(screen.get_line(5), Some("height, swing arms"));
    }

    #[test]
    fn test_render_finished() {
        let program = preset::full_body().unwrap();
        let mut session = Session::new(&program);
        for _ in 0..20 {
            session.advance_to_next();
        }
        assert!(session.is_finished());

        let mut renderer = Renderer::new();
        renderer.render(&session, preset::LABEL, true);
        let screen = renderer.screen();

        assert!(screen.get_line(1).unwrap().contains("COMPLETE"));
        assert_eq!(screen.get_line(3), Some("  Full Body"));
        assert_eq!(screen.get_line(5), Some("  Time: 20:00"));
    }

    #[test]
    fn test_render_into_backend() {
        let program = preset::full_body().unwrap();
        let session = Session::new(&program);

        let mut renderer = Renderer::new();
        renderer.render_overview(&session);

        let mut backend = RecordingBackend::new();
        renderer.screen().render_to(&mut backend).unwrap();
        assert_eq!(backend.rows[1], "March in Place");
        assert_eq!(backend.inverted, std::vec![(0, 0, 11)]);
    }

    #[test]
    fn test_progress_bar_bounds() {
        assert_eq!(progress_bar(0.0).as_str(), "[-------------------]");
        assert_eq!(progress_bar(1.0).as_str(), "[###################]");
        assert_eq!(progress_bar(2.5).as_str(), "[###################]");
        assert_eq!(progress_bar(-1.0).as_str(), "[-------------------]");
    }

    #[test]
    fn test_wrap() {
        let rows: std::vec::Vec<&str> = wrap("In 4, hold 4, out 4, hold 4", 21).collect();
        assert_eq!(rows, ["In 4, hold 4, out 4,", "hold 4"]);

        let rows: std::vec::Vec<&str> = wrap("abcdefghijklmnopqrstuvwxyz", 10).collect();
        assert_eq!(rows, ["abcdefghij", "klmnopqrst", "uvwxyz"]);

        assert_eq!(wrap("", 21).count(), 0);
        assert_eq!(wrap("short", 21).collect::<std::vec::Vec<_>>(), ["short"]);
    }
}

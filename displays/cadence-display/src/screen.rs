//! Screen buffer types
//!
//! Character buffer sized for a 128x64 OLED with a 6x8 font.

use heapless::String;

use crate::backend::{DisplayBackend, DisplayError};

/// Number of character rows
pub const SCREEN_ROWS: usize = 8;

/// Number of character columns
pub const SCREEN_COLS: usize = 21;

/// Bytes reserved per line (room for a few multi-byte characters)
pub const LINE_LEN: usize = SCREEN_COLS * 2;

/// Text-mode screen buffer
#[derive(Clone)]
pub struct Screen {
    lines: [String<LINE_LEN>; SCREEN_ROWS],
    /// Inverted region per row (start_col, end_col)
    highlights: [Option<(u8, u8)>; SCREEN_ROWS],
}

impl Default for Screen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen {
    /// Create a new empty screen
    pub fn new() -> Self {
        Self {
            lines: core::array::from_fn(|_| String::new()),
            highlights: [None; SCREEN_ROWS],
        }
    }

    /// Clear text and highlights
    pub fn clear(&mut self) {
        for line in &mut self.lines {
            line.clear();
        }
        self.highlights = [None; SCREEN_ROWS];
    }

    /// Set the content of a row
    ///
    /// Text is cut at `SCREEN_COLS` characters. Rows out of range are
    /// ignored.
    pub fn set_line(&mut self, row: usize, text: &str) {
        let Some(line) = self.lines.get_mut(row) else {
            return;
        };

        line.clear();
        for ch in text.chars().take(SCREEN_COLS) {
            if line.push(ch).is_err() {
                break;
            }
        }
    }

    /// Get the content of a row
    pub fn get_line(&self, row: usize) -> Option<&str> {
        self.lines.get(row).map(|s| s.as_str())
    }

    /// Set the inverted region of a row
    pub fn set_highlight(&mut self, row: usize, start_col: u8, end_col: u8) {
        if row < SCREEN_ROWS {
            self.highlights[row] = Some((start_col, end_col.min(SCREEN_COLS as u8)));
        }
    }

    /// Get the inverted region of a row
    pub fn get_highlight(&self, row: usize) -> Option<(u8, u8)> {
        self.highlights.get(row).copied().flatten()
    }

    /// Push the whole screen into a backend and flush it
    pub fn render_to<B: DisplayBackend>(&self, backend: &mut B) -> Result<(), DisplayError> {
        if !backend.is_ready() {
            return Err(DisplayError::NotInitialized);
        }

        backend.clear()?;
        for (row, line) in self.lines.iter().enumerate() {
            if !line.is_empty() {
                backend.draw_text(row as u8, 0, line)?;
            }
        }
        for (row, highlight) in self.highlights.iter().enumerate() {
            if let Some((start, end)) = highlight {
                backend.invert_region(row as u8, *start, *end)?;
            }
        }
        backend.flush()
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Screen {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Screen[");
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                defmt::write!(f, ", ");
            }
            defmt::write!(f, "{}", line.as_str());
        }
        defmt::write!(f, "]");
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Backend that keeps drawn text as plain strings
    pub struct RecordingBackend {
        pub rows: [std::string::String; SCREEN_ROWS],
        pub inverted: std::vec::Vec<(u8, u8, u8)>,
        pub flushes: u32,
        pub ready: bool,
    }

    impl RecordingBackend {
        pub fn new() -> Self {
            Self {
                rows: Default::default(),
                inverted: std::vec::Vec::new(),
                flushes: 0,
                ready: true,
            }
        }
    }

    impl DisplayBackend for RecordingBackend {
        fn clear(&mut self) -> Result<(), DisplayError> {
            for row in &mut self.rows {
                row.clear();
            }
            self.inverted.clear();
            Ok(())
        }

        fn draw_text(&mut self, row: u8, col: u8, text: &str) -> Result<(), DisplayError> {
            let line = self
                .rows
                .get_mut(row as usize)
                .ok_or(DisplayError::InvalidCoordinates)?;
            while line.len() < col as usize {
                line.push(' ');
            }
            line.push_str(text);
            Ok(())
        }

        fn invert_region(
            &mut self,
            row: u8,
            start_col: u8,
            end_col: u8,
        ) -> Result<(), DisplayError> {
            self.inverted.push((row, start_col, end_col));
            Ok(())
        }

        fn flush(&mut self) -> Result<(), DisplayError> {
            self.flushes += 1;
            Ok(())
        }

        fn dimensions(&self) -> (u8, u8) {
            (SCREEN_COLS as u8, SCREEN_ROWS as u8)
        }

        fn is_ready(&self) -> bool {
            self.ready
        }
    }

    #[test]
    fn test_screen_basic() {
        let mut screen = Screen::new();
        screen.set_line(0, "Hello");
        assert_eq!(screen.get_line(0), Some("Hello"));
        assert_eq!(screen.get_line(SCREEN_ROWS), None);
    }

    #[test]
    fn test_long_line_is_cut() {
        let mut screen = Screen::new();
        screen.set_line(1, "abcdefghijklmnopqrstuvwxyz");
        assert_eq!(screen.get_line(1), Some("abcdefghijklmnopqrstu"));
    }

    #[test]
    fn test_multibyte_line_is_cut_on_char_boundary() {
        let mut screen = Screen::new();
        screen.set_line(0, "Übung für Schulterblätter");
        let line = screen.get_line(0).unwrap();
        assert_eq!(line.chars().count(), SCREEN_COLS);
        assert!(line.starts_with("Übung"));
    }

    #[test]
    fn test_screen_clear() {
        let mut screen = Screen::new();
        screen.set_line(0, "Hello");
        screen.set_highlight(0, 0, 5);
        assert_eq!(screen.get_highlight(0), Some((0, 5)));

        screen.clear();
        assert_eq!(screen.get_line(0), Some(""));
        assert_eq!(screen.get_highlight(0), None);
    }

    #[test]
    fn test_render_to_backend() {
        let mut screen = Screen::new();
        screen.set_line(0, "HEADER");
        screen.set_line(3, "body");
        screen.set_highlight(0, 0, 6);

        let mut backend = RecordingBackend::new();
        screen.render_to(&mut backend).unwrap();

        assert_eq!(backend.rows[0], "HEADER");
        assert_eq!(backend.rows[3], "body");
        assert_eq!(backend.rows[1], "");
        assert_eq!(backend.inverted, std::vec![(0, 0, 6)]);
        assert_eq!(backend.flushes, 1);
    }

    #[test]
    fn test_render_to_unready_backend() {
        let screen = Screen::new();
        let mut backend = RecordingBackend::new();
        backend.ready = false;

        assert_eq!(
            screen.render_to(&mut backend),
            Err(DisplayError::NotInitialized)
        );
        assert_eq!(backend.flushes, 0);
    }
}

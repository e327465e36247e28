//! SH1106 OLED support
//!
//! `FrameBuffer` is the text-mode `DisplayBackend` the screen renders
//! into; glyphs come from the embedded-graphics 5x8 font on a 6 pixel
//! pitch (21 columns x 8 rows). `Sh1106` pushes a finished frame over
//! async I2C.

use embedded_graphics::mono_font::ascii::FONT_5X8;
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::text::{Baseline, Text};

use cadence_display::{DisplayBackend, DisplayError, SCREEN_COLS, SCREEN_ROWS};

/// SH1106 I2C address (typically 0x3C or 0x3D)
const SH1106_ADDR: u8 = 0x3C;

/// Display dimensions
const WIDTH: usize = 128;
const HEIGHT: usize = 64;
const PAGES: usize = HEIGHT / 8;

/// Horizontal pitch of one character cell
const CELL_W: usize = 6;

/// Left margin so 21 cells sit centred
const MARGIN_X: usize = (WIDTH - SCREEN_COLS * CELL_W) / 2;

/// SH1106 commands
mod cmd {
    pub const DISPLAY_OFF: u8 = 0xAE;
    pub const DISPLAY_ON: u8 = 0xAF;
    pub const SET_CONTRAST: u8 = 0x81;
    pub const SET_NORMAL: u8 = 0xA6;
    pub const SET_DISPLAY_OFFSET: u8 = 0xD3;
    pub const SET_COM_PINS: u8 = 0xDA;
    pub const SET_VCOM_DETECT: u8 = 0xDB;
    pub const SET_CLOCK_DIV: u8 = 0xD5;
    pub const SET_PRECHARGE: u8 = 0xD9;
    pub const SET_MUX_RATIO: u8 = 0xA8;
    pub const SET_LOW_COLUMN: u8 = 0x00;
    pub const SET_HIGH_COLUMN: u8 = 0x10;
    pub const SET_PAGE_ADDR: u8 = 0xB0;
    pub const SET_START_LINE: u8 = 0x40;
    pub const SET_SEG_REMAP: u8 = 0xA1;
    pub const SET_COM_SCAN_DEC: u8 = 0xC8;
    pub const SET_CHARGE_PUMP: u8 = 0x8D;
}

/// 1 bpp frame buffer organised in SH1106 pages
pub struct FrameBuffer {
    pages: [[u8; WIDTH]; PAGES],
    ready: bool,
}

impl FrameBuffer {
    pub const fn new() -> Self {
        Self {
            pages: [[0; WIDTH]; PAGES],
            ready: false,
        }
    }

    /// Mark the panel as initialised
    pub fn set_ready(&mut self, ready: bool) {
        self.ready = ready;
    }

    fn cell_x(col: u8) -> usize {
        MARGIN_X + col as usize * CELL_W
    }
}

impl OriginDimensions for FrameBuffer {
    fn size(&self) -> Size {
        Size::new(WIDTH as u32, HEIGHT as u32)
    }
}

impl DrawTarget for FrameBuffer {
    type Color = BinaryColor;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            let (x, y) = (point.x, point.y);
            if x < 0 || y < 0 || x as usize >= WIDTH || y as usize >= HEIGHT {
                continue;
            }
            let byte = &mut self.pages[y as usize / 8][x as usize];
            let bit = 1 << (y as usize % 8);
            if color.is_on() {
                *byte |= bit;
            } else {
                *byte &= !bit;
            }
        }
        Ok(())
    }
}

impl DisplayBackend for FrameBuffer {
    fn clear(&mut self) -> Result<(), DisplayError> {
        for page in self.pages.iter_mut() {
            page.fill(0);
        }
        Ok(())
    }

    fn draw_text(&mut self, row: u8, col: u8, text: &str) -> Result<(), DisplayError> {
        if row as usize >= SCREEN_ROWS {
            return Err(DisplayError::InvalidCoordinates);
        }

        let style = MonoTextStyle::new(&FONT_5X8, BinaryColor::On);
        let y = row as i32 * 8;
        let mut buf = [0u8; 4];

        for (i, ch) in text.chars().enumerate() {
            let col = col as usize + i;
            if col >= SCREEN_COLS {
                break;
            }
            let glyph = ch.encode_utf8(&mut buf);
            let origin = Point::new(Self::cell_x(col as u8) as i32, y);
            // Drawing into RAM cannot fail
            let _ = Text::with_baseline(glyph, origin, style, Baseline::Top).draw(self);
        }

        Ok(())
    }

    fn invert_region(&mut self, row: u8, start_col: u8, end_col: u8) -> Result<(), DisplayError> {
        let page = self
            .pages
            .get_mut(row as usize)
            .ok_or(DisplayError::InvalidCoordinates)?;

        let start_x = Self::cell_x(start_col).min(WIDTH);
        let end_x = Self::cell_x(end_col).min(WIDTH);
        for byte in &mut page[start_x..end_x.max(start_x)] {
            *byte ^= 0xFF;
        }

        Ok(())
    }

    fn flush(&mut self) -> Result<(), DisplayError> {
        // Frames are pushed by the display task after rendering
        Ok(())
    }

    fn dimensions(&self) -> (u8, u8) {
        (SCREEN_COLS as u8, SCREEN_ROWS as u8)
    }

    fn is_ready(&self) -> bool {
        self.ready
    }
}

/// SH1106 OLED driver
pub struct Sh1106<I2C> {
    i2c: I2C,
}

impl<I2C> Sh1106<I2C>
where
    I2C: embedded_hal_async::i2c::I2c,
{
    pub fn new(i2c: I2C) -> Self {
        Self { i2c }
    }

    /// Initialize the display
    pub async fn init(&mut self) -> Result<(), I2C::Error> {
        let init_cmds: &[u8] = &[
            cmd::DISPLAY_OFF,
            cmd::SET_CLOCK_DIV,
            0x80,
            cmd::SET_MUX_RATIO,
            0x3F, // 64 lines
            cmd::SET_DISPLAY_OFFSET,
            0x00,
            cmd::SET_START_LINE,
            cmd::SET_CHARGE_PUMP,
            0x14,
            cmd::SET_SEG_REMAP,
            cmd::SET_COM_SCAN_DEC,
            cmd::SET_COM_PINS,
            0x12,
            cmd::SET_CONTRAST,
            0xCF,
            cmd::SET_PRECHARGE,
            0xF1,
            cmd::SET_VCOM_DETECT,
            0x40,
            cmd::SET_NORMAL,
            cmd::DISPLAY_ON,
        ];

        for &c in init_cmds {
            self.command(c).await?;
        }

        Ok(())
    }

    async fn command(&mut self, cmd: u8) -> Result<(), I2C::Error> {
        self.i2c.write(SH1106_ADDR, &[0x00, cmd]).await
    }

    /// Send a whole frame to the panel
    pub async fn write_frame(&mut self, frame: &FrameBuffer) -> Result<(), I2C::Error> {
        for (index, page) in frame.pages.iter().enumerate() {
            self.command(cmd::SET_PAGE_ADDR | index as u8).await?;
            // SH1106 RAM is 132 wide; the visible window starts at column 2
            self.command(cmd::SET_LOW_COLUMN | 2).await?;
            self.command(cmd::SET_HIGH_COLUMN).await?;

            let mut data = [0u8; WIDTH + 1];
            data[0] = 0x40;
            data[1..].copy_from_slice(page);
            self.i2c.write(SH1106_ADDR, &data).await?;
        }

        Ok(())
    }
}

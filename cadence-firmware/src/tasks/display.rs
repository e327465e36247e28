//! OLED display task
//!
//! Waits for rendered screens from the controller and pushes them to the
//! SH1106 panel. Panel errors are logged; the next screen retries.

use defmt::*;
use embassy_rp::i2c::{Async, I2c};
use embassy_rp::peripherals::I2C0;

use cadence_display::DisplayBackend;

use crate::channels::SCREEN_UPDATE;
use crate::oled::{FrameBuffer, Sh1106};

/// Display update task
#[embassy_executor::task]
pub async fn display_task(i2c: I2c<'static, I2C0, Async>) {
    info!("Display task started");

    let mut oled = Sh1106::new(i2c);
    let mut frame = FrameBuffer::new();

    match oled.init().await {
        Ok(()) => {
            info!("OLED initialized");
            frame.set_ready(true);
        }
        Err(e) => error!("Failed to initialize display: {:?}", e),
    }

    loop {
        let screen = SCREEN_UPDATE.wait().await;

        if !frame.is_ready() {
            // Panel missed start-up; try again before drawing
            match oled.init().await {
                Ok(()) => frame.set_ready(true),
                Err(e) => {
                    warn!("Display still unavailable: {:?}", e);
                    continue;
                }
            }
        }

        if let Err(e) = screen.render_to(&mut frame) {
            warn!("Screen render failed: {:?}", e);
            continue;
        }

        match oled.write_frame(&frame).await {
            Ok(()) => trace!("Display updated"),
            Err(e) => {
                warn!("Display write failed: {:?}", e);
                frame.set_ready(false);
            }
        }
    }
}

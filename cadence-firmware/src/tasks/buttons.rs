//! Button and encoder task
//!
//! Samples the encoder push-button and quadrature pins, decodes them into
//! navigation events and queues those for the controller.

use defmt::*;
use embassy_rp::gpio::Input;
use embassy_time::{Duration, Instant, Ticker};

use cadence_display::{ClickDetector, NavigationEvent, QuadratureDecoder};

use crate::channels::INPUT_CHANNEL;

/// Sampling interval in milliseconds
const POLL_INTERVAL_MS: u64 = 2;

/// Input task for a rotary encoder with push-button
///
/// All pins are active low with pull-ups.
#[embassy_executor::task]
pub async fn buttons_task(button: Input<'static>, enc_a: Input<'static>, enc_b: Input<'static>) {
    info!("Buttons task started");

    let mut clicks = ClickDetector::new();
    let mut encoder = QuadratureDecoder::new(enc_a.is_high(), enc_b.is_high());
    let mut was_down = false;

    let mut ticker = Ticker::every(Duration::from_millis(POLL_INTERVAL_MS));

    loop {
        ticker.next().await;
        let now_ms = Instant::now().as_millis();

        let down = button.is_low();
        if down != was_down {
            was_down = down;
            if down {
                clicks.press(now_ms);
            } else if let Some(event) = clicks.release(now_ms) {
                queue(event);
            }
        }

        if let Some(event) = clicks.poll(now_ms) {
            queue(event);
        }

        if let Some(event) = encoder.update(enc_a.is_high(), enc_b.is_high()) {
            queue(event);
        }
    }
}

fn queue(event: NavigationEvent) {
    debug!("Navigation: {:?}", event);
    if INPUT_CHANNEL.try_send(event).is_err() {
        warn!("Input queue full, dropping {:?}", event);
    }
}

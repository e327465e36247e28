//! Tick task
//!
//! The only clock source for the session: one signal per second. The
//! ticker schedules against absolute deadlines, so slow wake-ups do not
//! accumulate drift.

use defmt::*;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use embassy_time::{Duration, Ticker};

/// Tick interval in milliseconds
pub const TICK_INTERVAL_MS: u64 = 1000;

/// Signal to notify controller of tick (running tick count)
pub static TICK_SIGNAL: Signal<CriticalSectionRawMutex, u32> = Signal::new();

/// Tick task - sends one signal per second
#[embassy_executor::task]
pub async fn tick_task() {
    info!("Tick task started");

    let mut ticker = Ticker::every(Duration::from_millis(TICK_INTERVAL_MS));
    let mut count: u32 = 0;

    loop {
        ticker.next().await;
        count = count.wrapping_add(1);

        if TICK_SIGNAL.signaled() {
            // Controller catches up from the count
            debug!("Tick {} before the previous one was taken", count);
        }
        TICK_SIGNAL.signal(count);
    }
}

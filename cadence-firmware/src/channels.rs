//! Inter-task communication channels
//!
//! Defines the static channels used for communication between Embassy tasks.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_sync::signal::Signal;

use cadence_display::{NavigationEvent, Screen};

/// Channel capacity for navigation events
const INPUT_CHANNEL_SIZE: usize = 8;

/// Navigation events from the button and encoder
pub static INPUT_CHANNEL: Channel<CriticalSectionRawMutex, NavigationEvent, INPUT_CHANNEL_SIZE> =
    Channel::new();

/// Request for one step-complete beep
pub static CUE_SIGNAL: Signal<CriticalSectionRawMutex, ()> = Signal::new();

/// Latest rendered screen, waiting to be pushed to the OLED
pub static SCREEN_UPDATE: Signal<CriticalSectionRawMutex, Screen> = Signal::new();

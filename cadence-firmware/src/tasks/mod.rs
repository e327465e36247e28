//! Embassy async tasks
//!
//! Each task runs independently and communicates via channels/signals.

pub mod buttons;
pub mod buzzer;
pub mod controller;
pub mod display;
pub mod tick;

pub use buttons::buttons_task;
pub use buzzer::{buzzer_task, BuzzerConfig};
pub use controller::controller_task;
pub use display::display_task;
pub use tick::tick_task;

//! Session playback
//!
//! The session controller is an explicit, deterministic state machine
//! over a fixed program. It performs no scheduling: the host's clock
//! source calls `tick()` once per second.

pub mod controller;
pub mod events;
pub mod state;
pub mod transport;

pub use controller::Session;
pub use events::{Command, SessionEvent};
pub use state::{Playback, SessionState};
pub use transport::Transport;

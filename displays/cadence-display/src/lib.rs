//! Display and input layer for Cadence
//!
//! This crate provides:
//! - `DisplayBackend` trait for text-mode displays
//! - `Screen` character buffer that can be pushed into any backend
//! - `Renderer` that projects a running session onto a screen
//! - `NavigationEvent`, button/encoder decoders and the `Keymap` that turns
//!   navigation into transport commands
//!
//! Nothing here decides anything about the workout itself. The renderer
//! only reads the session, and the keymap only names commands.

#![cfg_attr(not(test), no_std)]

pub mod backend;
pub mod input;
pub mod renderer;
pub mod screen;

// Re-export key types
pub use backend::{DisplayBackend, DisplayError};
pub use input::{ClickDetector, Keymap, NavigationEvent, QuadratureDecoder};
pub use renderer::Renderer;
pub use screen::{Screen, SCREEN_COLS, SCREEN_ROWS};

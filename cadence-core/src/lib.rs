//! Board-agnostic core logic for the Cadence workout timer
//!
//! This crate contains all application logic that does not depend on
//! specific hardware or a particular host UI:
//!
//! - Program builder (phases, rounds, step numbering)
//! - Session controller (tick-driven playback state machine)
//! - Transport that dispatches commands and drives side-effect collaborators
//! - Collaborator traits (audio cue, fullscreen view)
//! - Workout configuration types and the built-in preset

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod program;
pub mod session;
pub mod traits;

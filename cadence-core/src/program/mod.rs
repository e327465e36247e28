//! Workout programs
//!
//! Turns exercise lists into an ordered, addressable sequence of timed
//! steps. Programs are built once and only read afterwards.

pub mod builder;
pub mod exercise;
pub mod preset;

pub use builder::{build_program, Program, ProgramError, Step, MAX_STEPS};
pub use exercise::{ExerciseDefinition, Phase};

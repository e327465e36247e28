//! Workout compiled in from workout.toml
//!
//! The tables are generated by build.rs after the file has been validated.

use cadence_core::program::{build_program, ExerciseDefinition, Program, ProgramError};

include!(concat!(env!("OUT_DIR"), "/workout.rs"));

/// Build the compiled-in program
pub fn build() -> Result<Program<'static>, ProgramError> {
    build_program(&WARMUP, &STRENGTH, &COOLDOWN, STRENGTH_ROUNDS)
}

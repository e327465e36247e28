//! Exercise templates and workout phases

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Workout phase
///
/// Programs always play the phases in declaration order: warm-up, then
/// the (possibly repeated) strength block, then cool-down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Phase {
    /// Mobility and activation
    Warmup,
    /// Main block, repeated for the configured number of rounds
    Strength,
    /// Stretching and recovery
    Cooldown,
}

impl Phase {
    /// All phases in playback order
    pub const ALL: [Phase; 3] = [Phase::Warmup, Phase::Strength, Phase::Cooldown];

    /// Upper-case label for headers
    pub const fn label(&self) -> &'static str {
        match self {
            Phase::Warmup => "WARM-UP",
            Phase::Strength => "STRENGTH",
            Phase::Cooldown => "COOL-DOWN",
        }
    }

    /// Lower-case name, as used in configuration files
    pub const fn name(&self) -> &'static str {
        match self {
            Phase::Warmup => "warmup",
            Phase::Strength => "strength",
            Phase::Cooldown => "cooldown",
        }
    }
}

impl core::fmt::Display for Phase {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// An exercise template
///
/// Definitions are created once when the workout is defined and never
/// change afterwards. The strings are borrowed so that tables can live in
/// `static` memory or point into a parsed configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ExerciseDefinition<'a> {
    /// Stable identifier, unique within a workout
    pub key: &'a str,
    /// Display name
    pub title: &'a str,
    /// Instruction shown while the exercise runs
    pub cue: &'a str,
    /// Duration in seconds (must be positive)
    pub duration_s: u16,
}

impl<'a> ExerciseDefinition<'a> {
    /// Create a new definition
    pub const fn new(key: &'a str, title: &'a str, cue: &'a str, duration_s: u16) -> Self {
        Self {
            key,
            title,
            cue,
            duration_s,
        }
    }
}

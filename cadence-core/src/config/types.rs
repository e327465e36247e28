//! Configuration type definitions

use heapless::{String, Vec};

use crate::program::{build_program, ExerciseDefinition, Phase, Program, ProgramError};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Maximum workout label length
pub const MAX_LABEL_LEN: usize = 24;

/// Maximum exercise key length
pub const MAX_KEY_LEN: usize = 16;

/// Maximum exercise title length
pub const MAX_TITLE_LEN: usize = 24;

/// Maximum cue text length
pub const MAX_CUE_LEN: usize = 96;

/// Maximum exercises in one phase list
pub const MAX_PHASE_EXERCISES: usize = 16;

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Lists do not form a valid program
    Program(ProgramError),
    /// An exercise key is used twice
    DuplicateKey {
        /// Phase of the second occurrence
        phase: Phase,
        /// 1-based position of the second occurrence
        position: u16,
    },
}

impl From<ProgramError> for ConfigError {
    fn from(e: ProgramError) -> Self {
        ConfigError::Program(e)
    }
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::Program(e) => write!(f, "{}", e),
            ConfigError::DuplicateKey { phase, position } => {
                write!(f, "{} exercise {} reuses an existing key", phase, position)
            }
        }
    }
}

/// Exercise entry
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ExerciseConfig {
    /// Stable identifier
    pub key: String<MAX_KEY_LEN>,
    /// Display name
    pub title: String<MAX_TITLE_LEN>,
    /// Instruction text
    #[cfg_attr(feature = "serde", serde(default))]
    pub cue: String<MAX_CUE_LEN>,
    /// Duration in seconds
    pub duration_s: u16,
}

impl ExerciseConfig {
    /// Borrowed definition for the program builder
    pub fn definition(&self) -> ExerciseDefinition<'_> {
        ExerciseDefinition::new(&self.key, &self.title, &self.cue, self.duration_s)
    }
}

/// Workout configuration
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WorkoutConfig {
    /// Display label
    pub label: String<MAX_LABEL_LEN>,
    /// Times the strength list is repeated
    pub strength_rounds: u8,
    pub warmup: Vec<ExerciseConfig, MAX_PHASE_EXERCISES>,
    pub strength: Vec<ExerciseConfig, MAX_PHASE_EXERCISES>,
    pub cooldown: Vec<ExerciseConfig, MAX_PHASE_EXERCISES>,
}

impl Default for WorkoutConfig {
    fn default() -> Self {
        Self {
            label: String::new(),
            strength_rounds: 1,
            warmup: Vec::new(),
            strength: Vec::new(),
            cooldown: Vec::new(),
        }
    }
}

impl WorkoutConfig {
    /// Exercise list for `phase`
    pub fn phase(&self, phase: Phase) -> &[ExerciseConfig] {
        match phase {
            Phase::Warmup => &self.warmup,
            Phase::Strength => &self.strength,
            Phase::Cooldown => &self.cooldown,
        }
    }

    /// Check the configuration without building
    ///
    /// Keys must be unique across all three lists. The strength list is
    /// repeated by rounds, not by duplicating entries.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (p, phase) in Phase::ALL.iter().enumerate() {
            for (i, exercise) in self.phase(*phase).iter().enumerate() {
                let seen_before = Phase::ALL[..=p].iter().any(|earlier| {
                    let list = self.phase(*earlier);
                    let end = if earlier == phase { i } else { list.len() };
                    list[..end].iter().any(|e| e.key == exercise.key)
                });
                if seen_before {
                    return Err(ConfigError::DuplicateKey {
                        phase: *phase,
                        position: (i + 1) as u16,
                    });
                }
            }
        }

        self.build().map(|_| ())
    }

    /// Build the program described by this configuration
    pub fn build(&self) -> Result<Program<'_>, ConfigError> {
        let warmup = definitions(&self.warmup);
        let strength = definitions(&self.strength);
        let cooldown = definitions(&self.cooldown);

        Ok(build_program(
            &warmup,
            &strength,
            &cooldown,
            self.strength_rounds,
        )?)
    }
}

fn definitions(list: &[ExerciseConfig]) -> Vec<ExerciseDefinition<'_>, MAX_PHASE_EXERCISES> {
    list.iter().map(ExerciseConfig::definition).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exercise(key: &str, duration_s: u16) -> ExerciseConfig {
        ExerciseConfig {
            key: key.try_into().unwrap(),
            title: key.try_into().unwrap(),
            cue: String::new(),
            duration_s,
        }
    }

    fn sample() -> WorkoutConfig {
        let mut config = WorkoutConfig {
            label: "Sample".try_into().unwrap(),
            strength_rounds: 3,
            ..WorkoutConfig::default()
        };
        config.warmup.push(exercise("jacks", 30)).unwrap();
        config.strength.push(exercise("squat", 45)).unwrap();
        config.strength.push(exercise("plank", 40)).unwrap();
        config.cooldown.push(exercise("stretch", 60)).unwrap();
        config
    }

    #[test]
    fn test_build_from_config() {
        let config = sample();
        config.validate().unwrap();

        let program = config.build().unwrap();
        assert_eq!(program.len(), 8);
        assert_eq!(program.total_duration_s(), 30 + 3 * 85 + 60);
        assert_eq!(program.get(1).unwrap().key(), "squat");
        assert_eq!(program.get(1).unwrap().total_in_phase, 6);
    }

    #[test]
    fn test_duplicate_key_within_phase() {
        let mut config = sample();
        config.strength.push(exercise("squat", 45)).unwrap();

        assert_eq!(
            config.validate().unwrap_err(),
            ConfigError::DuplicateKey {
                phase: Phase::Strength,
                position: 3,
            }
        );
    }

    #[test]
    fn test_duplicate_key_across_phases() {
        let mut config = sample();
        config.cooldown.push(exercise("jacks", 30)).unwrap();

        assert_eq!(
            config.validate().unwrap_err(),
            ConfigError::DuplicateKey {
                phase: Phase::Cooldown,
                position: 2,
            }
        );
    }

    #[test]
    fn test_program_errors_surface() {
        let mut config = sample();
        config.strength_rounds = 0;
        assert_eq!(
            config.validate().unwrap_err(),
            ConfigError::Program(ProgramError::NoRounds)
        );

        let mut config = sample();
        config.cooldown.clear();
        assert_eq!(
            config.build().unwrap_err(),
            ConfigError::Program(ProgramError::EmptyPhase(Phase::Cooldown))
        );

        let mut config = sample();
        config.warmup[0].duration_s = 0;
        assert_eq!(
            config.validate().unwrap_err(),
            ConfigError::Program(ProgramError::ZeroDuration {
                phase: Phase::Warmup,
                position: 1,
            })
        );
    }

    #[test]
    fn test_definition_borrows_config() {
        let entry = exercise("row", 50);
        let def = entry.definition();
        assert_eq!(def.key, "row");
        assert_eq!(def.duration_s, 50);
        assert_eq!(def.cue, "");
    }
}

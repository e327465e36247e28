//! Program construction
//!
//! Expands the three phase lists and the strength round count into one
//! flat, ordered sequence of steps.

use heapless::Vec;

use super::exercise::{ExerciseDefinition, Phase};

/// Maximum number of steps in a built program
pub const MAX_STEPS: usize = 64;

/// Errors raised while building a program
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ProgramError {
    /// A phase has no exercises
    EmptyPhase(Phase),
    /// Strength round count is zero
    NoRounds,
    /// An exercise has a zero duration
    ZeroDuration {
        /// Phase containing the exercise
        phase: Phase,
        /// 1-based position in the phase list
        position: u16,
    },
    /// Expanded program exceeds `MAX_STEPS`
    TooManySteps,
}

impl core::fmt::Display for ProgramError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ProgramError::EmptyPhase(phase) => write!(f, "{} phase has no exercises", phase),
            ProgramError::NoRounds => f.write_str("strength_rounds must be at least 1"),
            ProgramError::ZeroDuration { phase, position } => {
                write!(f, "{} exercise {} has a zero duration", phase, position)
            }
            ProgramError::TooManySteps => {
                write!(f, "program expands to more than {} steps", MAX_STEPS)
            }
        }
    }
}

/// One timed occurrence of an exercise in a program
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Step<'a> {
    /// Exercise this step plays
    pub exercise: ExerciseDefinition<'a>,
    /// Phase the step belongs to
    pub phase: Phase,
    /// 1-based position within the phase, continuous across rounds
    pub position_in_phase: u16,
    /// Number of steps in the phase, across all rounds
    pub total_in_phase: u16,
}

impl<'a> Step<'a> {
    /// Exercise identifier
    pub fn key(&self) -> &'a str {
        self.exercise.key
    }

    /// Display name
    pub fn title(&self) -> &'a str {
        self.exercise.title
    }

    /// Coaching text shown in the focus view
    pub fn cue(&self) -> &'a str {
        self.exercise.cue
    }

    /// Length of the step (seconds)
    pub fn duration_s(&self) -> u16 {
        self.exercise.duration_s
    }
}

/// A complete, immutable workout program
///
/// Always holds at least one step. Steps are stored in playback order
/// together with their start offset from the beginning of the program.
#[derive(Debug, Clone)]
pub struct Program<'a> {
    steps: Vec<Step<'a>, MAX_STEPS>,
    /// Start offset of each step (seconds from program start)
    offsets: Vec<u32, MAX_STEPS>,
    total_duration_s: u32,
}

impl<'a> Program<'a> {
    fn empty() -> Self {
        Self {
            steps: Vec::new(),
            offsets: Vec::new(),
            total_duration_s: 0,
        }
    }

    /// Append every exercise of a phase, `rounds` times
    fn emit_phase(
        &mut self,
        phase: Phase,
        exercises: &[ExerciseDefinition<'a>],
        rounds: u8,
    ) -> Result<(), ProgramError> {
        let count = exercises
            .len()
            .checked_mul(rounds as usize)
            .ok_or(ProgramError::TooManySteps)?;
        if count > MAX_STEPS - self.steps.len() {
            return Err(ProgramError::TooManySteps);
        }

        let per_round = exercises.len();
        for round in 0..rounds as usize {
            for (index, exercise) in exercises.iter().enumerate() {
                let step = Step {
                    exercise: *exercise,
                    phase,
                    position_in_phase: (round * per_round + index + 1) as u16,
                    total_in_phase: count as u16,
                };
                self.steps
                    .push(step)
                    .map_err(|_| ProgramError::TooManySteps)?;
                self.offsets
                    .push(self.total_duration_s)
                    .map_err(|_| ProgramError::TooManySteps)?;
                self.total_duration_s += exercise.duration_s as u32;
            }
        }

        Ok(())
    }

    /// All steps in playback order
    pub fn steps(&self) -> &[Step<'a>] {
        &self.steps
    }

    /// Number of steps
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Always false for a built program
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Step at `index`
    pub fn get(&self, index: usize) -> Option<&Step<'a>> {
        self.steps.get(index)
    }

    /// Index of the final step
    pub fn last_index(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }

    /// Sum of all step durations (seconds)
    pub fn total_duration_s(&self) -> u32 {
        self.total_duration_s
    }

    /// Seconds from program start to the beginning of step `index`
    ///
    /// Indices past the end map to the total duration.
    pub fn start_offset_s(&self, index: usize) -> u32 {
        self.offsets
            .get(index)
            .copied()
            .unwrap_or(self.total_duration_s)
    }

    /// Combined duration of every step in `phase` (seconds)
    pub fn phase_duration_s(&self, phase: Phase) -> u32 {
        self.steps
            .iter()
            .filter(|s| s.phase == phase)
            .map(|s| s.duration_s() as u32)
            .sum()
    }

    /// Bounded look-ahead: up to `count` steps starting at `from`
    pub fn upcoming(&self, from: usize, count: usize) -> impl Iterator<Item = &Step<'a>> {
        self.steps.iter().skip(from).take(count)
    }
}

/// Build a program from the three phase lists
///
/// Warm-up steps come first, then the strength list repeated
/// `strength_rounds` times, then cool-down. Strength positions keep
/// counting across rounds (round 2 of a 5-exercise block starts at 6).
pub fn build_program<'a>(
    warmup: &[ExerciseDefinition<'a>],
    strength: &[ExerciseDefinition<'a>],
    cooldown: &[ExerciseDefinition<'a>],
    strength_rounds: u8,
) -> Result<Program<'a>, ProgramError> {
    check_phase(Phase::Warmup, warmup)?;
    check_phase(Phase::Strength, strength)?;
    check_phase(Phase::Cooldown, cooldown)?;

    if strength_rounds == 0 {
        return Err(ProgramError::NoRounds);
    }

    let mut program = Program::empty();
    program.emit_phase(Phase::Warmup, warmup, 1)?;
    program.emit_phase(Phase::Strength, strength, strength_rounds)?;
    program.emit_phase(Phase::Cooldown, cooldown, 1)?;

    Ok(program)
}

/// Validate one phase list
fn check_phase(phase: Phase, exercises: &[ExerciseDefinition<'_>]) -> Result<(), ProgramError> {
    if exercises.is_empty() {
        return Err(ProgramError::EmptyPhase(phase));
    }

    if let Some(index) = exercises.iter().position(|e| e.duration_s == 0) {
        return Err(ProgramError::ZeroDuration {
            phase,
            position: (index + 1) as u16,
        });
    }

    Ok(())
}

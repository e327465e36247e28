//! Built-in full-body routine
//!
//! Used when no generated workout is available and as the reference
//! program in tests.

use super::builder::{build_program, Program, ProgramError};
use super::exercise::ExerciseDefinition;

/// Label shown for the built-in routine
pub const LABEL: &str = "Full Body";

/// Strength rounds in the built-in routine
pub const STRENGTH_ROUNDS: u8 = 2;

pub static WARMUP: [ExerciseDefinition<'static>; 5] = [
    ExerciseDefinition::new("march", "March in Place", "Lift knees to hip height, swing arms", 60),
    ExerciseDefinition::new("arm-circles", "Arm Circles", "Small circles, growing larger", 60),
    ExerciseDefinition::new("hip-circles", "Hip Circles", "Hands on hips, slow full circles", 60),
    ExerciseDefinition::new("leg-swings", "Leg Swings", "Hold a wall, swing front to back", 60),
    ExerciseDefinition::new("inchworm", "Inchworms", "Walk hands out to plank and back", 60),
];

pub static STRENGTH: [ExerciseDefinition<'static>; 5] = [
    ExerciseDefinition::new("squat", "Squats", "Chest up, sit back, knees over toes", 60),
    ExerciseDefinition::new("push-up", "Push-ups", "Body in one line, lower with control", 60),
    ExerciseDefinition::new("lunge", "Reverse Lunges", "Step back, both knees at 90 degrees", 60),
    ExerciseDefinition::new("row", "Backpack Rows", "Hinge forward, pull elbows to ribs", 60),
    ExerciseDefinition::new("plank", "Plank", "Squeeze glutes, breathe steadily", 60),
];

pub static COOLDOWN: [ExerciseDefinition<'static>; 5] = [
    ExerciseDefinition::new("quad-stretch", "Quad Stretch", "Heel to glute, switch at 30s", 60),
    ExerciseDefinition::new("hamstring", "Hamstring Stretch", "Hinge over a straight leg", 60),
    ExerciseDefinition::new("chest-opener", "Chest Opener", "Clasp hands behind, lift gently", 60),
    ExerciseDefinition::new("child-pose", "Child's Pose", "Sink hips to heels, arms long", 60),
    ExerciseDefinition::new("breathing", "Box Breathing", "In 4, hold 4, out 4, hold 4", 60),
];

/// Build the built-in routine
pub fn full_body() -> Result<Program<'static>, ProgramError> {
    build_program(&WARMUP, &STRENGTH, &COOLDOWN, STRENGTH_ROUNDS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_body_shape() {
        let program = full_body().unwrap();
        assert_eq!(program.len(), 20);
        assert_eq!(program.total_duration_s(), 1200);
        assert_eq!(program.get(0).unwrap().key(), "march");
        assert_eq!(program.get(19).unwrap().key(), "breathing");
    }

    #[test]
    fn test_preset_keys_unique() {
        let keys = WARMUP.iter().chain(STRENGTH.iter()).chain(COOLDOWN.iter());
        for (i, a) in keys.clone().enumerate() {
            for b in keys.clone().skip(i + 1) {
                assert_ne!(a.key, b.key);
            }
        }
    }
}

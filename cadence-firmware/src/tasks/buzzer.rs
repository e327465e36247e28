//! Buzzer task
//!
//! Plays the step-complete cue on a piezo driven by PWM.

use defmt::*;
use embassy_rp::pwm::{Config as PwmConfig, Pwm};
use embassy_time::Timer;

use crate::channels::CUE_SIGNAL;

/// RP2040 system clock feeding the PWM slice (divider 1)
const PWM_CLOCK_HZ: u32 = 125_000_000;

/// Buzzer configuration
pub struct BuzzerConfig {
    /// Tone frequency in Hz
    pub tone_hz: u32,
    /// Length of one beep in ms
    pub beep_ms: u64,
    /// Silence between beeps in ms
    pub gap_ms: u64,
    /// Beeps per cue
    pub beeps: u8,
}

impl Default for BuzzerConfig {
    fn default() -> Self {
        Self {
            tone_hz: 2_500,
            beep_ms: 120,
            gap_ms: 80,
            beeps: 2,
        }
    }
}

impl BuzzerConfig {
    /// PWM wrap value for the tone frequency
    fn top(&self) -> u16 {
        (PWM_CLOCK_HZ / self.tone_hz.max(1_908))
            .saturating_sub(1)
            .min(u16::MAX as u32) as u16
    }
}

/// Buzzer task - waits for cue requests and beeps
#[embassy_executor::task]
pub async fn buzzer_task(mut pwm: Pwm<'static>, config: BuzzerConfig) {
    info!("Buzzer task started");

    let mut silent = PwmConfig::default();
    silent.top = config.top();
    silent.compare_a = 0;

    let mut tone = silent.clone();
    tone.compare_a = silent.top / 2;

    pwm.set_config(&silent);

    loop {
        CUE_SIGNAL.wait().await;
        debug!("Cue: {} beeps at {} Hz", config.beeps, config.tone_hz);

        for i in 0..config.beeps {
            if i > 0 {
                Timer::after_millis(config.gap_ms).await;
            }
            pwm.set_config(&tone);
            Timer::after_millis(config.beep_ms).await;
            pwm.set_config(&silent);
        }
    }
}

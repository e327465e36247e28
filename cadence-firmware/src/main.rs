//! Cadence - Workout Timer Firmware
//!
//! Main firmware binary for an RP2040 board with an SH1106 OLED, a rotary
//! encoder with push-button and a piezo buzzer. The workout is compiled
//! in from workout.toml.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Input, Pull};
use embassy_rp::i2c::{self, I2c};
use embassy_rp::peripherals::I2C0;
use embassy_rp::pwm::{Config as PwmConfig, Pwm};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use cadence_core::program::{preset, Phase, Program};

mod channels;
mod collaborators;
mod oled;
mod tasks;
mod workout;

bind_interrupts!(struct Irqs {
    I2C0_IRQ => i2c::InterruptHandler<I2C0>;
});

/// I2C clock for the OLED
const OLED_I2C_HZ: u32 = 400_000;

// The program must outlive every task that reads it
static PROGRAM: StaticCell<Program<'static>> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Cadence firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let (program, label) = load_program();
    let program: &'static Program<'static> = PROGRAM.init(program);
    info!(
        "Workout '{}': {} steps, {}s",
        label,
        program.len(),
        program.total_duration_s()
    );
    debug!(
        "Warm-up {}s, strength {}s, cool-down {}s",
        program.phase_duration_s(Phase::Warmup),
        program.phase_duration_s(Phase::Strength),
        program.phase_duration_s(Phase::Cooldown)
    );

    // OLED on I2C0 (SDA=GPIO4, SCL=GPIO5)
    let mut i2c_config = i2c::Config::default();
    i2c_config.frequency = OLED_I2C_HZ;
    let i2c = I2c::new_async(p.I2C0, p.PIN_5, p.PIN_4, Irqs, i2c_config);

    // Encoder (A=GPIO16, B=GPIO17) and its push-button (GPIO18)
    let enc_a = Input::new(p.PIN_16, Pull::Up);
    let enc_b = Input::new(p.PIN_17, Pull::Up);
    let button = Input::new(p.PIN_18, Pull::Up);

    // Piezo on GPIO14 (PWM slice 7, channel A)
    let pwm = Pwm::new_output_a(p.PWM_SLICE7, p.PIN_14, PwmConfig::default());

    // Spawn tasks
    spawner.spawn(tasks::tick_task()).unwrap();
    spawner.spawn(tasks::display_task(i2c)).unwrap();
    spawner
        .spawn(tasks::buttons_task(button, enc_a, enc_b))
        .unwrap();
    spawner
        .spawn(tasks::buzzer_task(pwm, tasks::BuzzerConfig::default()))
        .unwrap();
    spawner
        .spawn(tasks::controller_task(program, label))
        .unwrap();

    info!("All tasks spawned, firmware running");
}

/// Build the compiled-in workout, or the built-in routine if that fails
///
/// build.rs has already validated workout.toml, so the fallback only
/// covers a mismatch between the build script and the runtime builder.
fn load_program() -> (Program<'static>, &'static str) {
    match workout::build() {
        Ok(program) => (program, workout::LABEL),
        Err(e) => {
            error!("Compiled-in workout rejected: {}", e);
            warn!("Using built-in routine '{}'", preset::LABEL);
            match preset::full_body() {
                Ok(program) => (program, preset::LABEL),
                Err(e) => defmt::panic!("Built-in routine rejected: {}", e),
            }
        }
    }
}

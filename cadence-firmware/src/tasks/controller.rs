//! Main controller task
//!
//! Owns the session transport. Serialises input events and clock ticks,
//! applies them to the session and publishes a freshly rendered screen
//! after every change.

use defmt::*;
use embassy_futures::select::{select, Either};

use cadence_core::program::Program;
use cadence_core::session::{Session, SessionEvent, Transport};
use cadence_core::traits::{CuePlayer, ViewMode};
use cadence_display::{Keymap, Renderer};

use crate::channels::{INPUT_CHANNEL, SCREEN_UPDATE};
use crate::collaborators::{BuzzerCue, FocusView};
use crate::tasks::tick::TICK_SIGNAL;

/// Controller task - main coordination loop
#[embassy_executor::task]
pub async fn controller_task(program: &'static Program<'static>, label: &'static str) {
    info!(
        "Controller task started: {} steps, {}s total",
        program.len(),
        program.total_duration_s()
    );

    let mut transport = Transport::new(Session::new(program), BuzzerCue, FocusView::default());
    let keymap = Keymap::default();
    let mut renderer = Renderer::new();
    let mut last_tick: Option<u32> = None;

    renderer.render_boot(label);
    SCREEN_UPDATE.signal(renderer.screen().clone());

    loop {
        let changed = match select(INPUT_CHANNEL.receive(), TICK_SIGNAL.wait()).await {
            Either::First(nav) => {
                // Seconds that elapsed before the press belong to the old state
                if let Some(count) = TICK_SIGNAL.try_take() {
                    apply_ticks(&mut transport, &mut last_tick, count);
                }

                let command = keymap.command(nav);
                debug!("Input {:?} -> {:?}", nav, command);
                transport.handle(command);
                true
            }

            Either::Second(count) => apply_ticks(&mut transport, &mut last_tick, count),
        };

        if changed {
            renderer.render(transport.session(), label, transport.is_fullscreen());
            SCREEN_UPDATE.signal(renderer.screen().clone());
        }
    }
}

/// Apply every second up to tick `count`
///
/// Replays seconds whose signals landed on top of each other. Returns
/// whether the session was running and so may have changed.
fn apply_ticks<C: CuePlayer, V: ViewMode>(
    transport: &mut Transport<'_, C, V>,
    last_tick: &mut Option<u32>,
    count: u32,
) -> bool {
    let pending = match *last_tick {
        Some(last) => count.wrapping_sub(last),
        None => 1,
    };
    *last_tick = Some(count);

    let was_running = transport.session().is_running();
    for _ in 0..pending {
        if let Some(event) = transport.tick() {
            log_event(transport, event);
        }
    }
    trace!(
        "Tick {}: step {} with {}s left",
        count,
        transport.session().current_index(),
        transport.session().seconds_remaining()
    );
    was_running
}

fn log_event<C: CuePlayer, V: ViewMode>(transport: &Transport<'_, C, V>, event: SessionEvent) {
    let completed = event.completed_index();

    if event.is_program_finished() {
        info!(
            "Program finished at step {} after {}s",
            completed,
            transport.session().elapsed_total_s()
        );
        return;
    }

    let step = transport.session().current_step();
    debug!(
        "Step {} complete, now {} '{}' ({} {}/{})",
        completed,
        transport.session().current_index(),
        step.key(),
        step.phase,
        step.position_in_phase,
        step.total_in_phase
    );
}

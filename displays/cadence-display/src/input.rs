//! Input decoding and key mapping
//!
//! Raw button edges and encoder levels are turned into `NavigationEvent`s
//! here, and the `Keymap` names the transport command for each event. The
//! decoders are plain state machines driven with timestamps so that the
//! firmware tasks only have to sample pins.

use cadence_core::session::Command;

/// Unified navigation events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum NavigationEvent {
    /// Single short press
    Select,
    /// Two short presses in quick succession
    DoubleSelect,
    /// Press held past the hold threshold
    Hold,
    /// Encoder turned clockwise
    Forward,
    /// Encoder turned counter-clockwise
    Backward,
}

/// Maps navigation events to transport commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Keymap {
    pub select: Command,
    pub double_select: Command,
    pub hold: Command,
    pub forward: Command,
    pub backward: Command,
}

impl Default for Keymap {
    fn default() -> Self {
        Self {
            select: Command::TogglePlayPause,
            double_select: Command::ToggleFullscreen,
            hold: Command::Restart,
            forward: Command::Next,
            backward: Command::ToggleMute,
        }
    }
}

impl Keymap {
    pub fn command(&self, event: NavigationEvent) -> Command {
        match event {
            NavigationEvent::Select => self.select,
            NavigationEvent::DoubleSelect => self.double_select,
            NavigationEvent::Hold => self.hold,
            NavigationEvent::Forward => self.forward,
            NavigationEvent::Backward => self.backward,
        }
    }
}

/// Presses shorter than this are contact bounce
pub const DEBOUNCE_MS: u64 = 20;

/// Press length that counts as a hold
pub const HOLD_MS: u64 = 500;

/// Window for the second press of a double click
pub const DOUBLE_CLICK_MS: u64 = 300;

/// Push-button decoder
///
/// Feed it `press`/`release` edges and call `poll` periodically. A single
/// click is only reported once the double-click window has passed without
/// a second press.
#[derive(Debug, Clone, Default)]
pub struct ClickDetector {
    pressed_at: Option<u64>,
    hold_reported: bool,
    pending_click: Option<u64>,
}

impl ClickDetector {
    pub const fn new() -> Self {
        Self {
            pressed_at: None,
            hold_reported: false,
            pending_click: None,
        }
    }

    /// Button went down
    pub fn press(&mut self, now_ms: u64) {
        self.pressed_at = Some(now_ms);
        self.hold_reported = false;
    }

    /// Button came up
    pub fn release(&mut self, now_ms: u64) -> Option<NavigationEvent> {
        let pressed_at = self.pressed_at.take()?;
        if self.hold_reported {
            self.hold_reported = false;
            return None;
        }
        if now_ms.saturating_sub(pressed_at) < DEBOUNCE_MS {
            return None;
        }

        match self.pending_click.replace(now_ms) {
            Some(first) if now_ms.saturating_sub(first) <= DOUBLE_CLICK_MS => {
                self.pending_click = None;
                Some(NavigationEvent::DoubleSelect)
            }
            // First click expired without a poll in between
            Some(_) => Some(NavigationEvent::Select),
            None => None,
        }
    }

    /// Report holds and expired single clicks
    ///
    /// A pending click is flushed even while the button is down, since a
    /// release after the window can no longer make it a double click.
    pub fn poll(&mut self, now_ms: u64) -> Option<NavigationEvent> {
        if let Some(at) = self.pending_click {
            if now_ms.saturating_sub(at) > DOUBLE_CLICK_MS {
                self.pending_click = None;
                return Some(NavigationEvent::Select);
            }
        }

        let pressed_at = self.pressed_at?;
        if !self.hold_reported && now_ms.saturating_sub(pressed_at) >= HOLD_MS {
            self.hold_reported = true;
            self.pending_click = None;
            return Some(NavigationEvent::Hold);
        }

        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Rest,
    /// First channel moved; `true` when A led (clockwise)
    Leading(bool),
    /// Both channels low
    Both(bool),
}

/// Quadrature encoder decoder
///
/// Reports one event per detent. Bounces back to rest are discarded.
#[derive(Debug, Clone)]
pub struct QuadratureDecoder {
    phase: Phase,
    last: (bool, bool),
}

impl QuadratureDecoder {
    /// Create a decoder from the current pin levels
    pub const fn new(a: bool, b: bool) -> Self {
        Self {
            phase: Phase::Rest,
            last: (a, b),
        }
    }

    /// Feed the current pin levels
    pub fn update(&mut self, a: bool, b: bool) -> Option<NavigationEvent> {
        if (a, b) == self.last {
            return None;
        }
        self.last = (a, b);

        match (self.phase, a, b) {
            (Phase::Rest, false, true) => self.phase = Phase::Leading(true),
            (Phase::Rest, true, false) => self.phase = Phase::Leading(false),
            (Phase::Leading(cw), false, false) => self.phase = Phase::Both(cw),
            (Phase::Leading(_), true, true) => self.phase = Phase::Rest,
            (Phase::Both(cw), a, b) if a || b => {
                self.phase = Phase::Rest;
                return Some(if cw {
                    NavigationEvent::Forward
                } else {
                    NavigationEvent::Backward
                });
            }
            _ => {}
        }

        None
    }
}

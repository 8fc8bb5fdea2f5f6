use super::SensorError;
use crate::config::{clamp_cooldown, DEFAULT_COOLDOWN_MS};

/// Widget state owned by the root component.
///
/// Only the transition methods below change it. The sensor callback never
/// touches the fields directly.
#[derive(Debug, Clone, PartialEq)]
pub struct ShakeState {
    shake_count: u64,
    pending_pulses: u32,
    cooldown_ms: u32,
    error: Option<SensorError>,
}

impl Default for ShakeState {
    fn default() -> Self {
        Self::new(DEFAULT_COOLDOWN_MS)
    }
}

impl ShakeState {
    pub fn new(cooldown_ms: u32) -> Self {
        Self {
            shake_count: 0,
            pending_pulses: 0,
            cooldown_ms: clamp_cooldown(cooldown_ms),
            error: None,
        }
    }

    pub fn shake_count(&self) -> u64 {
        self.shake_count
    }

    /// True while at least one scheduled pulse clear has not fired yet.
    pub fn is_shaking(&self) -> bool {
        self.pending_pulses > 0
    }

    pub fn cooldown_ms(&self) -> u32 {
        self.cooldown_ms
    }

    pub fn error(&self) -> Option<SensorError> {
        self.error
    }

    /// Record an accepted shake. The caller must schedule exactly one
    /// matching [`ShakeState::end_pulse`].
    pub fn accept_shake(&mut self) {
        self.shake_count += 1;
        self.pending_pulses += 1;
    }

    /// A scheduled pulse clear fired.
    pub fn end_pulse(&mut self) {
        self.pending_pulses = self.pending_pulses.saturating_sub(1);
    }

    /// Zero the counter. The pulse and the cooldown are left alone.
    pub fn reset(&mut self) {
        self.shake_count = 0;
    }

    /// Returns `true` when the cooldown actually changed.
    pub fn set_cooldown(&mut self, cooldown_ms: u32) -> bool {
        let cooldown_ms = clamp_cooldown(cooldown_ms);
        if cooldown_ms == self.cooldown_ms {
            return false;
        }
        self.cooldown_ms = cooldown_ms;
        true
    }

    /// Remember a failed subscription attempt. The message stays until a
    /// later failure overwrites it.
    pub fn record_error(&mut self, error: SensorError) {
        self.error = Some(error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state() {
        let state = ShakeState::default();
        assert_eq!(state.shake_count(), 0);
        assert!(!state.is_shaking());
        assert_eq!(state.cooldown_ms(), 100);
        assert_eq!(state.error(), None);
    }

    #[test]
    fn test_accept_shake_counts_and_pulses() {
        let mut state = ShakeState::default();
        state.accept_shake();
        assert_eq!(state.shake_count(), 1);
        assert!(state.is_shaking());
        state.end_pulse();
        assert!(!state.is_shaking());
        assert_eq!(state.shake_count(), 1);
    }

    #[test]
    fn test_overlapping_pulses_clear_on_last() {
        let mut state = ShakeState::default();
        state.accept_shake();
        state.accept_shake();
        state.end_pulse();
        assert!(state.is_shaking());
        state.end_pulse();
        assert!(!state.is_shaking());
    }

    #[test]
    fn test_stray_end_pulse_is_harmless() {
        let mut state = ShakeState::default();
        state.end_pulse();
        assert!(!state.is_shaking());
    }

    #[test]
    fn test_reset_leaves_pulse_and_cooldown() {
        let mut state = ShakeState::new(400);
        for _ in 0..7 {
            state.accept_shake();
        }
        state.reset();
        assert_eq!(state.shake_count(), 0);
        assert!(state.is_shaking());
        assert_eq!(state.cooldown_ms(), 400);
    }

    #[test]
    fn test_set_cooldown_reports_change() {
        let mut state = ShakeState::default();
        assert!(!state.set_cooldown(100));
        assert!(state.set_cooldown(600));
        assert_eq!(state.cooldown_ms(), 600);
        // Snaps onto the grid before comparing
        assert!(!state.set_cooldown(640));
        assert!(state.set_cooldown(5000));
        assert_eq!(state.cooldown_ms(), 1000);
    }

    #[test]
    fn test_error_persists_until_overwritten() {
        let mut state = ShakeState::default();
        state.record_error(SensorError::SensorAccess);
        state.set_cooldown(300);
        state.accept_shake();
        state.reset();
        assert_eq!(state.error(), Some(SensorError::SensorAccess));
        state.record_error(SensorError::PermissionDenied);
        assert_eq!(state.error(), Some(SensorError::PermissionDenied));
    }
}

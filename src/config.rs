//! Detection and UI constants.
//!
//! There is no runtime configuration: everything here is fixed at compile
//! time, and the cooldown is the only value the user can change.

/// Acceleration magnitude (m/s², gravity included) a sample must exceed.
pub const SHAKE_THRESHOLD: f64 = 15.0;

/// How long the visual pulse stays on after an accepted shake.
pub const PULSE_DURATION_MS: u32 = 300;

pub const COOLDOWN_MIN_MS: u32 = 100;
pub const COOLDOWN_MAX_MS: u32 = 1000;
pub const COOLDOWN_STEP_MS: u32 = 100;
pub const DEFAULT_COOLDOWN_MS: u32 = COOLDOWN_MIN_MS;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShakeConfig {
    pub threshold: f64,
    pub pulse_ms: u32,
}

impl Default for ShakeConfig {
    fn default() -> Self {
        Self {
            threshold: SHAKE_THRESHOLD,
            pulse_ms: PULSE_DURATION_MS,
        }
    }
}

/// Snap a raw slider value onto the cooldown grid.
///
/// Values are rounded to the nearest step and clamped into
/// `[COOLDOWN_MIN_MS, COOLDOWN_MAX_MS]`.
pub fn clamp_cooldown(raw: u32) -> u32 {
    let snapped = raw.saturating_add(COOLDOWN_STEP_MS / 2) / COOLDOWN_STEP_MS * COOLDOWN_STEP_MS;
    snapped.clamp(COOLDOWN_MIN_MS, COOLDOWN_MAX_MS)
}

/// Parse the text value of the cooldown slider.
///
/// Returns `None` for anything that isn't a non-negative integer, in which
/// case the caller keeps the current cooldown.
pub fn parse_cooldown(value: &str) -> Option<u32> {
    value.trim().parse::<u32>().ok().map(clamp_cooldown)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_matches_constants() {
        let config = ShakeConfig::default();
        assert!((config.threshold - 15.0).abs() < 1e-12);
        assert_eq!(config.pulse_ms, 300);
    }

    #[test]
    fn test_clamp_cooldown_keeps_grid_values() {
        for ms in (100..=1000).step_by(100) {
            assert_eq!(clamp_cooldown(ms), ms);
        }
    }

    #[test]
    fn test_clamp_cooldown_out_of_range() {
        assert_eq!(clamp_cooldown(0), 100);
        assert_eq!(clamp_cooldown(40), 100);
        assert_eq!(clamp_cooldown(1000), 1000);
        assert_eq!(clamp_cooldown(5000), 1000);
    }

    #[test]
    fn test_clamp_cooldown_rounds_to_nearest_step() {
        assert_eq!(clamp_cooldown(149), 100);
        assert_eq!(clamp_cooldown(150), 200);
        assert_eq!(clamp_cooldown(730), 700);
    }

    #[test]
    fn test_parse_cooldown() {
        assert_eq!(parse_cooldown("300"), Some(300));
        assert_eq!(parse_cooldown(" 900 "), Some(900));
        assert_eq!(parse_cooldown("1200"), Some(1000));
        assert_eq!(parse_cooldown(""), None);
        assert_eq!(parse_cooldown("-100"), None);
        assert_eq!(parse_cooldown("abc"), None);
    }
}

use super::MotionSample;
use crate::config::ShakeConfig;

/// Threshold-and-cooldown gate turning raw samples into accepted shakes.
///
/// One gate lives for the lifetime of one motion subscription. The time of
/// the last accepted shake starts unset, so the first strong sample after
/// (re)subscribing is always accepted.
#[derive(Debug, Clone)]
pub struct ShakeGate {
    threshold: f64,
    cooldown_ms: u32,
    last_shake_ms: Option<f64>,
}

impl ShakeGate {
    pub fn new(config: &ShakeConfig, cooldown_ms: u32) -> Self {
        Self {
            threshold: config.threshold,
            cooldown_ms,
            last_shake_ms: None,
        }
    }

    #[cfg(test)]
    pub fn last_shake_ms(&self) -> Option<f64> {
        self.last_shake_ms
    }

    /// Feed one sample observed at `now_ms`.
    ///
    /// Returns `true` when the sample is accepted as a shake: its magnitude
    /// is strictly above the threshold and strictly more than the cooldown
    /// has passed since the previous accepted shake. Rejected samples leave
    /// the gate untouched.
    pub fn offer(&mut self, sample: &MotionSample, now_ms: f64) -> bool {
        let magnitude = sample.magnitude();
        if magnitude.is_nan() || magnitude <= self.threshold {
            return false;
        }
        if let Some(last) = self.last_shake_ms {
            if now_ms - last <= f64::from(self.cooldown_ms) {
                return false;
            }
        }
        self.last_shake_ms = Some(now_ms);
        true
    }
}

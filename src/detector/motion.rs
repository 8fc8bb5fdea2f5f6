/// One device-motion reading: acceleration including gravity, in m/s².
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionSample {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl MotionSample {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Build a sample from optional axis readings.
    ///
    /// Browsers report `null` for axes they cannot measure; those count as 0.
    pub fn from_axes(x: Option<f64>, y: Option<f64>, z: Option<f64>) -> Self {
        Self::new(x.unwrap_or(0.0), y.unwrap_or(0.0), z.unwrap_or(0.0))
    }

    /// Euclidean norm of the acceleration vector.
    pub fn magnitude(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_magnitude_at_rest() {
        // Phone lying flat: gravity on z only
        let sample = MotionSample::new(0.0, 0.0, 9.81);
        assert!((sample.magnitude() - 9.81).abs() < 1e-10);
    }

    #[test]
    fn test_magnitude_pythagorean() {
        let sample = MotionSample::new(3.0, 4.0, 12.0);
        assert!((sample.magnitude() - 13.0).abs() < 1e-10);
    }

    #[test]
    fn test_magnitude_ignores_sign() {
        let a = MotionSample::new(-6.0, 8.0, -10.0);
        let b = MotionSample::new(6.0, -8.0, 10.0);
        assert!((a.magnitude() - b.magnitude()).abs() < 1e-10);
    }

    #[test]
    fn test_from_axes_missing_axis_is_zero() {
        assert_eq!(
            MotionSample::from_axes(Some(1.0), Some(2.0), Some(3.0)),
            MotionSample::new(1.0, 2.0, 3.0)
        );
        assert_eq!(
            MotionSample::from_axes(None, Some(2.0), Some(3.0)),
            MotionSample::new(0.0, 2.0, 3.0)
        );
        assert_eq!(
            MotionSample::from_axes(Some(1.0), None, Some(3.0)),
            MotionSample::new(1.0, 0.0, 3.0)
        );
        assert_eq!(
            MotionSample::from_axes(None, None, None),
            MotionSample::new(0.0, 0.0, 0.0)
        );
    }
}

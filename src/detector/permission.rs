use std::fmt;

/// Outcome of the motion-sensor capability check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionState {
    /// The platform has no permission gate; events flow once subscribed.
    NotRequired,
    Granted,
    Denied,
}

impl PermissionState {
    /// Interpret the string a permission request resolved with.
    ///
    /// Anything other than `"granted"` (including `"default"`) counts as a
    /// refusal.
    pub fn from_response(response: &str) -> Self {
        if response == "granted" {
            PermissionState::Granted
        } else {
            PermissionState::Denied
        }
    }

    pub fn into_access(self) -> Result<(), SensorError> {
        match self {
            PermissionState::NotRequired | PermissionState::Granted => Ok(()),
            PermissionState::Denied => Err(SensorError::PermissionDenied),
        }
    }
}

/// Why a motion subscription could not be established.
///
/// Both variants end the current attempt; the rest of the widget keeps
/// working.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorError {
    PermissionDenied,
    SensorAccess,
}

impl SensorError {
    pub fn message(&self) -> &'static str {
        match self {
            SensorError::PermissionDenied => "Permission for motion sensors was denied.",
            SensorError::SensorAccess => "Error accessing motion sensors.",
        }
    }
}

impl fmt::Display for SensorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for SensorError {}

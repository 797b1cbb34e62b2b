use thiserror::Error;

/// Errors reported by hardware drivers.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum HardwareError {
    /// The driver could not be initialised or is not present on this host.
    #[error("Hardware unavailable: {0}")]
    Unavailable(String),

    /// Writing an output failed.
    #[error("Output write failed on {driver}: {message}")]
    OutputFailed { driver: String, message: String },

    /// Registering or removing an input callback failed.
    #[error("Sensor error: {0}")]
    Sensor(String),
}

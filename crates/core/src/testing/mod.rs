//! Testing utilities and mock hardware.
//!
//! These stand in for the pin-level drivers so the orchestrator, actuator and
//! HTTP layer can be exercised without a cabinet attached.
//!
//! # Example
//!
//! ```rust,ignore
//! use slotbox_core::testing::{ManualSensor, MockMotorDriver};
//!
//! let motor = Arc::new(MockMotorDriver::new());
//! let sensor = Arc::new(ManualSensor::new());
//! let hardware = HardwareCapabilities::none()
//!     .with_motor(motor.clone())
//!     .with_sensor(sensor.clone());
//! ```

mod manual_sensor;
mod mock_motor_driver;

pub use manual_sensor::ManualSensor;
pub use mock_motor_driver::MockMotorDriver;

mod sensorcontroller;
mod dummysensorcontroller;

pub use sensorcontroller::FreshnessStatus;
pub use sensorcontroller::RgbValue;
pub use sensorcontroller::SensorController;
pub use sensorcontroller::SensorControllerPointer;
pub use sensorcontroller::SensorReading;

pub use dummysensorcontroller::DummySensorController;

#[cfg(feature = "http")]
mod httpsensorcontroller;

#[cfg(feature = "http")]
pub use httpsensorcontroller::HttpSensorController;

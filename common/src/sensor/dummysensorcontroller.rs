use serde::Deserialize;

use crate::sensor::sensorcontroller::{SensorController, SensorReading};

/// Serves an embedded sample reading instead of touching the network.
/// Useful while the monitor firmware is not up yet.
#[derive(Deserialize, Default)]
pub struct DummySensorController {
    reading: SensorReading,
}

impl DummySensorController {
    pub fn new() -> Result<Self, serde_json::Error> {
        let json_data = std::include_str!("./dummyreading.json");

        serde_json::from_str::<Self>(json_data)
    }
}

impl SensorController for DummySensorController {
    fn current_reading(&self) -> Result<SensorReading, Box<dyn std::error::Error>> {
        Ok(self.reading.clone())
    }
}

#[test]
fn test_dummy_sensor_controller() {
    use crate::sensor::sensorcontroller::FreshnessStatus;

    let controller = DummySensorController::new().unwrap();
    let reading = controller.current_reading().unwrap();

    assert_eq!(reading.temperature, 24.5);
    assert_eq!(reading.humidity, 65.0);
    assert_eq!(reading.gas, 0.12);
    assert_eq!(reading.status, FreshnessStatus::Fresh);
    assert!(!reading.relay);
}

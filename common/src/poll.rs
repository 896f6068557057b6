//! The poll boundary: fetch one reading and feed it to the render pass.

use crate::display::DisplaySurface;
use crate::render;
use crate::sensor::{DummySensorController, SensorController, SensorControllerPointer};

/// Drives poll cycles against an injected data source and surface.
pub struct Poller {
    controller: SensorControllerPointer,
}

impl Poller {
    pub fn new(controller: SensorControllerPointer) -> Self {
        Self { controller }
    }

    /// Runs one poll cycle.
    ///
    /// Failures never escape here: a fetch or parse error is logged and
    /// turned into the error display, and the next cycle is the only
    /// retry. Fields the error display does not touch keep whatever the
    /// last successful render wrote.
    pub fn poll(&mut self, surface: &mut dyn DisplaySurface) {
        match self.controller.current_reading() {
            Ok(reading) => render::render_reading(surface, &reading),
            Err(e) => {
                log::error!("Failed to fetch sensor data: {e}");
                render::render_error(surface);
            }
        }
    }

    /// Manual trigger, for a refresh control in the frontend.
    pub fn refresh(&mut self, surface: &mut dyn DisplaySurface) {
        self.poll(surface);
    }
}

/// Feeds the embedded sample reading through the render pass without
/// touching any controller or the network.
pub fn use_test_data(surface: &mut dyn DisplaySurface) -> Result<(), Box<dyn std::error::Error>> {
    let reading = DummySensorController::new()?.current_reading()?;
    log::info!("Using test data: {reading:?}");

    render::render_reading(surface, &reading);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::{BarField, MemorySurface, TextField};
    use crate::render::ERROR_MARKER;
    use crate::sensor::SensorReading;

    struct FailingController;

    impl SensorController for FailingController {
        fn current_reading(&self) -> Result<SensorReading, Box<dyn std::error::Error>> {
            Err("HTTP status server error (500)".into())
        }
    }

    #[test]
    fn successful_poll_renders_the_reading() {
        let mut surface = MemorySurface::new();
        let mut poller = Poller::new(Box::new(DummySensorController::new().unwrap()));

        poller.poll(&mut surface);

        assert_eq!(surface.text(TextField::Temperature), Some("24.5"));
        assert_eq!(surface.text(TextField::StatusLabel), Some("SEGAR"));
    }

    #[test]
    fn failed_poll_shows_the_error_display() {
        let mut surface = MemorySurface::new();
        let mut poller = Poller::new(Box::new(FailingController));

        poller.poll(&mut surface);

        for field in [
            TextField::Temperature,
            TextField::Humidity,
            TextField::Gas,
            TextField::Red,
            TextField::Green,
            TextField::Blue,
        ] {
            assert_eq!(surface.text(field), Some(ERROR_MARKER), "{field:?}");
        }
        assert_eq!(surface.text(TextField::StatusLabel), Some("ERROR"));
        assert_eq!(
            surface.text(TextField::StatusDescription),
            Some("Gagal mengambil data")
        );
    }

    #[test]
    fn failed_poll_keeps_untouched_fields_from_the_previous_render() {
        let mut surface = MemorySurface::new();

        let mut poller = Poller::new(Box::new(DummySensorController::new().unwrap()));
        poller.poll(&mut surface);

        let mut poller = Poller::new(Box::new(FailingController));
        poller.poll(&mut surface);

        assert_eq!(surface.text(TextField::Relay), Some("OFF"));
        assert_eq!(surface.bar(BarField::Humidity), Some(0.65));
    }

    #[test]
    fn test_data_renders_the_documented_sample() {
        let mut surface = MemorySurface::new();

        use_test_data(&mut surface).unwrap();

        assert_eq!(surface.text(TextField::Temperature), Some("24.5"));
        assert_eq!(surface.text(TextField::Humidity), Some("65"));
        assert_eq!(surface.text(TextField::Gas), Some("12.0"));
        assert_eq!(surface.text(TextField::Red), Some("180"));
        assert_eq!(surface.text(TextField::Green), Some("50"));
        assert_eq!(surface.text(TextField::Blue), Some("30"));
        assert_eq!(surface.text(TextField::StatusLabel), Some("SEGAR"));
        assert_eq!(surface.text(TextField::Relay), Some("OFF"));
    }
}

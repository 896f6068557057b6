//! The render pass: a pure mapping from one reading onto the surface.
//!
//! Each pass re-renders the full snapshot; nothing is merged or diffed
//! against previous state.

use crate::display::{BarField, DisplaySurface, SwatchField, TextField};
use crate::sensor::{FreshnessStatus, SensorReading};

/// Bar scale for the temperature gauge: 30 °C shows a full bar.
const TEMPERATURE_FULL_SCALE: f64 = 30.0;

/// Placeholder written over value fields when a poll fails.
pub const ERROR_MARKER: &str = "ERR";

/// Label and description shown for a freshness status.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatusPresentation {
    pub label: &'static str,
    pub description: &'static str,
}

/// Total lookup from status to presentation. Not a state machine:
/// every render pass selects independently.
pub fn status_presentation(status: FreshnessStatus) -> StatusPresentation {
    match status {
        FreshnessStatus::Fresh => StatusPresentation {
            label: "SEGAR",
            description: "Daging segar, aman dikonsumsi",
        },
        FreshnessStatus::Semi => StatusPresentation {
            label: "AGRIS",
            description: "Daging mulai tidak segar, segera olah",
        },
        FreshnessStatus::Spoiled => StatusPresentation {
            label: "BUSUK",
            description: "Daging busuk, JANGAN dikonsumsi",
        },
        FreshnessStatus::Unknown => StatusPresentation {
            label: "---",
            description: "Menunggu data...",
        },
    }
}

/// Renders one reading onto the surface.
///
/// Pure apart from the wall-clock stamp on the last-update field:
/// rendering the same reading twice writes identical values everywhere
/// else.
pub fn render_reading(surface: &mut dyn DisplaySurface, reading: &SensorReading) {
    surface.set_text(
        TextField::Temperature,
        &format!("{:.1}", reading.temperature),
    );
    // Full bar at 30 °C and above; no lower clamp.
    surface.set_bar(
        BarField::Temperature,
        (reading.temperature / TEMPERATURE_FULL_SCALE).min(1.0),
    );

    surface.set_text(TextField::Humidity, &format!("{}", reading.humidity));
    surface.set_bar(BarField::Humidity, reading.humidity / 100.0);

    // Gas arrives normalized to [0, 1]; the text shows percent.
    surface.set_text(TextField::Gas, &format!("{:.1}", reading.gas * 100.0));
    surface.set_bar(BarField::Gas, reading.gas);

    let rgb = reading.rgb;
    surface.set_text(TextField::Red, &rgb.r.to_string());
    surface.set_text(TextField::Green, &rgb.g.to_string());
    surface.set_text(TextField::Blue, &rgb.b.to_string());
    surface.set_swatch(SwatchField::Red, (channel(rgb.r), 0, 0));
    surface.set_swatch(SwatchField::Green, (0, channel(rgb.g), 0));
    surface.set_swatch(SwatchField::Blue, (0, 0, channel(rgb.b)));

    let status = status_presentation(reading.status);
    surface.set_text(TextField::StatusLabel, status.label);
    surface.set_text(TextField::StatusDescription, status.description);

    surface.set_text(TextField::Relay, if reading.relay { "ON" } else { "OFF" });

    surface.set_text(
        TextField::LastUpdate,
        &chrono::Local::now().format("%H:%M:%S").to_string(),
    );
}

/// Overwrites the value fields with the error marker and the status
/// pair with a fixed error message. Idempotent.
///
/// Bars, swatches, relay and timestamp keep whatever the previous
/// render wrote.
pub fn render_error(surface: &mut dyn DisplaySurface) {
    for field in [
        TextField::Temperature,
        TextField::Humidity,
        TextField::Gas,
        TextField::Red,
        TextField::Green,
        TextField::Blue,
    ] {
        surface.set_text(field, ERROR_MARKER);
    }

    surface.set_text(TextField::StatusLabel, "ERROR");
    surface.set_text(TextField::StatusDescription, "Gagal mengambil data");
}

fn channel(value: i64) -> u8 {
    value.clamp(0, 255) as u8
}

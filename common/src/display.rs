//! The injected rendering surface the poller writes to.
//!
//! The render pass only ever writes fields; reading them back is the
//! concern of the concrete frontend, or of tests.

use std::collections::BTreeMap;

/// Text-bearing display fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum TextField {
    Temperature,
    Humidity,
    Gas,
    Red,
    Green,
    Blue,
    StatusLabel,
    StatusDescription,
    Relay,
    LastUpdate,
}

/// Proportion bars next to the numeric sensor fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum BarField {
    Temperature,
    Humidity,
    Gas,
}

/// Single-channel color swatches.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum SwatchField {
    Red,
    Green,
    Blue,
}

/// Rendering capability handed to the poller, so the polling logic is
/// testable without a real display.
pub trait DisplaySurface {
    /// Sets a text field.
    fn set_text(&mut self, field: TextField, value: &str);

    /// Sets a proportion bar. `fraction` is stored as given, even
    /// outside [0, 1]; surfaces clamp when they actually draw.
    fn set_bar(&mut self, field: BarField, fraction: f64);

    /// Sets a swatch color.
    fn set_swatch(&mut self, field: SwatchField, color: (u8, u8, u8));
}

/// Map-backed surface. Used directly in tests and as the backing store
/// of the terminal frontend.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MemorySurface {
    texts: BTreeMap<TextField, String>,
    bars: BTreeMap<BarField, f64>,
    swatches: BTreeMap<SwatchField, (u8, u8, u8)>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current value of a text field, if it has been written.
    pub fn text(&self, field: TextField) -> Option<&str> {
        self.texts.get(&field).map(String::as_str)
    }

    pub fn bar(&self, field: BarField) -> Option<f64> {
        self.bars.get(&field).copied()
    }

    pub fn swatch(&self, field: SwatchField) -> Option<(u8, u8, u8)> {
        self.swatches.get(&field).copied()
    }
}

impl DisplaySurface for MemorySurface {
    fn set_text(&mut self, field: TextField, value: &str) {
        self.texts.insert(field, value.to_string());
    }

    fn set_bar(&mut self, field: BarField, fraction: f64) {
        self.bars.insert(field, fraction);
    }

    fn set_swatch(&mut self, field: SwatchField, color: (u8, u8, u8)) {
        self.swatches.insert(field, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unwritten_fields_are_empty() {
        let surface = MemorySurface::new();

        assert_eq!(surface.text(TextField::Temperature), None);
        assert_eq!(surface.bar(BarField::Gas), None);
        assert_eq!(surface.swatch(SwatchField::Red), None);
    }

    #[test]
    fn last_write_wins() {
        let mut surface = MemorySurface::new();

        surface.set_text(TextField::Relay, "ON");
        surface.set_text(TextField::Relay, "OFF");

        assert_eq!(surface.text(TextField::Relay), Some("OFF"));
    }
}

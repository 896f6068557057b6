use serde::{Deserialize, Serialize};

/// An RGB triple as reported by the color sensor.
///
/// Channels are nominally 0-255 but arrive unvalidated. Presentation
/// code clamps them where an actual color has to be produced.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RgbValue {
    pub r: i64,
    pub g: i64,
    pub b: i64,
}

/// The freshness classification reported by the monitor.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FreshnessStatus {
    Fresh,
    Semi,
    Spoiled,
    #[serde(other)]
    #[default]
    Unknown,
}

/// One snapshot of sensor values plus derived status and relay flag.
///
/// This is the wire format served by the monitor firmware at `/data`.
/// A missing or mistyped field fails the whole read, except `status`,
/// where anything unrecognized (including `null`) reads as `Unknown`.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct SensorReading {
    /// Degrees Celsius.
    #[serde(rename = "temp")]
    pub temperature: f64,

    /// Percent, 0-100 expected but not validated.
    #[serde(rename = "hum")]
    pub humidity: f64,

    /// Normalized concentration in [0, 1].
    pub gas: f64,

    pub rgb: RgbValue,

    #[serde(default, deserialize_with = "status_or_unknown")]
    pub status: FreshnessStatus,

    /// Whether the cooling relay is energized.
    pub relay: bool,
}

fn status_or_unknown<'de, D>(deserializer: D) -> Result<FreshnessStatus, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<FreshnessStatus>::deserialize(deserializer)?.unwrap_or_default())
}

pub type SensorControllerPointer = Box<dyn SensorController + Send>;

/// The sensor controller trait that provides the readings.
pub trait SensorController {
    /// Fetches the current reading from the monitor.
    fn current_reading(&self) -> Result<SensorReading, Box<dyn std::error::Error>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOCUMENTED_BODY: &str = r#"{
        "temp": 24.5,
        "hum": 65,
        "gas": 0.12,
        "rgb": {"r": 180, "g": 50, "b": 30},
        "status": "FRESH",
        "relay": false
    }"#;

    #[test]
    fn documented_body_parses() {
        let reading: SensorReading = serde_json::from_str(DOCUMENTED_BODY).unwrap();

        assert_eq!(reading.temperature, 24.5);
        assert_eq!(reading.humidity, 65.0);
        assert_eq!(reading.gas, 0.12);
        assert_eq!(reading.rgb, RgbValue { r: 180, g: 50, b: 30 });
        assert_eq!(reading.status, FreshnessStatus::Fresh);
        assert!(!reading.relay);
    }

    #[test]
    fn status_reads_as_unknown_unless_recognized() {
        for (raw, expected) in [
            (r#""FRESH""#, FreshnessStatus::Fresh),
            (r#""SEMI""#, FreshnessStatus::Semi),
            (r#""SPOILED""#, FreshnessStatus::Spoiled),
            (r#""""#, FreshnessStatus::Unknown),
            (r#""UNKNOWN""#, FreshnessStatus::Unknown),
            ("null", FreshnessStatus::Unknown),
        ] {
            let body = DOCUMENTED_BODY.replace(r#""FRESH""#, raw);
            let reading: SensorReading = serde_json::from_str(&body).unwrap();
            assert_eq!(reading.status, expected, "status {raw}");
        }
    }

    #[test]
    fn missing_field_fails_the_read() {
        let body = DOCUMENTED_BODY.replace(r#""temp": 24.5,"#, "");
        assert!(serde_json::from_str::<SensorReading>(&body).is_err());
    }

    #[test]
    fn rgb_channels_are_not_validated() {
        let body = DOCUMENTED_BODY.replace("180", "999");
        let reading: SensorReading = serde_json::from_str(&body).unwrap();
        assert_eq!(reading.rgb.r, 999);
    }
}

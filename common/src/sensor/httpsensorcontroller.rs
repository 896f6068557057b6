use crate::sensor::sensorcontroller::{SensorController, SensorReading};

/// Live controller polling the monitor firmware over HTTP.
///
/// The monitor serves a single JSON document at `/data`. A non-success
/// status or an unparsable body fails the whole read; the poll boundary
/// decides what to show for it.
pub struct HttpSensorController {
    client: reqwest::Client,
    endpoint: String,
    runtime: tokio::runtime::Runtime,
}

impl HttpSensorController {
    pub fn new(base_url: &str) -> std::io::Result<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;

        Ok(Self {
            client: reqwest::Client::new(),
            endpoint: endpoint_url(base_url),
            runtime,
        })
    }

    async fn fetch(&self) -> Result<SensorReading, reqwest::Error> {
        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await?
            .error_for_status()?;

        let reading = response.json::<SensorReading>().await?;
        log::debug!("Sensor response: {reading:?}");

        Ok(reading)
    }
}

/// The firmware exposes exactly one document, at a fixed relative path.
fn endpoint_url(base_url: &str) -> String {
    format!("{}/data", base_url.trim_end_matches('/'))
}

impl SensorController for HttpSensorController {
    fn current_reading(&self) -> Result<SensorReading, Box<dyn std::error::Error>> {
        // No timeout beyond the transport default, no retries here;
        // the next poll tick is the retry.
        Ok(self.runtime.block_on(self.fetch())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_is_data_under_the_base_url() {
        assert_eq!(endpoint_url("http://192.168.1.100"), "http://192.168.1.100/data");
        assert_eq!(endpoint_url("http://monitor.local/"), "http://monitor.local/data");
    }
}

//! Freshmon: terminal dashboard for an ESP32 meat freshness monitor.
//!
//! Polls the monitor's `/data` endpoint on a fixed interval and renders
//! the readings.
//!
//! ```bash
//! # Poll a monitor on the local network
//! freshmon --url http://192.168.1.100
//!
//! # No monitor yet: render the embedded sample reading instead
//! freshmon --mode demo
//! ```

mod surface;

use std::time::Duration;

use clap::{Parser, ValueEnum};

use freshmon_common::poll::Poller;
use freshmon_common::sensor::{
    DummySensorController, HttpSensorController, SensorControllerPointer,
};
use surface::TerminalSurface;

/// Where the readings come from.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Mode {
    /// Poll the monitor over HTTP.
    Live,
    /// Feed the embedded sample reading, without any network I/O.
    Demo,
}

/// Meat freshness monitor dashboard
#[derive(Parser, Debug)]
#[command(name = "freshmon")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Base URL of the monitor; readings are fetched from <URL>/data
    #[arg(long, default_value = "http://localhost")]
    url: String,

    /// Data source mode
    #[arg(long, value_enum, default_value_t = Mode::Live)]
    mode: Mode,

    /// Poll interval in seconds
    #[arg(long, default_value = "5")]
    interval_secs: u64,

    /// Poll once and exit instead of running the timer loop
    #[arg(long)]
    once: bool,
}

/// Our App struct that holds the terminal surface and the poller.
///
/// It picks the data controller for the requested mode at startup and
/// then drives the fixed-interval poll loop.
struct App {
    surface: TerminalSurface,
    poller: Poller,
    interval: Duration,
}

impl App {
    fn new(args: &Args) -> anyhow::Result<Self> {
        let controller: SensorControllerPointer = match args.mode {
            Mode::Live => Box::new(HttpSensorController::new(&args.url)?),
            Mode::Demo => Box::new(DummySensorController::new()?),
        };

        Ok(Self {
            surface: TerminalSurface::new(),
            poller: Poller::new(controller),
            interval: Duration::from_secs(args.interval_secs),
        })
    }

    /// One poll cycle plus a redraw. Also the manual trigger.
    fn refresh(&mut self) -> anyhow::Result<()> {
        self.poller.poll(&mut self.surface);
        self.surface.draw()?;

        Ok(())
    }

    /// Polls once right away, then on every tick.
    fn run(&mut self) -> anyhow::Result<()> {
        loop {
            self.refresh()?;
            std::thread::sleep(self.interval);
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();
    log::info!("Starting dashboard in {:?} mode", args.mode);

    let mut app = App::new(&args)?;

    if args.once {
        return app.refresh();
    }

    app.run()
}

//! Terminal implementation of the display surface.

use std::io::{self, Write};

use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{Clear, ClearType},
};

use freshmon_common::display::{BarField, DisplaySurface, MemorySurface, SwatchField, TextField};

/// Width of the proportion bars, in cells.
const BAR_WIDTH: usize = 30;

/// Shown for fields nothing has written yet.
const PLACEHOLDER: &str = "---";

/// Keeps the current field values in memory and redraws the whole
/// panel on demand.
#[derive(Default)]
pub struct TerminalSurface {
    fields: MemorySurface,
}

impl DisplaySurface for TerminalSurface {
    fn set_text(&mut self, field: TextField, value: &str) {
        self.fields.set_text(field, value);
    }

    fn set_bar(&mut self, field: BarField, fraction: f64) {
        self.fields.set_bar(field, fraction);
    }

    fn set_swatch(&mut self, field: SwatchField, color: (u8, u8, u8)) {
        self.fields.set_swatch(field, color);
    }
}

impl TerminalSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Redraws the full panel from the current field values.
    pub fn draw(&self) -> io::Result<()> {
        let mut out = io::stdout();
        queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;

        queue!(out, Print("Freshmon - meat freshness monitor\r\n\r\n"))?;

        self.draw_gauge(
            &mut out,
            "Temperature",
            TextField::Temperature,
            BarField::Temperature,
            "C",
        )?;
        self.draw_gauge(&mut out, "Humidity", TextField::Humidity, BarField::Humidity, "%")?;
        self.draw_gauge(&mut out, "Gas", TextField::Gas, BarField::Gas, "%")?;

        queue!(out, Print("\r\nColor       "))?;
        self.draw_swatch(&mut out, "R", TextField::Red, SwatchField::Red)?;
        self.draw_swatch(&mut out, "G", TextField::Green, SwatchField::Green)?;
        self.draw_swatch(&mut out, "B", TextField::Blue, SwatchField::Blue)?;
        queue!(out, Print("\r\n\r\n"))?;

        let label = self.text_or_placeholder(TextField::StatusLabel);
        let description = self.text_or_placeholder(TextField::StatusDescription);
        queue!(out, Print(format!("Status      {label}  {description}\r\n")))?;

        let relay = self.text_or_placeholder(TextField::Relay);
        queue!(out, Print(format!("Relay       {relay}\r\n")))?;

        let stamp = self.text_or_placeholder(TextField::LastUpdate);
        queue!(out, Print(format!("\r\nLast update {stamp}\r\n")))?;

        out.flush()
    }

    fn text_or_placeholder(&self, field: TextField) -> &str {
        self.fields.text(field).unwrap_or(PLACEHOLDER)
    }

    fn draw_gauge(
        &self,
        out: &mut impl Write,
        name: &str,
        text: TextField,
        bar: BarField,
        unit: &str,
    ) -> io::Result<()> {
        let value = self.text_or_placeholder(text);
        let gauge = bar_glyphs(self.fields.bar(bar), BAR_WIDTH);

        queue!(out, Print(format!("{name:<12}{value:>6} {unit:<2}[{gauge}]\r\n")))
    }

    fn draw_swatch(
        &self,
        out: &mut impl Write,
        name: &str,
        text: TextField,
        swatch: SwatchField,
    ) -> io::Result<()> {
        let value = self.text_or_placeholder(text);
        let (r, g, b) = self.fields.swatch(swatch).unwrap_or((0, 0, 0));

        queue!(
            out,
            Print(format!("{name} {value:>4} ")),
            SetForegroundColor(Color::Rgb { r, g, b }),
            Print("██"),
            ResetColor,
            Print("   "),
        )
    }
}

/// Fills `width` cells according to `fraction`, clamped to [0, 1] here
/// because out-of-range fractions come straight from unvalidated
/// sensor data.
fn bar_glyphs(fraction: Option<f64>, width: usize) -> String {
    let Some(fraction) = fraction else {
        return " ".repeat(width);
    };

    let filled = (fraction.clamp(0.0, 1.0) * width as f64).round() as usize;
    let mut bar = "█".repeat(filled);
    bar.push_str(&"░".repeat(width - filled));
    bar
}

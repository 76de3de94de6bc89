//! Output rendering and formatting

use console::{Style, Term};
use ghverify_config::constants::SEPARATOR_WIDTH;
use ghverify_types::{ColorChoice, FailureReason, VerificationReport};
use std::io;

/// Output renderer for the final report
#[derive(Clone)]
pub struct OutputRenderer {
    /// Use JSON output format
    json_output: bool,
    /// Color configuration
    color_choice: ColorChoice,
    /// Terminal instance
    term: Term,
}

impl OutputRenderer {
    /// Create new output renderer
    pub fn new(json_output: bool, color_choice: ColorChoice) -> Self {
        Self {
            json_output,
            color_choice,
            term: Term::stdout(),
        }
    }

    /// Render the report of a finished run
    pub fn render_report(&self, report: &VerificationReport) -> io::Result<()> {
        if self.json_output {
            let json = serde_json::to_string_pretty(report).map_err(io::Error::other)?;
            println!("{json}");
            return Ok(());
        }
        println!("{}", self.format_report(report));
        Ok(())
    }

    /// Human-readable closing block
    pub fn format_report(&self, report: &VerificationReport) -> String {
        let separator = "=".repeat(SEPARATOR_WIDTH);
        match report.verdict.failure() {
            None => {
                let headline = self.paint(
                    "✅ Verification passed: file content matches",
                    &Style::new().green().bold(),
                );
                format!("\n{separator}\n{headline}\n{separator}")
            }
            Some(reason) => {
                let headline = self.paint(
                    &format!("❌ Verification failed for {}", report.target),
                    &Style::new().red().bold(),
                );
                format!("\n{headline}\n{}", self.format_reason(reason))
            }
        }
    }

    fn format_reason(&self, reason: &FailureReason) -> String {
        match reason {
            FailureReason::Mismatch { expected, actual } => {
                let label = Style::new().bold();
                format!(
                    "   {} {expected}\n   {} {actual}",
                    self.paint("Expected:", &label),
                    self.paint("Actual:  ", &label)
                )
            }
            other => format!("   {other}"),
        }
    }

    fn paint(&self, text: &str, style: &Style) -> String {
        if self.supports_color() {
            style.apply_to(text).to_string()
        } else {
            text.to_string()
        }
    }

    /// Check if color output is supported
    pub fn supports_color(&self) -> bool {
        match self.color_choice {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => self.term.features().colors_supported(),
        }
    }
}

//! Event handling and progress display

use console::Style;
use ghverify_config::constants::{SEPARATOR_WIDTH, SHA_DISPLAY_CHARS};
use ghverify_events::{AppEvent, EventMessage, GeneralEvent, VerifyEvent};
use ghverify_net::truncate_chars;

use crate::logging::log_event_with_tracing;

/// Event handler for progress lines
pub struct EventHandler {
    colors_enabled: bool,
    /// JSON mode keeps the terminal free for the report
    quiet: bool,
}

impl EventHandler {
    /// Create new event handler
    pub fn new(colors_enabled: bool, quiet: bool) -> Self {
        Self {
            colors_enabled,
            quiet,
        }
    }

    /// Handle incoming event
    pub fn handle_event(&mut self, message: &EventMessage) {
        log_event_with_tracing(message);
        if self.quiet {
            return;
        }
        if let Some(line) = self.format_event(&message.event) {
            println!("{line}");
        }
    }

    /// Progress line for an event, if it has one
    pub fn format_event(&self, event: &AppEvent) -> Option<String> {
        match event {
            AppEvent::General(GeneralEvent::DebugLog { .. }) => None,
            AppEvent::Verify(event) => self.format_verify_event(event),
        }
    }

    fn format_verify_event(&self, event: &VerifyEvent) -> Option<String> {
        match event {
            VerifyEvent::InputLoaded { kind, path } => Some(format!("📌 Loaded {kind}: {path}")),
            VerifyEvent::TargetResolved {
                organization,
                repository,
                branch,
                path,
            } => {
                let separator = "=".repeat(SEPARATOR_WIDTH);
                let target = self.paint(
                    &format!("{organization}/{repository}@{branch}"),
                    &Style::new().bold(),
                );
                Some(format!(
                    "{separator}\n📋 Verifying {path} in {target}\n{separator}"
                ))
            }
            VerifyEvent::StepStarted { step } => {
                Some(format!("\n{}. {}...", step.number(), step.label()))
            }
            VerifyEvent::FileFetched { chars, sha } => {
                let line = match sha {
                    Some(sha) => format!(
                        "✅ Fetched file ({chars} characters, blob {})",
                        truncate_chars(sha, SHA_DISPLAY_CHARS)
                    ),
                    None => format!("✅ Fetched file ({chars} characters)"),
                };
                Some(self.paint(&line, &Style::new().green()))
            }
            VerifyEvent::FetchFailed { message, .. } => {
                Some(self.paint(&format!("❌ {message}"), &Style::new().red()))
            }
            VerifyEvent::ContentMatched { expected } => Some(self.paint(
                &format!("✅ Content matches the expected value: {expected}"),
                &Style::new().green(),
            )),
            VerifyEvent::ContentMismatch { .. } => Some(self.paint(
                "❌ Content does not match the expected value",
                &Style::new().red(),
            )),
            // The final report covers completion.
            VerifyEvent::Completed { .. } => None,
        }
    }

    fn paint(&self, text: &str, style: &Style) -> String {
        if self.colors_enabled {
            style.apply_to(text).to_string()
        } else {
            text.to_string()
        }
    }
}

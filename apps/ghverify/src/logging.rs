//! Tracing setup and structured logging of events

use ghverify_events::{AppEvent, EventMessage, GeneralEvent, VerifyEvent};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

/// Initialize tracing/logging
///
/// `RUST_LOG` always wins. Otherwise logs go to stderr at `warn`, or
/// `debug` for ghverify crates with `--debug`. In JSON mode logs stay off
/// unless debugging, and then they are JSON lines on stderr so stdout keeps
/// only the report.
pub fn init_tracing(json_mode: bool, debug_enabled: bool) {
    let default_filter = if debug_enabled {
        "warn,ghverify=debug,ghverify_net=debug,ghverify_verify=debug,ghverify_config=debug"
    } else {
        "warn"
    };
    let filter =
        || EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    if json_mode {
        if debug_enabled {
            tracing_subscriber::fmt()
                .json()
                .with_writer(std::io::stderr)
                .with_env_filter(filter())
                .init();
        } else {
            tracing_subscriber::fmt()
                .with_writer(std::io::sink)
                .with_env_filter("off")
                .init();
        }
    } else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(filter())
            .init();
    }
}

/// Log an event through tracing with structured fields
pub fn log_event_with_tracing(message: &EventMessage) {
    let meta = &message.meta;
    let source = meta.source.as_str();
    match &message.event {
        AppEvent::General(GeneralEvent::DebugLog { message, context }) => {
            debug!(source, event_id = %meta.event_id, context = ?context, "{message}");
        }
        AppEvent::Verify(event) => log_verify_event(source, event),
    }
}

fn log_verify_event(source: &str, event: &VerifyEvent) {
    match event {
        VerifyEvent::InputLoaded { kind, path } => {
            debug!(source, kind = %kind, path = %path, "input loaded");
        }
        VerifyEvent::TargetResolved {
            organization,
            repository,
            branch,
            path,
        } => {
            info!(source, organization = %organization, repository = %repository, branch = %branch, path = %path, "verification target");
        }
        VerifyEvent::StepStarted { step } => {
            debug!(source, step = step.number(), label = step.label(), "step started");
        }
        VerifyEvent::FileFetched { chars, sha } => {
            info!(source, chars, sha = ?sha, "file fetched");
        }
        VerifyEvent::FetchFailed { kind, message } => {
            warn!(source, kind = ?kind, message = %message, "fetch failed");
        }
        VerifyEvent::ContentMatched { .. } => {
            info!(source, "content matched");
        }
        VerifyEvent::ContentMismatch { expected, actual } => {
            warn!(
                source,
                expected_chars = expected.chars().count(),
                actual_chars = actual.chars().count(),
                "content mismatch"
            );
        }
        VerifyEvent::Completed {
            passed,
            duration_ms,
        } => {
            info!(source, passed, duration_ms, "verification completed");
        }
    }
}

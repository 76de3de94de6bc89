//! ghverify - check that one file in a GitHub repository holds the expected
//! text
//!
//! Loads the credential and the expectation, fetches the file once through
//! the contents API, compares it after trimming whitespace, and exits `0` on
//! a match or `1` otherwise.

mod cli;
mod display;
mod error;
mod events;
mod logging;

use crate::cli::{Cli, InputArgs};
use crate::display::OutputRenderer;
use crate::error::CliError;
use crate::events::EventHandler;
use crate::logging::init_tracing;
use clap::Parser;
use ghverify_config::{ApiPolicy, InputPaths, Inputs};
use ghverify_events::{EventEmitter, EventReceiver, EventSender, VerifyEvent};
use ghverify_net::ContentsClient;
use ghverify_types::VerificationReport;
use std::process;
use tokio::select;
use tracing::{debug, info};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Parse command line arguments first to check for JSON mode
    let cli = Cli::parse();
    let json_mode = cli.global.json;

    init_tracing(json_mode, cli.global.debug);

    let result = run(cli).await;
    if let Err(e) = &result {
        debug!(error = %e, "run aborted");
        // JSON consumers read stdout only.
        if json_mode {
            println!("{}", error_output(e, true));
        } else {
            eprintln!("{}", error_output(e, false));
        }
    }
    process::exit(exit_code(&result));
}

/// How a setup failure is reported: a JSON object or an `Error:` line
fn error_output(e: &CliError, json_mode: bool) -> String {
    if json_mode {
        e.to_json().to_string()
    } else {
        format!("Error: {e}")
    }
}

/// `0` only for a passing verdict
fn exit_code(result: &Result<VerificationReport, CliError>) -> i32 {
    match result {
        Ok(report) => report.verdict.exit_code(),
        Err(_) => 1,
    }
}

/// Main application logic
async fn run(cli: Cli) -> Result<VerificationReport, CliError> {
    info!("Starting ghverify v{}", env!("CARGO_PKG_VERSION"));

    let renderer = OutputRenderer::new(cli.global.json, cli.global.color.unwrap_or_default());
    let mut event_handler = EventHandler::new(renderer.supports_color(), cli.global.json);

    let (event_sender, event_receiver) = ghverify_events::channel();
    let report = execute_with_events(&cli.inputs, event_sender, event_receiver, &mut event_handler)
        .await?;

    renderer.render_report(&report)?;
    info!(passed = report.passed(), "Run completed");
    Ok(report)
}

/// Run the verification while draining its events
async fn execute_with_events(
    inputs: &InputArgs,
    event_sender: EventSender,
    mut event_receiver: EventReceiver,
    event_handler: &mut EventHandler,
) -> Result<VerificationReport, CliError> {
    let mut run_future = Box::pin(execute(inputs, event_sender));

    loop {
        select! {
            result = &mut run_future => {
                // Drain any remaining events
                while let Ok(message) = event_receiver.try_recv() {
                    event_handler.handle_event(&message);
                }
                return result;
            }

            message = event_receiver.recv() => {
                if let Some(message) = message {
                    event_handler.handle_event(&message);
                }
            }
        }
    }
}

/// Load both inputs, then verify. Nothing touches the network until both
/// files are loaded.
async fn execute(inputs: &InputArgs, tx: EventSender) -> Result<VerificationReport, CliError> {
    let paths = InputPaths::resolve(inputs.env_file.as_deref(), inputs.config.as_deref());

    let Inputs {
        credential,
        expectation,
    } = Inputs::load(&paths).await.map_err(CliError::Config)?;
    tx.emit_verify(VerifyEvent::InputLoaded {
        kind: "environment".to_string(),
        path: paths.env_file.display().to_string(),
    });
    tx.emit_verify(VerifyEvent::InputLoaded {
        kind: "configuration".to_string(),
        path: paths.config_file.display().to_string(),
    });

    let policy = match &inputs.api_url {
        Some(url) => ApiPolicy::default().with_base_url(url.as_str()),
        None => ApiPolicy::default(),
    };
    let client = ContentsClient::new(policy).map_err(CliError::Setup)?;

    Ok(ghverify_verify::run_verification(&client, &credential, &expectation, &tx).await)
}

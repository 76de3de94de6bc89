//! Verification run: fetch, then compare
//!
//! ```text
//! Start -> Fetching -> FetchFailed ----------------> Done(Fail)
//!                   \-> Fetched -> compare -> Done(Pass | Fail)
//! ```
//!
//! Exactly one terminal verdict per run. Events are emitted along the way
//! but the verdict never depends on them.

use ghverify_events::{EventEmitter, FetchFailureKind, VerifyEvent, VerifyStep};
use ghverify_net::{fetch_file_contents, ContentFetcher};
use ghverify_types::{
    Credential, Expectation, FailureReason, FetchResult, Verdict, VerificationReport,
};
use std::time::Instant;
use tracing::{info, warn};

use crate::compare::compare;

/// File content that made it past the fetch step
struct Fetched {
    content: String,
    sha: Option<String>,
}

/// Split a fetch outcome into content or the reason the run fails.
fn into_fetched(
    result: FetchResult,
    expectation: &Expectation,
) -> Result<Fetched, (FetchFailureKind, FailureReason)> {
    match result {
        FetchResult::Found { content, sha } => Ok(Fetched { content, sha }),
        FetchResult::NotFound => Err((
            FetchFailureKind::NotFound,
            FailureReason::NotFound {
                path: expectation.path.clone(),
                branch: expectation.branch.clone(),
            },
        )),
        FetchResult::ApiError {
            status,
            body_snippet,
        } => Err((
            FetchFailureKind::Api,
            FailureReason::Api {
                status,
                body_snippet,
            },
        )),
        FetchResult::TransportError { message } => Err((
            FetchFailureKind::Transport,
            FailureReason::Transport { message },
        )),
    }
}

/// Run one verification against `fetcher`.
///
/// Never fails: every outcome ends up in the returned report's verdict.
pub async fn run_verification<F, E>(
    fetcher: &F,
    credential: &Credential,
    expectation: &Expectation,
    tx: &E,
) -> VerificationReport
where
    F: ContentFetcher + ?Sized,
    E: EventEmitter + ?Sized,
{
    let started = Instant::now();
    let organization = credential.organization();
    let target = expectation.display_target(organization);

    tx.emit_verify(VerifyEvent::TargetResolved {
        organization: organization.to_string(),
        repository: expectation.repository.clone(),
        branch: expectation.branch.clone(),
        path: expectation.path.clone(),
    });

    tx.emit_verify(VerifyEvent::StepStarted {
        step: VerifyStep::Fetch,
    });
    let result = fetch_file_contents(
        fetcher,
        &expectation.path,
        credential,
        organization,
        &expectation.repository,
        &expectation.branch,
        tx,
    )
    .await;

    let (verdict, content_chars, sha) = match into_fetched(result, expectation) {
        Err((kind, reason)) => {
            warn!(%target, reason = %reason, "fetch failed");
            tx.emit_verify(VerifyEvent::FetchFailed {
                kind,
                message: reason.to_string(),
            });
            (Verdict::fail(reason), None, None)
        }
        Ok(Fetched { content, sha }) => {
            let chars = content.chars().count();
            tx.emit_verify(VerifyEvent::FileFetched {
                chars,
                sha: sha.clone(),
            });

            tx.emit_verify(VerifyEvent::StepStarted {
                step: VerifyStep::Compare,
            });
            let comparison = compare(&content, &expectation.expected_content);
            if comparison.matched {
                tx.emit_verify(VerifyEvent::ContentMatched {
                    expected: comparison.expected.clone(),
                });
            } else {
                tx.emit_verify(VerifyEvent::ContentMismatch {
                    expected: comparison.expected.clone(),
                    actual: comparison.actual.clone(),
                });
            }
            (comparison.into_verdict(), Some(chars), sha)
        }
    };

    let duration_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
    info!(%target, passed = verdict.is_pass(), duration_ms, "verification finished");
    tx.emit_verify(VerifyEvent::Completed {
        passed: verdict.is_pass(),
        duration_ms,
    });

    VerificationReport {
        target,
        verdict,
        content_chars,
        sha,
        duration_ms,
    }
}

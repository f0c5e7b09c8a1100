//! # Quote Fetcher
//!
//! Runs one fetch sequence: a bounded number of attempts, each guarded by
//! its own timeout, separated by exponential backoff.
//!
//! ```text
//! Idle ──trigger──▶ Loading ──ok──────────────────▶ Success
//!                     │
//!                     └─err──▶ Retrying ──sleep──▶ Loading
//!                     │
//!                     └─err (last attempt)──────▶ Failed
//! ```
//!
//! The fetcher never touches UI types. Every visible change goes through a
//! `QuoteSurface`, so the same sequence drives the terminal (via a channel)
//! and the tests (via a recording surface).

use std::sync::Arc;
use std::time::Duration;

use log::{info, warn};

use super::retry::RetryPolicy;
use super::source::{QuoteError, QuoteSource};
use super::types::Quote;

pub const LOADING_TEXT: &str = "Loading inspiration...";
pub const LOADING_AUTHOR: &str = "— ...";
pub const FALLBACK_TEXT: &str = "API Connection Failed.\nDisplaying a static quote.";
pub const FALLBACK_AUTHOR: &str = "— System Fallback";
pub const FAILURE_TITLE: &str = "Connection Error";
pub const FAILURE_MESSAGE: &str = "Could not fetch a live quote after multiple attempts due to \
    a network failure or timeout. Displaying a static fallback quote instead.";

/// Where a fetch sequence currently stands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FetchState {
    #[default]
    Idle,
    /// Attempt `attempt` (0-based) is in flight.
    Loading { attempt: u32 },
    /// Waiting `delay` before attempt `attempt`.
    Retrying { attempt: u32, delay: Duration },
    Success,
    Failed,
}

impl FetchState {
    pub fn is_busy(&self) -> bool {
        matches!(self, FetchState::Loading { .. } | FetchState::Retrying { .. })
    }
}

/// The display regions a fetch sequence writes to.
pub trait QuoteSurface: Send {
    fn set_fetch_state(&mut self, state: FetchState);
    fn set_trigger_enabled(&mut self, enabled: bool);
    fn set_quote_text(&mut self, text: &str);
    fn set_author(&mut self, author: &str);
    fn show_notification(&mut self, title: &str, message: &str);
}

/// A single `QuoteSurface` call as a value, for surfaces that forward
/// writes elsewhere (a channel, a log of calls).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceUpdate {
    FetchState(FetchState),
    TriggerEnabled(bool),
    QuoteText(String),
    Author(String),
    Notification { title: String, message: String },
}

impl SurfaceUpdate {
    /// Replays this update onto a concrete surface.
    pub fn apply_to<S: QuoteSurface + ?Sized>(self, surface: &mut S) {
        match self {
            SurfaceUpdate::FetchState(state) => surface.set_fetch_state(state),
            SurfaceUpdate::TriggerEnabled(enabled) => surface.set_trigger_enabled(enabled),
            SurfaceUpdate::QuoteText(text) => surface.set_quote_text(&text),
            SurfaceUpdate::Author(author) => surface.set_author(&author),
            SurfaceUpdate::Notification { title, message } => {
                surface.show_notification(&title, &message)
            }
        }
    }
}

/// How a sequence ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    Success { quote: Quote, attempts: u32 },
    Failed { attempts: u32, last_error: QuoteError },
}

impl FetchOutcome {
    pub fn attempts(&self) -> u32 {
        match self {
            FetchOutcome::Success { attempts, .. } | FetchOutcome::Failed { attempts, .. } => {
                *attempts
            }
        }
    }
}

/// One try within a sequence. The timer and the request future both live
/// inside `run`, so neither outlives the attempt.
#[derive(Debug, Clone, Copy)]
pub struct FetchAttempt {
    pub index: u32,
    pub deadline: Duration,
}

impl FetchAttempt {
    pub fn new(index: u32, deadline: Duration) -> Self {
        Self { index, deadline }
    }

    /// Dropping the request future on timeout is what cancels it.
    pub async fn run(&self, source: &dyn QuoteSource) -> Result<Quote, QuoteError> {
        match tokio::time::timeout(self.deadline, source.fetch_quote()).await {
            Ok(result) => result,
            Err(_) => Err(QuoteError::Timeout(self.deadline)),
        }
    }
}

#[derive(Clone)]
pub struct QuoteFetcher {
    source: Arc<dyn QuoteSource>,
    policy: RetryPolicy,
}

impl QuoteFetcher {
    pub fn new(source: Arc<dyn QuoteSource>, policy: RetryPolicy) -> Self {
        Self { source, policy }
    }

    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    /// Runs a full sequence against `surface`, returning how it ended.
    ///
    /// The trigger is disabled for the whole sequence and re-enabled as the
    /// last write on both the success and failure paths.
    pub async fn run<S: QuoteSurface + ?Sized>(&self, surface: &mut S) -> FetchOutcome {
        surface.set_trigger_enabled(false);
        surface.set_quote_text(LOADING_TEXT);
        surface.set_author(LOADING_AUTHOR);

        let total = self.policy.attempts();
        let mut attempt = 0;

        loop {
            surface.set_fetch_state(FetchState::Loading { attempt });
            let result = FetchAttempt::new(attempt, self.policy.attempt_timeout)
                .run(self.source.as_ref())
                .await;

            match result {
                Ok(quote) => {
                    info!(
                        "Quote fetched from {} on attempt {}/{}",
                        self.source.name(),
                        attempt + 1,
                        total
                    );
                    surface.set_quote_text(&quote.display_text());
                    surface.set_author(&quote.display_author());
                    surface.set_fetch_state(FetchState::Success);
                    surface.set_trigger_enabled(true);
                    return FetchOutcome::Success {
                        quote,
                        attempts: attempt + 1,
                    };
                }
                Err(err) => {
                    warn!(
                        "Attempt {}/{}: failed to fetch quote [{}]: {}",
                        attempt + 1,
                        total,
                        err.kind(),
                        err
                    );

                    if self.policy.is_last_attempt(attempt) {
                        info!("Giving up after {} attempts, showing fallback", attempt + 1);
                        surface.set_quote_text(FALLBACK_TEXT);
                        surface.set_author(FALLBACK_AUTHOR);
                        surface.set_fetch_state(FetchState::Failed);
                        surface.show_notification(FAILURE_TITLE, FAILURE_MESSAGE);
                        surface.set_trigger_enabled(true);
                        return FetchOutcome::Failed {
                            attempts: attempt + 1,
                            last_error: err,
                        };
                    }

                    attempt += 1;
                    let delay = self.policy.delay_before(attempt).unwrap_or_default();
                    surface.set_fetch_state(FetchState::Retrying { attempt, delay });
                    tokio::time::sleep(delay).await;
                }
            }
        }
    }
}

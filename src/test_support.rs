//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::oneshot;

use crate::core::board::QuoteBoard;
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::quote::{
    FetchState, Quote, QuoteError, QuoteSource, QuoteSurface, RetryPolicy, SurfaceUpdate,
};

/// A source that replays canned results, then fails with a network error.
pub struct ScriptedSource {
    responses: Mutex<VecDeque<Result<Quote, QuoteError>>>,
    calls: AtomicU32,
}

impl ScriptedSource {
    pub fn new(responses: Vec<Result<Quote, QuoteError>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            calls: AtomicU32::new(0),
        }
    }

    pub fn calls(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl QuoteSource for ScriptedSource {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn fetch_quote(&self) -> Result<Quote, QuoteError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let next = self.responses.lock().unwrap().pop_front();
        next.unwrap_or_else(|| Err(QuoteError::Network("script exhausted".to_string())))
    }
}

/// A source whose requests never complete.
pub struct PendingSource;

#[async_trait]
impl QuoteSource for PendingSource {
    fn name(&self) -> &str {
        "pending"
    }

    async fn fetch_quote(&self) -> Result<Quote, QuoteError> {
        std::future::pending().await
    }
}

/// A source that answers once the paired sender fires.
pub struct GatedSource {
    gate: Mutex<Option<oneshot::Receiver<()>>>,
    quote: Quote,
}

impl GatedSource {
    pub fn new(quote: Quote) -> (oneshot::Sender<()>, Self) {
        let (tx, rx) = oneshot::channel();
        let source = Self {
            gate: Mutex::new(Some(rx)),
            quote,
        };
        (tx, source)
    }
}

#[async_trait]
impl QuoteSource for GatedSource {
    fn name(&self) -> &str {
        "gated"
    }

    async fn fetch_quote(&self) -> Result<Quote, QuoteError> {
        let gate = self.gate.lock().unwrap().take();
        match gate {
            Some(rx) => {
                rx.await
                    .map_err(|_| QuoteError::Network("gate dropped".to_string()))?;
                Ok(self.quote.clone())
            }
            None => Err(QuoteError::Network("gate already used".to_string())),
        }
    }
}

/// Records every surface write in order.
#[derive(Default)]
pub struct RecordingSurface {
    pub updates: Vec<SurfaceUpdate>,
}

impl QuoteSurface for RecordingSurface {
    fn set_fetch_state(&mut self, state: FetchState) {
        self.updates.push(SurfaceUpdate::FetchState(state));
    }

    fn set_trigger_enabled(&mut self, enabled: bool) {
        self.updates.push(SurfaceUpdate::TriggerEnabled(enabled));
    }

    fn set_quote_text(&mut self, text: &str) {
        self.updates.push(SurfaceUpdate::QuoteText(text.to_string()));
    }

    fn set_author(&mut self, author: &str) {
        self.updates.push(SurfaceUpdate::Author(author.to_string()));
    }

    fn show_notification(&mut self, title: &str, message: &str) {
        self.updates.push(SurfaceUpdate::Notification {
            title: title.to_string(),
            message: message.to_string(),
        });
    }
}

/// A board that can be inspected while a fetch holds a handle to it.
#[derive(Clone, Default)]
pub struct SharedBoard(Arc<Mutex<QuoteBoard>>);

impl SharedBoard {
    pub fn snapshot(&self) -> QuoteBoard {
        self.0.lock().unwrap().clone()
    }
}

impl QuoteSurface for SharedBoard {
    fn set_fetch_state(&mut self, state: FetchState) {
        self.0.lock().unwrap().set_fetch_state(state);
    }

    fn set_trigger_enabled(&mut self, enabled: bool) {
        self.0.lock().unwrap().set_trigger_enabled(enabled);
    }

    fn set_quote_text(&mut self, text: &str) {
        self.0.lock().unwrap().set_quote_text(text);
    }

    fn set_author(&mut self, author: &str) {
        self.0.lock().unwrap().set_author(author);
    }

    fn show_notification(&mut self, title: &str, message: &str) {
        self.0.lock().unwrap().show_notification(title, message);
    }
}

/// Default attempts and doubling, but with millisecond delays.
pub fn fast_policy() -> RetryPolicy {
    RetryPolicy {
        max_attempts: 3,
        attempt_timeout: Duration::from_secs(1),
        base_delay: Duration::from_millis(5),
        max_delay: Duration::from_millis(50),
    }
}

/// Creates a test App from the built-in defaults.
pub fn test_app() -> App {
    App::new(&ResolvedConfig::default())
}

//! Bridges a background fetch to the event loop.
//!
//! The fetch task owns a `ChannelSurface`; every write becomes an
//! `Action::QuoteUpdate` that the loop applies to `App::board` in order.

use log::warn;
use std::sync::mpsc;

use crate::core::action::Action;
use crate::quote::{FetchState, QuoteSurface, SurfaceUpdate};

pub struct ChannelSurface {
    tx: mpsc::Sender<Action>,
}

impl ChannelSurface {
    pub fn new(tx: mpsc::Sender<Action>) -> Self {
        Self { tx }
    }

    fn send(&self, update: SurfaceUpdate) {
        if self.tx.send(Action::QuoteUpdate(update)).is_err() {
            warn!("Failed to forward quote update: receiver dropped");
        }
    }
}

impl QuoteSurface for ChannelSurface {
    fn set_fetch_state(&mut self, state: FetchState) {
        self.send(SurfaceUpdate::FetchState(state));
    }

    fn set_trigger_enabled(&mut self, enabled: bool) {
        self.send(SurfaceUpdate::TriggerEnabled(enabled));
    }

    fn set_quote_text(&mut self, text: &str) {
        self.send(SurfaceUpdate::QuoteText(text.to_string()));
    }

    fn set_author(&mut self, author: &str) {
        self.send(SurfaceUpdate::Author(author.to_string()));
    }

    fn show_notification(&mut self, title: &str, message: &str) {
        self.send(SurfaceUpdate::Notification {
            title: title.to_string(),
            message: message.to_string(),
        });
    }
}

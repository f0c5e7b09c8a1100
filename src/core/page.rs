//! # Page Model
//!
//! In-memory stand-in for the page the router manipulates: per-view
//! visibility, per-link active flags, the hub's addressable sections, a
//! pending scroll request and the page-level mode indicator.
//!
//! The TUI renders from this; the router only ever sees it through
//! `PageSurface`.

use serde::{Deserialize, Serialize};

use crate::core::router::PageSurface;

/// An addressable block of hub content.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Section {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub body: String,
}

impl Section {
    pub fn new(id: &str, title: &str, body: &str) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            body: body.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
struct ViewSlot {
    id: String,
    hidden: bool,
}

#[derive(Debug, Clone)]
pub struct Page {
    views: Vec<ViewSlot>,
    link_active: Vec<bool>,
    sections: Vec<Section>,
    scroll_request: Option<String>,
    mode: Option<String>,
}

impl Page {
    /// All views start hidden and no link is active until the router runs.
    pub fn new(view_ids: &[String], link_count: usize, sections: Vec<Section>) -> Self {
        Self {
            views: view_ids
                .iter()
                .map(|id| ViewSlot {
                    id: id.clone(),
                    hidden: true,
                })
                .collect(),
            link_active: vec![false; link_count],
            sections,
            scroll_request: None,
            mode: None,
        }
    }

    pub fn is_visible(&self, view: &str) -> bool {
        self.views.iter().any(|v| v.id == view && !v.hidden)
    }

    pub fn visible_views(&self) -> Vec<&str> {
        self.views
            .iter()
            .filter(|v| !v.hidden)
            .map(|v| v.id.as_str())
            .collect()
    }

    pub fn is_link_active(&self, index: usize) -> bool {
        self.link_active.get(index).copied().unwrap_or(false)
    }

    pub fn active_links(&self) -> Vec<usize> {
        self.link_active
            .iter()
            .enumerate()
            .filter_map(|(i, active)| active.then_some(i))
            .collect()
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// The current mode indicator, i.e. the id of the active top-level view.
    pub fn mode(&self) -> Option<&str> {
        self.mode.as_deref()
    }

    pub fn scroll_request(&self) -> Option<&str> {
        self.scroll_request.as_deref()
    }

    /// Hands the pending scroll request to the renderer, clearing it.
    pub fn take_scroll_request(&mut self) -> Option<String> {
        self.scroll_request.take()
    }
}

impl PageSurface for Page {
    fn set_view_hidden(&mut self, view: &str, hidden: bool) {
        if let Some(slot) = self.views.iter_mut().find(|v| v.id == view) {
            slot.hidden = hidden;
        }
    }

    fn set_link_active(&mut self, index: usize, active: bool) {
        if let Some(flag) = self.link_active.get_mut(index) {
            *flag = active;
        }
    }

    fn scroll_to_section(&mut self, section: &str) -> bool {
        if self.sections.iter().any(|s| s.id == section) {
            self.scroll_request = Some(section.to_string());
            true
        } else {
            false
        }
    }

    fn set_mode(&mut self, view: &str) {
        self.mode = Some(view.to_string());
    }
}

//! # View Router
//!
//! Keeps exactly one top-level view visible and the nav links' active
//! indicators in step with the current section.
//!
//! The router owns its page handle (`PageSurface`) rather than looking
//! elements up by name, so it runs unchanged against the TUI's `Page` or a
//! test double.

use log::debug;
use serde::{Deserialize, Serialize};

pub const DEFAULT_HUB_VIEW: &str = "hub-view";
pub const DEFAULT_APP_VIEW: &str = "app-view";
pub const DEFAULT_SECTION: &str = "home";

/// A navigation control and the routing data it carries.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct NavLink {
    pub label: String,
    pub view: String,
    pub section: String,
}

impl NavLink {
    pub fn new(label: &str, view: &str, section: &str) -> Self {
        Self {
            label: label.to_string(),
            view: view.to_string(),
            section: section.to_string(),
        }
    }
}

/// Page operations the router needs. Unknown ids must be ignored.
pub trait PageSurface {
    fn set_view_hidden(&mut self, view: &str, hidden: bool);
    fn set_link_active(&mut self, index: usize, active: bool);
    /// Returns false when no such section exists.
    fn scroll_to_section(&mut self, section: &str) -> bool;
    fn set_mode(&mut self, view: &str);
}

pub struct ViewRouter<P: PageSurface> {
    views: Vec<String>,
    hub_view: String,
    links: Vec<NavLink>,
    page: P,
    active_view: Option<String>,
    active_section: Option<String>,
}

impl<P: PageSurface> ViewRouter<P> {
    pub fn new(views: Vec<String>, hub_view: impl Into<String>, links: Vec<NavLink>, page: P) -> Self {
        Self {
            views,
            hub_view: hub_view.into(),
            links,
            page,
            active_view: None,
            active_section: None,
        }
    }

    /// Establishes the starting state from the first link, or the hub's
    /// home section when there are no links.
    pub fn init(&mut self) {
        let (view, section) = self.initial_target();
        debug!("Router init: view={}, section={}", view, section);
        self.switch_view(&view, Some(&section));
    }

    pub fn initial_target(&self) -> (String, String) {
        match self.links.first() {
            Some(link) => (link.view.clone(), link.section.clone()),
            None => (self.hub_view.clone(), DEFAULT_SECTION.to_string()),
        }
    }

    /// Shows `target_view`, hides the rest, and marks the links pointing
    /// at `target_section` as active. Scrolls only within the hub view.
    ///
    /// An unknown view id leaves the page untouched and returns false.
    pub fn switch_view(&mut self, target_view: &str, target_section: Option<&str>) -> bool {
        if !self.is_known(target_view) {
            debug!("Ignoring switch to unknown view '{}'", target_view);
            return false;
        }

        for view in &self.views {
            self.page.set_view_hidden(view, true);
        }
        self.page.set_view_hidden(target_view, false);

        for (index, link) in self.links.iter().enumerate() {
            self.page.set_link_active(index, false);
            if Some(link.section.as_str()) == target_section {
                self.page.set_link_active(index, true);
            }
        }

        if let Some(section) = target_section {
            if target_view == self.hub_view && !self.page.scroll_to_section(section) {
                debug!("No section '{}' to scroll to", section);
            }
        }

        self.page.set_mode(target_view);
        self.active_view = Some(target_view.to_string());
        self.active_section = target_section.map(str::to_string);
        true
    }

    /// Routes using the data carried by link `index`, read at activation time.
    pub fn activate_link(&mut self, index: usize) -> bool {
        let Some(link) = self.links.get(index) else {
            debug!("No nav link at index {}", index);
            return false;
        };
        let (view, section) = (link.view.clone(), link.section.clone());
        self.switch_view(&view, Some(&section))
    }

    pub fn is_known(&self, view: &str) -> bool {
        self.views.iter().any(|v| v == view)
    }

    pub fn links(&self) -> &[NavLink] {
        &self.links
    }

    pub fn hub_view(&self) -> &str {
        &self.hub_view
    }

    pub fn active_view(&self) -> Option<&str> {
        self.active_view.as_deref()
    }

    pub fn active_section(&self) -> Option<&str> {
        self.active_section.as_deref()
    }

    pub fn is_hub_active(&self) -> bool {
        self.active_view.as_deref() == Some(self.hub_view.as_str())
    }

    pub fn page(&self) -> &P {
        &self.page
    }

    pub fn page_mut(&mut self) -> &mut P {
        &mut self.page
    }
}

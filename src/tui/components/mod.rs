//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! Components in this directory follow two patterns:
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Simple display components that receive all data as parameters:
//! - `StatusBar`: Bottom line with the mode indicator and status
//! - `AppView`: The quote panel
//! - `NoticeOverlay`: The modal connection-error box
//!
//! ### Stateful Components
//!
//! - `NavBar`: Tab strip; `NavBarState` tracks keyboard focus and emits
//!   activation events
//! - `HubView`: Sections in a scroll view; the scroll offset lives in `TuiState`
//!
//! ### Props-Based Data Flow
//!
//! Components receive external data as "props", not by reaching into
//! global state. This makes dependencies explicit and components testable.
//!
//! ```rust,ignore
//! // Good: Dependencies are explicit
//! AppView::new(&app.board, spinner_frame).render(frame, area);
//!
//! // Bad: Hidden dependency on global state
//! AppView::render(frame, area); // reads from global App
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs          (this file)
//! ├── nav_bar.rs      (Tab strip + focus handling + hit testing)
//! ├── hub_view.rs     (Scrollable hub sections)
//! ├── app_view.rs     (Quote panel)
//! ├── notice.rs       (Modal notification)
//! └── status_bar.rs   (Bottom status line)
//! ```

pub mod app_view;
pub mod hub_view;
pub mod nav_bar;
pub mod notice;
mod status_bar;

pub use app_view::AppView;
pub use hub_view::HubView;
pub use nav_bar::{NavBar, NavBarState, NavEvent};
pub use notice::NoticeOverlay;
pub use status_bar::StatusBar;

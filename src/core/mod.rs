//! # Core Application Logic
//!
//! This module contains Beacon's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • App (state)          │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • ViewRouter           │
//!                    │                         │
//!                    │  No terminal I/O.       │
//!                    └───────────┬─────────────┘
//!                                │
//!                  ┌─────────────┴─────────────┐
//!                  ▼                           ▼
//!           ┌────────────┐              ┌────────────┐
//!           │    TUI     │              │   quote    │
//!           │  Adapter   │              │  fetcher   │
//!           │ (ratatui)  │              │ (reqwest)  │
//!           └────────────┘              └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct — all application state in one place
//! - [`action`]: The `Action` enum and `update()` reducer
//! - [`router`]: View switching and nav link highlighting
//! - [`page`]: The page model the router writes to
//! - [`board`]: The quote panel's display regions
//! - [`config`]: Layered configuration

pub mod action;
pub mod board;
pub mod config;
pub mod page;
pub mod router;
pub mod state;

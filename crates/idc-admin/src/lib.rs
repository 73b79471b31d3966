//! IDC-Admin: Dallas IDC server console
//!
//! A TUI that lists the servers of an account on the Dallas IDC
//! server-management API and offers per-server actions.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  main: parse flags ─▶ fetch servers once ─▶ event loop          │
//! ├──────────────┬──────────────────┬───────────────┬───────────────┤
//! │  api         │  domain          │  actions      │  ui           │
//! │  ApiClient   │  Server, App,    │  restart via  │  table, menu, │
//! │  ServerApi   │  View machine    │  ServerApi    │  modals       │
//! └──────────────┴──────────────────┴───────────────┴───────────────┘
//! ```
//!
//! The snapshot fetched at startup is never refreshed. All network calls are
//! awaited inline on the UI loop, one at a time.

pub mod actions;
pub mod api;
pub mod config;
pub mod domain;
pub mod logging;
pub mod terminal;
pub mod ui;

pub use api::{ApiClient, ApiError, ServerApi};
pub use domain::{App, Credentials, MenuItem, Server, TableLayout, View};

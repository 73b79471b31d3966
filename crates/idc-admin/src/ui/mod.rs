//! UI module - TUI rendering components.
//!
//! The UI follows a component-based architecture:
//! - `layout.rs`: Main layout orchestration and overlay dispatch
//! - `server_table.rs`: The server list
//! - `menu.rs`: Per-server action menu
//! - `details.rs`: Server detail panel
//! - `widgets/`: Reusable UI components

mod details;
mod layout;
mod menu;
mod server_table;

pub mod widgets;

pub use details::detail_lines;
pub use layout::render;
pub use server_table::{headers, row_cells};

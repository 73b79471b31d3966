//! Reusable widgets.

mod modal;

pub use modal::{centered_rect, render_confirm, render_message};

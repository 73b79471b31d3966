//! View state machine.
//!
//! ```text
//! ServerList ──Enter──▶ ServerMenu ──▶ ServerDetails ──Esc──▶ ServerMenu
//!                           │
//!                           ├──▶ ConfirmRestart ──Yes──▶ Restarting ──▶ Message ──▶ ServerMenu
//!                           │          └──No/Esc──▶ ServerMenu
//!                           ├──▶ Message (power off/on) ──▶ ServerMenu
//!                           └──Back/Esc──▶ ServerList
//! ```
//!
//! Every secondary view carries the index of the server it was opened for, so
//! none of them can exist without the list entry that spawned it.

use clap::ValueEnum;

/// Column set used by the server table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum TableLayout {
    /// ID, facility, management IP, hostname, status, CPU, RAM, storage, OS.
    #[default]
    Full,
    /// ID, package name, public IP.
    Compact,
}

/// Entries of the per-server action menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    ViewDetails,
    RestartServer,
    PowerOffServer,
    PowerOnServer,
    Back,
}

impl MenuItem {
    /// Menu entries in display order.
    pub const ALL: [MenuItem; 5] = [
        MenuItem::ViewDetails,
        MenuItem::RestartServer,
        MenuItem::PowerOffServer,
        MenuItem::PowerOnServer,
        MenuItem::Back,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MenuItem::ViewDetails => "View Details",
            MenuItem::RestartServer => "Restart Server",
            MenuItem::PowerOffServer => "Power Off Server",
            MenuItem::PowerOnServer => "Power On Server",
            MenuItem::Back => "Back",
        }
    }
}

/// The single active view.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum View {
    /// Server table, the root view.
    #[default]
    ServerList,
    /// Action menu for one server.
    ServerMenu { server: usize },
    /// Read-only detail panel.
    ServerDetails { server: usize },
    /// Yes/no prompt before a restart; `confirm` is the highlighted answer.
    ConfirmRestart { server: usize, confirm: bool },
    /// Restart request in flight.
    Restarting { server: usize },
    /// Result or placeholder text.
    Message {
        server: usize,
        title: String,
        text: String,
    },
}

impl View {
    /// Server the view was opened for, `None` for the list.
    pub fn server(&self) -> Option<usize> {
        match self {
            View::ServerList => None,
            View::ServerMenu { server }
            | View::ServerDetails { server }
            | View::ConfirmRestart { server, .. }
            | View::Restarting { server }
            | View::Message { server, .. } => Some(*server),
        }
    }

    /// View that Esc returns to.
    pub fn parent(&self) -> View {
        match self {
            View::ServerList | View::ServerMenu { .. } => View::ServerList,
            View::ServerDetails { server }
            | View::ConfirmRestart { server, .. }
            | View::Restarting { server }
            | View::Message { server, .. } => View::ServerMenu { server: *server },
        }
    }
}

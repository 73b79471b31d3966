//! Application state management.

use chrono::{DateTime, Utc};
use crossterm::event::KeyCode;
use tracing::info;

use super::{MenuItem, Server, TableLayout, View};
use crate::actions;

/// Main application model.
///
/// Owns the server snapshot taken at startup; nothing refreshes it afterwards.
pub struct App {
    /// Servers in API order.
    pub servers: Vec<Server>,
    /// Table column set.
    pub layout: TableLayout,
    /// Selected data row (the header is not a row).
    pub selected: usize,
    /// Highlighted entry of the server menu.
    pub menu_selected: usize,
    /// Current view.
    pub view: View,
    /// When the snapshot was fetched.
    pub fetched_at: DateTime<Utc>,
    should_quit: bool,
}

impl App {
    /// Create a new application instance over a fetched server list.
    pub fn new(servers: Vec<Server>, layout: TableLayout) -> Self {
        Self {
            servers,
            layout,
            selected: 0,
            menu_selected: 0,
            view: View::ServerList,
            fetched_at: Utc::now(),
            should_quit: false,
        }
    }

    /// Handle keyboard input for the active view.
    pub fn handle_key(&mut self, key: KeyCode) {
        match self.view.clone() {
            View::ServerList => self.handle_list_key(key),
            View::ServerMenu { server } => self.handle_menu_key(server, key),
            View::ServerDetails { .. } | View::Message { .. } => {
                if matches!(key, KeyCode::Esc | KeyCode::Enter | KeyCode::Backspace) {
                    self.view = self.view.parent();
                }
            }
            View::ConfirmRestart { server, confirm } => {
                self.handle_confirm_key(server, confirm, key)
            }
            // Input is ignored while the request is in flight.
            View::Restarting { .. } => {}
        }
    }

    fn handle_list_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Up | KeyCode::Char('k') => self.select_prev(),
            KeyCode::Down | KeyCode::Char('j') => self.select_next(),
            KeyCode::Home => self.selected = 0,
            KeyCode::End => self.selected = self.servers.len().saturating_sub(1),
            KeyCode::Enter => {
                if self.selected < self.servers.len() {
                    self.menu_selected = 0;
                    self.view = View::ServerMenu {
                        server: self.selected,
                    };
                }
            }
            _ => {}
        }
    }

    fn handle_menu_key(&mut self, server: usize, key: KeyCode) {
        let len = MenuItem::ALL.len();
        match key {
            KeyCode::Up | KeyCode::Char('k') => {
                self.menu_selected = if self.menu_selected == 0 {
                    len - 1
                } else {
                    self.menu_selected - 1
                };
            }
            KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => {
                self.menu_selected = (self.menu_selected + 1) % len;
            }
            KeyCode::Enter => self.activate(server, MenuItem::ALL[self.menu_selected]),
            KeyCode::Esc | KeyCode::Backspace => self.view = View::ServerList,
            _ => {}
        }
    }

    fn handle_confirm_key(&mut self, server: usize, confirm: bool, key: KeyCode) {
        match key {
            KeyCode::Left
            | KeyCode::Right
            | KeyCode::Tab
            | KeyCode::Char('h')
            | KeyCode::Char('l') => {
                self.view = View::ConfirmRestart {
                    server,
                    confirm: !confirm,
                };
            }
            KeyCode::Char('y') | KeyCode::Char('Y') => self.view = View::Restarting { server },
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                self.view = View::ServerMenu { server }
            }
            KeyCode::Enter if confirm => self.view = View::Restarting { server },
            KeyCode::Enter => self.view = View::ServerMenu { server },
            _ => {}
        }
    }

    /// Run a menu entry for `server`.
    fn activate(&mut self, server: usize, item: MenuItem) {
        match item {
            MenuItem::ViewDetails => self.view = View::ServerDetails { server },
            MenuItem::RestartServer => {
                self.view = View::ConfirmRestart {
                    server,
                    confirm: false,
                }
            }
            MenuItem::PowerOffServer | MenuItem::PowerOnServer => {
                let Some(target) = self.servers.get(server) else {
                    return;
                };
                info!(server_id = %target.server_id, action = item.label(), "stub action selected");
                self.view = View::Message {
                    server,
                    title: item.label().to_string(),
                    text: actions::not_implemented_message(item, target),
                };
            }
            MenuItem::Back => self.view = View::ServerList,
        }
    }

    /// Move selection up.
    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Move selection down.
    pub fn select_next(&mut self) {
        if self.selected + 1 < self.servers.len() {
            self.selected += 1;
        }
    }

    /// Server the active secondary view belongs to.
    pub fn view_server(&self) -> Option<&Server> {
        self.view.server().and_then(|idx| self.servers.get(idx))
    }

    /// Server whose restart has been confirmed but not yet sent.
    pub fn pending_restart(&self) -> Option<&Server> {
        match self.view {
            View::Restarting { server } => self.servers.get(server),
            _ => None,
        }
    }

    /// Leave `Restarting` with the outcome text.
    pub fn complete_restart(&mut self, text: String) {
        if let View::Restarting { server } = self.view {
            self.view = View::Message {
                server,
                title: MenuItem::RestartServer.label().to_string(),
                text,
            };
        }
    }

    /// Check if the app should quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}

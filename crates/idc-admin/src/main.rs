//! IDC-Admin: Dallas IDC server console
//!
//! ## Usage
//!
//! ```bash
//! idc-admin --username ops --password secret
//!
//! # Reduced columns, custom endpoint, debug log
//! idc-admin --username ops --password secret --layout compact \
//!     --endpoint http://127.0.0.1:8080/v1/server \
//!     --log-file idc-admin.log --log-level idc_admin=debug
//! ```

use std::io;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, LeaveAlternateScreen},
};
use ratatui::{backend::Backend, Terminal};
use tracing::{error, info};

use idc_admin::actions;
use idc_admin::api::{ApiClient, ServerApi};
use idc_admin::config::{self, Args};
use idc_admin::domain::App;
use idc_admin::logging;
use idc_admin::terminal;
use idc_admin::ui;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Args::parse();

    let credentials = match config::credentials_or_usage(&args) {
        Ok(credentials) => credentials,
        Err(message) => {
            eprintln!("{}", message);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = logging::init(&args.log_level, args.log_file.as_deref()) {
        eprintln!("Warning: logging disabled: {:#}", e);
    }

    info!(endpoint = %args.endpoint, layout = ?args.layout, "starting idc-admin");

    let client = match ApiClient::new(args.endpoint.clone(), credentials) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Error creating API client: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let servers = match client.list_servers().await {
        Ok(servers) => servers,
        Err(e) => {
            error!(error = %e, "initial server fetch failed");
            eprintln!("Error fetching servers: {}", e);
            return ExitCode::FAILURE;
        }
    };
    info!(count = servers.len(), "fetched servers");

    let mut app = App::new(servers, args.layout);

    match run(&mut app, &client).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "terminal session failed");
            eprintln!("Error running application: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Own the terminal for the session and restore it afterwards.
async fn run(app: &mut App, api: &ApiClient) -> Result<()> {
    // Setup terminal with panic hook for cleanup
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(info);
    }));

    let mut terminal = terminal::setup()?;

    let result = run_app(&mut terminal, app, api).await;

    terminal::restore(&mut terminal)?;

    result
}

/// Main application loop.
async fn run_app<B: Backend, A: ServerApi>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    api: &A,
) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        // A confirmed restart runs right after its "Restarting" frame is on
        // screen; the loop is blocked until the API answers.
        if app.pending_restart().is_some() {
            actions::run_pending(app, api).await;
            continue;
        }

        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                // Only handle key press events (not release)
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key.code);
                }
            }
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}

//! Terminal session setup and teardown.

use std::io::{self, Stdout};

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use tracing::warn;

/// Enter raw mode and the alternate screen on stdout.
///
/// Raw mode is switched off again when the terminal cannot be built.
pub fn setup() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    setup_with(
        enable_raw_mode,
        || {
            let mut stdout = io::stdout();
            execute!(stdout, EnterAlternateScreen)?;
            Terminal::new(CrosstermBackend::new(stdout))
        },
        || {
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            disable_raw_mode()
        },
    )
}

/// Leave the alternate screen and raw mode.
pub fn restore<B: Backend + io::Write>(terminal: &mut Terminal<B>) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()
}

/// Run `enable` then `build`; if `build` fails, `disable` runs before the
/// error is returned.
pub fn setup_with<B, E, F, D>(enable: E, build: F, disable: D) -> io::Result<Terminal<B>>
where
    B: Backend,
    E: FnOnce() -> io::Result<()>,
    F: FnOnce() -> io::Result<Terminal<B>>,
    D: FnOnce() -> io::Result<()>,
{
    enable()?;
    match build() {
        Ok(terminal) => Ok(terminal),
        Err(e) => {
            if let Err(undo) = disable() {
                warn!(error = %undo, "failed to leave raw mode");
            }
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use ratatui::backend::TestBackend;

    use super::*;

    #[test]
    fn test_setup_keeps_raw_mode_on_success() {
        let disabled = Cell::new(0);
        let terminal = setup_with(
            || Ok(()),
            || Terminal::new(TestBackend::new(20, 5)),
            || {
                disabled.set(disabled.get() + 1);
                Ok(())
            },
        );
        assert!(terminal.is_ok());
        assert_eq!(disabled.get(), 0);
    }

    #[test]
    fn test_setup_undoes_raw_mode_when_build_fails() {
        let disabled = Cell::new(0);
        let result = setup_with::<TestBackend, _, _, _>(
            || Ok(()),
            || Err(io::Error::new(io::ErrorKind::Other, "no tty")),
            || {
                disabled.set(disabled.get() + 1);
                Ok(())
            },
        );
        let err = result.err().unwrap();
        assert_eq!(err.to_string(), "no tty");
        assert_eq!(disabled.get(), 1);
    }

    #[test]
    fn test_setup_returns_build_error_even_if_undo_fails() {
        let result = setup_with::<TestBackend, _, _, _>(
            || Ok(()),
            || Err(io::Error::new(io::ErrorKind::Other, "no tty")),
            || Err(io::Error::new(io::ErrorKind::Other, "stuck")),
        );
        assert_eq!(result.err().unwrap().to_string(), "no tty");
    }

    #[test]
    fn test_setup_stops_when_enable_fails() {
        let built = Cell::new(false);
        let disabled = Cell::new(false);
        let result = setup_with(
            || Err(io::Error::new(io::ErrorKind::Other, "not a terminal")),
            || {
                built.set(true);
                Terminal::new(TestBackend::new(20, 5))
            },
            || {
                disabled.set(true);
                Ok(())
            },
        );
        assert!(result.is_err());
        assert!(!built.get());
        assert!(!disabled.get());
    }
}

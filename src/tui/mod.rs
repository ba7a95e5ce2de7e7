//! Terminal front end: two mirrored boards around one game.

mod app;
mod input;
mod layout;
mod ui;

pub use app::App;
pub use input::{Action, Step, action_for_key, move_cursor};
pub use layout::{Hit, SeatLayout, TableLayout, seat_layout, table_layout};
pub use ui::{cell_borders, draw};

use std::io::{self, Stdout};
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{error, info, instrument};

use crate::config::TableConfig;
use crate::table::Table;
use crate::theme::palette;

/// Runs the table until a player quits.
///
/// `colorfgbg` is the terminal's background hint used by the `auto` theme.
#[instrument(skip(config))]
pub fn run_tui(config: &TableConfig, colorfgbg: Option<&str>) -> Result<()> {
    let theme = config.theme().resolve(colorfgbg);
    info!(?theme, mirror_top = *config.mirror_top(), "Starting table");

    let app = App::new(Table::new(*config.mirror_top()), palette(theme));

    let mut terminal = setup_terminal()?;

    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(e) = &res {
        error!(error = %e, "Table loop failed");
    }
    info!("Table closed");
    res
}

type Term = Terminal<CrosstermBackend<Stdout>>;

/// Enters raw mode and the alternate screen, undoing raw mode if the rest fails.
fn setup_terminal() -> Result<Term> {
    enable_raw_mode()?;
    enter_or_restore(
        || {
            let mut stdout = io::stdout();
            execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
            Terminal::new(CrosstermBackend::new(stdout))
        },
        || {
            let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
            let _ = disable_raw_mode();
        },
    )
}

/// Runs `enter`, calling `restore` before returning its error.
fn enter_or_restore<T>(
    enter: impl FnOnce() -> io::Result<T>,
    restore: impl FnOnce(),
) -> Result<T> {
    enter().map_err(|e| {
        error!(error = %e, "Terminal setup failed");
        restore();
        anyhow::Error::from(e)
    })
}

fn run_app(terminal: &mut Term, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| {
            app.set_area(f.area());
            draw(f, &app);
        })?;

        if app.should_quit() {
            return Ok(());
        }

        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) => app.handle_key(key),
                Event::Mouse(mouse) => app.handle_mouse(mouse),
                _ => {}
            }
        }
    }
}

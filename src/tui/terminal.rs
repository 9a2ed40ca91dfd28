use crate::event::Event;
use crate::tui::App;
use anyhow::{Context, Result};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, EventStream},
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::Duration;

type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Restores the terminal when dropped, including on early return or panic unwinding
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
    }
}

fn setup() -> Result<(Tui, TerminalGuard)> {
    terminal::enable_raw_mode().context("Failed to enable raw mode")?;
    let guard = TerminalGuard;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;

    let terminal =
        Terminal::new(CrosstermBackend::new(stdout)).context("Failed to create terminal")?;
    Ok((terminal, guard))
}

/// Run the app until the user quits
pub async fn run(mut app: App, tick_rate: Duration) -> Result<()> {
    let (mut terminal, _guard) = setup()?;
    let mut events = EventStream::new();
    let mut ticker = tokio::time::interval(tick_rate);

    tracing::info!(tick_ms = tick_rate.as_millis() as u64, "tui started");

    while !app.should_quit() {
        terminal.draw(|frame| app.render(frame))?;

        let event = tokio::select! {
            _ = ticker.tick() => Some(Event::Tick),
            maybe = events.next() => match maybe {
                Some(Ok(raw)) => Event::from_terminal(raw),
                Some(Err(e)) => return Err(e).context("Failed to read terminal event"),
                None => Some(Event::Quit),
            },
        };

        if let Some(event) = event {
            app.handle_event(event)?;
        }
    }

    tracing::info!("tui exiting");
    Ok(())
}

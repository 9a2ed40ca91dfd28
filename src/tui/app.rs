use crate::event::{Event, EventResult};
use crate::tui::{QueryInput, ResultList};
use crate::view::{SearchState, SearchView};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

/// Main application state
pub struct App {
    /// The search view driving requests and rendering
    view: SearchView,
    /// Query input box
    pub input: QueryInput,
    /// Rendered hit list with selection
    results: ResultList,
    /// Whether the application should quit
    should_quit: bool,
}

impl App {
    /// Create an application around a mounted view; the input is seeded with its query
    pub fn new(view: SearchView) -> Self {
        let input = QueryInput::with_text(view.query());
        Self {
            view,
            input,
            results: ResultList::new(),
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn view(&self) -> &SearchView {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut SearchView {
        &mut self.view
    }

    /// Handle an event
    pub fn handle_event(&mut self, event: Event) -> EventResult<()> {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            Event::Tick => {
                self.on_tick();
                Ok(())
            }
            Event::Quit => {
                self.should_quit = true;
                Ok(())
            }
            Event::Resize(..) => Ok(()),
        }
    }

    /// Apply any responses that arrived since the last tick
    pub fn on_tick(&mut self) {
        if self.view.poll() {
            self.results.reset(self.view.items().len());
        }
    }

    fn handle_mouse(&mut self, mouse: crossterm::event::MouseEvent) -> EventResult<()> {
        use crossterm::event::MouseEventKind;

        let count = self.view.items().len();
        match mouse.kind {
            MouseEventKind::ScrollUp => self.results.select_previous(count),
            MouseEventKind::ScrollDown => self.results.select_next(count),
            _ => {}
        }
        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent) -> EventResult<()> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let count = self.view.items().len();

        match key.code {
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('o') if ctrl => self.open_selected(),
            KeyCode::Enter => self.submit_query(),
            KeyCode::Up => self.results.select_previous(count),
            KeyCode::Down => self.results.select_next(count),
            _ => self.input.handle_key(key),
        }
        Ok(())
    }

    /// Push the input text into the view; a new request only goes out if it changed
    fn submit_query(&mut self) {
        let query = self.input.text().to_string();
        if self.view.set_query(query) {
            self.results.reset(0);
        }
    }

    fn open_selected(&self) {
        let Some(item) = self.results.selected().and_then(|i| self.view.items().get(i)) else {
            return;
        };
        if item.url.is_empty() {
            return;
        }

        tracing::debug!(url = %item.url, "opening link");
        if let Err(e) = open::that_detached(&item.url) {
            tracing::warn!(url = %item.url, error = %e, "failed to open link");
        }
    }

    /// Render the application UI
    pub fn render(&mut self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Query input
                Constraint::Min(3),    // Results
                Constraint::Length(3), // Status bar
            ])
            .split(frame.area());

        self.input.render(frame, chunks[0]);
        self.render_results(frame, chunks[1]);
        self.render_status(frame, chunks[2]);
    }

    fn render_results(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title("Results")
            .border_style(Style::default().fg(Color::White));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let elements = self.view.elements();
        self.results.render(frame, inner, &elements);
    }

    fn render_status(&self, frame: &mut Frame, area: Rect) {
        let status = match self.view.state() {
            SearchState::Loading => "Searching...",
            SearchState::Loaded(_) => "Ready",
            SearchState::Error(_) => "Error",
        };

        let status_text = vec![Line::from(vec![
            Span::styled("Status: ", Style::default().fg(Color::Yellow)),
            Span::raw(status),
            Span::raw(" | "),
            Span::styled("Hits: ", Style::default().fg(Color::Cyan)),
            Span::raw(self.view.items().len().to_string()),
            Span::raw(" | "),
            Span::styled("↑↓", Style::default().fg(Color::Cyan)),
            Span::raw(" select  "),
            Span::styled("Ctrl+O", Style::default().fg(Color::Cyan)),
            Span::raw(" open"),
        ])];

        let paragraph = Paragraph::new(status_text).block(
            Block::default()
                .borders(Borders::ALL)
                .title("Status")
                .border_style(Style::default().fg(Color::White)),
        );

        frame.render_widget(paragraph, area);
    }
}

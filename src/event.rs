use crossterm::event::{KeyEvent, MouseEvent};

/// Events that can occur in the application
#[derive(Debug, Clone)]
pub enum Event {
    /// Terminal key press event
    Key(KeyEvent),
    /// Terminal mouse event
    Mouse(MouseEvent),
    /// Terminal resize event
    Resize(u16, u16),
    /// Periodic tick; pending search responses are applied here
    Tick,
    /// Request to quit the application
    Quit,
}

impl Event {
    /// Map a raw crossterm event; `None` for events the app ignores
    pub fn from_terminal(event: crossterm::event::Event) -> Option<Self> {
        use crossterm::event::{Event as TermEvent, KeyEventKind};

        match event {
            TermEvent::Key(key) if key.kind == KeyEventKind::Press => Some(Event::Key(key)),
            TermEvent::Mouse(mouse) => Some(Event::Mouse(mouse)),
            TermEvent::Resize(w, h) => Some(Event::Resize(w, h)),
            _ => None,
        }
    }
}

/// Result type for event handling
pub type EventResult<T> = anyhow::Result<T>;

use crossterm::event::KeyEvent;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders},
    Frame,
};
use tui_textarea::TextArea;

/// Single-line query box wrapping tui-textarea
pub struct QueryInput {
    textarea: TextArea<'static>,
}

impl QueryInput {
    pub fn new() -> Self {
        Self {
            textarea: styled_textarea(TextArea::default()),
        }
    }

    /// Create an input pre-filled with `text`
    pub fn with_text(text: &str) -> Self {
        let mut textarea = styled_textarea(TextArea::new(vec![text.to_string()]));
        textarea.move_cursor(tui_textarea::CursorMove::End);
        Self { textarea }
    }

    /// Forward a key to the text area
    pub fn handle_key(&mut self, key: KeyEvent) {
        self.textarea.input(key);
    }

    /// Current contents; the box stays single-line so this is the first line
    pub fn text(&self) -> &str {
        self.textarea.lines().first().map(String::as_str).unwrap_or("")
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        frame.render_widget(&self.textarea, area);
    }
}

impl Default for QueryInput {
    fn default() -> Self {
        Self::new()
    }
}

fn styled_textarea(mut textarea: TextArea<'static>) -> TextArea<'static> {
    textarea.set_block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(Span::styled(
                " Search Hacker News (Enter=search │ Esc=quit) ",
                Style::default()
                    .fg(Color::LightBlue)
                    .add_modifier(Modifier::BOLD),
            ))
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    textarea.set_cursor_line_style(Style::default());
    textarea
}

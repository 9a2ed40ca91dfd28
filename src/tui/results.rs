use crate::view::Element;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};
use textwrap::wrap;

/// Renders search view elements and tracks the selected link
pub struct ResultList {
    state: ListState,
}

impl ResultList {
    pub fn new() -> Self {
        Self {
            state: ListState::default(),
        }
    }

    /// Index of the selected link, if any
    pub fn selected(&self) -> Option<usize> {
        self.state.selected()
    }

    /// Reset selection to the first link (or none) after new results arrive
    pub fn reset(&mut self, link_count: usize) {
        self.state = ListState::default();
        if link_count > 0 {
            self.state.select(Some(0));
        }
    }

    pub fn select_next(&mut self, link_count: usize) {
        if link_count == 0 {
            return;
        }
        let next = self.state.selected().map_or(0, |i| (i + 1).min(link_count - 1));
        self.state.select(Some(next));
    }

    pub fn select_previous(&mut self, link_count: usize) {
        if link_count == 0 {
            return;
        }
        let prev = self.state.selected().map_or(0, |i| i.saturating_sub(1));
        self.state.select(Some(prev));
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, elements: &[Element]) {
        let links: Vec<&Element> = elements.iter().filter(|el| el.is_link()).collect();

        if links.is_empty() {
            let paragraph = match elements.first() {
                Some(Element::Placeholder { text, .. }) => {
                    Paragraph::new(text.as_str()).style(Style::default().fg(Color::Yellow))
                }
                Some(Element::Error { text, .. }) => {
                    Paragraph::new(text.as_str()).style(Style::default().fg(Color::LightRed))
                }
                _ => Paragraph::new("No results.").style(Style::default().fg(Color::DarkGray)),
            };
            frame.render_widget(paragraph.wrap(Wrap { trim: false }), area);
            return;
        }

        let width = area.width.saturating_sub(4).max(10) as usize;
        let items: Vec<ListItem> = links
            .iter()
            .map(|link| link_item(link.text(), link.href().unwrap_or(""), width))
            .collect();

        let list = List::new(items)
            .highlight_style(Style::default().bg(Color::DarkGray))
            .highlight_symbol("▶ ");

        frame.render_stateful_widget(list, area, &mut self.state);
    }
}

impl Default for ResultList {
    fn default() -> Self {
        Self::new()
    }
}

fn link_item(title: &str, href: &str, width: usize) -> ListItem<'static> {
    let title_style = Style::default()
        .fg(Color::LightGreen)
        .add_modifier(Modifier::BOLD);

    let mut lines: Vec<Line> = if title.is_empty() {
        vec![Line::from(Span::styled("(untitled)", title_style))]
    } else {
        wrap(title, width)
            .into_iter()
            .map(|line| Line::from(Span::styled(line.into_owned(), title_style)))
            .collect()
    };

    lines.push(Line::from(Span::styled(
        format!("  {href}"),
        Style::default()
            .fg(Color::Gray)
            .add_modifier(Modifier::UNDERLINED),
    )));
    lines.push(Line::default());

    ListItem::new(Text::from(lines))
}

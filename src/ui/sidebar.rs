use crate::app::Screen;
use crate::constants::APP_TITLE;
use crate::theme::ThemeContext;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

pub fn draw_sidebar(f: &mut Frame<'_>, area: Rect, current: Screen, theme: &ThemeContext) {
    let palette = theme.palette();

    let block = Block::default()
        .borders(Borders::RIGHT)
        .border_style(palette.border_style())
        .style(palette.panel());
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([Constraint::Length(3), Constraint::Min(1)])
        .split(inner);

    let brand = Paragraph::new(vec![
        Line::from(Span::styled(
            format!("🧠 {}", APP_TITLE),
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled("startup advisor", palette.subtle())),
    ]);
    f.render_widget(brand, chunks[0]);

    let items: Vec<ListItem> = Screen::NAV
        .iter()
        .enumerate()
        .map(|(i, screen)| {
            ListItem::new(format!("{} {} {}", i + 1, screen.icon(), screen.title()))
                .style(Style::default().fg(palette.text))
        })
        .collect();

    let list = List::new(items)
        .highlight_style(palette.highlight())
        .highlight_symbol("➤ ");

    let mut state = ListState::default();
    state.select(Screen::NAV.iter().position(|s| *s == current));
    f.render_stateful_widget(list, chunks[1], &mut state);
}

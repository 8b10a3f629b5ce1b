use crate::theme::ThemeContext;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

pub fn draw_quit_confirm(f: &mut Frame<'_>, area: Rect, theme: &ThemeContext) {
    let palette = theme.palette();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.danger))
        .title(" Confirm Quit ")
        .style(palette.panel());

    let quit_text = vec![
        Line::from(""),
        Line::from(Span::styled(
            "🚪 Are you sure you want to quit?",
            Style::default()
                .fg(palette.text)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press 'y' to confirm quit or 'n' to cancel.",
            palette.subtle(),
        )),
    ];

    let paragraph = Paragraph::new(quit_text)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    f.render_widget(Clear, area);
    f.render_widget(paragraph, area);
}

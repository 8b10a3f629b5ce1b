use crate::auth::AuthContext;
use crate::theme::{Theme, ThemeContext};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Top bar: page title on the left, theme/logout hints and the signed-in
/// user on the right.
pub fn draw_navbar(
    f: &mut Frame<'_>,
    area: Rect,
    page_title: &str,
    theme: &ThemeContext,
    auth: &AuthContext,
) {
    let palette = theme.palette();

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(palette.border_style())
        .style(palette.base());
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(inner);

    let title = Paragraph::new(page_title)
        .style(palette.title())
        .alignment(Alignment::Left);
    f.render_widget(title, chunks[0]);

    let theme_icon = match theme.theme().toggled() {
        Theme::Light => "☀ light",
        Theme::Dark => "☾ dark",
    };
    let user = auth
        .session()
        .map(|s| s.identifier.as_str())
        .unwrap_or("guest");

    let right = Line::from(vec![
        Span::styled("[t] ", palette.subtle()),
        Span::styled(theme_icon, Style::default().fg(palette.text)),
        Span::raw("  "),
        Span::styled("[l] ", palette.subtle()),
        Span::styled("log out", Style::default().fg(palette.text)),
        Span::raw("  "),
        Span::styled(
            format!(" 👤 {} ", user),
            palette.highlight().add_modifier(Modifier::BOLD),
        ),
    ]);
    f.render_widget(Paragraph::new(right).alignment(Alignment::Right), chunks[1]);
}

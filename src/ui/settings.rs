use crate::app::SettingsItem;
use crate::theme::ThemeContext;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

pub fn draw_settings(f: &mut Frame<'_>, area: Rect, selected: usize, theme: &ThemeContext) {
    let palette = theme.palette();
    let selected = SettingsItem::ALL[selected % SettingsItem::ALL.len()];

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([Constraint::Length(3), Constraint::Min(1)])
        .split(area);

    f.render_widget(
        Paragraph::new(vec![
            Line::from(Span::styled("Settings", palette.title())),
            Line::from(Span::styled("Manage your account and preferences", palette.subtle())),
        ]),
        rows[0],
    );

    let mut lines = Vec::new();
    let mut section = "";
    for item in SettingsItem::ALL {
        if item.section() != section {
            if !section.is_empty() {
                lines.push(Line::from(""));
            }
            section = item.section();
            lines.push(Line::from(Span::styled(
                section.to_uppercase(),
                palette.subtle().add_modifier(Modifier::BOLD),
            )));
        }

        let is_selected = item == selected;
        let marker = if is_selected { "➤ " } else { "  " };
        let label_style = match item {
            SettingsItem::LogOut => Style::default().fg(palette.danger),
            _ if is_selected => palette.title().fg(palette.accent),
            _ => Style::default().fg(palette.text),
        };

        let mut spans = vec![
            Span::styled(marker, palette.accent_text()),
            Span::styled(format!("{:<18}", item.label()), label_style),
            Span::styled(item.description(), palette.subtle()),
        ];
        if item == SettingsItem::DarkMode {
            let (label, style) = if theme.is_dark() {
                (" ON ", palette.highlight())
            } else {
                (" OFF ", Style::default().fg(palette.text).bg(palette.border))
            };
            spans.push(Span::raw("  "));
            spans.push(Span::styled(label, style));
        } else if item != SettingsItem::LogOut {
            spans.push(Span::styled("  →", palette.subtle()));
        }
        lines.push(Line::from(spans));
    }

    let list = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(palette.border_style())
            .style(palette.panel()),
    );
    f.render_widget(list, rows[1]);
}

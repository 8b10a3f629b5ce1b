use crate::app::ChatPanel;
use crate::chat_message::render_transcript;
use crate::constants::{CHAT_PANEL_HEIGHT, CHAT_PANEL_WIDTH};
use crate::status_indicator::StatusIndicator;
use crate::theme::ThemeContext;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Floating chat window anchored to the bottom-right corner of `area`.
pub fn draw_chat_panel(
    f: &mut Frame<'_>,
    area: Rect,
    chat: &ChatPanel,
    status: &StatusIndicator,
    theme: &ThemeContext,
) {
    let palette = theme.palette();
    let panel = panel_rect(area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.accent))
        .style(palette.panel());
    let inner = block.inner(panel);
    f.render_widget(Clear, panel);
    f.render_widget(block, panel);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Header
            Constraint::Min(1),    // Messages
            Constraint::Length(1), // Typing indicator
            Constraint::Length(3), // Input
        ])
        .split(inner);

    let header = Paragraph::new(vec![
        Line::from(vec![
            Span::styled(" 🤖 AI Mentor", palette.title()),
            Span::styled("  ● Online", palette.accent_text()),
        ]),
        Line::from(Span::styled(
            "─".repeat(chunks[0].width as usize),
            palette.border_style(),
        )),
    ]);
    f.render_widget(header, chunks[0]);

    draw_messages(f, chunks[1], chat, theme);
    status.render(f, chunks[2], &palette);
    draw_input(f, chunks[3], &chat.input, theme);
}

fn panel_rect(area: Rect) -> Rect {
    let width = CHAT_PANEL_WIDTH.min(area.width);
    let height = CHAT_PANEL_HEIGHT.min(area.height);
    Rect {
        x: area.x + area.width - width,
        y: area.y + area.height - height,
        width,
        height,
    }
}

fn draw_messages(f: &mut Frame<'_>, area: Rect, chat: &ChatPanel, theme: &ThemeContext) {
    let palette = theme.palette();
    let lines = render_transcript(chat.simulator.messages(), area.width, &palette);

    // `chat.scroll` counts lines up from the newest message.
    let total_lines = lines.len() as u16;
    let max_scroll = total_lines.saturating_sub(area.height);
    let offset = max_scroll.saturating_sub(chat.scroll.min(max_scroll));

    f.render_widget(Paragraph::new(lines).scroll((offset, 0)), area);
}

fn draw_input(f: &mut Frame<'_>, area: Rect, input: &str, theme: &ThemeContext) {
    let palette = theme.palette();
    let prefix = "→ ";

    // Leave one column inside the border for the cursor.
    let visible_width = (area.width.saturating_sub(2) as usize).saturating_sub(prefix.width() + 1);
    let shown = visible_tail(input, visible_width);

    let content = if input.is_empty() {
        Line::from(vec![
            Span::styled(prefix, palette.subtle()),
            Span::styled(
                "Type your message...",
                palette.subtle().add_modifier(Modifier::ITALIC),
            ),
        ])
    } else {
        Line::from(vec![
            Span::styled(prefix, palette.accent_text()),
            Span::styled(shown.to_string(), Style::default().fg(palette.text)),
        ])
    };

    let widget = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(palette.border_style()),
    );
    f.render_widget(widget, area);

    let max_x = area.right().saturating_sub(2) as usize;
    let cursor_x = (area.x as usize + 1 + prefix.width() + shown.width()).min(max_x);
    f.set_cursor_position((cursor_x as u16, area.y + 1));
}

/// The longest suffix of `text` that fits in `max_width` columns.
fn visible_tail(text: &str, max_width: usize) -> &str {
    let mut width = 0;
    let mut start = text.len();
    for (idx, c) in text.char_indices().rev() {
        width += c.width().unwrap_or(0);
        if width > max_width {
            break;
        }
        start = idx;
    }
    &text[start..]
}

use crate::conversation::{Message, Sender};
use crate::theme::Palette;
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};
use textwrap::wrap;
use unicode_width::UnicodeWidthStr;

/// Renders one transcript entry as boxed lines.
///
/// Assistant messages hug the left edge; user messages are pushed to the
/// right edge of `width`.
pub fn render_message(message: &Message, width: u16, palette: &Palette) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let style = base_style(message.sender, palette);
    let from_user = message.sender == Sender::User;

    let wrap_width = (width as usize).saturating_sub(6).max(8);
    let body: Vec<String> = wrap(&message.text, wrap_width)
        .into_iter()
        .map(|l| format!("│ {}", l))
        .collect();
    let label = match message.sender {
        Sender::User => "You",
        Sender::Assistant => "AI Mentor",
    };
    let header = format!("┌─ {} · {}", label, message.sent_at.format("%H:%M"));
    let footer = "╰─".to_string();

    let block_width = body
        .iter()
        .map(|l| l.width())
        .chain([header.width()])
        .max()
        .unwrap_or(0);
    let indent = if from_user {
        " ".repeat((width as usize).saturating_sub(block_width))
    } else {
        String::new()
    };

    lines.push(Line::from(vec![
        Span::raw(indent.clone()),
        Span::styled(header, style.add_modifier(Modifier::DIM)),
    ]));
    for body_line in body {
        lines.push(Line::from(vec![
            Span::raw(indent.clone()),
            Span::styled(body_line, style),
        ]));
    }
    lines.push(Line::from(vec![
        Span::raw(indent),
        Span::styled(footer, style),
    ]));

    lines
}

fn base_style(sender: Sender, palette: &Palette) -> Style {
    match sender {
        Sender::User => Style::default().fg(palette.accent),
        Sender::Assistant => Style::default().fg(palette.text),
    }
}

/// Transcript lines with a blank line between messages.
pub fn render_transcript(
    messages: &[Message],
    width: u16,
    palette: &Palette,
) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for message in messages {
        if !lines.is_empty() {
            lines.push(Line::from(""));
        }
        lines.extend(render_message(message, width, palette));
    }
    lines
}

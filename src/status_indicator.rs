use crate::constants::SPINNER_FRAMES;
use crate::theme::Palette;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// "AI Mentor is typing" line shown under the chat transcript.
#[derive(Debug, Default)]
pub struct StatusIndicator {
    thinking: bool,
    spinner_idx: usize,
}

impl StatusIndicator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_thinking(&mut self, thinking: bool) {
        self.thinking = thinking;
    }

    pub fn is_thinking(&self) -> bool {
        self.thinking
    }

    pub fn update_spinner(&mut self) {
        if self.thinking {
            self.spinner_idx = self.spinner_idx.wrapping_add(1);
        }
    }

    pub fn frame(&self) -> &'static str {
        SPINNER_FRAMES[self.spinner_idx % SPINNER_FRAMES.len()]
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, palette: &Palette) {
        let line = if self.thinking {
            Line::from(vec![
                Span::styled(self.frame(), Style::default().fg(palette.accent)),
                Span::raw(" "),
                Span::styled(
                    "AI Mentor is typing...",
                    Style::default()
                        .fg(palette.muted)
                        .add_modifier(Modifier::ITALIC),
                ),
            ])
        } else {
            Line::from("")
        };

        frame.render_widget(Paragraph::new(line).alignment(Alignment::Left), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spinner_only_moves_while_thinking() {
        let mut indicator = StatusIndicator::new();
        let idle = indicator.frame();
        indicator.update_spinner();
        assert_eq!(indicator.frame(), idle);

        indicator.set_thinking(true);
        indicator.update_spinner();
        assert_ne!(indicator.frame(), idle);
    }
}

use crate::theme::ThemeContext;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MentorTopic {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const MENTOR_TOPICS: [MentorTopic; 4] = [
    MentorTopic {
        icon: "💡",
        title: "Idea Validation",
        description: "Get feedback on your startup idea and market fit",
    },
    MentorTopic {
        icon: "🎯",
        title: "Go-to-Market Strategy",
        description: "Learn how to launch and acquire your first customers",
    },
    MentorTopic {
        icon: "📈",
        title: "Growth Tactics",
        description: "Scale your startup with proven growth strategies",
    },
    MentorTopic {
        icon: "👥",
        title: "Team Building",
        description: "Advice on hiring and building your dream team",
    },
];

pub fn draw_mentor(f: &mut Frame<'_>, area: Rect, selected: usize, theme: &ThemeContext) {
    let palette = theme.palette();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(4), // Header
            Constraint::Length(8), // Topics
            Constraint::Min(5),    // Call to action
        ])
        .split(area);

    let header = Paragraph::new(vec![
        Line::from(Span::styled("🤖 AI Mentor", palette.title())),
        Line::from(Span::styled(
            "Your personal startup advisor powered by AI. Get instant guidance on any aspect of your entrepreneurial journey.",
            palette.subtle(),
        )),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true });
    f.render_widget(header, rows[0]);

    let grid_rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Ratio(1, 2); 2])
        .split(rows[1]);

    for (idx, topic) in MENTOR_TOPICS.iter().enumerate() {
        let row = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 2); 2])
            .split(grid_rows[idx / 2]);
        let is_selected = idx == selected % MENTOR_TOPICS.len();

        let border = if is_selected {
            Style::default().fg(palette.accent)
        } else {
            palette.border_style()
        };
        let title_style = if is_selected {
            palette.title().fg(palette.accent)
        } else {
            palette.title()
        };

        let card = Paragraph::new(vec![
            Line::from(Span::styled(
                format!("{} {}", topic.icon, topic.title),
                title_style,
            )),
            Line::from(Span::styled(topic.description, palette.subtle())),
        ])
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(border)
                .style(palette.panel()),
        );
        f.render_widget(card, row[idx % 2]);
    }

    let cta = Paragraph::new(vec![
        Line::from(Span::styled("💬 Start a Conversation", palette.title())),
        Line::from(Span::styled(
            "Press Enter on a topic or 'c' to start talking with your AI Mentor",
            palette.subtle(),
        )),
        Line::from(Span::styled(
            "● AI Mentor is online",
            palette.accent_text().add_modifier(Modifier::BOLD),
        )),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(palette.accent)),
    );
    f.render_widget(cta, rows[2]);
}

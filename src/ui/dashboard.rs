use crate::dashboard::{
    format_inr, Level, RunwayCalculator, StartupMatch, ANALYZED_IDEA, COMPETITORS, FOUNDER_NAME,
    MARKET_SATURATION, PERSONA, STARTUP_MATCHES, SUMMARY_CARDS,
};
use crate::theme::{Palette, ThemeContext};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, Paragraph, Wrap},
    Frame,
};

pub fn draw_dashboard(
    f: &mut Frame<'_>,
    area: Rect,
    runway: &RunwayCalculator,
    theme: &ThemeContext,
) {
    let palette = theme.palette();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(2), // Greeting
            Constraint::Length(4), // Summary cards
            Constraint::Length(1), // Matches heading
            Constraint::Length(5), // Matches
            Constraint::Length(9), // Competitors + runway
            Constraint::Min(6),    // Persona
        ])
        .split(area);

    let greeting = Paragraph::new(vec![
        Line::from(Span::styled(
            format!("Welcome back, {} 👋", FOUNDER_NAME),
            palette.title(),
        )),
        Line::from(Span::styled(
            "Here's your startup journey overview",
            palette.subtle(),
        )),
    ]);
    f.render_widget(greeting, rows[0]);

    draw_summary_cards(f, rows[1], &palette);

    f.render_widget(
        Paragraph::new(Span::styled("Top Startup Matches", palette.title())),
        rows[2],
    );
    draw_startup_matches(f, rows[3], &palette);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[4]);
    draw_competitors(f, columns[0], &palette);
    draw_runway(f, columns[1], runway, &palette);

    draw_persona(f, rows[5], &palette);
}

fn card(title: &str, palette: &Palette) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(palette.border_style())
        .title(Span::styled(format!(" {} ", title), palette.title()))
        .style(palette.panel())
}

pub fn level_style(level: Level, palette: &Palette) -> Style {
    let color = match level {
        Level::Low => palette.accent,
        Level::Medium => palette.warning,
        Level::High => palette.danger,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

fn draw_summary_cards(f: &mut Frame<'_>, area: Rect, palette: &Palette) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(area);

    for (summary, column) in SUMMARY_CARDS.iter().zip(columns.iter()) {
        let body = Paragraph::new(vec![
            Line::from(Span::styled(
                format!("{} {}", summary.icon, summary.title),
                palette.subtle(),
            )),
            Line::from(Span::styled(summary.value, palette.title())),
        ])
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(palette.border_style())
                .style(palette.panel()),
        );
        f.render_widget(body, *column);
    }
}

fn draw_startup_matches(f: &mut Frame<'_>, area: Rect, palette: &Palette) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3); 3])
        .split(area);

    for (startup, column) in STARTUP_MATCHES.iter().zip(columns.iter()) {
        draw_startup_card(f, *column, startup, palette);
    }
}

fn draw_startup_card(f: &mut Frame<'_>, area: Rect, startup: &StartupMatch, palette: &Palette) {
    let block = card(startup.title, palette);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let lines = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    let info = Line::from(vec![
        Span::styled(startup.category, palette.accent_text()),
        Span::styled("  risk: ", palette.subtle()),
        Span::styled(startup.risk.to_string(), level_style(startup.risk, palette)),
    ]);
    f.render_widget(Paragraph::new(info), lines[0]);

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(palette.accent).bg(palette.border))
        .percent(startup.confidence.min(100))
        .label(format!("{}% match", startup.confidence));
    f.render_widget(gauge, lines[1]);
}

fn draw_competitors(f: &mut Frame<'_>, area: Rect, palette: &Palette) {
    let block = card("Competitor Analysis", palette);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(COMPETITORS.len() as u16),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    f.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("Idea: ", palette.subtle()),
            Span::styled(ANALYZED_IDEA, Style::default().fg(palette.text)),
        ])),
        rows[0],
    );

    let competitor_lines: Vec<Line> = COMPETITORS
        .iter()
        .map(|c| {
            Line::from(vec![
                Span::styled(
                    format!("• {:<14}", c.name),
                    Style::default().fg(palette.text),
                ),
                Span::styled(c.level.to_string(), level_style(c.level, palette)),
            ])
        })
        .collect();
    f.render_widget(Paragraph::new(competitor_lines), rows[1]);

    f.render_widget(
        Paragraph::new(Span::styled("Market saturation", palette.subtle())),
        rows[2],
    );
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(palette.warning).bg(palette.border))
        .percent(MARKET_SATURATION)
        .label(format!("{}%", MARKET_SATURATION));
    f.render_widget(gauge, rows[3]);
}

fn draw_runway(f: &mut Frame<'_>, area: Rect, runway: &RunwayCalculator, palette: &Palette) {
    let block = card("Runway Calculator", palette);

    let months = runway.months();
    let months_text = if months.is_finite() {
        format!("{:.1} months", months)
    } else {
        "unlimited".to_string()
    };

    let lines = vec![
        Line::from(vec![
            Span::styled("Budget        ", palette.subtle()),
            Span::styled(format_inr(runway.budget), Style::default().fg(palette.text)),
        ]),
        Line::from(vec![
            Span::styled("Monthly burn  ", palette.subtle()),
            Span::styled(
                format!("{} /mo", format_inr(runway.monthly_burn)),
                Style::default().fg(palette.text),
            ),
            Span::styled("  (+/-)", palette.subtle()),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Runway        ", palette.subtle()),
            Span::styled(months_text, level_style(runway.health(), palette)),
        ]),
    ];

    f.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        area,
    );
}

fn draw_persona(f: &mut Frame<'_>, area: Rect, palette: &Palette) {
    let block = card("Co-Founder Persona Report", palette);

    let skills: Vec<Span> = PERSONA
        .skills
        .iter()
        .flat_map(|skill| {
            [
                Span::styled(format!(" {} ", skill), palette.highlight()),
                Span::raw(" "),
            ]
        })
        .collect();

    let lines = vec![
        Line::from(vec![
            Span::styled(PERSONA.role, palette.title()),
            Span::styled(format!("  ·  {}", PERSONA.personality), palette.subtle()),
        ]),
        Line::from(skills),
        Line::from(vec![
            Span::styled("Strength: ", palette.subtle()),
            Span::styled(PERSONA.strength, palette.accent_text()),
        ]),
        Line::from(vec![
            Span::styled("Weakness: ", palette.subtle()),
            Span::styled(PERSONA.weakness, Style::default().fg(palette.danger)),
        ]),
    ];

    f.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Theme;
    use crate::ui::test_support::render_to_string;

    #[test]
    fn test_dashboard_shows_static_data() {
        let theme = ThemeContext::new(Theme::Light);
        let runway = RunwayCalculator::default();
        let text = render_to_string(110, 44, |f| {
            let area = f.area();
            draw_dashboard(f, area, &runway, &theme)
        });

        for marker in [
            "Welcome back, Ashmita",
            "Medium Risk",
            "E-Learning Platform",
            "Resume.io",
            "10.0 months",
            "Technical Co-Founder",
        ] {
            assert!(text.contains(marker), "missing {:?}", marker);
        }
    }
}

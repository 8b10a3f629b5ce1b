use crate::app::{LoginField, LoginForm};
use crate::constants::{APP_TITLE, DEMO_CREDENTIALS_HINT};
use crate::status_indicator::StatusIndicator;
use crate::theme::ThemeContext;
use crate::ui::centered_rect;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

pub fn draw_login(
    f: &mut Frame<'_>,
    area: Rect,
    form: &LoginForm,
    status: &StatusIndicator,
    theme: &ThemeContext,
) {
    let palette = theme.palette();
    let card = centered_rect(56, 22, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(palette.border_style())
        .style(palette.panel());
    let inner = block.inner(card);
    f.render_widget(block, card);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(4), // Heading
            Constraint::Length(1), // Email label
            Constraint::Length(3), // Email input
            Constraint::Length(1), // Password label
            Constraint::Length(3), // Password input
            Constraint::Length(2), // Error
            Constraint::Length(1), // Sign in
            Constraint::Min(1),    // Hint
        ])
        .split(inner);

    let heading = Paragraph::new(vec![
        Line::from(Span::styled("🧠", palette.accent_text())),
        Line::from(Span::styled("Welcome back", palette.title())),
        Line::from(Span::styled(
            format!("Sign in to your {} account", APP_TITLE),
            palette.subtle(),
        )),
    ])
    .alignment(Alignment::Center);
    f.render_widget(heading, chunks[0]);

    f.render_widget(
        Paragraph::new("Email address").style(Style::default().fg(palette.text)),
        chunks[1],
    );
    draw_input(
        f,
        chunks[2],
        "✉ ",
        &form.email,
        "Enter your email",
        form.focus == LoginField::Email,
        theme,
    );

    f.render_widget(
        Paragraph::new("Password").style(Style::default().fg(palette.text)),
        chunks[3],
    );
    let masked = "•".repeat(form.password.chars().count());
    draw_input(
        f,
        chunks[4],
        "🔒 ",
        &masked,
        "Enter your password",
        form.focus == LoginField::Password,
        theme,
    );

    if let Some(error) = form.error {
        f.render_widget(
            Paragraph::new(error)
                .style(Style::default().fg(palette.danger))
                .alignment(Alignment::Center),
            chunks[5],
        );
    }

    let button = if form.is_pending() {
        Paragraph::new(format!(" {} Signing in... ", status.frame()))
            .style(palette.highlight().add_modifier(Modifier::DIM))
    } else {
        Paragraph::new(" Sign in → ").style(palette.highlight())
    };
    f.render_widget(button.alignment(Alignment::Center), chunks[6]);

    f.render_widget(
        Paragraph::new(DEMO_CREDENTIALS_HINT)
            .style(palette.subtle().add_modifier(Modifier::ITALIC))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        chunks[7],
    );
}

fn draw_input(
    f: &mut Frame<'_>,
    area: Rect,
    icon: &str,
    value: &str,
    placeholder: &str,
    focused: bool,
    theme: &ThemeContext,
) {
    let palette = theme.palette();
    let border = if focused {
        Style::default().fg(palette.accent)
    } else {
        palette.border_style()
    };

    let content = if value.is_empty() {
        Line::from(vec![
            Span::styled(icon.to_string(), palette.subtle()),
            Span::styled(placeholder.to_string(), palette.subtle()),
        ])
    } else {
        Line::from(vec![
            Span::styled(icon.to_string(), palette.subtle()),
            Span::styled(value.to_string(), Style::default().fg(palette.text)),
        ])
    };

    let input = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border),
    );
    f.render_widget(input, area);

    if focused {
        let max_x = area.right().saturating_sub(2) as usize;
        let x = (area.x as usize + 1 + icon.width() + value.width()).min(max_x);
        f.set_cursor_position((x as u16, area.y + 1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::LOGIN_ERROR;
    use crate::ui::test_support::render_to_string;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_password_is_masked() {
        let form = LoginForm {
            email: "a@b.com".to_string(),
            password: "hunter2".to_string(),
            focus: LoginField::Password,
            error: None,
            pending_until: None,
        };
        let theme = ThemeContext::default();
        let text = render_to_string(80, 30, |f| {
            let area = f.area();
            draw_login(f, area, &form, &StatusIndicator::new(), &theme)
        });
        assert!(text.contains("a@b.com"));
        assert!(!text.contains("hunter2"));
        assert!(text.contains("•••••••"));
    }

    #[test]
    fn test_error_is_shown() {
        let form = LoginForm {
            error: Some(LOGIN_ERROR),
            ..LoginForm::default()
        };
        let theme = ThemeContext::default();
        let text = render_to_string(80, 30, |f| {
            let area = f.area();
            draw_login(f, area, &form, &StatusIndicator::new(), &theme)
        });
        assert!(text.contains(LOGIN_ERROR));
        assert!(text.contains("Enter your email"));
    }

    #[test]
    fn test_long_email_keeps_cursor_inside_card() {
        let form = LoginForm {
            email: "a".repeat(70_000),
            ..LoginForm::default()
        };
        let theme = ThemeContext::default();

        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                draw_login(f, area, &form, &StatusIndicator::new(), &theme)
            })
            .unwrap();

        let cursor = terminal.get_cursor_position().unwrap();
        assert!(cursor.x < 80);
    }

    #[test]
    fn test_pending_sign_in_shows_spinner() {
        let form = LoginForm {
            email: "a@b.com".to_string(),
            password: "pw".to_string(),
            pending_until: Some(std::time::Instant::now()),
            ..LoginForm::default()
        };
        let theme = ThemeContext::default();
        let text = render_to_string(80, 30, |f| {
            let area = f.area();
            draw_login(f, area, &form, &StatusIndicator::new(), &theme)
        });
        assert!(text.contains("Signing in..."));
        assert!(!text.contains("Sign in →"));
    }
}

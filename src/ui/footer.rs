use crate::app::{App, Screen};
use ratatui::{
    layout::{Alignment, Rect},
    widgets::{Paragraph, Wrap},
    Frame,
};

/// Draws the footer with the key hints for whatever has focus.
pub fn draw_footer(f: &mut Frame<'_>, area: Rect, app: &App) {
    let palette = app.theme.palette();

    let instructions = if app.quit_confirm {
        "Press 'y' to confirm quit or 'n' to cancel."
    } else if let Some(notice) = &app.notice {
        notice.as_str()
    } else if app.is_chat_open() {
        "Type your message and press Enter to send. PgUp/PgDn to scroll, Esc to close."
    } else {
        match app.screen {
            Screen::Dashboard => {
                "1-3/Tab switch page · +/- adjust monthly burn · c chat · t theme · l log out · q quit"
            }
            Screen::Mentor => {
                "Up/Down choose a topic · Enter ask the mentor · c chat · t theme · q quit"
            }
            Screen::Settings => "Up/Down select · Enter apply · c chat · t theme · q quit",
            Screen::Login => "Tab switch field · Enter sign in · Esc quit",
        }
    };

    let style = if app.notice.is_some() && !app.quit_confirm {
        palette.accent_text()
    } else {
        palette.subtle()
    };

    let footer = Paragraph::new(instructions)
        .style(style)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    f.render_widget(footer, area);
}

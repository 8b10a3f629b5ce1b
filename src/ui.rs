// src/ui.rs

pub mod chat;
pub mod dashboard;
pub mod footer;
pub mod header;
pub mod login;
pub mod mentor;
pub mod quit_confirm;
pub mod settings;
pub mod sidebar;

use crate::app::{App, Screen};
use crate::constants::SIDEBAR_WIDTH;
use crate::errors::BuddyResult;
use crate::key_handlers::handle_key;
use crossterm::{
    event::{self, Event as CEvent},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::{error, info};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout, Rect},
    widgets::Block,
    Frame, Terminal,
};
use std::{
    io,
    time::{Duration, Instant},
};
use tokio::sync::mpsc;

/// Runs the terminal UI until the user quits.
pub async fn run_ui(app: App, tick_rate: Duration) -> BuddyResult<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app, tick_rate).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

/// Main loop. Everything that touches `App` happens on this task; terminal
/// input is read on a blocking thread and forwarded over a channel.
async fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
    tick_rate: Duration,
) -> BuddyResult<()> {
    let (tx, mut rx) = mpsc::channel::<CEvent>(100);

    tokio::task::spawn_blocking(move || loop {
        match event::poll(Duration::from_millis(100)) {
            Ok(true) => match event::read() {
                Ok(event) => {
                    if tx.blocking_send(event).is_err() {
                        return;
                    }
                }
                Err(e) => {
                    error!("Failed to read terminal event: {}", e);
                    return;
                }
            },
            Ok(false) => {
                if tx.is_closed() {
                    return;
                }
            }
            Err(e) => {
                error!("Failed to poll terminal events: {}", e);
                return;
            }
        }
    });

    let mut ticker = tokio::time::interval(tick_rate);
    info!("Event loop started");

    loop {
        terminal.draw(|f| draw(f, &app))?;

        let deadline = app.next_deadline();
        tokio::select! {
            event = rx.recv() => match event {
                Some(CEvent::Key(key)) => handle_key(&mut app, key, Instant::now()),
                Some(_) => {}
                None => break,
            },
            _ = sleep_until(deadline) => app.on_tick(Instant::now()),
            _ = ticker.tick() => app.on_tick(Instant::now()),
        }

        if app.should_quit {
            break;
        }
    }

    info!("Event loop finished");
    Ok(())
}

async fn sleep_until(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => {
            tokio::time::sleep_until(tokio::time::Instant::from_std(deadline)).await;
        }
        None => std::future::pending::<()>().await,
    }
}

/// Renders the whole screen for the current app state.
pub fn draw(f: &mut Frame<'_>, app: &App) {
    let palette = app.theme.palette();
    let area = f.area();
    f.render_widget(Block::default().style(palette.base()), area);

    if app.screen == Screen::Login {
        login::draw_login(f, area, &app.login, &app.status_indicator, &app.theme);
    } else {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(20)])
            .split(area);
        sidebar::draw_sidebar(f, columns[0], app.screen, &app.theme);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Navbar
                Constraint::Min(1),    // Page
                Constraint::Length(1), // Footer
            ])
            .split(columns[1]);

        header::draw_navbar(f, rows[0], app.screen.title(), &app.theme, &app.auth);
        match app.screen {
            Screen::Dashboard => dashboard::draw_dashboard(f, rows[1], &app.runway, &app.theme),
            Screen::Mentor => mentor::draw_mentor(f, rows[1], app.mentor_selected, &app.theme),
            Screen::Settings => {
                settings::draw_settings(f, rows[1], app.settings_selected, &app.theme)
            }
            Screen::Login => {}
        }
        footer::draw_footer(f, rows[2], app);

        if let Some(panel) = app.chat.as_ref().filter(|c| c.open) {
            chat::draw_chat_panel(f, area, panel, &app.status_indicator, &app.theme);
        }
    }

    if app.quit_confirm {
        quit_confirm::draw_quit_confirm(f, centered_rect(46, 7, area), &app.theme);
    }
}

/// A `width` x `height` rect centred in `area`, clamped to fit.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use ratatui::{backend::TestBackend, buffer::Buffer, Frame, Terminal};

    /// Draws with `render` into an in-memory terminal and returns its text.
    pub fn render_to_string(width: u16, height: u16, render: impl FnOnce(&mut Frame)) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(render).unwrap();
        buffer_text(terminal.backend().buffer())
    }

    pub fn buffer_text(buffer: &Buffer) -> String {
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::render_to_string;
    use super::*;
    use crate::config::Config;
    use crate::constants::SIGN_IN_DELAY_MS;

    fn signed_in_app() -> App {
        let mut app = App::new(&Config::default()).unwrap().with_seed(5);
        app.login.email = "a@b.com".to_string();
        app.login.password = "pw".to_string();
        let now = Instant::now();
        app.submit_login(now);
        app.on_tick(now + Duration::from_millis(SIGN_IN_DELAY_MS));
        app
    }

    #[test]
    fn test_centered_rect_clamps() {
        let area = Rect::new(0, 0, 20, 10);
        assert_eq!(centered_rect(10, 4, area), Rect::new(5, 3, 10, 4));
        assert_eq!(centered_rect(40, 40, area), area);
    }

    #[test]
    fn test_draw_login_screen() {
        let app = App::new(&Config::default()).unwrap();
        let text = render_to_string(100, 32, |f| draw(f, &app));
        assert!(text.contains("Welcome back"));
        assert!(text.contains("Email address"));
    }

    #[test]
    fn test_draw_each_page() {
        let mut app = signed_in_app();
        for (screen, marker) in [
            (Screen::Dashboard, "Top Startup Matches"),
            (Screen::Mentor, "Idea Validation"),
            (Screen::Settings, "Profile Settings"),
        ] {
            app.navigate(screen);
            let text = render_to_string(120, 48, |f| draw(f, &app));
            assert!(text.contains(marker), "{:?} missing {:?}", screen, marker);
        }
    }

    #[test]
    fn test_draw_chat_panel_and_quit_overlay() {
        let mut app = signed_in_app();
        app.open_chat(None);
        app.quit_confirm = true;
        let text = render_to_string(120, 48, |f| draw(f, &app));
        assert!(text.contains("AI Mentor"));
        assert!(text.contains("Online"));
        assert!(text.contains("Confirm Quit"));
    }
}

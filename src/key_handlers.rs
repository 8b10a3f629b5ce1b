use crate::app::{App, Screen, SettingsItem};
use crate::ui::mentor::MENTOR_TOPICS;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Instant;

/// Routes one key press to whichever part of the UI currently has focus.
pub fn handle_key(app: &mut App, key: KeyEvent, now: Instant) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if app.quit_confirm {
        handle_quit_confirm_input(key, app);
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.request_quit();
        return;
    }

    match app.screen {
        Screen::Login => handle_login_input(key, app, now),
        _ if app.is_chat_open() => handle_chat_input(key, app, now),
        _ => handle_page_input(key, app),
    }
}

fn handle_login_input(key: KeyEvent, app: &mut App, now: Instant) {
    if app.login.is_pending() {
        if key.code == KeyCode::Esc {
            app.request_quit();
        }
        return;
    }

    match key.code {
        KeyCode::Esc => app.request_quit(),
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
            app.login.switch_focus();
        }
        KeyCode::Enter => app.submit_login(now),
        KeyCode::Backspace => {
            app.login.focused_mut().pop();
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.login.focused_mut().push(c);
        }
        _ => {}
    }
}

pub fn handle_chat_input(key: KeyEvent, app: &mut App, now: Instant) {
    match key.code {
        KeyCode::Esc => app.close_chat(),
        KeyCode::Enter => app.send_chat(now),
        _ => {
            let Some(chat) = app.chat.as_mut() else {
                return;
            };
            match key.code {
                KeyCode::PageUp => chat.scroll = chat.scroll.saturating_add(3),
                KeyCode::PageDown => chat.scroll = chat.scroll.saturating_sub(3),
                KeyCode::Backspace => {
                    chat.input.pop();
                }
                KeyCode::Char(c) => {
                    if key.modifiers.contains(KeyModifiers::CONTROL) {
                        match c {
                            'u' => chat.scroll = chat.scroll.saturating_add(3),
                            'd' => chat.scroll = chat.scroll.saturating_sub(3),
                            'a' => chat.open = false,
                            _ => {}
                        }
                    } else {
                        chat.input.push(c);
                    }
                }
                _ => {}
            }
        }
    }
}

fn handle_page_input(key: KeyEvent, app: &mut App) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('a') if ctrl => app.open_chat(None),
        KeyCode::Char('c') => app.open_chat(None),
        KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
        KeyCode::Char('t') => app.toggle_theme(),
        KeyCode::Char('l') => app.logout(),
        KeyCode::Tab => app.navigate(app.screen.next()),
        KeyCode::Char(n @ '1'..='3') => {
            let idx = n as usize - '1' as usize;
            app.navigate(Screen::NAV[idx]);
        }
        _ => match app.screen {
            Screen::Dashboard => handle_dashboard_input(key, app),
            Screen::Mentor => handle_mentor_input(key, app),
            Screen::Settings => handle_settings_input(key, app),
            Screen::Login => {}
        },
    }
}

fn handle_dashboard_input(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Right => app.runway.increase_burn(),
        KeyCode::Char('-') | KeyCode::Left => app.runway.decrease_burn(),
        _ => {}
    }
}

fn handle_mentor_input(key: KeyEvent, app: &mut App) {
    let len = MENTOR_TOPICS.len();
    match key.code {
        KeyCode::Down => app.mentor_selected = (app.mentor_selected + 1) % len,
        KeyCode::Up => app.mentor_selected = (app.mentor_selected + len - 1) % len,
        KeyCode::Enter => {
            let topic = MENTOR_TOPICS[app.mentor_selected % len];
            app.open_chat(Some(topic.title));
        }
        _ => {}
    }
}

fn handle_settings_input(key: KeyEvent, app: &mut App) {
    let len = SettingsItem::ALL.len();
    match key.code {
        KeyCode::Down => app.settings_selected = (app.settings_selected + 1) % len,
        KeyCode::Up => app.settings_selected = (app.settings_selected + len - 1) % len,
        KeyCode::Enter => app.activate_setting(),
        _ => {}
    }
}

pub fn handle_quit_confirm_input(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Enter => {
            app.should_quit = true;
        }
        KeyCode::Char('n') | KeyCode::Esc => {
            app.quit_confirm = false;
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::constants::SIGN_IN_DELAY_MS;
    use crate::conversation::Sender;
    use std::time::Duration;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn type_text(app: &mut App, text: &str, now: Instant) {
        for c in text.chars() {
            handle_key(app, press(KeyCode::Char(c)), now);
        }
    }

    fn signed_in(now: Instant) -> App {
        let mut app = App::new(&Config::default()).unwrap().with_seed(3);
        type_text(&mut app, "a@b.com", now);
        handle_key(&mut app, press(KeyCode::Tab), now);
        type_text(&mut app, "anything", now);
        handle_key(&mut app, press(KeyCode::Enter), now);
        app.on_tick(now + Duration::from_millis(SIGN_IN_DELAY_MS));
        app
    }

    #[test]
    fn test_login_form_keys() {
        let now = Instant::now();
        let app = signed_in(now);
        assert_eq!(app.screen, Screen::Dashboard);
        assert_eq!(app.login.email, "a@b.com");
    }

    #[test]
    fn test_login_ignores_control_chords() {
        let now = Instant::now();
        let mut app = App::new(&Config::default()).unwrap();
        type_text(&mut app, "ab", now);
        handle_key(&mut app, ctrl('a'), now);
        handle_key(&mut app, ctrl('u'), now);
        assert_eq!(app.login.email, "ab");
        assert_eq!(app.screen, Screen::Login);
    }

    #[test]
    fn test_login_form_locked_while_signing_in() {
        let now = Instant::now();
        let mut app = App::new(&Config::default()).unwrap();
        type_text(&mut app, "a@b.com", now);
        handle_key(&mut app, press(KeyCode::Tab), now);
        type_text(&mut app, "pw", now);
        handle_key(&mut app, press(KeyCode::Enter), now);

        type_text(&mut app, "xyz", now);
        handle_key(&mut app, press(KeyCode::Backspace), now);
        assert_eq!(app.login.password, "pw");
        assert!(app.login.is_pending());
    }

    #[test]
    fn test_chat_keys_run_the_conversation() {
        let now = Instant::now();
        let mut app = signed_in(now);

        handle_key(&mut app, ctrl('a'), now);
        assert!(app.is_chat_open());

        type_text(&mut app, "hi", now);
        handle_key(&mut app, press(KeyCode::Backspace), now);
        type_text(&mut app, "ello", now);
        handle_key(&mut app, press(KeyCode::Enter), now);

        let chat = app.chat.as_ref().unwrap();
        assert_eq!(chat.simulator.messages()[1].text, "hello");
        assert_eq!(chat.simulator.messages()[1].sender, Sender::User);

        app.on_tick(now + Duration::from_secs(1));
        assert_eq!(app.chat.as_ref().unwrap().simulator.messages().len(), 3);

        handle_key(&mut app, press(KeyCode::Esc), now);
        assert!(!app.is_chat_open());
        assert!(!app.quit_confirm);
    }

    #[test]
    fn test_page_shortcuts() {
        let now = Instant::now();
        let mut app = signed_in(now);

        handle_key(&mut app, press(KeyCode::Char('2')), now);
        assert_eq!(app.screen, Screen::Mentor);
        handle_key(&mut app, press(KeyCode::Tab), now);
        assert_eq!(app.screen, Screen::Settings);

        let theme = app.theme.theme();
        handle_key(&mut app, press(KeyCode::Char('t')), now);
        assert_ne!(app.theme.theme(), theme);

        handle_key(&mut app, press(KeyCode::Char('l')), now);
        assert_eq!(app.screen, Screen::Login);
    }

    #[test]
    fn test_mentor_topic_prefills_chat() {
        let now = Instant::now();
        let mut app = signed_in(now);
        app.navigate(Screen::Mentor);

        handle_key(&mut app, press(KeyCode::Down), now);
        handle_key(&mut app, press(KeyCode::Enter), now);
        let chat = app.chat.as_ref().unwrap();
        assert!(chat.open);
        assert_eq!(chat.input, MENTOR_TOPICS[1].title);
    }

    #[test]
    fn test_quit_confirm_flow() {
        let now = Instant::now();
        let mut app = App::new(&Config::default()).unwrap();

        handle_key(&mut app, ctrl('c'), now);
        assert!(app.quit_confirm);
        handle_key(&mut app, press(KeyCode::Char('n')), now);
        assert!(!app.quit_confirm);
        assert!(!app.should_quit);

        handle_key(&mut app, press(KeyCode::Esc), now);
        handle_key(&mut app, press(KeyCode::Char('y')), now);
        assert!(app.should_quit);
    }

    #[test]
    fn test_dashboard_runway_keys() {
        let now = Instant::now();
        let mut app = signed_in(now);
        let burn = app.runway.monthly_burn;
        handle_key(&mut app, press(KeyCode::Char('+')), now);
        assert!(app.runway.monthly_burn > burn);
        handle_key(&mut app, press(KeyCode::Char('-')), now);
        assert_eq!(app.runway.monthly_burn, burn);
    }
}

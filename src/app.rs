use crate::auth::AuthContext;
use crate::config::Config;
use crate::constants::{LOGIN_ERROR, SIGN_IN_DELAY_MS};
use crate::dashboard::RunwayCalculator;
use crate::errors::BuddyResult;
use crate::responses::ResponsePool;
use crate::simulator::ConversationSimulator;
use crate::status_indicator::StatusIndicator;
use crate::theme::ThemeContext;
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Login,
    Dashboard,
    Mentor,
    Settings,
}

impl Screen {
    /// Screens reachable from the sidebar, in display order.
    pub const NAV: [Screen; 3] = [Screen::Dashboard, Screen::Mentor, Screen::Settings];

    pub fn title(self) -> &'static str {
        match self {
            Screen::Login => "Sign In",
            Screen::Dashboard => "Dashboard",
            Screen::Mentor => "AI Mentor",
            Screen::Settings => "Settings",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Screen::Login => "🔑",
            Screen::Dashboard => "📊",
            Screen::Mentor => "🤖",
            Screen::Settings => "⚙️",
        }
    }

    pub fn next(self) -> Screen {
        match self {
            Screen::Dashboard => Screen::Mentor,
            Screen::Mentor => Screen::Settings,
            Screen::Settings | Screen::Login => Screen::Dashboard,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginField {
    #[default]
    Email,
    Password,
}

#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub focus: LoginField,
    pub error: Option<&'static str>,
    /// Set while a sign-in is in flight; the form is locked until then.
    pub pending_until: Option<Instant>,
}

impl LoginForm {
    pub fn focused_mut(&mut self) -> &mut String {
        match self.focus {
            LoginField::Email => &mut self.email,
            LoginField::Password => &mut self.password,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending_until.is_some()
    }

    pub fn switch_focus(&mut self) {
        self.focus = match self.focus {
            LoginField::Email => LoginField::Password,
            LoginField::Password => LoginField::Email,
        };
    }
}

/// The floating "Ask AI Mentor" panel. Lives for one signed-in session.
#[derive(Debug)]
pub struct ChatPanel {
    pub open: bool,
    pub input: String,
    pub scroll: u16,
    pub simulator: ConversationSimulator,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsItem {
    ProfileSettings,
    Notifications,
    Security,
    Appearance,
    Language,
    DarkMode,
    LogOut,
}

impl SettingsItem {
    pub const ALL: [SettingsItem; 7] = [
        SettingsItem::ProfileSettings,
        SettingsItem::Notifications,
        SettingsItem::Security,
        SettingsItem::Appearance,
        SettingsItem::Language,
        SettingsItem::DarkMode,
        SettingsItem::LogOut,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SettingsItem::ProfileSettings => "Profile Settings",
            SettingsItem::Notifications => "Notifications",
            SettingsItem::Security => "Security",
            SettingsItem::Appearance => "Appearance",
            SettingsItem::Language => "Language",
            SettingsItem::DarkMode => "Dark Mode",
            SettingsItem::LogOut => "Log Out",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            SettingsItem::ProfileSettings => "Manage your account details",
            SettingsItem::Notifications => "Configure notification preferences",
            SettingsItem::Security => "Password and authentication",
            SettingsItem::Appearance => "Theme and display settings",
            SettingsItem::Language => "Choose your preferred language",
            SettingsItem::DarkMode => "Toggle dark theme",
            SettingsItem::LogOut => "Sign out of Startup Buddy",
        }
    }

    pub fn section(self) -> &'static str {
        match self {
            SettingsItem::ProfileSettings
            | SettingsItem::Notifications
            | SettingsItem::Security => "Account",
            SettingsItem::Appearance | SettingsItem::Language => "Preferences",
            SettingsItem::DarkMode | SettingsItem::LogOut => "Session",
        }
    }
}

pub struct App {
    pub screen: Screen,
    pub quit_confirm: bool,
    pub should_quit: bool,
    pub theme: ThemeContext,
    pub auth: AuthContext,
    pub login: LoginForm,
    pub chat: Option<ChatPanel>,
    pub mentor_selected: usize,
    pub settings_selected: usize,
    pub runway: RunwayCalculator,
    pub notice: Option<String>,
    pub status_indicator: StatusIndicator,
    greeting: String,
    pool: ResponsePool,
    reply_delay: Duration,
    rng_seed: Option<u64>,
}

impl App {
    pub fn new(config: &Config) -> BuddyResult<App> {
        Ok(App {
            screen: Screen::Login,
            quit_confirm: false,
            should_quit: false,
            theme: ThemeContext::new(config.theme),
            auth: AuthContext::default(),
            login: LoginForm::default(),
            chat: None,
            mentor_selected: 0,
            settings_selected: 0,
            runway: RunwayCalculator::default(),
            notice: None,
            status_indicator: StatusIndicator::new(),
            greeting: config.greeting.clone(),
            pool: ResponsePool::new(config.responses.iter().cloned())?,
            reply_delay: config.reply_delay(),
            rng_seed: None,
        })
    }

    /// Chat replies are drawn from an RNG seeded with `seed`.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    /// Starts signing in with the form's credentials. The outcome lands on
    /// the first tick at or after the sign-in delay.
    pub fn submit_login(&mut self, now: Instant) {
        if self.login.is_pending() {
            return;
        }
        self.login.error = None;
        self.login.pending_until = Some(now + Duration::from_millis(SIGN_IN_DELAY_MS));
        self.status_indicator.set_thinking(true);
    }

    fn finish_login(&mut self) {
        self.login.pending_until = None;
        if self.auth.login(&self.login.email, &self.login.password) {
            self.login.password.clear();
            self.login.error = None;
            self.start_chat();
            self.screen = Screen::Dashboard;
        } else {
            self.login.error = Some(LOGIN_ERROR);
        }
    }

    pub fn logout(&mut self) {
        if let Some(mut chat) = self.chat.take() {
            chat.simulator.teardown();
        }
        self.auth.logout();
        self.login = LoginForm::default();
        self.notice = None;
        self.status_indicator.set_thinking(false);
        self.screen = Screen::Login;
    }

    /// Switches screens. Everything but the login screen requires a session.
    pub fn navigate(&mut self, screen: Screen) {
        let target = if self.auth.is_authenticated() {
            screen
        } else {
            Screen::Login
        };
        if target != self.screen {
            info!("Navigating to {}", target.title());
        }
        self.notice = None;
        self.screen = target;
    }

    pub fn toggle_theme(&mut self) {
        self.theme.toggle();
    }

    pub fn open_chat(&mut self, prefill: Option<&str>) {
        if let Some(chat) = self.chat.as_mut() {
            chat.open = true;
            if let Some(text) = prefill {
                chat.input = text.to_string();
            }
        }
    }

    pub fn close_chat(&mut self) {
        if let Some(chat) = self.chat.as_mut() {
            chat.open = false;
        }
    }

    pub fn is_chat_open(&self) -> bool {
        self.chat.as_ref().is_some_and(|c| c.open)
    }

    /// Sends whatever is in the chat input. Blank input is dropped silently.
    pub fn send_chat(&mut self, now: Instant) {
        let Some(chat) = self.chat.as_mut() else {
            return;
        };
        let text = std::mem::take(&mut chat.input);
        if chat.simulator.submit(&text, now).is_some() {
            chat.scroll = 0;
            self.status_indicator.set_thinking(true);
        }
    }

    /// Delivers due replies and advances the typing spinner.
    pub fn on_tick(&mut self, now: Instant) {
        if self.login.pending_until.is_some_and(|at| now >= at) {
            self.finish_login();
        }

        let awaiting = match self.chat.as_mut() {
            Some(chat) => {
                if chat.simulator.poll(now) > 0 {
                    chat.scroll = 0;
                }
                chat.simulator.is_awaiting_reply()
            }
            None => false,
        };
        self.status_indicator.set_thinking(awaiting || self.login.is_pending());
        self.status_indicator.update_spinner();
    }

    pub fn next_deadline(&mut self) -> Option<Instant> {
        let reply = self
            .chat
            .as_mut()
            .and_then(|chat| chat.simulator.next_deadline());
        match (reply, self.login.pending_until) {
            (Some(reply), Some(login)) => Some(reply.min(login)),
            (reply, login) => reply.or(login),
        }
    }

    pub fn activate_setting(&mut self) {
        let item = SettingsItem::ALL[self.settings_selected % SettingsItem::ALL.len()];
        match item {
            SettingsItem::DarkMode | SettingsItem::Appearance => self.toggle_theme(),
            SettingsItem::LogOut => self.logout(),
            other => {
                self.notice = Some(format!("{} is not available in the demo", other.label()));
            }
        }
    }

    pub fn request_quit(&mut self) {
        self.quit_confirm = true;
    }

    fn start_chat(&mut self) {
        let pool = self.pool.clone();
        let simulator = match self.rng_seed {
            Some(seed) => ConversationSimulator::new(
                &self.greeting,
                pool,
                self.reply_delay,
                StdRng::seed_from_u64(seed),
            ),
            None => ConversationSimulator::from_entropy(&self.greeting, pool, self.reply_delay),
        };
        self.chat = Some(ChatPanel {
            open: false,
            input: String::new(),
            scroll: 0,
            simulator,
        });
    }
}

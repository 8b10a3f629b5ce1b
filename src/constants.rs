// App Constants
pub const APP_NAME: &str = "startup-buddy";
pub const APP_TITLE: &str = "Startup Buddy";
pub const CONFIG_ENV_VAR: &str = "STARTUP_BUDDY_CONFIG";

// Chat Constants
pub const DEFAULT_REPLY_DELAY_MS: u64 = 1000;
pub const DEFAULT_TICK_RATE_MS: u64 = 250;
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

pub const DEFAULT_GREETING: &str =
    "Hi! I'm your AI Mentor. How can I help you with your startup journey today?";

pub const DEFAULT_RESPONSES: [&str; 5] = [
    "Great question! Based on your profile, I'd recommend focusing on SaaS solutions with low initial investment.",
    "Have you considered validating your idea with a small MVP first? This reduces risk significantly.",
    "Your runway looks healthy! Consider allocating 20% for marketing once you launch.",
    "For a technical co-founder, look for someone with full-stack experience and startup mindset.",
    "The competitor analysis shows moderate saturation. Differentiation will be key to success!",
];

// Auth Constants
pub const LOGIN_ERROR: &str = "Invalid email or password";
pub const DEMO_CREDENTIALS_HINT: &str =
    "Demo credentials: any email/password combination will work";
/// How long the login button shows its spinner before the session starts.
pub const SIGN_IN_DELAY_MS: u64 = 600;

// UI Constants
pub const CHAT_PANEL_WIDTH: u16 = 48;
pub const CHAT_PANEL_HEIGHT: u16 = 22;
pub const SIDEBAR_WIDTH: u16 = 22;
pub const SPINNER_FRAMES: [&str; 4] = ["◐", "◓", "◑", "◒"];

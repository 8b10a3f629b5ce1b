// src/lib.rs

pub mod app;
pub mod auth;
pub mod chat_message;
pub mod config;
pub mod constants;
pub mod conversation;
pub mod dashboard;
pub mod errors;
pub mod key_handlers;
pub mod logging;
pub mod responses;
pub mod scheduler;
pub mod simulator;
pub mod status_indicator;
pub mod theme;
pub mod ui;

pub use app::{App, Screen};
pub use config::Config;
pub use conversation::{Conversation, Message, Sender};
pub use errors::{BuddyError, BuddyResult};
pub use responses::ResponsePool;
pub use scheduler::{TaskHandle, TaskState, TimerQueue};
pub use simulator::{ConversationSimulator, ReplyHandle};

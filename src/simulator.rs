//! Drives the canned-reply chat: a user message is appended right away and an
//! assistant reply follows once the reply delay has passed.

use crate::conversation::{Conversation, Message, Sender};
use crate::responses::ResponsePool;
use crate::scheduler::{TaskHandle, TimerQueue};
use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::{Duration, Instant};

pub type ReplyHandle = TaskHandle;

#[derive(Debug, Clone, Copy)]
struct PendingReply {
    in_reply_to: u64,
}

#[derive(Debug)]
pub struct ConversationSimulator<R: Rng = StdRng> {
    conversation: Conversation,
    pool: ResponsePool,
    reply_delay: Duration,
    rng: R,
    replies: TimerQueue<PendingReply>,
}

impl ConversationSimulator<StdRng> {
    /// Simulator seeded from the operating system's entropy source.
    pub fn from_entropy(greeting: &str, pool: ResponsePool, reply_delay: Duration) -> Self {
        Self::new(greeting, pool, reply_delay, StdRng::from_os_rng())
    }
}

impl<R: Rng> ConversationSimulator<R> {
    pub fn new(greeting: &str, pool: ResponsePool, reply_delay: Duration, rng: R) -> Self {
        Self {
            conversation: Conversation::new(greeting),
            pool,
            reply_delay,
            rng,
            replies: TimerQueue::new(),
        }
    }

    /// Appends `text` as a user message and schedules one reply.
    ///
    /// Blank input is ignored and returns `None`.
    pub fn submit(&mut self, text: &str, now: Instant) -> Option<ReplyHandle> {
        if text.trim().is_empty() {
            return None;
        }

        let id = self.conversation.push(Sender::User, text).id;
        let handle = self
            .replies
            .schedule(now, self.reply_delay, PendingReply { in_reply_to: id });
        info!(
            "Message {} submitted ({} chars), reply task {} scheduled",
            id,
            text.chars().count(),
            handle.id().get()
        );
        Some(handle)
    }

    /// Delivers every reply that is due at `now`, in scheduling order.
    /// Returns how many were appended.
    pub fn poll(&mut self, now: Instant) -> usize {
        let mut delivered = 0;
        while let Some(due) = self.replies.pop_due(now) {
            let text = self.pool.choose(&mut self.rng).to_string();
            let id = self.conversation.push(Sender::Assistant, text).id;
            debug!(
                "Reply task {} delivered as message {} (answering {})",
                due.id.get(),
                id,
                due.payload.in_reply_to
            );
            delivered += 1;
        }
        delivered
    }

    pub fn next_deadline(&mut self) -> Option<Instant> {
        self.replies.next_deadline()
    }

    pub fn pending_replies(&self) -> usize {
        self.replies.pending()
    }

    pub fn is_awaiting_reply(&self) -> bool {
        !self.replies.is_idle()
    }

    /// Cancels every reply that has not fired yet.
    pub fn teardown(&mut self) -> usize {
        let cancelled = self.replies.cancel_all();
        if cancelled > 0 {
            info!(
                "Conversation torn down, {} pending replies cancelled",
                cancelled
            );
        }
        cancelled
    }

    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    pub fn messages(&self) -> &[Message] {
        self.conversation.messages()
    }

    pub fn pool(&self) -> &ResponsePool {
        &self.pool
    }

    pub fn reply_delay(&self) -> Duration {
        self.reply_delay
    }
}

impl<R: Rng> Drop for ConversationSimulator<R> {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_GREETING;
    use crate::scheduler::TaskState;

    const DELAY: Duration = Duration::from_millis(1000);

    fn simulator() -> ConversationSimulator<StdRng> {
        ConversationSimulator::new(
            DEFAULT_GREETING,
            ResponsePool::default(),
            DELAY,
            StdRng::seed_from_u64(2024),
        )
    }

    #[test]
    fn test_submit_then_reply_after_delay() {
        let start = Instant::now();
        let mut sim = simulator();
        assert_eq!(sim.messages().len(), 1);
        assert_eq!(sim.messages()[0].sender, Sender::Assistant);

        let handle = sim.submit("What category fits my budget?", start).unwrap();
        assert_eq!(sim.messages().len(), 2);
        let user = &sim.messages()[1];
        assert_eq!(user.sender, Sender::User);
        assert_eq!(user.text, "What category fits my budget?");
        assert_eq!(user.id, 2);

        assert_eq!(sim.poll(start + Duration::from_millis(999)), 0);
        assert_eq!(sim.messages().len(), 2);
        assert!(sim.is_awaiting_reply());

        assert_eq!(sim.poll(start + DELAY), 1);
        assert_eq!(sim.messages().len(), 3);
        let reply = &sim.messages()[2];
        assert_eq!(reply.sender, Sender::Assistant);
        assert_eq!(reply.id, 3);
        assert!(sim.pool().contains(&reply.text));
        assert_eq!(handle.state(), TaskState::Delivered);
        assert!(!sim.is_awaiting_reply());
    }

    #[test]
    fn test_blank_submission_is_ignored() {
        let start = Instant::now();
        let mut sim = simulator();
        for blank in ["", "   ", "\t\n"] {
            assert!(sim.submit(blank, start).is_none());
        }
        assert_eq!(sim.messages().len(), 1);
        assert_eq!(sim.pending_replies(), 0);
        assert_eq!(sim.next_deadline(), None);
    }

    #[test]
    fn test_user_text_is_kept_verbatim() {
        let mut sim = simulator();
        sim.submit("  padded  ", Instant::now()).unwrap();
        assert_eq!(sim.messages()[1].text, "  padded  ");
    }

    #[test]
    fn test_rapid_submissions_reply_in_order() {
        let start = Instant::now();
        let mut sim = simulator();
        sim.submit("one", start);
        sim.submit("two", start + Duration::from_millis(10));
        sim.submit("three", start + Duration::from_millis(20));
        assert_eq!(sim.pending_replies(), 3);
        assert_eq!(sim.next_deadline(), Some(start + DELAY));

        assert_eq!(sim.poll(start + DELAY + Duration::from_millis(10)), 2);
        assert_eq!(sim.poll(start + 2 * DELAY), 1);

        let senders: Vec<Sender> = sim.messages().iter().map(|m| m.sender).collect();
        assert_eq!(
            senders,
            vec![
                Sender::Assistant,
                Sender::User,
                Sender::User,
                Sender::User,
                Sender::Assistant,
                Sender::Assistant,
                Sender::Assistant,
            ]
        );
        let ids: Vec<u64> = sim.messages().iter().map(|m| m.id).collect();
        assert_eq!(ids, (1..=7).collect::<Vec<_>>());
    }

    #[test]
    fn test_cancelled_reply_is_not_appended() {
        let start = Instant::now();
        let mut sim = simulator();
        let first = sim.submit("first", start).unwrap();
        sim.submit("second", start);

        assert!(first.cancel());
        assert_eq!(sim.poll(start + DELAY), 1);
        assert_eq!(sim.messages().len(), 4);
        assert_eq!(first.state(), TaskState::Cancelled);
    }

    #[test]
    fn test_teardown_cancels_pending_replies() {
        let start = Instant::now();
        let mut sim = simulator();
        let handles: Vec<_> = ["a", "b"]
            .iter()
            .filter_map(|t| sim.submit(t, start))
            .collect();

        assert_eq!(sim.teardown(), 2);
        assert_eq!(sim.poll(start + 2 * DELAY), 0);
        assert_eq!(sim.messages().len(), 3);
        assert!(handles.iter().all(|h| h.state() == TaskState::Cancelled));
    }

    #[test]
    fn test_dropping_simulator_cancels_handles() {
        let start = Instant::now();
        let handle = {
            let mut sim = simulator();
            sim.submit("bye", start).unwrap()
        };
        assert_eq!(handle.state(), TaskState::Cancelled);
    }

    #[test]
    fn test_seeded_rng_makes_replies_reproducible() {
        let start = Instant::now();
        let mut a = simulator();
        let mut b = simulator();
        for text in ["budget?", "co-founder?", "runway?"] {
            a.submit(text, start);
            b.submit(text, start);
        }
        a.poll(start + DELAY);
        b.poll(start + DELAY);

        let texts = |sim: &ConversationSimulator<StdRng>| {
            sim.messages()
                .iter()
                .map(|m| m.text.clone())
                .collect::<Vec<_>>()
        };
        assert_eq!(texts(&a), texts(&b));
    }
}

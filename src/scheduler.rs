//! Single-threaded timer queue for deferred work.
//!
//! Tasks are ordered by deadline, then by the order they were scheduled, so
//! tasks sharing a delay come out first-in first-out. Time is always passed
//! in by the caller; the queue never reads the clock itself.

use std::cell::Cell;
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::rc::Rc;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(u64);

impl TaskId {
    pub fn get(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskState {
    Scheduled,
    Delivered,
    Cancelled,
}

/// Caller-side view of a scheduled task.
#[derive(Debug, Clone)]
pub struct TaskHandle {
    id: TaskId,
    deadline: Instant,
    state: Rc<Cell<TaskState>>,
}

impl TaskHandle {
    pub fn id(&self) -> TaskId {
        self.id
    }

    pub fn deadline(&self) -> Instant {
        self.deadline
    }

    pub fn state(&self) -> TaskState {
        self.state.get()
    }

    pub fn is_pending(&self) -> bool {
        self.state() == TaskState::Scheduled
    }

    /// Returns `false` if the task already fired or was cancelled.
    pub fn cancel(&self) -> bool {
        if self.is_pending() {
            self.state.set(TaskState::Cancelled);
            true
        } else {
            false
        }
    }
}

#[derive(Debug)]
struct Entry<T> {
    deadline: Instant,
    seq: u64,
    state: Rc<Cell<TaskState>>,
    payload: T,
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.deadline == other.deadline && self.seq == other.seq
    }
}

impl<T> Eq for Entry<T> {}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Entry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.deadline
            .cmp(&other.deadline)
            .then(self.seq.cmp(&other.seq))
    }
}

/// A task whose deadline has passed, handed back by [`TimerQueue::pop_due`].
#[derive(Debug)]
pub struct Due<T> {
    pub id: TaskId,
    pub payload: T,
}

#[derive(Debug)]
pub struct TimerQueue<T> {
    entries: BinaryHeap<Reverse<Entry<T>>>,
    next_seq: u64,
}

impl<T> TimerQueue<T> {
    pub fn new() -> Self {
        Self {
            entries: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    pub fn schedule(&mut self, now: Instant, delay: Duration, payload: T) -> TaskHandle {
        let seq = self.next_seq;
        self.next_seq += 1;

        let deadline = now + delay;
        let state = Rc::new(Cell::new(TaskState::Scheduled));
        self.entries.push(Reverse(Entry {
            deadline,
            seq,
            state: Rc::clone(&state),
            payload,
        }));

        TaskHandle {
            id: TaskId(seq),
            deadline,
            state,
        }
    }

    /// Pops the earliest live task whose deadline is at or before `now` and
    /// marks it delivered. Cancelled tasks are discarded on the way.
    pub fn pop_due(&mut self, now: Instant) -> Option<Due<T>> {
        self.prune_cancelled();

        let due = matches!(self.entries.peek(), Some(Reverse(top)) if top.deadline <= now);
        if !due {
            return None;
        }

        let Reverse(entry) = self.entries.pop()?;
        entry.state.set(TaskState::Delivered);
        Some(Due {
            id: TaskId(entry.seq),
            payload: entry.payload,
        })
    }

    /// Earliest deadline among tasks that are still scheduled.
    pub fn next_deadline(&mut self) -> Option<Instant> {
        self.prune_cancelled();
        self.entries.peek().map(|Reverse(entry)| entry.deadline)
    }

    pub fn pending(&self) -> usize {
        self.entries
            .iter()
            .filter(|Reverse(entry)| entry.state.get() == TaskState::Scheduled)
            .count()
    }

    pub fn is_idle(&self) -> bool {
        self.pending() == 0
    }

    /// Cancels every scheduled task and empties the queue.
    pub fn cancel_all(&mut self) -> usize {
        let mut cancelled = 0;
        for Reverse(entry) in self.entries.drain() {
            if entry.state.get() == TaskState::Scheduled {
                entry.state.set(TaskState::Cancelled);
                cancelled += 1;
            }
        }
        cancelled
    }

    fn prune_cancelled(&mut self) {
        while let Some(Reverse(top)) = self.entries.peek() {
            if top.state.get() != TaskState::Cancelled {
                break;
            }
            self.entries.pop();
        }
    }
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

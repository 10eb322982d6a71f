//! One-shot timers and clocks behind small traits.
//!
//! # Design
//! - Dropping a timer handle cancels the timer, matching `gloo` timeouts.
//! - Delays are clamped to the browser `setTimeout` ceiling; callers re-check
//!   the deadline when a clamped timer fires.
//! - Virtual-time implementations live here so headless hosts and tests
//!   share one scheduler.

use chrono::{DateTime, Utc};
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};
use std::time::Duration;

/// Largest delay a browser timer accepts (`i32::MAX` milliseconds).
pub const MAX_TIMER_DELAY: Duration = Duration::from_millis(2_147_483_647);

/// Deferred work run by a timer.
pub type TimerTask = Box<dyn FnOnce()>;

/// Source of the current time.
pub trait Clock {
    /// Current instant.
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Arms one-shot timers.
pub trait TimerScheduler {
    /// Handle that cancels the timer when dropped.
    type Handle;

    /// Run `task` once after `delay`.
    fn schedule(&self, delay: Duration, task: TimerTask) -> Self::Handle;
}

/// Clamp `delay` to [`MAX_TIMER_DELAY`].
#[must_use]
pub fn clamp_delay(delay: Duration) -> Duration {
    delay.min(MAX_TIMER_DELAY)
}

/// Delay from `now` until `deadline`: zero when already past, clamped when
/// too far out.
#[must_use]
pub fn delay_until(now: DateTime<Utc>, deadline: DateTime<Utc>) -> Duration {
    (deadline - now)
        .to_std()
        .map_or(Duration::ZERO, clamp_delay)
}

/// Clock whose time only moves when told to.
#[derive(Clone)]
pub struct ManualClock {
    now: Rc<Cell<DateTime<Utc>>>,
}

impl ManualClock {
    /// Start the clock at `start`.
    #[must_use]
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            now: Rc::new(Cell::new(start)),
        }
    }

    /// Move the clock forward.
    pub fn advance(&self, by: Duration) {
        let step = chrono::Duration::from_std(by).unwrap_or(chrono::Duration::MAX);
        let next = self
            .now
            .get()
            .checked_add_signed(step)
            .unwrap_or(DateTime::<Utc>::MAX_UTC);
        self.now.set(next);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        self.now.get()
    }
}

impl fmt::Debug for ManualClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ManualClock").field(&self.now.get()).finish()
    }
}

struct PendingTimer {
    id: u64,
    due: Duration,
    task: TimerTask,
}

#[derive(Default)]
struct TimerQueue {
    elapsed: Duration,
    next_id: u64,
    pending: Vec<PendingTimer>,
}

/// Virtual-time scheduler: timers fire only from [`ManualScheduler::advance`].
///
/// When paired with a [`ManualClock`], advancing both by the same step keeps
/// wall time and timer time in lockstep.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    queue: Rc<RefCell<TimerQueue>>,
}

/// Cancels its [`ManualScheduler`] timer on drop.
pub struct ManualTimerHandle {
    id: u64,
    queue: Weak<RefCell<TimerQueue>>,
}

impl Drop for ManualTimerHandle {
    fn drop(&mut self) {
        if let Some(queue) = self.queue.upgrade() {
            queue.borrow_mut().pending.retain(|timer| timer.id != self.id);
        }
    }
}

impl fmt::Debug for ManualTimerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ManualTimerHandle").field("id", &self.id).finish()
    }
}

impl ManualScheduler {
    /// Number of timers still waiting to fire.
    #[must_use]
    pub fn armed(&self) -> usize {
        self.queue.borrow().pending.len()
    }

    /// Time until the earliest pending timer fires.
    #[must_use]
    pub fn next_delay(&self) -> Option<Duration> {
        let queue = self.queue.borrow();
        queue
            .pending
            .iter()
            .map(|timer| timer.due.saturating_sub(queue.elapsed))
            .min()
    }

    /// Advance virtual time, firing every timer that comes due in order.
    /// Returns how many timers fired.
    pub fn advance(&self, by: Duration) -> usize {
        let target = self.queue.borrow().elapsed.saturating_add(by);
        let mut fired = 0;
        loop {
            // The queue borrow must end before the task runs: tasks schedule
            // and cancel timers on this same queue.
            let next = {
                let mut queue = self.queue.borrow_mut();
                let due_index = queue
                    .pending
                    .iter()
                    .enumerate()
                    .filter(|(_, timer)| timer.due <= target)
                    .min_by_key(|(_, timer)| (timer.due, timer.id))
                    .map(|(index, _)| index);
                due_index.map(|index| {
                    let timer = queue.pending.remove(index);
                    queue.elapsed = queue.elapsed.max(timer.due);
                    timer.task
                })
            };
            let Some(task) = next else { break };
            task();
            fired += 1;
        }
        self.queue.borrow_mut().elapsed = target;
        fired
    }
}

impl TimerScheduler for ManualScheduler {
    type Handle = ManualTimerHandle;

    fn schedule(&self, delay: Duration, task: TimerTask) -> Self::Handle {
        let mut queue = self.queue.borrow_mut();
        let id = queue.next_id;
        queue.next_id += 1;
        let due = queue.elapsed.saturating_add(delay);
        queue.pending.push(PendingTimer { id, due, task });
        ManualTimerHandle {
            id,
            queue: Rc::downgrade(&self.queue),
        }
    }
}

impl fmt::Debug for ManualScheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let queue = self.queue.borrow();
        f.debug_struct("ManualScheduler")
            .field("elapsed", &queue.elapsed)
            .field("armed", &queue.pending.len())
            .finish()
    }
}

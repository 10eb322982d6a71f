//! `setTimeout`-backed expiry timers.

use crate::core::timer::{MAX_TIMER_DELAY, TimerScheduler, TimerTask, clamp_delay};
use gloo::timers::callback::Timeout;
use std::time::Duration;

/// Schedules timers on the browser event loop; dropping the returned
/// [`Timeout`] cancels it.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct GlooScheduler;

impl TimerScheduler for GlooScheduler {
    type Handle = Timeout;

    fn schedule(&self, delay: Duration, task: TimerTask) -> Self::Handle {
        Timeout::new(delay_millis(delay), task)
    }
}

fn delay_millis(delay: Duration) -> u32 {
    let millis = clamp_delay(delay).as_millis();
    u32::try_from(millis).unwrap_or_else(|_| {
        u32::try_from(MAX_TIMER_DELAY.as_millis()).unwrap_or(u32::MAX)
    })
}

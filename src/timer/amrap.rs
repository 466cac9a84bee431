//! AMRAP (As Many Rounds As Possible) tick algorithm.
//!
//! AMRAP is a single countdown; rounds are counted by the athlete, not the
//! timer.

use tracing::debug;

use super::{countdown_tick, Timer, TimerEvent, ONE_MINUTE_WARNING, TICK};
use crate::types::Phase;

/// Advances an AMRAP timer by one second.
///
/// Completion stops the timer and is reported as `IntervalChange(Rest)`;
/// AMRAP has no real rest phase.
pub(super) fn tick(timer: &mut Timer, events: &mut Vec<TimerEvent>) {
    timer.elapsed += TICK;

    let remaining = timer.duration.saturating_sub(timer.elapsed);
    events.extend(countdown_tick(remaining));

    // Integer ticks land on the minute mark exactly once.
    if remaining == ONE_MINUTE_WARNING {
        events.push(TimerEvent::CountdownTick {
            seconds_remaining: ONE_MINUTE_WARNING.as_secs(),
        });
    }

    if timer.elapsed >= timer.duration {
        timer.running = false;
        debug!("AMRAP complete");
        events.push(TimerEvent::IntervalChange { phase: Phase::Rest });
    }
}

//! EMOM (Every Minute On the Minute) tick algorithm.

use std::time::Duration;

use tracing::debug;

use super::{countdown_tick, Timer, TimerEvent, EMOM_INTERVAL, TICK};
use crate::types::Phase;

/// Advances an EMOM timer by one second.
///
/// Every full minute starts a new round. The phase is always `Work`; the
/// interval event is emitted so consumers can treat every mode alike.
pub(super) fn tick(timer: &mut Timer, events: &mut Vec<TimerEvent>) {
    timer.elapsed += TICK;

    if timer.elapsed >= EMOM_INTERVAL {
        timer.elapsed = Duration::ZERO;
        timer.round += 1;
        debug!(round = timer.round, "EMOM minute complete");

        events.push(TimerEvent::RoundChange { round: timer.round });
        events.push(TimerEvent::IntervalChange { phase: Phase::Work });
    }

    events.extend(countdown_tick(EMOM_INTERVAL.saturating_sub(timer.elapsed)));
}

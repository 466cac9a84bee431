//! Work/rest interval tick algorithm shared by Tabata and Custom modes.

use std::time::Duration;

use tracing::debug;

use super::{countdown_tick, Timer, TimerEvent, TICK};
use crate::types::Phase;

/// Advances an interval timer by one second.
///
/// The 3-2-1 countdown runs at the end of both work and rest intervals.
/// Finishing a rest interval starts the next round. Rounds keep counting
/// past the target if the caller keeps ticking.
pub(super) fn tick(timer: &mut Timer, events: &mut Vec<TimerEvent>) {
    timer.elapsed += TICK;

    let current = timer.phase_duration();
    events.extend(countdown_tick(current.saturating_sub(timer.elapsed)));

    if timer.elapsed < current {
        return;
    }

    timer.elapsed = Duration::ZERO;
    match timer.phase {
        Phase::Work | Phase::Countdown => {
            timer.phase = Phase::Rest;
        }
        Phase::Rest => {
            timer.phase = Phase::Work;
            timer.round += 1;
            events.push(TimerEvent::RoundChange { round: timer.round });
        }
    }
    debug!(phase = %timer.phase, round = timer.round, "Interval complete");

    events.push(TimerEvent::IntervalChange { phase: timer.phase });
}

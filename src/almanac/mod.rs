//! Rise, set and transit searches
//!
//! Each search walks the interval `[start, end]` in fixed two-minute steps
//! and observes the body at every sample. The reported time is the sample at
//! which the event was detected, so precision is one step. The first sample
//! has no predecessor and can never be reported as a rise or set.

use chrono::Duration;
use log::{debug, trace};

use crate::celestial::CelestialObject;
use crate::coordinates::Angle;
use crate::observer::Observer;
use crate::time::SampleTime;

/// Sampling interval of the searches, in minutes
pub const STEP_MINUTES: i64 = 2;

fn step() -> Duration {
    Duration::minutes(STEP_MINUTES)
}

/// Sample instants `start + n·step` that do not pass `end`
fn sample_times<T: SampleTime>(start: T, end: T) -> impl Iterator<Item = T> {
    let step = step();
    (0..)
        .map(move |n| start.add_steps(step, n))
        .take_while(move |t| *t <= end)
}

/// First sample at which the body is above the horizon after a sample at or
/// below it
pub fn find_rise_time<T: SampleTime>(
    observer: &Observer,
    body: &impl CelestialObject,
    start: T,
    end: T,
) -> Option<T> {
    let found = first_transition(observer, body, start, end, |was_above, is_above| {
        !was_above && is_above
    });
    if let Some(t) = &found {
        debug!("rise found at {}", t.julian_date());
    }
    found
}

/// First sample at which the body is at or below the horizon after a sample
/// above it
pub fn find_set_time<T: SampleTime>(
    observer: &Observer,
    body: &impl CelestialObject,
    start: T,
    end: T,
) -> Option<T> {
    let found = first_transition(observer, body, start, end, |was_above, is_above| {
        was_above && !is_above
    });
    if let Some(t) = &found {
        debug!("set found at {}", t.julian_date());
    }
    found
}

/// Sample of greatest altitude and that altitude
///
/// On a plateau the earliest sample wins. `None` only when `end` is before
/// `start`.
pub fn find_transit_time<T: SampleTime>(
    observer: &Observer,
    body: &impl CelestialObject,
    start: T,
    end: T,
) -> Option<(T, Angle)> {
    let samples = sample_times(start, end)
        .map(|t| (t, observer.observe(body, t.julian_date()).altitude));
    let found = transit_from_samples(samples);
    if let Some((t, alt)) = &found {
        debug!("transit at {} with altitude {}", t.julian_date(), alt);
    }
    found
}

fn first_transition<T, F>(
    observer: &Observer,
    body: &impl CelestialObject,
    start: T,
    end: T,
    is_event: F,
) -> Option<T>
where
    T: SampleTime,
    F: Fn(bool, bool) -> bool,
{
    let mut previous: Option<bool> = None;
    for t in sample_times(start, end) {
        let above = observer.observe(body, t.julian_date()).is_above_horizon();
        trace!("{}: above horizon = {}", t.julian_date(), above);
        if let Some(was_above) = previous {
            if is_event(was_above, above) {
                return Some(t);
            }
        }
        previous = Some(above);
    }
    None
}

fn transit_from_samples<T>(samples: impl Iterator<Item = (T, Angle)>) -> Option<(T, Angle)> {
    let mut best: Option<(T, Angle)> = None;
    for (t, alt) in samples {
        let higher = match &best {
            Some((_, best_alt)) => alt.radians() > best_alt.radians(),
            None => true,
        };
        if higher {
            best = Some((t, alt));
        }
    }
    best
}

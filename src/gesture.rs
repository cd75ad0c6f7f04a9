// File: ./src/gesture.rs
use crate::geometry::Point;
use std::time::{Duration, Instant};

/// Recognises a double click from two primary presses.
#[derive(Debug, Clone)]
pub struct ClickTracker {
    interval: Duration,
    tolerance: f32,
    last: Option<(Instant, Point)>,
}

impl ClickTracker {
    pub fn new(interval: Duration, tolerance: f32) -> Self {
        Self {
            interval,
            tolerance,
            last: None,
        }
    }

    /// Registers a press and reports whether it completes a double click.
    /// A completed double click starts the count over.
    pub fn press(&mut self, at: Point, now: Instant) -> bool {
        let is_double = match self.last {
            Some((when, pos)) => {
                now.saturating_duration_since(when) <= self.interval
                    && at.distance(pos) <= self.tolerance
            }
            None => false,
        };
        self.last = if is_double { None } else { Some((now, at)) };
        is_double
    }

    pub fn reset(&mut self) {
        self.last = None;
    }
}

/// Enables or suspends toggle handling on primary release.
///
/// Every suspension hands out a new generation; only the re-arm carrying the
/// latest generation turns handling back on, so a stale timer is ignored.
#[derive(Debug, Clone)]
pub struct ToggleGate {
    armed: bool,
    generation: u64,
}

impl Default for ToggleGate {
    fn default() -> Self {
        Self {
            armed: true,
            generation: 0,
        }
    }
}

impl ToggleGate {
    pub fn is_armed(&self) -> bool {
        self.armed
    }

    pub fn suspend(&mut self) -> u64 {
        self.armed = false;
        self.generation = self.generation.wrapping_add(1);
        self.generation
    }

    pub fn rearm(&mut self, generation: u64) -> bool {
        if self.armed || generation != self.generation {
            return false;
        }
        self.armed = true;
        true
    }
}

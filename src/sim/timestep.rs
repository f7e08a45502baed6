//! Fixed timestep scheduler
//!
//! Turns a stream of frame timestamps (milliseconds) into a whole number of
//! simulation ticks, so logic runs at a fixed rate whatever the display does.

use crate::consts::{MAX_SUBSTEPS, STEP_MS};

/// Slack on the step comparison so N whole steps of elapsed time run N ticks
/// despite rounding in the accumulated timestamp.
const STEP_TOLERANCE_MS: f64 = 1e-6;

#[derive(Debug, Clone)]
pub struct FixedTimestep {
    step_ms: f64,
    /// `None` until the first frame sets the baseline
    previous_time: Option<f64>,
    /// Catch-up cap; remaining backlog is dropped once hit
    max_ticks: Option<u32>,
}

impl Default for FixedTimestep {
    fn default() -> Self {
        Self::new(STEP_MS)
    }
}

impl FixedTimestep {
    /// Scheduler capped at `MAX_SUBSTEPS` ticks per frame
    pub fn new(step_ms: f64) -> Self {
        Self {
            step_ms,
            previous_time: None,
            max_ticks: Some(MAX_SUBSTEPS),
        }
    }

    /// Scheduler that always catches up fully, however long the gap
    pub fn uncapped(step_ms: f64) -> Self {
        Self {
            max_ticks: None,
            ..Self::new(step_ms)
        }
    }

    pub fn with_max_ticks(mut self, max_ticks: u32) -> Self {
        self.max_ticks = Some(max_ticks);
        self
    }

    pub fn step_ms(&self) -> f64 {
        self.step_ms
    }

    pub fn previous_time(&self) -> Option<f64> {
        self.previous_time
    }

    /// Forget the baseline; the next frame only re-establishes it
    pub fn reset(&mut self) {
        self.previous_time = None;
    }

    /// Feed one frame timestamp, calling `on_tick` once per due step.
    ///
    /// Returns the number of ticks run. The first frame only records the
    /// baseline and runs none.
    pub fn advance(&mut self, now: f64, mut on_tick: impl FnMut()) -> u32 {
        let Some(mut previous) = self.previous_time else {
            self.previous_time = Some(now);
            return 0;
        };

        let mut ticks = 0;
        while now - previous > self.step_ms - STEP_TOLERANCE_MS {
            if self.max_ticks.is_some_and(|max| ticks >= max) {
                log::warn!(
                    "Dropping {:.1}ms of simulation backlog after {} ticks",
                    now - previous,
                    ticks
                );
                previous = now;
                break;
            }
            previous += self.step_ms;
            ticks += 1;
            on_tick();
        }

        self.previous_time = Some(previous);
        ticks
    }
}

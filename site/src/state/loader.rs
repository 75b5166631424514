//! Splash-screen progress sequencer.
//!
//! The counter advances by `PROGRESS_STEP` every `TICK_INTERVAL_MS` until it
//! sits at `PROGRESS_CEILING`. The first tick that observes the ceiling
//! reports `Complete` exactly once; every tick after that is `Halted`.
//! `LoaderSequence` turns those ticks into timer delays and a single
//! `Reveal`, which arrives `COMPLETE_DELAY_MS` after completion.

#[cfg(test)]
#[path = "loader_test.rs"]
mod loader_test;

pub const PROGRESS_STEP: u8 = 2;
pub const PROGRESS_CEILING: u8 = 100;
pub const TICK_INTERVAL_MS: u32 = 30;
pub const COMPLETE_DELAY_MS: u32 = 500;

/// Outcome of one timer tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoaderTick {
    /// Progress moved to the contained value.
    Advanced(u8),
    /// Ceiling was already reached; schedule the completion callback.
    Complete,
    /// Completion was already reported.
    Halted,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoaderState {
    progress: u8,
    completed: bool,
}

impl LoaderState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn progress(&self) -> u8 {
        self.progress
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.completed
    }

    pub fn tick(&mut self) -> LoaderTick {
        if self.completed {
            return LoaderTick::Halted;
        }
        if self.progress >= PROGRESS_CEILING {
            self.completed = true;
            return LoaderTick::Complete;
        }
        self.progress = self.progress.saturating_add(PROGRESS_STEP).min(PROGRESS_CEILING);
        LoaderTick::Advanced(self.progress)
    }

    /// Progress bar width, e.g. `"42%"`.
    #[must_use]
    pub fn width_style(&self) -> String {
        format!("{}%", self.progress)
    }
}

/// What the loader's timer loop does after one step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoaderStep {
    /// Sleep this many milliseconds, then step again.
    Wait(u32),
    /// Run the completion callback, then stop.
    Reveal,
    Stop,
}

/// Drives a `LoaderState` from a timer and yields `Reveal` exactly once.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoaderSequence {
    reveal_pending: bool,
    revealed: bool,
}

impl LoaderSequence {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&mut self, state: &mut LoaderState) -> LoaderStep {
        if self.revealed {
            return LoaderStep::Stop;
        }
        if self.reveal_pending {
            self.revealed = true;
            return LoaderStep::Reveal;
        }
        match state.tick() {
            LoaderTick::Advanced(_) => LoaderStep::Wait(TICK_INTERVAL_MS),
            LoaderTick::Complete => {
                self.reveal_pending = true;
                LoaderStep::Wait(COMPLETE_DELAY_MS)
            }
            LoaderTick::Halted => LoaderStep::Stop,
        }
    }
}

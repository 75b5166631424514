//! Typewriter effect for the hero subtitle.
//!
//! Types the current phrase one character per step, holds it, deletes it,
//! then moves to the next phrase. Loops forever. `step` returns how long the
//! caller should wait before the next step.

#[cfg(test)]
#[path = "typing_test.rs"]
mod typing_test;

pub const TYPE_DELAY_MS: u32 = 60;
pub const DELETE_DELAY_MS: u32 = 30;
pub const HOLD_MS: u32 = 2_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TypingPhase {
    Typing,
    Holding,
    Deleting,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Typewriter {
    phrases: &'static [&'static str],
    phrase: usize,
    shown: usize,
    phase: TypingPhase,
}

impl Typewriter {
    #[must_use]
    pub fn new(phrases: &'static [&'static str]) -> Self {
        Self { phrases, phrase: 0, shown: 0, phase: TypingPhase::Typing }
    }

    #[must_use]
    pub fn phase(&self) -> TypingPhase {
        self.phase
    }

    #[must_use]
    pub fn phrase_index(&self) -> usize {
        self.phrase
    }

    fn current(&self) -> &'static str {
        self.phrases.get(self.phrase).copied().unwrap_or_default()
    }

    /// Text currently on screen.
    #[must_use]
    pub fn text(&self) -> String {
        self.current().chars().take(self.shown).collect()
    }

    /// Advance one step and return the delay before the next one.
    pub fn step(&mut self) -> u32 {
        if self.phrases.is_empty() {
            return HOLD_MS;
        }
        let full = self.current().chars().count();
        match self.phase {
            TypingPhase::Typing => {
                self.shown = (self.shown + 1).min(full);
                if self.shown == full {
                    self.phase = TypingPhase::Holding;
                    HOLD_MS
                } else {
                    TYPE_DELAY_MS
                }
            }
            TypingPhase::Holding => {
                self.phase = TypingPhase::Deleting;
                DELETE_DELAY_MS
            }
            TypingPhase::Deleting => {
                self.shown = self.shown.saturating_sub(1);
                if self.shown == 0 {
                    self.phrase = (self.phrase + 1) % self.phrases.len();
                    self.phase = TypingPhase::Typing;
                }
                if self.phase == TypingPhase::Typing { TYPE_DELAY_MS } else { DELETE_DELAY_MS }
            }
        }
    }
}

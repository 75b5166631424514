//! Count-up animation for the achievement counters.
//!
//! Stat strings are display text ("15,000+", "99.2%"). The counter animates
//! the integer part from zero and re-attaches the suffix.

#[cfg(test)]
#[path = "counter_test.rs"]
mod counter_test;

pub const COUNT_DURATION_MS: f64 = 2_000.0;
pub const COUNT_FRAME_MS: u32 = 30;

/// Split a display value into its integer part and suffix.
///
/// Digits after a decimal point are dropped. The suffix is `"%"` when the
/// value contains a percent sign and `"+"` otherwise.
#[must_use]
pub fn parse_stat_value(raw: &str) -> (u32, &'static str) {
    let whole = raw.split('.').next().unwrap_or_default();
    let number = whole
        .chars()
        .filter(char::is_ascii_digit)
        .fold(0u32, |acc, c| acc.saturating_mul(10).saturating_add(c.to_digit(10).unwrap_or(0)));
    let suffix = if raw.contains('%') { "%" } else { "+" };
    (number, suffix)
}

/// `15000` → `"15,000"`.
#[must_use]
pub fn format_thousands(n: u32) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Ease-out counter from 0 to `target` over `COUNT_DURATION_MS`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CountUp {
    target: u32,
    suffix: &'static str,
    started_at_ms: Option<f64>,
    value: u32,
}

impl CountUp {
    #[must_use]
    pub fn new(raw: &str) -> Self {
        let (target, suffix) = parse_stat_value(raw);
        Self { target, suffix, started_at_ms: None, value: 0 }
    }

    #[must_use]
    pub fn target(&self) -> u32 {
        self.target
    }

    #[must_use]
    pub fn value(&self) -> u32 {
        self.value
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.started_at_ms.is_some() && !self.is_done()
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        self.value == self.target && self.started_at_ms.is_some()
    }

    /// Start counting. Restarting an already started counter does nothing.
    pub fn start(&mut self, now_ms: f64) {
        if self.started_at_ms.is_none() {
            self.started_at_ms = Some(now_ms);
        }
    }

    /// Recompute the value for `now_ms`. Returns `true` once the target is reached.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn advance(&mut self, now_ms: f64) -> bool {
        let Some(start) = self.started_at_ms else {
            return false;
        };
        let t = ((now_ms - start) / COUNT_DURATION_MS).clamp(0.0, 1.0);
        let eased = 1.0 - (1.0 - t).powi(3);
        self.value = (f64::from(self.target) * eased).round() as u32;
        if t >= 1.0 {
            self.value = self.target;
        }
        self.is_done()
    }

    /// Rendered text, e.g. `"15,000+"`.
    #[must_use]
    pub fn display(&self) -> String {
        format!("{}{}", format_thousands(self.value), self.suffix)
    }
}

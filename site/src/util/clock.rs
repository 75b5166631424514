//! Wall-clock access and timer loops for the animated sections.
//!
//! Timer loops follow one shape: a `spawn_local` task sleeps, checks an
//! `alive` flag cleared by `on_cleanup`, then runs one step. A torn-down
//! view is therefore never called back.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

/// Milliseconds since the epoch in the browser; `0.0` during SSR.
pub fn now_ms() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}

/// Calendar year for the footer copyright line.
pub fn current_year() -> i32 {
    #[cfg(feature = "hydrate")]
    {
        i32::try_from(js_sys::Date::new_0().get_full_year()).unwrap_or(0)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let secs = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0, |d| d.as_secs());
        year_from_unix_days(i64::try_from(secs / 86_400).unwrap_or(0))
    }
}

/// Gregorian year containing the given day count since 1970-01-01.
#[must_use]
pub fn year_from_unix_days(days: i64) -> i32 {
    // Civil-from-days over 400-year eras starting 0000-03-01.
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z.rem_euclid(146_097);
    let yoe = (doe - doe / 1_460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = yoe + era * 400 + i64::from(month <= 2);
    i32::try_from(year).unwrap_or(i32::MAX)
}

/// Run `step` after `first_delay_ms`, then again after whatever delay it
/// returns, until it returns `None` or the current reactive owner is cleaned
/// up. Does nothing outside the browser.
pub fn run_timer_loop(first_delay_ms: u32, step: impl FnMut() -> Option<u32> + 'static) {
    #[cfg(feature = "hydrate")]
    {
        use std::sync::Arc;
        use std::sync::atomic::{AtomicBool, Ordering};
        use std::time::Duration;

        let mut step = step;
        let alive = Arc::new(AtomicBool::new(true));
        let alive_task = alive.clone();
        leptos::task::spawn_local(async move {
            let mut delay = first_delay_ms;
            loop {
                gloo_timers::future::sleep(Duration::from_millis(u64::from(delay))).await;
                if !alive_task.load(Ordering::Relaxed) {
                    break;
                }
                match step() {
                    Some(next) => delay = next,
                    None => break,
                }
            }
        });
        leptos::prelude::on_cleanup(move || alive.store(false, Ordering::Relaxed));
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (first_delay_ms, step);
    }
}

//! Browser helpers shared by the section components.
//!
//! Each helper splits into a pure part (unit-tested natively) and a thin
//! `hydrate`-only wrapper around the DOM API. SSR builds get inert stubs.

pub mod clock;
pub mod motion;
pub mod scroll;
pub mod viewport;

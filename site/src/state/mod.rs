//! Client-side state machines.
//!
//! DESIGN
//! ======
//! Each module is a plain Rust model with no Leptos or browser types, so the
//! behaviour is unit-testable natively. Components wrap them in `RwSignal`s
//! and drive them from timers and DOM events.

pub mod carousel;
pub mod contact;
pub mod counter;
pub mod faq;
pub mod loader;
pub mod typing;
pub mod ui;

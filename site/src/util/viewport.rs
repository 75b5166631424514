//! "Has this element entered the viewport" signals.
//!
//! `InViewLatch` holds the rule: with `once`, the flag latches on the first
//! intersection and never clears. `use_in_view` feeds it from an
//! `IntersectionObserver` in the browser. During SSR the flag stays `false`.
//! The observer lives in an `ObserverSlot` owned by the reactive scope and is
//! disconnected when that scope is cleaned up.

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

use leptos::html::ElementType;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Shrinks the observed root so elements count as visible a little late.
pub const ROOT_MARGIN: &str = "-100px";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InViewLatch {
    once: bool,
    visible: bool,
}

impl InViewLatch {
    #[must_use]
    pub fn new(once: bool) -> Self {
        Self { once, visible: false }
    }

    #[must_use]
    pub fn visible(&self) -> bool {
        self.visible
    }

    /// Whether further observations can still change the flag.
    #[must_use]
    pub fn settled(&self) -> bool {
        self.once && self.visible
    }

    /// Feed one observation. Returns `true` if the flag changed.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        if self.settled() || self.visible == intersecting {
            return false;
        }
        self.visible = intersecting;
        true
    }
}

/// Something that stops delivering callbacks when told to.
pub trait Disconnect {
    fn disconnect(&self);
}

/// Holds at most one live observer. Installing a new one or releasing the
/// slot disconnects the previous occupant.
pub struct ObserverSlot<T: Disconnect> {
    current: Option<T>,
}

impl<T: Disconnect> Default for ObserverSlot<T> {
    fn default() -> Self {
        Self { current: None }
    }
}

impl<T: Disconnect> ObserverSlot<T> {
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.current.is_some()
    }

    pub fn install(&mut self, observer: T) {
        if let Some(previous) = self.current.replace(observer) {
            previous.disconnect();
        }
    }

    /// Disconnect and drop the occupant. Returns `true` if there was one.
    pub fn release(&mut self) -> bool {
        match self.current.take() {
            Some(observer) => {
                observer.disconnect();
                true
            }
            None => false,
        }
    }
}

#[cfg(feature = "hydrate")]
struct ActiveObserver {
    observer: web_sys::IntersectionObserver,
    // Dropped only after `disconnect`, so the browser never calls a freed closure.
    _callback: wasm_bindgen::closure::Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>,
}

#[cfg(feature = "hydrate")]
impl Disconnect for ActiveObserver {
    fn disconnect(&self) {
        self.observer.disconnect();
    }
}

/// Reactive in-view flag for the element behind `node`.
pub fn use_in_view<E>(node: NodeRef<E>, once: bool) -> ReadSignal<bool>
where
    E: ElementType,
    E::Output: JsCast + Clone + 'static,
{
    let (visible, set_visible) = signal(false);

    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::closure::Closure;

        let slot = StoredValue::new_local(ObserverSlot::<ActiveObserver>::default());
        Effect::new(move || {
            let Some(el) = node.get() else {
                return;
            };
            if slot.with_value(ObserverSlot::is_active) {
                return;
            }

            let mut latch = InViewLatch::new(once);
            let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
                move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
                    for entry in entries.iter() {
                        let Ok(entry) = entry.dyn_into::<web_sys::IntersectionObserverEntry>() else {
                            continue;
                        };
                        if latch.observe(entry.is_intersecting()) {
                            set_visible.set(latch.visible());
                        }
                    }
                    if latch.settled() {
                        observer.disconnect();
                    }
                },
            );

            let init = web_sys::IntersectionObserverInit::new();
            init.set_root_margin(ROOT_MARGIN);
            match web_sys::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
                Ok(observer) => {
                    observer.observe(el.unchecked_ref::<web_sys::Element>());
                    slot.update_value(|s| s.install(ActiveObserver { observer, _callback: callback }));
                }
                Err(_) => {
                    // No observer support: show the content rather than hide it forever.
                    set_visible.set(true);
                }
            }
        });
        on_cleanup(move || {
            let _ = slot.try_update_value(ObserverSlot::release);
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (node, once, set_visible);
    }

    visible
}

use std::cell::Cell;
use std::rc::Rc;

use super::*;

#[test]
fn once_latch_stays_visible() {
    let mut latch = InViewLatch::new(true);
    assert!(latch.observe(true));
    assert!(latch.settled());
    assert!(!latch.observe(false));
    assert!(latch.visible());
}

#[test]
fn repeating_latch_follows_intersection() {
    let mut latch = InViewLatch::new(false);
    assert!(latch.observe(true));
    assert!(latch.observe(false));
    assert!(!latch.visible());
    assert!(!latch.settled());
}

#[test]
fn repeated_observation_is_not_a_change() {
    let mut latch = InViewLatch::new(false);
    assert!(!latch.observe(false));
    latch.observe(true);
    assert!(!latch.observe(true));
}

struct CountingObserver(Rc<Cell<u32>>);

impl Disconnect for CountingObserver {
    fn disconnect(&self) {
        self.0.set(self.0.get() + 1);
    }
}

#[test]
fn releasing_slot_disconnects_observer() {
    let disconnects = Rc::new(Cell::new(0));
    let mut slot = ObserverSlot::default();
    slot.install(CountingObserver(disconnects.clone()));
    assert!(slot.is_active());
    assert_eq!(disconnects.get(), 0);

    assert!(slot.release());
    assert_eq!(disconnects.get(), 1);
    assert!(!slot.is_active());
}

#[test]
fn releasing_empty_slot_is_noop() {
    let mut slot = ObserverSlot::<CountingObserver>::default();
    assert!(!slot.release());
}

#[test]
fn installing_replacement_disconnects_previous() {
    let first = Rc::new(Cell::new(0));
    let second = Rc::new(Cell::new(0));
    let mut slot = ObserverSlot::default();
    slot.install(CountingObserver(first.clone()));
    slot.install(CountingObserver(second.clone()));
    assert_eq!(first.get(), 1);
    assert_eq!(second.get(), 0);

    slot.release();
    assert_eq!(second.get(), 1);
}

use super::*;

#[test]
fn default_has_nothing_open() {
    let faq = FaqAccordion::default();
    assert_eq!(faq.open_index(), None);
}

#[test]
fn new_respects_default_open_index() {
    let faq = FaqAccordion::new(Some(0));
    assert!(faq.is_open(0));
    assert!(!faq.is_open(1));
}

#[test]
fn toggling_closed_question_closes_previous() {
    let mut faq = FaqAccordion::new(Some(0));
    faq.toggle(3);
    assert!(faq.is_open(3));
    assert!(!faq.is_open(0));
    assert_eq!(faq.open_index(), Some(3));
}

#[test]
fn toggling_open_question_collapses_it() {
    let mut faq = FaqAccordion::new(Some(2));
    faq.toggle(2);
    assert_eq!(faq.open_index(), None);
}

#[test]
fn at_most_one_open_after_any_toggle_sequence() {
    let mut faq = FaqAccordion::default();
    for index in [0, 1, 1, 4, 2, 2, 5, 0] {
        faq.toggle(index);
        let open = (0..6).filter(|i| faq.is_open(*i)).count();
        assert!(open <= 1);
    }
}

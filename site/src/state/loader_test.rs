use super::*;

fn run_until_complete(state: &mut LoaderState) -> (Vec<u8>, usize) {
    let mut seen = Vec::new();
    let mut ticks = 0;
    loop {
        ticks += 1;
        match state.tick() {
            LoaderTick::Advanced(p) => seen.push(p),
            LoaderTick::Complete => return (seen, ticks),
            LoaderTick::Halted => panic!("halted before completing"),
        }
    }
}

#[test]
fn starts_at_zero() {
    let state = LoaderState::new();
    assert_eq!(state.progress(), 0);
    assert!(!state.is_complete());
    assert_eq!(state.width_style(), "0%");
}

#[test]
fn first_tick_advances_by_step() {
    let mut state = LoaderState::new();
    assert_eq!(state.tick(), LoaderTick::Advanced(PROGRESS_STEP));
}

#[test]
fn reaches_exactly_ceiling_before_completion() {
    let mut state = LoaderState::new();
    let (seen, ticks) = run_until_complete(&mut state);
    assert_eq!(seen.last().copied(), Some(PROGRESS_CEILING));
    assert!(seen.windows(2).all(|w| w[1] == w[0] + PROGRESS_STEP));
    assert_eq!(ticks, usize::from(PROGRESS_CEILING / PROGRESS_STEP) + 1);
    assert_eq!(state.progress(), PROGRESS_CEILING);
    assert!(state.is_complete());
}

#[test]
fn completion_reported_exactly_once() {
    let mut state = LoaderState::new();
    run_until_complete(&mut state);
    let extra = (0..20).map(|_| state.tick()).collect::<Vec<_>>();
    assert!(extra.iter().all(|t| *t == LoaderTick::Halted));
    assert_eq!(state.progress(), PROGRESS_CEILING);
}

#[test]
fn width_style_tracks_progress() {
    let mut state = LoaderState::new();
    for _ in 0..21 {
        state.tick();
    }
    assert_eq!(state.width_style(), "42%");
}

// =============================================================
// LoaderSequence
// =============================================================

fn drive(sequence: &mut LoaderSequence, state: &mut LoaderState, max_steps: usize) -> Vec<LoaderStep> {
    let mut steps = Vec::new();
    for _ in 0..max_steps {
        let step = sequence.step(state);
        steps.push(step);
        if step != LoaderStep::Wait(TICK_INTERVAL_MS) && step != LoaderStep::Wait(COMPLETE_DELAY_MS) {
            break;
        }
    }
    steps
}

#[test]
fn sequence_reveals_once_after_completion_delay() {
    let mut sequence = LoaderSequence::new();
    let mut state = LoaderState::new();
    let steps = drive(&mut sequence, &mut state, 200);

    let ticks = usize::from(PROGRESS_CEILING / PROGRESS_STEP);
    assert_eq!(steps.len(), ticks + 2);
    assert!(steps[..ticks].iter().all(|s| *s == LoaderStep::Wait(TICK_INTERVAL_MS)));
    assert_eq!(steps[ticks], LoaderStep::Wait(COMPLETE_DELAY_MS));
    assert_eq!(steps[ticks + 1], LoaderStep::Reveal);
    assert_eq!(state.progress(), PROGRESS_CEILING);
}

#[test]
fn sequence_stops_after_reveal() {
    let mut sequence = LoaderSequence::new();
    let mut state = LoaderState::new();
    drive(&mut sequence, &mut state, 200);
    for _ in 0..5 {
        assert_eq!(sequence.step(&mut state), LoaderStep::Stop);
    }
}

#[test]
fn sequence_on_already_completed_state_stops_without_reveal() {
    let mut state = LoaderState::new();
    run_until_complete(&mut state);
    let mut sequence = LoaderSequence::new();
    assert_eq!(sequence.step(&mut state), LoaderStep::Stop);
}

//! End-to-end tests for the full show, run against captured output with a
//! seeded generator and no real sleeping.

use ansi_hello::animation::ITERATIONS;
use ansi_hello::{show, CaptureSink, NoSleep, RecordingSleeper, Title, AUTHOR, PAYLOAD};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::time::Duration;

use crate::helpers::strip_ansi;

fn captured_show(seed: u64) -> CaptureSink {
    let mut sink = CaptureSink::new();
    let mut rng = SmallRng::seed_from_u64(seed);
    show::run(&mut sink, &mut rng, &NoSleep).unwrap();
    sink
}

#[test]
fn visible_output_contains_the_full_title_in_order() {
    let sink = captured_show(1);
    let visible = strip_ansi(&sink.stream());

    let full_title: String = Title::new().fragments().concat();
    assert_eq!(
        full_title,
        "°·.°·..·°( It's not my first \"Hello, World !!!\" )°·..·°·.°"
    );
    assert!(visible.contains(&full_title));
}

#[test]
fn visible_output_credits_the_author() {
    let visible = strip_ansi(&captured_show(2).stream());

    assert!(visible.contains("- Developed by: "));
    // Typed once, then rewritten once with blink.
    assert_eq!(visible.matches(AUTHOR).count(), 2);
}

#[test]
fn payload_is_typed_before_the_scramble() {
    let visible = strip_ansi(&captured_show(3).stream());
    let typed = visible.find(PAYLOAD).unwrap();
    let scrambled_region = &visible[typed + PAYLOAD.len()..];

    // Everything after the typed payload is countdown digits and single
    // re-cased payload characters.
    assert!(!scrambled_region.is_empty());
}

#[test]
fn frame_rule_width_tracks_the_title_length() {
    let sink = captured_show(4);
    let width = Title::new().total_len() + 4;

    assert_eq!(sink.stream().matches('═').count(), 2 * width);
}

#[test]
fn animation_runs_its_full_budget() {
    let sink = captured_show(5);
    let stream = sink.stream();

    assert_eq!(ITERATIONS, 4096);
    // The countdown's final value lands at zero.
    assert!(stream.ends_with("\x1b[11;1f\x1b[0m\x1b[?25h"));
    let before_tail = &stream[..stream.len() - "\x1b[11;1f\x1b[0m\x1b[?25h".len()];
    assert!(before_tail.ends_with("\x1b[0;2;3;90m0"));
}

#[test]
fn every_timed_step_is_a_blocking_sleep_request() {
    let mut sink = CaptureSink::new();
    let mut rng = SmallRng::seed_from_u64(6);
    let sleeper = RecordingSleeper::new();
    show::run(&mut sink, &mut rng, &sleeper).unwrap();

    let recorded = sleeper.recorded();
    // One 1 ms sleep per animation iteration, among all the others.
    let animation_ticks = recorded
        .iter()
        .filter(|d| **d == Duration::from_millis(1))
        .count();
    assert_eq!(animation_ticks, ITERATIONS as usize);

    // Three deliberate 2 s pauses: credit label, blink re-emphasis, payload.
    let long_pauses = recorded
        .iter()
        .filter(|d| **d == Duration::from_millis(2000))
        .count();
    assert_eq!(long_pauses, 3);
}

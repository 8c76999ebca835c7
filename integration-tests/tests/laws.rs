use integration_tests::{CallCounter, Recorder};
use splice_core::{Step, compose, compose_optional, identity, pipe, step, tap};

fn add_three(x: i64) -> i64 {
    x + 3
}

fn square(x: i64) -> i64 {
    x * x
}

fn label(x: i64) -> String {
    format!("<{x}>")
}

const SAMPLES: [i64; 7] = [-100, -7, -1, 0, 1, 12, 4096];

#[test]
fn compose_equals_nested_application() {
    let composed = compose(add_three, square);

    for a in SAMPLES {
        assert_eq!(composed(a), square(add_three(a)));
    }
}

#[test]
fn compose_is_associative() {
    let left = compose(compose(add_three, square), label);
    let right = compose(add_three, compose(square, label));
    let piped = pipe!(add_three, square, label);
    let stepped = step(add_three).then(step(square)).then(step(label));

    for a in SAMPLES {
        let expected = label(square(add_three(a)));
        assert_eq!(left(a), expected);
        assert_eq!(right(a), expected);
        assert_eq!(piped(a), expected);
        assert_eq!(stepped.call(a), expected);
    }
}

#[test]
fn identity_is_neutral_on_both_sides() {
    let padded = identity().then(step(square)).then(identity());

    for a in SAMPLES {
        assert_eq!(padded.call(a), square(a));
    }
}

#[test]
fn tap_returns_first_result_and_observes_once() {
    let recorder: Recorder<i64> = Recorder::new();
    let tapped = tap(square, recorder.observer());

    let results: Vec<i64> = SAMPLES.into_iter().map(&tapped).collect();

    let expected: Vec<i64> = SAMPLES.into_iter().map(square).collect();
    assert_eq!(results, expected);
    assert_eq!(recorder.seen(), expected);
}

#[test]
fn step_tap_matches_free_tap() {
    let free: Recorder<i64> = Recorder::new();
    let fluent: Recorder<i64> = Recorder::new();

    let free_tapped = tap(add_three, free.observer());
    let fluent_tapped = step(add_three).tap(fluent.observer());

    for a in SAMPLES {
        assert_eq!(free_tapped(a), fluent_tapped.call(a));
    }
    assert_eq!(free.seen(), fluent.seen());
}

#[test]
fn optional_absent_never_calls_second() {
    let second = CallCounter::new();
    let composed = compose_optional(
        |a: i64| (a >= 0).then_some(a),
        second.counted(|b: i64| u32::try_from(b).ok()),
    );

    assert_eq!(composed(-5), None);
    assert_eq!(composed(-1), None);
    assert_eq!(second.calls(), 0);
}

#[test]
fn optional_present_equals_second_applied() {
    let first = |a: i64| (a >= 0).then_some(a);
    let second = |b: i64| u8::try_from(b).ok();
    let composed = compose_optional(first, second);

    for a in SAMPLES {
        let expected = first(a).and_then(second);
        assert_eq!(composed(a), expected);
    }
    assert_eq!(composed(12), Some(12));
    assert_eq!(composed(4096), None);
}

#[test]
fn fluent_and_then_matches_compose_optional() {
    let first = |a: i64| (a % 2 == 0).then_some(a / 2);
    let second = |b: i64| b.checked_sub(1).filter(|c| *c != 0);

    let free = compose_optional(first, second);
    let fluent = step(first).and_then(step(second));

    for a in SAMPLES {
        assert_eq!(free(a), fluent.call(a));
    }
}

#[test]
fn composed_functions_are_shareable_across_threads() {
    let recorder: Recorder<i64> = Recorder::new();
    let composed = tap(compose(add_three, square), recorder.observer());

    std::thread::scope(|scope| {
        for a in [1, 2, 3] {
            let composed = &composed;
            scope.spawn(move || composed(a));
        }
    });

    let mut seen = recorder.seen();
    seen.sort_unstable();
    assert_eq!(seen, vec![16, 25, 36]);
}

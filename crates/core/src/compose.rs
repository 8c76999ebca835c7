/// Composes two functions so the output of `first` feeds `second`.
///
/// The returned function calls `first` with its input, passes the result to
/// `second`, and returns whatever `second` returns.
///
/// # Example
///
/// ```
/// use splice_core::compose;
///
/// let length_of_doubled = compose(|s: &str| s.repeat(2), |s: String| s.len());
/// assert_eq!(length_of_doubled("abc"), 6);
/// ```
pub fn compose<A, B, C>(first: impl Fn(A) -> B, second: impl Fn(B) -> C) -> impl Fn(A) -> C {
    move |input| second(first(input))
}

/// Composes a function with an observer that sees, but never changes, its output.
///
/// The returned function calls `first`, hands a reference to the result to
/// `observer`, discards whatever the observer returns, and then returns the
/// result of `first` unchanged. The observer runs exactly once per call.
///
/// # Example
///
/// ```
/// use std::cell::RefCell;
/// use splice_core::tap;
///
/// let seen = RefCell::new(Vec::new());
/// let double = tap(|x: i32| x * 2, |x: &i32| seen.borrow_mut().push(*x));
///
/// assert_eq!(double(21), 42);
/// assert_eq!(*seen.borrow(), vec![42]);
/// ```
pub fn tap<A, B, R>(first: impl Fn(A) -> B, observer: impl Fn(&B) -> R) -> impl Fn(A) -> B {
    move |input| {
        let output = first(input);
        observer(&output);
        output
    }
}

/// Composes two `Option`-returning functions, stopping at the first `None`.
///
/// When `first` returns `None`, the composed function returns `None` and
/// `second` is never called. Otherwise the present value is unwrapped and
/// passed to `second`, whose result is returned as is.
///
/// # Example
///
/// ```
/// use splice_core::compose_optional;
///
/// let parse_then_halve = compose_optional(
///     |s: &str| s.parse::<u32>().ok(),
///     |n: u32| (n % 2 == 0).then_some(n / 2),
/// );
///
/// assert_eq!(parse_then_halve("42"), Some(21));
/// assert_eq!(parse_then_halve("41"), None);
/// assert_eq!(parse_then_halve("forty-two"), None);
/// ```
pub fn compose_optional<A, B, C>(
    first: impl Fn(A) -> Option<B>,
    second: impl Fn(B) -> Option<C>,
) -> impl Fn(A) -> Option<C> {
    move |input| second(first(input)?)
}

/// Composes two fallible functions that share an error type.
///
/// When `first` returns `Err`, that error is returned unchanged and `second`
/// is never called.
pub fn compose_result<A, B, C, E>(
    first: impl Fn(A) -> Result<B, E>,
    second: impl Fn(B) -> Result<C, E>,
) -> impl Fn(A) -> Result<C, E> {
    move |input| second(first(input)?)
}

#[cfg(test)]
mod tests {
    use std::{
        cell::{Cell, RefCell},
        num::ParseIntError,
    };

    use super::*;

    fn add_one(x: i32) -> i32 {
        x + 1
    }

    fn double(x: i32) -> i32 {
        x * 2
    }

    fn describe(x: i32) -> String {
        format!("value is {x}")
    }

    #[test]
    fn compose_applies_first_then_second() {
        let composed = compose(add_one, double);

        for x in [-3, 0, 7, 100] {
            assert_eq!(composed(x), double(add_one(x)));
        }
        assert_eq!(composed(7), 16);
    }

    #[test]
    fn compose_changes_types() {
        let composed = compose(double, describe);
        assert_eq!(composed(21), "value is 42");
    }

    #[test]
    fn compose_is_associative() {
        let left = compose(compose(add_one, double), describe);
        let right = compose(add_one, compose(double, describe));

        for x in [-10, -1, 0, 1, 5, 1000] {
            assert_eq!(left(x), right(x));
        }
    }

    #[test]
    fn composed_function_can_be_called_repeatedly() {
        let calls = Cell::new(0);
        let counted = |x: i32| {
            calls.set(calls.get() + 1);
            x
        };
        let composed = compose(counted, double);

        assert_eq!(composed(1), 2);
        assert_eq!(composed(2), 4);
        assert_eq!(composed(3), 6);
        assert_eq!(calls.get(), 3);
    }

    #[test]
    fn composing_does_no_work_until_called() {
        let calls = Cell::new(0);
        let _composed = compose(
            |x: i32| {
                calls.set(calls.get() + 1);
                x
            },
            double,
        );

        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn execution_order_matches_written_order() {
        let log = RefCell::new(Vec::new());
        let order = &log;
        let record = |name: &'static str| {
            move |x: i32| {
                order.borrow_mut().push(name);
                x
            }
        };

        let composed = compose(compose(record("f"), record("g")), record("h"));
        composed(0);
        assert_eq!(*order.borrow(), vec!["f", "g", "h"]);

        order.borrow_mut().clear();
        let composed = compose(record("f"), compose(record("g"), record("h")));
        composed(0);
        assert_eq!(*order.borrow(), vec!["f", "g", "h"]);
    }

    #[test]
    #[should_panic(expected = "first step failed")]
    fn panics_propagate_unchanged() {
        let composed = compose(|_: i32| -> i32 { panic!("first step failed") }, double);
        composed(1);
    }

    #[test]
    fn tap_passes_value_through() {
        let seen = RefCell::new(Vec::new());
        let tapped = tap(double, |x: &i32| seen.borrow_mut().push(*x));

        assert_eq!(tapped(21), 42);
        assert_eq!(tapped(5), 10);
        assert_eq!(*seen.borrow(), vec![42, 10]);
    }

    #[test]
    fn tap_discards_observer_result() {
        let tapped = tap(double, |x: &i32| x * 1000);
        assert_eq!(tapped(3), 6);
    }

    #[test]
    fn tap_observer_runs_after_first() {
        let order = RefCell::new(Vec::new());
        let tapped = tap(
            |x: i32| {
                order.borrow_mut().push("first");
                x
            },
            |_| order.borrow_mut().push("observer"),
        );

        tapped(0);
        assert_eq!(*order.borrow(), vec!["first", "observer"]);
    }

    #[test]
    fn optional_present_path_returns_second_result() {
        let composed = compose_optional(|x: i32| Some(x + 1), |x: i32| Some(x * 2));
        assert_eq!(composed(4), Some(10));

        let second_declines = compose_optional(|x: i32| Some(x), |_: i32| None::<i32>);
        assert_eq!(second_declines(4), None);
    }

    #[test]
    fn optional_short_circuits_on_none() {
        let second_calls = Cell::new(0);
        let composed = compose_optional(
            |x: i32| (x > 0).then_some(x),
            |x: i32| {
                second_calls.set(second_calls.get() + 1);
                Some(x * 2)
            },
        );

        assert_eq!(composed(-1), None);
        assert_eq!(second_calls.get(), 0);

        assert_eq!(composed(3), Some(6));
        assert_eq!(second_calls.get(), 1);
    }

    #[test]
    fn result_returns_first_error_unchanged() {
        let second_calls = Cell::new(0);
        let composed = compose_result(
            |s: &str| s.parse::<i32>(),
            |x: i32| -> Result<i32, ParseIntError> {
                second_calls.set(second_calls.get() + 1);
                Ok(x * 2)
            },
        );

        assert_eq!(composed("21"), Ok(42));
        assert_eq!(composed("nope"), Err("nope".parse::<i32>().unwrap_err()));
        assert_eq!(second_calls.get(), 1);
    }
}

/// Composes any number of functions, applying them from left to right.
///
/// `pipe!(f, g, h)(x)` is equivalent to `h(g(f(x)))`. A single function is
/// returned as is.
///
/// The order the steps are written in is the order they run in. Internally the
/// chain is grouped to the right, which is indistinguishable from grouping to
/// the left because [`compose`](crate::compose()) is associative.
///
/// # Example
///
/// ```
/// use splice_core::pipe;
///
/// fn add_one(x: i32) -> i32 { x + 1 }
/// fn double(x: i32) -> i32 { x * 2 }
///
/// let add_then_double_then_print = pipe!(add_one, double, |x: i32| x.to_string());
/// assert_eq!(add_then_double_then_print(4), "10");
/// ```
#[macro_export]
macro_rules! pipe {
    ($step:expr $(,)?) => {
        $step
    };
    ($first:expr, $($rest:expr),+ $(,)?) => {
        $crate::compose($first, $crate::pipe!($($rest),+))
    };
}

/// Chains any number of `Option`-returning functions from left to right.
///
/// Evaluation stops at the first step that returns `None`; no later step is
/// called.
///
/// # Example
///
/// ```
/// use splice_core::pipe_optional;
///
/// let first_char_digit = pipe_optional!(
///     |s: &str| s.chars().next(),
///     |c: char| c.to_digit(10),
///     |d: u32| d.checked_sub(1),
/// );
///
/// assert_eq!(first_char_digit("7up"), Some(6));
/// assert_eq!(first_char_digit("0"), None);
/// assert_eq!(first_char_digit("abc"), None);
/// assert_eq!(first_char_digit(""), None);
/// ```
#[macro_export]
macro_rules! pipe_optional {
    ($step:expr $(,)?) => {
        $step
    };
    ($first:expr, $($rest:expr),+ $(,)?) => {
        $crate::compose_optional($first, $crate::pipe_optional!($($rest),+))
    };
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    fn add_one(x: i32) -> i32 {
        x + 1
    }

    fn double(x: i32) -> i32 {
        x * 2
    }

    #[test]
    fn single_step_pipe_is_the_step() {
        let piped = pipe!(add_one);
        assert_eq!(piped(1), 2);
    }

    #[test]
    fn pipe_runs_left_to_right() {
        let piped = pipe!(add_one, double, add_one, double);
        assert_eq!(piped(1), 10); // ((1 + 1) * 2 + 1) * 2

        let log = RefCell::new(Vec::new());
        let order = &log;
        let record = |name: &'static str| {
            move |x: i32| {
                order.borrow_mut().push(name);
                x
            }
        };

        let piped = pipe!(record("a"), record("b"), record("c"), record("d"),);
        piped(0);
        assert_eq!(*log.borrow(), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn pipe_matches_nested_compose() {
        let piped = pipe!(add_one, double, add_one);
        let nested = crate::compose(crate::compose(add_one, double), add_one);

        for x in -5..5 {
            assert_eq!(piped(x), nested(x));
        }
    }

    #[test]
    fn pipe_optional_stops_at_first_none() {
        let third_calls = Cell::new(0);
        let piped = pipe_optional!(
            |x: i32| Some(x + 1),
            |x: i32| (x % 2 == 0).then_some(x),
            |x: i32| {
                third_calls.set(third_calls.get() + 1);
                Some(x * 10)
            },
        );

        assert_eq!(piped(1), Some(20));
        assert_eq!(piped(2), None);
        assert_eq!(third_calls.get(), 1);
    }
}

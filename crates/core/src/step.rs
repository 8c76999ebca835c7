mod and_then;
mod closure;
mod identity;
mod map_some;
mod tap;
mod then;
mod try_then;

pub use and_then::AndThen;
pub use closure::FnStep;
pub use identity::Identity;
pub use map_some::MapSome;
pub use tap::Tap;
pub use then::Then;
pub use try_then::TryThen;

/// A function-like building block that maps an input to an output.
///
/// `Step` is the fluent counterpart of the free composition functions. Any
/// step can be combined with another using the provided methods, and each
/// combination is itself a `Step`, so chains of any length can be built:
///
/// - [`Step::then()`] – Run two steps in sequence.
/// - [`Step::tap()`] – Observe each output without changing it.
/// - [`Step::and_then()`] – Chain `Option`-returning steps, stopping at `None`.
/// - [`Step::map_some()`] – Apply a plain step to a present value.
/// - [`Step::try_then()`] – Chain `Result`-returning steps, stopping at `Err`.
///
/// Steps run in the order they are written. Combining steps performs no
/// calls; work happens only when [`Step::call()`] is invoked.
///
/// Plain functions and closures become steps with [`step()`].
///
/// # Example
///
/// ```
/// use splice_core::Step;
///
/// struct AddOne;
///
/// impl Step for AddOne {
///     type Input = i32;
///     type Output = i32;
///
///     fn call(&self, input: i32) -> i32 {
///         input + 1
///     }
/// }
///
/// struct MultiplyBy {
///     factor: i32,
/// }
///
/// impl Step for MultiplyBy {
///     type Input = i32;
///     type Output = i32;
///
///     fn call(&self, input: i32) -> i32 {
///         input * self.factor
///     }
/// }
///
/// let chain = MultiplyBy { factor: 2 }
///     .then(AddOne)
///     .then(MultiplyBy { factor: 3 })
///     .then(AddOne);
///
/// assert_eq!(chain.call(2), 16);
/// ```
pub trait Step {
    type Input;
    type Output;

    /// Calls the step with the given input.
    ///
    /// This is the only method required when implementing `Step`.
    fn call(&self, input: Self::Input) -> Self::Output;

    /// Chains this step with another.
    ///
    /// The returned step calls `self`, then passes its output to `next`.
    fn then<Next>(self, next: Next) -> Then<Self, Next>
    where
        Self: Sized,
        Next: Step<Input = Self::Output>,
    {
        Then::new(self, next)
    }

    /// Shows each output to `observer` before returning it unchanged.
    ///
    /// The observer runs exactly once per call, after this step completes.
    ///
    /// # Example
    ///
    /// ```
    /// use std::cell::RefCell;
    /// use splice_core::{Step, step};
    ///
    /// let seen = RefCell::new(Vec::new());
    /// let doubler = step(|x: i32| x * 2).tap(|x: &i32| seen.borrow_mut().push(*x));
    ///
    /// assert_eq!(doubler.call(21), 42);
    /// assert_eq!(*seen.borrow(), vec![42]);
    /// ```
    fn tap<F>(self, observer: F) -> Tap<Self, F>
    where
        Self: Sized,
        F: Fn(&Self::Output),
    {
        Tap::new(self, observer)
    }

    /// Chains this `Option`-returning step with another.
    ///
    /// When `self` returns `None`, the chain returns `None` and `next` is not
    /// called. Otherwise the present value is passed to `next`.
    ///
    /// # Example
    ///
    /// ```
    /// use splice_core::{Step, step};
    ///
    /// let first_digit = step(|s: &str| s.chars().next()).and_then(step(|c: char| c.to_digit(10)));
    ///
    /// assert_eq!(first_digit.call("42"), Some(4));
    /// assert_eq!(first_digit.call("x2"), None);
    /// assert_eq!(first_digit.call(""), None);
    /// ```
    fn and_then<T, U, Next>(self, next: Next) -> AndThen<Self, Next>
    where
        Self: Sized + Step<Output = Option<T>>,
        Next: Step<Input = T, Output = Option<U>>,
    {
        AndThen::new(self, next)
    }

    /// Applies a step that does not return an `Option` to a present value.
    ///
    /// This lets a chain of `Option`-returning steps continue with a plain
    /// step without unwrapping first. A `None` passes through untouched.
    fn map_some<T, Next>(self, next: Next) -> MapSome<Self, Next>
    where
        Self: Sized + Step<Output = Option<T>>,
        Next: Step<Input = T>,
    {
        MapSome::new(self, next)
    }

    /// Chains this `Result`-returning step with another that shares its error type.
    ///
    /// An error from `self` is returned unchanged and `next` is not called.
    fn try_then<T, U, E, Next>(self, next: Next) -> TryThen<Self, Next>
    where
        Self: Sized + Step<Output = Result<T, E>>,
        Next: Step<Input = T, Output = Result<U, E>>,
    {
        TryThen::new(self, next)
    }

    /// Converts this step into a plain function.
    fn into_fn(self) -> impl Fn(Self::Input) -> Self::Output
    where
        Self: Sized,
    {
        move |input| self.call(input)
    }
}

impl<S> Step for &S
where
    S: Step + ?Sized,
{
    type Input = S::Input;
    type Output = S::Output;

    fn call(&self, input: Self::Input) -> Self::Output {
        (**self).call(input)
    }
}

/// Wraps a function or closure as a [`Step`].
///
/// # Example
///
/// ```
/// use splice_core::{Step, step};
///
/// let shout = step(|s: &str| s.to_uppercase()).then(step(|s: String| s + "!"));
/// assert_eq!(shout.call("hey"), "HEY!");
/// ```
pub const fn step<F, I, O>(function: F) -> FnStep<F, I, O>
where
    F: Fn(I) -> O,
{
    FnStep::new(function)
}

/// Returns a [`Step`] that passes its input through unchanged.
#[must_use]
pub const fn identity<T>() -> Identity<T> {
    Identity::new()
}

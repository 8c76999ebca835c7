use crate::Step;

/// A step that chains two `Result`-returning steps sharing an error type.
///
/// Created by [`Step::try_then()`]. An error from the first step is returned
/// unchanged and the second step is skipped.
pub struct TryThen<A, B> {
    first: A,
    second: B,
}

impl<A, B> TryThen<A, B> {
    pub(crate) const fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<A, B, T, U, E> Step for TryThen<A, B>
where
    A: Step<Output = Result<T, E>>,
    B: Step<Input = T, Output = Result<U, E>>,
{
    type Input = A::Input;
    type Output = Result<U, E>;

    fn call(&self, input: Self::Input) -> Self::Output {
        let value = self.first.call(input)?;
        self.second.call(value)
    }
}

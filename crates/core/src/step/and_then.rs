use crate::Step;

/// A step that chains two `Option`-returning steps.
///
/// Created by [`Step::and_then()`]. The second step only runs when the first
/// produces a value.
pub struct AndThen<A, B> {
    first: A,
    second: B,
}

impl<A, B> AndThen<A, B> {
    pub(crate) const fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<A, B, T, U> Step for AndThen<A, B>
where
    A: Step<Output = Option<T>>,
    B: Step<Input = T, Output = Option<U>>,
{
    type Input = A::Input;
    type Output = Option<U>;

    fn call(&self, input: Self::Input) -> Self::Output {
        let value = self.first.call(input)?;
        self.second.call(value)
    }
}

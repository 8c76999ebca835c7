use crate::Step;

/// A step that calls two steps in sequence.
///
/// Created by [`Step::then()`]. The first step's output type must match the
/// second step's input type.
pub struct Then<A, B> {
    first: A,
    second: B,
}

impl<A, B> Then<A, B> {
    pub(crate) const fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<A, B> Step for Then<A, B>
where
    A: Step,
    B: Step<Input = A::Output>,
{
    type Input = A::Input;
    type Output = B::Output;

    /// Calls the first step and passes its output to the second.
    fn call(&self, input: Self::Input) -> Self::Output {
        let output = self.first.call(input);
        self.second.call(output)
    }
}

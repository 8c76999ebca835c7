use crate::Step;

/// A step that shows each output to an observer before returning it.
///
/// Created by [`Step::tap()`].
pub struct Tap<S, F> {
    step: S,
    observer: F,
}

impl<S, F> Tap<S, F> {
    pub(crate) const fn new(step: S, observer: F) -> Self {
        Self { step, observer }
    }
}

impl<S, F> Step for Tap<S, F>
where
    S: Step,
    F: Fn(&S::Output),
{
    type Input = S::Input;
    type Output = S::Output;

    fn call(&self, input: Self::Input) -> Self::Output {
        let output = self.step.call(input);
        (self.observer)(&output);
        output
    }
}

use std::marker::PhantomData;

use crate::Step;

/// A step backed by a plain function or closure.
///
/// Created by [`step()`](crate::step()).
pub struct FnStep<F, I, O> {
    function: F,
    _marker: PhantomData<fn(I) -> O>,
}

impl<F, I, O> FnStep<F, I, O>
where
    F: Fn(I) -> O,
{
    /// Wraps a function as a step.
    pub(crate) const fn new(function: F) -> Self {
        Self {
            function,
            _marker: PhantomData,
        }
    }
}

impl<F, I, O> Step for FnStep<F, I, O>
where
    F: Fn(I) -> O,
{
    type Input = I;
    type Output = O;

    fn call(&self, input: Self::Input) -> Self::Output {
        (self.function)(input)
    }
}

impl<F, I, O> Clone for FnStep<F, I, O>
where
    F: Clone,
{
    fn clone(&self) -> Self {
        Self {
            function: self.function.clone(),
            _marker: PhantomData,
        }
    }
}

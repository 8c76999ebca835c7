use std::marker::PhantomData;

use crate::Step;

/// A step that returns its input unchanged.
///
/// Created by [`identity()`](crate::identity()). Chaining it before or after
/// any other step leaves that step's behavior unchanged.
pub struct Identity<T> {
    _marker: PhantomData<fn(T) -> T>,
}

impl<T> Identity<T> {
    pub(crate) const fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T> Step for Identity<T> {
    type Input = T;
    type Output = T;

    fn call(&self, input: Self::Input) -> Self::Output {
        input
    }
}

impl<T> Clone for Identity<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Identity<T> {}

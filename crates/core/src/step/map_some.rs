use crate::Step;

/// A step that applies a plain step to the value inside an `Option`.
///
/// Created by [`Step::map_some()`]. A `None` from the first step is passed
/// along without calling the second.
pub struct MapSome<A, B> {
    first: A,
    second: B,
}

impl<A, B> MapSome<A, B> {
    pub(crate) const fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<A, B, T> Step for MapSome<A, B>
where
    A: Step<Output = Option<T>>,
    B: Step<Input = T>,
{
    type Input = A::Input;
    type Output = Option<B::Output>;

    fn call(&self, input: Self::Input) -> Self::Output {
        self.first.call(input).map(|value| self.second.call(value))
    }
}

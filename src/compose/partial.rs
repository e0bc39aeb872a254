//! Partial application for any [`Invocable`].
//!
//! [`partial`] fixes the leading arguments of a callable. The remaining
//! arguments are supplied at each call and appended after the bound ones:
//!
//! ```text
//! partial(f, (a, b))(c, d) == f(a, b, c, d)
//! ```
//!
//! Bound values are cloned into every call, so the partially applied
//! callable can be invoked any number of times.

use crate::callable::{Concat, Invocable};

/// A callable with some leading arguments already supplied.
///
/// # Examples
///
/// ```
/// use lambars_adaptors::callable::Invocable;
/// use lambars_adaptors::compose::partial;
///
/// fn volume(length: u32, width: u32, height: u32) -> u32 {
///     length * width * height
/// }
///
/// let floor_of_two_by_three = partial(volume, (2, 3));
/// assert_eq!(floor_of_two_by_three.invoke((4,)), 24);
/// assert_eq!(floor_of_two_by_three.invoke((10,)), 60);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Partial<F, Bound> {
    function: F,
    bound: Bound,
}

impl<F, Bound> Partial<F, Bound> {
    /// Binds the tuple `bound` as the leading arguments of `function`.
    #[inline]
    pub const fn new(function: F, bound: Bound) -> Self {
        Self { function, bound }
    }

    /// Returns the wrapped callable.
    #[inline]
    pub const fn function(&self) -> &F {
        &self.function
    }

    /// Returns the bound leading arguments.
    #[inline]
    pub const fn bound(&self) -> &Bound {
        &self.bound
    }
}

impl<F, Bound, Rest> Invocable<Rest> for Partial<F, Bound>
where
    Bound: Clone + Concat<Rest>,
    F: Invocable<Bound::Output>,
{
    type Output = F::Output;

    #[inline]
    fn invoke(&self, arguments: Rest) -> Self::Output {
        self.function.invoke(self.bound.clone().concat(arguments))
    }
}

/// Fixes the leading arguments of `function` to the values in `bound`.
///
/// Works with any [`Invocable`], including the other adaptors:
///
/// ```
/// # #[cfg(feature = "compress")]
/// # {
/// use lambars_adaptors::callable::Invocable;
/// use lambars_adaptors::compose::{compress_with, partial};
///
/// let sum = compress_with(|total: i32, value: i32| total + value, 0);
/// let plus_ten = partial(sum, (10,));
/// assert_eq!(plus_ten.invoke(()), 10);
/// assert_eq!(plus_ten.invoke((1, 2)), 13);
/// # }
/// ```
#[inline]
pub const fn partial<F, Bound>(function: F, bound: Bound) -> Partial<F, Bound> {
    Partial::new(function, bound)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nothing_bound() {
        let add = partial(|a: i32, b: i32| a + b, ());
        assert_eq!(add.invoke((1, 2)), 3);
    }

    #[test]
    fn test_everything_bound_makes_thunk() {
        let add = partial(|a: i32, b: i32| a + b, (1, 2));
        assert_eq!(add.invoke(()), 3);
    }

    #[test]
    fn test_bound_values_are_cloned_per_call() {
        let greet = partial(|greeting: String, name: &str| greeting + ", " + name, (String::from("Hello"),));
        assert_eq!(greet.invoke(("Alice",)), "Hello, Alice");
        assert_eq!(greet.invoke(("Bob",)), "Hello, Bob");
        assert_eq!(greet.bound().0, "Hello");
    }
}

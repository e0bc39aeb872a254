//! The `pipe!` macro for left-to-right application of unary callables.

/// Pipes a value through a series of callables from left to right.
///
/// `pipe!(x, f, g, h)` is equivalent to `h(g(f(x)))`. Every stage is called
/// through [`Invocable`](crate::callable::Invocable) with a one-element
/// argument tuple, so plain functions, closures and the adaptors of this
/// crate can all be mixed in one pipeline.
///
/// # Syntax
///
/// - `pipe!(x)` - Returns `x` unchanged
/// - `pipe!(x, f)` - Returns `f(x)`
/// - `pipe!(x, f, g, ...)` - Returns `...g(f(x))`
///
/// # Examples
///
/// ```
/// use lambars_adaptors::pipe;
///
/// fn square(x: i32) -> i32 { x * x }
/// fn add_one(x: i32) -> i32 { x + 1 }
///
/// // 3 -> square(3)=9 -> add_one(9)=10
/// assert_eq!(pipe!(3, square, add_one), 10);
/// ```
///
/// Adaptors are ordinary stages:
///
/// ```
/// use lambars_adaptors::compose::partial;
/// use lambars_adaptors::pipe;
///
/// let add_hundred = partial(|a: i32, b: i32| a + b, (100,));
/// let negate = |x: i32| -x;
///
/// assert_eq!(pipe!(5, add_hundred, negate), -105);
/// ```
#[macro_export]
macro_rules! pipe {
    ($value:expr $(,)?) => {
        $value
    };

    ($value:expr, $stage:expr $(,)?) => {
        $crate::callable::Invocable::invoke(&$stage, ($value,))
    };

    ($value:expr, $stage:expr, $($remaining_stages:expr),+ $(,)?) => {
        $crate::pipe!($crate::callable::Invocable::invoke(&$stage, ($value,)), $($remaining_stages),+)
    };
}

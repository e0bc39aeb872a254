//! The `invoke!` macro for calling an [`Invocable`](crate::callable::Invocable)
//! with a flat argument list.

/// Calls an [`Invocable`](crate::callable::Invocable) with the given arguments.
///
/// `invoke!(callable, a, b, c)` is equivalent to
/// `Invocable::invoke(&callable, (a, b, c))`. The argument tuple is built
/// for you, including the trailing comma of a one-element tuple.
///
/// # Syntax
///
/// - `invoke!(callable)` - Calls with `()`
/// - `invoke!(callable, a)` - Calls with `(a,)`
/// - `invoke!(callable, a, b, ...)` - Calls with `(a, b, ...)`
///
/// # Examples
///
/// ```
/// use lambars_adaptors::invoke;
///
/// let sum = |a: i32, b: i32, c: i32| a + b + c;
/// assert_eq!(invoke!(sum, 1, 2, 3), 6);
///
/// let square = |x: i32| x * x;
/// assert_eq!(invoke!(square, 7), 49);
///
/// let unit = || "nothing";
/// assert_eq!(invoke!(unit), "nothing");
/// ```
#[macro_export]
macro_rules! invoke {
    ($callable:expr $(,)?) => {
        $crate::callable::Invocable::invoke(&$callable, ())
    };

    ($callable:expr, $($argument:expr),+ $(,)?) => {
        $crate::callable::Invocable::invoke(&$callable, ($($argument,)+))
    };
}

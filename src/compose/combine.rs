//! The distribution combinator.
//!
//! [`Combine`] wraps an outer function `f` and an ordered tuple of unary
//! callables `(g0, g1, .., gn-1)`. Calling it with `(a0, a1, .., am-1)`
//! routes argument `ai` to `gi`, then calls `f` with the results:
//!
//! ```text
//! combine(f, (g0, .., gn-1))(a0, .., an-1)          == f(g0(a0), .., gn-1(an-1))
//! combine(f, (g0, .., gn-1))(a0, .., an-1, an, ..)  == f(g0(a0), .., gn-1(an-1))
//! ```
//!
//! Routing is one argument per wrapped callable. Arguments past the last
//! wrapped callable are accepted but reach neither a callable nor `f`.
//!
//! Routing is resolved from the tuple shapes at compile time. Calling a
//! combinator with fewer arguments than wrapped callables, or with a result
//! list that `f` cannot accept, does not compile.

use crate::callable::Invocable;

/// Routes the positional arguments in `Args` to the callables in `Self`.
///
/// Implemented for every tuple of callables `(G0, .., Gn-1)` and every
/// argument tuple `(A0, .., Am-1)` with `n <= m <= 8` where each `Gi` is
/// [`Invocable<(Ai,)>`](Invocable). The output is the tuple of the `n`
/// results; the unrouted arguments `An..Am-1` are dropped.
///
/// The wrapped callables are evaluated strictly in order, `G0` first.
///
/// # Examples
///
/// ```
/// use lambars_adaptors::compose::Distribute;
///
/// let callables = (|x: i32| x + 1, |s: &str| s.len());
/// assert_eq!(callables.distribute((1, "four")), (2, 4));
/// assert_eq!(callables.distribute((1, "four", 'c')), (2, 4));
/// ```
pub trait Distribute<Args> {
    /// Results of the wrapped callables, in order.
    type Output;

    /// Calls each wrapped callable with the argument at its position.
    fn distribute(&self, arguments: Args) -> Self::Output;
}

macro_rules! impl_distribute {
    ([$($index:tt)*] [$($extra:tt)*]) => {
        paste::paste! {
            impl<$([<G $index>], [<A $index>],)* $([<A $extra>],)*>
                Distribute<($([<A $index>],)* $([<A $extra>],)*)> for ($([<G $index>],)*)
            where
                $([<G $index>]: Invocable<([<A $index>],)>,)*
            {
                type Output = ($(<[<G $index>] as Invocable<([<A $index>],)>>::Output,)*);

                #[inline]
                fn distribute(
                    &self,
                    arguments: ($([<A $index>],)* $([<A $extra>],)*),
                ) -> Self::Output {
                    let ($([<argument_ $index>],)* ..) = arguments;
                    ($(self.$index.invoke(([<argument_ $index>],)),)*)
                }
            }
        }
    };
}

// Emits one `Distribute` impl per number of unrouted trailing arguments.
macro_rules! impl_distribute_with_extras {
    ([$($index:tt)*] [$($extra:tt)*]) => {
        impl_distribute!([$($index)*] [$($extra)*]);
    };
    ([$($index:tt)*] [$($extra:tt)*] $next:tt $($remaining:tt)*) => {
        impl_distribute!([$($index)*] [$($extra)*]);
        impl_distribute_with_extras!([$($index)*] [$($extra)* $next] $($remaining)*);
    };
}

impl_distribute_with_extras!([] [] 0 1 2 3 4 5 6 7);
impl_distribute_with_extras!([0] [] 1 2 3 4 5 6 7);
impl_distribute_with_extras!([0 1] [] 2 3 4 5 6 7);
impl_distribute_with_extras!([0 1 2] [] 3 4 5 6 7);
impl_distribute_with_extras!([0 1 2 3] [] 4 5 6 7);
impl_distribute_with_extras!([0 1 2 3 4] [] 5 6 7);
impl_distribute_with_extras!([0 1 2 3 4 5] [] 6 7);
impl_distribute_with_extras!([0 1 2 3 4 5 6] [] 7);
impl_distribute_with_extras!([0 1 2 3 4 5 6 7] []);

/// A callable that distributes its arguments over wrapped callables and
/// combines their results with an outer function.
///
/// Built with [`combine`] or the [`combine!`](crate::combine!) macro.
/// The combinator owns its callables; it is [`Clone`], [`Copy`], [`Send`] and
/// [`Sync`] whenever they are, and zero-sized whenever they are.
///
/// # Type Parameters
///
/// * `F` - The outer function, invoked with the routed results
/// * `Gs` - A tuple of unary callables; `Gs.i` receives argument `i`
///
/// # Examples
///
/// ```
/// use lambars_adaptors::callable::Invocable;
/// use lambars_adaptors::compose::combine;
///
/// let increment = |x: i32| x + 1;
/// let double = |x: i32| x * 2;
/// let sum = |left: i32, right: i32| left + right;
///
/// let combined = combine(sum, (increment, double));
/// // sum(increment(3), double(5)) = sum(4, 10)
/// assert_eq!(combined.invoke((3, 5)), 14);
/// ```
///
/// Arguments past the last wrapped callable are not passed to the outer
/// function:
///
/// ```
/// use lambars_adaptors::callable::Invocable;
/// use lambars_adaptors::compose::combine;
///
/// let first_doubled = combine(|x: i32| x, (|x: i32| x * 2,));
/// assert_eq!(first_doubled.invoke((21, "ignored", 3.5)), 42);
/// ```
///
/// Too few arguments for the wrapped callables is rejected at compile time:
///
/// ```compile_fail
/// use lambars_adaptors::callable::Invocable;
/// use lambars_adaptors::compose::combine;
///
/// let combined = combine(|a: i32, b: i32| a + b, (|x: i32| x, |x: i32| x));
/// let _ = combined.invoke((1,));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Combine<F, Gs> {
    function: F,
    callables: Gs,
}

impl<F, Gs> Combine<F, Gs> {
    /// Creates a combinator from an outer function and a tuple of callables.
    ///
    /// Equivalent to [`combine`].
    #[inline]
    pub const fn new(function: F, callables: Gs) -> Self {
        Self {
            function,
            callables,
        }
    }

    /// Returns the outer combining function.
    #[inline]
    pub const fn function(&self) -> &F {
        &self.function
    }

    /// Returns the tuple of wrapped callables.
    #[inline]
    pub const fn callables(&self) -> &Gs {
        &self.callables
    }

    /// Takes the combinator apart.
    #[inline]
    pub fn into_parts(self) -> (F, Gs) {
        (self.function, self.callables)
    }
}

impl<F, Gs, Args> Invocable<Args> for Combine<F, Gs>
where
    Gs: Distribute<Args>,
    F: Invocable<Gs::Output>,
{
    type Output = F::Output;

    #[inline]
    fn invoke(&self, arguments: Args) -> Self::Output {
        self.function.invoke(self.callables.distribute(arguments))
    }
}

static_assertions::assert_eq_size!(Combine<(), ((), ())>, ());

/// Creates a [`Combine`] from an outer function and a tuple of unary
/// callables.
///
/// `combine(f, (g0, g1)).invoke((a0, a1))` is `f(g0(a0), g1(a1))`.
/// Use [`combine!`](crate::combine!) to list the callables without writing
/// the tuple.
///
/// # Examples
///
/// ```
/// use lambars_adaptors::callable::Invocable;
/// use lambars_adaptors::compose::combine;
///
/// let describe = combine(
///     |name: String, age: u32| format!("{name} is {age}"),
///     (|name: &str| name.to_uppercase(), |years: u32| years + 1),
/// );
/// assert_eq!(describe.invoke(("ada", 36)), "ADA is 37");
/// ```
///
/// With no wrapped callables the outer function is called with no
/// arguments, whatever the combinator receives:
///
/// ```
/// use lambars_adaptors::callable::Invocable;
/// use lambars_adaptors::compose::combine;
///
/// let answer = combine(|| 42, ());
/// assert_eq!(answer.invoke(()), 42);
/// assert_eq!(answer.invoke((1, 2)), 42);
/// ```
#[inline]
pub const fn combine<F, Gs>(function: F, callables: Gs) -> Combine<F, Gs> {
    Combine::new(function, callables)
}

/// Builds a [`Combine`] from an outer function and any number of callables.
///
/// `combine!(f, g0, g1, ...)` is `combine(f, (g0, g1, ...))`.
///
/// # Examples
///
/// ```
/// use lambars_adaptors::{combine, invoke};
///
/// let hypotenuse = combine!(
///     |a: f64, b: f64| (a + b).sqrt(),
///     |x: f64| x * x,
///     |y: f64| y * y,
/// );
/// assert_eq!(invoke!(hypotenuse, 3.0, 4.0), 5.0);
/// ```
#[macro_export]
macro_rules! combine {
    ($function:expr $(,)?) => {
        $crate::compose::combine($function, ())
    };

    ($function:expr, $($callable:expr),+ $(,)?) => {
        $crate::compose::combine($function, ($($callable,)+))
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn test_single_callable() {
        let combined = combine(|value: i32| value * 10, (|x: i32| x + 1,));
        assert_eq!(combined.invoke((4,)), 50);
    }

    #[test]
    fn test_callables_run_left_to_right() {
        let log = RefCell::new(Vec::new());
        let combined = combine(
            |first: char, second: char, third: char| [first, second, third],
            (
                |x: char| {
                    log.borrow_mut().push(0);
                    x
                },
                |x: char| {
                    log.borrow_mut().push(1);
                    x
                },
                |x: char| {
                    log.borrow_mut().push(2);
                    x
                },
            ),
        );

        assert_eq!(combined.invoke(('a', 'b', 'c')), ['a', 'b', 'c']);
        assert_eq!(*log.borrow(), vec![0, 1, 2]);
    }

    #[test]
    fn test_unrouted_arguments_do_not_reach_outer_function() {
        let combined = combine(|routed: i32| routed, (|x: i32| x * 3,));
        assert_eq!(combined.invoke((2, "dropped", true)), 6);
    }

    #[test]
    fn test_distribute_output_has_one_result_per_callable() {
        let callables = (|x: i32| x + 1, |x: i32| x - 1);
        assert_eq!(callables.distribute((10, 20, 30, 40)), (11, 19));
    }

    #[test]
    fn test_into_parts_returns_components() {
        let combined = combine(|a: i32, b: i32| a - b, (|x: i32| x, |x: i32| -x));
        let (function, (first, second)) = combined.into_parts();
        assert_eq!(function(first(5), second(2)), 7);
    }

    #[test]
    fn test_zero_sized_components_give_zero_sized_combinator() {
        let combined = combine(|a: i32, b: i32| a + b, (|x: i32| x, |x: i32| x));
        assert_eq!(std::mem::size_of_val(&combined), 0);
    }

    type Unary = fn(i32) -> i32;
    type Binary = fn(i32, i32) -> i32;
    type Ternary = fn(i32, i32, i32) -> i32;

    static_assertions::assert_impl_all!(Combine<Binary, (Unary, Unary)>: Invocable<(i32, i32)>, Copy, Send, Sync);
    static_assertions::assert_not_impl_any!(Combine<Binary, (Unary, Unary)>: Invocable<(i32,)>, Invocable<()>);
    static_assertions::assert_not_impl_any!(Combine<Unary, (Unary, Unary)>: Invocable<(i32, i32)>);
    static_assertions::assert_impl_all!(Combine<Binary, (Unary, Unary)>: Invocable<(i32, i32, i32)>, Invocable<(i32, i32, &'static str)>);
    static_assertions::assert_not_impl_any!(Combine<Ternary, (Unary, Unary)>: Invocable<(i32, i32, i32)>);
}

//! The variadic fold combinator.
//!
//! [`Compress`] turns a binary function into a function of any arity by
//! folding it over the arguments from left to right. The binary function
//! takes the current state first and the next argument second.
//!
//! # Semantics
//!
//! ```text
//! compress_with(f, z)()            == z
//! compress_with(f, z)(x, xs...)    == compress_with(f, f(z, x))(xs...)
//! compress(f)(x)                   == x
//! compress(f)(x, y, xs...)         == compress(f)(f(x, y), xs...)
//! ```
//!
//! The state type may change at every step: each step only needs
//! `f: Invocable<(State, Next)>` for the state produced by the step before.
//! An unseeded fold has no meaning for an empty argument list, so
//! `compress(f)` does not implement `Invocable<()>` and such a call does not
//! compile.
//!
//! # Examples
//!
//! ```
//! use lambars_adaptors::callable::Invocable;
//! use lambars_adaptors::compose::{compress, compress_with};
//!
//! let max = compress(|left: i32, right: i32| left.max(right));
//! assert_eq!(max.invoke((2, 3, 4, 5)), 5);
//!
//! let sum = compress_with(|total: i32, value: i32| total + value, 0);
//! assert_eq!(sum.invoke((1, 2, 3)), 6);
//! assert_eq!(sum.invoke(()), 0);
//! ```
//!
//! ```compile_fail
//! use lambars_adaptors::callable::Invocable;
//! use lambars_adaptors::compose::compress;
//!
//! let max = compress(|left: i32, right: i32| left.max(right));
//! let _ = max.invoke(());
//! ```

use crate::callable::{Invocable, Uncons};

/// Left fold of a binary callable `F` over the elements of `Self`,
/// starting from `State`.
///
/// `()` returns the state unchanged. A non-empty tuple applies `F` to the
/// state and its first element, then folds the rest with the new state.
///
/// # Examples
///
/// ```
/// use lambars_adaptors::compose::FoldLeft;
///
/// let subtract = |left: i32, right: i32| left - right;
/// // ((10 - 1) - 2) - 3
/// assert_eq!((1, 2, 3).fold_left(&subtract, 10), 4);
/// assert_eq!(().fold_left(&subtract, 10), 10);
/// ```
pub trait FoldLeft<F, State> {
    /// The final state.
    type Output;

    /// Folds `function` over the elements, starting from `state`.
    fn fold_left(self, function: &F, state: State) -> Self::Output;
}

impl<F, State> FoldLeft<F, State> for () {
    type Output = State;

    #[inline]
    fn fold_left(self, _function: &F, state: State) -> State {
        state
    }
}

macro_rules! impl_fold_left {
    ($head:ident $head_value:ident $(, $tail:ident $tail_value:ident)*) => {
        impl<F, State, $head, $($tail,)*> FoldLeft<F, State> for ($head, $($tail,)*)
        where
            F: Invocable<(State, $head)>,
            ($($tail,)*): FoldLeft<F, <F as Invocable<(State, $head)>>::Output>,
        {
            type Output = <($($tail,)*) as FoldLeft<F, <F as Invocable<(State, $head)>>::Output>>::Output;

            #[inline]
            fn fold_left(self, function: &F, state: State) -> Self::Output {
                let ($head_value, $($tail_value,)*) = self;
                let next = function.invoke((state, $head_value));
                ($($tail_value,)*).fold_left(function, next)
            }
        }

        impl_fold_left!($($tail $tail_value),*);
    };
    () => {};
}

impl_fold_left!(
    X0 x0, X1 x1, X2 x2, X3 x3, X4 x4, X5 x5, X6 x6, X7 x7
);

/// Where a fold gets its initial state from.
///
/// Implemented by [`Seed`] (an explicit value, cloned per call) and
/// [`Unseeded`] (the first argument).
pub trait FoldState<F, Args> {
    /// Result of folding `F` over `Args` from this starting point.
    type Output;

    /// Runs the fold.
    fn fold(&self, function: &F, arguments: Args) -> Self::Output;
}

/// Marker for a fold that takes its initial state from the first argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Unseeded;

/// An explicit initial state for a fold.
///
/// The stored value is never modified; every call starts from a fresh
/// clone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Seed<S>(S);

impl<S> Seed<S> {
    /// Wraps `value` as an initial state.
    #[inline]
    pub const fn new(value: S) -> Self {
        Self(value)
    }

    /// Returns the initial state.
    #[inline]
    pub const fn value(&self) -> &S {
        &self.0
    }

    /// Unwraps the initial state.
    #[inline]
    pub fn into_value(self) -> S {
        self.0
    }
}

impl<F, S, Args> FoldState<F, Args> for Seed<S>
where
    S: Clone,
    Args: FoldLeft<F, S>,
{
    type Output = Args::Output;

    #[inline]
    fn fold(&self, function: &F, arguments: Args) -> Self::Output {
        arguments.fold_left(function, self.0.clone())
    }
}

impl<F, Args> FoldState<F, Args> for Unseeded
where
    Args: Uncons,
    Args::Tail: FoldLeft<F, Args::Head>,
{
    type Output = <Args::Tail as FoldLeft<F, Args::Head>>::Output;

    #[inline]
    fn fold(&self, function: &F, arguments: Args) -> Self::Output {
        let (head, tail) = arguments.uncons();
        tail.fold_left(function, head)
    }
}

/// A callable that folds a binary function over its arguments.
///
/// Built with [`compress`] (unseeded), [`compress_with`] (seeded) or the
/// [`compress!`](crate::compress!) macro.
///
/// # Type Parameters
///
/// * `F` - The binary function, called as `f(state, argument)`
/// * `State` - [`Seed<S>`] for a seeded fold, [`Unseeded`] otherwise
///
/// # Examples
///
/// Left-to-right order matters for non-associative operations:
///
/// ```
/// use lambars_adaptors::callable::Invocable;
/// use lambars_adaptors::compose::compress_with;
///
/// let path = compress_with(
///     |path: String, segment: &str| format!("{path}/{segment}"),
///     String::from("root"),
/// );
/// assert_eq!(path.invoke(("usr", "local", "bin")), "root/usr/local/bin");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Compress<F, State = Unseeded> {
    function: F,
    state: State,
}

impl<F, State> Compress<F, State> {
    /// Creates a fold from a binary function and a starting point.
    #[inline]
    pub const fn new(function: F, state: State) -> Self {
        Self { function, state }
    }

    /// Returns the binary function.
    #[inline]
    pub const fn function(&self) -> &F {
        &self.function
    }

    /// Returns the starting point of the fold.
    #[inline]
    pub const fn state(&self) -> &State {
        &self.state
    }

    /// Takes the fold apart.
    #[inline]
    pub fn into_parts(self) -> (F, State) {
        (self.function, self.state)
    }
}

impl<F> Compress<F, Unseeded> {
    /// Turns an unseeded fold into one that starts from `seed`.
    ///
    /// ```
    /// use lambars_adaptors::callable::Invocable;
    /// use lambars_adaptors::compose::compress;
    ///
    /// let product = compress(|acc: u64, value: u64| acc * value).seeded(1);
    /// assert_eq!(product.invoke(()), 1);
    /// assert_eq!(product.invoke((2, 3, 7)), 42);
    /// ```
    #[inline]
    pub fn seeded<S>(self, seed: S) -> Compress<F, Seed<S>> {
        Compress::new(self.function, Seed::new(seed))
    }
}

impl<F, S> Compress<F, Seed<S>> {
    /// Returns the initial state of a seeded fold.
    #[inline]
    pub const fn seed(&self) -> &S {
        self.state.value()
    }
}

impl<F, State, Args> Invocable<Args> for Compress<F, State>
where
    State: FoldState<F, Args>,
{
    type Output = State::Output;

    #[inline]
    fn invoke(&self, arguments: Args) -> Self::Output {
        self.state.fold(&self.function, arguments)
    }
}

// An unseeded fold is exactly as large as its function.
static_assertions::assert_eq_size!(Compress<fn(i32, i32) -> i32>, fn(i32, i32) -> i32);

/// Creates an unseeded fold: the first argument is the initial state.
///
/// A single argument is returned as it is, without calling `function`.
///
/// # Examples
///
/// ```
/// use lambars_adaptors::callable::Invocable;
/// use lambars_adaptors::compose::compress;
///
/// let longest = compress(|left: &'static str, right: &'static str| {
///     if right.len() > left.len() { right } else { left }
/// });
/// assert_eq!(longest.invoke(("a", "abc", "ab")), "abc");
/// assert_eq!(longest.invoke(("only",)), "only");
/// ```
#[inline]
pub const fn compress<F>(function: F) -> Compress<F, Unseeded> {
    Compress::new(function, Unseeded)
}

/// Creates a seeded fold starting from `seed`.
///
/// # Examples
///
/// ```
/// use lambars_adaptors::callable::Invocable;
/// use lambars_adaptors::compose::compress_with;
///
/// let count = compress_with(|count: usize, _: char| count + 1, 0);
/// assert_eq!(count.invoke(('a', 'b', 'c')), 3);
/// assert_eq!(count.invoke(()), 0);
/// ```
#[inline]
pub const fn compress_with<F, S>(function: F, seed: S) -> Compress<F, Seed<S>> {
    Compress::new(function, Seed::new(seed))
}

/// Builds a [`Compress`], with or without an initial state.
///
/// - `compress!(f)` is [`compress(f)`](crate::compose::compress)
/// - `compress!(f, seed)` is [`compress_with(f, seed)`](crate::compose::compress_with)
///
/// # Examples
///
/// ```
/// use lambars_adaptors::{compress, invoke};
///
/// let joined = compress!(|acc: String, word: &str| acc + " " + word);
/// assert_eq!(invoke!(joined, String::from("fold"), "from", "the", "left"), "fold from the left");
///
/// let total = compress!(|acc: i64, value: i64| acc + value, 100);
/// assert_eq!(invoke!(total, 1, 2), 103);
/// ```
#[macro_export]
macro_rules! compress {
    ($function:expr $(,)?) => {
        $crate::compose::compress($function)
    };

    ($function:expr, $seed:expr $(,)?) => {
        $crate::compose::compress_with($function, $seed)
    };
}

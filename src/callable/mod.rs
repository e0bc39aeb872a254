//! The callable capability shared by every adaptor in this crate.
//!
//! Rust closures cannot be generic over their arity, and the `Fn*` traits
//! cannot be implemented for user types on stable Rust. This module bridges
//! both gaps with a single trait, [`Invocable`], whose argument list is a
//! tuple:
//!
//! - every `Fn(A0, .., An) -> R` with `n <= 8` is [`Invocable<(A0, .., An)>`](Invocable)
//!   through a blanket implementation;
//! - every adaptor ([`Combine`](crate::compose::Combine),
//!   [`Compress`](crate::compose::Compress), ...) implements [`Invocable`]
//!   for exactly the argument tuples it accepts.
//!
//! Because an argument tuple either satisfies the trait bound or does not,
//! an ill-formed call is rejected when the program is compiled. There is no
//! runtime error path.
//!
//! # Examples
//!
//! ```
//! use lambars_adaptors::callable::Invocable;
//!
//! let add = |first: i32, second: i32| first + second;
//! assert_eq!(add.invoke((2, 3)), 5);
//!
//! let answer = || 42;
//! assert_eq!(answer.invoke(()), 42);
//! ```
//!
//! A call with the wrong arity does not compile:
//!
//! ```compile_fail
//! use lambars_adaptors::callable::Invocable;
//!
//! let add = |first: i32, second: i32| first + second;
//! let _ = add.invoke((2,));
//! ```

mod invoke_macro;
pub mod tuple;

pub use tuple::{Concat, MAX_ARITY, Uncons};

/// A value that can be called with the argument tuple `Args`.
///
/// `Args` is always a tuple: `()` for a nullary call, `(A,)` for a unary
/// call, `(A, B)` for a binary call and so on.
///
/// Invocation borrows the callable immutably, so a single value can be
/// called any number of times and shared between threads whenever it is
/// [`Sync`].
///
/// # Examples
///
/// Implementing the trait by hand gives a callable that is generic over its
/// argument types, which a closure cannot be:
///
/// ```
/// use lambars_adaptors::callable::Invocable;
///
/// struct Larger;
///
/// impl<T: PartialOrd> Invocable<(T, T)> for Larger {
///     type Output = T;
///
///     fn invoke(&self, (left, right): (T, T)) -> T {
///         if left > right { left } else { right }
///     }
/// }
///
/// assert_eq!(Larger.invoke((3, 7)), 7);
/// assert_eq!(Larger.invoke(("b", "a")), "b");
/// ```
pub trait Invocable<Args> {
    /// The value produced by the call.
    type Output;

    /// Calls the value with `arguments`.
    fn invoke(&self, arguments: Args) -> Self::Output;
}

macro_rules! impl_invocable_for_fn {
    ($($index:tt)*) => {
        paste::paste! {
            impl<Function, Return, $([<A $index>],)*> Invocable<($([<A $index>],)*)> for Function
            where
                Function: Fn($([<A $index>]),*) -> Return,
            {
                type Output = Return;

                #[inline]
                fn invoke(&self, ($([<argument_ $index>],)*): ($([<A $index>],)*)) -> Return {
                    self($([<argument_ $index>]),*)
                }
            }
        }
    };
}

impl_invocable_for_fn!();
impl_invocable_for_fn!(0);
impl_invocable_for_fn!(0 1);
impl_invocable_for_fn!(0 1 2);
impl_invocable_for_fn!(0 1 2 3);
impl_invocable_for_fn!(0 1 2 3 4);
impl_invocable_for_fn!(0 1 2 3 4 5);
impl_invocable_for_fn!(0 1 2 3 4 5 6);
impl_invocable_for_fn!(0 1 2 3 4 5 6 7);

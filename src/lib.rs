//! # lambars-adaptors
//!
//! Function adaptors for Rust: small wrapper values that take one or more
//! callables and behave as a new callable with different argument-passing
//! or evaluation semantics.
//!
//! ## Overview
//!
//! - **Callables**: [`Invocable`](callable::Invocable), a single calling
//!   convention over argument tuples, implemented for every `Fn` of up to
//!   eight arguments and for every adaptor in this crate
//! - **Distribution**: [`combine`](compose::combine) routes argument `i` to
//!   callable `i` and combines the results
//! - **Fold**: [`compress`](compose::compress) and
//!   [`compress_with`](compose::compress_with) fold a binary function over any
//!   number of arguments
//! - **Sugar**: [`partial`](compose::partial), [`pipe!`], [`invoke!`],
//!   [`combine!`], [`compress!`]
//!
//! Every composition is resolved at compile time. There is no boxing, no
//! dynamic dispatch and no heap allocation; a call whose argument list does
//! not fit the adaptor does not compile.
//!
//! ## Feature Flags
//!
//! - `combine`: The distribution combinator
//! - `compress`: The fold combinator
//! - `adaptor`: Partial application and `pipe!`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! # #[cfg(all(feature = "combine", feature = "compress"))]
//! # {
//! use lambars_adaptors::prelude::*;
//!
//! let sum = compress_with(|a: i32, b: i32| a + b, 0);
//! let distributed = combine(sum, (|x: i32| x + 1, |x: i32| x * 2));
//! assert_eq!(distributed.invoke((3, 5)), 14);
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the callable trait and every enabled adaptor.
///
/// # Usage
///
/// ```rust
/// use lambars_adaptors::prelude::*;
/// ```
pub mod prelude {
    pub use crate::callable::*;

    #[cfg(any(feature = "combine", feature = "compress", feature = "adaptor"))]
    pub use crate::compose::*;

    pub use crate::invoke;
}

pub mod callable;

#[cfg(any(feature = "combine", feature = "compress", feature = "adaptor"))]
pub mod compose;

//! Function adaptors that compose callables.
//!
//! Every adaptor in this module is a small value that owns the callables it
//! wraps and is itself [`Invocable`](crate::callable::Invocable). Adaptors can
//! therefore be nested freely: a fold can be a wrapped callable of a
//! distribution, a distribution can be partially applied, and so on.
//!
//! # Overview
//!
//! - [`combine`] / [`combine!`]: route argument `i` to callable `i` and
//!   combine the results with an outer function
//! - [`compress`] / [`compress_with`] / [`compress!`]: fold a binary function
//!   over any number of arguments, with or without an initial state
//! - [`partial`]: fix the leading arguments of a callable
//! - [`pipe!`]: feed a value through unary callables from left to right
//!
//! # Examples
//!
//! ## Distribution
//!
//! ```
//! # #[cfg(feature = "combine")]
//! # {
//! use lambars_adaptors::{combine, invoke};
//!
//! let increment = |x: i32| x + 1;
//! let double = |x: i32| x * 2;
//! let sum = |a: i32, b: i32| a + b;
//!
//! // sum(increment(3), double(5)) = sum(4, 10)
//! assert_eq!(invoke!(combine!(sum, increment, double), 3, 5), 14);
//! # }
//! ```
//!
//! ## Fold
//!
//! ```
//! # #[cfg(feature = "compress")]
//! # {
//! use lambars_adaptors::{compress, invoke};
//!
//! let max = compress!(|a: i32, b: i32| a.max(b));
//! assert_eq!(invoke!(max, 2, 3, 4, 5), 5);
//!
//! let plus = compress!(|a: i32, b: i32| a + b, 0);
//! assert_eq!(invoke!(plus, 1, 2, 3), 6);
//! # }
//! ```
//!
//! ## Nesting
//!
//! ```
//! # #[cfg(all(feature = "combine", feature = "compress"))]
//! # {
//! use lambars_adaptors::{combine, compress, invoke};
//!
//! let keep = |total: i32| total;
//! let square = |x: i32| x * x;
//!
//! // step(total, x) = total + x * x
//! let step = combine!(|total: i32, squared: i32| total + squared, keep, square);
//! let sum_of_squares = compress!(step, 0);
//! assert_eq!(invoke!(sum_of_squares, 1, 2, 3), 14);
//! # }
//! ```
//!
//! # Laws
//!
//! ## Fold
//!
//! - `compress_with(f, z)() == z`
//! - `compress_with(f, z)(x, xs...) == compress_with(f, f(z, x))(xs...)`
//! - `compress(f)(x) == x`
//! - `compress(f)(x, y, xs...) == compress(f)(f(x, y), xs...)`
//!
//! ## Distribution
//!
//! - `combine(f, (g0, .., gn-1))(a0, .., an-1) == f(g0(a0), .., gn-1(an-1))`

#[cfg(feature = "combine")]
mod combine;
#[cfg(feature = "compress")]
mod compress;
#[cfg(feature = "adaptor")]
mod partial;
#[cfg(feature = "adaptor")]
mod pipe_macro;

#[cfg(feature = "combine")]
pub use combine::{Combine, Distribute, combine};
#[cfg(feature = "compress")]
pub use compress::{Compress, FoldLeft, FoldState, Seed, Unseeded, compress, compress_with};
#[cfg(feature = "adaptor")]
pub use partial::{Partial, partial};

// Re-export macros (they are already at crate root via #[macro_export])
#[cfg(feature = "combine")]
pub use crate::combine;
#[cfg(feature = "compress")]
pub use crate::compress;
#[cfg(feature = "adaptor")]
pub use crate::pipe;

//! Static plumbing over argument tuples.
//!
//! Argument lists are tuples, so the adaptors need a handful of type-level
//! operations on them: splitting off the first element ([`Uncons`]) and
//! gluing two lists together ([`Concat`]). Both are implemented for every
//! tuple up to [`MAX_ARITY`] elements and resolved entirely at compile time.

/// The largest argument list supported by the adaptors in this crate.
pub const MAX_ARITY: usize = 8;

/// Splits a non-empty tuple into its first element and the remaining tuple.
///
/// Not implemented for `()`, which is how "at least one argument" is
/// expressed in trait bounds.
///
/// # Examples
///
/// ```
/// use lambars_adaptors::callable::Uncons;
///
/// assert_eq!((1, "two", 3.0).uncons(), (1, ("two", 3.0)));
/// assert_eq!((1,).uncons(), (1, ()));
/// ```
pub trait Uncons {
    /// The first element.
    type Head;
    /// Everything after the first element.
    type Tail;

    /// Moves the tuple apart into head and tail.
    fn uncons(self) -> (Self::Head, Self::Tail);
}

/// Appends the elements of `Suffix` after the elements of `Self`.
///
/// Implemented whenever the combined length fits in [`MAX_ARITY`].
///
/// ```
/// use lambars_adaptors::callable::Concat;
///
/// assert_eq!((1, 2).concat(("three",)), (1, 2, "three"));
/// assert_eq!(().concat((true,)), (true,));
/// ```
pub trait Concat<Suffix> {
    /// The concatenated tuple.
    type Output;

    /// Concatenates the two tuples.
    fn concat(self, suffix: Suffix) -> Self::Output;
}

macro_rules! impl_uncons {
    ($first:tt $($rest:tt)*) => {
        paste::paste! {
            impl<[<T $first>], $([<T $rest>],)*> Uncons for ([<T $first>], $([<T $rest>],)*) {
                type Head = [<T $first>];
                type Tail = ($([<T $rest>],)*);

                #[inline]
                fn uncons(self) -> (Self::Head, Self::Tail) {
                    let ([<element_ $first>], $([<element_ $rest>],)*) = self;
                    ([<element_ $first>], ($([<element_ $rest>],)*))
                }
            }
        }
    };
}

impl_uncons!(0);
impl_uncons!(0 1);
impl_uncons!(0 1 2);
impl_uncons!(0 1 2 3);
impl_uncons!(0 1 2 3 4);
impl_uncons!(0 1 2 3 4 5);
impl_uncons!(0 1 2 3 4 5 6);
impl_uncons!(0 1 2 3 4 5 6 7);

macro_rules! impl_concat {
    ([$($prefix:tt)*] [$($suffix:tt)*]) => {
        paste::paste! {
            impl<$([<P $prefix>],)* $([<S $suffix>],)*> Concat<($([<S $suffix>],)*)> for ($([<P $prefix>],)*) {
                type Output = ($([<P $prefix>],)* $([<S $suffix>],)*);

                #[inline]
                fn concat(self, suffix: ($([<S $suffix>],)*)) -> Self::Output {
                    let ($([<prefix_ $prefix>],)*) = self;
                    let ($([<suffix_ $suffix>],)*) = suffix;
                    ($([<prefix_ $prefix>],)* $([<suffix_ $suffix>],)*)
                }
            }
        }
    };
}

// Emits one `Concat` impl per suffix length that still fits.
macro_rules! impl_concat_with_suffixes {
    ([$($prefix:tt)*] [$($suffix:tt)*]) => {
        impl_concat!([$($prefix)*] [$($suffix)*]);
    };
    ([$($prefix:tt)*] [$($suffix:tt)*] $next:tt $($remaining:tt)*) => {
        impl_concat!([$($prefix)*] [$($suffix)*]);
        impl_concat_with_suffixes!([$($prefix)*] [$($suffix)* $next] $($remaining)*);
    };
}

impl_concat_with_suffixes!([] [] 0 1 2 3 4 5 6 7);
impl_concat_with_suffixes!([0] [] 0 1 2 3 4 5 6);
impl_concat_with_suffixes!([0 1] [] 0 1 2 3 4 5);
impl_concat_with_suffixes!([0 1 2] [] 0 1 2 3 4);
impl_concat_with_suffixes!([0 1 2 3] [] 0 1 2 3);
impl_concat_with_suffixes!([0 1 2 3 4] [] 0 1 2);
impl_concat_with_suffixes!([0 1 2 3 4 5] [] 0 1);
impl_concat_with_suffixes!([0 1 2 3 4 5 6] [] 0);
impl_concat_with_suffixes!([0 1 2 3 4 5 6 7] []);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uncons_moves_non_copy_values() {
        let (head, tail) = (String::from("head"), vec![1, 2], 3_u8).uncons();
        assert_eq!(head, "head");
        assert_eq!(tail, (vec![1, 2], 3_u8));
    }

    #[test]
    fn test_concat_empty_tuples() {
        let () = ().concat(());
    }

    #[test]
    fn test_concat_to_max_arity() {
        let joined = (1, 2, 3).concat((4, 5, 6, 7, 8));
        assert_eq!(joined, (1, 2, 3, 4, 5, 6, 7, 8));
    }

    static_assertions::assert_not_impl_any!((): Uncons);
    static_assertions::assert_not_impl_any!((u8, u8, u8, u8, u8): Concat<(u8, u8, u8, u8)>);
}

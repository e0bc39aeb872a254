#![cfg(feature = "compress")]
//! Unit tests for the fold combinator.

use lambars_adaptors::callable::Invocable;
use lambars_adaptors::compose::{Compress, FoldLeft, Seed, Unseeded, compress, compress_with};
use lambars_adaptors::invoke;
use rstest::rstest;
use std::cell::Cell;

/// Binary max, generic over the argument type.
#[derive(Debug, Clone, Copy, Default)]
struct Max;

impl<T: PartialOrd> Invocable<(T, T)> for Max {
    type Output = T;

    fn invoke(&self, (left, right): (T, T)) -> T {
        if left > right { left } else { right }
    }
}

fn plus(left: i32, right: i32) -> i32 {
    left + right
}

fn minus(left: i32, right: i32) -> i32 {
    left - right
}

// =============================================================================
// Unseeded fold
// =============================================================================

#[rstest]
fn max_of_four() {
    assert_eq!(compress(Max).invoke((2, 3, 4, 5)), 5);
}

#[rstest]
fn max_is_generic_over_argument_type() {
    let max = compress(Max);
    assert_eq!(max.invoke((2.5, -1.0, 0.0)), 2.5);
    assert_eq!(max.invoke(("pear", "apple", "plum")), "plum");
}

#[rstest]
#[case(7)]
#[case(-7)]
#[case(i32::MAX)]
fn single_argument_is_returned_unchanged(#[case] value: i32) {
    let calls = Cell::new(0);
    let counted = compress(|left: i32, right: i32| {
        calls.set(calls.get() + 1);
        left + right
    });

    assert_eq!(counted.invoke((value,)), value);
    assert_eq!(calls.get(), 0);
}

#[rstest]
fn unseeded_calls_function_once_per_extra_argument() {
    let calls = Cell::new(0);
    let counted = compress(|left: i32, right: i32| {
        calls.set(calls.get() + 1);
        left + right
    });

    assert_eq!(counted.invoke((1, 2, 3, 4)), 10);
    assert_eq!(calls.get(), 3);
}

#[rstest]
fn unseeded_subtraction_is_left_associative() {
    // ((10 - 3) - 2) - 1
    assert_eq!(compress(minus).invoke((10, 3, 2, 1)), 4);
}

// =============================================================================
// Seeded fold
// =============================================================================

#[rstest]
fn plus_with_zero_seed() {
    assert_eq!(compress_with(plus, 0).invoke((1, 2, 3)), 6);
}

#[rstest]
#[case(0)]
#[case(42)]
#[case(-1)]
fn no_arguments_returns_seed(#[case] seed: i32) {
    assert_eq!(compress_with(plus, seed).invoke(()), seed);
}

#[rstest]
fn seeded_subtraction_is_left_associative() {
    // ((100 - 1) - 2) - 3
    assert_eq!(compress_with(minus, 100).invoke((1, 2, 3)), 94);
}

#[rstest]
fn string_concatenation_keeps_argument_order() {
    let concatenate = compress_with(|acc: String, part: &str| acc + part, String::new());
    assert_eq!(concatenate.invoke(("a", "b", "c")), "abc");
    assert_eq!(concatenate.invoke(("c", "b", "a")), "cba");
}

#[rstest]
fn seed_is_never_mutated() {
    let append = compress_with(
        |mut acc: Vec<&'static str>, item: &'static str| {
            acc.push(item);
            acc
        },
        vec!["seed"],
    );

    assert_eq!(append.invoke(("a", "b")), vec!["seed", "a", "b"]);
    assert_eq!(append.invoke(("c",)), vec!["seed", "c"]);
    assert_eq!(append.invoke(()), vec!["seed"]);
    assert_eq!(append.seed(), &vec!["seed"]);
}

#[rstest]
fn accumulator_type_may_differ_from_arguments() {
    let count_chars = compress_with(|count: usize, word: &str| count + word.chars().count(), 0);
    assert_eq!(count_chars.invoke(("héllo", "wörld")), 10);
}

// =============================================================================
// Construction
// =============================================================================

#[rstest]
fn macro_selects_form_by_argument_count() {
    let unseeded = compress!(plus);
    let seeded = compress!(plus, 10);

    assert_eq!(invoke!(unseeded, 1, 2), 3);
    assert_eq!(invoke!(seeded, 1, 2), 13);
    assert_eq!(invoke!(seeded), 10);
}

#[rstest]
fn seeded_converts_unseeded_fold() {
    let seeded = compress(plus).seeded(5);
    assert_eq!(seeded.invoke(()), 5);
    assert_eq!(seeded.invoke((1,)), 6);
}

#[rstest]
fn new_matches_factories() {
    let from_new: Compress<fn(i32, i32) -> i32, Seed<i32>> = Compress::new(plus, Seed::new(1));
    let from_factory = compress_with(plus as fn(i32, i32) -> i32, 1);
    assert_eq!(from_new.invoke((2, 3)), from_factory.invoke((2, 3)));
    assert_eq!(from_new.state().value(), &1);

    let unseeded: Compress<fn(i32, i32) -> i32> = Compress::new(plus, Unseeded);
    assert_eq!(unseeded.state(), &Unseeded);
}

#[rstest]
fn into_parts_returns_function_and_seed() {
    let (function, seed) = compress_with(plus, 3).into_parts();
    assert_eq!(function(seed.into_value(), 4), 7);
}

#[rstest]
fn fold_left_on_tuples_directly() {
    assert_eq!((1, 2, 3).fold_left(&minus, 0), -6);
    assert_eq!(().fold_left(&minus, 9), 9);
}

#[rstest]
fn fold_over_capture_free_closure_is_zero_sized() {
    let max = compress(|left: u8, right: u8| left.max(right));
    assert_eq!(std::mem::size_of_val(&max), 0);
}

//! Bodies of the built-in strategies, one per file.
//!
//! Each file is also served verbatim as the strategy's source listing, so
//! a file holds exactly the code a reader should see.

pub mod original;
pub mod classic;
pub mod clean;
pub mod counters;
pub mod one_liner;
pub mod functional;
pub mod lookup;
pub mod string_repetition;
pub mod match_remainder;
pub mod match_tuple;
pub mod generator;
pub mod recursive;
pub mod precomputed;
pub mod labelled_loop;
pub mod ordering;
pub mod vector_walk;
pub mod division;

/// Reference label used by the strategies that share a helper
pub(crate) fn label(i: u32) -> String {
    let mut label = String::new();
    if i % 3 == 0 {
        label.push_str("Fizz");
    }
    if i % 5 == 0 {
        label.push_str("Buzz");
    }
    if label.is_empty() {
        label = i.to_string();
    }
    label
}

//! Built-in FizzBuzz strategies.
//!
//! Every strategy prints `label<br>` for each integer in `1..=limit`, where the
//! label is `Fizz` for multiples of 3, `Buzz` for multiples of 5, `FizzBuzz`
//! for multiples of both and the number itself otherwise. They differ only in
//! how they get there.

use std::fmt::Write;

use crate::error::{AppError, AppResult};

use super::{builtin, StrategyDescriptor, StrategyRegistry, StrategyResult};

/// Signature shared by every built-in strategy body
type Render = fn(u32, &mut dyn Write) -> StrategyResult;

/// Static metadata of a built-in strategy
struct CatalogEntry {
    id: &'static str,
    name: &'static str,
    complexity: &'static str,
    description: &'static str,
    render: Render,
    /// Listing of the file `render` lives in
    source: &'static str,
    /// Render once while building the registry and replay the text on every run
    cached: bool,
}

const CATALOG: &[CatalogEntry] = &[
    CatalogEntry {
        id: "original",
        name: "Original (Portfolio Version)",
        complexity: "O(n)",
        description: "Builds each label by appending Fizz and Buzz to an owned String, \
                      falling back to the number when nothing was appended.",
        render: builtin::original::render,
        source: include_str!("builtin/original.rs"),
        cached: false,
    },
    CatalogEntry {
        id: "classic",
        name: "Classic Approach",
        complexity: "O(n)",
        description: "The interview answer: an if/else chain testing 15, then 3, then 5.",
        render: builtin::classic::render,
        source: include_str!("builtin/classic.rs"),
        cached: false,
    },
    CatalogEntry {
        id: "clean",
        name: "Concatenation (Cleaner)",
        complexity: "O(n)",
        description: "Drops the explicit 15 check by concatenating partial labels. \
                      Adding another rule is one more line.",
        render: builtin::clean::render,
        source: include_str!("builtin/clean.rs"),
        cached: false,
    },
    CatalogEntry {
        id: "fast",
        name: "Counter Method (Educational)",
        complexity: "O(n)",
        description: "Replaces the modulo operator with two wrapping counters. \
                      Division by a constant is already cheap, so expect no win.",
        render: builtin::counters::render,
        source: include_str!("builtin/counters.rs"),
        cached: false,
    },
    CatalogEntry {
        id: "ternary",
        name: "One-Liner (Expression)",
        complexity: "O(n)",
        description: "A single nested if-expression per number. Compact, harder to extend.",
        render: builtin::one_liner::render,
        source: include_str!("builtin/one_liner.rs"),
        cached: false,
    },
    CatalogEntry {
        id: "functional",
        name: "Functional (Iterator Map)",
        complexity: "O(n)",
        description: "Maps the range to rendered lines and collects them into one String \
                      before printing. Holds the whole output in memory.",
        render: builtin::functional::render,
        source: include_str!("builtin/functional.rs"),
        cached: false,
    },
    CatalogEntry {
        id: "lookup",
        name: "Lookup Table (Pattern-Based)",
        complexity: "O(n)",
        description: "FizzBuzz repeats every 15 numbers, so a 15-slot table indexed by \
                      (i - 1) % 15 decides the label.",
        render: builtin::lookup::render,
        source: include_str!("builtin/lookup.rs"),
        cached: false,
    },
    CatalogEntry {
        id: "string_mult",
        name: "String Repetition (Mathematical)",
        complexity: "O(n)",
        description: "Repeats \"Fizz\" and \"Buzz\" zero or one times based on the \
                      divisibility test cast to a count.",
        render: builtin::string_repetition::render,
        source: include_str!("builtin/string_repetition.rs"),
        cached: false,
    },
    CatalogEntry {
        id: "switch",
        name: "Match on Remainder",
        complexity: "O(n)",
        description: "Matches i % 15 against the residues that map to each label, \
                      the way a switch statement would.",
        render: builtin::match_remainder::render,
        source: include_str!("builtin/match_remainder.rs"),
        cached: false,
    },
    CatalogEntry {
        id: "match",
        name: "Match on Tuple",
        complexity: "O(n)",
        description: "Matches the pair (i % 3, i % 5). Exhaustive and flat.",
        render: builtin::match_tuple::render,
        source: include_str!("builtin/match_tuple.rs"),
        cached: false,
    },
    CatalogEntry {
        id: "generator",
        name: "Generator (Lazy Evaluation)",
        complexity: "O(n)",
        description: "A lazy iterator built with iter::from_fn yields one line at a time.",
        render: builtin::generator::render,
        source: include_str!("builtin/generator.rs"),
        cached: false,
    },
    CatalogEntry {
        id: "recursive",
        name: "Recursive",
        complexity: "O(n)",
        description: "Splits the range in half and recurses into both halves, \
                      keeping the stack depth logarithmic.",
        render: builtin::recursive::render,
        source: include_str!("builtin/recursive.rs"),
        cached: false,
    },
    CatalogEntry {
        id: "precomputed",
        name: "Pre-computed String (Ultimate Speed)",
        complexity: "O(1)",
        description: "Renders the whole sequence once at startup and copies the finished \
                      text on every run. No logic left to measure, which is the point.",
        render: builtin::precomputed::render,
        source: include_str!("builtin/precomputed.rs"),
        cached: true,
    },
    CatalogEntry {
        id: "goto_loop",
        name: "Labelled Loop",
        complexity: "O(n)",
        description: "A bare labelled loop with manual increment and early continue, \
                      the closest Rust gets to goto.",
        render: builtin::labelled_loop::render,
        source: include_str!("builtin/labelled_loop.rs"),
        cached: false,
    },
    CatalogEntry {
        id: "spaceship",
        name: "Ordering Comparison",
        complexity: "O(n)",
        description: "Compares each remainder with zero through Ord::cmp and branches \
                      on Ordering::Equal. A novelty.",
        render: builtin::ordering::render,
        source: include_str!("builtin/ordering.rs"),
        cached: false,
    },
    CatalogEntry {
        id: "array_walk",
        name: "Vector Fill + Walk",
        complexity: "O(n)",
        description: "Fills a Vec with one slot per number and walks it in place \
                      with iter_mut before joining.",
        render: builtin::vector_walk::render,
        source: include_str!("builtin/vector_walk.rs"),
        cached: false,
    },
    CatalogEntry {
        id: "math_division",
        name: "Modulo-Free (Division)",
        complexity: "O(n)",
        description: "Detects multiples by checking whether i / k changed since i - 1, \
                      without ever taking a remainder.",
        render: builtin::division::render,
        source: include_str!("builtin/division.rs"),
        cached: false,
    },
];

/// Build the registry of built-in strategies printing `1..=limit`.
pub fn builtin_registry(limit: u32) -> AppResult<StrategyRegistry> {
    let mut registry = StrategyRegistry::new();
    for entry in CATALOG {
        let descriptor = if entry.cached {
            let rendered = prerender(entry, limit)?;
            StrategyDescriptor::new(entry.id, entry.name, move |out| {
                out.write_str(&rendered)?;
                Ok(())
            })
        } else {
            let render = entry.render;
            StrategyDescriptor::new(entry.id, entry.name, move |out| render(limit, out))
        };
        registry.register(
            descriptor
                .with_description(entry.description)
                .with_complexity(entry.complexity)
                .with_source(entry.source),
        )?;
    }
    Ok(registry)
}

fn prerender(entry: &CatalogEntry, limit: u32) -> AppResult<String> {
    let mut rendered = String::new();
    match (entry.render)(limit, &mut rendered) {
        Ok(()) => Ok(rendered),
        Err(source) => Err(AppError::Execution {
            strategy_id: entry.id.to_string(),
            partial_output: rendered,
            source,
        }),
    }
}

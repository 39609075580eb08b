use std::fmt::Write;

use crate::constants::LINE_BREAK;
use crate::strategies::StrategyResult;

pub fn render(limit: u32, out: &mut dyn Write) -> StrategyResult {
    const PATTERN: [Option<&str>; 15] = [
        None,
        None,
        Some("Fizz"),
        None,
        Some("Buzz"),
        Some("Fizz"),
        None,
        None,
        Some("Fizz"),
        Some("Buzz"),
        None,
        Some("Fizz"),
        None,
        None,
        Some("FizzBuzz"),
    ];

    for i in 1..=limit {
        match PATTERN[((i - 1) % 15) as usize] {
            Some(word) => write!(out, "{word}{LINE_BREAK}")?,
            None => write!(out, "{i}{LINE_BREAK}")?,
        }
    }
    Ok(())
}

use std::fmt::Write;

use crate::constants::LINE_BREAK;
use crate::strategies::StrategyResult;

pub fn render(limit: u32, out: &mut dyn Write) -> StrategyResult {
    for i in 1..=limit {
        let output = "Fizz".repeat(usize::from(i % 3 == 0)) + &"Buzz".repeat(usize::from(i % 5 == 0));
        if output.is_empty() {
            write!(out, "{i}{LINE_BREAK}")?;
        } else {
            write!(out, "{output}{LINE_BREAK}")?;
        }
    }
    Ok(())
}

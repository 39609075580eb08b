use std::fmt::Write;

use crate::constants::LINE_BREAK;
use crate::strategies::StrategyResult;

pub fn render(limit: u32, out: &mut dyn Write) -> StrategyResult {
    for i in 1..=limit {
        let text: String = if i % 15 == 0 { "FizzBuzz".into() } else if i % 5 == 0 { "Buzz".into() } else if i % 3 == 0 { "Fizz".into() } else { i.to_string() };
        write!(out, "{text}{LINE_BREAK}")?;
    }
    Ok(())
}

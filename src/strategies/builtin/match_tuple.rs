use std::fmt::Write;

use crate::constants::LINE_BREAK;
use crate::strategies::StrategyResult;

pub fn render(limit: u32, out: &mut dyn Write) -> StrategyResult {
    for i in 1..=limit {
        match (i % 3, i % 5) {
            (0, 0) => out.write_str("FizzBuzz")?,
            (0, _) => out.write_str("Fizz")?,
            (_, 0) => out.write_str("Buzz")?,
            _ => write!(out, "{i}")?,
        }
        out.write_str(LINE_BREAK)?;
    }
    Ok(())
}

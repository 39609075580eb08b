use std::fmt::Write;

use crate::constants::LINE_BREAK;
use crate::strategies::StrategyResult;

pub fn render(limit: u32, out: &mut dyn Write) -> StrategyResult {
    let mut output = String::with_capacity(8);
    for i in 1..=limit {
        output.clear();
        if i % 3 == 0 {
            output.push_str("Fizz");
        }
        if i % 5 == 0 {
            output.push_str("Buzz");
        }
        if output.is_empty() {
            write!(out, "{i}")?;
        } else {
            out.write_str(&output)?;
        }
        out.write_str(LINE_BREAK)?;
    }
    Ok(())
}

use std::fmt::Write;

use crate::constants::LINE_BREAK;
use crate::strategies::StrategyResult;

pub fn render(limit: u32, out: &mut dyn Write) -> StrategyResult {
    for i in 1..=limit {
        let fizz = i / 3 != (i - 1) / 3;
        let buzz = i / 5 != (i - 1) / 5;

        match (fizz, buzz) {
            (true, true) => out.write_str("FizzBuzz")?,
            (true, false) => out.write_str("Fizz")?,
            (false, true) => out.write_str("Buzz")?,
            (false, false) => write!(out, "{i}")?,
        }
        out.write_str(LINE_BREAK)?;
    }
    Ok(())
}

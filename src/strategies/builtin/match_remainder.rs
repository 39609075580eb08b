use std::fmt::Write;

use crate::strategies::StrategyResult;

pub fn render(limit: u32, out: &mut dyn Write) -> StrategyResult {
    for i in 1..=limit {
        match i % 15 {
            0 => out.write_str("FizzBuzz<br>")?,
            3 | 6 | 9 | 12 => out.write_str("Fizz<br>")?,
            5 | 10 => out.write_str("Buzz<br>")?,
            _ => write!(out, "{i}<br>")?,
        }
    }
    Ok(())
}

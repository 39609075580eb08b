use std::fmt::Write;

use crate::strategies::StrategyResult;

pub fn render(limit: u32, out: &mut dyn Write) -> StrategyResult {
    for i in 1..=limit {
        if i % 15 == 0 {
            out.write_str("FizzBuzz<br>")?;
        } else if i % 3 == 0 {
            out.write_str("Fizz<br>")?;
        } else if i % 5 == 0 {
            out.write_str("Buzz<br>")?;
        } else {
            write!(out, "{i}<br>")?;
        }
    }
    Ok(())
}

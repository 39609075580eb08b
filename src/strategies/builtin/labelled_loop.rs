use std::fmt::Write;

use crate::strategies::StrategyResult;

pub fn render(limit: u32, out: &mut dyn Write) -> StrategyResult {
    let mut i = 0u32;
    'next: loop {
        i += 1;
        if i > limit {
            break 'next;
        }
        if i % 15 == 0 {
            out.write_str("FizzBuzz<br>")?;
            continue 'next;
        }
        if i % 3 == 0 {
            out.write_str("Fizz<br>")?;
            continue 'next;
        }
        if i % 5 == 0 {
            out.write_str("Buzz<br>")?;
            continue 'next;
        }
        write!(out, "{i}<br>")?;
    }
    Ok(())
}

use std::cmp::Ordering;
use std::fmt::Write;

use crate::constants::LINE_BREAK;
use crate::strategies::StrategyResult;

pub fn render(limit: u32, out: &mut dyn Write) -> StrategyResult {
    for i in 1..=limit {
        let fizz = (i % 3).cmp(&0) == Ordering::Equal;
        let buzz = (i % 5).cmp(&0) == Ordering::Equal;

        if fizz {
            out.write_str("Fizz")?;
        }
        if buzz {
            out.write_str("Buzz")?;
        }
        if !fizz && !buzz {
            write!(out, "{i}")?;
        }
        out.write_str(LINE_BREAK)?;
    }
    Ok(())
}

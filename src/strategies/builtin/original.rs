use std::fmt::Write;

use crate::constants::LINE_BREAK;
use crate::strategies::StrategyResult;

pub fn render(limit: u32, out: &mut dyn Write) -> StrategyResult {
    for x in 1..=limit {
        let mut y = String::new();
        if x % 3 == 0 {
            y.push_str("Fizz");
        }
        if x % 5 == 0 {
            y.push_str("Buzz");
        }
        if y.is_empty() {
            y = x.to_string();
        }
        write!(out, "{y}{LINE_BREAK}")?;
    }
    Ok(())
}

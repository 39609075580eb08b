use std::fmt::Write;

use crate::constants::LINE_BREAK;
use crate::strategies::StrategyResult;

pub fn render(limit: u32, out: &mut dyn Write) -> StrategyResult {
    let (mut c3, mut c5) = (0u8, 0u8);
    for i in 1..=limit {
        c3 += 1;
        c5 += 1;
        let mut hit = false;
        if c3 == 3 {
            out.write_str("Fizz")?;
            c3 = 0;
            hit = true;
        }
        if c5 == 5 {
            out.write_str("Buzz")?;
            c5 = 0;
            hit = true;
        }
        if !hit {
            write!(out, "{i}")?;
        }
        out.write_str(LINE_BREAK)?;
    }
    Ok(())
}

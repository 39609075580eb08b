use std::fmt::Write;

use crate::constants::LINE_BREAK;
use crate::strategies::StrategyResult;

use super::label;

pub fn render(limit: u32, out: &mut dyn Write) -> StrategyResult {
    let mut next = 1u32;
    let lines = std::iter::from_fn(|| {
        if next > limit {
            return None;
        }
        let line = format!("{}{LINE_BREAK}", label(next));
        next += 1;
        Some(line)
    });

    for line in lines {
        out.write_str(&line)?;
    }
    Ok(())
}

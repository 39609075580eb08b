use std::fmt::Write;

use crate::constants::LINE_BREAK;
use crate::strategies::StrategyResult;

use super::label;

/// Only runs while the registry is built; runs replay the finished text
pub fn render(limit: u32, out: &mut dyn Write) -> StrategyResult {
    for i in 1..=limit {
        write!(out, "{}{LINE_BREAK}", label(i))?;
    }
    Ok(())
}

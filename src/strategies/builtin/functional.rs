use std::fmt::Write;

use crate::constants::LINE_BREAK;
use crate::strategies::StrategyResult;

use super::label;

pub fn render(limit: u32, out: &mut dyn Write) -> StrategyResult {
    let rendered: String = (1..=limit)
        .map(|n| format!("{}{LINE_BREAK}", label(n)))
        .collect();
    out.write_str(&rendered)?;
    Ok(())
}

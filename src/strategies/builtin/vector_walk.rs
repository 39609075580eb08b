use std::fmt::Write;

use crate::constants::LINE_BREAK;
use crate::strategies::StrategyResult;

use super::label;

pub fn render(limit: u32, out: &mut dyn Write) -> StrategyResult {
    let mut cells = vec![String::new(); limit as usize];
    cells.iter_mut().zip(1..=limit).for_each(|(cell, n)| {
        cell.push_str(&label(n));
        cell.push_str(LINE_BREAK);
    });

    out.write_str(&cells.concat())?;
    Ok(())
}

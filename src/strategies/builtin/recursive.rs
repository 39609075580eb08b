use std::fmt::{self, Write};

use crate::constants::LINE_BREAK;
use crate::strategies::StrategyResult;

use super::label;

pub fn render(limit: u32, out: &mut dyn Write) -> StrategyResult {
    fn emit(lo: u32, hi: u32, out: &mut dyn Write) -> fmt::Result {
        if lo > hi {
            return Ok(());
        }
        if lo == hi {
            return write!(out, "{}{LINE_BREAK}", label(lo));
        }
        let mid = lo + (hi - lo) / 2;
        emit(lo, mid, out)?;
        emit(mid + 1, hi, out)
    }

    emit(1, limit, out)?;
    Ok(())
}

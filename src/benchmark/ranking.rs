//! Multi-metric ranking
//!
//! Each strategy is ranked independently on mean, min, max and variance
//! (`max - min`), lower being better. The four positions are summed into a
//! rank-sum score which decides the overall rank. Every tie, per metric and
//! overall, goes to the strategy registered first, so a fixed summary set
//! always ranks the same way.

use std::cmp::Ordering;
use std::collections::HashSet;

use crate::{
    error::{AppError, AppResult},
    models::{RankBreakdown, RankedResult, SortKey, StrategySummary},
    strategies::StrategyRegistry,
};

/// Rank `summaries` against the registration order of `registry`.
///
/// Results are returned in registration order. Fails when a summary names a
/// strategy the registry does not know or when a strategy appears twice.
pub fn rank(
    summaries: &[StrategySummary],
    registry: &StrategyRegistry,
) -> AppResult<Vec<RankedResult>> {
    let mut entries = Vec::with_capacity(summaries.len());
    let mut seen = HashSet::with_capacity(summaries.len());
    for summary in summaries {
        let position = registry
            .position(&summary.strategy_id)
            .ok_or_else(|| AppError::NotFound(summary.strategy_id.clone()))?;
        if !seen.insert(position) {
            return Err(AppError::Validation(format!(
                "Strategy listed twice: {}",
                summary.strategy_id
            )));
        }
        entries.push((position, summary));
    }
    entries.sort_by_key(|(position, _)| *position);

    let ranks_on = |metric: fn(&StrategySummary) -> f64| {
        ordinal_ranks(entries.len(), |a, b| {
            metric(entries[a].1).total_cmp(&metric(entries[b].1))
        })
    };
    let mean = ranks_on(|s| s.mean_ms);
    let min = ranks_on(|s| s.min_ms);
    let max = ranks_on(|s| s.max_ms);
    let variance = ranks_on(StrategySummary::variance_ms);

    let breakdowns: Vec<RankBreakdown> = (0..entries.len())
        .map(|i| RankBreakdown {
            mean: mean[i],
            min: min[i],
            max: max[i],
            variance: variance[i],
        })
        .collect();
    let overall = ordinal_ranks(entries.len(), |a, b| {
        breakdowns[a].score().cmp(&breakdowns[b].score())
    });

    Ok(entries
        .iter()
        .zip(breakdowns)
        .zip(overall)
        .map(|(((_, summary), ranks), overall_rank)| RankedResult {
            summary: (*summary).clone(),
            variance_ms: summary.variance_ms(),
            overall_score: ranks.score(),
            ranks,
            overall_rank,
        })
        .collect())
}

/// Order `results` by `key`, ascending, without touching any value.
///
/// Ties keep the input order, which is registration order for the output of
/// [`rank`].
pub fn sort_by(results: &[RankedResult], key: SortKey) -> Vec<&RankedResult> {
    let mut sorted: Vec<&RankedResult> = results.iter().collect();
    match key {
        SortKey::Overall => sorted.sort_by_key(|r| r.overall_rank),
        _ => sorted.sort_by(|a, b| a.sort_value(key).total_cmp(&b.sort_value(key))),
    }
    sorted
}

/// 1-based positions of `0..len` ordered by `cmp`, lower index winning ties.
fn ordinal_ranks<F>(len: usize, cmp: F) -> Vec<u32>
where
    F: Fn(usize, usize) -> Ordering,
{
    let mut order: Vec<usize> = (0..len).collect();
    order.sort_by(|&a, &b| cmp(a, b).then(a.cmp(&b)));

    let mut ranks = vec![0; len];
    for (position, index) in order.into_iter().enumerate() {
        ranks[index] = position as u32 + 1;
    }
    ranks
}

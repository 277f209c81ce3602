use crate::error::Result;
use crate::operator::{Count, Group, Stage, WordCounts};
use crate::worker::WorkerPool;

/// Sum the contributions of a group.
pub fn reduce_group(group: Group) -> Count {
    Count {
        total: group.contributions.iter().sum(),
        word: group.word,
    }
}

/// Run [`reduce_group`] on every group using the worker pool and collect the totals.
///
/// The groups have distinct words, so no total is overwritten while collecting. The mapping
/// keeps the order of `groups`.
pub fn reduce(pool: &WorkerPool, groups: Vec<Group>) -> Result<WordCounts> {
    let counts = pool.execute(Stage::Reduce, groups, reduce_group)?;
    Ok(counts
        .into_iter()
        .map(|Count { word, total }| (word, total))
        .collect())
}

//! The stages of the word count and the records flowing between them.
//!
//! ```text
//! tokens -> map -> Vec<Pair> -> shuffle -> Vec<Group> -> reduce -> WordCounts -> top_n
//! ```
//!
//! `map` and `reduce` work item by item and are run on the worker pool, `shuffle` and `top_n`
//! need a global view of their input and run on the calling thread.

use std::fmt::Display;

use fxhash::FxBuildHasher;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

pub use limit_sorted::*;
pub use map::*;
pub use reduce::*;
pub use shuffle::*;

mod limit_sorted;
mod map;
mod reduce;
mod shuffle;
pub mod sink;
pub mod source;

/// Output of the map stage: one occurrence of a word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pair {
    pub word: String,
    pub contribution: u64,
}

/// Output of the shuffle stage: all the contributions of a word, in the order they were mapped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub word: String,
    pub contributions: Vec<u64>,
}

/// Output of the reduce stage: the number of occurrences of a word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Count {
    pub word: String,
    pub total: u64,
}

/// An entry of the final ranking.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RankedEntry {
    pub word: String,
    pub total: u64,
}

impl RankedEntry {
    pub fn new(word: impl Into<String>, total: u64) -> Self {
        Self {
            word: word.into(),
            total,
        }
    }
}

impl From<Count> for RankedEntry {
    fn from(count: Count) -> Self {
        Self {
            word: count.word,
            total: count.total,
        }
    }
}

/// Word to total mapping. Iteration follows the order in which each word first appeared in the
/// text.
pub type WordCounts = IndexMap<String, u64, FxBuildHasher>;

/// A step of the pipeline, used for reporting and error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Tokenize,
    Map,
    Shuffle,
    Reduce,
    Rank,
}

impl Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Stage::Tokenize => "tokenize",
            Stage::Map => "map",
            Stage::Shuffle => "shuffle",
            Stage::Reduce => "reduce",
            Stage::Rank => "rank",
        };
        f.write_str(name)
    }
}

use crate::error::Result;
use crate::operator::{Pair, Stage};
use crate::worker::WorkerPool;

/// Emit a single occurrence of `word`.
pub fn map_word(word: String) -> Pair {
    Pair {
        word,
        contribution: 1,
    }
}

/// Run [`map_word`] on every token using the worker pool.
///
/// The pairs are returned in the same order as the tokens.
pub fn map(pool: &WorkerPool, tokens: Vec<String>) -> Result<Vec<Pair>> {
    pool.execute(Stage::Map, tokens, map_word)
}

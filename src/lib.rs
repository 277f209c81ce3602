//! Word frequency counting as a parallel map, shuffle and reduce pipeline.
//!
//! The text is split into tokens, every token is mapped to a `(word, 1)` pair on a pool of worker
//! threads, the pairs are grouped by word, every group is reduced to its total on the pool again
//! and the most frequent words are ranked.
//!
//! ```
//! # use wordfreq::count_words;
//! let ranked = count_words("apple apple banana grape grape grape", 4, 2).unwrap();
//! assert_eq!(ranked[0].word, "grape");
//! assert_eq!(ranked[0].total, 3);
//! ```
#[macro_use]
extern crate derivative;
#[macro_use]
extern crate log;

pub mod config;
pub mod error;
pub mod operator;
pub mod pipeline;
pub mod prelude;
pub mod reporter;
pub mod tokenizer;
pub mod worker;


pub use config::PipelineConfig;
pub use error::{Error, Result};
pub use pipeline::{count_words, Pipeline};

use std::sync::Arc;
use std::time::Duration;

use crate::config::PipelineConfig;
use crate::error::Result;
use crate::operator::sink::Sink;
use crate::operator::source::TextSource;
use crate::operator::{self, RankedEntry, Stage, WordCounts};
use crate::reporter::{LogReporter, Reporter};
use crate::tokenizer::Tokenizer;
use crate::worker::WorkerPool;

/// The word count job: tokenize, map, shuffle, reduce and rank.
///
/// Map and reduce run on a pool of `config.workers` threads and each of them is a full barrier:
/// the next stage starts only after every job of the previous one is done. A failing job aborts
/// the run and nothing is returned for the other words.
///
/// ## Example
///
/// ```
/// # use wordfreq::{Pipeline, PipelineConfig};
/// # use wordfreq::operator::RankedEntry;
/// let config = PipelineConfig {
///     top_n: 2,
///     ..PipelineConfig::local(4)
/// };
/// let pipeline = Pipeline::new(config).unwrap();
/// let ranked = pipeline.run("apple apple banana grape grape grape").unwrap();
/// assert_eq!(
///     ranked,
///     vec![RankedEntry::new("grape", 3), RankedEntry::new("apple", 2)]
/// );
/// ```
#[derive(Clone, Derivative)]
#[derivative(Debug)]
pub struct Pipeline {
    config: PipelineConfig,
    tokenizer: Tokenizer,
    pool: WorkerPool,
    #[derivative(Debug = "ignore")]
    reporter: Arc<dyn Reporter>,
}

impl Pipeline {
    pub fn new(config: PipelineConfig) -> Result<Self> {
        config.validate()?;
        info!("Constructing pipeline: {:?}", config);
        Ok(Self {
            tokenizer: Tokenizer::new(config.min_length),
            pool: WorkerPool::new(config.workers),
            config,
            reporter: Arc::new(LogReporter),
        })
    }

    /// Send the progress of the runs of this pipeline to `reporter` instead of the log.
    pub fn with_reporter(mut self, reporter: Arc<dyn Reporter>) -> Self {
        self.reporter = reporter;
        self
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Count the occurrences of every word of `text`.
    ///
    /// The mapping iterates the words in order of first appearance.
    pub fn count(&self, text: &str) -> Result<WordCounts> {
        let tokens = self.stage(Stage::Tokenize, text.chars().count(), Vec::len, || {
            Ok(self.tokenizer.tokenize(text))
        })?;
        let pairs = self.stage(Stage::Map, tokens.len(), Vec::len, || {
            operator::map(&self.pool, tokens)
        })?;
        let groups = self.stage(Stage::Shuffle, pairs.len(), Vec::len, || {
            Ok(operator::shuffle(pairs))
        })?;
        self.stage(Stage::Reduce, groups.len(), WordCounts::len, || {
            operator::reduce(&self.pool, groups)
        })
    }

    /// Count the words of `text` and return the `config.top_n` most frequent ones.
    pub fn run(&self, text: &str) -> Result<Vec<RankedEntry>> {
        let counts = self.count(text)?;
        self.stage(Stage::Rank, counts.len(), Vec::len, || {
            Ok(operator::top_n(&counts, self.config.top_n))
        })
    }

    /// Fetch the text from `source`, run the pipeline and hand the ranking to `sink`.
    ///
    /// If the text is not available no stage is run; if a stage fails the sink is not invoked.
    /// Errors are returned to the caller, which is in charge of logging them.
    pub fn run_source<S, K>(&self, source: &S, sink: &mut K) -> Result<Vec<RankedEntry>>
    where
        S: TextSource + ?Sized,
        K: Sink + ?Sized,
    {
        let text = source.fetch()?;
        info!("Fetched {} bytes from {}", text.len(), source.name());
        let ranked = self.run(&text)?;
        sink.consume(&ranked)?;
        Ok(ranked)
    }

    /// Run a stage inside a tracing span, notifying the reporter.
    fn stage<T>(
        &self,
        stage: Stage,
        input_len: usize,
        output_len: impl FnOnce(&T) -> usize,
        body: impl FnOnce() -> Result<T>,
    ) -> Result<T> {
        let _span = tracing::debug_span!("stage", %stage).entered();
        self.reporter.stage_started(stage, input_len);
        let start = coarsetime::Instant::now();
        match body() {
            Ok(out) => {
                let elapsed = Duration::from_millis(start.elapsed().as_millis());
                self.reporter.stage_finished(stage, output_len(&out), elapsed);
                Ok(out)
            }
            Err(e) => {
                self.reporter.stage_failed(stage, &e);
                Err(e)
            }
        }
    }
}

/// Rank the `top_n` most frequent words of `text` that have at least `min_length` characters.
///
/// Runs on as many workers as there are hardware threads.
pub fn count_words(text: &str, min_length: usize, top_n: usize) -> Result<Vec<RankedEntry>> {
    let config = PipelineConfig {
        min_length,
        top_n,
        ..Default::default()
    };
    Pipeline::new(config)?.run(text)
}

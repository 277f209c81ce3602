#![allow(dead_code)] // not all tests use all the members

use std::str::FromStr;

use itertools::{process_results, Itertools};
use log::*;

use wordfreq::PipelineConfig;

/// Helper functions for running the integration tests.
pub struct TestHelper;

impl TestHelper {
    fn setup() {
        let _ = env_logger::Builder::new()
            .filter(None, log::LevelFilter::Debug)
            .is_test(true)
            .try_init();
    }

    /// Run the test body once for every worker count to test.
    ///
    /// The counts come from `WORDFREQ_TEST_WORKERS` (comma separated, without spaces) and
    /// default to 1, 2, 4 and 8 workers.
    pub fn with_workers<F>(body: F)
    where
        F: Fn(PipelineConfig),
    {
        Self::setup();
        let workers =
            Self::parse_list_from_env("WORDFREQ_TEST_WORKERS").unwrap_or_else(|| vec![1, 2, 4, 8]);
        for num_workers in workers {
            let config = PipelineConfig::local(num_workers);
            debug!("Running test with config: {:?}", config);
            body(config);
        }
    }

    /// Parse a list of arguments from an environment variable.
    ///
    /// The list should be comma separated without spaces.
    fn parse_list_from_env(var_name: &str) -> Option<Vec<usize>> {
        let content = std::env::var(var_name).ok()?;
        if content.is_empty() {
            return Some(Vec::new());
        }
        let values = content.split(',').map(usize::from_str).collect_vec();
        process_results(values.into_iter(), |values| values.collect_vec()).ok()
    }
}

//! Bounded pool of threads running independent jobs with a join barrier.

use std::any::Any;
use std::convert::Infallible;
use std::fmt::Display;
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, Ordering};

use crate::config::available_parallelism;
use crate::error::{Error, Result};
use crate::operator::Stage;

/// Runs a function over a list of independent items on a fixed number of threads.
///
/// Every call spawns its workers inside a thread scope and returns only when all of them have
/// been joined: there is no state shared between two calls, and the jobs can borrow from the
/// caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkerPool {
    num_workers: usize,
}

impl Default for WorkerPool {
    fn default() -> Self {
        Self::new(available_parallelism())
    }
}

/// Outcome of a single job, as sent back by a worker.
type JobResult<Out> = (usize, std::result::Result<Out, String>);

impl WorkerPool {
    /// Create a pool of `num_workers` threads, at least one.
    pub fn new(num_workers: usize) -> Self {
        Self {
            num_workers: num_workers.max(1),
        }
    }

    pub fn num_workers(&self) -> usize {
        self.num_workers
    }

    /// Apply `f` to every item, returning the results in the order of `items`.
    ///
    /// A panic inside `f` aborts the stage: see [`WorkerPool::try_execute`].
    pub fn execute<In, Out, F>(&self, stage: Stage, items: Vec<In>, f: F) -> Result<Vec<Out>>
    where
        In: Send,
        Out: Send,
        F: Fn(In) -> Out + Sync,
    {
        self.try_execute(stage, items, |item| Ok::<_, Infallible>(f(item)))
    }

    /// Apply the fallible `f` to every item, returning the results in the order of `items`.
    ///
    /// The first job that returns an error or panics makes the workers stop picking new jobs;
    /// after every worker is joined the failure is returned as [`Error::StageFailure`] and all
    /// the results computed so far are dropped.
    pub fn try_execute<In, Out, E, F>(
        &self,
        stage: Stage,
        items: Vec<In>,
        f: F,
    ) -> Result<Vec<Out>>
    where
        In: Send,
        Out: Send,
        E: Display,
        F: Fn(In) -> std::result::Result<Out, E> + Sync,
    {
        let num_jobs = items.len();
        if num_jobs == 0 {
            return Ok(Vec::new());
        }
        let num_workers = self.num_workers.min(num_jobs);
        debug!(
            "{} stage: {} jobs on {} workers",
            stage, num_jobs, num_workers
        );

        let (job_sender, job_receiver) = flume::unbounded::<(usize, In)>();
        for job in items.into_iter().enumerate() {
            job_sender
                .send(job)
                .map_err(|_| Error::stage(stage, "job queue closed"))?;
        }
        // workers stop when the queue is drained
        drop(job_sender);

        let abort = AtomicBool::new(false);
        let f = &f;
        let abort = &abort;

        std::thread::scope(|scope| -> Result<Vec<Out>> {
            let (result_sender, result_receiver) = flume::unbounded::<JobResult<Out>>();
            for worker_id in 0..num_workers {
                let jobs = job_receiver.clone();
                let results = result_sender.clone();
                std::thread::Builder::new()
                    .name(format!("{stage}-{worker_id}"))
                    .spawn_scoped(scope, move || {
                        while let Ok((index, item)) = jobs.recv() {
                            if abort.load(Ordering::Acquire) {
                                break;
                            }
                            let outcome = match panic::catch_unwind(AssertUnwindSafe(|| f(item)))
                            {
                                Ok(Ok(out)) => Ok(out),
                                Ok(Err(e)) => Err(e.to_string()),
                                Err(payload) => Err(panic_message(payload.as_ref())),
                            };
                            if let Err(reason) = &outcome {
                                error!(
                                    "{} worker {} failed on job {}: {}",
                                    stage, worker_id, index, reason
                                );
                                abort.store(true, Ordering::Release);
                            }
                            if results.send((index, outcome)).is_err() {
                                break;
                            }
                        }
                    })?;
            }
            drop(result_sender);

            let mut slots: Vec<Option<Out>> = (0..num_jobs).map(|_| None).collect();
            let mut failure = None;
            for (index, outcome) in result_receiver.iter() {
                match outcome {
                    Ok(out) => slots[index] = Some(out),
                    Err(reason) => {
                        failure.get_or_insert(reason);
                    }
                }
            }
            if let Some(reason) = failure {
                return Err(Error::stage(stage, reason));
            }
            slots
                .into_iter()
                .collect::<Option<Vec<_>>>()
                .ok_or_else(|| Error::stage(stage, "a worker exited before completing its jobs"))
        })
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        format!("job panicked: {message}")
    } else if let Some(message) = payload.downcast_ref::<String>() {
        format!("job panicked: {message}")
    } else {
        "job panicked".to_string()
    }
}

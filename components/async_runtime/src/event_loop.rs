//! Event loop implementation.
//!
//! The event loop is the single consumer of the job queue. Each turn takes
//! the oldest job and runs it to completion; jobs submitted while a job runs
//! land behind everything already queued.

use crate::job_queue::{Job, JobQueue, JobScheduler};
use core_types::JsError;
use tracing::{trace, warn};

/// The host run loop.
///
/// # Examples
///
/// ```
/// use async_runtime::{EventLoop, Job, JobScheduler};
/// use core_types::JsValue;
///
/// let event_loop = EventLoop::new();
///
/// event_loop.enqueue_job(Job::new("ScriptJobs", || Ok(JsValue::Undefined)));
/// assert_eq!(event_loop.run_until_done().unwrap(), 1);
/// ```
#[derive(Debug, Default)]
pub struct EventLoop {
    job_queue: JobQueue,
}

impl EventLoop {
    /// Creates a new EventLoop with an empty queue.
    pub fn new() -> Self {
        Self {
            job_queue: JobQueue::new(),
        }
    }

    /// Returns true if no job is waiting.
    pub fn is_idle(&self) -> bool {
        self.job_queue.is_empty()
    }

    /// Number of jobs waiting to run.
    pub fn pending_jobs(&self) -> usize {
        self.job_queue.len()
    }

    /// Runs one turn: the oldest job, if any.
    ///
    /// # Returns
    ///
    /// `Ok(true)` if a job ran, `Ok(false)` if the queue was empty, or the
    /// job's error.
    pub fn turn(&self) -> Result<bool, JsError> {
        let Some(job) = self.job_queue.dequeue() else {
            return Ok(false);
        };
        let queue_name = job.queue_name().to_string();
        trace!(queue = %queue_name, "running job");
        job.run().map_err(|err| {
            warn!(queue = %queue_name, error = %err, "job failed");
            err
        })?;
        Ok(true)
    }

    /// Runs turns until the queue is empty.
    ///
    /// Stops at the first failing job and returns its error; jobs behind it
    /// stay queued and run on the next call.
    ///
    /// # Returns
    ///
    /// The number of jobs that completed.
    pub fn run_until_done(&self) -> Result<usize, JsError> {
        let mut completed = 0;
        while self.turn()? {
            completed += 1;
        }
        Ok(completed)
    }
}

impl JobScheduler for EventLoop {
    fn enqueue_job(&self, job: Job) {
        self.job_queue.enqueue(job);
    }
}

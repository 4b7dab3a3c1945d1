//! Job queue management.
//!
//! Jobs are deferred callbacks: once enqueued a job will run, on a later turn
//! of the event loop, in the order it was submitted. There is no priority and
//! no cancellation.

use std::cell::RefCell;
use std::collections::VecDeque;

use core_types::{JsResult, JsValue};
use tracing::debug;

/// Name of the queue used for script evaluation jobs.
pub const SCRIPT_JOBS: &str = "ScriptJobs";

/// Name of the queue used for promise reaction jobs.
pub const PROMISE_JOBS: &str = "PromiseJobs";

/// A job to be executed by the event loop.
///
/// The callback captures everything it needs; it receives no arguments when
/// it eventually runs.
pub struct Job {
    queue_name: String,
    callback: Box<dyn FnOnce() -> JsResult<JsValue>>,
}

impl Job {
    /// Creates a new Job bound for the named queue.
    ///
    /// # Arguments
    ///
    /// * `queue_name` - The job queue the job belongs to (e.g. `"PromiseJobs"`)
    /// * `f` - The function to execute when the job runs
    pub fn new<F>(queue_name: impl Into<String>, f: F) -> Self
    where
        F: FnOnce() -> JsResult<JsValue> + 'static,
    {
        Self {
            queue_name: queue_name.into(),
            callback: Box::new(f),
        }
    }

    /// The queue this job was submitted to.
    pub fn queue_name(&self) -> &str {
        &self.queue_name
    }

    /// Executes the job.
    ///
    /// # Returns
    ///
    /// The completion of the callback.
    pub fn run(self) -> JsResult<JsValue> {
        (self.callback)()
    }
}

impl std::fmt::Debug for Job {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Job {{ queue_name: {:?}, .. }}", self.queue_name)
    }
}

/// The capability to defer a job to a later turn.
///
/// The abstract operations only ever submit work through this trait; the
/// host owns the queue and decides when to drain it.
pub trait JobScheduler {
    /// Submit a job. It will run after every job submitted before it.
    fn enqueue_job(&self, job: Job);
}

/// A FIFO queue of jobs.
///
/// Interior mutability lets a running job hold a shared reference to the
/// queue and submit follow-up jobs.
#[derive(Debug, Default)]
pub struct JobQueue {
    queue: RefCell<VecDeque<Job>>,
}

impl JobQueue {
    /// Creates a new empty JobQueue.
    pub fn new() -> Self {
        Self {
            queue: RefCell::new(VecDeque::new()),
        }
    }

    /// Adds a job to the end of the queue.
    pub fn enqueue(&self, job: Job) {
        let mut queue = self.queue.borrow_mut();
        queue.push_back(job);
        debug!(pending = queue.len(), "job enqueued");
    }

    /// Removes and returns the next job from the queue.
    pub fn dequeue(&self) -> Option<Job> {
        self.queue.borrow_mut().pop_front()
    }

    /// Returns true if the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.queue.borrow().is_empty()
    }

    /// Returns the number of jobs in the queue.
    pub fn len(&self) -> usize {
        self.queue.borrow().len()
    }
}

impl JobScheduler for JobQueue {
    fn enqueue_job(&self, job: Job) {
        self.enqueue(job);
    }
}

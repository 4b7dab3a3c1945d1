//! ## [9.5 Jobs and Host Operations to Enqueue Jobs](https://tc39.es/ecma262/#sec-jobs)
//!
//! Jobs are handed to whatever [`JobScheduler`] the host supplies; they run
//! later, in submission order, and cannot be cancelled.

use async_runtime::{Job, JobScheduler};
use core_types::{JsResult, JsValue};
use tracing::debug;

use crate::meta::{assert, assertion_failure};

/// EnqueueJob ( queueName, job, arguments )
///
/// `job` must be callable, and when it has a numeric `length` the argument
/// count must match it. It is called with `this` undefined.
///
/// ```
/// use abstract_ops::intrinsics::create_builtin_function;
/// use abstract_ops::jobs::enqueue_job;
/// use async_runtime::{EventLoop, PROMISE_JOBS};
/// use core_types::JsValue;
///
/// let event_loop = EventLoop::new();
/// let job = create_builtin_function(|_, args| Ok(args[0].clone()), 1, "job");
/// enqueue_job(&event_loop, PROMISE_JOBS, &job.into(), vec![JsValue::number(1.0)]);
///
/// assert_eq!(event_loop.pending_jobs(), 1);
/// assert_eq!(event_loop.run_until_done().unwrap(), 1);
/// ```
#[track_caller]
pub fn enqueue_job(
    scheduler: &dyn JobScheduler,
    queue_name: &str,
    job: &JsValue,
    args: Vec<JsValue>,
) {
    let func = match job {
        JsValue::Object(func) if func.is_callable() => func.clone(),
        _ => assertion_failure("job is not callable"),
    };
    if let Some(length) = func
        .get_own_property(&"length".into())
        .and_then(|prop| prop.value.as_number())
    {
        assert(
            args.len() as f64 == length,
            "job argument count does not match its length",
        );
    }
    debug!(queue = queue_name, args = args.len(), "enqueueing job");
    scheduler.enqueue_job(Job::new(queue_name, move || {
        func.call(&JsValue::Undefined, &args)
    }));
}

/// Enqueue a Rust closure as a job.
pub fn enqueue_native_job<F>(scheduler: &dyn JobScheduler, queue_name: &str, job: F)
where
    F: FnOnce() -> JsResult<JsValue> + 'static,
{
    debug!(queue = queue_name, "enqueueing native job");
    scheduler.enqueue_job(Job::new(queue_name, job));
}

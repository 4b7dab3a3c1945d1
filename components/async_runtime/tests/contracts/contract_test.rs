//! Contract tests for async_runtime
//!
//! These tests pin the deferred-callback contract: fire-and-forget, FIFO
//! by submission, no cancellation.

use async_runtime::{EventLoop, Job, JobScheduler, PROMISE_JOBS, SCRIPT_JOBS};
use core_types::JsValue;
use std::cell::Cell;
use std::rc::Rc;

mod job_contract {
    use super::*;

    #[test]
    fn job_keeps_its_queue_name() {
        let job = Job::new(PROMISE_JOBS, || Ok(JsValue::Undefined));
        assert_eq!(job.queue_name(), "PromiseJobs");
    }

    #[test]
    fn job_runs_with_only_captured_state() {
        let captured = JsValue::string("captured");
        let job = Job::new(SCRIPT_JOBS, move || Ok(captured));
        assert_eq!(job.run().unwrap(), JsValue::string("captured"));
    }
}

mod scheduling_contract {
    use super::*;

    #[test]
    fn every_enqueued_job_eventually_runs() {
        let event_loop = EventLoop::new();
        let ran = Rc::new(Cell::new(0));
        for queue in [SCRIPT_JOBS, PROMISE_JOBS, "HostDefined"] {
            let ran = ran.clone();
            event_loop.enqueue_job(Job::new(queue, move || {
                ran.set(ran.get() + 1);
                Ok(JsValue::Undefined)
            }));
        }

        assert_eq!(event_loop.run_until_done().unwrap(), 3);
        assert_eq!(ran.get(), 3);
    }

    #[test]
    fn ordering_is_by_submission_across_queue_names() {
        let event_loop = EventLoop::new();
        let seen = Rc::new(std::cell::RefCell::new(Vec::new()));
        for queue in [PROMISE_JOBS, SCRIPT_JOBS, PROMISE_JOBS] {
            let seen = seen.clone();
            event_loop.enqueue_job(Job::new(queue, move || {
                seen.borrow_mut().push(queue);
                Ok(JsValue::Undefined)
            }));
        }

        event_loop.run_until_done().unwrap();
        assert_eq!(*seen.borrow(), vec![PROMISE_JOBS, SCRIPT_JOBS, PROMISE_JOBS]);
    }
}

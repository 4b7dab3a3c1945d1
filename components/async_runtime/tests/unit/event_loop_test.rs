//! Unit tests for EventLoop

use async_runtime::{EventLoop, Job, JobQueue, JobScheduler, SCRIPT_JOBS};
use core_types::{JsError, JsValue};
use std::cell::RefCell;
use std::rc::Rc;

fn recording_job(log: &Rc<RefCell<Vec<i32>>>, n: i32) -> Job {
    let log = log.clone();
    Job::new(SCRIPT_JOBS, move || {
        log.borrow_mut().push(n);
        Ok(JsValue::number(n as f64))
    })
}

#[test]
fn new_event_loop_is_idle() {
    let event_loop = EventLoop::new();
    assert!(event_loop.is_idle());
}

#[test]
fn enqueue_job_does_not_run_it() {
    let event_loop = EventLoop::new();
    let log = Rc::new(RefCell::new(vec![]));
    event_loop.enqueue_job(recording_job(&log, 1));
    assert!(!event_loop.is_idle());
    assert!(log.borrow().is_empty());
}

#[test]
fn jobs_run_in_submission_order() {
    let event_loop = EventLoop::new();
    let log = Rc::new(RefCell::new(vec![]));
    for n in 1..=5 {
        event_loop.enqueue_job(recording_job(&log, n));
    }

    event_loop.run_until_done().unwrap();

    assert_eq!(*log.borrow(), vec![1, 2, 3, 4, 5]);
}

#[test]
fn each_turn_runs_exactly_one_job() {
    let event_loop = EventLoop::new();
    let log = Rc::new(RefCell::new(vec![]));
    event_loop.enqueue_job(recording_job(&log, 1));
    event_loop.enqueue_job(recording_job(&log, 2));

    assert!(event_loop.turn().unwrap());
    assert_eq!(*log.borrow(), vec![1]);
    assert!(event_loop.turn().unwrap());
    assert!(!event_loop.turn().unwrap());
}

#[test]
fn failing_job_surfaces_its_error() {
    let event_loop = EventLoop::new();
    event_loop.enqueue_job(Job::new(SCRIPT_JOBS, || Err(JsError::type_error("nope"))));
    let err = event_loop.run_until_done().unwrap_err();
    assert!(err.is_type_error());
    assert!(event_loop.is_idle());
}

#[test]
fn job_queue_is_a_scheduler() {
    fn schedule(scheduler: &dyn JobScheduler, job: Job) {
        scheduler.enqueue_job(job);
    }

    let queue = JobQueue::new();
    let log = Rc::new(RefCell::new(vec![]));
    schedule(&queue, recording_job(&log, 7));
    assert_eq!(queue.len(), 1);
    queue.dequeue().unwrap().run().unwrap();
    assert_eq!(*log.borrow(), vec![7]);
}

//! Deferred job execution for the abstract operations.
//!
//! This crate provides the only asynchrony the abstract operations need:
//! a way to schedule a callback to run later, on a fresh turn of the event
//! loop. Jobs run in submission order, cannot be cancelled, and always run
//! once enqueued.
//!
//! # Overview
//!
//! - [`Job`] - A deferred callback tagged with its queue name
//! - [`JobScheduler`] - The "enqueue" capability consumed by callers
//! - [`JobQueue`] - A FIFO implementation of that capability
//! - [`EventLoop`] - The host run loop that drains the queue, one job per turn
//!
//! # Examples
//!
//! ```
//! use async_runtime::{EventLoop, Job, JobScheduler, PROMISE_JOBS};
//! use core_types::JsValue;
//!
//! let event_loop = EventLoop::new();
//! event_loop.enqueue_job(Job::new(PROMISE_JOBS, || Ok(JsValue::number(1.0))));
//! assert_eq!(event_loop.pending_jobs(), 1);
//!
//! event_loop.run_until_done().unwrap();
//! assert!(event_loop.is_idle());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod event_loop;
pub mod job_queue;

// Re-export main types at crate root
pub use event_loop::EventLoop;
pub use job_queue::{Job, JobQueue, JobScheduler, PROMISE_JOBS, SCRIPT_JOBS};

//! Integration test suite for the ECMAScript abstract operations
//!
//! Tests here cross component boundaries: values from `core_types`, jobs
//! drained by `async_runtime`, and the operations in `abstract_ops` that tie
//! them together.

/// Re-export components for test convenience
pub mod components {
    pub use abstract_ops;
    pub use async_runtime;
    pub use core_types;
}

//! # Resource Testing
//!
//! Test doubles for the point-of-sale and todo services.
//!
//! This crate provides:
//! - `FixedClock`: deterministic time
//! - `InMemoryTodoRepository`: a `TodoRepository` that needs no database
//!
//! ## Example
//!
//! ```
//! use resource_testing::{test_clock, InMemoryTodoRepository};
//! use resource_core::TodoRepository;
//! use std::sync::Arc;
//!
//! # tokio_test::block_on(async {
//! let repo = InMemoryTodoRepository::new(Arc::new(test_clock()));
//! let todo = repo.create("Buy milk".to_string()).await.unwrap();
//! assert!(!todo.completed);
//! # });
//! ```

use chrono::{DateTime, Utc};
use resource_core::environment::Clock;

mod todo_repository;

/// Mock implementations of Environment traits and repositories.
pub mod mocks {
    use super::{Clock, DateTime, Utc};

    pub use crate::todo_repository::InMemoryTodoRepository;

    /// Fixed clock for deterministic tests
    ///
    /// Always returns the same time, making tests reproducible.
    ///
    /// # Example
    ///
    /// ```
    /// use resource_testing::mocks::FixedClock;
    /// use resource_core::environment::Clock;
    /// use chrono::Utc;
    ///
    /// let clock = FixedClock::new(Utc::now());
    /// let time1 = clock.now();
    /// let time2 = clock.now();
    /// assert_eq!(time1, time2); // Always the same!
    /// ```
    #[derive(Debug, Clone)]
    pub struct FixedClock {
        time: DateTime<Utc>,
    }

    impl FixedClock {
        /// Create a new fixed clock with the given time
        #[must_use]
        pub const fn new(time: DateTime<Utc>) -> Self {
            Self { time }
        }
    }

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.time
        }
    }

    /// Create a default fixed clock for tests (2025-01-01 00:00:00 UTC)
    ///
    /// # Panics
    ///
    /// This function will panic if the hardcoded timestamp fails to parse,
    /// which should never happen in practice.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn test_clock() -> FixedClock {
        FixedClock::new(
            DateTime::parse_from_rfc3339("2025-01-01T00:00:00Z")
                .expect("hardcoded timestamp should always parse")
                .with_timezone(&Utc),
        )
    }
}

// Re-export commonly used items
pub use mocks::{FixedClock, InMemoryTodoRepository, test_clock};

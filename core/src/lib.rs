//! # Resource Core
//!
//! Shared contracts for the point-of-sale and todo services.
//!
//! This crate holds the pieces both services agree on and nothing that talks to
//! the network or a database:
//!
//! - **Environment**: injected dependencies (`Clock`) so time is testable
//! - **Errors**: the `ResourceError` taxonomy every storage layer returns
//! - **Todo**: the todo entity and the `TodoRepository` capability trait
//!
//! ## Layering
//!
//! ```text
//! handler → service (optional) → repository → store
//! ```
//!
//! Handlers live in the service crates, the HTTP error mapping lives in
//! `resource-web`, and concrete repositories live next to their service.

// Re-export commonly used types
pub use chrono::{DateTime, Utc};

pub mod todo;

pub use error::{ResourceError, Result};
pub use todo::{Todo, TodoId, TodoRepository};

/// Environment module - Dependency injection traits
///
/// All ambient dependencies (currently only time) are abstracted behind traits
/// and injected into services, so tests can pin them.
pub mod environment {
    use chrono::{DateTime, Utc};

    /// Clock trait - abstracts time operations for testability
    ///
    /// # Examples
    ///
    /// ```
    /// use resource_core::environment::{Clock, SystemClock};
    ///
    /// let clock = SystemClock;
    /// let before = clock.now();
    /// assert!(clock.now() >= before);
    /// ```
    pub trait Clock: Send + Sync {
        /// Get the current time
        fn now(&self) -> DateTime<Utc>;
    }

    /// Production clock backed by the system time.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct SystemClock;

    impl Clock for SystemClock {
        fn now(&self) -> DateTime<Utc> {
            Utc::now()
        }
    }
}

/// Error types shared by every storage layer.
pub mod error {
    use thiserror::Error;

    /// Result type alias for repository and store operations.
    pub type Result<T> = std::result::Result<T, ResourceError>;

    /// Errors a repository, store, or service can surface to a handler.
    ///
    /// Storage layers return these as-is; services pass them through
    /// unchanged. Nothing retries.
    #[derive(Debug, Error, Clone, PartialEq, Eq)]
    pub enum ResourceError {
        /// Required input was missing or malformed.
        #[error("{0}")]
        Validation(String),

        /// No entity with the given identifier exists.
        #[error("{resource} with id {id} not found")]
        NotFound {
            /// Entity family, e.g. `"Product"`
            resource: &'static str,
            /// The identifier that was looked up
            id: String,
        },

        /// The backing store failed to read or write.
        #[error("Storage error: {0}")]
        Storage(String),
    }

    impl ResourceError {
        /// Build a [`ResourceError::NotFound`] for `resource` and `id`.
        #[must_use]
        pub fn not_found(resource: &'static str, id: impl std::fmt::Display) -> Self {
            Self::NotFound {
                resource,
                id: id.to_string(),
            }
        }

        /// Returns `true` for [`ResourceError::NotFound`].
        #[must_use]
        pub const fn is_not_found(&self) -> bool {
            matches!(self, Self::NotFound { .. })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_display_names_resource_and_id() {
        let err = ResourceError::not_found("Product", "42");
        assert_eq!(err.to_string(), "Product with id 42 not found");
        assert!(err.is_not_found());
    }

    #[test]
    fn validation_display_is_the_message() {
        let err = ResourceError::Validation("title is required".to_string());
        assert_eq!(err.to_string(), "title is required");
        assert!(!err.is_not_found());
    }

    #[test]
    fn storage_display_is_prefixed() {
        let err = ResourceError::Storage("connection reset".to_string());
        assert_eq!(err.to_string(), "Storage error: connection reset");
    }
}

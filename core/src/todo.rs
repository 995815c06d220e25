//! Todo entity and the repository capability trait.
//!
//! # Invariant
//!
//! For every stored todo, `completed == true` exactly when `completed_at` is
//! `Some`. Repositories keep it on `create` and `toggle`; the service keeps it on
//! `update` by deriving `completed_at` itself.
//!
//! # Implementations
//!
//! - `PostgresTodoRepository` (in `todo`): the relational backend
//! - `InMemoryTodoRepository` (in `resource-testing`): fast, deterministic tests

use crate::error::{ResourceError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::future::Future;
use std::pin::Pin;

/// Database-assigned todo identifier (monotonic, starts at 1).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(i32);

impl TodoId {
    /// Wrap a raw identifier.
    #[must_use]
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    /// Returns the raw identifier
    #[must_use]
    pub const fn as_i32(&self) -> i32 {
        self.0
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single todo row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Unique identifier
    pub id: TodoId,
    /// Title of the todo (never blank)
    pub title: String,
    /// Whether the todo is completed
    pub completed: bool,
    /// When the todo was created
    pub created_at: DateTime<Utc>,
    /// When the todo was completed (present iff `completed`)
    pub completed_at: Option<DateTime<Utc>>,
}

impl Todo {
    /// Check the completion invariant.
    #[must_use]
    pub const fn is_consistent(&self) -> bool {
        self.completed == self.completed_at.is_some()
    }

    /// Reject titles that are empty after trimming.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Validation`] for a blank title.
    pub fn validate_title(title: &str) -> Result<()> {
        if title.trim().is_empty() {
            return Err(ResourceError::Validation("title is required".to_string()));
        }
        Ok(())
    }
}

/// Boxed future returned by [`TodoRepository`] operations.
pub type RepositoryFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T>> + Send + 'a>>;

/// Storage operations for todos, independent of the backing medium.
///
/// Every call round-trips to storage; implementations hold no cached rows.
///
/// # Dyn Compatibility
///
/// This trait uses explicit `Pin<Box<dyn Future>>` returns instead of `async fn`
/// so the service can hold an `Arc<dyn TodoRepository>`.
pub trait TodoRepository: Send + Sync {
    /// List all todos ordered by id ascending. Empty storage yields an empty `Vec`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Storage`] if the read fails.
    fn list(&self) -> RepositoryFuture<'_, Vec<Todo>>;

    /// Insert a new, not-yet-completed todo stamped with the current time.
    ///
    /// # Errors
    ///
    /// - [`ResourceError::Validation`] if `title` is blank
    /// - [`ResourceError::Storage`] if the write fails
    fn create(&self, title: String) -> RepositoryFuture<'_, Todo>;

    /// Fetch one todo.
    ///
    /// # Errors
    ///
    /// - [`ResourceError::NotFound`] if no row has this id
    /// - [`ResourceError::Storage`] if the read fails
    fn get(&self, id: TodoId) -> RepositoryFuture<'_, Todo>;

    /// Replace title, completed flag and completion time of a row.
    ///
    /// The caller computes `completed_at`; the repository stores it verbatim.
    ///
    /// # Errors
    ///
    /// - [`ResourceError::NotFound`] if no row has this id
    /// - [`ResourceError::Storage`] if the write fails
    fn update(
        &self,
        id: TodoId,
        title: String,
        completed: bool,
        completed_at: Option<DateTime<Utc>>,
    ) -> RepositoryFuture<'_, Todo>;

    /// Remove a row.
    ///
    /// # Errors
    ///
    /// - [`ResourceError::NotFound`] if no row has this id
    /// - [`ResourceError::Storage`] if the write fails
    fn delete(&self, id: TodoId) -> RepositoryFuture<'_, ()>;

    /// Atomically flip `completed`, stamping `completed_at` on false→true and
    /// clearing it on true→false.
    ///
    /// # Errors
    ///
    /// - [`ResourceError::NotFound`] if no row has this id
    /// - [`ResourceError::Storage`] if the write fails
    fn toggle(&self, id: TodoId) -> RepositoryFuture<'_, Todo>;

    /// Check that the backing store is reachable.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Storage`] if it is not.
    fn ping(&self) -> RepositoryFuture<'_, ()>;
}

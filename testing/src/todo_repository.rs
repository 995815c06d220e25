//! In-memory `TodoRepository` for service and handler tests.

use chrono::{DateTime, Utc};
use resource_core::environment::Clock;
use resource_core::todo::RepositoryFuture;
use resource_core::{ResourceError, Todo, TodoId, TodoRepository};
use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::Mutex;

#[derive(Debug)]
struct Rows {
    next_id: i32,
    todos: BTreeMap<TodoId, Todo>,
}

/// `TodoRepository` backed by a `BTreeMap` behind a mutex.
///
/// Ids start at 1 and are never reused, like a `SERIAL` column. Timestamps
/// come from the injected clock. Each operation holds the lock for its whole
/// duration, so `toggle` is atomic with respect to concurrent reads.
///
/// Call [`InMemoryTodoRepository::set_unavailable`] to make every operation
/// fail with [`ResourceError::Storage`].
pub struct InMemoryTodoRepository {
    clock: Arc<dyn Clock>,
    rows: Mutex<Rows>,
    unavailable: AtomicBool,
}

impl InMemoryTodoRepository {
    /// Create an empty repository.
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            rows: Mutex::new(Rows {
                next_id: 1,
                todos: BTreeMap::new(),
            }),
            unavailable: AtomicBool::new(false),
        }
    }

    /// Simulate the backing store going away (or coming back).
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Number of stored todos.
    pub async fn len(&self) -> usize {
        self.rows.lock().await.todos.len()
    }

    /// Returns `true` when nothing is stored.
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    fn check_available(&self) -> Result<(), ResourceError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(ResourceError::Storage("in-memory store unavailable".to_string()));
        }
        Ok(())
    }
}

impl TodoRepository for InMemoryTodoRepository {
    fn list(&self) -> RepositoryFuture<'_, Vec<Todo>> {
        Box::pin(async move {
            self.check_available()?;
            let rows = self.rows.lock().await;
            Ok(rows.todos.values().cloned().collect())
        })
    }

    fn create(&self, title: String) -> RepositoryFuture<'_, Todo> {
        Box::pin(async move {
            Todo::validate_title(&title)?;
            self.check_available()?;

            let mut rows = self.rows.lock().await;
            let id = TodoId::new(rows.next_id);
            rows.next_id += 1;

            let todo = Todo {
                id,
                title,
                completed: false,
                created_at: self.clock.now(),
                completed_at: None,
            };
            rows.todos.insert(id, todo.clone());
            Ok(todo)
        })
    }

    fn get(&self, id: TodoId) -> RepositoryFuture<'_, Todo> {
        Box::pin(async move {
            self.check_available()?;
            let rows = self.rows.lock().await;
            rows.todos
                .get(&id)
                .cloned()
                .ok_or_else(|| ResourceError::not_found("Todo", id))
        })
    }

    fn update(
        &self,
        id: TodoId,
        title: String,
        completed: bool,
        completed_at: Option<DateTime<Utc>>,
    ) -> RepositoryFuture<'_, Todo> {
        Box::pin(async move {
            self.check_available()?;
            let mut rows = self.rows.lock().await;
            let todo = rows
                .todos
                .get_mut(&id)
                .ok_or_else(|| ResourceError::not_found("Todo", id))?;

            todo.title = title;
            todo.completed = completed;
            todo.completed_at = completed_at;
            Ok(todo.clone())
        })
    }

    fn delete(&self, id: TodoId) -> RepositoryFuture<'_, ()> {
        Box::pin(async move {
            self.check_available()?;
            let mut rows = self.rows.lock().await;
            rows.todos
                .remove(&id)
                .map(|_| ())
                .ok_or_else(|| ResourceError::not_found("Todo", id))
        })
    }

    fn toggle(&self, id: TodoId) -> RepositoryFuture<'_, Todo> {
        Box::pin(async move {
            self.check_available()?;
            let now = self.clock.now();
            let mut rows = self.rows.lock().await;
            let todo = rows
                .todos
                .get_mut(&id)
                .ok_or_else(|| ResourceError::not_found("Todo", id))?;

            todo.completed = !todo.completed;
            todo.completed_at = todo.completed.then_some(now);
            Ok(todo.clone())
        })
    }

    fn ping(&self) -> RepositoryFuture<'_, ()> {
        Box::pin(async move { self.check_available() })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)] // Test code can use unwrap/expect
mod tests {
    use super::*;
    use crate::test_clock;

    fn repo() -> InMemoryTodoRepository {
        InMemoryTodoRepository::new(Arc::new(test_clock()))
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let repo = repo();
        let first = repo.create("one".to_string()).await.unwrap();
        repo.delete(first.id).await.unwrap();
        let second = repo.create("two".to_string()).await.unwrap();

        assert_eq!(first.id, TodoId::new(1));
        assert_eq!(second.id, TodoId::new(2));
    }

    #[tokio::test]
    async fn toggle_keeps_invariant() {
        let repo = repo();
        let todo = repo.create("flip me".to_string()).await.unwrap();

        let on = repo.toggle(todo.id).await.unwrap();
        assert!(on.completed && on.is_consistent());

        let off = repo.toggle(todo.id).await.unwrap();
        assert!(!off.completed && off.is_consistent());
    }

    #[tokio::test]
    async fn unavailable_store_fails_with_storage_error() {
        let repo = repo();
        repo.set_unavailable(true);

        let err = repo.list().await.unwrap_err();
        assert!(matches!(err, ResourceError::Storage(_)));
        assert!(repo.ping().await.is_err());

        repo.set_unavailable(false);
        assert!(repo.ping().await.is_ok());
    }

    #[tokio::test]
    async fn missing_rows_are_not_found() {
        let repo = repo();
        assert!(repo.get(TodoId::new(9)).await.unwrap_err().is_not_found());
        assert!(repo.delete(TodoId::new(9)).await.unwrap_err().is_not_found());
        assert!(repo.toggle(TodoId::new(9)).await.unwrap_err().is_not_found());
        assert!(repo.is_empty().await);
    }
}

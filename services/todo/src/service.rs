//! Todo service layer.
//!
//! [`TodoService`] sits between the handlers and a [`TodoRepository`]. It
//! owns the one piece of policy the repository does not: deriving
//! `completed_at` when a caller sets the `completed` flag. Callers never
//! pass a completion time themselves.

use resource_core::environment::Clock;
use resource_core::{Result, Todo, TodoId, TodoRepository};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Partial update body for `PUT /todos/:id`.
///
/// Absent fields keep their stored value.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoPatch {
    /// New title.
    #[serde(default)]
    pub title: Option<String>,
    /// New completion flag.
    #[serde(default)]
    pub completed: Option<bool>,
}

/// Todo use cases over a pluggable repository.
#[derive(Clone)]
pub struct TodoService {
    repo: Arc<dyn TodoRepository>,
    clock: Arc<dyn Clock>,
}

impl TodoService {
    /// Create a service over `repo`, stamping completion times from `clock`.
    #[must_use]
    pub fn new(repo: Arc<dyn TodoRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repo, clock }
    }

    /// All todos, ordered by id.
    ///
    /// # Errors
    ///
    /// Propagates repository errors unchanged.
    pub async fn list(&self) -> Result<Vec<Todo>> {
        self.repo.list().await
    }

    /// Create an open todo.
    ///
    /// # Errors
    ///
    /// `Validation` for a blank title, otherwise repository errors.
    pub async fn create(&self, title: String) -> Result<Todo> {
        let todo = self.repo.create(title).await?;
        metrics::counter!("todo.created").increment(1);
        tracing::info!(todo_id = %todo.id, "Todo created");
        Ok(todo)
    }

    /// One todo.
    ///
    /// # Errors
    ///
    /// `NotFound` if absent, otherwise repository errors.
    pub async fn get(&self, id: TodoId) -> Result<Todo> {
        self.repo.get(id).await
    }

    /// Set title and completion flag, deriving `completed_at`.
    ///
    /// - false→true stamps the current time
    /// - true→true keeps the stored completion time
    /// - anything→false clears it
    ///
    /// # Errors
    ///
    /// `Validation` for a blank title, `NotFound` if absent, otherwise
    /// repository errors.
    pub async fn update(&self, id: TodoId, title: String, completed: bool) -> Result<Todo> {
        Todo::validate_title(&title)?;
        let current = self.repo.get(id).await?;
        self.write(current, title, completed).await
    }

    /// Merge `patch` onto the stored todo and save it through [`Self::update`]'s
    /// completion policy.
    ///
    /// # Errors
    ///
    /// `Validation` if the resulting title is blank, `NotFound` if absent,
    /// otherwise repository errors.
    pub async fn apply_patch(&self, id: TodoId, patch: TodoPatch) -> Result<Todo> {
        let current = self.repo.get(id).await?;
        let title = patch.title.unwrap_or_else(|| current.title.clone());
        let completed = patch.completed.unwrap_or(current.completed);

        Todo::validate_title(&title)?;
        self.write(current, title, completed).await
    }

    async fn write(&self, current: Todo, title: String, completed: bool) -> Result<Todo> {
        let completed_at = match (current.completed_at, completed) {
            (_, false) => None,
            (Some(at), true) => Some(at),
            (None, true) => Some(self.clock.now()),
        };

        let todo = self
            .repo
            .update(current.id, title, completed, completed_at)
            .await?;
        tracing::debug!(todo_id = %todo.id, completed = todo.completed, "Todo updated");
        Ok(todo)
    }

    /// Delete a todo.
    ///
    /// # Errors
    ///
    /// `NotFound` if absent, otherwise repository errors.
    pub async fn delete(&self, id: TodoId) -> Result<()> {
        self.repo.delete(id).await?;
        tracing::info!(todo_id = %id, "Todo deleted");
        Ok(())
    }

    /// Flip the completion flag atomically in storage.
    ///
    /// # Errors
    ///
    /// `NotFound` if absent, otherwise repository errors.
    pub async fn toggle(&self, id: TodoId) -> Result<Todo> {
        let todo = self.repo.toggle(id).await?;
        metrics::counter!("todo.toggled").increment(1);
        tracing::debug!(todo_id = %todo.id, completed = todo.completed, "Todo toggled");
        Ok(todo)
    }

    /// Check that storage is reachable.
    ///
    /// # Errors
    ///
    /// `Storage` if it is not.
    pub async fn ping(&self) -> Result<()> {
        self.repo.ping().await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)] // Test code can use unwrap/expect
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use resource_core::ResourceError;
    use resource_testing::{FixedClock, InMemoryTodoRepository, test_clock};

    fn service_with(clock: FixedClock) -> (TodoService, Arc<InMemoryTodoRepository>) {
        let clock: Arc<dyn Clock> = Arc::new(clock);
        let repo = Arc::new(InMemoryTodoRepository::new(Arc::clone(&clock)));
        (TodoService::new(repo.clone(), clock), repo)
    }

    fn service() -> TodoService {
        service_with(test_clock()).0
    }

    #[tokio::test]
    async fn create_starts_open() {
        let service = service();
        let todo = service.create("Buy milk".to_string()).await.unwrap();

        assert!(!todo.completed);
        assert_eq!(todo.completed_at, None);
        assert!(todo.is_consistent());
    }

    #[tokio::test]
    async fn create_rejects_blank_title() {
        let service = service();
        let err = service.create("  ".to_string()).await.unwrap_err();
        assert!(matches!(err, ResourceError::Validation(_)));
        assert!(service.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_stamps_completion_time() {
        let service = service();
        let todo = service.create("Buy milk".to_string()).await.unwrap();

        let done = service
            .update(todo.id, "Buy oat milk".to_string(), true)
            .await
            .unwrap();

        assert_eq!(done.title, "Buy oat milk");
        assert!(done.completed);
        assert_eq!(done.completed_at, Some(test_clock().now()));

        let reopened = service
            .update(todo.id, "Buy oat milk".to_string(), false)
            .await
            .unwrap();
        assert!(!reopened.completed);
        assert_eq!(reopened.completed_at, None);
    }

    #[tokio::test]
    async fn resaving_completed_todo_keeps_completion_time() {
        let earlier = FixedClock::new(Utc::now() - Duration::hours(1));
        let (service, repo) = service_with(earlier.clone());
        let todo = service.create("Write report".to_string()).await.unwrap();
        service.toggle(todo.id).await.unwrap();

        let later = TodoService::new(repo, Arc::new(FixedClock::new(Utc::now())));
        let saved = later
            .update(todo.id, "Write final report".to_string(), true)
            .await
            .unwrap();

        assert_eq!(saved.completed_at, Some(earlier.now()));
    }

    #[tokio::test]
    async fn update_rejects_blank_title_without_writing() {
        let service = service();
        let todo = service.create("Keep me".to_string()).await.unwrap();

        let err = service.update(todo.id, String::new(), true).await.unwrap_err();
        assert!(matches!(err, ResourceError::Validation(_)));
        assert_eq!(service.get(todo.id).await.unwrap(), todo);
    }

    #[tokio::test]
    async fn patch_merges_absent_fields() {
        let service = service();
        let todo = service.create("Buy milk".to_string()).await.unwrap();

        let patched = service
            .apply_patch(
                todo.id,
                TodoPatch {
                    completed: Some(true),
                    ..TodoPatch::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(patched.title, "Buy milk");
        assert!(patched.completed && patched.is_consistent());

        let renamed = service
            .apply_patch(
                todo.id,
                TodoPatch {
                    title: Some("Buy bread".to_string()),
                    completed: None,
                },
            )
            .await
            .unwrap();
        assert_eq!(renamed.title, "Buy bread");
        assert_eq!(renamed.completed_at, patched.completed_at);
    }

    #[tokio::test]
    async fn toggle_twice_restores_original_state() {
        let service = service();
        let todo = service.create("Flip".to_string()).await.unwrap();

        let on = service.toggle(todo.id).await.unwrap();
        assert!(on.completed);
        assert!(on.completed_at.unwrap() >= todo.created_at);

        let off = service.toggle(todo.id).await.unwrap();
        assert!(!off.completed);
        assert_eq!(off.completed_at, None);
    }

    #[tokio::test]
    async fn missing_ids_are_not_found() {
        let service = service();
        let id = TodoId::new(404);

        assert!(service.get(id).await.unwrap_err().is_not_found());
        assert!(service.update(id, "x".to_string(), false).await.unwrap_err().is_not_found());
        assert!(service.apply_patch(id, TodoPatch::default()).await.unwrap_err().is_not_found());
        assert!(service.delete(id).await.unwrap_err().is_not_found());
        assert!(service.toggle(id).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn storage_errors_pass_through() {
        let (service, repo) = service_with(test_clock());
        repo.set_unavailable(true);

        assert!(matches!(service.list().await, Err(ResourceError::Storage(_))));
        assert!(matches!(service.ping().await, Err(ResourceError::Storage(_))));
    }
}

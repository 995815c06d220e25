//! Todo-list service backed by PostgreSQL.
//!
//! Layers, outermost first:
//!
//! 1. [`router`] / [`handlers`]: HTTP shape, status codes
//! 2. [`service::TodoService`]: completion-time policy
//! 3. [`resource_core::TodoRepository`]: storage contract, implemented by
//!    [`repository::PostgresTodoRepository`]
//!
//! The service holds an `Arc<dyn TodoRepository>`, so tests run the same
//! handlers against `resource_testing::InMemoryTodoRepository`.

pub mod config;
pub mod handlers;
pub mod repository;
pub mod router;
pub mod service;

pub use config::Config;
pub use repository::PostgresTodoRepository;
pub use router::todo_router;
pub use service::{TodoPatch, TodoService};

//! Point-of-sale service: products, orders and customers in process memory.
//!
//! The whole state lives in one [`PosStore`]. Recording an order and
//! deducting stock for its line items happen under the store's write lock,
//! so concurrent requests never observe an order without its stock
//! adjustment, and never receive the same id.
//!
//! # Example Usage
//!
//! ```
//! use pos::{PosStore, ProductInput};
//! use pos::types::{OrderInput, OrderItem};
//! use resource_core::environment::SystemClock;
//! use std::sync::Arc;
//!
//! # tokio_test::block_on(async {
//! let store = PosStore::seeded(Arc::new(SystemClock));
//! let widget = store
//!     .create_product(ProductInput {
//!         name: "Widget".into(),
//!         price: 9.99,
//!         category: "Tools".into(),
//!         stock: 10,
//!     })
//!     .await;
//! assert_eq!(widget.id, "6");
//!
//! store
//!     .create_order(OrderInput {
//!         items: vec![OrderItem { product_id: "6".into(), quantity: 3, price: 9.99 }],
//!         ..OrderInput::default()
//!     })
//!     .await;
//! assert_eq!(store.product("6").await.unwrap().stock, 7);
//! # });
//! ```

pub mod config;
pub mod handlers;
pub mod router;
pub mod store;
pub mod types;

pub use config::Config;
pub use router::pos_router;
pub use store::PosStore;
pub use types::{Customer, CustomerInput, Order, OrderInput, OrderItem, Product, ProductInput};

//! In-memory point-of-sale store.
//!
//! [`PosStore`] owns every product, order and customer for the life of the
//! process. All three collections and their id counters sit behind a single
//! `tokio::sync::RwLock`, so:
//!
//! - id assignment and the append that follows happen under one write lock,
//!   and ids are never handed out twice
//! - order fulfillment (record the order, then adjust stock for each line)
//!   is one critical section
//! - readers always see a state between two complete writes
//!
//! Lock hold time is one scan of one collection; nothing awaits while a
//! guard is held.

use crate::types::{
    Customer, CustomerInput, Order, OrderInput, OrderStatus, Product, ProductInput,
};
use chrono::{DateTime, Utc};
use resource_core::environment::Clock;
use resource_core::{ResourceError, Result};
use std::sync::Arc;
use tokio::sync::RwLock;

/// First order sequence number; orders are `ORD-1000`, `ORD-1001`, ...
const FIRST_ORDER_SEQ: u64 = 1000;

/// Demo catalog loaded by [`PosStore::seeded`].
const SEED_CATALOG: [(&str, f64, &str, i64); 5] = [
    ("Coffee Beans", 12.99, "Beverages", 150),
    ("Espresso Cup", 8.49, "Accessories", 45),
    ("Tea Leaves", 6.99, "Beverages", 200),
    ("Milk Frother", 34.99, "Equipment", 12),
    ("Sugar Cubes", 3.99, "Supplies", 500),
];

/// Everything guarded by the store lock.
#[derive(Debug, Clone)]
struct Inventory {
    products: Vec<Product>,
    orders: Vec<Order>,
    customers: Vec<Customer>,
    next_product_id: u64,
    next_customer_id: u64,
    next_order_seq: u64,
}

impl Inventory {
    const fn new() -> Self {
        Self {
            products: Vec::new(),
            orders: Vec::new(),
            customers: Vec::new(),
            next_product_id: 1,
            next_customer_id: 1,
            next_order_seq: FIRST_ORDER_SEQ,
        }
    }

    fn add_product(&mut self, input: ProductInput) -> Product {
        let id = self.next_product_id.to_string();
        self.next_product_id += 1;

        let product = Product::from_input(id, input);
        self.products.push(product.clone());
        product
    }

    fn add_customer(&mut self, input: CustomerInput, now: DateTime<Utc>) -> Customer {
        let id = self.next_customer_id.to_string();
        self.next_customer_id += 1;

        let customer = Customer::from_input(id, input, now);
        self.customers.push(customer.clone());
        customer
    }

    /// Record an order and deduct each line's quantity from the matching
    /// product. Lines whose product does not exist are left unapplied.
    fn fulfill(&mut self, input: OrderInput, now: DateTime<Utc>) -> Order {
        let id = format!("ORD-{}", self.next_order_seq);
        self.next_order_seq += 1;

        let order = Order {
            id,
            customer_id: input.customer_id,
            items: input.items,
            total: input.total,
            tax: input.tax,
            payment_method: input.payment_method,
            status: OrderStatus::Completed,
            created_at: now,
        };
        self.orders.push(order.clone());

        for item in &order.items {
            match self.products.iter_mut().find(|p| p.id == item.product_id) {
                Some(product) => {
                    // Two's-complement wrap; quantities are unchecked client input.
                    product.stock = product.stock.wrapping_sub(item.quantity);
                    tracing::debug!(
                        order_id = %order.id,
                        product_id = %product.id,
                        quantity = item.quantity,
                        stock = product.stock,
                        "Deducted stock"
                    );
                }
                None => {
                    tracing::warn!(
                        order_id = %order.id,
                        product_id = %item.product_id,
                        quantity = item.quantity,
                        "Order item references unknown product; stock not adjusted"
                    );
                    metrics::counter!("pos.order_items.unmatched").increment(1);
                }
            }
        }

        order
    }
}

/// Shared, lock-guarded store for the point-of-sale API.
///
/// Construct once per process (or per test) and share through `Arc`.
///
/// # Example
///
/// ```
/// use pos::store::PosStore;
/// use pos::types::{OrderInput, OrderItem};
/// use resource_core::environment::SystemClock;
/// use std::sync::Arc;
///
/// # tokio_test::block_on(async {
/// let store = PosStore::seeded(Arc::new(SystemClock));
/// let order = store
///     .create_order(OrderInput {
///         items: vec![OrderItem { product_id: "1".into(), quantity: 2, price: 12.99 }],
///         ..OrderInput::default()
///     })
///     .await;
///
/// assert_eq!(order.id, "ORD-1000");
/// assert_eq!(store.product("1").await.unwrap().stock, 148);
/// # });
/// ```
pub struct PosStore {
    inventory: RwLock<Inventory>,
    clock: Arc<dyn Clock>,
}

impl PosStore {
    /// Create an empty store.
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            inventory: RwLock::new(Inventory::new()),
            clock,
        }
    }

    /// Create a store holding the five-product demo catalog (ids `"1"` to `"5"`).
    #[must_use]
    pub fn seeded(clock: Arc<dyn Clock>) -> Self {
        let mut inventory = Inventory::new();
        for (name, price, category, stock) in SEED_CATALOG {
            inventory.add_product(ProductInput {
                name: name.to_string(),
                price,
                category: category.to_string(),
                stock,
            });
        }

        Self {
            inventory: RwLock::new(inventory),
            clock,
        }
    }

    // ========== Products ==========

    /// Snapshot of the catalog in insertion order.
    pub async fn products(&self) -> Vec<Product> {
        self.inventory.read().await.products.clone()
    }

    /// Look up one product.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if no product has this id.
    pub async fn product(&self, id: &str) -> Result<Product> {
        self.inventory
            .read()
            .await
            .products
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| ResourceError::not_found("Product", id))
    }

    /// Add a product under the next free id.
    pub async fn create_product(&self, input: ProductInput) -> Product {
        let product = self.inventory.write().await.add_product(input);

        metrics::counter!("pos.products.created").increment(1);
        tracing::info!(product_id = %product.id, name = %product.name, "Product created");
        product
    }

    /// Replace every field of a product except its id.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if no product has this id.
    pub async fn update_product(&self, id: &str, input: ProductInput) -> Result<Product> {
        let mut inventory = self.inventory.write().await;
        let slot = inventory
            .products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| ResourceError::not_found("Product", id))?;

        *slot = Product::from_input(id.to_string(), input);
        tracing::debug!(product_id = %id, "Product replaced");
        Ok(slot.clone())
    }

    /// Remove a product. Orders that reference it are untouched.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if no product has this id.
    pub async fn delete_product(&self, id: &str) -> Result<()> {
        let mut inventory = self.inventory.write().await;
        let index = inventory
            .products
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| ResourceError::not_found("Product", id))?;

        inventory.products.remove(index);
        tracing::info!(product_id = %id, "Product deleted");
        Ok(())
    }

    // ========== Orders ==========

    /// Snapshot of all orders in creation order.
    pub async fn orders(&self) -> Vec<Order> {
        self.inventory.read().await.orders.clone()
    }

    /// Look up one order.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if no order has this id.
    pub async fn order(&self, id: &str) -> Result<Order> {
        self.inventory
            .read()
            .await
            .orders
            .iter()
            .find(|o| o.id == id)
            .cloned()
            .ok_or_else(|| ResourceError::not_found("Order", id))
    }

    /// Record an order and deduct stock for its line items, atomically.
    ///
    /// Quantities are not validated and stock may go negative; deductions wrap
    /// rather than overflow, so no line can abort the batch. A line item
    /// whose `product_id` matches no product is kept on the order but
    /// adjusts nothing (logged at `warn`).
    pub async fn create_order(&self, input: OrderInput) -> Order {
        let now = self.clock.now();
        let order = self.inventory.write().await.fulfill(input, now);

        metrics::counter!("pos.orders.created").increment(1);
        tracing::info!(
            order_id = %order.id,
            items = order.items.len(),
            total = order.total,
            "Order created"
        );
        order
    }

    // ========== Customers ==========

    /// Snapshot of all customers in registration order.
    pub async fn customers(&self) -> Vec<Customer> {
        self.inventory.read().await.customers.clone()
    }

    /// Look up one customer.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if no customer has this id.
    pub async fn customer(&self, id: &str) -> Result<Customer> {
        self.inventory
            .read()
            .await
            .customers
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or_else(|| ResourceError::not_found("Customer", id))
    }

    /// Register a customer under the next free id.
    pub async fn create_customer(&self, input: CustomerInput) -> Customer {
        let now = self.clock.now();
        let customer = self.inventory.write().await.add_customer(input, now);

        metrics::counter!("pos.customers.created").increment(1);
        tracing::info!(customer_id = %customer.id, "Customer created");
        customer
    }

    /// Replace a customer's contact fields. `id` and `created_at` are kept.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if no customer has this id.
    pub async fn update_customer(&self, id: &str, input: CustomerInput) -> Result<Customer> {
        let mut inventory = self.inventory.write().await;
        let slot = inventory
            .customers
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| ResourceError::not_found("Customer", id))?;

        *slot = Customer::from_input(id.to_string(), input, slot.created_at);
        tracing::debug!(customer_id = %id, "Customer replaced");
        Ok(slot.clone())
    }

    /// Remove a customer. Orders that reference it are untouched.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if no customer has this id.
    pub async fn delete_customer(&self, id: &str) -> Result<()> {
        let mut inventory = self.inventory.write().await;
        let index = inventory
            .customers
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| ResourceError::not_found("Customer", id))?;

        inventory.customers.remove(index);
        tracing::info!(customer_id = %id, "Customer deleted");
        Ok(())
    }
}

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use checkout_types::domain::order::{Order, OrderId};
use checkout_types::ports::order_repository::{OrderRepository, RepoError};
use tokio::sync::RwLock;

/// In-memory order store. Cloning yields another handle onto the same map.
#[derive(Clone)]
pub struct InMemoryRepo {
    orders: Arc<RwLock<BTreeMap<OrderId, Order>>>,
}

impl InMemoryRepo {
    pub fn new() -> Self {
        Self {
            orders: Arc::new(RwLock::new(BTreeMap::new())),
        }
    }
}

impl Default for InMemoryRepo {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OrderRepository for InMemoryRepo {
    async fn save(&self, order: Order) -> Result<(), RepoError> {
        let mut orders = self.orders.write().await;
        if orders.contains_key(&order.id) {
            return Err(RepoError::Constraint(format!(
                "order id {} already taken",
                order.id
            )));
        }
        orders.insert(order.id, order);
        Ok(())
    }

    async fn find_by_id(&self, id: OrderId) -> Result<Option<Order>, RepoError> {
        Ok(self.orders.read().await.get(&id).cloned())
    }

    async fn delete(&self, order: &Order) -> Result<(), RepoError> {
        let mut orders = self.orders.write().await;
        if orders.remove(&order.id).is_none() {
            return Err(RepoError::Constraint(format!(
                "order {} is not persisted",
                order.id
            )));
        }
        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<Order>, RepoError> {
        // BTreeMap iteration keeps find_all in ascending-id order.
        Ok(self.orders.read().await.values().cloned().collect())
    }
}

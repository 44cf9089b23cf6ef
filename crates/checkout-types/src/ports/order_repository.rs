use async_trait::async_trait;

use crate::domain::order::{Order, OrderId};

#[derive(thiserror::Error, Debug)]
pub enum RepoError {
    #[error("constraint violation: {0}")]
    Constraint(String),
    #[error("storage error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait OrderRepository: Send + Sync + 'static {
    /// Persists `order`. Fails with a `Constraint` fault when the store
    /// rejects it, e.g. an id that is already taken.
    async fn save(&self, order: Order) -> Result<(), RepoError>;
    async fn find_by_id(&self, id: OrderId) -> Result<Option<Order>, RepoError>;
    /// Removes a previously persisted entity. Rejected deletions are faults,
    /// not a quiet no-op.
    async fn delete(&self, order: &Order) -> Result<(), RepoError>;
    /// All persisted orders, in the store's stable iteration order.
    async fn find_all(&self) -> Result<Vec<Order>, RepoError>;
}

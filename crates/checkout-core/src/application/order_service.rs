use checkout_types::domain::order::{Order, OrderId};
use checkout_types::ports::order_repository::OrderRepository;
use checkout_types::ports::payment_processor::PaymentProcessor;

use crate::errors::AppError;

/// Orchestrates order placement, lookup, cancellation and listing.
///
/// The service holds no state of its own; both collaborators are injected
/// and every fault they raise is surfaced to the caller untouched.
pub struct OrderService<R: OrderRepository, P: PaymentProcessor> {
    repo: R,
    payments: P,
}

impl<R: OrderRepository, P: PaymentProcessor> OrderService<R, P> {
    pub fn new(repo: R, payments: P) -> Self {
        Self { repo, payments }
    }

    /// Persists the order, then asks the processor to authorize exactly its
    /// amount. The save is unconditional: a declined charge leaves the order
    /// in the store and no compensation runs.
    pub async fn place_order(&self, order: Order) -> Result<bool, AppError> {
        let amount = order.amount;
        self.repo.save(order).await?;
        Ok(self.payments.process_payment(amount).await?)
    }

    pub async fn get_order(&self, id: OrderId) -> Result<Order, AppError> {
        match self.repo.find_by_id(id).await? {
            Some(order) => Ok(order),
            None => Err(AppError::NotFound(id)),
        }
    }

    /// Cancelling an id that was never persisted is the caller's mistake and
    /// reported as an invalid argument, not as a missing-row outcome.
    pub async fn cancel_order(&self, id: OrderId) -> Result<(), AppError> {
        let Some(order) = self.repo.find_by_id(id).await? else {
            return Err(AppError::InvalidArgument(format!(
                "cannot cancel unknown order {id}"
            )));
        };
        self.repo.delete(&order).await?;
        Ok(())
    }

    pub async fn list_orders(&self) -> Result<Vec<Order>, AppError> {
        Ok(self.repo.find_all().await?)
    }
}

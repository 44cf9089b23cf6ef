use checkout_types::domain::order::OrderId;
use checkout_types::ports::order_repository::RepoError;
use checkout_types::ports::payment_processor::PaymentError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("order not found: {0}")]
    NotFound(OrderId),

    #[error(transparent)]
    Repo(#[from] RepoError),

    #[error(transparent)]
    Payment(#[from] PaymentError),
}

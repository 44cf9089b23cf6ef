use async_trait::async_trait;
use rust_decimal::Decimal;

#[derive(thiserror::Error, Debug)]
pub enum PaymentError {
    #[error("gateway error: {0}")]
    Gateway(String),
}

#[async_trait]
pub trait PaymentProcessor: Send + Sync + 'static {
    /// Asks the gateway to authorize a charge of exactly `amount`.
    /// `Ok(false)` is a business decline, not a fault.
    async fn process_payment(&self, amount: Decimal) -> Result<bool, PaymentError>;
}

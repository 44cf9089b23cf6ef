use async_trait::async_trait;
use checkout_types::ports::payment_processor::{PaymentError, PaymentProcessor};
use rust_decimal::Decimal;

/// Payment gateway that authorizes charges up to a configured limit and
/// declines anything above it.
#[derive(Clone)]
pub struct LimitGateway {
    limit: Decimal,
}

impl LimitGateway {
    pub fn new(limit: Decimal) -> Self {
        Self { limit }
    }

    /// Gateway that approves every well-formed charge.
    pub fn unbounded() -> Self {
        Self {
            limit: Decimal::MAX,
        }
    }
}

#[async_trait]
impl PaymentProcessor for LimitGateway {
    async fn process_payment(&self, amount: Decimal) -> Result<bool, PaymentError> {
        if amount.is_sign_negative() {
            return Err(PaymentError::Gateway(format!(
                "malformed charge amount {amount}"
            )));
        }
        Ok(amount <= self.limit)
    }
}

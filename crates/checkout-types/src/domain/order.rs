use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub type OrderId = i64;

/// An order as placed by a caller: an identifier chosen up front and the
/// amount the payment processor will be asked to authorize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub amount: Decimal,
}

impl Order {
    pub fn new(id: OrderId, amount: Decimal) -> anyhow::Result<Self> {
        if amount.is_sign_negative() {
            anyhow::bail!("amount must not be negative");
        }
        Ok(Self { id, amount })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_order_keeps_id_and_amount() {
        let order = Order::new(1, Decimal::new(100, 1)).unwrap();
        assert_eq!(order.id, 1);
        assert_eq!(order.amount, Decimal::new(100, 1));
    }

    #[test]
    fn zero_amount_is_a_valid_charge() {
        assert!(Order::new(7, Decimal::ZERO).is_ok());
    }

    #[test]
    fn negative_amount_is_rejected() {
        let res = Order::new(2, Decimal::new(-250, 2));
        assert!(res.is_err());
    }
}

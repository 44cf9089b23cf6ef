use anyhow::Context;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub payment_limit: Decimal,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let raw = env::var("PAYMENT_LIMIT").unwrap_or_else(|_| "500.00".into());
        let payment_limit = raw
            .parse::<Decimal>()
            .with_context(|| format!("invalid PAYMENT_LIMIT {raw:?}"))?;
        Ok(Self { payment_limit })
    }
}

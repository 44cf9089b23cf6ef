use checkout_core::application::order_service::OrderService;
use checkout_core::config::Config;
use checkout_core::domain::order::Order;
use checkout_core::errors::AppError;
use checkout_pay::LimitGateway;
use checkout_repo::memory::InMemoryRepo;
use rust_decimal::Decimal;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env for PAYMENT_LIMIT / RUST_LOG when present.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "debug".to_string()))
        .init();

    let config = Config::from_env()?;
    tracing::info!(limit = %config.payment_limit, "configured payment gateway");

    let repo = InMemoryRepo::new();
    let gateway = LimitGateway::new(config.payment_limit);
    let service = OrderService::new(repo, gateway);

    // Walk the service through its four operations once.
    let paid = service
        .place_order(Order::new(1, Decimal::new(2499, 2))?)
        .await?;
    tracing::info!(order_id = 1, paid, "placed order");

    let over_limit = config.payment_limit + Decimal::ONE;
    let paid = service.place_order(Order::new(2, over_limit)?).await?;
    tracing::info!(order_id = 2, paid, "placed order above the gateway limit");

    let first = service.get_order(1).await?;
    tracing::info!(order_id = first.id, amount = %first.amount, "fetched order");

    service.cancel_order(2).await?;
    match service.cancel_order(2).await {
        Err(AppError::InvalidArgument(reason)) => {
            tracing::warn!(%reason, "second cancel rejected");
        }
        other => anyhow::bail!("expected an invalid-argument error, got {other:?}"),
    }

    let remaining = service.list_orders().await?;
    println!("{}", serde_json::to_string_pretty(&remaining)?);
    Ok(())
}

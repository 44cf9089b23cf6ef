use checkout_core::application::order_service::OrderService;
use checkout_core::config::Config;
use checkout_pay::LimitGateway;
use checkout_repo::memory::InMemoryRepo;

#[tokio::test]
async fn wires_service_from_env_config() {
    let config = Config::from_env().expect("config");
    let service = OrderService::new(InMemoryRepo::new(), LimitGateway::new(config.payment_limit));

    // basic sanity: list should succeed and be empty
    let list = service.list_orders().await.expect("list");
    assert!(list.is_empty());
}

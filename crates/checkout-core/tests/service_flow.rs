use checkout_core::application::order_service::OrderService;
use checkout_core::errors::AppError;
use checkout_pay::LimitGateway;
use checkout_repo::memory::InMemoryRepo;
use checkout_types::domain::order::Order;
use rust_decimal::Decimal;

// End-to-end service flow against the real in-memory adapters.
#[tokio::test]
async fn place_get_list_cancel_flow() {
    let repo = InMemoryRepo::new();
    let svc = OrderService::new(repo.clone(), LimitGateway::new(Decimal::new(10000, 2)));

    let order = Order::new(1, Decimal::new(1000, 2)).unwrap();
    let paid = svc.place_order(order.clone()).await.unwrap();
    assert!(paid);

    let fetched = svc.get_order(1).await.unwrap();
    assert_eq!(fetched, order);

    let list = svc.list_orders().await.unwrap();
    assert_eq!(list, vec![order]);

    svc.cancel_order(1).await.unwrap();
    assert!(svc.list_orders().await.unwrap().is_empty());
}

#[tokio::test]
async fn declined_payment_leaves_the_order_persisted() {
    let svc = OrderService::new(InMemoryRepo::new(), LimitGateway::new(Decimal::new(500, 2)));

    let order = Order::new(2, Decimal::new(501, 2)).unwrap();
    let paid = svc.place_order(order.clone()).await.unwrap();
    assert!(!paid);

    // Save runs before the charge, so the declined order is still stored.
    assert_eq!(svc.get_order(2).await.unwrap(), order);
}

#[tokio::test]
async fn replaying_an_order_id_faults_on_the_second_save() {
    let svc = OrderService::new(InMemoryRepo::new(), LimitGateway::unbounded());
    let order = Order::new(3, Decimal::new(250, 2)).unwrap();
    svc.place_order(order.clone()).await.unwrap();

    let res = svc.place_order(order).await;
    assert!(matches!(res, Err(AppError::Repo(_))));
}

#[tokio::test]
async fn unknown_ids_surface_as_typed_errors() {
    let svc = OrderService::new(InMemoryRepo::new(), LimitGateway::unbounded());

    let missing = svc.get_order(9).await;
    assert!(matches!(missing, Err(AppError::NotFound(9))));

    let cancelled = svc.cancel_order(9).await;
    assert!(matches!(cancelled, Err(AppError::InvalidArgument(_))));
}

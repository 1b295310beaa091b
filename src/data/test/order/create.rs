use super::*;

/// Tests creating a new order.
///
/// Verifies that the repository stamps the pending status and both
/// timestamps, and ties the order to the given customer.
///
/// Expected: Ok with status pending and matching fields
#[tokio::test]
async fn creates_order_with_pending_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Order)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_customer(db).await?;

    let repo = OrderRepository::new(db);
    let order = repo
        .create(
            user.id,
            CreateOrderParams {
                service_type: ServiceType::Wash,
                pickup_address: "1 Main St".to_string(),
                delivery_address: "2 Oak Ave".to_string(),
                total_price: Decimal::new(1250, 2),
            },
        )
        .await?;

    assert_eq!(order.customer_id, user.id);
    assert_eq!(order.service_type, ServiceType::Wash);
    assert_eq!(order.status, OrderStatus::Pending);
    assert_eq!(order.pickup_address, "1 Main St");
    assert_eq!(order.delivery_address, "2 Oak Ave");
    assert_eq!(order.total_price, Decimal::new(1250, 2));
    assert_eq!(order.created_at, order.updated_at);

    Ok(())
}

use super::*;

/// Tests that a created order always belongs to the caller.
///
/// The creation parameters carry no owner field at all, so a spoofed
/// customer value in request input can never reach the data layer.
///
/// Expected: Ok with customer_id equal to the caller's id and status pending
#[tokio::test]
async fn assigns_caller_as_owner() -> Result<(), AppError> {
    let test = TestBuilder::new().with_core_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let alice = factory::user::create_customer(db).await?;

    let service = OrderService::new(db);
    let order = service
        .create(
            &caller_from(&alice),
            CreateOrderParams {
                service_type: ServiceType::Wash,
                pickup_address: "1 Main St".to_string(),
                delivery_address: "1 Main St".to_string(),
                total_price: Decimal::new(1250, 2),
            },
        )
        .await?;

    assert_eq!(order.customer_id, alice.id);
    assert_eq!(order.status, OrderStatus::Pending);
    assert_eq!(order.total_price, Decimal::new(1250, 2));

    Ok(())
}

/// Tests that an empty pickup address is rejected.
///
/// Expected: Err(AppError::BadRequest) naming the pickup_address field
#[tokio::test]
async fn rejects_empty_pickup_address() -> Result<(), AppError> {
    let test = TestBuilder::new().with_core_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let alice = factory::user::create_customer(db).await?;

    let service = OrderService::new(db);
    let result = service
        .create(
            &caller_from(&alice),
            CreateOrderParams {
                service_type: ServiceType::Iron,
                pickup_address: "   ".to_string(),
                delivery_address: "1 Main St".to_string(),
                total_price: Decimal::new(500, 2),
            },
        )
        .await;

    match result {
        Err(AppError::BadRequest(message)) => assert!(message.contains("pickup_address")),
        other => panic!("Expected BadRequest error, got: {:?}", other),
    }

    Ok(())
}

/// Tests that a negative total price is rejected.
///
/// Expected: Err(AppError::BadRequest) naming the total_price field
#[tokio::test]
async fn rejects_negative_total_price() -> Result<(), AppError> {
    let test = TestBuilder::new().with_core_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let alice = factory::user::create_customer(db).await?;

    let service = OrderService::new(db);
    let result = service
        .create(
            &caller_from(&alice),
            CreateOrderParams {
                service_type: ServiceType::Fold,
                pickup_address: "1 Main St".to_string(),
                delivery_address: "1 Main St".to_string(),
                total_price: Decimal::new(-100, 2),
            },
        )
        .await;

    match result {
        Err(AppError::BadRequest(message)) => assert!(message.contains("total_price")),
        other => panic!("Expected BadRequest error, got: {:?}", other),
    }

    Ok(())
}

use super::*;

/// Tests a partial update touching a subset of fields.
///
/// Verifies that only provided fields change, the status is untouched, and
/// updated_at is refreshed.
///
/// Expected: Ok(Some(Order)) with new delivery address and price, other
/// fields preserved, updated_at newer than created_at
#[tokio::test]
async fn updates_provided_fields_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Order)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_customer(db).await?;
    let entity = factory::order::OrderFactory::new(db, user.id)
        .created_at(Utc::now() - Duration::hours(1))
        .build()
        .await?;

    let repo = OrderRepository::new(db);
    let order = repo
        .update(
            entity.id,
            UpdateOrderParams {
                delivery_address: Some("9 Pine Rd".to_string()),
                total_price: Some(Decimal::new(2000, 2)),
                ..Default::default()
            },
        )
        .await?;

    assert!(order.is_some());
    let order = order.unwrap();
    assert_eq!(order.delivery_address, "9 Pine Rd");
    assert_eq!(order.total_price, Decimal::new(2000, 2));
    assert_eq!(order.pickup_address, entity.pickup_address);
    assert_eq!(order.service_type, ServiceType::Wash);
    assert_eq!(order.status, OrderStatus::Pending);
    assert!(order.updated_at > order.created_at);

    Ok(())
}

/// Tests updating an order that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Order)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = OrderRepository::new(db);
    let order = repo
        .update(
            9999,
            UpdateOrderParams {
                pickup_address: Some("1 Main St".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert!(order.is_none());

    Ok(())
}

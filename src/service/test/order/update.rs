use super::*;

/// Tests that a non-status update creates no notifications.
///
/// Verifies that the status-change event fires only for the restricted
/// status operation, never for ordinary field edits.
///
/// Expected: Ok with fields updated and zero notifications for the owner
#[tokio::test]
async fn updates_fields_without_dispatching_notifications() -> Result<(), AppError> {
    let test = TestBuilder::new().with_core_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, entity) = factory::helpers::create_order_with_owner(db).await?;

    let service = OrderService::new(db);
    let order = service
        .update(
            entity.id,
            UpdateOrderParams {
                delivery_address: Some("9 Pine Rd".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert!(order.is_some());
    assert_eq!(order.unwrap().delivery_address, "9 Pine Rd");

    let notifications = NotificationRepository::new(db).get_by_user(owner.id).await?;
    assert!(notifications.is_empty());

    Ok(())
}

/// Tests that a provided empty address is rejected on update.
///
/// Expected: Err(AppError::BadRequest) naming the delivery_address field
#[tokio::test]
async fn rejects_empty_provided_address() -> Result<(), AppError> {
    let test = TestBuilder::new().with_core_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, entity) = factory::helpers::create_order_with_owner(db).await?;

    let service = OrderService::new(db);
    let result = service
        .update(
            entity.id,
            UpdateOrderParams {
                delivery_address: Some(String::new()),
                ..Default::default()
            },
        )
        .await;

    match result {
        Err(AppError::BadRequest(message)) => assert!(message.contains("delivery_address")),
        other => panic!("Expected BadRequest error, got: {:?}", other),
    }

    Ok(())
}

/// Tests updating an order that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_order() -> Result<(), AppError> {
    let test = TestBuilder::new().with_core_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = OrderService::new(db);
    let order = service
        .update(
            9999,
            UpdateOrderParams {
                service_type: Some(ServiceType::DryClean),
                ..Default::default()
            },
        )
        .await?;

    assert!(order.is_none());

    Ok(())
}
